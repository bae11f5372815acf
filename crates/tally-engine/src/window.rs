//! Trailing-window selection over a newest-first page.

use tally_types::{Submission, TimeWindow};

/// The longest prefix of `items` whose timestamps fall inside `window`.
///
/// `items` must be ordered newest first. The scan stops at the first item
/// older than the cutoff and discards everything after it without looking,
/// so a misordered page may lose in-window items past that point. Nothing is
/// sorted here; see [`is_newest_first`] to check the precondition.
pub fn select<'a>(items: &'a [Submission], window: &TimeWindow) -> &'a [Submission] {
    let end = items
        .iter()
        .position(|item| !window.contains(item.created_at))
        .unwrap_or(items.len());
    &items[..end]
}

/// Returns `true` if `items` is ordered by non-increasing `created_at`.
pub fn is_newest_first(items: &[Submission]) -> bool {
    items
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use proptest::prelude::*;
    use tally_types::AuthorId;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    fn posted(hours_ago: i64) -> Submission {
        Submission::new(
            format!("s{hours_ago}"),
            AuthorId::account("amy"),
            now() - Duration::hours(hours_ago),
        )
    }

    fn ids(items: &[Submission]) -> Vec<&str> {
        items.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn stops_at_first_item_outside_one_day() {
        let page: Vec<_> = [1, 2, 25, 26, 200].into_iter().map(posted).collect();
        let window = TimeWindow::trailing(now(), Duration::days(1));
        assert_eq!(ids(select(&page, &window)), vec!["s1", "s2"]);
    }

    #[test]
    fn empty_page_selects_nothing() {
        let window = TimeWindow::trailing(now(), Duration::days(1));
        assert!(select(&[], &window).is_empty());
    }

    #[test]
    fn all_in_window_selects_everything() {
        let page: Vec<_> = [0, 3, 10].into_iter().map(posted).collect();
        let window = TimeWindow::trailing(now(), Duration::days(1));
        assert_eq!(select(&page, &window), page.as_slice());
    }

    #[test]
    fn first_item_too_old_selects_nothing() {
        let page: Vec<_> = [30, 40].into_iter().map(posted).collect();
        let window = TimeWindow::trailing(now(), Duration::days(1));
        assert!(select(&page, &window).is_empty());
    }

    #[test]
    fn item_exactly_at_cutoff_is_kept() {
        let page = vec![posted(24)];
        let window = TimeWindow::trailing(now(), Duration::hours(24));
        assert_eq!(select(&page, &window).len(), 1);
    }

    #[test]
    fn misordered_page_is_not_rescued() {
        // The 2h item after the 30h item is in the window but is never reached.
        let page: Vec<_> = [1, 30, 2].into_iter().map(posted).collect();
        assert!(!is_newest_first(&page));
        let window = TimeWindow::trailing(now(), Duration::days(1));
        assert_eq!(ids(select(&page, &window)), vec!["s1"]);
    }

    #[test]
    fn ordering_check() {
        let ordered: Vec<_> = [1, 1, 5, 9].into_iter().map(posted).collect();
        assert!(is_newest_first(&ordered));
        assert!(is_newest_first(&[]));
        assert!(is_newest_first(&ordered[..1]));
    }

    proptest! {
        #[test]
        fn selects_the_maximal_in_window_prefix(
            mut ages in prop::collection::vec(0i64..500, 0..30),
            lookback in 0i64..300,
        ) {
            ages.sort_unstable();
            let page: Vec<_> = ages.iter().copied().map(posted).collect();
            prop_assert!(is_newest_first(&page));

            let window = TimeWindow::trailing(now(), Duration::hours(lookback));
            let kept = select(&page, &window);

            prop_assert_eq!(kept, &page[..kept.len()]);
            prop_assert!(kept.iter().all(|s| s.created_at >= window.cutoff()));
            if let Some(next) = page.get(kept.len()) {
                prop_assert!(next.created_at < window.cutoff());
            }
        }
    }
}
