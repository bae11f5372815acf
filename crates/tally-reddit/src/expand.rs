//! Placeholder expansion, separated from the HTTP client.

use tracing::{debug, warn};

use tally_engine::{SourceError, SourceResult};

use crate::endpoint::{strip_kind, MORE_CHILDREN_BATCH};
use crate::flatten::CommentCollector;
use crate::listing::{MoreChildrenResponse, ThreadResponse};

/// The two requests placeholder expansion needs.
pub(crate) trait ThreadFetcher {
    /// Re-read a thread rooted at `comment_id` ("continue this thread").
    fn continue_thread(
        &self,
        submission_id: &str,
        comment_id: &str,
    ) -> SourceResult<ThreadResponse>;

    /// Resolve a batch of at most [`MORE_CHILDREN_BATCH`] child ids.
    fn more_children(
        &self,
        submission_id: &str,
        children: &[String],
    ) -> SourceResult<MoreChildrenResponse>;
}

/// Resolve queued placeholders until none remain, or until `limit`
/// expansions have been made. Returns the number of expansions.
pub(crate) fn expand_thread<F: ThreadFetcher + ?Sized>(
    fetcher: &F,
    submission_id: &str,
    collector: &mut CommentCollector,
    limit: Option<usize>,
) -> SourceResult<usize> {
    let mut expansions = 0usize;
    while let Some(more) = collector.next_pending() {
        if let Some(limit) = limit {
            if expansions >= limit {
                let dropped = collector.discard_pending() + 1;
                warn!(
                    submission = submission_id,
                    limit, dropped, "expansion limit reached; thread is incomplete"
                );
                break;
            }
        }
        expansions += 1;
        debug!(
            submission = submission_id,
            placeholder = %more.id,
            count = more.count,
            "expanding"
        );

        if more.is_continue_thread() {
            let thread = fetcher.continue_thread(submission_id, strip_kind(&more.parent_id))?;
            collector.absorb(thread.1.data.children);
            continue;
        }

        for batch in more.children.chunks(MORE_CHILDREN_BATCH) {
            let response = fetcher.more_children(submission_id, batch)?;
            if !response.json.errors.is_empty() {
                return Err(SourceError::MalformedResponse(format!(
                    "morechildren for {submission_id}: {:?}",
                    response.json.errors
                )));
            }
            collector.absorb(response.into_things());
        }
    }
    debug!(
        submission = submission_id,
        expansions,
        comments = collector.len(),
        "thread flattened"
    );
    Ok(expansions)
}
