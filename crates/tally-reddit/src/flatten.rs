use std::collections::{HashSet, VecDeque};

use tally_types::Comment;

use crate::listing::{CommentNode, MoreData};

/// Accumulates a flat comment list from tree fragments.
///
/// Fragments arrive from the initial thread read and from each placeholder
/// expansion. Trees are walked breadth-first; placeholders are queued for the
/// caller to expand. A comment id is emitted at most once, and a placeholder
/// is handed out at most once, so overlapping fragments cannot double count
/// or loop.
#[derive(Debug, Default)]
pub struct CommentCollector {
    comments: Vec<Comment>,
    seen_comments: HashSet<String>,
    seen_placeholders: HashSet<String>,
    pending: VecDeque<MoreData>,
}

impl CommentCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a fragment of comment nodes into the collector.
    pub fn absorb(&mut self, nodes: Vec<CommentNode>) {
        let mut queue: VecDeque<CommentNode> = nodes.into();
        while let Some(node) = queue.pop_front() {
            match node {
                CommentNode::Comment(data) => {
                    if self.seen_comments.insert(data.id.clone()) {
                        self.comments.push(data.to_comment());
                    }
                    queue.extend(data.replies.into_children());
                }
                CommentNode::More(more) => {
                    if self.seen_placeholders.insert(more.key()) {
                        self.pending.push_back(more);
                    }
                }
            }
        }
    }

    /// Next placeholder awaiting expansion.
    pub fn next_pending(&mut self) -> Option<MoreData> {
        self.pending.pop_front()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drop every placeholder still queued.
    pub fn discard_pending(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn finish(self) -> Vec<Comment> {
        self.comments
    }
}

#[cfg(test)]
mod tests {
    use tally_types::AuthorId;

    use super::*;

    fn nodes(json: &str) -> Vec<CommentNode> {
        serde_json::from_str(json).unwrap()
    }

    const TREE: &str = r#"[
        { "kind": "t1", "data": { "id": "a", "author": "amy", "replies": {
            "kind": "Listing", "data": { "children": [
                { "kind": "t1", "data": { "id": "a1", "author": "bob", "replies": {
                    "kind": "Listing", "data": { "children": [
                        { "kind": "t1", "data": { "id": "a11", "author": "[deleted]", "replies": "" } }
                    ] } } } },
                { "kind": "more", "data": { "id": "m1", "parent_id": "t1_a", "children": ["a2", "a3"], "count": 2 } }
            ] } } } },
        { "kind": "t1", "data": { "id": "b", "author": "cy", "replies": "" } }
    ]"#;

    #[test]
    fn flattens_breadth_first() {
        let mut collector = CommentCollector::new();
        collector.absorb(nodes(TREE));
        let ids: Vec<_> = collector
            .comments
            .iter()
            .filter_map(|c| c.id.clone())
            .collect();
        assert_eq!(ids, vec!["a", "b", "a1", "a11"]);
        assert_eq!(collector.pending_len(), 1);
    }

    #[test]
    fn keeps_deleted_authors_as_sentinel() {
        let mut collector = CommentCollector::new();
        collector.absorb(nodes(TREE));
        let comments = collector.finish();
        let deleted: Vec<_> = comments
            .iter()
            .filter(|c| c.author == AuthorId::Unavailable)
            .collect();
        assert_eq!(deleted.len(), 1);
    }

    #[test]
    fn expansion_fragments_are_merged() {
        let mut collector = CommentCollector::new();
        collector.absorb(nodes(TREE));
        let more = collector.next_pending().unwrap();
        assert_eq!(more.children, vec!["a2", "a3"]);

        collector.absorb(nodes(
            r#"[
                { "kind": "t1", "data": { "id": "a2", "author": "amy", "replies": "" } },
                { "kind": "t1", "data": { "id": "a3", "author": "dee", "replies": "" } }
            ]"#,
        ));
        assert_eq!(collector.len(), 6);
        assert!(collector.next_pending().is_none());
    }

    #[test]
    fn repeated_comments_and_placeholders_are_ignored() {
        let mut collector = CommentCollector::new();
        collector.absorb(nodes(TREE));
        collector.absorb(nodes(TREE));
        assert_eq!(collector.len(), 4);
        assert_eq!(collector.pending_len(), 1);
    }

    #[test]
    fn continue_thread_root_is_not_counted_twice() {
        let mut collector = CommentCollector::new();
        collector.absorb(nodes(
            r#"[
                { "kind": "t1", "data": { "id": "deep", "author": "amy", "replies": {
                    "kind": "Listing", "data": { "children": [
                        { "kind": "more", "data": { "id": "_", "parent_id": "t1_deep", "children": [], "count": 0 } }
                    ] } } } }
            ]"#,
        ));
        let more = collector.next_pending().unwrap();
        assert!(more.is_continue_thread());

        // Re-reading the thread at `deep` returns `deep` again with its replies.
        collector.absorb(nodes(
            r#"[
                { "kind": "t1", "data": { "id": "deep", "author": "amy", "replies": {
                    "kind": "Listing", "data": { "children": [
                        { "kind": "t1", "data": { "id": "deeper", "author": "bob", "replies": "" } }
                    ] } } } }
            ]"#,
        ));
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn continue_thread_links_under_different_parents_are_distinct() {
        let mut collector = CommentCollector::new();
        collector.absorb(nodes(
            r#"[
                { "kind": "more", "data": { "id": "_", "parent_id": "t1_x", "children": [] } },
                { "kind": "more", "data": { "id": "_", "parent_id": "t1_y", "children": [] } },
                { "kind": "more", "data": { "id": "_", "parent_id": "t1_x", "children": [] } }
            ]"#,
        ));
        assert_eq!(collector.pending_len(), 2);
    }

    #[test]
    fn discard_pending_reports_dropped() {
        let mut collector = CommentCollector::new();
        collector.absorb(nodes(TREE));
        assert_eq!(collector.discard_pending(), 1);
        assert!(collector.next_pending().is_none());
        assert!(!collector.is_empty());
    }
}
