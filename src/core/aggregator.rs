use crate::domain::model::{AggregateEntry, Comment};
use std::collections::HashMap;

pub type Aggregates = HashMap<String, AggregateEntry>;

/// Groups comments by exact `article_id`, keeping ratings in input order.
/// Comments for unknown articles are grouped like any other.
pub fn aggregate(comments: &[Comment]) -> Aggregates {
    let mut groups = Aggregates::new();

    for comment in comments {
        groups
            .entry(comment.article_id.clone())
            .or_default()
            .push(comment.rating);
    }

    tracing::debug!(
        "Aggregated {} comments into {} article groups",
        comments.len(),
        groups.len()
    );
    groups
}
