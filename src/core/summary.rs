use crate::domain::model::{Article, Comment, ReportRow, SummaryStats};

impl SummaryStats {
    pub fn compute(articles: &[Article], comments: &[Comment], rows: &[ReportRow]) -> Self {
        Self {
            total_articles: articles.len(),
            total_comments: comments.len(),
            articles_without_comments: rows.iter().filter(|r| r.comment_count == 0).count(),
        }
    }
}
