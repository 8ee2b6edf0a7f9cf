use crate::core::aggregator::Aggregates;
use crate::domain::model::{Article, ReportRow};
use std::cmp::Ordering;

/// Rounds the exact stored value to two decimals, halves away from zero.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    let mut rounded = scaled.round();

    // 乘以 100 時的捨入可能造出假的 .5，用 fma 取回誤差再決定方向
    if (scaled - scaled.trunc()).abs() == 0.5 {
        let residual = value.mul_add(100.0, -scaled);
        if residual != 0.0 && (residual > 0.0) != (scaled > 0.0) {
            rounded = scaled.trunc();
        }
    }

    rounded / 100.0
}

/// One row per article, in article order, then sorted by
/// `(comment_count, average_rating)` descending. The sort is stable.
pub fn build_report(articles: &[Article], aggregates: &Aggregates) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = articles
        .iter()
        .map(|article| {
            let (average, count) = match aggregates.get(&article.id) {
                Some(entry) if entry.count() > 0 => (entry.mean(), entry.count()),
                _ => (0.0, 0),
            };

            ReportRow {
                article_id: article.id.clone(),
                headline: article.headline.clone(),
                average_rating: round2(average),
                comment_count: count,
            }
        })
        .collect();

    rows.sort_by(rank);
    rows
}

fn rank(a: &ReportRow, b: &ReportRow) -> Ordering {
    b.comment_count
        .cmp(&a.comment_count)
        .then_with(|| b.average_rating.total_cmp(&a.average_rating))
}
