/// Ranked view of one bucket.
use crate::types::{Bucket, RankedItem};

/// The `n` highest-rated items of `bucket`, best first.
///
/// Ties keep bucket (catalog) order, since the sort is stable. Returns fewer
/// than `n` rows only when the bucket itself is smaller.
pub fn top_n(bucket: &Bucket, n: usize) -> Vec<RankedItem> {
    let mut rows: Vec<RankedItem> = bucket
        .iter()
        .map(|(item, rating)| RankedItem {
            item: item.to_string(),
            rating,
        })
        .collect();

    rows.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    rows.truncate(n);
    rows
}
