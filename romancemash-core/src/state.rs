/// The aggregate rating state: one bucket per (category, context) plus the
/// append-only vote log.
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::elo::apply_duel;
use crate::error::RankError;
use crate::types::{Bucket, BucketKey, VoteEvent, Winner};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    buckets: BTreeMap<BucketKey, Bucket>,
    votes: Vec<VoteEvent>,
}

impl State {
    /// Every bucket at the initial rating for every catalog item, no votes.
    pub fn new(catalog: &Catalog) -> Self {
        State {
            buckets: BucketKey::all().map(|key| (key, Bucket::new(catalog))).collect(),
            votes: Vec::new(),
        }
    }

    pub fn bucket(&self, key: BucketKey) -> Option<&Bucket> {
        self.buckets.get(&key)
    }

    pub fn buckets(&self) -> impl Iterator<Item = (BucketKey, &Bucket)> {
        self.buckets.iter().map(|(k, b)| (*k, b))
    }

    /// Vote log in the order votes were cast.
    pub fn votes(&self) -> &[VoteEvent] {
        &self.votes
    }

    /// Repair a loaded state so every bucket holds exactly the catalog items.
    /// Returns the number of buckets that had to change.
    pub fn reconcile(&mut self, catalog: &Catalog) -> usize {
        let mut repaired = 0;
        for key in BucketKey::all() {
            match self.buckets.get_mut(&key) {
                Some(bucket) => {
                    if bucket.reconcile(catalog) {
                        repaired += 1;
                    }
                }
                None => {
                    self.buckets.insert(key, Bucket::new(catalog));
                    repaired += 1;
                }
            }
        }
        repaired
    }

    /// Apply one duel outcome to the bucket at `key` and append it to the log.
    ///
    /// Nothing is mutated if the duel is rejected. Persisting is the caller's
    /// job (see `Session::record_vote`).
    pub fn record_vote(
        &mut self,
        key: BucketKey,
        item_a: &str,
        item_b: &str,
        winner: Winner,
        ts: DateTime<Utc>,
    ) -> Result<&VoteEvent, RankError> {
        let bucket = self
            .buckets
            .get_mut(&key)
            .ok_or_else(|| RankError::BadBucketKey(key.to_string()))?;

        apply_duel(bucket, item_a, item_b, winner)?;

        let (winning, losing) = match winner {
            Winner::A => (item_a, item_b),
            Winner::B => (item_b, item_a),
        };

        self.votes.push(VoteEvent {
            ts,
            category: key.category.label().to_string(),
            context: key.context.label().to_string(),
            item_a: item_a.to_string(),
            item_b: item_b.to_string(),
            winner: winning.to_string(),
            loser: losing.to_string(),
        });

        Ok(&self.votes[self.votes.len() - 1])
    }
}
