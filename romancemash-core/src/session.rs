/// Session: the application context that owns the rating state.
///
/// Callers (a CLI, a UI) hold one `Session` and go through it for every read
/// and write. Mutations take `&mut self`, so the load-mutate-persist sequence
/// of a vote or reset can't interleave with another on the same session.
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::catalog::{Catalog, Category, Context};
use crate::error::{SessionError, StoreError};
use crate::export::export_csv;
use crate::leaderboard::top_n;
use crate::pairing::pick_pair;
use crate::state::State;
use crate::store::{KeyValueStore, RatingStore};
use crate::types::{BucketKey, RankedItem, VoteEvent, Winner};

pub struct Session<S: KeyValueStore> {
    store: RatingStore<S>,
    state: State,
}

impl<S: KeyValueStore> Session<S> {
    /// Open a session, loading whatever state the backend holds.
    pub fn open(backend: S, catalog: Catalog) -> Self {
        let store = RatingStore::new(backend, catalog);
        let state = store.load();
        Session { store, state }
    }

    pub fn catalog(&self) -> &Catalog {
        self.store.catalog()
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn store(&self) -> &RatingStore<S> {
        &self.store
    }

    /// A fresh random duel from the catalog.
    pub fn pick_pair(&self) -> (&str, &str) {
        pick_pair(self.catalog().items())
    }

    /// Record a duel outcome, stamped now, and persist.
    pub fn record_vote(
        &mut self,
        category: Category,
        context: Context,
        item_a: &str,
        item_b: &str,
        winner: Winner,
    ) -> Result<&VoteEvent, SessionError> {
        self.record_vote_at(category, context, item_a, item_b, winner, Utc::now())
    }

    /// Same as `record_vote` with an explicit timestamp.
    pub fn record_vote_at(
        &mut self,
        category: Category,
        context: Context,
        item_a: &str,
        item_b: &str,
        winner: Winner,
        ts: DateTime<Utc>,
    ) -> Result<&VoteEvent, SessionError> {
        let key = BucketKey::new(category, context);
        self.state.record_vote(key, item_a, item_b, winner, ts)?;
        self.store.persist(&self.state)?;

        debug!(bucket = %key, item_a, item_b, ?winner, "Recorded vote");
        Ok(&self.state.votes()[self.state.votes().len() - 1])
    }

    /// Leaderboard of the bucket for (category, context).
    pub fn top_n(&self, category: Category, context: Context, n: usize) -> Vec<RankedItem> {
        match self.state.bucket(BucketKey::new(category, context)) {
            Some(bucket) => top_n(bucket, n),
            None => Vec::new(),
        }
    }

    /// CSV of the vote log, or `None` if nobody has voted yet.
    pub fn export_csv(&self) -> Option<String> {
        export_csv(self.state.votes())
    }

    /// Wipe every rating and vote. Irreversible; confirm before calling.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.state = self.store.reset()?;
        Ok(())
    }
}
