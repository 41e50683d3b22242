/// romancemash-core: Pairwise Elo rating engine.
///
/// Duel → Elo update → per-(category, context) leaderboard. The whole state
/// (ratings and vote log) lives in one JSON document behind a small
/// key-value trait, so the engine runs the same against memory, a file, or
/// whatever the caller plugs in. No terminal IO, no network.
///
/// # Quick start
///
/// ```rust
/// use romancemash_core::{Catalog, Category, Context, MemoryStore, Session, Winner};
///
/// let catalog = Catalog::new(["Titanic (1997)", "Notting Hill (1999)"]).unwrap();
/// let mut session = Session::open(MemoryStore::new(), catalog);
///
/// let (a, b) = session.pick_pair();
/// let (a, b) = (a.to_string(), b.to_string());
/// session
///     .record_vote(Category::Classic, Context::Date, &a, &b, Winner::A)
///     .unwrap();
///
/// for (rank, row) in session.top_n(Category::Classic, Context::Date, 10).iter().enumerate() {
///     println!("{}. {} {:.1}", rank + 1, row.item, row.rating);
/// }
/// ```

pub mod catalog;
pub mod constants;
pub mod elo;
pub mod error;
pub mod export;
pub mod leaderboard;
pub mod pairing;
pub mod session;
pub mod state;
pub mod store;
pub mod types;

// Re-export primary public API at crate root.
pub use catalog::{Catalog, Category, Context};
pub use elo::{apply_duel, expected_score, update_ratings};
pub use error::{RankError, SessionError, StoreError};
pub use export::export_csv;
pub use leaderboard::top_n;
pub use pairing::{pick_pair, pick_pair_with};
pub use session::Session;
pub use state::State;
pub use store::{KeyValueStore, MemoryStore, RatingStore};
pub use types::{Bucket, BucketKey, RankedItem, RatingChange, VoteEvent, Winner};
