/// Rating every item starts with in every bucket.
pub const INITIAL_RATING: f64 = 1000.0;

/// K-factor: the largest possible rating swing from a single duel.
/// Fixed for all updates; there is no provisional period for new items.
pub const K_FACTOR: f64 = 32.0;

/// Rating difference at which the stronger side is expected to win ten times
/// as often as the weaker one.
pub const ELO_SCALE: f64 = 400.0;

/// Logical key the whole state document is persisted under.
pub const STORAGE_KEY: &str = "romancemash_state_v1";

/// Separator between category and context codes in a persisted bucket key.
pub const BUCKET_KEY_SEPARATOR: &str = "__";

/// Number of rows shown by the leaderboard when the caller doesn't choose.
pub const DEFAULT_TOP_N: usize = 10;

/// File name suggested for CSV exports of the vote log.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "romancemash_votos.csv";
