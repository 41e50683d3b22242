use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::{Catalog, Category, Context};
use crate::constants::{BUCKET_KEY_SEPARATOR, INITIAL_RATING};
use crate::error::RankError;

/// Composite key of an independent rating pool.
///
/// Ordered by category first, then context, both in registry order.
/// Persisted as `CATEGORY__CONTEXT` (e.g. `CL__CITA`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BucketKey {
    pub category: Category,
    pub context: Context,
}

impl BucketKey {
    pub fn new(category: Category, context: Context) -> Self {
        BucketKey { category, context }
    }

    /// Every (category, context) pair, category-major.
    pub fn all() -> impl Iterator<Item = BucketKey> {
        Category::ALL.into_iter().flat_map(|category| {
            Context::ALL
                .into_iter()
                .map(move |context| BucketKey { category, context })
        })
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.category.code(), BUCKET_KEY_SEPARATOR, self.context.code())
    }
}

impl FromStr for BucketKey {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, context) = s
            .split_once(BUCKET_KEY_SEPARATOR)
            .ok_or_else(|| RankError::BadBucketKey(s.to_string()))?;
        Ok(BucketKey {
            category: category.parse()?,
            context: context.parse()?,
        })
    }
}

impl Serialize for BucketKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BucketKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Which side of a duel won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    A,
    B,
}

impl FromStr for Winner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "1" => Ok(Winner::A),
            "b" | "2" => Ok(Winner::B),
            other => Err(format!("expected \"a\" or \"b\", got \"{other}\"")),
        }
    }
}

/// Ratings of every catalog item within one bucket, in catalog order.
///
/// Serialized as a JSON object `{ "<item>": <rating>, ... }` in entry order.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    entries: Vec<(String, f64)>,
}

impl Bucket {
    /// A bucket with every catalog item at the initial rating.
    pub fn new(catalog: &Catalog) -> Self {
        Bucket {
            entries: catalog
                .items()
                .iter()
                .map(|item| (item.clone(), INITIAL_RATING))
                .collect(),
        }
    }

    pub fn rating(&self, item: &str) -> Option<f64> {
        self.entries.iter().find(|(i, _)| i == item).map(|&(_, r)| r)
    }

    pub(crate) fn rating_mut(&mut self, item: &str) -> Option<&mut f64> {
        self.entries.iter_mut().find(|(i, _)| i == item).map(|(_, r)| r)
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(i, r)| (i.as_str(), *r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bring the bucket in line with `catalog`: add missing items at the
    /// initial rating, drop unknown ones, reorder to catalog order.
    /// Returns true if anything changed.
    pub(crate) fn reconcile(&mut self, catalog: &Catalog) -> bool {
        let reconciled: Vec<(String, f64)> = catalog
            .items()
            .iter()
            .map(|item| (item.clone(), self.rating(item).unwrap_or(INITIAL_RATING)))
            .collect();

        if reconciled == self.entries {
            return false;
        }
        self.entries = reconciled;
        true
    }

    fn insert(&mut self, item: String, rating: f64) {
        match self.rating_mut(&item) {
            Some(slot) => *slot = rating,
            None => self.entries.push((item, rating)),
        }
    }
}

impl Serialize for Bucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (item, rating) in &self.entries {
            map.serialize_entry(item, rating)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Bucket {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BucketVisitor;

        impl<'de> Visitor<'de> for BucketVisitor {
            type Value = Bucket;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of item name to numeric rating")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Bucket, M::Error> {
                let mut bucket = Bucket {
                    entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
                };
                while let Some((item, rating)) = access.next_entry::<String, f64>()? {
                    bucket.insert(item, rating);
                }
                Ok(bucket)
            }
        }

        deserializer.deserialize_map(BucketVisitor)
    }
}

/// One completed duel, as appended to the vote log.
///
/// Category and context are stored as their human-readable labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteEvent {
    pub ts: DateTime<Utc>,
    #[serde(rename = "segmento")]
    pub category: String,
    #[serde(rename = "contexto")]
    pub context: String,
    #[serde(rename = "A")]
    pub item_a: String,
    #[serde(rename = "B")]
    pub item_b: String,
    #[serde(rename = "ganador")]
    pub winner: String,
    #[serde(rename = "perdedor")]
    pub loser: String,
}

/// Ratings of both duel participants before and after an update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingChange {
    /// (item A, item B) before the update.
    pub before: (f64, f64),
    /// (item A, item B) after the update.
    pub after: (f64, f64),
}

impl RatingChange {
    /// Rating gained by item A. Item B lost exactly this much.
    pub fn delta(&self) -> f64 {
        self.after.0 - self.before.0
    }
}

/// A leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem {
    pub item: String,
    pub rating: f64,
}
