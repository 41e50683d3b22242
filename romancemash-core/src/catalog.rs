/// Item catalog and the category/context registries.
///
/// The cross-product `Category` × `Context` defines the independent rating
/// buckets. Both registries are closed enums; the item catalog is data and can
/// be replaced by the caller as long as it stays a list of at least two
/// distinct, non-blank names.
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RankError;

/// Films shipped as the default catalog.
pub const DEFAULT_ITEMS: [&str; 16] = [
    "Pride & Prejudice (2005)",
    "The Notebook (2004)",
    "La La Land (2016)",
    "Before Sunrise (1995)",
    "Titanic (1997)",
    "Me Before You (2016)",
    "Notting Hill (1999)",
    "10 Things I Hate About You (1999)",
    "Crazy Rich Asians (2018)",
    "A Star Is Born (2018)",
    "About Time (2013)",
    "Eternal Sunshine of the Spotless Mind (2004)",
    "The Proposal (2009)",
    "Pretty Woman (1990)",
    "Call Me by Your Name (2017)",
    "500 Days of Summer (2009)",
];

/// Ordered list of comparable items.
///
/// Order matters: buckets store their entries in catalog order, and the
/// leaderboard breaks rating ties by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<String>,
}

impl Catalog {
    pub fn new<I, T>(items: I) -> Result<Self, RankError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();

        if items.len() < 2 {
            return Err(RankError::InvalidCatalog(format!(
                "need at least 2 items, got {}",
                items.len()
            )));
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.trim().is_empty() {
                return Err(RankError::InvalidCatalog("blank item name".to_string()));
            }
            if !seen.insert(item.as_str()) {
                return Err(RankError::InvalidCatalog(format!("duplicate item \"{item}\"")));
            }
        }

        Ok(Catalog { items })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            items: DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Taste segment a vote is cast under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "CL")]
    Classic,
    #[serde(rename = "RC")]
    RomCom,
    #[serde(rename = "DR")]
    Drama,
    #[serde(rename = "IN")]
    Indie,
    #[serde(rename = "CI")]
    DateNight,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Classic,
        Category::RomCom,
        Category::Drama,
        Category::Indie,
        Category::DateNight,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Category::Classic => "CL",
            Category::RomCom => "RC",
            Category::Drama => "DR",
            Category::Indie => "IN",
            Category::DateNight => "CI",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Classic => "Romance clásico / elegante",
            Category::RomCom => "Rom-com / divertido",
            Category::Drama => "Drama romántico (llorar)",
            Category::Indie => "Indie / reflexivo",
            Category::DateNight => "Plan: cita en pareja",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Category {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| RankError::UnknownCategory(s.to_string()))
    }
}

/// What the recommendation is for. The label doubles as the duel question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Context {
    #[default]
    #[serde(rename = "CITA")]
    Date,
    #[serde(rename = "LLORAR")]
    Cry,
    #[serde(rename = "LIGERO")]
    Light,
    #[serde(rename = "INOLV")]
    Unforgettable,
}

impl Context {
    pub const ALL: [Context; 4] = [
        Context::Date,
        Context::Cry,
        Context::Light,
        Context::Unforgettable,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Context::Date => "CITA",
            Context::Cry => "LLORAR",
            Context::Light => "LIGERO",
            Context::Unforgettable => "INOLV",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Context::Date => "¿Cuál recomiendas más para una CITA perfecta?",
            Context::Cry => "¿Cuál recomiendas más para EMOCIONARTE / llorar?",
            Context::Light => "¿Cuál recomiendas más para reír y pasarla LIGERO?",
            Context::Unforgettable => "¿Cuál recomiendas más como historia de amor INOLVIDABLE?",
        }
    }

    /// The prompt shown above a duel in this context.
    pub fn question(self) -> &'static str {
        self.label()
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Context {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Context::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| RankError::UnknownContext(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 16);
        assert!(Catalog::new(catalog.items().to_vec()).is_ok());
    }

    #[test]
    fn test_catalog_rejects_too_few_items() {
        let err = Catalog::new(["Only one"]).unwrap_err();
        assert!(matches!(err, RankError::InvalidCatalog(_)));
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let err = Catalog::new(["X", "Y", "X"]).unwrap_err();
        assert_eq!(err, RankError::InvalidCatalog("duplicate item \"X\"".to_string()));
    }

    #[test]
    fn test_catalog_rejects_blank_items() {
        assert!(Catalog::new(["X", "  "]).is_err());
    }

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.code().parse::<Category>().unwrap(), category);
        }
        for context in Context::ALL {
            assert_eq!(context.code().parse::<Context>().unwrap(), context);
        }
    }

    #[test]
    fn test_codes_parse_case_insensitively() {
        assert_eq!("rc".parse::<Category>().unwrap(), Category::RomCom);
        assert_eq!(" inolv ".parse::<Context>().unwrap(), Context::Unforgettable);
    }

    #[test]
    fn test_unknown_codes_are_rejected() {
        assert_eq!(
            "XX".parse::<Category>().unwrap_err(),
            RankError::UnknownCategory("XX".to_string())
        );
        assert!("NOPE".parse::<Context>().is_err());
    }

    #[test]
    fn test_labels_match_registry() {
        assert_eq!(Category::Drama.label(), "Drama romántico (llorar)");
        assert_eq!(Context::Date.question(), "¿Cuál recomiendas más para una CITA perfecta?");
    }
}
