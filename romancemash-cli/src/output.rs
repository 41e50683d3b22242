/// Output formatting: terminal table and JSON.
use romancemash_core::{BucketKey, Catalog, Category, Context, RankedItem};
use serde::Serialize;

#[derive(Serialize)]
struct JsonRankedItem<'a> {
    rank: usize,
    item: &'a str,
    rating: f64,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    bucket: String,
    category: &'static str,
    context: &'static str,
    items: Vec<JsonRankedItem<'a>>,
    total_votes: usize,
}

/// Render a leaderboard as a fixed-width table. Ratings get one decimal.
pub fn format_table(rankings: &[RankedItem]) -> String {
    let name_width = rankings
        .iter()
        .map(|r| r.item.chars().count())
        .max()
        .unwrap_or(4)
        .max(4); // at least "Item"

    let mut out = String::new();
    out.push_str(&format!(" # | {:<name_width$} |  Rating\n", "Item"));
    out.push_str(&format!("---|-{}-|--------\n", "-".repeat(name_width)));

    for (i, r) in rankings.iter().enumerate() {
        out.push_str(&format!(
            "{:>2} | {:<name_width$} | {:>7.1}\n",
            i + 1,
            r.item,
            r.rating,
        ));
    }
    out
}

/// Print a leaderboard with its bucket heading.
pub fn print_table(key: BucketKey, rankings: &[RankedItem], total_votes: usize) {
    println!(
        "Top {}: {} / {}",
        rankings.len(),
        key.category.label(),
        key.context.label(),
    );
    print!("{}", format_table(rankings));
    println!("\n{total_votes} votes recorded across all buckets");
}

/// Render a leaderboard as pretty JSON.
pub fn format_json(key: BucketKey, rankings: &[RankedItem], total_votes: usize) -> String {
    let items = rankings
        .iter()
        .enumerate()
        .map(|(i, r)| JsonRankedItem {
            rank: i + 1,
            item: &r.item,
            rating: r.rating,
        })
        .collect();

    let output = JsonOutput {
        bucket: key.to_string(),
        category: key.category.label(),
        context: key.context.label(),
        items,
        total_votes,
    };

    serde_json::to_string_pretty(&output)
        .unwrap_or_else(|e| crate::bail(format!("Failed to serialize leaderboard: {e}")))
}

/// Print the catalog and both registries, for populating selectors.
pub fn print_registries(catalog: &Catalog) {
    println!("Categories:");
    for c in Category::ALL {
        println!("  {:<6} {}", c.code(), c.label());
    }
    println!("\nContexts:");
    for c in Context::ALL {
        println!("  {:<6} {}", c.code(), c.label());
    }
    println!("\nItems ({}):", catalog.len());
    for item in catalog.items() {
        println!("  {item}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RankedItem> {
        vec![
            RankedItem { item: "Titanic (1997)".to_string(), rating: 1031.53 },
            RankedItem { item: "X".to_string(), rating: 968.47 },
        ]
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let table = format_table(&rows());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Item"));
        assert!(lines[2].starts_with(" 1 | Titanic (1997)"));
        assert!(lines[2].ends_with("1031.5"));
        assert!(lines[3].ends_with(" 968.5"));
    }

    #[test]
    fn test_json_output_shape() {
        let key = BucketKey::new(Category::Classic, Context::Date);
        let json: serde_json::Value = serde_json::from_str(&format_json(key, &rows(), 7)).unwrap();
        assert_eq!(json["bucket"], "CL__CITA");
        assert_eq!(json["total_votes"], 7);
        assert_eq!(json["items"][0]["rank"], 1);
        assert_eq!(json["items"][0]["item"], "Titanic (1997)");
        assert_eq!(json["items"][1]["rating"], 968.47);
    }
}
