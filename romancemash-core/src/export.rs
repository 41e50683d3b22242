/// CSV export of the vote log.
use chrono::SecondsFormat;

use crate::types::VoteEvent;

/// Header row, in the persisted field names.
pub const CSV_HEADER: [&str; 7] = ["ts", "segmento", "contexto", "A", "B", "ganador", "perdedor"];

/// Render the vote log as CSV, or `None` if there is nothing to export.
///
/// Every field is double-quoted with embedded quotes doubled. Rows follow
/// log order and are joined by `\n` with no trailing newline.
pub fn export_csv(votes: &[VoteEvent]) -> Option<String> {
    if votes.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(votes.len() + 1);
    lines.push(CSV_HEADER.join(","));

    for vote in votes {
        let ts = vote.ts.to_rfc3339_opts(SecondsFormat::Millis, true);
        let fields = [
            ts.as_str(),
            vote.category.as_str(),
            vote.context.as_str(),
            vote.item_a.as_str(),
            vote.item_b.as_str(),
            vote.winner.as_str(),
            vote.loser.as_str(),
        ];
        let row: Vec<String> = fields.iter().map(|f| quote(f)).collect();
        lines.push(row.join(","));
    }

    Some(lines.join("\n"))
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vote(a: &str, b: &str, winner: &str, loser: &str) -> VoteEvent {
        VoteEvent {
            ts: "2024-02-14T20:00:00Z".parse().unwrap(),
            category: "Romance clásico / elegante".to_string(),
            context: "¿Cuál recomiendas más para una CITA perfecta?".to_string(),
            item_a: a.to_string(),
            item_b: b.to_string(),
            winner: winner.to_string(),
            loser: loser.to_string(),
        }
    }

    #[test]
    fn test_empty_log_exports_nothing() {
        assert_eq!(export_csv(&[]), None);
    }

    #[test]
    fn test_two_votes_give_three_lines() {
        let votes = vec![vote("X", "Y", "X", "Y"), vote("Y", "X", "X", "Y")];
        let csv = export_csv(&votes).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ts,segmento,contexto,A,B,ganador,perdedor");
        assert_eq!(
            lines[1],
            "\"2024-02-14T20:00:00.000Z\",\"Romance clásico / elegante\",\
             \"¿Cuál recomiendas más para una CITA perfecta?\",\"X\",\"Y\",\"X\",\"Y\""
        );
        for line in &lines[1..] {
            let fields: Vec<&str> = line.split("\",\"").collect();
            assert_eq!(fields.len(), 7);
            assert!(line.starts_with('"') && line.ends_with('"'));
        }
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let votes = vec![vote("The \"Notebook\"", "Y", "Y", "The \"Notebook\"")];
        let csv = export_csv(&votes).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"The \"\"Notebook\"\"\",\"Y\",\"Y\",\"The \"\"Notebook\"\"\""));
    }

    #[test]
    fn test_commas_stay_inside_quotes() {
        let votes = vec![vote("Love, Actually", "Y", "Y", "Love, Actually")];
        let csv = export_csv(&votes).unwrap();
        assert!(csv.contains("\"Love, Actually\""));
    }
}
