/// Duel prompt rendering and answer parsing for the interactive loop.
use romancemash_core::{Context, Winner};

/// What the user typed at the duel prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Vote(Winner),
    NewPair,
    ShowTop,
    Quit,
}

/// Build the text shown for one duel.
pub fn build_prompt(context: Context, item_a: &str, item_b: &str) -> String {
    format!(
        "\n{question}\n\n  [a] {item_a}\n  [b] {item_b}\n\n\
         a/b = vote, n = new pair, t = top, q = quit > ",
        question = context.question(),
    )
}

/// Parse one line of user input. `None` means "didn't understand, ask again".
pub fn parse_choice(line: &str) -> Option<Choice> {
    match line.trim().to_ascii_lowercase().as_str() {
        "a" | "1" => Some(Choice::Vote(Winner::A)),
        "b" | "2" => Some(Choice::Vote(Winner::B)),
        "n" | "new" => Some(Choice::NewPair),
        "t" | "top" => Some(Choice::ShowTop),
        "q" | "quit" | "exit" => Some(Choice::Quit),
        _ => None,
    }
}

/// Whether a reset confirmation answer means yes.
pub fn is_yes(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes" | "s" | "si" | "sí")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_contains_all_parts() {
        let prompt = build_prompt(Context::Cry, "Titanic (1997)", "About Time (2013)");
        assert!(prompt.contains("¿Cuál recomiendas más para EMOCIONARTE / llorar?"));
        assert!(prompt.contains("[a] Titanic (1997)"));
        assert!(prompt.contains("[b] About Time (2013)"));
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("a\n"), Some(Choice::Vote(Winner::A)));
        assert_eq!(parse_choice(" B "), Some(Choice::Vote(Winner::B)));
        assert_eq!(parse_choice("2"), Some(Choice::Vote(Winner::B)));
        assert_eq!(parse_choice("n"), Some(Choice::NewPair));
        assert_eq!(parse_choice("top"), Some(Choice::ShowTop));
        assert_eq!(parse_choice("q"), Some(Choice::Quit));
        assert_eq!(parse_choice("maybe"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes("Sí\n"));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
    }
}
