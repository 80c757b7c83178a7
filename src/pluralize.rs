//! English pluralization for source and entity names.
//!
//! Rule-based with a small irregular/uncountable lookup. The tables are
//! static so concurrent compilations can read them without synchronization.

/// Irregular singular/plural pairs, matched case-insensitively.
static IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("ox", "oxen"),
];

/// Words that have no distinct plural form.
static UNCOUNTABLES: &[&str] = &[
    "equipment",
    "information",
    "news",
    "series",
    "species",
    "money",
    "sheep",
    "fish",
    "deer",
    "data",
    "metadata",
];

/// Pluralize a name. Names that already end in `s` are treated as plural
/// and returned unchanged, except for `-ss` endings which take `es`.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();

    if UNCOUNTABLES.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some((_, plural)) = IRREGULARS.iter().find(|(singular, _)| *singular == lower) {
        return match_case(plural, word);
    }

    if lower.ends_with("ss") || lower.ends_with('x') || lower.ends_with('z') {
        return format!("{word}es");
    }

    if lower.ends_with("ch") || lower.ends_with("sh") {
        return format!("{word}es");
    }

    // Already plural.
    if lower.ends_with('s') {
        return word.to_string();
    }

    if lower.ends_with('y') && !ends_with_vowel_y(&lower) {
        return format!("{}ies", &word[..word.len() - 1]);
    }

    if lower.ends_with("fe") {
        return format!("{}ves", &word[..word.len() - 2]);
    }

    if lower.ends_with('f') {
        return format!("{}ves", &word[..word.len() - 1]);
    }

    format!("{word}s")
}

fn ends_with_vowel_y(lower: &str) -> bool {
    let mut chars = lower.chars().rev();
    chars.next();
    matches!(chars.next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

/// Copy the leading capitalization of `source` onto `replacement`.
fn match_case(replacement: &str, source: &str) -> String {
    let capitalized = source.chars().next().is_some_and(|c| c.is_uppercase());

    if capitalized {
        let mut chars = replacement.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    } else {
        replacement.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule() {
        assert_eq!(pluralize("Movie"), "Movies");
        assert_eq!(pluralize("Location"), "Locations");
        assert_eq!(pluralize("Transaction"), "Transactions");
    }

    #[test]
    fn test_compound_names() {
        assert_eq!(pluralize("MyMovie"), "MyMovies");
        assert_eq!(pluralize("TestName"), "TestNames");
    }

    #[test]
    fn test_sibilant_endings() {
        assert_eq!(pluralize("Class"), "Classes");
        assert_eq!(pluralize("Box"), "Boxes");
        assert_eq!(pluralize("Match"), "Matches");
    }

    #[test]
    fn test_y_endings() {
        assert_eq!(pluralize("Category"), "Categories");
        assert_eq!(pluralize("Key"), "Keys");
    }

    #[test]
    fn test_already_plural_is_unchanged() {
        assert_eq!(pluralize("MyItems"), "MyItems");
        assert_eq!(pluralize("IoTSensorStats"), "IoTSensorStats");
    }

    #[test]
    fn test_irregulars_keep_case() {
        assert_eq!(pluralize("Person"), "People");
        assert_eq!(pluralize("child"), "children");
    }

    #[test]
    fn test_uncountables() {
        assert_eq!(pluralize("Equipment"), "Equipment");
        assert_eq!(pluralize("news"), "news");
    }
}
