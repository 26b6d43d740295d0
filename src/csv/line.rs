//! Field splitting for one line of delimited text.

/// Splits one line on commas, treating a comma inside a double-quoted
/// span as literal text.
///
/// A `"` toggles the in-quotes state and is never emitted into a field;
/// quote escaping inside quotes is not supported. Unbalanced quotes are
/// not an error: text after the last toggle keeps that toggle's state.
/// Fields are trimmed. An empty line yields a single empty field, so
/// callers filter blank lines before splitting.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Escapes one cell for CSV output. Cells containing quotes, commas, or
/// line breaks are wrapped in quotes with embedded quotes doubled.
pub fn escape_cell(cell: &str) -> String {
    if cell.contains(['"', ',', '\r', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields() {
        assert_eq!(split_line("apple,사과"), vec!["apple", "사과"]);
    }

    #[test]
    fn test_quoted_comma_is_literal() {
        assert_eq!(split_line("\"a, b\",뜻"), vec!["a, b", "뜻"]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        assert_eq!(split_line("  apple , 사과  "), vec!["apple", "사과"]);
    }

    #[test]
    fn test_empty_line_yields_one_empty_field() {
        assert_eq!(split_line(""), vec![""]);
    }

    #[test]
    fn test_unbalanced_quote_degrades_gracefully() {
        // Everything after the lone quote stays inside one field.
        assert_eq!(split_line("\"a, b, c"), vec!["a, b, c"]);
    }

    #[test]
    fn test_quotes_are_not_emitted() {
        assert_eq!(split_line("\"apple\",\"사과\""), vec!["apple", "사과"]);
    }

    #[test]
    fn test_missing_second_field() {
        assert_eq!(split_line("apple"), vec!["apple"]);
        assert_eq!(split_line("apple,"), vec!["apple", ""]);
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("plain"), "plain");
        assert_eq!(escape_cell("a, b"), "\"a, b\"");
        assert_eq!(escape_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
