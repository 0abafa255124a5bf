//! CSV generation for report exports
//!
//! Fields containing commas, quotes, or newlines are quoted with doubled
//! inner quotes so the output can be parsed back losslessly.

/// Escape a single CSV field
pub fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render one CSV row from its fields
pub fn write_row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render a full CSV document: header row followed by data rows
pub fn write_document(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str(&write_row(
        &header.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
    ));
    out.push('\n');
    for row in rows {
        out.push_str(&write_row(row));
        out.push('\n');
    }
    out
}

/// Parse CSV text back into rows of fields
///
/// Only used by tests to verify the round trip, but kept in the crate so it
/// stays in sync with the writer.
pub fn parse_document(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => {
                    row.push(std::mem::take(&mut field));
                }
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                '\r' => {}
                _ => field.push(c),
            }
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields_unquoted() {
        assert_eq!(escape_field("hello"), "hello");
        assert_eq!(write_row(&["a".to_string(), "b".to_string()]), "a,b");
    }

    #[test]
    fn test_comma_and_quote_escaping() {
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn test_round_trip_recovers_fields() {
        let rows = vec![
            vec!["Acme, Inc.".to_string(), "says \"hello\"".to_string()],
            vec!["plain".to_string(), "multi\nline".to_string()],
        ];
        let doc = write_document(&["name", "note"], &rows);
        let parsed = parse_document(&doc);
        assert_eq!(parsed[0], vec!["name", "note"]);
        assert_eq!(parsed[1], rows[0]);
        assert_eq!(parsed[2], rows[1]);
    }
}
