//! Option sub-query construction
//!
//! Option text is interpolated into an XPath expression, so it always goes
//! through [`xpath_literal`] first.

use selectkit_core_types::Selector;

/// Relative query for the direct `<option>` children of an element whose
/// whitespace-normalized text equals `text` exactly.
pub fn option_query(text: &str) -> Selector {
    Selector::xpath(format!(
        "./option[normalize-space(text())={}]",
        xpath_literal(text)
    ))
}

/// Quote `text` as an XPath 1.0 string literal.
///
/// XPath 1.0 has no escape sequences, so text holding both quote characters
/// is split on `"` and rebuilt with `concat()`.
pub fn xpath_literal(text: &str) -> String {
    if !text.contains('"') {
        return format!("\"{}\"", text);
    }
    if !text.contains('\'') {
        return format!("'{}'", text);
    }

    let mut parts = Vec::new();
    for (idx, chunk) in text.split('"').enumerate() {
        if idx > 0 {
            parts.push("'\"'".to_string());
        }
        if !chunk.is_empty() {
            parts.push(format!("\"{}\"", chunk));
        }
    }
    format!("concat({})", parts.join(", "))
}

/// Whitespace as XPath 1.0 defines it (#x20, #x9, #xD, #xA).
const XPATH_WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// Collapse runs of whitespace and trim both ends, as XPath `normalize-space`.
///
/// Other Unicode spaces such as U+00A0 are ordinary characters here.
pub fn normalize_text(text: &str) -> String {
    text.split(XPATH_WHITESPACE)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use selectkit_core_types::Using;

    #[test]
    fn plain_text_uses_double_quotes() {
        assert_eq!(xpath_literal("Blue"), "\"Blue\"");
        assert_eq!(xpath_literal(""), "\"\"");
    }

    #[test]
    fn double_quotes_switch_to_single() {
        assert_eq!(xpath_literal("12\" pipe"), "'12\" pipe'");
    }

    #[test]
    fn apostrophe_stays_in_double_quotes() {
        assert_eq!(xpath_literal("Tom's"), "\"Tom's\"");
    }

    #[test]
    fn both_quotes_use_concat() {
        assert_eq!(
            xpath_literal("Tom's \"big\" day"),
            "concat(\"Tom's \", '\"', \"big\", '\"', \" day\")"
        );
        assert_eq!(
            xpath_literal("\"it's\""),
            "concat('\"', \"it's\", '\"')"
        );
    }

    #[test]
    fn option_query_targets_direct_options() {
        let query = option_query("Red");
        assert_eq!(query.using, Using::XPath);
        assert_eq!(query.value, "./option[normalize-space(text())=\"Red\"]");
    }

    #[test]
    fn option_query_keeps_brackets_inside_literal() {
        let query = option_query("a\"] | //input[\"'");
        assert!(query.value.starts_with("./option[normalize-space(text())=concat("));
        assert!(query.value.ends_with(")]"));
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize_text("  New \n  York\t"), "New York");
        assert_eq!(normalize_text("   "), "");
        assert_eq!(normalize_text("\r\nA\t\tB\n"), "A B");
    }

    #[test]
    fn normalize_keeps_non_xpath_spaces() {
        assert_eq!(normalize_text("A\u{a0}B"), "A\u{a0}B");
        assert_eq!(normalize_text(" A\u{2003} B "), "A\u{2003} B");
    }
}
