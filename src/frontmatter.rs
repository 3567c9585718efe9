//! YAML frontmatter extraction.
//!
//! A document may open with a metadata header delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Create a Document
//! sidebar_position: 2
//! ---
//! # Heading
//! Body text.
//! ```
//!
//! Parsing is best-effort and never fails. A document without a header, or
//! with an unterminated one, yields no fields and its full text as the body.
//! A header that is not a valid YAML mapping yields no fields and the text
//! after the closing delimiter as the body.

use crate::ordering::Position;
use serde_json::Value;
use std::collections::BTreeMap;

const DELIMITER: &str = "---";

/// Declared frontmatter fields, converted to JSON values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    pub fields: BTreeMap<String, Value>,
}

impl Header {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// A field usable as display text.
    ///
    /// Strings and numbers count; empty strings and every other value type
    /// are treated as absent.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(number_text(n)),
            _ => None,
        }
    }

    /// A field coerced to an ordering position. See [`Position::from_json`].
    pub fn position(&self, key: &str) -> Option<Position> {
        self.fields.get(key).and_then(Position::from_json)
    }

    pub fn title(&self) -> Option<String> {
        self.text("title")
    }

    pub fn sidebar_label(&self) -> Option<String> {
        self.text("sidebar_label")
    }

    pub fn sidebar_position(&self) -> Option<Position> {
        self.position("sidebar_position")
    }
}

/// Display text for a numeric metadata value.
///
/// Floats without a fractional part print as integers, so `title: 1e3` reads
/// "1000" rather than "1000.0".
pub fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        _ => n.to_string(),
    }
}

/// A document split into its header and body.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<'a> {
    pub header: Header,
    pub body: &'a str,
}

/// Split `input` into frontmatter fields and body text.
pub fn parse(input: &str) -> Parsed<'_> {
    let no_header = Parsed {
        header: Header::default(),
        body: input,
    };

    let text = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut lines = text.split_inclusive('\n');

    let first = match lines.next() {
        Some(line) if line.trim_end() == DELIMITER => line,
        _ => return no_header,
    };

    // Byte offsets into `input`, past the BOM and the opening delimiter.
    let yaml_start = input.len() - text.len() + first.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            return Parsed {
                header: parse_fields(input[yaml_start..offset].trim()),
                body: &input[offset + line.len()..],
            };
        }
        offset += line.len();
    }

    no_header
}

/// Parse header YAML into JSON-compatible fields.
fn parse_fields(yaml: &str) -> Header {
    if yaml.is_empty() {
        return Header::default();
    }

    let value = serde_yaml::from_str::<serde_yaml::Value>(yaml)
        .map_err(|e| e.to_string())
        .and_then(|v| serde_json::to_value(v).map_err(|e| e.to_string()));

    match value {
        Ok(Value::Object(map)) => Header {
            fields: map.into_iter().collect(),
        },
        Ok(Value::Null) => Header::default(),
        Ok(_) => {
            tracing::warn!("Frontmatter is not a mapping, ignoring it");
            Header::default()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse frontmatter, ignoring it");
            Header::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_frontmatter() {
        let input = "---\ntitle: Intro\nsidebar_position: 2\n---\n# Heading\nBody";
        let parsed = parse(input);
        assert_eq!(parsed.header.title().as_deref(), Some("Intro"));
        assert_eq!(parsed.header.sidebar_position(), Position::new(2.0));
        assert_eq!(parsed.body, "# Heading\nBody");
    }

    #[test]
    fn no_frontmatter_keeps_full_body() {
        let input = "# Title\nBody";
        let parsed = parse(input);
        assert!(parsed.header.is_empty());
        assert_eq!(parsed.body, input);
    }

    #[test]
    fn unterminated_frontmatter_is_ignored() {
        let input = "---\ntitle: Intro\n# Heading";
        let parsed = parse(input);
        assert!(parsed.header.is_empty());
        assert_eq!(parsed.body, input);
    }

    #[test]
    fn empty_frontmatter_yields_body() {
        let parsed = parse("---\n---\nBody");
        assert!(parsed.header.is_empty());
        assert_eq!(parsed.body, "Body");
    }

    #[test]
    fn frontmatter_with_bom_and_crlf() {
        let input = "\u{feff}---\r\ntitle: Windows\r\n---\r\nBody\r\n";
        let parsed = parse(input);
        assert_eq!(parsed.header.title().as_deref(), Some("Windows"));
        assert_eq!(parsed.body, "Body\r\n");
    }

    #[test]
    fn malformed_yaml_is_ignored_but_body_stripped() {
        let input = "---\ntitle: [unclosed\n---\n# Heading\n";
        let parsed = parse(input);
        assert!(parsed.header.is_empty());
        assert_eq!(parsed.body, "# Heading\n");
    }

    #[test]
    fn non_mapping_yaml_is_ignored() {
        let parsed = parse("---\n- a\n- b\n---\nBody");
        assert!(parsed.header.is_empty());
        assert_eq!(parsed.body, "Body");
    }

    #[test]
    fn delimiter_must_open_the_document() {
        let input = "\n---\ntitle: Late\n---\n";
        let parsed = parse(input);
        assert!(parsed.header.is_empty());
    }

    #[test]
    fn numeric_title_is_text() {
        let parsed = parse("---\ntitle: 2024\n---\n");
        assert_eq!(parsed.header.title().as_deref(), Some("2024"));
    }

    #[test]
    fn integral_float_title_prints_without_fraction() {
        let parsed = parse("---\ntitle: 1000.0\nsidebar_label: 2.5\n---\n");
        assert_eq!(parsed.header.title().as_deref(), Some("1000"));
        assert_eq!(parsed.header.sidebar_label().as_deref(), Some("2.5"));
    }

    #[test]
    fn empty_and_boolean_titles_are_absent() {
        assert!(parse("---\ntitle: ''\n---\n").header.title().is_none());
        assert!(parse("---\ntitle: true\n---\n").header.title().is_none());
        assert!(parse("---\ntitle:\n---\n").header.title().is_none());
    }

    #[test]
    fn quoted_numeric_position_is_coerced() {
        let parsed = parse("---\nsidebar_position: \"3\"\n---\n");
        assert_eq!(parsed.header.sidebar_position(), Position::new(3.0));
    }

    #[test]
    fn missing_position_is_absent() {
        let parsed = parse("---\ntitle: X\n---\n");
        assert_eq!(parsed.header.sidebar_position(), None);
    }

    #[test]
    fn sidebar_label_is_read() {
        let parsed = parse("---\nsidebar_label: Short\n---\n");
        assert_eq!(parsed.header.sidebar_label().as_deref(), Some("Short"));
    }
}
