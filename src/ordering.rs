//! Sort keys and the total order shared by every navigation list.
//!
//! Pages, subcategories and categories are all ordered the same way:
//!
//! 1. `position` ascending, where an absent position sorts after every
//!    present one (no numeric sentinel involved)
//! 2. title ascending by [`collate`]
//!
//! Sorting is stable, so two entries that compare equal on both keys keep
//! their filesystem (file name) order.

use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;

/// An explicit ordering position from frontmatter or a category descriptor.
///
/// Always finite. Integral values serialize as JSON integers (`3`, not `3.0`)
/// so the emitted index matches what hand-written descriptors contain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(f64);

impl Position {
    /// Wrap a finite value. Returns `None` for NaN and infinities.
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Coerce a loosely-typed metadata value into a position.
    ///
    /// Numbers and numeric strings are accepted; anything else (null,
    /// booleans, empty or non-numeric strings, lists, maps) is absent.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_f64().and_then(Self::new),
            serde_json::Value::String(s) => {
                let s = s.trim();
                if s.is_empty() {
                    None
                } else {
                    s.parse::<f64>().ok().and_then(Self::new)
                }
            }
            _ => None,
        }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
            serializer.serialize_i64(v as i64)
        } else {
            serializer.serialize_f64(v)
        }
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = f64::deserialize(deserializer)?;
        Self::new(v).ok_or_else(|| serde::de::Error::custom("position must be finite"))
    }
}

/// Compare optional positions: present values ascending, absent last.
pub fn compare_positions(a: Option<Position>, b: Option<Position>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.0.total_cmp(&b.0),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

thread_local! {
    static COLLATOR: Option<Collator> = root_collator();
}

/// Root-locale collator from compiled data, tertiary strength by default.
fn root_collator() -> Option<Collator> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(error = %e, "Root collator unavailable, using case-folded order");
            None
        }
    }
}

/// Locale-aware string comparison for display titles.
///
/// Unicode root collation at tertiary strength: accents and case are
/// secondary to the base letters, so "Éclair" sorts before "Zebra" and
/// "guide" before "Guide". Raw code-point order is the final tie-break,
/// which keeps the order total.
pub fn collate(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => folded_order(a, b),
        })
        .then_with(|| a.cmp(b))
}

/// Case-folded comparison with lowercase first on ties.
fn folded_order(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<String>();
    folded(a).cmp(&folded(b)).then_with(|| case_order(a, b))
}

/// Lowercase-before-uppercase at the first position where case differs.
fn case_order(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

/// Anything that appears in a sorted navigation list.
pub trait NavOrdered {
    fn position(&self) -> Option<Position>;
    fn sort_title(&self) -> &str;
}

/// The total order used for every navigation list.
pub fn compare<T: NavOrdered>(a: &T, b: &T) -> Ordering {
    compare_positions(a.position(), b.position())
        .then_with(|| collate(a.sort_title(), b.sort_title()))
}

/// Stable in-place sort by [`compare`].
pub fn sort_entries<T: NavOrdered>(entries: &mut [T]) {
    entries.sort_by(compare);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Entry(Option<f64>, &'static str);

    impl NavOrdered for Entry {
        fn position(&self) -> Option<Position> {
            self.0.and_then(Position::new)
        }
        fn sort_title(&self) -> &str {
            self.1
        }
    }

    fn titles(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.1).collect()
    }

    #[test]
    fn position_then_absent_last() {
        let mut entries = vec![Entry(Some(2.0), "B"), Entry(None, "A"), Entry(Some(1.0), "C")];
        sort_entries(&mut entries);
        assert_eq!(titles(&entries), vec!["C", "B", "A"]);
    }

    #[test]
    fn equal_positions_fall_back_to_title() {
        let mut entries = vec![
            Entry(Some(1.0), "Zeta"),
            Entry(Some(1.0), "alpha"),
            Entry(None, "beta"),
            Entry(None, "Alpha"),
        ];
        sort_entries(&mut entries);
        assert_eq!(titles(&entries), vec!["alpha", "Zeta", "Alpha", "beta"]);
    }

    #[test]
    fn fractional_positions_sort_between_integers() {
        let mut entries = vec![Entry(Some(2.0), "b"), Entry(Some(1.5), "c"), Entry(Some(1.0), "a")];
        sort_entries(&mut entries);
        assert_eq!(titles(&entries), vec!["a", "c", "b"]);
    }

    #[test]
    fn negative_positions_sort_first() {
        let mut entries = vec![Entry(Some(0.0), "zero"), Entry(Some(-1.0), "minus")];
        sort_entries(&mut entries);
        assert_eq!(titles(&entries), vec!["minus", "zero"]);
    }

    #[test]
    fn collate_is_case_insensitive_first() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Banana", "apple"), Ordering::Greater);
    }

    #[test]
    fn collate_lowercase_before_uppercase_on_ties() {
        assert_eq!(collate("guide", "Guide"), Ordering::Less);
        assert_eq!(collate("Guide", "guide"), Ordering::Greater);
        assert_eq!(collate("Guide", "Guide"), Ordering::Equal);
    }

    #[test]
    fn collate_accented_titles_sort_with_base_letter() {
        assert_eq!(collate("Éclair", "Zebra"), Ordering::Less);
        assert_eq!(collate("über", "zeta"), Ordering::Less);
        assert_eq!(collate("Eclair", "Éclair"), Ordering::Less);
        assert_eq!(collate("Éclair", "Fig"), Ordering::Less);
    }

    #[test]
    fn accented_title_ordered_among_ascii_entries() {
        let mut entries = vec![Entry(None, "Zebra"), Entry(None, "Éclair"), Entry(None, "apple")];
        sort_entries(&mut entries);
        assert_eq!(titles(&entries), vec!["apple", "Éclair", "Zebra"]);
    }

    #[test]
    fn folded_fallback_orders_case_insensitively() {
        assert_eq!(folded_order("apple", "Banana"), Ordering::Less);
        assert_eq!(folded_order("guide", "Guide"), Ordering::Less);
    }

    #[test]
    fn collate_prefix_sorts_first() {
        assert_eq!(collate("Setup", "Setup Guide"), Ordering::Less);
    }

    #[test]
    fn position_coercion_from_json() {
        assert_eq!(Position::from_json(&json!(3)), Position::new(3.0));
        assert_eq!(Position::from_json(&json!(2.5)), Position::new(2.5));
        assert_eq!(Position::from_json(&json!(" 4 ")), Position::new(4.0));
        assert_eq!(Position::from_json(&json!("")), None);
        assert_eq!(Position::from_json(&json!("first")), None);
        assert_eq!(Position::from_json(&json!("inf")), None);
        assert_eq!(Position::from_json(&json!(true)), None);
        assert_eq!(Position::from_json(&json!(null)), None);
    }

    #[test]
    fn integral_position_serializes_as_integer() {
        let p = Position::new(3.0).unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "3");
        let p = Position::new(2.5).unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "2.5");
    }

    #[test]
    fn absent_position_serializes_as_null() {
        let p: Option<Position> = None;
        assert_eq!(serde_json::to_string(&p).unwrap(), "null");
    }

    #[test]
    fn position_deserializes_from_integer_or_float() {
        let p: Position = serde_json::from_str("7").unwrap();
        assert_eq!(p.value(), 7.0);
        let p: Option<Position> = serde_json::from_str("null").unwrap();
        assert!(p.is_none());
    }
}
