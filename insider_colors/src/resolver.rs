use std::fmt;

use serde::Serialize;

use crate::color::contrast_text_color;
use crate::index::LookupIndex;
use crate::normalize::normalize_name;
use crate::table::{ColorTable, TableError};

/// Which lookup pass produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    Prefix,
    Substring,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchTier::Exact => "exact",
            MatchTier::Prefix => "prefix",
            MatchTier::Substring => "substring",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorMatch<'a> {
    pub tier: MatchTier,
    pub key: &'a str,
    pub color: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeStyle {
    pub background: String,
    pub text: &'static str,
}

impl BadgeStyle {
    pub fn for_color(background: &str) -> Self {
        Self {
            background: background.to_string(),
            text: contrast_text_color(background),
        }
    }
}

/// Resolves free-form organization names to colors.
///
/// Built once from a [`ColorTable`] and read-only afterwards; share it by
/// reference or behind an `Arc`.
#[derive(Debug, Clone)]
pub struct NameColorResolver {
    index: LookupIndex,
}

impl NameColorResolver {
    pub fn new(table: &ColorTable) -> Self {
        Self {
            index: LookupIndex::build(table),
        }
    }

    pub fn bundled() -> Result<Self, TableError> {
        Ok(Self::new(&ColorTable::bundled()?))
    }

    /// Best match for `raw`: exact key, then the longest key extending the
    /// name by whole words, then the longest key contained in the name.
    pub fn resolve(&self, raw: &str) -> Option<ColorMatch<'_>> {
        let normalized = normalize_name(raw);
        if normalized.is_empty() {
            return None;
        }

        if let Some((key, color)) = self.index.get_key_value(&normalized) {
            return Some(ColorMatch {
                tier: MatchTier::Exact,
                key,
                color,
            });
        }

        let extended = format!("{normalized} ");
        if let Some(key) = self
            .index
            .keys_by_length()
            .find(|key| key.starts_with(&extended))
        {
            return self.matched(MatchTier::Prefix, key);
        }

        let key = self
            .index
            .keys_by_length()
            .find(|key| normalized.contains(key))?;
        self.matched(MatchTier::Substring, key)
    }

    /// Color for `raw`, or `fallback` verbatim when nothing matches.
    pub fn resolve_color<'a>(&'a self, raw: &str, fallback: &'a str) -> &'a str {
        self.resolve(raw).map_or(fallback, |found| found.color)
    }

    pub fn badge_style(&self, raw: &str, fallback: &str) -> BadgeStyle {
        BadgeStyle::for_color(self.resolve_color(raw, fallback))
    }

    fn matched<'a>(&'a self, tier: MatchTier, key: &'a str) -> Option<ColorMatch<'a>> {
        self.index
            .get(key)
            .map(|color| ColorMatch { tier, key, color })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_resolver(entries: &[(&str, &str)]) -> NameColorResolver {
        NameColorResolver::new(&ColorTable::from_entries(entries.iter().copied()))
    }

    #[test]
    fn exact_beats_prefix_and_substring() {
        let resolver = build_resolver(&[("iowa", "#FFCD00"), ("iowa state", "#C8102E")]);
        let found = resolver.resolve("Iowa").unwrap();
        assert_eq!(found.tier, MatchTier::Exact);
        assert_eq!(found.color, "#FFCD00");
    }

    #[test]
    fn prefix_extends_by_whole_word() {
        let resolver = build_resolver(&[("penn state university park", "#041E42")]);
        let found = resolver.resolve("Penn").unwrap();
        assert_eq!(found.tier, MatchTier::Prefix);
        assert_eq!(found.key, "penn state university park");
        assert!(resolver.resolve("Pen").is_none());
    }

    #[test]
    fn prefix_prefers_longest_key() {
        let resolver = build_resolver(&[
            ("texas a m corpus christi", "#0067C5"),
            ("texas a m kingsville", "#003A70"),
            ("texas a m", "#500000"),
        ]);
        let found = resolver.resolve("Texas").unwrap();
        assert_eq!(found.tier, MatchTier::Prefix);
        assert_eq!(found.key, "texas a m corpus christi");
    }

    #[test]
    fn substring_prefers_longest_key() {
        let resolver = build_resolver(&[("iowa", "#FFCD00"), ("iowa state", "#C8102E")]);
        let found = resolver.resolve("The Iowa State Cyclones").unwrap();
        assert_eq!(found.tier, MatchTier::Substring);
        assert_eq!(found.key, "iowa state");
        assert_eq!(found.color, "#C8102E");
    }

    #[test]
    fn unmatched_returns_fallback_verbatim() {
        let resolver = build_resolver(&[("duke", "#003087")]);
        assert_eq!(resolver.resolve_color("Zzyzx Institute of Nonsense", " Gray "), " Gray ");
        assert_eq!(resolver.resolve_color("", "#123"), "#123");
        assert_eq!(resolver.resolve_color("   ", "#123"), "#123");
    }

    #[test]
    fn empty_table_always_falls_back() {
        let resolver = build_resolver(&[]);
        assert_eq!(resolver.resolve_color("Duke", "#999999"), "#999999");
    }

    #[test]
    fn badge_style_uses_contrast_text() {
        let resolver = build_resolver(&[("iowa", "#FFCD00"), ("michigan", "#00274C")]);
        let iowa = resolver.badge_style("University of Iowa", "#6c757d");
        assert_eq!(iowa.background, "#FFCD00");
        assert_eq!(iowa.text, "#000000");
        let unknown = resolver.badge_style("Nowhere Tech", "navy");
        assert_eq!(unknown.background, "navy");
        assert_eq!(unknown.text, "#ffffff");
    }

    #[test]
    fn badge_style_for_color_matches_lookup() {
        let resolver = build_resolver(&[("duke", "#003087")]);
        assert_eq!(
            BadgeStyle::for_color("#003087"),
            resolver.badge_style("Duke University", "#6c757d")
        );
    }

    #[test]
    fn tier_display_matches_serialized_name() {
        for tier in [MatchTier::Exact, MatchTier::Prefix, MatchTier::Substring] {
            assert_eq!(
                serde_json::to_value(tier).unwrap(),
                serde_json::Value::String(tier.to_string())
            );
        }
    }
}
