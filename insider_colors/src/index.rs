use std::collections::HashMap;

use log::{debug, warn};

use crate::normalize::{normalize_name, short_form};
use crate::table::ColorTable;

/// Normalized keys derived from a [`ColorTable`].
///
/// Every table name is indexed under its normalized form and, for multi-word
/// names, under its short form. Full forms collide last-write-wins in table
/// order; a short form only fills a slot no full form occupies, and the first
/// short form in table order keeps it.
#[derive(Debug, Default, Clone)]
pub struct LookupIndex {
    colors: HashMap<String, String>,
    keys_by_length: Vec<String>,
}

impl LookupIndex {
    pub fn build(table: &ColorTable) -> Self {
        let mut colors: HashMap<String, String> = HashMap::new();
        let mut full_forms: Vec<String> = Vec::with_capacity(table.len());

        for (name, color) in table.entries() {
            let normalized = normalize_name(name);
            if normalized.is_empty() {
                warn!("skipping color table entry with blank name {name:?}");
                continue;
            }
            colors.insert(normalized.clone(), color.to_string());
            full_forms.push(normalized);
        }

        let full_count = colors.len();
        for full in &full_forms {
            let Some(short) = short_form(full) else {
                continue;
            };
            if colors.contains_key(short) {
                continue;
            }
            if let Some(color) = colors.get(full).cloned() {
                colors.insert(short.to_string(), color);
            }
        }

        let mut keys_by_length: Vec<String> = colors.keys().cloned().collect();
        keys_by_length.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        debug!(
            "built color index: {} table entries, {} full keys, {} short keys",
            table.len(),
            full_count,
            colors.len() - full_count
        );

        Self {
            colors,
            keys_by_length,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.colors.get(key).map(String::as_str)
    }

    pub fn get_key_value(&self, key: &str) -> Option<(&str, &str)> {
        self.colors
            .get_key_value(key)
            .map(|(key, color)| (key.as_str(), color.as_str()))
    }

    /// Indexed keys, longest first; equal lengths in ascending order.
    pub fn keys_by_length(&self) -> impl Iterator<Item = &str> {
        self.keys_by_length.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
