//! The substring to category table read from `mapping.yml`.
//!
//! Despite the extension the file is not YAML, just one
//! `substring: category` entry per line.

use crate::category::Category;
use crate::error::CategoriseError;

use log::debug;
use std::path::Path;

pub const DEFAULT_MAPPING_PATH: &str = "mapping.yml";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingTable {
    entries: Vec<(String, Category)>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the table from disk. A missing or unreadable file is fatal.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CategoriseError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CategoriseError::file_access(path, e))?;

        Ok(Self::parse(&text))
    }

    pub fn parse(text: &str) -> Self {
        let mut table = MappingTable::new();

        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_entry(line) {
                Some((substring, category)) => table.insert(substring, category),
                None => debug!("Ignoring mapping line {}: {:?}", index + 1, line),
            }
        }

        table
    }

    /// Adds a pair at the end, or replaces the category of an existing
    /// substring without moving it.
    pub fn insert(&mut self, substring: impl Into<String>, category: Category) {
        let substring = substring.into();
        match self.entries.iter_mut().find(|(s, _)| *s == substring) {
            Some(entry) => entry.1 = category,
            None => self.entries.push((substring, category)),
        }
    }

    /// Category of the last entry whose substring occurs in `description`.
    pub fn lookup(&self, description: &str) -> Option<Category> {
        let mut found = None;
        for (substring, category) in &self.entries {
            if description.contains(substring.as_str()) {
                debug!("{:?} matches {:?} -> {}", description, substring, category);
                found = Some(*category);
            }
        }
        found
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, Category)> {
        self.entries.iter().map(|(s, c)| (s.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Splits on the first colon and any whitespace after it. Everything after
/// that colon must name a category, so `pub: outing: takeaway` is dropped
/// rather than read as `pub: outing`.
fn parse_entry(line: &str) -> Option<(&str, Category)> {
    let (substring, name) = line.split_once(':')?;
    if substring.is_empty() {
        return None;
    }
    let category = name.trim().parse::<Category>().ok()?;
    Some((substring, category))
}
