use crate::error::CategoriseError;
use crate::mapping::MappingTable;
use crate::transaction::Transaction;

use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

fn whitespace_run() -> &'static Regex {
    static RUN: OnceLock<Regex> = OnceLock::new();
    RUN.get_or_init(|| Regex::new(r"\s\s+").expect("whitespace pattern is valid"))
}

/// Normalises a description for matching: drops a leading `VISA-`,
/// squeezes whitespace runs to one space and lower-cases.
pub fn clean_description(description: &str) -> String {
    let stripped = description.strip_prefix("VISA-").unwrap_or(description);
    whitespace_run().replace_all(stripped, " ").to_lowercase()
}

/// When the mapping file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReloadPolicy {
    /// Read once when the categoriser is opened.
    #[default]
    Once,
    /// Read again before every transaction, so edits show up mid-run.
    EveryTransaction,
}

pub struct Categoriser {
    table: MappingTable,
    source: Option<PathBuf>,
    policy: ReloadPolicy,
}

impl Categoriser {
    pub fn new(table: MappingTable) -> Self {
        Self {
            table,
            source: None,
            policy: ReloadPolicy::Once,
        }
    }

    pub async fn open(
        path: impl Into<PathBuf>,
        policy: ReloadPolicy,
    ) -> Result<Self, CategoriseError> {
        let path = path.into();
        let table = MappingTable::load(&path).await?;

        Ok(Self {
            table,
            source: Some(path),
            policy,
        })
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    /// Assigns a category, if any mapping entry matches. The description
    /// itself is left as it was read.
    pub async fn categorise(
        &mut self,
        mut tx: Transaction,
    ) -> Result<Transaction, CategoriseError> {
        if let (ReloadPolicy::EveryTransaction, Some(path)) = (self.policy, &self.source) {
            self.table = MappingTable::load(path).await?;
        }

        if let Some(category) = self.table.lookup(&clean_description(&tx.description)) {
            tx.category = Some(category);
        }

        Ok(tx)
    }
}
