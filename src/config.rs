use crate::categoriser::ReloadPolicy;
use crate::mapping::DEFAULT_MAPPING_PATH;
use crate::report::ReportFormat;
use crate::Settings;

use clap::Parser;
use std::path::PathBuf;

/// List statement transactions that no mapping entry categorises.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Statement export to read; nothing is done without one
    pub transactions: Option<PathBuf>,

    /// Substring to category mapping file
    #[arg(long, env = "CATEGORISE_MAPPING", default_value = DEFAULT_MAPPING_PATH)]
    pub mapping: PathBuf,

    /// Re-read the mapping file before every transaction
    #[arg(long)]
    pub reload_mapping: bool,

    /// Columns to discard before the date column
    #[arg(long, default_value_t = 0)]
    pub skip_columns: usize,

    #[arg(long, value_enum, default_value_t = ReportFormat::Lines)]
    pub format: ReportFormat,

    /// Stop after reporting this many uncategorised transactions
    #[arg(long)]
    pub limit: Option<usize>,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            mapping: self.mapping.clone(),
            reload: if self.reload_mapping {
                ReloadPolicy::EveryTransaction
            } else {
                ReloadPolicy::Once
            },
            leading_columns: self.skip_columns,
            format: self.format,
            limit: self.limit,
        }
    }
}
