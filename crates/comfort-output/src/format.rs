use std::fmt;
use std::str::FromStr;

use crate::error::{OutputError, Result};

/// File format of exported tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Fails when no writer for this format is linked.
    pub fn ensure_available(self) -> Result<()> {
        match self {
            ExportFormat::Csv => Ok(()),
            ExportFormat::Xlsx => Err(OutputError::SinkUnavailable {
                format: self,
                remediation: "spreadsheet output is not built in; re-run with --format csv and \
                              open the CSV files in a spreadsheet application"
                    .to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            _ => Err(OutputError::UnknownFormat(s.to_string())),
        }
    }
}
