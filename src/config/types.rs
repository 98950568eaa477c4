use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How commands print their results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings block of `folio.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Directory holding the content files, relative to the config file
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Items per page for listings; 0 disables paging
    #[serde(default)]
    pub page_size: usize,

    /// Default output format
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            page_size: 0,
            output_format: OutputFormat::Text,
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Root structure of `folio.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FolioConfig {
    #[serde(default)]
    pub settings: Settings,
}
