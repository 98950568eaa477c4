use crate::{FolioError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// File name of the configuration file, both per project and per user
pub const CONFIG_FILE_NAME: &str = "folio.yaml";

/// Path management for folio configuration files
#[derive(Debug, Clone)]
pub struct FolioPaths {
    /// Configuration directory
    pub config_dir: PathBuf,
}

impl FolioPaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "folio").ok_or_else(|| {
            FolioError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Create paths for a specific project directory
    pub fn for_project(project_root: &Path) -> Self {
        Self {
            config_dir: project_root.to_path_buf(),
        }
    }

    /// Get configuration file path
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Resolve `path` against `base` unless it is already absolute
    pub fn resolve(base: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        }
    }
}
