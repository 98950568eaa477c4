use super::types::FolioConfig;
use crate::io::paths::{FolioPaths, CONFIG_FILE_NAME};
use crate::{FolioError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Configuration loader for `folio.yaml`
///
/// Lookup order: an explicit path, the project root, then the user's
/// platform config directory. Implicitly discovered files that fail to parse
/// are skipped with a warning; an explicit file must load.
pub struct ConfigLoader {
    project_root: PathBuf,
    explicit: Option<PathBuf>,
    user_config_dir: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create new loader rooted at `project_root`
    pub fn new<P: AsRef<Path>>(project_root: P) -> Self {
        Self {
            project_root: project_root.as_ref().to_path_buf(),
            explicit: None,
            user_config_dir: FolioPaths::new().ok().map(|p| p.config_dir),
        }
    }

    /// Use this file instead of discovering one
    pub fn with_explicit_path(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    /// Override (or disable) the per-user config directory
    pub fn with_user_config_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.user_config_dir = dir;
        self
    }

    /// Load the effective configuration.
    ///
    /// A relative `dataDir` is resolved against the directory of the file it
    /// came from, or the project root when no file was found.
    pub fn load(&self) -> Result<FolioConfig> {
        if let Some(path) = &self.explicit {
            return self.load_file(path);
        }

        for candidate in self.candidates() {
            if !candidate.is_file() {
                continue;
            }
            match self.load_file(&candidate) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    warn!(path = %candidate.display(), error = %e, "Skipping unreadable config file");
                }
            }
        }

        debug!("No config file found, using defaults");
        let mut config = FolioConfig::default();
        config.settings.data_dir = FolioPaths::resolve(&self.project_root, &config.settings.data_dir);
        Ok(config)
    }

    /// Load and resolve a single config file
    pub fn load_file(&self, path: &Path) -> Result<FolioConfig> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FolioError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let mut config: FolioConfig = if contents.trim().is_empty() {
            FolioConfig::default()
        } else {
            serde_yaml_ng::from_str(&contents).map_err(|e| {
                FolioError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
            })?
        };

        let base = path.parent().unwrap_or(self.project_root.as_path());
        config.settings.data_dir = FolioPaths::resolve(base, &config.settings.data_dir);

        debug!(path = %path.display(), data_dir = %config.settings.data_dir.display(), "Loaded config");
        Ok(config)
    }

    fn candidates(&self) -> Vec<PathBuf> {
        let mut candidates = vec![FolioPaths::for_project(&self.project_root).config_file()];
        if let Some(dir) = &self.user_config_dir {
            candidates.push(dir.join(CONFIG_FILE_NAME));
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::OutputFormat;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_files() {
        let project = tempdir().unwrap();
        let config = ConfigLoader::new(project.path())
            .with_user_config_dir(None)
            .load()
            .unwrap();
        assert_eq!(config.settings.data_dir, project.path().join("data"));
        assert_eq!(config.settings.page_size, 0);
    }

    #[test]
    fn test_project_file_wins_over_user_file() {
        let project = tempdir().unwrap();
        let user = tempdir().unwrap();
        fs::write(project.path().join("folio.yaml"), "settings:\n  pageSize: 3\n").unwrap();
        fs::write(user.path().join("folio.yaml"), "settings:\n  pageSize: 9\n").unwrap();

        let config = ConfigLoader::new(project.path())
            .with_user_config_dir(Some(user.path().to_path_buf()))
            .load()
            .unwrap();
        assert_eq!(config.settings.page_size, 3);
    }

    #[test]
    fn test_broken_project_file_falls_back_to_user_file() {
        let project = tempdir().unwrap();
        let user = tempdir().unwrap();
        fs::write(project.path().join("folio.yaml"), "settings: [oops").unwrap();
        fs::write(
            user.path().join("folio.yaml"),
            "settings:\n  outputFormat: json\n  dataDir: content\n",
        )
        .unwrap();

        let config = ConfigLoader::new(project.path())
            .with_user_config_dir(Some(user.path().to_path_buf()))
            .load()
            .unwrap();
        assert_eq!(config.settings.output_format, OutputFormat::Json);
        assert_eq!(config.settings.data_dir, user.path().join("content"));
    }

    #[test]
    fn test_explicit_file_errors_propagate() {
        let project = tempdir().unwrap();
        let path = project.path().join("custom.yaml");
        fs::write(&path, "settings: [oops").unwrap();

        let result = ConfigLoader::new(project.path())
            .with_user_config_dir(None)
            .with_explicit_path(Some(path))
            .load();
        assert!(matches!(result, Err(FolioError::Config(_))));
    }

    #[test]
    fn test_absolute_data_dir_is_kept() {
        let project = tempdir().unwrap();
        let content = tempdir().unwrap();
        fs::write(
            project.path().join("folio.yaml"),
            format!("settings:\n  dataDir: {}\n", content.path().display()),
        )
        .unwrap();

        let config = ConfigLoader::new(project.path())
            .with_user_config_dir(None)
            .load()
            .unwrap();
        assert_eq!(config.settings.data_dir, content.path().to_path_buf());
    }
}
