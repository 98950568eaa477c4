//! Loading the content snapshot from a data directory.
//!
//! Each collection lives in its own file named after the collection
//! (`projects.json`, `blog.yaml`, ...). JSON is preferred when both a JSON
//! and a YAML file exist.

use super::model::{BlogPost, Certification, Experience, PersonalInfo, Project, Publication, SkillsData};
use crate::{FolioError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Immutable snapshot of all portfolio content
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Portfolio {
    pub personal: Option<PersonalInfo>,
    pub projects: Vec<Project>,
    pub blog: Vec<BlogPost>,
    pub experience: Vec<Experience>,
    pub skills: SkillsData,
    pub publications: Vec<Publication>,
    pub certifications: Vec<Certification>,
}

impl Portfolio {
    /// Project whose slug matches exactly
    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    /// Experience entries by ascending `order`
    pub fn sorted_experience(&self) -> Vec<&Experience> {
        let mut entries: Vec<&Experience> = self.experience.iter().collect();
        entries.sort_by_key(|e| e.order);
        entries
    }

    /// Publications by ascending `order`; a missing order ranks as 0
    pub fn sorted_publications(&self) -> Vec<&Publication> {
        let mut entries: Vec<&Publication> = self.publications.iter().collect();
        entries.sort_by_key(|p| p.order.unwrap_or(0));
        entries
    }

    /// Certifications by ascending `order`; a missing order ranks as 0
    pub fn sorted_certifications(&self) -> Vec<&Certification> {
        let mut entries: Vec<&Certification> = self.certifications.iter().collect();
        entries.sort_by_key(|c| c.order.unwrap_or(0));
        entries
    }
}

/// Reads collections out of a data directory
pub struct CatalogLoader {
    data_dir: PathBuf,
}

impl CatalogLoader {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load every collection; missing files give empty collections
    pub fn load(&self) -> Result<Portfolio> {
        if !self.data_dir.is_dir() {
            return Err(FolioError::Path(format!(
                "Data directory not found: {}",
                self.data_dir.display()
            )));
        }

        let portfolio = Portfolio {
            personal: self.load_collection("personal")?,
            projects: self.load_collection("projects")?.unwrap_or_default(),
            blog: self.load_collection("blog")?.unwrap_or_default(),
            experience: self.load_collection("experience")?.unwrap_or_default(),
            skills: self.load_collection("skills")?.unwrap_or_default(),
            publications: self.load_collection("publications")?.unwrap_or_default(),
            certifications: self.load_collection("certifications")?.unwrap_or_default(),
        };

        debug!(
            data_dir = %self.data_dir.display(),
            projects = portfolio.projects.len(),
            blog = portfolio.blog.len(),
            experience = portfolio.experience.len(),
            publications = portfolio.publications.len(),
            certifications = portfolio.certifications.len(),
            "Loaded portfolio snapshot"
        );

        Ok(portfolio)
    }

    /// Load one collection by name, `None` when no file exists for it
    pub fn load_collection<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let Some(path) = self.find_file(name) else {
            debug!(collection = name, "No data file found");
            return Ok(None);
        };

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            FolioError::Catalog(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let value = parse_contents(&path, &contents)?;
        debug!(collection = name, path = %path.display(), "Loaded collection");
        Ok(Some(value))
    }

    fn find_file(&self, name: &str) -> Option<PathBuf> {
        EXTENSIONS
            .iter()
            .map(|ext| self.data_dir.join(format!("{}.{}", name, ext)))
            .find(|path| path.is_file())
    }
}

fn parse_contents<T: DeserializeOwned>(path: &Path, contents: &str) -> Result<T> {
    let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
    if is_json {
        serde_json::from_str(contents).map_err(|e| {
            FolioError::Catalog(format!("Failed to parse {}: {}", path.display(), e))
        })
    } else {
        serde_yaml_ng::from_str(contents).map_err(|e| {
            FolioError::Catalog(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}
