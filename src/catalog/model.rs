//! Content types as stored in the portfolio data files.
//!
//! Field names follow the camelCase keys of the JSON/YAML content. Only
//! `Project` and `BlogPost` feed the query engine; the rest are loaded,
//! validated and rendered as-is.

use super::dates;
use super::item::CatalogItem;
use super::query::ALL_FILTER;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Owner profile shown on the home and about pages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub scholar: Option<String>,
}

/// Project classification.
///
/// The known variants cover the categories the site ships with; `Other`
/// keeps any new category verbatim so it still shows up as a filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Research,
    Personal,
    Academic,
    OpenSource,
    Other(String),
}

impl ProjectCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectCategory::Research => "Research",
            ProjectCategory::Personal => "Personal",
            ProjectCategory::Academic => "Academic",
            ProjectCategory::OpenSource => "Open Source",
            ProjectCategory::Other(value) => value.as_str(),
        }
    }

    fn from_label(value: &str) -> Self {
        match value {
            "Research" => ProjectCategory::Research,
            "Personal" => ProjectCategory::Personal,
            "Academic" => ProjectCategory::Academic,
            "Open Source" => ProjectCategory::OpenSource,
            other => ProjectCategory::Other(other.to_string()),
        }
    }
}

impl From<&str> for ProjectCategory {
    fn from(value: &str) -> Self {
        Self::from_label(value)
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ProjectCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProjectCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_label(&value))
    }
}

/// Numeric results attached to a project (ssim, psnr, accuracy, ...).
///
/// Keys are free-form and display-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ProjectMetrics(pub BTreeMap<String, Option<f64>>);

impl ProjectMetrics {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied().flatten()
    }

    /// Key/value pairs rendered with a fixed number of decimals
    pub fn formatted(&self, decimals: usize) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(key, value)| (key.clone(), crate::format::format_metric(*value, decimals)))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub short_description: String,
    #[serde(default)]
    pub full_description: String,
    pub category: ProjectCategory,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub paper: Option<String>,
    #[serde(default)]
    pub dataset: Option<String>,
    #[serde(default)]
    pub metrics: Option<ProjectMetrics>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub highlights: Option<Vec<String>>,
}

impl Project {
    /// Links present on the project, labelled for display
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("GitHub", &self.github),
            ("Demo", &self.demo),
            ("Paper", &self.paper),
            ("Dataset", &self.dataset),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.as_deref().map(|u| (label, u)))
        .collect()
    }
}

impl CatalogItem for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.short_description
    }

    fn search_terms(&self) -> &[String] {
        &self.technologies
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn filter_values(&self) -> Vec<&str> {
        vec![self.category.as_str()]
    }

    fn is_unfiltered(value: &str) -> bool {
        value == ALL_FILTER
    }

    fn cmp_rank(&self, other: &Self) -> Ordering {
        self.order.cmp(&other.order)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    #[serde(default)]
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub read_time: Option<u32>,
    #[serde(default)]
    pub featured: bool,
}

impl CatalogItem for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.excerpt
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn filter_values(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }

    fn cmp_rank(&self, other: &Self) -> Ordering {
        dates::compare_newest_first(&self.published_at, &other.published_at)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EmploymentType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Internship,
    Freelance,
    Research,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Internship => "Internship",
            EmploymentType::Freelance => "Freelance",
            EmploymentType::Research => "Research",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: i64,
}

impl Experience {
    /// `"January 2023 - Present"` style range
    pub fn date_range(&self) -> String {
        let end = if self.current {
            "Present".to_string()
        } else {
            self.end_date
                .as_deref()
                .map(dates::format_date)
                .unwrap_or_else(|| "Present".to_string())
        };
        format!("{} - {}", dates::format_date(&self.start_date), end)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PublicationStatus {
    Published,
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "In Preparation")]
    InPreparation,
    Accepted,
}

impl PublicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicationStatus::Published => "Published",
            PublicationStatus::UnderReview => "Under Review",
            PublicationStatus::InPreparation => "In Preparation",
            PublicationStatus::Accepted => "Accepted",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    pub venue: String,
    pub year: i32,
    pub status: PublicationStatus,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub pdf: Option<String>,
    #[serde(default)]
    pub arxiv: Option<String>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub citations: Option<u32>,
    #[serde(default)]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub years_of_experience: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SkillsData {
    #[serde(default)]
    pub categories: Vec<SkillCategory>,
}

impl SkillsData {
    /// Categories by ascending `order`; a missing order ranks as 0
    pub fn sorted_categories(&self) -> Vec<&SkillCategory> {
        let mut categories: Vec<&SkillCategory> = self.categories.iter().collect();
        categories.sort_by_key(|c| c.order.unwrap_or(0));
        categories
    }

    /// Skills across every category
    pub fn skill_count(&self) -> usize {
        self.categories.iter().map(|c| c.skills.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_known_and_unknown() {
        let json = serde_json::to_string(&ProjectCategory::OpenSource).unwrap();
        assert_eq!(json, "\"Open Source\"");
        let back: ProjectCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProjectCategory::OpenSource);

        let parsed: ProjectCategory = serde_json::from_str("\"Hackathon\"").unwrap();
        assert_eq!(parsed, ProjectCategory::Other("Hackathon".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"Hackathon\"");
    }

    #[test]
    fn project_parses_camel_case_content() {
        let json = r#"{
            "id": "1",
            "slug": "image-enhancement",
            "title": "Image Enhancement",
            "shortDescription": "Low-light enhancement",
            "category": "Research",
            "technologies": ["Python", "OpenCV"],
            "image": null,
            "metrics": {"ssim": 0.91234, "psnr": 28.5, "ie": null},
            "startDate": "2023-01-01",
            "endDate": "2023-06-01",
            "featured": true,
            "tags": ["vision"],
            "order": 2
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.category, ProjectCategory::Research);
        assert_eq!(project.order, 2);
        assert!(project.featured);
        let metrics = project.metrics.unwrap();
        assert_eq!(metrics.len(), 3);
        assert_eq!(metrics.get("psnr"), Some(28.5));
        assert_eq!(metrics.get("ie"), None);
        assert!(project.highlights.is_none());
    }

    #[test]
    fn metrics_format_with_fixed_decimals() {
        let mut map = BTreeMap::new();
        map.insert("ssim".to_string(), Some(0.91234));
        map.insert("ie".to_string(), None);
        let metrics = ProjectMetrics(map);

        assert_eq!(
            metrics.formatted(3),
            vec![
                ("ie".to_string(), "-".to_string()),
                ("ssim".to_string(), "0.912".to_string()),
            ]
        );
    }

    #[test]
    fn blog_post_featured_defaults_to_false() {
        let yaml = r#"
id: a
title: A
excerpt: First post
publishedAt: "2024-01-01"
tags: [Rust]
"#;
        let post: BlogPost = serde_yaml_ng::from_str(yaml).unwrap();
        assert!(!post.featured);
        assert_eq!(post.filter_values(), vec!["Rust"]);
    }

    #[test]
    fn experience_date_range_uses_present_for_current_roles() {
        let json = r#"{
            "id": "e1",
            "title": "Research Assistant",
            "company": "Lab",
            "type": "Research",
            "startDate": "2023-01-01",
            "endDate": null,
            "current": true
        }"#;
        let exp: Experience = serde_json::from_str(json).unwrap();
        assert_eq!(exp.employment_type, EmploymentType::Research);
        assert_eq!(exp.date_range(), "January 2023 - Present");
    }

    #[test]
    fn skill_categories_sort_by_order_with_missing_as_zero() {
        let data = SkillsData {
            categories: vec![
                SkillCategory {
                    name: "Web".into(),
                    skills: vec![],
                    order: Some(2),
                },
                SkillCategory {
                    name: "ML".into(),
                    skills: vec![],
                    order: None,
                },
                SkillCategory {
                    name: "Languages".into(),
                    skills: vec![],
                    order: Some(1),
                },
            ],
        };
        let names: Vec<&str> = data
            .sorted_categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["ML", "Languages", "Web"]);
    }

    #[test]
    fn project_links_skip_missing_urls() {
        let json = r#"{
            "id": "1", "slug": "s", "title": "T", "shortDescription": "d",
            "category": "Personal", "github": "https://github.com/x/y", "demo": null
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.links(), vec![("GitHub", "https://github.com/x/y")]);
    }
}
