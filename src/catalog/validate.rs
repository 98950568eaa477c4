//! Data-quality checks for a content snapshot.
//!
//! The query engine tolerates bad data; this is where it gets reported
//! before a snapshot is published.

use super::dates::parse_date;
use super::item::CatalogItem;
use super::loader::Portfolio;
use super::model::Project;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub collection: &'static str,
    pub id: String,
    pub message: String,
}

impl ValidationIssue {
    fn error(collection: &'static str, id: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            collection,
            id: id.to_string(),
            message: message.into(),
        }
    }

    fn warning(collection: &'static str, id: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            collection,
            id: id.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}[{}]: {}", level, self.collection, self.id, self.message)
    }
}

/// Check a snapshot; `strict` turns every warning into an error.
pub fn validate_portfolio(portfolio: &Portfolio, strict: bool) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_unique_ids("projects", portfolio.projects.iter().map(|p| p.id.as_str()), &mut issues);
    check_unique_ids("blog", portfolio.blog.iter().map(|p| p.id.as_str()), &mut issues);
    check_unique_ids("experience", portfolio.experience.iter().map(|e| e.id.as_str()), &mut issues);
    check_unique_ids("publications", portfolio.publications.iter().map(|p| p.id.as_str()), &mut issues);
    check_unique_ids("certifications", portfolio.certifications.iter().map(|c| c.id.as_str()), &mut issues);

    let mut slugs = HashSet::new();
    for project in &portfolio.projects {
        if project.title.trim().is_empty() {
            issues.push(ValidationIssue::error("projects", &project.id, "title must not be empty"));
        }
        if project.slug.trim().is_empty() {
            issues.push(ValidationIssue::error("projects", &project.id, "slug must not be empty"));
        } else if !slugs.insert(project.slug.as_str()) {
            issues.push(ValidationIssue::error(
                "projects",
                &project.id,
                format!("duplicate slug '{}'", project.slug),
            ));
        }
        if Project::is_unfiltered(project.category.as_str()) {
            issues.push(ValidationIssue::error(
                "projects",
                &project.id,
                format!("category '{}' is reserved for the unfiltered listing", project.category),
            ));
        }
        for (field, value) in [("startDate", &project.start_date), ("endDate", &project.end_date)] {
            if !value.is_empty() && parse_date(value).is_none() {
                issues.push(ValidationIssue::warning(
                    "projects",
                    &project.id,
                    format!("{} '{}' is not a date", field, value),
                ));
            }
        }
        if let Some(metrics) = &project.metrics {
            for (key, value) in &metrics.0 {
                if value.is_some_and(|v| !v.is_finite()) {
                    issues.push(ValidationIssue::warning(
                        "projects",
                        &project.id,
                        format!("metric '{}' is not a finite number", key),
                    ));
                }
            }
        }
    }

    for post in &portfolio.blog {
        if post.title.trim().is_empty() {
            issues.push(ValidationIssue::error("blog", &post.id, "title must not be empty"));
        }
        if parse_date(&post.published_at).is_none() {
            issues.push(ValidationIssue::warning(
                "blog",
                &post.id,
                format!("publishedAt '{}' is not a date; the post will sort last", post.published_at),
            ));
        }
    }

    for exp in &portfolio.experience {
        if exp.title.trim().is_empty() {
            issues.push(ValidationIssue::error("experience", &exp.id, "title must not be empty"));
        }
        if parse_date(&exp.start_date).is_none() {
            issues.push(ValidationIssue::warning(
                "experience",
                &exp.id,
                format!("startDate '{}' is not a date", exp.start_date),
            ));
        }
        if exp.current && exp.end_date.is_some() {
            issues.push(ValidationIssue::warning(
                "experience",
                &exp.id,
                "marked current but has an endDate",
            ));
        }
    }

    for publication in &portfolio.publications {
        if publication.title.trim().is_empty() {
            issues.push(ValidationIssue::error("publications", &publication.id, "title must not be empty"));
        }
    }

    for cert in &portfolio.certifications {
        if cert.name.trim().is_empty() {
            issues.push(ValidationIssue::error("certifications", &cert.id, "name must not be empty"));
        }
    }

    if strict {
        for issue in &mut issues {
            issue.severity = Severity::Error;
        }
    }

    issues
}

fn check_unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
    issues: &mut Vec<ValidationIssue>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            issues.push(ValidationIssue::error(collection, id, "id must not be empty"));
        } else if !seen.insert(id) {
            issues.push(ValidationIssue::error(collection, id, "duplicate id"));
        }
    }
}

/// True when any issue is an error
pub fn has_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(|issue| issue.severity == Severity::Error)
}
