//! Portfolio content catalog
//!
//! This module owns the content layer behind the portfolio pages: the
//! typed content snapshot, the query engine used by the project and blog
//! listings, and the helpers those listings apply to their items.
//!
//! # Overview
//!
//! - Load a static snapshot from a data directory (`Portfolio`)
//! - Search, filter and sort projects and blog posts (`query`)
//! - Derive the filter choices a listing offers (`derive_filter_options`)
//! - Validate a snapshot before publishing it (`validate_portfolio`)
//!
//! # Architecture
//!
//! ```text
//! data/
//!     ├── projects.json
//!     ├── blog.yaml
//!     └── ...              ← one file per collection
//!            │
//!            ▼
//!     CatalogLoader ──► Portfolio (immutable snapshot)
//!                           │
//!                           ▼
//!     CatalogQuery { search, filter } ──► query() ──► Vec<T>
//! ```

pub mod dates;
mod filters;
mod item;
mod loader;
mod model;
mod page;
mod query;
mod validate;

pub use filters::{derive_filter_options, filter_options, with_all, FilterOption};
pub use item::CatalogItem;
pub use loader::{CatalogLoader, Portfolio};
pub use model::{
    BlogPost, Certification, EmploymentType, Experience, PersonalInfo, Project, ProjectCategory,
    ProjectMetrics, Publication, PublicationStatus, Skill, SkillCategory, SkillLevel, SkillsData,
    SocialLinks,
};
pub use page::{paginate, Page};
pub use query::{query, CatalogQuery, ALL_FILTER};
pub use validate::{has_errors, validate_portfolio, Severity, ValidationIssue};
