use crate::config::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// folio: query the content behind a personal portfolio site
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "Query the content behind a personal portfolio site")]
#[command(
    long_about = "folio loads portfolio content (projects, blog posts, experience, ...) from a data directory and answers the same search and filter queries the site's listing pages do."
)]
pub struct Cli {
    /// Log verbosity (RUST_LOG overrides)
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Configuration file path (discovered from ./folio.yaml when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Content directory (overrides settings.dataDir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Output format requested on the command line, if any
    pub fn output_override(&self) -> Option<OutputFormat> {
        self.json.then_some(OutputFormat::Json)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects, featured first
    Projects {
        /// Search title, description and technologies
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only projects in this category ("All" for every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Page to show when paging is enabled
        #[arg(long)]
        page: Option<usize>,
    },

    /// List blog posts, featured first then newest
    Blog {
        /// Search title and excerpt
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only posts carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Page to show when paging is enabled
        #[arg(long)]
        page: Option<usize>,
    },

    /// Show the filter choices a listing offers
    Filters {
        /// Listing to derive filters for
        #[arg(value_enum)]
        listing: Listing,
    },

    /// Show a single project by slug
    Show {
        /// Project slug
        slug: String,
    },

    /// List experience entries in display order
    Experience {
        /// Show only the first N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the profile, publications and certifications
    About,

    /// List skills by category
    Skills {
        /// Only this skill category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Check the content files for data problems
    Validate {
        /// Treat warnings as errors
        #[arg(short, long)]
        strict: bool,
    },
}

/// Listings that support filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Listing {
    Projects,
    Blog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_projects_parsing() {
        let cli = Cli::parse_from(["folio", "projects", "--search", "react", "-c", "Research"]);

        match cli.command {
            Commands::Projects {
                search,
                category,
                page,
            } => {
                assert_eq!(search, "react");
                assert_eq!(category.as_deref(), Some("Research"));
                assert_eq!(page, None);
            }
            _ => panic!("Wrong command parsed"),
        }
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert!(!cli.json);
    }

    #[test]
    fn test_blog_defaults() {
        let cli = Cli::parse_from(["folio", "blog"]);

        match cli.command {
            Commands::Blog { search, tag, page } => {
                assert_eq!(search, "");
                assert_eq!(tag, None);
                assert_eq!(page, None);
            }
            _ => panic!("Wrong command parsed"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "folio",
            "filters",
            "blog",
            "--json",
            "--data-dir",
            "content",
            "--log-level",
            "debug",
        ]);

        assert!(matches!(
            cli.command,
            Commands::Filters {
                listing: Listing::Blog
            }
        ));
        assert!(cli.json);
        assert_eq!(cli.output_override(), Some(OutputFormat::Json));
        assert_eq!(cli.data_dir, Some(PathBuf::from("content")));
        assert_eq!(cli.log_level.to_filter_directive(), "debug");
    }

    #[test]
    fn test_validate_and_show() {
        let cli = Cli::parse_from(["folio", "validate", "--strict"]);
        assert!(matches!(cli.command, Commands::Validate { strict: true }));

        let cli = Cli::parse_from(["folio", "show", "image-enhancement"]);
        match cli.command {
            Commands::Show { slug } => assert_eq!(slug, "image-enhancement"),
            _ => panic!("Wrong command parsed"),
        }
    }

    #[test]
    fn test_about_and_skills() {
        let cli = Cli::parse_from(["folio", "about", "--json"]);
        assert!(matches!(cli.command, Commands::About));
        assert!(cli.json);

        let cli = Cli::parse_from(["folio", "skills", "-c", "ML"]);
        match cli.command {
            Commands::Skills { category } => assert_eq!(category.as_deref(), Some("ML")),
            _ => panic!("Wrong command parsed"),
        }
    }

    #[test]
    fn test_unknown_listing_rejected() {
        assert!(Cli::try_parse_from(["folio", "filters", "experience"]).is_err());
    }
}
