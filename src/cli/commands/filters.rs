use super::{to_json, CommandContext, CommandHandler};
use crate::catalog::{filter_options, with_all, FilterOption};
use crate::cli::app::Listing;
use crate::Result;

/// Handler for the `filters` command
pub struct FiltersCommand {
    pub listing: Listing,
}

impl CommandHandler for FiltersCommand {
    fn render(&self, ctx: &CommandContext) -> Result<String> {
        let options: Vec<FilterOption> = match self.listing {
            Listing::Projects => with_all(
                filter_options(&ctx.portfolio.projects),
                ctx.portfolio.projects.len(),
            ),
            Listing::Blog => with_all(
                filter_options(&ctx.portfolio.blog),
                ctx.portfolio.blog.len(),
            ),
        };

        if ctx.is_json() {
            return to_json(&options);
        }

        let width = options
            .iter()
            .map(|o| o.label.chars().count())
            .max()
            .unwrap_or(0);

        Ok(options
            .iter()
            .map(|o| format!("{:<width$}  {}", o.label, o.count, width = width))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn name(&self) -> &'static str {
        "filters"
    }
}

impl FiltersCommand {
    /// Create new filters command
    pub fn new(listing: Listing) -> Self {
        Self { listing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::test_support::context;
    use crate::config::OutputFormat;

    #[test]
    fn test_project_categories() {
        let ctx = context(OutputFormat::Text);
        let out = FiltersCommand::new(Listing::Projects).render(&ctx).unwrap();
        assert_eq!(out, "All       3\nResearch  2\nAcademic  1");
    }

    #[test]
    fn test_blog_tags_json() {
        let ctx = context(OutputFormat::Json);
        let out = FiltersCommand::new(Listing::Blog).render(&ctx).unwrap();
        let options: Vec<FilterOption> = serde_json::from_str(&out).unwrap();
        let values: Vec<Option<&str>> = options.iter().map(|o| o.value.as_deref()).collect();
        assert_eq!(values, vec![None, Some("Rust"), Some("CLI")]);
        assert_eq!(options[0].label, "All");
        assert_eq!(options[1].count, 2);
    }
}
