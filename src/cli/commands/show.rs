use super::{to_json, CommandContext, CommandHandler};
use crate::catalog::{dates, Project};
use crate::format::tech_color;
use crate::{FolioError, Result};

/// Decimals used for metrics on the detail view
const METRIC_DECIMALS: usize = 3;

/// Handler for the `show` command
pub struct ShowCommand {
    pub slug: String,
}

impl CommandHandler for ShowCommand {
    fn render(&self, ctx: &CommandContext) -> Result<String> {
        let project = ctx
            .portfolio
            .project_by_slug(&self.slug)
            .ok_or_else(|| FolioError::NotFound(format!("Project not found: {}", self.slug)))?;

        if ctx.is_json() {
            return to_json(project);
        }
        Ok(self.render_text(project))
    }

    fn name(&self) -> &'static str {
        "show"
    }
}

impl ShowCommand {
    /// Create new show command
    pub fn new(slug: String) -> Self {
        Self { slug }
    }

    fn render_text(&self, project: &Project) -> String {
        let mut badges = vec![project.category.to_string()];
        if project.featured {
            badges.push("Featured".to_string());
        }
        let mut lines = vec![project.title.clone(), format!("[{}]", badges.join("] ["))];

        if !project.start_date.is_empty() {
            lines.push(format!(
                "{} - {}",
                dates::format_date(&project.start_date),
                dates::format_date(&project.end_date)
            ));
        }

        let description = if project.full_description.is_empty() {
            &project.short_description
        } else {
            &project.full_description
        };
        lines.push(String::new());
        lines.push(description.clone());

        if let Some(highlights) = project.highlights.as_ref().filter(|h| !h.is_empty()) {
            lines.push("\nHighlights:".to_string());
            lines.extend(highlights.iter().map(|h| format!("  - {}", h)));
        }

        if let Some(metrics) = project.metrics.as_ref().filter(|m| !m.is_empty()) {
            lines.push("\nMetrics:".to_string());
            lines.extend(
                metrics
                    .formatted(METRIC_DECIMALS)
                    .into_iter()
                    .map(|(key, value)| format!("  {:<10} {}", key.to_uppercase(), value)),
            );
        }

        if !project.technologies.is_empty() {
            lines.push("\nTechnologies:".to_string());
            lines.extend(
                project
                    .technologies
                    .iter()
                    .map(|tech| format!("  {:<14} {}", tech, tech_color(tech))),
            );
        }

        let links = project.links();
        if !links.is_empty() {
            lines.push("\nLinks:".to_string());
            lines.extend(
                links
                    .into_iter()
                    .map(|(label, url)| format!("  {:<8} {}", label, url)),
            );
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::test_support::context;
    use crate::config::OutputFormat;

    #[test]
    fn test_detail_view() {
        let ctx = context(OutputFormat::Text);
        let out = ShowCommand::new("image-enhancement".into()).render(&ctx).unwrap();

        assert!(out.starts_with("Image Enhancement\n[Research] [Featured]\n\nLow-light enhancement\n"));
        assert!(out.contains("SSIM       0.912"));
        assert!(out.contains("PSNR       27.400"));
        assert!(out.contains("bg-green-500/10 text-green-500 border-green-500/20"));
        assert!(out.contains("GitHub   https://github.com/me/ie"));
        assert!(out.contains("Highlights:\n  - Beat the baseline\n\nMetrics:\n  PSNR"));
        assert!(out.ends_with("GitHub   https://github.com/me/ie"));
    }

    #[test]
    fn test_unknown_slug() {
        let ctx = context(OutputFormat::Text);
        let err = ShowCommand::new("nope".into()).render(&ctx).unwrap_err();
        assert!(matches!(err, FolioError::NotFound(_)));
        assert_eq!(err.to_string(), "Project not found: nope");
    }
}
