use super::{to_json, CommandContext, CommandHandler};
use crate::catalog::{dates, Experience};
use crate::Result;
use chrono::{Local, NaiveDate};

/// Handler for the `experience` command
pub struct ExperienceCommand {
    pub limit: Option<usize>,
    /// Reference date for open-ended roles
    pub today: NaiveDate,
}

impl CommandHandler for ExperienceCommand {
    fn render(&self, ctx: &CommandContext) -> Result<String> {
        let mut entries = ctx.portfolio.sorted_experience();
        if let Some(limit) = self.limit {
            entries.truncate(limit);
        }

        if ctx.is_json() {
            return to_json(&entries);
        }

        if entries.is_empty() {
            return Ok("No experience entries".to_string());
        }

        Ok(entries
            .iter()
            .map(|exp| self.render_entry(exp))
            .collect::<Vec<_>>()
            .join("\n\n"))
    }

    fn name(&self) -> &'static str {
        "experience"
    }
}

impl ExperienceCommand {
    /// Create new experience command measuring open roles up to today
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            today: Local::now().date_naive(),
        }
    }

    fn render_entry(&self, exp: &Experience) -> String {
        let end = if exp.current { None } else { exp.end_date.as_deref() };
        let duration = dates::calculate_duration(&exp.start_date, end, self.today)
            .map(|d| format!(" ({})", d))
            .unwrap_or_default();

        let mut lines = vec![
            format!("{} at {}", exp.title, exp.company),
            format!(
                "{}{} | {}",
                exp.date_range(),
                duration,
                exp.employment_type.as_str()
            ),
        ];
        if !exp.technologies.is_empty() {
            lines.push(exp.technologies.join(", "));
        }
        lines.join("\n")
    }
}
