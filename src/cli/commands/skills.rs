use super::{to_json, CommandContext, CommandHandler};
use crate::catalog::{Skill, SkillCategory};
use crate::Result;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// Handler for the `skills` command
pub struct SkillsCommand {
    /// Only this category, matched exactly
    pub category: Option<String>,
}

#[derive(Tabled)]
struct SkillRow {
    #[tabled(rename = "Skill")]
    name: String,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Experience")]
    years: String,
}

impl From<&Skill> for SkillRow {
    fn from(skill: &Skill) -> Self {
        let years = match skill.years_of_experience {
            Some(y) if y == 1.0 => "1 year".to_string(),
            Some(y) => format!("{} years", y),
            None => String::new(),
        };
        Self {
            name: skill.name.clone(),
            level: skill.level.as_str().to_string(),
            years,
        }
    }
}

impl CommandHandler for SkillsCommand {
    fn render(&self, ctx: &CommandContext) -> Result<String> {
        let skills = &ctx.portfolio.skills;
        let categories: Vec<&SkillCategory> = skills
            .sorted_categories()
            .into_iter()
            .filter(|c| self.category.as_deref().map_or(true, |name| c.name == name))
            .collect();

        if ctx.is_json() {
            return to_json(&categories);
        }

        let mut sections = vec![format!(
            "{} categories | {} skills",
            skills.categories.len(),
            skills.skill_count()
        )];
        if categories.is_empty() {
            sections.push("No skills found".to_string());
        }

        for category in categories {
            let rows: Vec<SkillRow> = category.skills.iter().map(SkillRow::from).collect();
            let table = Table::new(&rows)
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()))
                .to_string();
            sections.push(format!("{}\n{}", category.name, table));
        }

        Ok(sections.join("\n\n"))
    }

    fn name(&self) -> &'static str {
        "skills"
    }
}

impl SkillsCommand {
    /// Create new skills command
    pub fn new(category: Option<String>) -> Self {
        Self { category }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::test_support::context;
    use crate::config::OutputFormat;

    #[test]
    fn test_categories_in_order_with_years() {
        let ctx = context(OutputFormat::Text);
        let out = SkillsCommand::new(None).render(&ctx).unwrap();

        assert!(out.starts_with("2 categories | 3 skills"));
        assert!(out.find("ML\n").unwrap() < out.find("Web\n").unwrap());
        assert!(out.contains("4 years"));
        assert!(out.contains("1 year "));
        assert!(out.contains("Expert"));
    }

    #[test]
    fn test_category_filter() {
        let ctx = context(OutputFormat::Json);
        let out = SkillsCommand::new(Some("Web".into())).render(&ctx).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["skills"][0]["name"], "React");
    }

    #[test]
    fn test_unknown_category() {
        let ctx = context(OutputFormat::Text);
        let out = SkillsCommand::new(Some("Cooking".into())).render(&ctx).unwrap();
        assert_eq!(out, "2 categories | 3 skills\n\nNo skills found");
    }
}
