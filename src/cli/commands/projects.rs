use super::{to_json, CommandContext, CommandHandler};
use crate::catalog::{paginate, CatalogQuery, Project};
use crate::Result;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// Handler for the `projects` command
pub struct ProjectsCommand {
    pub query: CatalogQuery,
    pub page: Option<usize>,
}

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Featured")]
    featured: String,
    #[tabled(rename = "Order")]
    order: i64,
}

impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            category: project.category.to_string(),
            featured: if project.featured { "yes" } else { "" }.to_string(),
            order: project.order,
        }
    }
}

impl CommandHandler for ProjectsCommand {
    fn render(&self, ctx: &CommandContext) -> Result<String> {
        let all = &ctx.portfolio.projects;
        let mut matched = self.query.apply(all);
        let matched_count = matched.len();

        if ctx.page_size > 0 {
            let page = paginate(&matched, self.page.unwrap_or(1), ctx.page_size);
            if ctx.is_json() {
                return to_json(&page);
            }
            matched = page.data;
        } else if ctx.is_json() {
            return to_json(&matched);
        }

        let mut out = format!("Showing {} of {} projects", matched_count, all.len());
        if matched.is_empty() {
            out.push_str("\nNo projects found matching your criteria");
            return Ok(out);
        }

        let rows: Vec<ProjectRow> = matched.iter().map(ProjectRow::from).collect();
        let table = Table::new(&rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string();
        out.push('\n');
        out.push_str(&table);
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "projects"
    }
}

impl ProjectsCommand {
    /// Create new projects command
    pub fn new(search: String, category: Option<String>, page: Option<usize>) -> Self {
        Self {
            query: CatalogQuery {
                search,
                filter: category,
            },
            page,
        }
    }
}
