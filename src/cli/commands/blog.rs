use super::{to_json, CommandContext, CommandHandler};
use crate::catalog::{dates, paginate, BlogPost, CatalogQuery};
use crate::format::truncate_text;
use crate::Result;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

const TITLE_WIDTH: usize = 48;

/// Handler for the `blog` command
pub struct BlogCommand {
    pub query: CatalogQuery,
    pub page: Option<usize>,
}

#[derive(Tabled)]
struct PostRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Published")]
    published: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl From<&BlogPost> for PostRow {
    fn from(post: &BlogPost) -> Self {
        let mut title = truncate_text(&post.title, TITLE_WIDTH);
        if post.featured {
            title.push_str(" *");
        }
        Self {
            id: post.id.clone(),
            title,
            published: dates::format_date(&post.published_at),
            tags: post.tags.join(", "),
        }
    }
}

impl CommandHandler for BlogCommand {
    fn render(&self, ctx: &CommandContext) -> Result<String> {
        let mut matched = self.query.apply(&ctx.portfolio.blog);
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

        let mut out = format!(
            "{} article{} found",
            matched_count,
            if matched_count == 1 { "" } else { "s" }
        );
        if matched.is_empty() {
            out.push_str("\nNo articles found matching your criteria");
            return Ok(out);
        }

        let rows: Vec<PostRow> = matched.iter().map(PostRow::from).collect();
        let table = Table::new(&rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string();
        out.push('\n');
        out.push_str(&table);
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "blog"
    }
}

impl BlogCommand {
    /// Create new blog command
    pub fn new(search: String, tag: Option<String>, page: Option<usize>) -> Self {
        Self {
            query: CatalogQuery { search, filter: tag },
            page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::test_support::context;
    use crate::config::OutputFormat;

    #[test]
    fn test_newest_first_with_plural_count() {
        let ctx = context(OutputFormat::Text);
        let out = BlogCommand::new(String::new(), None, None).render(&ctx).unwrap();

        assert!(out.starts_with("2 articles found"));
        assert!(out.contains("June 2024"));
        assert!(!out.contains("second"), "excerpts are not part of the table");
        assert!(out.find("Rust, CLI").unwrap() < out.find("January 2024").unwrap());
    }

    #[test]
    fn test_singular_count_for_tag_filter() {
        let ctx = context(OutputFormat::Text);
        let out = BlogCommand::new(String::new(), Some("CLI".into()), None)
            .render(&ctx)
            .unwrap();
        assert!(out.starts_with("1 article found"));
    }

    #[test]
    fn test_search_matches_excerpt() {
        let ctx = context(OutputFormat::Json);
        let out = BlogCommand::new("FIRST".into(), None, None).render(&ctx).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["id"], "a");
    }
}
