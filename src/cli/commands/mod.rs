pub mod about;
pub mod blog;
pub mod experience;
pub mod filters;
pub mod projects;
pub mod show;
pub mod skills;
pub mod validate;

use crate::catalog::Portfolio;
use crate::config::OutputFormat;
use crate::Result;
use serde::Serialize;

/// Everything a command needs: the loaded snapshot and output settings
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub portfolio: Portfolio,
    pub format: OutputFormat,
    /// Items per page for listings; 0 disables paging
    pub page_size: usize,
}

impl CommandContext {
    pub fn new(portfolio: Portfolio, format: OutputFormat, page_size: usize) -> Self {
        Self {
            portfolio,
            format,
            page_size,
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Produce the command's output without printing it
    fn render(&self, ctx: &CommandContext) -> Result<String>;

    /// Get command name for logging
    fn name(&self) -> &'static str;

    /// Execute the command
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let output = self.render(ctx)?;
        println!("{}", output);
        Ok(())
    }
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
