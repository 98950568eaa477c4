use super::{to_json, CommandContext, CommandHandler};
use crate::catalog::{has_errors, validate_portfolio, Severity, ValidationIssue};
use crate::{FolioError, Result};
use tracing::info;

/// Handler for the `validate` command
pub struct ValidateCommand {
    pub strict: bool,
}

impl CommandHandler for ValidateCommand {
    fn render(&self, ctx: &CommandContext) -> Result<String> {
        let issues = validate_portfolio(&ctx.portfolio, self.strict);
        report(&issues, ctx)
    }

    fn name(&self) -> &'static str {
        "validate"
    }

    /// Prints the report, then fails when any issue is an error
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let issues = validate_portfolio(&ctx.portfolio, self.strict);
        println!("{}", report(&issues, ctx)?);

        info!(issues = issues.len(), strict = self.strict, "Validation finished");
        if has_errors(&issues) {
            return Err(FolioError::Validation(summary(&issues)));
        }
        Ok(())
    }
}

impl ValidateCommand {
    /// Create new validate command
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }
}

fn report(issues: &[ValidationIssue], ctx: &CommandContext) -> Result<String> {
    if ctx.is_json() {
        return to_json(&issues);
    }
    if issues.is_empty() {
        return Ok("No issues found".to_string());
    }

    let mut lines: Vec<String> = issues.iter().map(ToString::to_string).collect();
    lines.push(summary(issues));
    Ok(lines.join("\n"))
}

fn summary(issues: &[ValidationIssue]) -> String {
    let errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    format!("{} error(s), {} warning(s)", errors, issues.len() - errors)
}
