use anyhow::{Context, Result};
use clap::Parser;
use folio::{
    catalog::CatalogLoader,
    cli::commands::{
        about::AboutCommand, blog::BlogCommand, experience::ExperienceCommand,
        filters::FiltersCommand, projects::ProjectsCommand, show::ShowCommand,
        skills::SkillsCommand, validate::ValidateCommand, CommandContext, CommandHandler,
    },
    cli::{Cli, Commands, LogLevel},
    config::ConfigLoader,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initialize tracing from --log-level, with RUST_LOG taking precedence
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    // stdout carries command output only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let mut config = ConfigLoader::new(&cwd)
        .with_explicit_path(cli.config.clone())
        .load()?;

    if let Some(dir) = &cli.data_dir {
        config.settings.data_dir = dir.clone();
    }
    if let Some(format) = cli.output_override() {
        config.settings.output_format = format;
    }

    let handler: Box<dyn CommandHandler> = match cli.command {
        Commands::Projects {
            search,
            category,
            page,
        } => Box::new(ProjectsCommand::new(search, category, page)),
        Commands::Blog { search, tag, page } => Box::new(BlogCommand::new(search, tag, page)),
        Commands::Filters { listing } => Box::new(FiltersCommand::new(listing)),
        Commands::Show { slug } => Box::new(ShowCommand::new(slug)),
        Commands::Experience { limit } => Box::new(ExperienceCommand::new(limit)),
        Commands::About => Box::new(AboutCommand),
        Commands::Skills { category } => Box::new(SkillsCommand::new(category)),
        Commands::Validate { strict } => Box::new(ValidateCommand::new(strict)),
    };

    debug!(
        command = handler.name(),
        data_dir = %config.settings.data_dir.display(),
        "Running command"
    );

    let portfolio = CatalogLoader::new(&config.settings.data_dir).load()?;
    let ctx = CommandContext::new(
        portfolio,
        config.settings.output_format,
        config.settings.page_size,
    );

    handler.execute(&ctx)?;
    Ok(())
}
