use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tbap::cli::{Cli, Commands};
use tbap::commands::{self, CommandContext};
use tbap::observability::init_tracing;
use tbap::scoring::ManualScores;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbosity);

    let ctx = CommandContext::from_args(&cli.global)?;
    cli.global.color.resolve(ctx.config.use_color()).apply();
    let stdout = io::stdout().lock();

    match cli.command {
        Commands::Init { force } => {
            let dir = std::env::current_dir().context("Failed to read current directory")?;
            commands::init_config(&dir, force, ctx.format, stdout)
        }
        Commands::Questions { measure, questions } => {
            commands::list_questions(&ctx, measure, questions.as_deref(), stdout)
        }
        Commands::Score {
            responses,
            questions,
            save,
        } => commands::score_questions(&ctx, &responses, questions.as_deref(), save, stdout),
        Commands::Manual {
            tree,
            tree_strength,
            bucket,
            thickness,
            input,
            output,
            save,
        } => {
            let manual = ManualScores {
                tree,
                tree_strength,
                bucket,
                thickness,
                input,
                output,
            };
            commands::score_manual(&ctx, &manual, save, stdout)
        }
        Commands::Show => commands::show_saved(&ctx, stdout),
        Commands::Clear => commands::clear_saved(&ctx, stdout),
        Commands::Bands { measure } => commands::show_bands(&ctx, measure, stdout),
        Commands::ValidateContent { content, questions } => commands::validate_content(
            &ctx,
            content.as_deref(),
            questions.as_deref(),
            stdout,
        ),
    }
}
