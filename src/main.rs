use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use corepex::cli::{Cli, Commands, EstimatesCommand, ScoreArgs};
use corepex::ctx::Ctx;
use corepex::estimates;
use corepex::io;
use corepex::pipeline::Pipeline;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score(args) => {
            let ctx = run_score(args)?;
            print_summary(&ctx)?;
        }
        Commands::Estimates(args) => match args.command {
            EstimatesCommand::Show(show) => {
                let table = estimates::load_with_overlay(show.estimates.as_deref())?;
                print!("{}", io::summary::format_table(&table));
            }
        },
        Commands::Validate(args) => {
            let table = estimates::load_with_overlay(Some(args.estimates.as_path()))?;
            println!("corepex validate ok");
            println!("estimates: {} rows ({})", table.rows().len(), table.source);
        }
    }

    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<Ctx> {
    let mut ctx = Ctx::new(
        args.form(),
        args.out,
        args.estimates,
        args.json,
        args.tsv,
        args.html,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.record_path = args.record;
    ctx.charts = args.charts;
    ctx.horizon_months = args.horizon_months;

    Pipeline::evaluation().run(&mut ctx)?;
    Ok(ctx)
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}
