#![allow(clippy::exit)]

use anyhow::Result;
use chrono::Local;
use clap::Parser as _;
use roster_cli::cli::{Cli, Commands};
use roster_cli::commands::{
    generate_completions, run_create, run_delete, run_list, run_show, run_update,
};
use roster_cli::output::Output;
use roster_cli::{build_api, timing};

async fn run(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = cli.command {
        generate_completions(shell);
        return Ok(());
    }

    let api = build_api(cli.api_url.as_deref())?;

    match cli.command {
        Commands::List(args) => run_list(&api, &args).await.map(drop),
        Commands::Show { id } => run_show(&api, &id).await.map(drop),
        Commands::Create(args) => run_create(&api, &args, Local::now().date_naive())
            .await
            .map(drop),
        Commands::Update { id, fields } => run_update(&api, &id, &fields).await.map(drop),
        Commands::Delete { id, yes } => run_delete(&api, &id, yes).await.map(drop),
        Commands::Completions { .. } => Ok(()),
    }
}

#[tokio::main]
async fn main() {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing with timing support
    timing::init_tracing(cli.verbose, cli.timing);

    if let Err(err) = run(cli).await {
        Output::new().error(format!("{err:#}"));
        std::process::exit(1);
    }
}
