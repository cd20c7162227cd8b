use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("agl error: {error:#}");
        if error
            .downcast_ref::<agile_client::ClientError>()
            .is_some_and(agile_client::ClientError::is_unauthorized)
        {
            eprintln!("hint: refresh api.session_cookie (AGILE_API__SESSION_COOKIE) from a signed-in browser session");
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    if let cli::Commands::Schema(args) = &cli.command {
        let flags = cli.global_flags("json");
        return commands::schema::handle(args, &flags);
    }

    let config = bootstrap::load_config()?;
    let flags = cli.global_flags(&config.general.default_format);
    ui::init(&flags);
    context::warn_unconfigured(&config);

    let ctx = context::AppContext::init(config, &flags)
        .context("failed to initialize agile application context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AGILE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
