use clap::Parser;
use live_region_panel::cli::commands::{cmd_replay, cmd_summary};
use live_region_panel::cli::config::{Cli, Commands, build_replay_options, load_config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("warn,live_region_panel={}", log_level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Replay {
            events,
            persist,
            acc_name,
            tab_id,
            filter,
            format,
            output,
            trace,
        } => {
            let options = build_replay_options(
                &events,
                persist,
                acc_name,
                tab_id,
                filter,
                format.as_deref(),
                output.as_deref(),
                trace.as_deref(),
                &config,
            );
            cmd_replay(&options, cli.verbose)?;
        }
        Commands::Summary {
            events,
            persist,
            tab_id,
        } => {
            cmd_summary(
                &events,
                persist || config.panel.persistent_log,
                tab_id.or(config.panel.tab_id),
            )?;
        }
    }

    Ok(())
}
