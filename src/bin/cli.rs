use censusq::repl::{render_error_banner, render_sql_panel, render_table};
use censusq::{
    create_http_backend, ExampleFeed, InteractiveRepl, Orchestrator, QueryPhase, Result,
    TelemetryClient, DEFAULT_ENDPOINT,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "censusq", about = "Ask census questions in plain English", version)]
struct Cli {
    /// Base URL of the text-to-SQL service.
    #[arg(long, env = "CENSUSQ_ENDPOINT", default_value = DEFAULT_ENDPOINT, global = true)]
    endpoint: String,

    /// Event-capture URL; telemetry is off when unset.
    #[arg(long, env = "CENSUSQ_TELEMETRY", global = true)]
    telemetry: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single query and print the results.
    Query {
        /// The question, in plain English.
        text: String,

        /// Also print the map document (GeoJSON sources, layers, camera).
        #[arg(long)]
        geojson: bool,
    },
    /// Start the interactive session.
    Repl,
}

fn build_orchestrator(cli: &Cli) -> Orchestrator {
    let mut orchestrator = Orchestrator::new(create_http_backend(cli.endpoint.clone()));
    if let Some(endpoint) = &cli.telemetry {
        orchestrator = orchestrator.with_telemetry(TelemetryClient::new(endpoint.clone()));
    }
    orchestrator
}

async fn run_query(mut orchestrator: Orchestrator, text: &str, geojson: bool) -> Result<bool> {
    let phase = orchestrator.submit(text).await;
    let state = orchestrator.state();

    match phase {
        QueryPhase::Failure => {
            let message = state.error_message.as_deref().unwrap_or("unknown error");
            eprintln!("{}", render_error_banner(message));
            Ok(false)
        }
        _ => {
            println!("{}", render_sql_panel(&state.sql_query));
            if let Some(table) = render_table(&state.columns, &state.rows) {
                println!("{table}");
            }
            if geojson {
                println!("{}", serde_json::to_string_pretty(&state.map_document())?);
            }
            Ok(true)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();
    let orchestrator = build_orchestrator(&cli);

    match cli.command {
        Commands::Query { ref text, geojson } => {
            if !run_query(orchestrator, text, geojson).await? {
                std::process::exit(1);
            }
        }
        Commands::Repl => {
            let mut repl = InteractiveRepl::new(orchestrator, ExampleFeed::default())?;
            repl.run().await?;
        }
    }

    Ok(())
}
