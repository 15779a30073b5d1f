//! dockplan - pick a drone dock and plan the survey flights from it

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use dock_cli::{egress, ingest, report, Config};
use dock_core::{DockLocationEngine, SelectionPolicy, SurveyConstraints};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Location list (latitude,longitude,role per row) [env: DOCKPLAN_INPUT]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory for flight coordinate files [env: DOCKPLAN_OUTPUT_DIR]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Cruise speed in m/s
    #[arg(long, default_value_t = 15.0)]
    speed_mps: f64,

    /// Battery budget per flight in minutes
    #[arg(long, default_value_t = 40.0)]
    max_flight_minutes: f64,

    /// Minutes spent over each field
    #[arg(long, default_value_t = 10.0)]
    survey_minutes: f64,

    /// Minutes of charging between flights
    #[arg(long, default_value_t = 35.0)]
    charge_minutes: f64,

    /// Rank docks by fields reached first, then by time
    #[arg(long)]
    lexicographic: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Skip writing flight coordinate files
    #[arg(long)]
    no_export: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("dockplan=info".parse()?)
            .add_directive("dock_cli=info".parse()?)
            .add_directive("dock_core=info".parse()?))
        .init();

    let args = Args::parse();
    let config = Config::from_env();
    let input = args.input.unwrap_or(config.input_path);
    let output_dir = args.output_dir.unwrap_or(config.output_dir);

    let rules = SurveyConstraints {
        speed_mps: args.speed_mps,
        max_flight_minutes: args.max_flight_minutes,
        survey_minutes_per_field: args.survey_minutes,
        charge_minutes_between_flights: args.charge_minutes,
        selection_policy: if args.lexicographic {
            SelectionPolicy::Lexicographic
        } else {
            SelectionPolicy::EitherImproves
        },
        ..SurveyConstraints::default()
    };
    let engine = DockLocationEngine::new(rules)?;

    tracing::info!(input = %input.display(), "Planning dock placement");
    let outcome = ingest::load_points(&input);
    let dock_report = engine.run_points(&outcome.points);

    if !args.no_export {
        for result in dock_report.scenarios() {
            egress::export_scenario(&output_dir, result)?;
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dock_report)?);
    } else {
        print!("{}", report::render(&dock_report, Utc::now()));
    }

    Ok(())
}
