use ecofrete::analysis::{format_summary, DatasetSummary};
use ecofrete::config::{dataset_path_from_env, Config};
use ecofrete::db::DatasetStore;
use ecofrete::format::NumberFormat;
use ecofrete::models::{EnergyPrices, PropulsionMode, ReportRow, TripContext};
use ecofrete::services::google_maps::GoogleMapsClient;
use ecofrete::services::report_builder::ReportBuilder;
use ecofrete::services::routing::RouteService;
use std::env;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        "\
Usage: ecofrete-report [OPTIONS]

Options:
  --origin=ADDRESS      Trip origin (required unless --summary)
  --destination=ADDRESS Trip destination (required unless --summary)
  --weight=TONNES       Cargo weight in tonnes (default: 0)
  --diesel-price=R$     Diesel price per liter, \"6.10\" or \"6,10\" (required unless --summary)
  --dry-run             Print the report without appending it to the dataset
  --json                Output rows as JSON
  --summary             Print totals for the existing dataset and exit
  --help                Show this help message"
    );
}

/// Accepts both `6.10` and pt-BR `6,10`
fn parse_number(text: &str) -> Result<f64, String> {
    if text.contains(',') {
        NumberFormat::brazilian().parse(text)
    } else {
        text.trim()
            .parse()
            .map_err(|_| format!("invalid number '{}'", text))
    }
}

fn format_table(rows: &[ReportRow], fmt: &NumberFormat) -> String {
    let mut out = String::new();

    for row in rows {
        out.push_str(&format!(
            "\n{} | {} -> {} | {} km | {}\n",
            row.route,
            row.origin,
            row.destination,
            fmt.format(row.distance_km),
            row.duration
        ));
        out.push_str(&format!(
            "  {:<9} {:>14} {:>14} {:>14}\n",
            "mode", "consumption", "cost (R$)", "CO2 (kg)"
        ));
        for mode in PropulsionMode::ALL {
            let figures = row.figures(mode);
            out.push_str(&format!(
                "  {:<9} {:>10} {:<3} {:>14} {:>14}\n",
                mode.to_string(),
                fmt.format(figures.consumption),
                mode.consumption_unit(),
                fmt.format(figures.cost),
                fmt.format(figures.emission_kg),
            ));
        }
    }

    out
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (less verbose for the CLI)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecofrete=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI args
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }

    let origin = args.iter().find_map(|a| a.strip_prefix("--origin="));
    let destination = args.iter().find_map(|a| a.strip_prefix("--destination="));
    let weight = args
        .iter()
        .find_map(|a| a.strip_prefix("--weight="))
        .map(parse_number)
        .transpose()?
        .unwrap_or(0.0);
    let diesel_price = args
        .iter()
        .find_map(|a| a.strip_prefix("--diesel-price="))
        .map(parse_number)
        .transpose()?;
    let dry_run = args.iter().any(|a| a == "--dry-run");
    let json_output = args.iter().any(|a| a == "--json");
    let summary_only = args.iter().any(|a| a == "--summary");

    // Summaries are offline: only the dataset path is needed
    if summary_only {
        let dataset_path = dataset_path_from_env().map_err(|e| format!("Config error: {}", e))?;
        let dataset = DatasetStore::new(dataset_path, NumberFormat::brazilian()).load()?;
        let summary = DatasetSummary::from_rows(&dataset.rows);
        if json_output {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print!("{}", format_summary(&summary));
        }
        return Ok(());
    }

    let (Some(origin), Some(destination), Some(diesel_price)) = (origin, destination, diesel_price)
    else {
        print_help();
        std::process::exit(2);
    };

    let trip = TripContext::new(origin, destination, weight, diesel_price);
    trip.validate()?;

    let config = Config::from_env().map_err(|e| format!("Config error: {}", e))?;
    let store = DatasetStore::new(&config.dataset_path, NumberFormat::brazilian());

    // Initialize services
    let route_service = RouteService::new(Arc::new(GoogleMapsClient::from_config(
        &config.google_maps,
    )));
    let report_builder = ReportBuilder::new(config.propulsion);

    let routes = route_service.find_routes(origin, destination).await;
    if routes.is_empty() {
        eprintln!("No routes found between '{}' and '{}'", origin, destination);
        return Ok(());
    }

    let rows = report_builder.build(&routes, &trip, &EnergyPrices::default())?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", format_table(&rows, &NumberFormat::brazilian()));
    }

    if dry_run {
        eprintln!("\nDry run: dataset not modified");
    } else {
        let appended = store.append(&rows)?;
        eprintln!(
            "\nAppended {} rows to {}",
            appended,
            store.path().display()
        );
    }

    Ok(())
}
