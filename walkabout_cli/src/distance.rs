use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use indicatif::ProgressBar;
use tracing::{info, warn};
use walkabout_directions::{DirectionsClient, Kilometers, config::DirectionsConfig};
use walkabout_itinerary::{DayItinerary, DistanceAggregator, json::JsonItinerary};

use crate::file_utils::json_files;

#[derive(Args)]
pub struct DistanceArgs {
    /// An itinerary file, or a folder searched for .json itineraries
    #[arg(short = 'i', long)]
    input: PathBuf,
}

fn read_itinerary(path: &PathBuf) -> anyhow::Result<DayItinerary> {
    let f = File::open(path)?;
    let reader = BufReader::new(f);
    let content: JsonItinerary = serde_json::from_reader(reader)?;

    Ok(content.into_itinerary()?)
}

pub async fn run(args: DistanceArgs) -> anyhow::Result<()> {
    let paths = json_files(&args.input)?;
    info!("Measuring {} itineraries", paths.len());

    let client = DirectionsClient::new(DirectionsConfig::from_env()?);
    let aggregator = DistanceAggregator::new(client);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "File",
        "Date",
        "Locations",
        "Segments",
        "Failed",
        "Distance (km)",
    ]);

    let loading_bar = ProgressBar::new(paths.len() as u64);
    let mut total = Kilometers::ZERO;

    for path in &paths {
        let itinerary = match read_itinerary(path) {
            Ok(itinerary) => itinerary,
            Err(err) => {
                warn!("Skipping {}: {}", path.display(), err);
                loading_bar.inc(1);
                continue;
            }
        };

        let report = aggregator.aggregate_day(&itinerary).await;
        total += report.total_distance_km;

        table.add_row(vec![
            path.display().to_string(),
            itinerary.date().to_string(),
            itinerary.locations().len().to_string(),
            report.segments.to_string(),
            report.failed_segments.to_string(),
            format!("{:.2}", report.total_distance_km.value()),
        ]);

        loading_bar.inc(1);
    }

    loading_bar.finish_and_clear();

    if paths.len() > 1 {
        table.add_row(vec![
            String::from("Total"),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            format!("{:.2}", total.rounded().value()),
        ]);
    }

    println!("{table}");

    Ok(())
}
