use region_features::config::report;
use region_features::image::io::{load_binary_image, write_json_file};
use region_features::regions::{Region, RegionId};
use region_features::{RegionAnalyzer, ScanReport};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = report::load_config(Path::new(&config_path))?;

    let buffer = load_binary_image(&config.input, config.sentinels)?;
    let image = buffer.as_view();

    let mut analyzer = RegionAnalyzer::with_tolerances(config.tolerances);
    let scan = analyzer.rebuild(&image).map_err(|e| e.to_string())?.clone();

    let similar = match config.reference {
        Some(reference) => Some(SimilarityReport {
            reference,
            matches: analyzer
                .find_similar(reference)
                .map_err(|e| e.to_string())?,
        }),
        None => None,
    };

    let summary = RegionReport {
        input: config.input.display().to_string(),
        scan,
        regions: analyzer.store().iter().collect(),
        similar,
    };
    write_json_file(&config.output.report_json, &summary)?;

    println!(
        "Found {} regions in {} ({}x{}, {:.3} ms)",
        summary.scan.region_count,
        summary.input,
        buffer.width(),
        buffer.height(),
        summary.scan.timing.total_ms
    );
    if let Some(similar) = &summary.similar {
        println!(
            "Region #{} has {} similar regions: {:?}",
            similar.reference.0,
            similar.matches.len(),
            similar.matches.iter().map(|id| id.0).collect::<Vec<_>>()
        );
    }
    println!(
        "Saved region report to {}",
        config.output.report_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: region_report <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SimilarityReport {
    reference: RegionId,
    matches: Vec<RegionId>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegionReport<'a> {
    input: String,
    scan: ScanReport,
    regions: Vec<&'a Region>,
    similar: Option<SimilarityReport>,
}
