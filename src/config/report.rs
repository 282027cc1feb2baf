use crate::image::Sentinels;
use crate::regions::RegionId;
use crate::similarity::SimilarityTolerances;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ReportToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub sentinels: Sentinels,
    #[serde(default)]
    pub tolerances: SimilarityTolerances,
    /// Region whose similar regions are listed in the report.
    #[serde(default)]
    pub reference: Option<RegionId>,
    pub output: ReportOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct ReportOutputConfig {
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<ReportToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<ReportToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
