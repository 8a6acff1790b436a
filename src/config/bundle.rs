use crate::bundler::BundlerParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BundleToolConfig {
    /// JSON file with detector output, one frame or a list of frames.
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub params: BundlerParams,
    pub output: BundleOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct BundleOutputConfig {
    #[serde(rename = "result_json")]
    pub result_json: PathBuf,
    #[serde(default)]
    pub overlay: Option<OverlayConfig>,
}

/// Draw the result over a still image. Only used for single-frame input.
#[derive(Debug, Deserialize)]
pub struct OverlayConfig {
    pub image: PathBuf,
    pub path: PathBuf,
    #[serde(default)]
    pub line_half_width: Option<i32>,
    #[serde(default)]
    pub point_radius: Option<i32>,
}

pub fn load_config(path: &Path) -> Result<BundleToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<BundleToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
