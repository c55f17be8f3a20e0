//! Results persistence module

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{json, to_string_pretty};

use crate::config::Config;
use crate::congestion::CongestionLevel;
use crate::data::CongestionResponse;

/// File holding the response document
pub const REGIONS_FILE: &str = "congested_regions.json";

/// File holding run statistics
pub const SUMMARY_FILE: &str = "summary.json";

/// Save detection results to the specified directory
///
/// Returns the paths written, response document first.
pub fn save_results<P: AsRef<Path>>(
    response: &CongestionResponse,
    config: &Config,
    output_dir: P,
) -> Result<Vec<PathBuf>> {
    let output_dir = output_dir.as_ref();
    log::info!(
        "Saving {} regions to {}",
        response.congested_regions.len(),
        output_dir.display()
    );
    
    // Ensure output directory exists
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;
    
    let regions_path = save_regions(response, output_dir)?;
    let summary_path = save_summary(response, config, output_dir)?;
    
    log::info!("Results saved successfully");
    
    Ok(vec![regions_path, summary_path])
}

/// Save the response document
fn save_regions(response: &CongestionResponse, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(REGIONS_FILE);
    let mut file = File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    
    file.write_all(to_string_pretty(response)?.as_bytes())?;
    
    Ok(path)
}

/// Save summary information
fn save_summary(
    response: &CongestionResponse,
    config: &Config,
    output_dir: &Path,
) -> Result<PathBuf> {
    log::info!("Saving summary information");
    
    let path = output_dir.join(SUMMARY_FILE);
    let mut file = File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    
    file.write_all(to_string_pretty(&summarize(response, config))?.as_bytes())?;
    
    Ok(path)
}

/// Aggregate statistics over a response
pub fn summarize(response: &CongestionResponse, config: &Config) -> serde_json::Value {
    let regions = &response.congested_regions;
    let count_level = |level: CongestionLevel| {
        regions.iter().filter(|r| r.congestion_level == level).count()
    };
    let total_vehicles: usize = regions.iter().map(|r| r.vehicle_ids.len()).sum();
    
    json!({
        "region_stats": {
            "region_count": regions.len(),
            "total_clustered_vehicles": total_vehicles,
            "largest_region_size": regions.iter().map(|r| r.vehicle_ids.len()).max().unwrap_or(0),
            "avg_region_size": total_vehicles as f64 /
                               if regions.is_empty() { 1.0 } else { regions.len() as f64 },
            "levels": {
                "high": count_level(CongestionLevel::High),
                "medium": count_level(CongestionLevel::Medium),
                "low": count_level(CongestionLevel::Low),
            }
        },
        "config": config,
    })
}
