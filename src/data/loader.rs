//! Reading request documents from disk

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::data::CongestionRequest;

/// Load a congestion request from a JSON file
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<CongestionRequest> {
    let path = path.as_ref();
    log::info!("Loading observations from {}", path.display());
    
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read request file {}", path.display()))?;
    let request = parse_request(&text)
        .with_context(|| format!("failed to parse request file {}", path.display()))?;
    
    log::info!("Loaded {} observations", request.observations.len());
    
    Ok(request)
}

/// Parse a congestion request from JSON text
pub fn parse_request(text: &str) -> Result<CongestionRequest> {
    let request: CongestionRequest = serde_json::from_str(text)?;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional_fields() {
        let request = parse_request(
            r#"{"observations": [
                {"vehicle_id": "A", "coordinate": {"latitude": 40.0, "longitude": -74.0}, "speed_kph": 8},
                {"vehicle_id": "B", "coordinate": {"latitude": 40.0003, "longitude": -74.0002}, "heading_degrees": 90}
            ]}"#,
        )
        .unwrap();

        assert_eq!(request.observations.len(), 2);
        assert_eq!(request.observations[0].speed_kph, Some(8.0));
        assert_eq!(request.observations[0].heading_degrees, None);
        assert_eq!(request.observations[1].speed_kph, None);
        assert_eq!(request.observations[1].heading_degrees, Some(90.0));
    }

    #[test]
    fn test_parse_rejects_missing_coordinate() {
        assert!(parse_request(r#"{"observations": [{"vehicle_id": "A"}]}"#).is_err());
    }
}
