pub mod alphabets;
pub mod batch;
pub mod decode;
pub mod encode;
pub mod territories;
pub mod territory;

use anyhow::{Context, Result};
use mapcoder::format::MapcodeResult;
use mapcoder::{MapcodeService, MapcodeServiceBuilder};
use std::path::PathBuf;

/// Build the service from `--codec-table`, falling back to the environment.
pub fn service(codec_table: Option<PathBuf>) -> Result<MapcodeService> {
    let builder = match codec_table {
        Some(path) => MapcodeServiceBuilder::new().table(path),
        None => MapcodeServiceBuilder::from_env(),
    };
    let path = builder
        .table_path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    builder
        .build()
        .with_context(|| format!("Failed to load codec table '{}'", path))
}

/// A mapcode as people write it: territory prefix, then the code.
pub fn label(result: &MapcodeResult) -> String {
    match result.territory.as_deref() {
        Some(territory) if territory != "AAA" => format!("{} {}", territory, result.mapcode),
        _ => result.mapcode.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(mapcode: &str, territory: Option<&str>) -> MapcodeResult {
        MapcodeResult {
            mapcode: mapcode.to_string(),
            mapcode_in_alphabet: None,
            territory: territory.map(str::to_string),
            territory_in_alphabet: None,
            offset_meters: None,
            rectangle: None,
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(label(&result("JL0.KP", Some("LUX"))), "LUX JL0.KP");
        assert_eq!(label(&result("VJ0L6.9PNQ", None)), "VJ0L6.9PNQ");
        assert_eq!(label(&result("VJ0L6.9PNQ", Some("AAA"))), "VJ0L6.9PNQ");
    }

    #[test]
    fn test_service_missing_table() {
        let err = service(Some(PathBuf::from("/nonexistent/table.json"))).err().unwrap();
        assert!(err.to_string().contains("/nonexistent/table.json"));
    }
}
