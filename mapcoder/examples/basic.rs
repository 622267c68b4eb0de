//! Basic example demonstrating mapcoder library usage.
//!
//! Run with: cargo run --example basic -- data/sample-table.json

use mapcoder::service::{DecodeRequest, EncodeRequest, EncodeResponse};
use mapcoder::{MapcodeService, MapcoderError};
use std::env;

fn main() -> Result<(), MapcoderError> {
    let table = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: cargo run --example basic -- /path/to/table.json");
        std::process::exit(1);
    });

    let service = MapcodeService::builder().table(&table).build()?;

    println!("Mapcodes for 50.141706,6.135864:");
    println!("{:-<50}", "");

    let request = EncodeRequest {
        include: Some("territory".to_string()),
        ..EncodeRequest::new("50.141706,6.135864")
    };
    match service.encode(&request) {
        Ok(EncodeResponse::All(all)) => {
            if let Some(local) = &all.local {
                let territory = local.territory.as_deref().unwrap_or("");
                println!("local:         {} {}", territory, local.mapcode);
            }
            println!("international: {}", all.international.mapcode);
            for result in &all.mapcodes {
                let territory = result.territory.as_deref().unwrap_or("");
                println!("  {} {}", territory, result.mapcode);
            }
        }
        Ok(other) => println!("{} mapcodes", other.len()),
        Err(e @ MapcoderError::NotFound { .. }) => println!("not in table: {}", e),
        Err(e) => return Err(e),
    }

    // Decode it back
    for code in ["LUX JL0.KP", "JL0.KP-4N"] {
        let request = DecodeRequest {
            context: Some("LUX".to_string()),
            ..DecodeRequest::new(code)
        };
        match service.decode(&request) {
            Ok(point) => println!("\n{} -> {:.6},{:.6}", code, point.lat_deg, point.lon_deg),
            Err(e) => println!("\n{}: error - {}", code, e),
        }
    }

    let metrics = service.metrics();
    println!("\nRequests served: {}", metrics.requests);

    Ok(())
}
