use anyhow::{Context, Result};
use mapcoder::service::DecodeRequest;
use std::path::PathBuf;

pub fn run(
    codec_table: Option<PathBuf>,
    code: String,
    context: Option<String>,
    include: Option<String>,
    json: bool,
) -> Result<()> {
    let service = super::service(codec_table)?;
    let request = DecodeRequest {
        context,
        include,
        ..DecodeRequest::new(code.as_str())
    };
    let response = service
        .decode(&request)
        .with_context(|| format!("Failed to decode '{}'", code))?;

    if json {
        println!("{}", serde_json::to_string(&response)?);
        return Ok(());
    }

    println!("{:.8},{:.8}", response.lat_deg, response.lon_deg);
    if let Some(rectangle) = &response.rectangle {
        println!(
            "rectangle: {:.8},{:.8} - {:.8},{:.8}",
            rectangle.south_west.lat_deg,
            rectangle.south_west.lon_deg,
            rectangle.north_east.lat_deg,
            rectangle.north_east.lon_deg
        );
    }

    Ok(())
}
