use anyhow::{Context, Result};
use mapcoder::service::{EncodeRequest, EncodeResponse};
use std::path::PathBuf;

/// Raw encode arguments, validated by the service.
pub struct Options {
    pub lat: String,
    pub lon: String,
    pub kind: Option<String>,
    pub territory: Option<String>,
    pub country: Option<String>,
    pub precision: Option<String>,
    pub alphabet: Option<String>,
    pub include: Option<String>,
}

impl Options {
    fn into_request(self) -> EncodeRequest {
        EncodeRequest {
            kind: self.kind,
            precision: self.precision,
            territory: self.territory,
            country: self.country,
            alphabet: self.alphabet,
            include: self.include,
            ..EncodeRequest::new(format!("{},{}", self.lat.trim(), self.lon.trim()))
        }
    }
}

pub fn run(codec_table: Option<PathBuf>, options: Options, json: bool) -> Result<()> {
    let service = super::service(codec_table)?;
    let coordinate = format!("{},{}", options.lat.trim(), options.lon.trim());
    let response = service
        .encode(&options.into_request())
        .with_context(|| format!("Failed to encode {}", coordinate))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match &response {
        EncodeResponse::All(all) => {
            match &all.local {
                Some(local) => println!("local:         {}", super::label(local)),
                None => println!("local:         -"),
            }
            println!("international: {}", super::label(&all.international));
            println!();
            for result in &all.mapcodes {
                println!("{}", super::label(result));
            }
        }
        other => {
            for result in other.results() {
                match &result.mapcode_in_alphabet {
                    Some(rendered) if *rendered != result.mapcode => {
                        println!("{}  ({})", super::label(result), rendered)
                    }
                    _ => println!("{}", super::label(result)),
                }
            }
        }
    }

    Ok(())
}
