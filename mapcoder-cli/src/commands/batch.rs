use anyhow::{bail, Context, Result};
use geojson::{GeoJson, Value};
use indicatif::{ProgressBar, ProgressStyle};
use mapcoder::service::{EncodeRequest, EncodeResponse};
use mapcoder::MapcodeService;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const LOCAL_COLUMN: &str = "local_mapcode";
const INTERNATIONAL_COLUMN: &str = "international_mapcode";

/// Local and international mapcode of one coordinate, as labels.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Mapcodes {
    local: Option<String>,
    international: String,
}

pub fn run(
    codec_table: Option<PathBuf>,
    input: PathBuf,
    output: Option<PathBuf>,
    lat_col: String,
    lon_col: String,
    precision: Option<String>,
) -> Result<()> {
    let service = super::service(codec_table)?;

    // Detect file format
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let output_path = match output {
        Some(path) => path,
        None => default_output(&input, &extension)?,
    };

    let (written, failed) = match extension.as_str() {
        "csv" => process_csv(
            &service,
            &input,
            &output_path,
            &lat_col,
            &lon_col,
            precision.as_deref(),
        )?,
        "geojson" | "json" => {
            process_geojson(&service, &input, &output_path, precision.as_deref())?
        }
        _ => bail!(
            "Unsupported file format: {}. Use .csv or .geojson",
            extension
        ),
    };

    if failed > 0 {
        eprintln!("{} of {} coordinates could not be encoded", failed, written);
    }
    println!("Output written to: {}", output_path.display());
    Ok(())
}

fn default_output(input: &Path, extension: &str) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .with_context(|| format!("Input path has no file name: {}", input.display()))?
        .to_string_lossy();
    Ok(input.with_file_name(format!("{}_mapcodes.{}", stem, extension)))
}

fn progress_bar(len: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

fn encode(
    service: &MapcodeService,
    coordinate: String,
    precision: Option<&str>,
) -> Option<Mapcodes> {
    let request = EncodeRequest {
        precision: precision.map(str::to_string),
        ..EncodeRequest::new(coordinate)
    };
    match service.encode(&request).ok()? {
        EncodeResponse::All(all) => Some(Mapcodes {
            local: all.local.as_ref().map(super::label),
            international: super::label(&all.international),
        }),
        _ => None,
    }
}

/// Returns the number of rows processed and how many failed to encode.
fn process_csv(
    service: &MapcodeService,
    input: &Path,
    output_path: &Path,
    lat_col: &str,
    lon_col: &str,
    precision: Option<&str>,
) -> Result<(usize, usize)> {
    let file = File::open(input).context("Failed to open input file")?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    // Find column indices
    let headers = reader.headers()?.clone();
    let lat_idx = headers
        .iter()
        .position(|h| h == lat_col)
        .with_context(|| format!("Column '{}' not found in CSV", lat_col))?;
    let lon_idx = headers
        .iter()
        .position(|h| h == lon_col)
        .with_context(|| format!("Column '{}' not found in CSV", lon_col))?;

    let records: Vec<_> = reader.records().collect::<Result<_, _>>()?;
    let pb = progress_bar(records.len() as u64)?;

    let output_file = File::create(output_path).context("Failed to create output file")?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(output_file));

    let mut new_headers: Vec<&str> = headers.iter().collect();
    new_headers.push(LOCAL_COLUMN);
    new_headers.push(INTERNATIONAL_COLUMN);
    writer.write_record(&new_headers)?;

    let mut failed = 0;
    for record in &records {
        let lat = record.get(lat_idx).unwrap_or("");
        let lon = record.get(lon_idx).unwrap_or("");
        let mapcodes = encode(service, format!("{},{}", lat.trim(), lon.trim()), precision);

        let (local, international) = match mapcodes {
            Some(m) => (m.local.unwrap_or_default(), m.international),
            None => {
                failed += 1;
                (String::new(), String::new())
            }
        };

        let mut new_record: Vec<&str> = record.iter().collect();
        new_record.push(&local);
        new_record.push(&international);
        writer.write_record(&new_record)?;

        pb.inc(1);
    }

    pb.finish_with_message("done");
    writer.flush()?;

    Ok((records.len(), failed))
}

/// Adds mapcode properties to every feature with a point geometry.
fn process_geojson(
    service: &MapcodeService,
    input: &Path,
    output_path: &Path,
    precision: Option<&str>,
) -> Result<(usize, usize)> {
    let file = File::open(input).context("Failed to open input file")?;
    let geojson: GeoJson =
        serde_json::from_reader(BufReader::new(file)).context("Failed to parse GeoJSON")?;

    let mut points = 0;
    let mut failed = 0;
    let mut annotate = |feature: &mut geojson::Feature| {
        let Some(Value::Point(position)) = feature.geometry.as_ref().map(|g| &g.value) else {
            return;
        };
        if position.len() < 2 {
            return;
        }
        // GeoJSON positions are lon, lat
        let coordinate = format!("{},{}", position[1], position[0]);
        points += 1;
        match encode(service, coordinate, precision) {
            Some(mapcodes) => {
                if let Some(local) = mapcodes.local {
                    feature.set_property(LOCAL_COLUMN, local);
                }
                feature.set_property(INTERNATIONAL_COLUMN, mapcodes.international);
            }
            None => failed += 1,
        }
    };

    let result = match geojson {
        GeoJson::Geometry(_) => bail!("A bare geometry has no properties; wrap it in a Feature"),
        GeoJson::Feature(mut feature) => {
            annotate(&mut feature);
            GeoJson::Feature(feature)
        }
        GeoJson::FeatureCollection(mut fc) => {
            let pb = progress_bar(fc.features.len() as u64)?;
            for feature in &mut fc.features {
                annotate(feature);
                pb.inc(1);
            }
            pb.finish_with_message("done");
            GeoJson::FeatureCollection(fc)
        }
    };

    let output_file = File::create(output_path).context("Failed to create output file")?;
    let mut writer = BufWriter::new(output_file);
    serde_json::to_writer_pretty(&mut writer, &result)?;
    writer.flush()?;

    Ok((points, failed))
}
