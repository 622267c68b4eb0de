use anyhow::{Context, Result};
use mapcoder::service::ListRequest;
use std::path::PathBuf;

pub fn run(
    codec_table: Option<PathBuf>,
    offset: Option<String>,
    count: Option<String>,
) -> Result<()> {
    let service = super::service(codec_table)?;
    let page = service
        .alphabets(&ListRequest {
            offset,
            count,
            client: None,
        })
        .context("Failed to list alphabets")?;

    for alphabet in &page.alphabets {
        println!("{}", alphabet.name);
    }
    println!();
    println!("Showing {} of {} alphabets", page.alphabets.len(), page.total);

    Ok(())
}
