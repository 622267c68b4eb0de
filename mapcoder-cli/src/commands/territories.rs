use anyhow::{Context, Result};
use mapcoder::service::ListRequest;
use std::path::PathBuf;

pub fn run(
    codec_table: Option<PathBuf>,
    offset: Option<String>,
    count: Option<String>,
    json: bool,
) -> Result<()> {
    let service = super::service(codec_table)?;
    let page = service
        .territories(&ListRequest {
            offset,
            count,
            client: None,
        })
        .context("Failed to list territories")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    println!("{:<8} {:<8} Name", "Code", "Parent");
    println!("{}", "-".repeat(50));
    for territory in &page.territories {
        println!(
            "{:<8} {:<8} {}",
            territory.alpha_code,
            territory.parent_territory.as_deref().unwrap_or("-"),
            territory.full_name
        );
    }
    println!("{}", "-".repeat(50));
    println!(
        "Showing {} of {} territories",
        page.territories.len(),
        page.total
    );

    Ok(())
}
