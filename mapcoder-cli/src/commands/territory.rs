use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn run(codec_table: Option<PathBuf>, code: String, context: Option<String>) -> Result<()> {
    let service = super::service(codec_table)?;
    let territory = service
        .territory(&code, context.as_deref(), None)
        .with_context(|| format!("Unknown territory '{}'", code))?;

    println!("Code:              {}", territory.alpha_code);
    println!("Minimal code:      {}", territory.alpha_code_minimal);
    println!(
        "Unambiguous code:  {}",
        territory.alpha_code_minimal_unambiguous
    );
    println!("Name:              {}", territory.full_name);
    if let Some(parent) = &territory.parent_territory {
        println!("Parent:            {}", parent);
    }
    if !territory.aliases.is_empty() {
        println!("Aliases:           {}", territory.aliases.join(", "));
    }
    if !territory.full_name_aliases.is_empty() {
        println!(
            "Other names:       {}",
            territory.full_name_aliases.join(", ")
        );
    }
    let alphabets: Vec<&str> = territory
        .alphabets
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    println!("Alphabets:         {}", alphabets.join(", "));

    Ok(())
}
