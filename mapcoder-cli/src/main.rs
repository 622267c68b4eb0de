use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// Mapcode conversion CLI tool
#[derive(Parser)]
#[command(name = "mapcoder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON codec table with the recorded mapcodes
    #[arg(long, env = "MAPCODER_CODEC_TABLE", global = true)]
    codec_table: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a coordinate into mapcodes
    Encode {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: String,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: String,

        /// Result type: mapcodes, local or international
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Only mapcodes valid in this territory
        #[arg(long, conflicts_with = "country")]
        territory: Option<String>,

        /// Only mapcodes of this country and its subdivisions
        #[arg(long)]
        country: Option<String>,

        /// Extra characters of precision (0-8)
        #[arg(short, long)]
        precision: Option<String>,

        /// Also render mapcodes in this alphabet
        #[arg(short, long)]
        alphabet: Option<String>,

        /// Comma-separated flags: offset, territory, alphabet, rectangle
        #[arg(short, long)]
        include: Option<String>,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Decode a mapcode into a coordinate
    Decode {
        /// Mapcode, optionally prefixed by a territory (e.g. "LUX JL0.KP")
        code: String,

        /// Territory used for codes without a prefix
        #[arg(short, long)]
        context: Option<String>,

        /// Comma-separated flags; only rectangle applies
        #[arg(short, long)]
        include: Option<String>,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Add local and international mapcodes to a CSV or GeoJSON file
    Batch {
        /// Input file (CSV or GeoJSON)
        input: PathBuf,

        /// Output file (same format as input if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Column name for latitude (CSV only)
        #[arg(long, default_value = "lat")]
        lat_col: String,

        /// Column name for longitude (CSV only)
        #[arg(long, default_value = "lon")]
        lon_col: String,

        /// Extra characters of precision (0-8)
        #[arg(short, long)]
        precision: Option<String>,
    },

    /// List known territories
    Territories {
        /// First entry; negative values count from the end
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<String>,

        /// Maximum number of entries
        #[arg(long)]
        count: Option<String>,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show a single territory
    Territory {
        /// Territory code, alias or full name
        code: String,

        /// Parent territory to disambiguate subdivision codes
        #[arg(short, long)]
        context: Option<String>,
    },

    /// List supported alphabets
    Alphabets {
        /// First entry; negative values count from the end
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<String>,

        /// Maximum number of entries
        #[arg(long)]
        count: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            lat,
            lon,
            kind,
            territory,
            country,
            precision,
            alphabet,
            include,
            json,
        } => commands::encode::run(
            cli.codec_table,
            commands::encode::Options {
                lat,
                lon,
                kind,
                territory,
                country,
                precision,
                alphabet,
                include,
            },
            json,
        ),
        Commands::Decode {
            code,
            context,
            include,
            json,
        } => commands::decode::run(cli.codec_table, code, context, include, json),
        Commands::Batch {
            input,
            output,
            lat_col,
            lon_col,
            precision,
        } => commands::batch::run(cli.codec_table, input, output, lat_col, lon_col, precision),
        Commands::Territories {
            offset,
            count,
            json,
        } => commands::territories::run(cli.codec_table, offset, count, json),
        Commands::Territory { code, context } => {
            commands::territory::run(cli.codec_table, code, context)
        }
        Commands::Alphabets { offset, count } => {
            commands::alphabets::run(cli.codec_table, offset, count)
        }
    }
}
