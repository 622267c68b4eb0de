//! An in-memory codec backed by a recorded table.
//!
//! [`TableCodec`] answers exactly the coordinates it holds and decodes
//! exactly the codes it holds. It does no grid mathematics, which makes it
//! a predictable stand-in for a native codec in tests, demos and
//! deployments that serve a fixed set of places.
//!
//! # Table Format
//!
//! ```json
//! {
//!   "entries": [
//!     {
//!       "point": { "latDeg": 50.141706, "lonDeg": 6.135864 },
//!       "mapcodes": [
//!         { "code": "JL0.KP", "extension": "4N7V2QKR", "territory": "LUX" },
//!         { "code": "VJ0L6.9PNQ", "extension": "M3X8", "territory": "AAA" }
//!       ]
//!     }
//!   ],
//!   "transliterations": { "GREEK": { "JL0.KP": "ΠΛ0.ΚΡ" } }
//! }
//! ```
//!
//! Mapcodes are listed in the order the encoder would return them. A
//! mapcode without a `rectangle` covers a small square around its point.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::codec::{split_precision, CodecError, Mapcode, MapcodeCodec, PRECISION_SEPARATOR};
use crate::geo::{normalize_lon, Point, Rectangle};
use crate::territory::Territory;

/// Coordinates closer than this (degrees) are the same table entry.
const COORD_TOLERANCE_DEG: f64 = 1e-6;

/// Half the side of the square used when a mapcode has no rectangle.
const DEFAULT_HALF_SIZE_DEG: f64 = 0.0001;

/// Each extension character narrows the area by roughly this factor.
const EXTENSION_NARROWING: f64 = 30.0;

/// A mapcode row with its optional decoded area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMapcode {
    #[serde(flatten)]
    pub mapcode: Mapcode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rectangle: Option<Rectangle>,
}

/// All mapcodes recorded for one coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    pub point: Point,
    pub mapcodes: Vec<TableMapcode>,
}

/// In-memory [`MapcodeCodec`].
///
/// # Example
///
/// ```
/// use mapcoder::{codec::Mapcode, geo::Point, MapcodeCodec, TableCodec, Territory};
///
/// let point = Point::new(50.141706, 6.135864);
/// let codec = TableCodec::new()
///     .with_mapcode(point, Mapcode::new("VJ0L6.9PNQ", "", Territory::AAA), None);
///
/// let international = codec.encode_international(point).unwrap();
/// assert_eq!(international.code(0), "VJ0L6.9PNQ");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableCodec {
    #[serde(default)]
    entries: Vec<TableEntry>,
    /// Alphabet → Roman text → transliterated text.
    #[serde(default)]
    transliterations: HashMap<Alphabet, HashMap<String, String>>,
}

impl TableCodec {
    /// An empty table: every encode and decode fails with `UnknownMapcode`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid table.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let codec = Self::from_json_str(&text)?;
        tracing::info!(
            path = %path.as_ref().display(),
            entries = codec.entries.len(),
            "Loaded codec table"
        );
        Ok(codec)
    }

    /// Parse a table from JSON text.
    pub fn from_json_str(text: &str) -> crate::Result<Self> {
        let mut codec: TableCodec = serde_json::from_str(text)?;
        for entry in &mut codec.entries {
            entry.point = Point::new(entry.point.lat_deg, entry.point.lon_deg);
        }
        Ok(codec)
    }

    /// Record a mapcode for `point`. Order of insertion is encoder order.
    pub fn with_mapcode(mut self, point: Point, mapcode: Mapcode, rectangle: Option<Rectangle>) -> Self {
        let row = TableMapcode { mapcode, rectangle };
        match self.entry_index(point) {
            Some(i) => self.entries[i].mapcodes.push(row),
            None => self.entries.push(TableEntry {
                point,
                mapcodes: vec![row],
            }),
        }
        self
    }

    /// Record how `text` is written in `alphabet`.
    pub fn with_transliteration(
        mut self,
        alphabet: Alphabet,
        text: impl Into<String>,
        transliterated: impl Into<String>,
    ) -> Self {
        self.transliterations
            .entry(alphabet)
            .or_default()
            .insert(text.into(), transliterated.into());
        self
    }

    /// Number of recorded coordinates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_index(&self, point: Point) -> Option<usize> {
        self.entries.iter().position(|entry| same_point(entry.point, point))
    }

    fn entry(&self, point: Point) -> Result<&TableEntry, CodecError> {
        self.entry_index(point)
            .map(|i| &self.entries[i])
            .ok_or_else(|| {
                CodecError::UnknownMapcode(format!("{},{}", point.lat_deg, point.lon_deg))
            })
    }

    /// Find the row for `code` (extension ignored) under `territory`.
    ///
    /// International codes decode under any territory.
    fn lookup<'a, 'c>(
        &'a self,
        code: &'c str,
        territory: Option<Territory>,
    ) -> Result<(&'a TableEntry, &'a TableMapcode, &'c str), CodecError> {
        let (bare, extension) = split_precision(code.trim());
        let wanted = territory.unwrap_or(Territory::AAA);
        self.entries
            .iter()
            .flat_map(|entry| entry.mapcodes.iter().map(move |row| (entry, row)))
            .find(|(_, row)| {
                row.mapcode.code.eq_ignore_ascii_case(bare)
                    && (row.mapcode.territory == wanted || row.mapcode.is_international())
                    && row
                        .mapcode
                        .extension
                        .to_ascii_uppercase()
                        .starts_with(&extension.to_ascii_uppercase())
            })
            .map(|(entry, row)| (entry, row, extension))
            .ok_or_else(|| match territory {
                Some(t) => CodecError::UnknownMapcode(format!("{} {}", t.code(), code)),
                None => CodecError::UnknownMapcode(code.to_string()),
            })
    }
}

fn same_point(a: Point, b: Point) -> bool {
    let dlon = normalize_lon(a.lon_deg - b.lon_deg).abs();
    (a.lat_deg - b.lat_deg).abs() <= COORD_TOLERANCE_DEG && dlon <= COORD_TOLERANCE_DEG
}

fn rectangle_of(entry: &TableEntry, row: &TableMapcode) -> Rectangle {
    row.rectangle.unwrap_or_else(|| square_around(entry.point, DEFAULT_HALF_SIZE_DEG))
}

fn square_around(center: Point, half_size: f64) -> Rectangle {
    Rectangle::new(
        Point::new(center.lat_deg - half_size, center.lon_deg - half_size),
        Point::new(center.lat_deg + half_size, center.lon_deg + half_size),
    )
}

impl MapcodeCodec for TableCodec {
    fn encode_all(&self, point: Point, territory: Option<Territory>) -> Result<Vec<Mapcode>, CodecError> {
        let entry = self.entry(point)?;
        Ok(entry
            .mapcodes
            .iter()
            .map(|row| &row.mapcode)
            .filter(|mapcode| territory.map_or(true, |t| mapcode.territory == t))
            .cloned()
            .collect())
    }

    fn encode_international(&self, point: Point) -> Result<Mapcode, CodecError> {
        let entry = self.entry(point)?;
        entry
            .mapcodes
            .iter()
            .map(|row| &row.mapcode)
            .find(|mapcode| mapcode.is_international())
            .cloned()
            .ok_or_else(|| {
                CodecError::UnknownMapcode(format!("{},{}", point.lat_deg, point.lon_deg))
            })
    }

    fn encode_shortest(&self, point: Point, territory: Territory) -> Result<Mapcode, CodecError> {
        let entry = self.entry(point)?;
        entry
            .mapcodes
            .iter()
            .map(|row| &row.mapcode)
            .filter(|mapcode| mapcode.territory == territory)
            .min_by_key(|mapcode| mapcode.code.len())
            .cloned()
            .ok_or_else(|| {
                CodecError::UnknownMapcode(format!(
                    "{},{} in {}",
                    point.lat_deg,
                    point.lon_deg,
                    territory.code()
                ))
            })
    }

    fn decode_to_point(&self, code: &str, territory: Option<Territory>) -> Result<Point, CodecError> {
        let (entry, row, extension) = self.lookup(code, territory)?;
        if extension.is_empty() {
            Ok(rectangle_of(entry, row).center())
        } else {
            Ok(entry.point)
        }
    }

    fn decode_to_rectangle(
        &self,
        code: &str,
        territory: Option<Territory>,
    ) -> Result<Rectangle, CodecError> {
        let (entry, row, extension) = self.lookup(code, territory)?;
        let rect = rectangle_of(entry, row);
        if extension.is_empty() {
            return Ok(rect);
        }
        let half_size = (rect.north_east.lat_deg - rect.south_west.lat_deg) / 2.0
            / EXTENSION_NARROWING.powi(extension.chars().count() as i32);
        Ok(square_around(entry.point, half_size))
    }

    fn to_alphabet(&self, text: &str, alphabet: Alphabet) -> String {
        let Some(table) = self.transliterations.get(&alphabet) else {
            return text.to_string();
        };
        if let Some(found) = table.get(text) {
            return found.clone();
        }
        match text.split_once(PRECISION_SEPARATOR) {
            Some((bare, extension)) => match table.get(bare) {
                Some(found) => format!("{}{}{}", found, PRECISION_SEPARATOR, extension),
                None => text.to_string(),
            },
            None => text.to_string(),
        }
    }
}
