//! The seam to the mapcode codec.
//!
//! The grid encoding mathematics live outside this crate. Anything that
//! implements [`MapcodeCodec`] can be plugged into
//! [`MapcodeService`](crate::MapcodeService); [`TableCodec`](crate::TableCodec)
//! is the in-memory implementation used by tests and the bundled binaries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::alphabet::Alphabet;
use crate::geo::{Point, Rectangle};
use crate::territory::Territory;

/// Highest supported precision: the number of extension characters.
pub const MAX_PRECISION: u8 = 8;

/// Separator between a mapcode and its precision extension.
pub const PRECISION_SEPARATOR: char = '-';

/// Errors reported by a codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The coordinate cannot be encoded or the code cannot be decoded.
    #[error("Unknown mapcode: {0}")]
    UnknownMapcode(String),
}

/// A mapcode produced by a codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapcode {
    /// The precision-0 code, e.g. `"JL0.KP"`.
    pub code: String,
    /// Up to [`MAX_PRECISION`] extra characters narrowing the area.
    #[serde(default)]
    pub extension: String,
    /// Owning territory; [`Territory::AAA`] for international codes.
    pub territory: Territory,
}

impl Mapcode {
    pub fn new(code: impl Into<String>, extension: impl Into<String>, territory: Territory) -> Self {
        Self {
            code: code.into(),
            extension: extension.into(),
            territory,
        }
    }

    /// The code rendered at `precision`.
    ///
    /// Precision 0 is the bare code; higher precisions append the
    /// separator and that many extension characters (as many as the codec
    /// provided, if fewer).
    ///
    /// ```
    /// use mapcoder::{codec::Mapcode, Territory};
    ///
    /// let mapcode = Mapcode::new("JL0.KP", "LNLMXRPM", Territory::from_code("LUX").unwrap());
    /// assert_eq!(mapcode.code(0), "JL0.KP");
    /// assert_eq!(mapcode.code(2), "JL0.KP-LN");
    /// ```
    pub fn code(&self, precision: u8) -> String {
        let extension: String = self.extension.chars().take(precision as usize).collect();
        if extension.is_empty() {
            self.code.clone()
        } else {
            format!("{}{}{}", self.code, PRECISION_SEPARATOR, extension)
        }
    }

    /// Code prefixed with its territory, e.g. `"LUX JL0.KP"`.
    pub fn code_with_territory(&self, precision: u8) -> String {
        if self.territory.is_international() {
            self.code(precision)
        } else {
            format!("{} {}", self.territory.code(), self.code(precision))
        }
    }

    pub fn is_international(&self) -> bool {
        self.territory.is_international()
    }
}

/// Split `"JL0.KP-LN"` into the bare code and its extension.
pub fn split_precision(code: &str) -> (&str, &str) {
    code.split_once(PRECISION_SEPARATOR).unwrap_or((code, ""))
}

/// A mapcode codec.
///
/// Calls are synchronous and CPU-bound. Implementations must be safe to
/// share across request handlers.
pub trait MapcodeCodec: Send + Sync {
    /// Every mapcode for `point`, optionally limited to one territory.
    /// Without a filter the international code is included.
    fn encode_all(&self, point: Point, territory: Option<Territory>) -> Result<Vec<Mapcode>, CodecError>;

    /// The international (territory-free) mapcode for `point`.
    fn encode_international(&self, point: Point) -> Result<Mapcode, CodecError>;

    /// The shortest mapcode for `point` within `territory`.
    fn encode_shortest(&self, point: Point, territory: Territory) -> Result<Mapcode, CodecError>;

    /// Decode a code (with optional precision extension) to a point.
    fn decode_to_point(&self, code: &str, territory: Option<Territory>) -> Result<Point, CodecError>;

    /// Decode a code to the area it covers.
    fn decode_to_rectangle(
        &self,
        code: &str,
        territory: Option<Territory>,
    ) -> Result<Rectangle, CodecError>;

    /// Transliterate a code or territory label into `alphabet`.
    fn to_alphabet(&self, text: &str, alphabet: Alphabet) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lux() -> Territory {
        Territory::from_code("LUX").unwrap()
    }

    #[test]
    fn test_precision_extends_code() {
        let mapcode = Mapcode::new("JL0.KP", "LNLMXRPM", lux());
        let base = mapcode.code(0);
        for precision in 1..=MAX_PRECISION {
            let code = mapcode.code(precision);
            assert!(code.starts_with(&format!("{}-", base)));
            assert_eq!(code.len(), base.len() + 1 + precision as usize);
        }
        assert_eq!(mapcode.code(8), "JL0.KP-LNLMXRPM");
    }

    #[test]
    fn test_precision_without_extension() {
        let mapcode = Mapcode::new("VJ0L6.9PNQ", "", Territory::AAA);
        assert_eq!(mapcode.code(4), "VJ0L6.9PNQ");
    }

    #[test]
    fn test_code_with_territory() {
        let local = Mapcode::new("JL0.KP", "", lux());
        assert_eq!(local.code_with_territory(0), "LUX JL0.KP");
        let international = Mapcode::new("VJ0L6.9PNQ", "", Territory::AAA);
        assert_eq!(international.code_with_territory(0), "VJ0L6.9PNQ");
        assert!(international.is_international());
    }

    #[test]
    fn test_split_precision() {
        assert_eq!(split_precision("JL0.KP-LN"), ("JL0.KP", "LN"));
        assert_eq!(split_precision("JL0.KP"), ("JL0.KP", ""));
    }
}
