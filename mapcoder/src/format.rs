//! Shaping query candidates into response records.
//!
//! A [`MapcodeResult`] always carries the code. The optional fields appear
//! according to the request's [`Include`] flags:
//!
//! | Field | Present when |
//! |-------|--------------|
//! | `mapcodeInAlphabet` | `alphabet` flag, or the transliteration differs |
//! | `territory` | `territory` flag, or the code is not international |
//! | `territoryInAlphabet` | as `mapcodeInAlphabet`, only with `territory` |
//! | `offsetMeters` | `offset` flag |
//! | `rectangle` | `rectangle` flag |

use serde::Serialize;

use crate::alphabet::Alphabet;
use crate::codec::{Mapcode, MapcodeCodec};
use crate::error::{MapcoderError, Result};
use crate::geo::{Point, Rectangle};
use crate::params::{Include, IncludeFlag};
use crate::query::Candidate;

/// Validated output options of an encode request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub precision: u8,
    /// Requested alphabet; `None` means the territory's own first alphabet.
    pub alphabet: Option<Alphabet>,
    pub include: Include,
}

/// One mapcode as returned to a caller.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapcodeResult {
    pub mapcode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapcode_in_alphabet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub territory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub territory_in_alphabet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_meters: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rectangle: Option<Rectangle>,
}

/// Transliterate `text`, keeping it only if asked for or if it differs.
fn in_alphabet(codec: &dyn MapcodeCodec, text: &str, alphabet: Alphabet, forced: bool) -> Option<String> {
    let converted = codec.to_alphabet(text, alphabet);
    (forced || converted != text).then_some(converted)
}

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Distance from `point` to where `code` decodes, `0.0` if it does not decode.
fn offset_meters(codec: &dyn MapcodeCodec, point: Point, mapcode: &Mapcode, code: &str) -> f64 {
    let context = (!mapcode.is_international()).then_some(mapcode.territory);
    match codec.decode_to_point(code, context) {
        Ok(decoded) => round6(point.distance_meters(&decoded)),
        Err(e) => {
            tracing::debug!(mapcode = %code, error = %e, "Offset decode failed, reporting 0");
            0.0
        }
    }
}

/// Build the result for `candidate`, encoded from `point`.
pub fn format(
    codec: &dyn MapcodeCodec,
    point: Point,
    candidate: &Candidate,
    options: &FormatOptions,
) -> MapcodeResult {
    let mapcode = &candidate.mapcode;
    let include = options.include;
    let code = mapcode.code(options.precision);
    let alphabet = options
        .alphabet
        .unwrap_or_else(|| mapcode.territory.default_alphabet());
    let forced = include.contains(IncludeFlag::Alphabet);

    let territory = (include.contains(IncludeFlag::Territory) || !mapcode.is_international())
        .then(|| mapcode.territory.code());

    MapcodeResult {
        mapcode_in_alphabet: in_alphabet(codec, &code, alphabet, forced),
        territory: territory.map(str::to_string),
        territory_in_alphabet: territory.and_then(|t| in_alphabet(codec, t, alphabet, forced)),
        offset_meters: include
            .contains(IncludeFlag::Offset)
            .then(|| offset_meters(codec, point, mapcode, &code)),
        rectangle: include
            .contains(IncludeFlag::Rectangle)
            .then_some(candidate.rectangle),
        mapcode: code,
    }
}

/// Format every candidate in order.
pub fn format_all(
    codec: &dyn MapcodeCodec,
    point: Point,
    candidates: &[Candidate],
    options: &FormatOptions,
) -> Vec<MapcodeResult> {
    candidates
        .iter()
        .map(|candidate| format(codec, point, candidate, options))
        .collect()
}

impl MapcodeResult {
    /// Check the record before it is handed out.
    ///
    /// # Errors
    ///
    /// [`MapcoderError::Inconsistent`] naming the first broken field.
    pub fn validate(&self) -> Result<()> {
        let fail = |message: &str| {
            Err(MapcoderError::Inconsistent {
                message: format!("{} (mapcode '{}')", message, self.mapcode),
            })
        };
        if self.mapcode.trim().is_empty() {
            return fail("empty mapcode");
        }
        if self.mapcode_in_alphabet.as_deref().is_some_and(str::is_empty) {
            return fail("empty mapcodeInAlphabet");
        }
        if self.territory_in_alphabet.is_some() && self.territory.is_none() {
            return fail("territoryInAlphabet without territory");
        }
        if let Some(offset) = self.offset_meters {
            if !offset.is_finite() || offset < 0.0 {
                return fail("offsetMeters is not a finite distance");
            }
        }
        if let Some(rectangle) = &self.rectangle {
            if !rectangle.is_well_formed() {
                return fail("malformed rectangle");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{run, Restriction};
    use crate::table::TableCodec;
    use crate::territory::Territory;

    fn lux() -> Territory {
        Territory::from_code("LUX").unwrap()
    }

    fn point() -> Point {
        Point::new(50.141706, 6.135864)
    }

    fn codec() -> TableCodec {
        TableCodec::new()
            .with_mapcode(point(), Mapcode::new("JL0.KP", "4N7V2QKR", lux()), None)
            .with_mapcode(point(), Mapcode::new("VJ0L6.9PNQ", "M3X8", Territory::AAA), None)
            .with_transliteration(Alphabet::Greek, "JL0.KP", "ΠΛ0.ΚΡ")
            .with_transliteration(Alphabet::Greek, "LUX", "ΛΥΞ")
    }

    fn candidates() -> (Candidate, Candidate) {
        let outcome = run(&codec(), point(), Restriction::Unrestricted).unwrap();
        (outcome.local.unwrap(), outcome.international)
    }

    fn options(include: Include) -> FormatOptions {
        FormatOptions {
            include,
            ..FormatOptions::default()
        }
    }

    #[test]
    fn test_local_default_fields() {
        let (local, _) = candidates();
        let result = format(&codec(), point(), &local, &FormatOptions::default());
        assert_eq!(result.mapcode, "JL0.KP");
        assert_eq!(result.territory.as_deref(), Some("LUX"));
        assert_eq!(result.mapcode_in_alphabet, None);
        assert_eq!(result.territory_in_alphabet, None);
        assert_eq!(result.offset_meters, None);
        assert_eq!(result.rectangle, None);
        result.validate().unwrap();
    }

    #[test]
    fn test_international_omits_territory() {
        let (_, international) = candidates();
        let result = format(&codec(), point(), &international, &FormatOptions::default());
        assert_eq!(result.mapcode, "VJ0L6.9PNQ");
        assert_eq!(result.territory, None);

        let forced = options(Include::none().with(IncludeFlag::Territory));
        let result = format(&codec(), point(), &international, &forced);
        assert_eq!(result.territory.as_deref(), Some("AAA"));
    }

    #[test]
    fn test_precision() {
        let (local, _) = candidates();
        let opts = FormatOptions {
            precision: 2,
            ..FormatOptions::default()
        };
        assert_eq!(format(&codec(), point(), &local, &opts).mapcode, "JL0.KP-4N");
    }

    #[test]
    fn test_alphabet_shown_when_different() {
        let (local, _) = candidates();
        let opts = FormatOptions {
            alphabet: Some(Alphabet::Greek),
            ..FormatOptions::default()
        };
        let result = format(&codec(), point(), &local, &opts);
        assert_eq!(result.mapcode_in_alphabet.as_deref(), Some("ΠΛ0.ΚΡ"));
        assert_eq!(result.territory_in_alphabet.as_deref(), Some("ΛΥΞ"));
    }

    #[test]
    fn test_alphabet_hidden_when_identical() {
        let (local, _) = candidates();
        let opts = FormatOptions {
            alphabet: Some(Alphabet::Roman),
            ..FormatOptions::default()
        };
        let result = format(&codec(), point(), &local, &opts);
        assert_eq!(result.mapcode_in_alphabet, None);

        let forced = FormatOptions {
            alphabet: Some(Alphabet::Roman),
            include: Include::none().with(IncludeFlag::Alphabet),
            ..FormatOptions::default()
        };
        let result = format(&codec(), point(), &local, &forced);
        assert_eq!(result.mapcode_in_alphabet.as_deref(), Some("JL0.KP"));
        assert_eq!(result.territory_in_alphabet.as_deref(), Some("LUX"));
    }

    #[test]
    fn test_territory_in_alphabet_needs_territory() {
        let (_, international) = candidates();
        let opts = FormatOptions {
            alphabet: Some(Alphabet::Greek),
            include: Include::none().with(IncludeFlag::Alphabet),
            ..FormatOptions::default()
        };
        let result = format(&codec(), point(), &international, &opts);
        assert!(result.mapcode_in_alphabet.is_some());
        assert_eq!(result.territory, None);
        assert_eq!(result.territory_in_alphabet, None);
    }

    #[test]
    fn test_offset_and_rectangle() {
        let (local, _) = candidates();
        let include = Include::none()
            .with(IncludeFlag::Offset)
            .with(IncludeFlag::Rectangle);
        let result = format(&codec(), point(), &local, &options(include));
        let offset = result.offset_meters.unwrap();
        assert!(offset < 1.0, "offset was {}", offset);
        assert_eq!(result.rectangle, Some(local.rectangle));
        result.validate().unwrap();
    }

    #[test]
    fn test_offset_zero_when_decode_fails() {
        let (local, _) = candidates();
        // The rectangle stays, but an empty table cannot decode the code.
        let include = Include::none().with(IncludeFlag::Offset);
        let result = format(&TableCodec::new(), point(), &local, &options(include));
        assert_eq!(result.offset_meters, Some(0.0));
    }

    #[test]
    fn test_round6() {
        assert_eq!(round6(1.23456789), 1.234568);
        assert_eq!(round6(0.0), 0.0);
    }

    #[test]
    fn test_serialized_field_names() {
        let (local, _) = candidates();
        let include = Include::none()
            .with(IncludeFlag::Offset)
            .with(IncludeFlag::Rectangle)
            .with(IncludeFlag::Alphabet);
        let result = format(&codec(), point(), &local, &options(include));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["mapcode"], "JL0.KP");
        assert_eq!(json["territory"], "LUX");
        assert!(json.get("mapcodeInAlphabet").is_some());
        assert!(json.get("territoryInAlphabet").is_some());
        assert!(json.get("offsetMeters").is_some());
        assert!(json["rectangle"].get("southWest").is_some());

        let plain = format(&codec(), point(), &local, &FormatOptions::default());
        let json = serde_json::to_value(&plain).unwrap();
        assert!(json.get("offsetMeters").is_none());
        assert!(json.get("rectangle").is_none());
    }

    #[test]
    fn test_validate_rejects_inconsistent() {
        let mut result = MapcodeResult {
            mapcode: "JL0.KP".to_string(),
            mapcode_in_alphabet: None,
            territory: None,
            territory_in_alphabet: Some("ΛΥΞ".to_string()),
            offset_meters: None,
            rectangle: None,
        };
        assert!(matches!(result.validate(), Err(MapcoderError::Inconsistent { .. })));

        result.territory_in_alphabet = None;
        result.offset_meters = Some(f64::NAN);
        assert!(result.validate().is_err());

        result.offset_meters = None;
        result.mapcode = "  ".to_string();
        assert!(result.validate().is_err());

        result.mapcode = "JL0.KP".to_string();
        result.rectangle = Some(Rectangle::new(Point::new(1.0, 1.0), Point::new(0.0, 0.0)));
        assert!(result.validate().is_err());
    }
}
