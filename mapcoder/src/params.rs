//! Parameter validation.
//!
//! Every inbound field arrives as a raw string (or not at all) and leaves
//! this module as a typed value or a [`MapcoderError`]. Nothing downstream
//! ever sees a raw territory, alphabet or type token.
//!
//! Blank values (`?territory=`) count as absent.

use std::fmt;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, VariantNames};

use crate::alphabet::Alphabet;
use crate::codec::MAX_PRECISION;
use crate::error::{MapcoderError, Result};
use crate::geo::{normalize_lon, Point};
use crate::metrics::Client;
use crate::query::MapcodeType;
use crate::resolver;
use crate::territory::Territory;

/// Number of list items returned when `count` is absent.
pub const DEFAULT_COUNT: usize = 1000;

/// An opt-in token controlling which optional fields appear in a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, VariantNames)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IncludeFlag {
    Offset,
    Territory,
    Alphabet,
    Rectangle,
}

impl IncludeFlag {
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// The set of include flags of a request.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Include(u8);

impl Include {
    pub fn none() -> Self {
        Self(0)
    }

    pub fn with(mut self, flag: IncludeFlag) -> Self {
        self.0 |= flag.bit();
        self
    }

    pub fn contains(self, flag: IncludeFlag) -> bool {
        self.0 & flag.bit() != 0
    }
}

impl fmt::Debug for Include {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(IncludeFlag::iter().filter(|flag| self.contains(*flag)))
            .finish()
    }
}

pub(crate) fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_f64(field: &'static str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MapcoderError::InvalidFormat {
            field,
            value: raw.to_string(),
        })
}

fn parse_i64(field: &'static str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| MapcoderError::InvalidFormat {
            field,
            value: raw.to_string(),
        })
}

/// Latitude in `[-90, 90]`.
pub fn latitude(raw: &str) -> Result<f64> {
    let lat = parse_f64("lat", raw)?;
    if !(-90.0..=90.0).contains(&lat) {
        return Err(MapcoderError::OutOfRange {
            field: "lat",
            value: raw.trim().to_string(),
            range: "[-90, 90]".to_string(),
        });
    }
    Ok(lat)
}

/// Any finite longitude, wrapped into `[-180, 180)`.
pub fn longitude(raw: &str) -> Result<f64> {
    parse_f64("lon", raw).map(normalize_lon)
}

/// A `"lat,lon"` pair as used in the encode path.
///
/// ```
/// use mapcoder::params::lat_lon;
///
/// let point = lat_lon("50.141706,366.135864").unwrap();
/// assert!((point.lon_deg - 6.135864).abs() < 1e-9);
/// assert!(lat_lon("50.1").is_err());
/// ```
pub fn lat_lon(raw: &str) -> Result<Point> {
    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| MapcoderError::InvalidFormat {
            field: "lat,lon",
            value: raw.to_string(),
        })?;
    Ok(Point::new(latitude(lat)?, longitude(lon)?))
}

/// Precision in `[0, 8]`, default 0.
pub fn precision(raw: Option<&str>) -> Result<u8> {
    let Some(raw) = present(raw) else {
        return Ok(0);
    };
    let value = parse_i64("precision", raw)?;
    u8::try_from(value)
        .ok()
        .filter(|p| *p <= MAX_PRECISION)
        .ok_or_else(|| MapcoderError::OutOfRange {
            field: "precision",
            value: value.to_string(),
            range: format!("[0, {}]", MAX_PRECISION),
        })
}

/// Fail if a field the endpoint forbids was supplied.
pub fn forbid(field: &'static str, raw: Option<&str>) -> Result<()> {
    match present(raw) {
        Some(_) => Err(MapcoderError::InvalidUsage { field }),
        None => Ok(()),
    }
}

/// Comma-separated include flags. Empty tokens are ignored.
pub fn include(raw: Option<&str>) -> Result<Include> {
    let Some(raw) = present(raw) else {
        return Ok(Include::none());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .try_fold(Include::none(), |set, token| {
            token
                .parse::<IncludeFlag>()
                .map(|flag| set.with(flag))
                .map_err(|_| MapcoderError::InvalidEnum {
                    field: "include",
                    value: token.to_string(),
                    valid: IncludeFlag::VARIANTS.join(", "),
                })
        })
}

fn invalid_territory(field: &'static str, value: &str) -> MapcoderError {
    MapcoderError::InvalidEnum {
        field,
        value: value.to_string(),
        valid: Territory::valid_codes(),
    }
}

/// A context token, resolved to the country it denotes.
pub fn context(raw: &str) -> Result<Territory> {
    resolver::resolve_context(raw).map_err(|_| invalid_territory("context", raw))
}

/// A territory token, optionally disambiguated by a context token.
pub fn territory(raw: &str, context_raw: Option<&str>) -> Result<Territory> {
    let parent = present(context_raw).map(context).transpose()?;
    resolver::resolve(raw, parent).map_err(|_| invalid_territory("territory", raw))
}

/// A country token: resolved like a territory, then lifted to its country.
pub fn country(raw: &str) -> Result<Territory> {
    resolver::resolve(raw, None)
        .map(Territory::country)
        .map_err(|_| invalid_territory("country", raw))
}

/// An alphabet name, case-insensitive.
pub fn alphabet(raw: &str) -> Result<Alphabet> {
    Alphabet::parse(raw)
}

/// The optional `mapcodes | local | international` selector.
pub fn mapcode_type(raw: Option<&str>) -> Result<Option<MapcodeType>> {
    present(raw)
        .map(|token| {
            token.parse::<MapcodeType>().map_err(|_| MapcoderError::InvalidEnum {
                field: "type",
                value: token.to_string(),
                valid: MapcodeType::VARIANTS.join(", "),
            })
        })
        .transpose()
}

/// List offset; negative values count back from the end. Default 0.
pub fn offset(raw: Option<&str>) -> Result<i64> {
    present(raw).map_or(Ok(0), |raw| parse_i64("offset", raw))
}

/// List count, at least 0. Default [`DEFAULT_COUNT`].
pub fn count(raw: Option<&str>) -> Result<usize> {
    let Some(raw) = present(raw) else {
        return Ok(DEFAULT_COUNT);
    };
    let value = parse_i64("count", raw)?;
    usize::try_from(value).map_err(|_| MapcoderError::OutOfRange {
        field: "count",
        value: value.to_string(),
        range: "[0, ...)".to_string(),
    })
}

/// Client identifier for metrics; unknown values count as `none`.
pub fn client(raw: Option<&str>) -> Client {
    present(raw)
        .and_then(|token| token.parse().ok())
        .unwrap_or(Client::None)
}
