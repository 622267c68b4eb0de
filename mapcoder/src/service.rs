//! The mapcode service facade.
//!
//! [`MapcodeService`] owns a codec and the request counters. Each method
//! takes raw request values, validates them through [`crate::params`],
//! runs the query and returns a serializable response. Transports (the
//! HTTP service, the CLI) stay thin.
//!
//! ```
//! use mapcoder::{codec::Mapcode, geo::Point, service::EncodeRequest};
//! use mapcoder::{MapcodeService, TableCodec, Territory};
//!
//! let point = Point::new(50.141706, 6.135864);
//! let codec = TableCodec::new()
//!     .with_mapcode(point, Mapcode::new("JL0.KP", "", Territory::from_code("LUX").unwrap()), None)
//!     .with_mapcode(point, Mapcode::new("VJ0L6.9PNQ", "", Territory::AAA), None);
//! let service = MapcodeService::new(codec);
//!
//! let response = service.encode(&EncodeRequest::new("50.141706,6.135864")).unwrap();
//! let json = serde_json::to_value(&response).unwrap();
//! assert_eq!(json["local"]["mapcode"], "JL0.KP");
//! assert_eq!(json["international"]["mapcode"], "VJ0L6.9PNQ");
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::alphabet::Alphabet;
use crate::codec::{split_precision, CodecError, MapcodeCodec};
use crate::error::{MapcoderError, Result};
use crate::format::{format, format_all, FormatOptions, MapcodeResult};
use crate::geo::Rectangle;
use crate::metrics::{Metrics, MetricsSnapshot, RequestKind};
use crate::paginate::paginate;
use crate::params::{self, present, IncludeFlag};
use crate::query::{self, MapcodeType, Restriction, Selection};
use crate::resolver;
use crate::table::TableCodec;
use crate::territory::Territory;

/// Raw values of a coordinate-to-mapcode request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeRequest {
    /// `"lat,lon"`.
    pub coordinate: String,
    /// `mapcodes`, `local` or `international`; absent for all sections.
    pub kind: Option<String>,
    pub precision: Option<String>,
    pub territory: Option<String>,
    pub country: Option<String>,
    pub alphabet: Option<String>,
    pub include: Option<String>,
    pub client: Option<String>,
    /// Forbidden on encode; present only so it can be rejected.
    pub context: Option<String>,
}

impl EncodeRequest {
    pub fn new(coordinate: impl Into<String>) -> Self {
        Self {
            coordinate: coordinate.into(),
            ..Self::default()
        }
    }
}

/// Raw values of a mapcode-to-coordinate request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeRequest {
    /// `"CODE"` or `"TERRITORY CODE"`, optionally with a precision extension.
    pub code: String,
    pub context: Option<String>,
    pub include: Option<String>,
    pub client: Option<String>,
    /// Forbidden on decode; present only so it can be rejected.
    pub territory: Option<String>,
}

impl DecodeRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }
}

/// Raw values of a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRequest {
    pub offset: Option<String>,
    pub count: Option<String>,
    pub client: Option<String>,
}

/// All three sections of an encode result.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapcodesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<MapcodeResult>,
    pub international: MapcodeResult,
    pub mapcodes: Vec<MapcodeResult>,
}

/// The `mapcodes` section on its own.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapcodeListResponse {
    pub mapcodes: Vec<MapcodeResult>,
}

/// Response of an encode request, shaped by its type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EncodeResponse {
    All(MapcodesResponse),
    Single(MapcodeResult),
    List(MapcodeListResponse),
}

/// Response of a decode request.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeResponse {
    pub lat_deg: f64,
    pub lon_deg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rectangle: Option<Rectangle>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlphabetResponse {
    pub name: String,
}

impl From<Alphabet> for AlphabetResponse {
    fn from(alphabet: Alphabet) -> Self {
        Self {
            name: alphabet.name().to_string(),
        }
    }
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerritoryResponse {
    pub alpha_code: String,
    pub alpha_code_minimal_unambiguous: String,
    pub alpha_code_minimal: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_territory: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub full_name_aliases: Vec<String>,
    pub alphabets: Vec<AlphabetResponse>,
}

impl From<Territory> for TerritoryResponse {
    fn from(territory: Territory) -> Self {
        let strings = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Self {
            alpha_code: territory.code().to_string(),
            alpha_code_minimal_unambiguous: territory.minimal_unambiguous_code().to_string(),
            alpha_code_minimal: territory.minimal_code().to_string(),
            full_name: territory.full_name().to_string(),
            parent_territory: territory.parent().map(|p| p.code().to_string()),
            aliases: strings(territory.aliases()),
            full_name_aliases: strings(territory.full_name_aliases()),
            alphabets: territory
                .alphabets()
                .iter()
                .copied()
                .map(AlphabetResponse::from)
                .collect(),
        }
    }
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerritoriesResponse {
    /// Size of the whole catalog, not of this page.
    pub total: usize,
    pub territories: Vec<TerritoryResponse>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlphabetsResponse {
    /// Size of the whole catalog, not of this page.
    pub total: usize,
    pub alphabets: Vec<AlphabetResponse>,
}

/// Mapcode conversion and catalog lookups over a pluggable codec.
///
/// Cheap to share: wrap it in an `Arc` and call it from any thread.
pub struct MapcodeService {
    codec: Arc<dyn MapcodeCodec>,
    metrics: Metrics,
}

impl MapcodeService {
    pub fn new(codec: impl MapcodeCodec + 'static) -> Self {
        Self::with_codec(Arc::new(codec))
    }

    pub fn with_codec(codec: Arc<dyn MapcodeCodec>) -> Self {
        Self {
            codec,
            metrics: Metrics::new(),
        }
    }

    pub fn builder() -> MapcodeServiceBuilder {
        MapcodeServiceBuilder::new()
    }

    pub fn codec(&self) -> &dyn MapcodeCodec {
        self.codec.as_ref()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Convert a coordinate to mapcodes.
    ///
    /// # Errors
    ///
    /// Validation errors for any malformed field, `NotFound` when the
    /// codec has nothing for the coordinate (or no local code for a
    /// `local` request), `Inconsistent` if a result fails its check.
    pub fn encode(&self, request: &EncodeRequest) -> Result<EncodeResponse> {
        let client = params::client(request.client.as_deref());
        let kind = params::mapcode_type(request.kind.as_deref())?;
        self.metrics.record(MapcodeType::request_kind(kind), client);

        params::forbid("context", request.context.as_deref())?;
        let point = params::lat_lon(&request.coordinate)?;
        let options = FormatOptions {
            precision: params::precision(request.precision.as_deref())?,
            alphabet: present(request.alphabet.as_deref())
                .map(params::alphabet)
                .transpose()?,
            include: params::include(request.include.as_deref())?,
        };
        let restriction = restriction(request)?;

        tracing::debug!(
            lat = point.lat_deg,
            lon = point.lon_deg,
            kind = ?kind,
            restriction = ?restriction,
            options = ?options,
            "Encode request"
        );

        let codec = self.codec();
        let outcome = query::run(codec, point, restriction)?;
        let response = match outcome.select(kind)? {
            Selection::All(outcome) => EncodeResponse::All(MapcodesResponse {
                local: outcome
                    .local
                    .as_ref()
                    .map(|local| format(codec, point, local, &options)),
                international: format(codec, point, &outcome.international, &options),
                mapcodes: format_all(codec, point, &outcome.mapcodes, &options),
            }),
            Selection::Local(candidate) | Selection::International(candidate) => {
                EncodeResponse::Single(format(codec, point, &candidate, &options))
            }
            Selection::Mapcodes(candidates) => EncodeResponse::List(MapcodeListResponse {
                mapcodes: format_all(codec, point, &candidates, &options),
            }),
        };
        response.validate()?;

        tracing::info!(
            lat = point.lat_deg,
            lon = point.lon_deg,
            results = response.len(),
            "Encoded coordinate"
        );
        Ok(response)
    }

    /// Convert a mapcode (optionally prefixed by a territory) to a coordinate.
    ///
    /// # Errors
    ///
    /// `InvalidUsage` if a territory field was supplied, `InvalidEnum` for
    /// a bad context, `UnknownTerritory` for a bad prefix, `NotFound` if
    /// the code does not decode.
    pub fn decode(&self, request: &DecodeRequest) -> Result<DecodeResponse> {
        self.metrics
            .record(RequestKind::Decode, params::client(request.client.as_deref()));

        params::forbid("territory", request.territory.as_deref())?;
        let include = params::include(request.include.as_deref())?;
        let context = present(request.context.as_deref())
            .map(params::context)
            .transpose()?;
        let (code, territory) = split_territory(&request.code, context)?;

        tracing::debug!(code, territory = ?territory, "Decode request");

        let codec = self.codec();
        let not_found = |e: CodecError| {
            MapcoderError::not_found(format!(
                "No coordinate for mapcode '{}': {}",
                request.code.trim(),
                e
            ))
        };
        let point = codec.decode_to_point(code, territory).map_err(not_found)?;
        let rectangle = if include.contains(IncludeFlag::Rectangle) {
            Some(codec.decode_to_rectangle(code, territory).map_err(not_found)?)
        } else {
            None
        };

        let response = DecodeResponse {
            lat_deg: point.lat_deg,
            lon_deg: point.lon_deg,
            rectangle,
        };
        response.validate(code)?;

        tracing::info!(
            code,
            lat = response.lat_deg,
            lon = response.lon_deg,
            "Decoded mapcode"
        );
        Ok(response)
    }

    /// A page of the territory catalog.
    pub fn territories(&self, request: &ListRequest) -> Result<TerritoriesResponse> {
        self.metrics
            .record(RequestKind::Territories, params::client(request.client.as_deref()));
        let offset = params::offset(request.offset.as_deref())?;
        let count = params::count(request.count.as_deref())?;

        let all: Vec<Territory> = Territory::all().collect();
        Ok(TerritoriesResponse {
            total: all.len(),
            territories: paginate(&all, offset, count)
                .iter()
                .copied()
                .map(TerritoryResponse::from)
                .collect(),
        })
    }

    /// One territory, optionally disambiguated by a context.
    pub fn territory(
        &self,
        code: &str,
        context: Option<&str>,
        client: Option<&str>,
    ) -> Result<TerritoryResponse> {
        self.metrics
            .record(RequestKind::Territories, params::client(client));
        params::territory(code, context).map(TerritoryResponse::from)
    }

    /// A page of the alphabet catalog.
    pub fn alphabets(&self, request: &ListRequest) -> Result<AlphabetsResponse> {
        self.metrics
            .record(RequestKind::Alphabets, params::client(request.client.as_deref()));
        let offset = params::offset(request.offset.as_deref())?;
        let count = params::count(request.count.as_deref())?;

        let all = Alphabet::all();
        Ok(AlphabetsResponse {
            total: all.len(),
            alphabets: paginate(&all, offset, count)
                .iter()
                .copied()
                .map(AlphabetResponse::from)
                .collect(),
        })
    }

    /// One alphabet by name.
    pub fn alphabet(&self, name: &str, client: Option<&str>) -> Result<AlphabetResponse> {
        self.metrics
            .record(RequestKind::Alphabets, params::client(client));
        params::alphabet(name).map(AlphabetResponse::from)
    }
}

/// Territory and country are alternatives; naming both is a usage error.
fn restriction(request: &EncodeRequest) -> Result<Restriction> {
    match (
        present(request.territory.as_deref()),
        present(request.country.as_deref()),
    ) {
        (Some(_), Some(_)) => Err(MapcoderError::InvalidUsage { field: "country" }),
        (Some(territory), None) => Ok(Restriction::Territory(params::territory(territory, None)?)),
        (None, Some(country)) => Ok(Restriction::Country(params::country(country)?)),
        (None, None) => Ok(Restriction::Unrestricted),
    }
}

/// Split `"LUX JL0.KP"` into the code and its territory.
///
/// A prefix is resolved with the context as parent; without a prefix the
/// context itself scopes the code.
fn split_territory(raw: &str, context: Option<Territory>) -> Result<(&str, Option<Territory>)> {
    let invalid = || MapcoderError::InvalidFormat {
        field: "code",
        value: raw.to_string(),
    };
    let mut parts = raw.split_whitespace();
    let (prefix, code) = match (parts.next(), parts.next(), parts.next()) {
        (Some(code), None, None) => (None, code),
        (Some(prefix), Some(code), None) => (Some(prefix), code),
        _ => return Err(invalid()),
    };
    if split_precision(code).0.is_empty() {
        return Err(invalid());
    }
    let territory = match prefix {
        Some(prefix) => Some(resolver::resolve(prefix, context)?),
        None => context,
    };
    Ok((code, territory))
}

impl EncodeResponse {
    /// Number of mapcode records in the response.
    pub fn len(&self) -> usize {
        match self {
            EncodeResponse::All(all) => {
                all.mapcodes.len() + 1 + usize::from(all.local.is_some())
            }
            EncodeResponse::Single(_) => 1,
            EncodeResponse::List(list) => list.mapcodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every record in the response, in output order.
    pub fn results(&self) -> Vec<&MapcodeResult> {
        match self {
            EncodeResponse::All(all) => all
                .local
                .iter()
                .chain(std::iter::once(&all.international))
                .chain(all.mapcodes.iter())
                .collect(),
            EncodeResponse::Single(result) => vec![result],
            EncodeResponse::List(list) => list.mapcodes.iter().collect(),
        }
    }

    fn validate(&self) -> Result<()> {
        self.results().into_iter().try_for_each(MapcodeResult::validate)
    }
}

impl DecodeResponse {
    /// Coordinates are finite and in range; the rectangle is well formed.
    fn validate(&self, code: &str) -> Result<()> {
        let fail = |message: &str| {
            Err(MapcoderError::Inconsistent {
                message: format!("{} (mapcode '{}')", message, code),
            })
        };
        if !self.lat_deg.is_finite() || !(-90.0..=90.0).contains(&self.lat_deg) {
            return fail("latDeg is not a latitude");
        }
        if !self.lon_deg.is_finite() || !(-180.0..180.0).contains(&self.lon_deg) {
            return fail("lonDeg is not a normalized longitude");
        }
        if let Some(rectangle) = &self.rectangle {
            if !rectangle.is_well_formed() {
                return fail("malformed rectangle");
            }
        }
        Ok(())
    }
}

/// Builder for [`MapcodeService`].
///
/// # Environment Variables
///
/// | Variable | Description | Default |
/// |----------|-------------|---------|
/// | `MAPCODER_CODEC_TABLE` | JSON codec table for [`TableCodec`] | empty table |
#[derive(Default)]
pub struct MapcodeServiceBuilder {
    codec: Option<Arc<dyn MapcodeCodec>>,
    table: Option<PathBuf>,
}

impl MapcodeServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder configured from environment variables.
    pub fn from_env() -> Self {
        let table = std::env::var("MAPCODER_CODEC_TABLE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        Self { codec: None, table }
    }

    /// Use this codec. Takes precedence over a table path.
    pub fn codec(mut self, codec: impl MapcodeCodec + 'static) -> Self {
        self.codec = Some(Arc::new(codec));
        self
    }

    /// Load a [`TableCodec`] from this JSON file.
    pub fn table<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.table = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn table_path(&self) -> Option<&Path> {
        self.table.as_deref()
    }

    /// Build the [`MapcodeService`].
    ///
    /// # Errors
    ///
    /// Returns an error if a table path was given but cannot be loaded.
    pub fn build(self) -> Result<MapcodeService> {
        let codec: Arc<dyn MapcodeCodec> = match (self.codec, self.table) {
            (Some(codec), _) => codec,
            (None, Some(path)) => Arc::new(TableCodec::from_json_file(path)?),
            (None, None) => {
                tracing::warn!("No codec table configured, conversions will return not found");
                Arc::new(TableCodec::new())
            }
        };
        Ok(MapcodeService::with_codec(codec))
    }
}
