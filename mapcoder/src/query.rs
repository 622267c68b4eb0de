//! Mapcode query orchestration.
//!
//! [`run`] calls the codec with validated inputs, attaches a decoded
//! rectangle to every candidate and picks the local mapcode.
//!
//! # Local Mapcode Selection
//!
//! Without an explicit territory, the local mapcode is chosen by
//! [`select_local`]: scanning in encoder order, the first non-international
//! candidate becomes the choice, and a later candidate replaces it only if
//! it belongs to a different territory and its code is strictly shorter.
//! This is the shortest code across territory boundaries as they are
//! encountered, not the global shortest. Existing clients depend on it.

use strum::{Display, EnumString, IntoStaticStr, VariantNames};

use crate::codec::{CodecError, Mapcode, MapcodeCodec};
use crate::error::{MapcoderError, Result};
use crate::geo::{Point, Rectangle};
use crate::metrics::RequestKind;
use crate::territory::Territory;

/// Which part of the result a request wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MapcodeType {
    Mapcodes,
    Local,
    International,
}

impl MapcodeType {
    /// The metrics bucket for a request of this type (`None` = all sections).
    pub fn request_kind(kind: Option<MapcodeType>) -> RequestKind {
        match kind {
            None | Some(MapcodeType::Mapcodes) => RequestKind::EncodeAll,
            Some(MapcodeType::Local) => RequestKind::EncodeLocal,
            Some(MapcodeType::International) => RequestKind::EncodeInternational,
        }
    }
}

/// Limits on which territories may supply mapcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Restriction {
    #[default]
    Unrestricted,
    /// Only this territory; the local code comes from encode-shortest.
    Territory(Territory),
    /// Only this country and its subdivisions.
    Country(Territory),
}

impl Restriction {
    fn territory_filter(self) -> Option<Territory> {
        match self {
            Restriction::Territory(t) => Some(t),
            _ => None,
        }
    }

    fn describe(self) -> String {
        match self {
            Restriction::Unrestricted => "none".to_string(),
            Restriction::Territory(t) => format!("territory {}", t.code()),
            Restriction::Country(t) => format!("country {}", t.code()),
        }
    }
}

/// A mapcode with the area it decodes to.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub mapcode: Mapcode,
    pub rectangle: Rectangle,
}

/// Everything the codec returned for one coordinate.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub point: Point,
    pub restriction: Restriction,
    pub local: Option<Candidate>,
    pub international: Candidate,
    /// All candidates in encoder order, minus any that failed to decode.
    pub mapcodes: Vec<Candidate>,
}

/// The part of a [`QueryOutcome`] selected by a [`MapcodeType`].
#[derive(Debug, Clone)]
pub enum Selection {
    All(QueryOutcome),
    Local(Candidate),
    International(Candidate),
    Mapcodes(Vec<Candidate>),
}

impl QueryOutcome {
    /// Narrow the outcome to the requested type.
    ///
    /// # Errors
    ///
    /// [`MapcoderError::NotFound`] for `Local` when there is no local mapcode.
    pub fn select(self, kind: Option<MapcodeType>) -> Result<Selection> {
        match kind {
            None => Ok(Selection::All(self)),
            Some(MapcodeType::International) => Ok(Selection::International(self.international)),
            Some(MapcodeType::Mapcodes) => Ok(Selection::Mapcodes(self.mapcodes)),
            Some(MapcodeType::Local) => match self.local {
                Some(local) => Ok(Selection::Local(local)),
                None => Err(MapcoderError::not_found(format!(
                    "No local mapcode for lat={}, lon={} (restriction: {})",
                    self.point.lat_deg,
                    self.point.lon_deg,
                    self.restriction.describe()
                ))),
            },
        }
    }
}

/// Index of the local mapcode among `mapcodes`, in encoder order.
///
/// See the [module documentation](self) for the rule.
pub fn select_local<'a>(mapcodes: impl IntoIterator<Item = &'a Mapcode>) -> Option<usize> {
    let mut chosen: Option<(usize, &Mapcode)> = None;
    for (i, mapcode) in mapcodes.into_iter().enumerate() {
        if mapcode.is_international() {
            continue;
        }
        match chosen {
            None => chosen = Some((i, mapcode)),
            Some((_, current)) => {
                if mapcode.territory != current.territory && mapcode.code.len() < current.code.len() {
                    chosen = Some((i, mapcode));
                }
            }
        }
    }
    chosen.map(|(i, _)| i)
}

fn decode_context(mapcode: &Mapcode) -> Option<Territory> {
    (!mapcode.is_international()).then_some(mapcode.territory)
}

fn with_rectangle(codec: &dyn MapcodeCodec, mapcode: Mapcode) -> std::result::Result<Candidate, CodecError> {
    let rectangle = codec.decode_to_rectangle(&mapcode.code(0), decode_context(&mapcode))?;
    Ok(Candidate { mapcode, rectangle })
}

/// Like [`with_rectangle`], but a failure drops the candidate with a warning.
fn with_rectangle_or_drop(codec: &dyn MapcodeCodec, mapcode: Mapcode) -> Option<Candidate> {
    let label = mapcode.code_with_territory(0);
    match with_rectangle(codec, mapcode) {
        Ok(candidate) => Some(candidate),
        Err(e) => {
            tracing::warn!(mapcode = %label, error = %e, "Dropping mapcode that does not decode");
            None
        }
    }
}

/// Encode `point` and assemble every candidate.
///
/// # Errors
///
/// [`MapcoderError::NotFound`] if the codec cannot encode `point`, or the
/// international code does not decode.
pub fn run(codec: &dyn MapcodeCodec, point: Point, restriction: Restriction) -> Result<QueryOutcome> {
    let not_found = |e: CodecError| {
        MapcoderError::not_found(format!(
            "No mapcode for lat={}, lon={} (restriction: {}): {}",
            point.lat_deg,
            point.lon_deg,
            restriction.describe(),
            e
        ))
    };

    let mut encoded = codec
        .encode_all(point, restriction.territory_filter())
        .map_err(not_found)?;
    if let Restriction::Country(country) = restriction {
        encoded.retain(|m| !m.is_international() && m.territory.country() == country);
    }

    let international = codec.encode_international(point).map_err(not_found)?;
    let international = with_rectangle(codec, international).map_err(not_found)?;

    let mapcodes: Vec<Candidate> = encoded
        .into_iter()
        .filter_map(|m| with_rectangle_or_drop(codec, m))
        .collect();

    let local = match restriction {
        Restriction::Territory(territory) => match codec.encode_shortest(point, territory) {
            Ok(mapcode) => with_rectangle_or_drop(codec, mapcode),
            Err(e) => {
                tracing::debug!(territory = %territory, error = %e, "No shortest mapcode in territory");
                None
            }
        },
        _ => select_local(mapcodes.iter().map(|c| &c.mapcode)).map(|i| mapcodes[i].clone()),
    };

    tracing::debug!(
        lat = point.lat_deg,
        lon = point.lon_deg,
        candidates = mapcodes.len(),
        local = ?local.as_ref().map(|c| c.mapcode.code_with_territory(0)),
        "Mapcode query assembled"
    );

    Ok(QueryOutcome {
        point,
        restriction,
        local,
        international,
        mapcodes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::table::TableCodec;

    fn t(code: &str) -> Territory {
        Territory::from_code(code).unwrap()
    }

    fn m(code: &str, territory: &str) -> Mapcode {
        Mapcode::new(code, "", t(territory))
    }

    fn point() -> Point {
        Point::new(50.141706, 6.135864)
    }

    fn table() -> TableCodec {
        TableCodec::new()
            .with_mapcode(point(), Mapcode::new("JL0.KP", "4N7V2QKR", t("LUX")), None)
            .with_mapcode(point(), m("R8RN.07Z", "LUX"), None)
            .with_mapcode(point(), m("SQB.NR3", "BEL"), None)
            .with_mapcode(point(), m("0B46.W1Z", "DEU"), None)
            .with_mapcode(point(), Mapcode::new("VJ0L6.9PNQ", "M3X8", Territory::AAA), None)
    }

    /// Wraps a table and refuses to decode one code.
    struct Flaky {
        inner: TableCodec,
        broken: &'static str,
    }

    impl MapcodeCodec for Flaky {
        fn encode_all(&self, point: Point, territory: Option<Territory>) -> std::result::Result<Vec<Mapcode>, CodecError> {
            self.inner.encode_all(point, territory)
        }
        fn encode_international(&self, point: Point) -> std::result::Result<Mapcode, CodecError> {
            self.inner.encode_international(point)
        }
        fn encode_shortest(&self, point: Point, territory: Territory) -> std::result::Result<Mapcode, CodecError> {
            self.inner.encode_shortest(point, territory)
        }
        fn decode_to_point(&self, code: &str, territory: Option<Territory>) -> std::result::Result<Point, CodecError> {
            self.inner.decode_to_point(code, territory)
        }
        fn decode_to_rectangle(
            &self,
            code: &str,
            territory: Option<Territory>,
        ) -> std::result::Result<Rectangle, CodecError> {
            if code == self.broken {
                return Err(CodecError::UnknownMapcode(code.to_string()));
            }
            self.inner.decode_to_rectangle(code, territory)
        }
        fn to_alphabet(&self, text: &str, alphabet: Alphabet) -> String {
            self.inner.to_alphabet(text, alphabet)
        }
    }

    #[test]
    fn test_select_local_first_territory() {
        let list = [
            m("JL0.KP", "LUX"),
            m("R8RN.07Z", "LUX"),
            m("SQB.NR3", "BEL"),
            m("VJ0L6.9PNQ", "AAA"),
        ];
        assert_eq!(select_local(&list), Some(0));
    }

    #[test]
    fn test_select_local_is_not_global_shortest() {
        // The shorter NLD code is never considered: it shares the territory
        // of the current choice.
        let list = [m("AAA.BBB", "NLD"), m("AA.BB", "NLD"), m("AAA.BB", "BEL")];
        assert_eq!(select_local(&list), Some(2));
    }

    #[test]
    fn test_select_local_replacement_moves_territory() {
        let list = [m("AAAA.BBB", "NLD"), m("AAA.BBB", "BEL"), m("AA.BBB", "NLD")];
        assert_eq!(select_local(&list), Some(2));
    }

    #[test]
    fn test_select_local_equal_length_keeps_first() {
        let list = [m("AAA.BBB", "NLD"), m("CCC.DDD", "BEL")];
        assert_eq!(select_local(&list), Some(0));
    }

    #[test]
    fn test_select_local_skips_international() {
        let list = [m("VJ0L6.9PNQ", "AAA"), m("JL0.KP", "LUX")];
        assert_eq!(select_local(&list), Some(1));
        assert_eq!(select_local(&[m("VJ0L6.9PNQ", "AAA")]), None);
        assert_eq!(select_local(std::iter::empty()), None);
    }

    #[test]
    fn test_select_local_deterministic() {
        let list = [m("AAA.BBB", "NLD"), m("AA.BB", "NLD"), m("AAA.BB", "BEL")];
        let first = select_local(&list);
        assert_eq!(select_local(&list), first);
    }

    #[test]
    fn test_run_unrestricted() {
        let outcome = run(&table(), point(), Restriction::Unrestricted).unwrap();
        assert_eq!(outcome.international.mapcode.code(0), "VJ0L6.9PNQ");
        let local = outcome.local.unwrap();
        assert_eq!(local.mapcode.code(0), "JL0.KP");
        assert_eq!(local.mapcode.territory, t("LUX"));
        assert_eq!(outcome.mapcodes.len(), 5);
        assert!(outcome.international.rectangle.contains(&point()));
    }

    #[test]
    fn test_run_territory_restriction() {
        let outcome = run(&table(), point(), Restriction::Territory(t("BEL"))).unwrap();
        assert_eq!(outcome.mapcodes.len(), 1);
        assert_eq!(outcome.local.unwrap().mapcode.code, "SQB.NR3");
        assert_eq!(outcome.international.mapcode.code, "VJ0L6.9PNQ");
    }

    #[test]
    fn test_run_territory_without_codes() {
        let outcome = run(&table(), point(), Restriction::Territory(t("FRA"))).unwrap();
        assert!(outcome.mapcodes.is_empty());
        assert!(outcome.local.is_none());
        let err = outcome.select(Some(MapcodeType::Local)).unwrap_err();
        assert!(matches!(err, MapcoderError::NotFound { .. }));
    }

    #[test]
    fn test_run_country_restriction() {
        let outcome = run(&table(), point(), Restriction::Country(t("DEU"))).unwrap();
        assert_eq!(outcome.mapcodes.len(), 1);
        assert_eq!(outcome.local.unwrap().mapcode.code, "0B46.W1Z");
    }

    #[test]
    fn test_run_unknown_point() {
        let err = run(&table(), Point::new(10.0, 10.0), Restriction::Unrestricted).unwrap_err();
        match err {
            MapcoderError::NotFound { message } => {
                assert!(message.contains("lat=10"));
                assert!(message.contains("restriction: none"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_secondary_decode_failure_drops_candidate() {
        let codec = Flaky {
            inner: table(),
            broken: "SQB.NR3",
        };
        let outcome = run(&codec, point(), Restriction::Unrestricted).unwrap();
        assert_eq!(outcome.mapcodes.len(), 4);
        assert!(outcome.mapcodes.iter().all(|c| c.mapcode.code != "SQB.NR3"));
        assert_eq!(outcome.local.unwrap().mapcode.code, "JL0.KP");
    }

    #[test]
    fn test_local_decode_failure_moves_local() {
        let codec = Flaky {
            inner: table(),
            broken: "JL0.KP",
        };
        let outcome = run(&codec, point(), Restriction::Unrestricted).unwrap();
        // R8RN.07Z (LUX) is first now; SQB.NR3 (BEL) is shorter.
        assert_eq!(outcome.local.unwrap().mapcode.code, "SQB.NR3");
    }

    #[test]
    fn test_international_decode_failure_is_fatal() {
        let codec = Flaky {
            inner: table(),
            broken: "VJ0L6.9PNQ",
        };
        let err = run(&codec, point(), Restriction::Unrestricted).unwrap_err();
        assert!(matches!(err, MapcoderError::NotFound { .. }));
    }

    #[test]
    fn test_select() {
        let outcome = run(&table(), point(), Restriction::Unrestricted).unwrap();
        match outcome.clone().select(Some(MapcodeType::International)).unwrap() {
            Selection::International(c) => assert_eq!(c.mapcode.code, "VJ0L6.9PNQ"),
            other => panic!("unexpected selection: {other:?}"),
        }
        match outcome.clone().select(Some(MapcodeType::Mapcodes)).unwrap() {
            Selection::Mapcodes(list) => assert_eq!(list.len(), 5),
            other => panic!("unexpected selection: {other:?}"),
        }
        assert!(matches!(outcome.select(None).unwrap(), Selection::All(_)));
    }

    #[test]
    fn test_request_kind() {
        assert_eq!(MapcodeType::request_kind(None), RequestKind::EncodeAll);
        assert_eq!(
            MapcodeType::request_kind(Some(MapcodeType::Local)),
            RequestKind::EncodeLocal
        );
    }
}
