//! # mapcoder - Mapcode Request Core
//!
//! Request interpretation and result assembly for mapcode conversion
//! services: everything between a raw HTTP or CLI request and the codec
//! that does the grid mathematics.
//!
//! ## Features
//!
//! - **Validation**: every free-text field is parsed once into a closed type
//! - **Territory resolution**: aliases, full names and parent-context
//!   disambiguation (`IN` is India, or Indiana with context `US`)
//! - **Local mapcode selection**: the order-dependent rule clients rely on
//! - **Result shaping**: precision, alphabets, offsets and rectangles
//! - **Pagination**: offset/count windows with end-relative offsets
//!
//! ## Quick Start
//!
//! ```
//! use mapcoder::{codec::Mapcode, geo::Point, service::EncodeRequest};
//! use mapcoder::{MapcodeService, TableCodec, Territory};
//!
//! let point = Point::new(50.141706, 6.135864);
//! let lux = Territory::from_code("LUX").unwrap();
//! let codec = TableCodec::new()
//!     .with_mapcode(point, Mapcode::new("JL0.KP", "", lux), None)
//!     .with_mapcode(point, Mapcode::new("VJ0L6.9PNQ", "", Territory::AAA), None);
//!
//! let service = MapcodeService::new(codec);
//! let request = EncodeRequest {
//!     kind: Some("local".to_string()),
//!     ..EncodeRequest::new("50.141706,6.135864")
//! };
//! let json = serde_json::to_value(service.encode(&request).unwrap()).unwrap();
//! assert_eq!(json["mapcode"], "JL0.KP");
//! assert_eq!(json["territory"], "LUX");
//! ```
//!
//! ## The Codec
//!
//! Encoding and decoding are delegated to a [`MapcodeCodec`]. This crate
//! ships [`TableCodec`], an in-memory implementation over a recorded JSON
//! table, for tests, demos and fixed deployments.

pub mod alphabet;
pub mod codec;
pub mod error;
pub mod format;
pub mod geo;
pub mod metrics;
pub mod paginate;
pub mod params;
pub mod query;
pub mod resolver;
pub mod service;
pub mod table;
pub mod territory;

// Re-export main types at crate root for convenience
pub use alphabet::Alphabet;
pub use codec::{CodecError, Mapcode, MapcodeCodec};
pub use error::{MapcoderError, Result};
pub use service::{MapcodeService, MapcodeServiceBuilder};
pub use table::TableCodec;
pub use territory::Territory;
