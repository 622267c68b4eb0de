//! The fixed catalog of alphabets a mapcode can be rendered in.

use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr, VariantNames};

use crate::error::{MapcoderError, Result};

/// An alphabet supported for mapcode transliteration.
///
/// The declaration order is the catalog order used for listing and
/// pagination. `Roman` is the default and the universal fallback.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
    VariantNames,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Alphabet {
    Roman,
    Greek,
    Cyrillic,
    Hebrew,
    Devanagari,
    Malayalam,
    Georgian,
    Katakana,
    Thai,
    Lao,
    Armenian,
    Bengali,
    Gurmukhi,
    Tibetan,
}

impl Alphabet {
    /// All alphabets in catalog order.
    pub fn all() -> Vec<Alphabet> {
        Alphabet::iter().collect()
    }

    /// Canonical upper-case name, e.g. `"GREEK"`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Parse an alphabet name, ignoring ASCII case and surrounding blanks.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapcoder::Alphabet;
    ///
    /// assert_eq!(Alphabet::parse("greek").unwrap(), Alphabet::Greek);
    /// assert!(Alphabet::parse("klingon").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Alphabet> {
        token
            .trim()
            .parse()
            .map_err(|_| MapcoderError::InvalidEnum {
                field: "alphabet",
                value: token.to_string(),
                valid: Alphabet::VARIANTS.join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_size() {
        let all = Alphabet::all();
        assert_eq!(all.len(), 14);
        assert_eq!(Alphabet::COUNT, 14);
        assert_eq!(all[0], Alphabet::Roman);
        assert_eq!(all[1], Alphabet::Greek);
        assert_eq!(all[13], Alphabet::Tibetan);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Alphabet::parse("ROMAN").unwrap(), Alphabet::Roman);
        assert_eq!(Alphabet::parse("cyrillic").unwrap(), Alphabet::Cyrillic);
        assert_eq!(Alphabet::parse(" Thai ").unwrap(), Alphabet::Thai);
    }

    #[test]
    fn test_parse_unknown_lists_valid_names() {
        let err = Alphabet::parse("latin").unwrap_err();
        match err {
            MapcoderError::InvalidEnum { field, valid, .. } => {
                assert_eq!(field, "alphabet");
                assert!(valid.starts_with("ROMAN, GREEK"));
                assert!(valid.ends_with("TIBETAN"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_name_and_display_agree() {
        for alphabet in Alphabet::iter() {
            assert_eq!(alphabet.name(), alphabet.to_string());
        }
        assert_eq!(Alphabet::Devanagari.name(), "DEVANAGARI");
    }
}
