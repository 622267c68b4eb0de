//! The compiled-in territory catalog.
//!
//! Territories are countries, the worldwide pseudo-territory `AAA`, and
//! country subdivisions coded `XX-YY` (e.g. `US-IN` for Indiana). The
//! catalog is a static table; a lookup index is built once on first use
//! and shared by all threads.
//!
//! # Codes
//!
//! Every territory has three alpha codes:
//!
//! - the canonical code (`US-IN`, `NLD`)
//! - the minimal code: the part after the hyphen for subdivisions (`IN`)
//! - the minimal unambiguous code: the minimal code if no other territory
//!   answers to it, else the canonical code (`US-IN`, because `IN` is
//!   also India)
//!
//! # Usage
//!
//! ```
//! use mapcoder::Territory;
//!
//! let usa = Territory::from_code("USA").unwrap();
//! let indiana = Territory::parse("IN", Some(usa)).unwrap();
//! assert_eq!(indiana.code(), "US-IN");
//! assert_eq!(indiana.full_name(), "Indiana");
//! assert_eq!(Territory::parse("IN", None).unwrap().code(), "IND");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::alphabet::Alphabet;
use crate::error::{MapcoderError, Result};

/// A single row of the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerritoryInfo {
    /// Canonical alpha code: `"NLD"`, `"US-IN"`.
    pub code: &'static str,
    /// Full English name.
    pub full_name: &'static str,
    /// Canonical code of the parent country, for subdivisions.
    pub parent: Option<&'static str>,
    /// Alternative codes, e.g. ISO 3166 alpha-2.
    pub aliases: &'static [&'static str],
    /// Alternative full names.
    pub full_name_aliases: &'static [&'static str],
    /// Alphabets in use, most common first. Always contains `Roman`.
    pub alphabets: &'static [Alphabet],
}

impl TerritoryInfo {
    const fn country(
        code: &'static str,
        full_name: &'static str,
        aliases: &'static [&'static str],
        alphabets: &'static [Alphabet],
    ) -> Self {
        Self {
            code,
            full_name,
            parent: None,
            aliases,
            full_name_aliases: &[],
            alphabets,
        }
    }

    const fn subdivision(
        code: &'static str,
        full_name: &'static str,
        parent: &'static str,
        alphabets: &'static [Alphabet],
    ) -> Self {
        Self {
            code,
            full_name,
            parent: Some(parent),
            aliases: &[],
            full_name_aliases: &[],
            alphabets,
        }
    }

    const fn named(self, full_name_aliases: &'static [&'static str]) -> Self {
        Self {
            full_name_aliases,
            ..self
        }
    }
}

const ROMAN: &[Alphabet] = &[Alphabet::Roman];
const CYRILLIC: &[Alphabet] = &[Alphabet::Cyrillic, Alphabet::Roman];
const GREEK: &[Alphabet] = &[Alphabet::Greek, Alphabet::Roman];
const DEVANAGARI: &[Alphabet] = &[Alphabet::Devanagari, Alphabet::Roman];
const BENGALI: &[Alphabet] = &[Alphabet::Bengali, Alphabet::Roman];
const GURMUKHI: &[Alphabet] = &[Alphabet::Gurmukhi, Alphabet::Roman];
const MALAYALAM: &[Alphabet] = &[Alphabet::Malayalam, Alphabet::Roman];

// ============================================================================
// STATIC CATALOG DATA
// ============================================================================

/// The catalog. `AAA` must stay first; order is the listing order.
pub const TERRITORIES: &[TerritoryInfo] = &[
    TerritoryInfo::country("AAA", "International", &[], ROMAN).named(&["Worldwide", "Earth"]),
    // ── Americas ──────────────────────────────────────────────────────────
    TerritoryInfo::country("USA", "United States of America", &["US"], ROMAN)
        .named(&["United States", "America"]),
    TerritoryInfo::country("CAN", "Canada", &["CA"], ROMAN),
    TerritoryInfo::country("MEX", "Mexico", &["MX"], ROMAN),
    TerritoryInfo::country("BRA", "Brazil", &["BR"], ROMAN).named(&["Brasil"]),
    TerritoryInfo::country("ARG", "Argentina", &["AR"], ROMAN),
    TerritoryInfo::country("CHL", "Chile", &["CL"], ROMAN),
    TerritoryInfo::country("COL", "Colombia", &["CO"], ROMAN),
    TerritoryInfo::country("PER", "Peru", &["PE"], ROMAN),
    TerritoryInfo::country("VEN", "Venezuela", &["VE"], ROMAN),
    TerritoryInfo::country("ECU", "Ecuador", &["EC"], ROMAN),
    TerritoryInfo::country("BOL", "Bolivia", &["BO"], ROMAN),
    TerritoryInfo::country("PRY", "Paraguay", &["PY"], ROMAN),
    TerritoryInfo::country("URY", "Uruguay", &["UY"], ROMAN),
    TerritoryInfo::country("GUY", "Guyana", &["GY"], ROMAN),
    TerritoryInfo::country("SUR", "Suriname", &["SR"], ROMAN),
    TerritoryInfo::country("GUF", "French Guiana", &["GF"], ROMAN),
    TerritoryInfo::country("PAN", "Panama", &["PA"], ROMAN),
    TerritoryInfo::country("CRI", "Costa Rica", &["CR"], ROMAN),
    TerritoryInfo::country("NIC", "Nicaragua", &["NI"], ROMAN),
    TerritoryInfo::country("HND", "Honduras", &["HN"], ROMAN),
    TerritoryInfo::country("SLV", "El Salvador", &["SV"], ROMAN),
    TerritoryInfo::country("GTM", "Guatemala", &["GT"], ROMAN),
    TerritoryInfo::country("BLZ", "Belize", &["BZ"], ROMAN),
    TerritoryInfo::country("CUB", "Cuba", &["CU"], ROMAN),
    TerritoryInfo::country("JAM", "Jamaica", &["JM"], ROMAN),
    TerritoryInfo::country("HTI", "Haiti", &["HT"], ROMAN),
    TerritoryInfo::country("DOM", "Dominican Republic", &["DO"], ROMAN),
    TerritoryInfo::country("PRI", "Puerto Rico", &["PR"], ROMAN),
    TerritoryInfo::country("BHS", "Bahamas", &["BS"], ROMAN),
    TerritoryInfo::country("BRB", "Barbados", &["BB"], ROMAN),
    TerritoryInfo::country("TTO", "Trinidad and Tobago", &["TT"], ROMAN),
    TerritoryInfo::country("GRD", "Grenada", &["GD"], ROMAN),
    TerritoryInfo::country("LCA", "Saint Lucia", &["LC"], ROMAN),
    TerritoryInfo::country("VCT", "Saint Vincent and the Grenadines", &["VC"], ROMAN),
    TerritoryInfo::country("DMA", "Dominica", &["DM"], ROMAN),
    TerritoryInfo::country("ATG", "Antigua and Barbuda", &["AG"], ROMAN),
    TerritoryInfo::country("KNA", "Saint Kitts and Nevis", &["KN"], ROMAN),
    TerritoryInfo::country("ABW", "Aruba", &["AW"], ROMAN),
    TerritoryInfo::country("CUW", "Curacao", &["CW"], ROMAN),
    TerritoryInfo::country("SXM", "Sint Maarten", &["SX"], ROMAN),
    TerritoryInfo::country("BES", "Caribbean Netherlands", &["BQ"], ROMAN)
        .named(&["Bonaire, Sint Eustatius and Saba"]),
    TerritoryInfo::country("GLP", "Guadeloupe", &["GP"], ROMAN),
    TerritoryInfo::country("MTQ", "Martinique", &["MQ"], ROMAN),
    TerritoryInfo::country("BLM", "Saint Barthelemy", &["BL"], ROMAN),
    TerritoryInfo::country("MAF", "Saint Martin", &["MF"], ROMAN),
    TerritoryInfo::country("VGB", "British Virgin Islands", &["VG"], ROMAN),
    TerritoryInfo::country("VIR", "United States Virgin Islands", &["VI"], ROMAN),
    TerritoryInfo::country("AIA", "Anguilla", &["AI"], ROMAN),
    TerritoryInfo::country("MSR", "Montserrat", &["MS"], ROMAN),
    TerritoryInfo::country("CYM", "Cayman Islands", &["KY"], ROMAN),
    TerritoryInfo::country("TCA", "Turks and Caicos Islands", &["TC"], ROMAN),
    TerritoryInfo::country("BMU", "Bermuda", &["BM"], ROMAN),
    TerritoryInfo::country("GRL", "Greenland", &["GL"], ROMAN),
    TerritoryInfo::country("SPM", "Saint Pierre and Miquelon", &["PM"], ROMAN),
    TerritoryInfo::country("FLK", "Falkland Islands", &["FK"], ROMAN).named(&["Malvinas"]),
    TerritoryInfo::country("SGS", "South Georgia and the South Sandwich Islands", &["GS"], ROMAN),
    // ── Europe ────────────────────────────────────────────────────────────
    TerritoryInfo::country("NLD", "Netherlands", &["NL"], ROMAN)
        .named(&["Holland", "The Netherlands"]),
    TerritoryInfo::country("BEL", "Belgium", &["BE"], ROMAN),
    TerritoryInfo::country("LUX", "Luxembourg", &["LU"], ROMAN),
    TerritoryInfo::country("DEU", "Germany", &["DE"], ROMAN).named(&["Deutschland"]),
    TerritoryInfo::country("FRA", "France", &["FR"], ROMAN),
    TerritoryInfo::country("GBR", "United Kingdom", &["GB", "UK"], ROMAN)
        .named(&["Great Britain", "Britain"]),
    TerritoryInfo::country("IRL", "Ireland", &["IE"], ROMAN),
    TerritoryInfo::country("ESP", "Spain", &["ES"], ROMAN),
    TerritoryInfo::country("PRT", "Portugal", &["PT"], ROMAN),
    TerritoryInfo::country("ITA", "Italy", &["IT"], ROMAN),
    TerritoryInfo::country("CHE", "Switzerland", &["CH"], ROMAN).named(&["Swiss Confederation"]),
    TerritoryInfo::country("AUT", "Austria", &["AT"], ROMAN),
    TerritoryInfo::country("DNK", "Denmark", &["DK"], ROMAN),
    TerritoryInfo::country("NOR", "Norway", &["NO"], ROMAN),
    TerritoryInfo::country("SWE", "Sweden", &["SE"], ROMAN),
    TerritoryInfo::country("FIN", "Finland", &["FI"], ROMAN),
    TerritoryInfo::country("POL", "Poland", &["PL"], ROMAN),
    TerritoryInfo::country("GRC", "Greece", &["GR"], GREEK).named(&["Hellas"]),
    TerritoryInfo::country("CYP", "Cyprus", &["CY"], GREEK),
    TerritoryInfo::country("UKR", "Ukraine", &["UA"], CYRILLIC),
    TerritoryInfo::country("BGR", "Bulgaria", &["BG"], CYRILLIC),
    TerritoryInfo::country("RUS", "Russia", &["RU"], CYRILLIC).named(&["Russian Federation"]),
    TerritoryInfo::country("TUR", "Turkey", &["TR"], ROMAN).named(&["Turkiye"]),
    TerritoryInfo::country("ISL", "Iceland", &["IS"], ROMAN),
    TerritoryInfo::country("FRO", "Faroe Islands", &["FO"], ROMAN),
    TerritoryInfo::country("EST", "Estonia", &["EE"], ROMAN),
    TerritoryInfo::country("LVA", "Latvia", &["LV"], ROMAN),
    TerritoryInfo::country("LTU", "Lithuania", &["LT"], ROMAN),
    TerritoryInfo::country("BLR", "Belarus", &["BY"], CYRILLIC),
    TerritoryInfo::country("MDA", "Moldova", &["MD"], ROMAN),
    TerritoryInfo::country("ROU", "Romania", &["RO"], ROMAN),
    TerritoryInfo::country("HUN", "Hungary", &["HU"], ROMAN),
    TerritoryInfo::country("CZE", "Czechia", &["CZ"], ROMAN).named(&["Czech Republic"]),
    TerritoryInfo::country("SVK", "Slovakia", &["SK"], ROMAN),
    TerritoryInfo::country("SVN", "Slovenia", &["SI"], ROMAN),
    TerritoryInfo::country("HRV", "Croatia", &["HR"], ROMAN),
    TerritoryInfo::country("BIH", "Bosnia and Herzegovina", &["BA"], ROMAN),
    TerritoryInfo::country("SRB", "Serbia", &["RS"], CYRILLIC),
    TerritoryInfo::country("MNE", "Montenegro", &["ME"], ROMAN),
    TerritoryInfo::country("MKD", "North Macedonia", &["MK"], CYRILLIC).named(&["Macedonia"]),
    TerritoryInfo::country("ALB", "Albania", &["AL"], ROMAN),
    TerritoryInfo::country("XKX", "Kosovo", &["XK"], ROMAN),
    TerritoryInfo::country("MLT", "Malta", &["MT"], ROMAN),
    TerritoryInfo::country("AND", "Andorra", &["AD"], ROMAN),
    TerritoryInfo::country("MCO", "Monaco", &["MC"], ROMAN),
    TerritoryInfo::country("SMR", "San Marino", &["SM"], ROMAN),
    TerritoryInfo::country("VAT", "Vatican City", &["VA"], ROMAN).named(&["Holy See"]),
    TerritoryInfo::country("LIE", "Liechtenstein", &["LI"], ROMAN),
    TerritoryInfo::country("GIB", "Gibraltar", &["GI"], ROMAN),
    TerritoryInfo::country("IMN", "Isle of Man", &["IM"], ROMAN),
    TerritoryInfo::country("JEY", "Jersey", &["JE"], ROMAN),
    TerritoryInfo::country("GGY", "Guernsey", &["GG"], ROMAN),
    TerritoryInfo::country("ALA", "Aland Islands", &["AX"], ROMAN),
    TerritoryInfo::country("SJM", "Svalbard and Jan Mayen", &["SJ"], ROMAN),
    // ── Asia ──────────────────────────────────────────────────────────────
    TerritoryInfo::country("ISR", "Israel", &["IL"], &[Alphabet::Hebrew, Alphabet::Roman]),
    TerritoryInfo::country("ARM", "Armenia", &["AM"], &[Alphabet::Armenian, Alphabet::Roman]),
    TerritoryInfo::country("GEO", "Georgia", &["GE"], &[Alphabet::Georgian, Alphabet::Roman]),
    TerritoryInfo::country(
        "IND",
        "India",
        &["IN"],
        &[
            Alphabet::Devanagari,
            Alphabet::Bengali,
            Alphabet::Gurmukhi,
            Alphabet::Malayalam,
            Alphabet::Roman,
        ],
    ),
    TerritoryInfo::country("NPL", "Nepal", &["NP"], DEVANAGARI),
    TerritoryInfo::country("BGD", "Bangladesh", &["BD"], BENGALI),
    TerritoryInfo::country("BTN", "Bhutan", &["BT"], &[Alphabet::Tibetan, Alphabet::Roman]),
    TerritoryInfo::country("CHN", "China", &["CN"], ROMAN).named(&["People's Republic of China"]),
    TerritoryInfo::country("JPN", "Japan", &["JP"], &[Alphabet::Katakana, Alphabet::Roman]),
    TerritoryInfo::country("THA", "Thailand", &["TH"], &[Alphabet::Thai, Alphabet::Roman]),
    TerritoryInfo::country("LAO", "Laos", &["LA"], &[Alphabet::Lao, Alphabet::Roman])
        .named(&["Lao People's Democratic Republic"]),
    TerritoryInfo::country("MYS", "Malaysia", &["MY"], ROMAN),
    TerritoryInfo::country("SGP", "Singapore", &["SG"], ROMAN),
    TerritoryInfo::country("IDN", "Indonesia", &["ID"], ROMAN),
    TerritoryInfo::country("PAK", "Pakistan", &["PK"], ROMAN),
    TerritoryInfo::country("AFG", "Afghanistan", &["AF"], ROMAN),
    TerritoryInfo::country("IRN", "Iran", &["IR"], ROMAN),
    TerritoryInfo::country("IRQ", "Iraq", &["IQ"], ROMAN),
    TerritoryInfo::country("SYR", "Syria", &["SY"], ROMAN),
    TerritoryInfo::country("LBN", "Lebanon", &["LB"], ROMAN),
    TerritoryInfo::country("JOR", "Jordan", &["JO"], ROMAN),
    TerritoryInfo::country("PSE", "Palestinian Territories", &["PS"], ROMAN).named(&["Palestine"]),
    TerritoryInfo::country("SAU", "Saudi Arabia", &["SA"], ROMAN),
    TerritoryInfo::country("YEM", "Yemen", &["YE"], ROMAN),
    TerritoryInfo::country("OMN", "Oman", &["OM"], ROMAN),
    TerritoryInfo::country("ARE", "United Arab Emirates", &["AE"], ROMAN),
    TerritoryInfo::country("QAT", "Qatar", &["QA"], ROMAN),
    TerritoryInfo::country("BHR", "Bahrain", &["BH"], ROMAN),
    TerritoryInfo::country("KWT", "Kuwait", &["KW"], ROMAN),
    TerritoryInfo::country("AZE", "Azerbaijan", &["AZ"], ROMAN),
    TerritoryInfo::country("KAZ", "Kazakhstan", &["KZ"], CYRILLIC),
    TerritoryInfo::country("UZB", "Uzbekistan", &["UZ"], ROMAN),
    TerritoryInfo::country("TKM", "Turkmenistan", &["TM"], ROMAN),
    TerritoryInfo::country("KGZ", "Kyrgyzstan", &["KG"], CYRILLIC),
    TerritoryInfo::country("TJK", "Tajikistan", &["TJ"], CYRILLIC),
    TerritoryInfo::country("MNG", "Mongolia", &["MN"], CYRILLIC),
    TerritoryInfo::country("KOR", "South Korea", &["KR"], ROMAN).named(&["Republic of Korea"]),
    TerritoryInfo::country("PRK", "North Korea", &["KP"], ROMAN),
    TerritoryInfo::country("TWN", "Taiwan", &["TW"], ROMAN),
    TerritoryInfo::country("HKG", "Hong Kong", &["HK"], ROMAN),
    TerritoryInfo::country("MAC", "Macao", &["MO"], ROMAN).named(&["Macau"]),
    TerritoryInfo::country("VNM", "Vietnam", &["VN"], ROMAN).named(&["Viet Nam"]),
    TerritoryInfo::country("KHM", "Cambodia", &["KH"], ROMAN),
    TerritoryInfo::country("MMR", "Myanmar", &["MM"], ROMAN).named(&["Burma"]),
    TerritoryInfo::country("PHL", "Philippines", &["PH"], ROMAN),
    TerritoryInfo::country("BRN", "Brunei", &["BN"], ROMAN),
    TerritoryInfo::country("TLS", "Timor-Leste", &["TL"], ROMAN).named(&["East Timor"]),
    TerritoryInfo::country("LKA", "Sri Lanka", &["LK"], ROMAN),
    TerritoryInfo::country("MDV", "Maldives", &["MV"], ROMAN),
    TerritoryInfo::country("IOT", "British Indian Ocean Territory", &["IO"], ROMAN),
    // ── Africa & Oceania ──────────────────────────────────────────────────
    TerritoryInfo::country("EGY", "Egypt", &["EG"], ROMAN),
    TerritoryInfo::country("KEN", "Kenya", &["KE"], ROMAN),
    TerritoryInfo::country("ZAF", "South Africa", &["ZA"], ROMAN),
    TerritoryInfo::country("MAR", "Morocco", &["MA"], ROMAN),
    TerritoryInfo::country("DZA", "Algeria", &["DZ"], ROMAN),
    TerritoryInfo::country("TUN", "Tunisia", &["TN"], ROMAN),
    TerritoryInfo::country("LBY", "Libya", &["LY"], ROMAN),
    TerritoryInfo::country("SDN", "Sudan", &["SD"], ROMAN),
    TerritoryInfo::country("SSD", "South Sudan", &["SS"], ROMAN),
    TerritoryInfo::country("ESH", "Western Sahara", &["EH"], ROMAN),
    TerritoryInfo::country("MRT", "Mauritania", &["MR"], ROMAN),
    TerritoryInfo::country("MLI", "Mali", &["ML"], ROMAN),
    TerritoryInfo::country("NER", "Niger", &["NE"], ROMAN),
    TerritoryInfo::country("TCD", "Chad", &["TD"], ROMAN),
    TerritoryInfo::country("SEN", "Senegal", &["SN"], ROMAN),
    TerritoryInfo::country("GMB", "Gambia", &["GM"], ROMAN),
    TerritoryInfo::country("GNB", "Guinea-Bissau", &["GW"], ROMAN),
    TerritoryInfo::country("GIN", "Guinea", &["GN"], ROMAN),
    TerritoryInfo::country("SLE", "Sierra Leone", &["SL"], ROMAN),
    TerritoryInfo::country("LBR", "Liberia", &["LR"], ROMAN),
    TerritoryInfo::country("CIV", "Cote d'Ivoire", &["CI"], ROMAN).named(&["Ivory Coast"]),
    TerritoryInfo::country("BFA", "Burkina Faso", &["BF"], ROMAN),
    TerritoryInfo::country("GHA", "Ghana", &["GH"], ROMAN),
    TerritoryInfo::country("TGO", "Togo", &["TG"], ROMAN),
    TerritoryInfo::country("BEN", "Benin", &["BJ"], ROMAN),
    TerritoryInfo::country("NGA", "Nigeria", &["NG"], ROMAN),
    TerritoryInfo::country("CMR", "Cameroon", &["CM"], ROMAN),
    TerritoryInfo::country("CAF", "Central African Republic", &["CF"], ROMAN),
    TerritoryInfo::country("GNQ", "Equatorial Guinea", &["GQ"], ROMAN),
    TerritoryInfo::country("GAB", "Gabon", &["GA"], ROMAN),
    TerritoryInfo::country("COG", "Congo", &["CG"], ROMAN),
    TerritoryInfo::country("COD", "Democratic Republic of the Congo", &["CD"], ROMAN),
    TerritoryInfo::country("AGO", "Angola", &["AO"], ROMAN),
    TerritoryInfo::country("STP", "Sao Tome and Principe", &["ST"], ROMAN),
    TerritoryInfo::country("CPV", "Cabo Verde", &["CV"], ROMAN).named(&["Cape Verde"]),
    TerritoryInfo::country("ETH", "Ethiopia", &["ET"], ROMAN),
    TerritoryInfo::country("ERI", "Eritrea", &["ER"], ROMAN),
    TerritoryInfo::country("DJI", "Djibouti", &["DJ"], ROMAN),
    TerritoryInfo::country("SOM", "Somalia", &["SO"], ROMAN),
    TerritoryInfo::country("UGA", "Uganda", &["UG"], ROMAN),
    TerritoryInfo::country("RWA", "Rwanda", &["RW"], ROMAN),
    TerritoryInfo::country("BDI", "Burundi", &["BI"], ROMAN),
    TerritoryInfo::country("TZA", "Tanzania", &["TZ"], ROMAN),
    TerritoryInfo::country("MOZ", "Mozambique", &["MZ"], ROMAN),
    TerritoryInfo::country("MWI", "Malawi", &["MW"], ROMAN),
    TerritoryInfo::country("ZMB", "Zambia", &["ZM"], ROMAN),
    TerritoryInfo::country("ZWE", "Zimbabwe", &["ZW"], ROMAN),
    TerritoryInfo::country("BWA", "Botswana", &["BW"], ROMAN),
    TerritoryInfo::country("NAM", "Namibia", &["NA"], ROMAN),
    TerritoryInfo::country("LSO", "Lesotho", &["LS"], ROMAN),
    TerritoryInfo::country("SWZ", "Eswatini", &["SZ"], ROMAN).named(&["Swaziland"]),
    TerritoryInfo::country("MDG", "Madagascar", &["MG"], ROMAN),
    TerritoryInfo::country("MUS", "Mauritius", &["MU"], ROMAN),
    TerritoryInfo::country("SYC", "Seychelles", &["SC"], ROMAN),
    TerritoryInfo::country("COM", "Comoros", &["KM"], ROMAN),
    TerritoryInfo::country("MYT", "Mayotte", &["YT"], ROMAN),
    TerritoryInfo::country("REU", "Reunion", &["RE"], ROMAN),
    TerritoryInfo::country("SHN", "Saint Helena, Ascension and Tristan da Cunha", &["SH"], ROMAN),
    TerritoryInfo::country("AUS", "Australia", &["AU"], ROMAN),
    TerritoryInfo::country("NZL", "New Zealand", &["NZ"], ROMAN).named(&["Aotearoa"]),
    TerritoryInfo::country("PNG", "Papua New Guinea", &["PG"], ROMAN),
    TerritoryInfo::country("FJI", "Fiji", &["FJ"], ROMAN),
    TerritoryInfo::country("SLB", "Solomon Islands", &["SB"], ROMAN),
    TerritoryInfo::country("VUT", "Vanuatu", &["VU"], ROMAN),
    TerritoryInfo::country("NCL", "New Caledonia", &["NC"], ROMAN),
    TerritoryInfo::country("PYF", "French Polynesia", &["PF"], ROMAN),
    TerritoryInfo::country("WSM", "Samoa", &["WS"], ROMAN),
    TerritoryInfo::country("ASM", "American Samoa", &["AS"], ROMAN),
    TerritoryInfo::country("TON", "Tonga", &["TO"], ROMAN),
    TerritoryInfo::country("TUV", "Tuvalu", &["TV"], ROMAN),
    TerritoryInfo::country("KIR", "Kiribati", &["KI"], ROMAN),
    TerritoryInfo::country("MHL", "Marshall Islands", &["MH"], ROMAN),
    TerritoryInfo::country("FSM", "Micronesia", &["FM"], ROMAN),
    TerritoryInfo::country("PLW", "Palau", &["PW"], ROMAN),
    TerritoryInfo::country("NRU", "Nauru", &["NR"], ROMAN),
    TerritoryInfo::country("GUM", "Guam", &["GU"], ROMAN),
    TerritoryInfo::country("MNP", "Northern Mariana Islands", &["MP"], ROMAN),
    TerritoryInfo::country("COK", "Cook Islands", &["CK"], ROMAN),
    TerritoryInfo::country("NIU", "Niue", &["NU"], ROMAN),
    TerritoryInfo::country("TKL", "Tokelau", &["TK"], ROMAN),
    TerritoryInfo::country("WLF", "Wallis and Futuna", &["WF"], ROMAN),
    TerritoryInfo::country("PCN", "Pitcairn Islands", &["PN"], ROMAN),
    TerritoryInfo::country("NFK", "Norfolk Island", &["NF"], ROMAN),
    TerritoryInfo::country("CXR", "Christmas Island", &["CX"], ROMAN),
    TerritoryInfo::country("CCK", "Cocos (Keeling) Islands", &["CC"], ROMAN),
    TerritoryInfo::country("UMI", "United States Minor Outlying Islands", &["UM"], ROMAN),
    TerritoryInfo::country("ATA", "Antarctica", &["AQ"], ROMAN),
    TerritoryInfo::country("ATF", "French Southern Territories", &["TF"], ROMAN),
    TerritoryInfo::country("HMD", "Heard Island and McDonald Islands", &["HM"], ROMAN),
    TerritoryInfo::country("BVT", "Bouvet Island", &["BV"], ROMAN),
    // ══════════════════════════════════════════════════════════════════════
    // SUBDIVISIONS
    // ══════════════════════════════════════════════════════════════════════
    TerritoryInfo::subdivision("US-AL", "Alabama", "USA", ROMAN),
    TerritoryInfo::subdivision("US-AK", "Alaska", "USA", ROMAN),
    TerritoryInfo::subdivision("US-AZ", "Arizona", "USA", ROMAN),
    TerritoryInfo::subdivision("US-AR", "Arkansas", "USA", ROMAN),
    TerritoryInfo::subdivision("US-CA", "California", "USA", ROMAN),
    TerritoryInfo::subdivision("US-CO", "Colorado", "USA", ROMAN),
    TerritoryInfo::subdivision("US-CT", "Connecticut", "USA", ROMAN),
    TerritoryInfo::subdivision("US-DE", "Delaware", "USA", ROMAN),
    TerritoryInfo::subdivision("US-DC", "District of Columbia", "USA", ROMAN)
        .named(&["Washington DC"]),
    TerritoryInfo::subdivision("US-FL", "Florida", "USA", ROMAN),
    TerritoryInfo::subdivision("US-GA", "Georgia", "USA", ROMAN),
    TerritoryInfo::subdivision("US-HI", "Hawaii", "USA", ROMAN),
    TerritoryInfo::subdivision("US-ID", "Idaho", "USA", ROMAN),
    TerritoryInfo::subdivision("US-IL", "Illinois", "USA", ROMAN),
    TerritoryInfo::subdivision("US-IN", "Indiana", "USA", ROMAN),
    TerritoryInfo::subdivision("US-IA", "Iowa", "USA", ROMAN),
    TerritoryInfo::subdivision("US-KS", "Kansas", "USA", ROMAN),
    TerritoryInfo::subdivision("US-KY", "Kentucky", "USA", ROMAN),
    TerritoryInfo::subdivision("US-LA", "Louisiana", "USA", ROMAN),
    TerritoryInfo::subdivision("US-ME", "Maine", "USA", ROMAN),
    TerritoryInfo::subdivision("US-MD", "Maryland", "USA", ROMAN),
    TerritoryInfo::subdivision("US-MA", "Massachusetts", "USA", ROMAN),
    TerritoryInfo::subdivision("US-MI", "Michigan", "USA", ROMAN),
    TerritoryInfo::subdivision("US-MN", "Minnesota", "USA", ROMAN),
    TerritoryInfo::subdivision("US-MS", "Mississippi", "USA", ROMAN),
    TerritoryInfo::subdivision("US-MO", "Missouri", "USA", ROMAN),
    TerritoryInfo::subdivision("US-MT", "Montana", "USA", ROMAN),
    TerritoryInfo::subdivision("US-NE", "Nebraska", "USA", ROMAN),
    TerritoryInfo::subdivision("US-NV", "Nevada", "USA", ROMAN),
    TerritoryInfo::subdivision("US-NH", "New Hampshire", "USA", ROMAN),
    TerritoryInfo::subdivision("US-NJ", "New Jersey", "USA", ROMAN),
    TerritoryInfo::subdivision("US-NM", "New Mexico", "USA", ROMAN),
    TerritoryInfo::subdivision("US-NY", "New York", "USA", ROMAN),
    TerritoryInfo::subdivision("US-NC", "North Carolina", "USA", ROMAN),
    TerritoryInfo::subdivision("US-ND", "North Dakota", "USA", ROMAN),
    TerritoryInfo::subdivision("US-OH", "Ohio", "USA", ROMAN),
    TerritoryInfo::subdivision("US-OK", "Oklahoma", "USA", ROMAN),
    TerritoryInfo::subdivision("US-OR", "Oregon", "USA", ROMAN),
    TerritoryInfo::subdivision("US-PA", "Pennsylvania", "USA", ROMAN),
    TerritoryInfo::subdivision("US-RI", "Rhode Island", "USA", ROMAN),
    TerritoryInfo::subdivision("US-SC", "South Carolina", "USA", ROMAN),
    TerritoryInfo::subdivision("US-SD", "South Dakota", "USA", ROMAN),
    TerritoryInfo::subdivision("US-TN", "Tennessee", "USA", ROMAN),
    TerritoryInfo::subdivision("US-TX", "Texas", "USA", ROMAN),
    TerritoryInfo::subdivision("US-UT", "Utah", "USA", ROMAN),
    TerritoryInfo::subdivision("US-VT", "Vermont", "USA", ROMAN),
    TerritoryInfo::subdivision("US-VA", "Virginia", "USA", ROMAN),
    TerritoryInfo::subdivision("US-WA", "Washington", "USA", ROMAN),
    TerritoryInfo::subdivision("US-WV", "West Virginia", "USA", ROMAN),
    TerritoryInfo::subdivision("US-WI", "Wisconsin", "USA", ROMAN),
    TerritoryInfo::subdivision("US-WY", "Wyoming", "USA", ROMAN),
    TerritoryInfo::subdivision("CA-AB", "Alberta", "CAN", ROMAN),
    TerritoryInfo::subdivision("CA-BC", "British Columbia", "CAN", ROMAN),
    TerritoryInfo::subdivision("CA-MB", "Manitoba", "CAN", ROMAN),
    TerritoryInfo::subdivision("CA-NB", "New Brunswick", "CAN", ROMAN),
    TerritoryInfo::subdivision("CA-NL", "Newfoundland and Labrador", "CAN", ROMAN)
        .named(&["Newfoundland"]),
    TerritoryInfo::subdivision("CA-NS", "Nova Scotia", "CAN", ROMAN),
    TerritoryInfo::subdivision("CA-NT", "Northwest Territories", "CAN", ROMAN),
    TerritoryInfo::subdivision("CA-NU", "Nunavut", "CAN", ROMAN),
    TerritoryInfo::subdivision("CA-ON", "Ontario", "CAN", ROMAN),
    TerritoryInfo::subdivision("CA-PE", "Prince Edward Island", "CAN", ROMAN),
    TerritoryInfo::subdivision("CA-QC", "Quebec", "CAN", ROMAN),
    TerritoryInfo::subdivision("CA-SK", "Saskatchewan", "CAN", ROMAN),
    TerritoryInfo::subdivision("CA-YT", "Yukon", "CAN", ROMAN),
    TerritoryInfo::subdivision("MX-BCN", "Baja California", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-CMX", "Ciudad de Mexico", "MEX", ROMAN)
        .named(&["Mexico City"]),
    TerritoryInfo::subdivision("MX-JAL", "Jalisco", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-NLE", "Nuevo Leon", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-YUC", "Yucatan", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-AGU", "Aguascalientes", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-BCS", "Baja California Sur", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-CAM", "Campeche", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-CHP", "Chiapas", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-CHH", "Chihuahua", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-COA", "Coahuila", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-COL", "Colima", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-DUR", "Durango", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-GUA", "Guanajuato", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-GRO", "Guerrero", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-HID", "Hidalgo", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-MEX", "State of Mexico", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-MIC", "Michoacan", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-MOR", "Morelos", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-NAY", "Nayarit", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-OAX", "Oaxaca", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-PUE", "Puebla", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-QUE", "Queretaro", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-ROO", "Quintana Roo", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-SLP", "San Luis Potosi", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-SIN", "Sinaloa", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-SON", "Sonora", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-TAB", "Tabasco", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-TAM", "Tamaulipas", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-TLA", "Tlaxcala", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-VER", "Veracruz", "MEX", ROMAN),
    TerritoryInfo::subdivision("MX-ZAC", "Zacatecas", "MEX", ROMAN),
    TerritoryInfo::subdivision("BR-AM", "Amazonas", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-BA", "Bahia", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-DF", "Distrito Federal", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-MG", "Minas Gerais", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-PA", "Para", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-RJ", "Rio de Janeiro", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-SP", "Sao Paulo", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-AC", "Acre", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-AL", "Alagoas", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-AP", "Amapa", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-CE", "Ceara", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-ES", "Espirito Santo", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-GO", "Goias", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-MA", "Maranhao", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-MT", "Mato Grosso", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-MS", "Mato Grosso do Sul", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-PB", "Paraiba", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-PR", "Parana", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-PE", "Pernambuco", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-PI", "Piaui", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-RN", "Rio Grande do Norte", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-RS", "Rio Grande do Sul", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-RO", "Rondonia", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-RR", "Roraima", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-SC", "Santa Catarina", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-SE", "Sergipe", "BRA", ROMAN),
    TerritoryInfo::subdivision("BR-TO", "Tocantins", "BRA", ROMAN),
    TerritoryInfo::subdivision("RU-MOW", "Moscow", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-SPE", "Saint Petersburg", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-KDA", "Krasnodar Krai", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-SA", "Sakha Republic", "RUS", CYRILLIC).named(&["Yakutia"]),
    TerritoryInfo::subdivision("RU-TA", "Tatarstan", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-AD", "Adygea", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-AL", "Altai Republic", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-ALT", "Altai Krai", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-AMU", "Amur Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-ARK", "Arkhangelsk Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-AST", "Astrakhan Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-BA", "Bashkortostan", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-BEL", "Belgorod Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-BRY", "Bryansk Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-BU", "Buryatia", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-CE", "Chechnya", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-CHE", "Chelyabinsk Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-CHU", "Chukotka", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-CU", "Chuvashia", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-DA", "Dagestan", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-IRK", "Irkutsk Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-IVA", "Ivanovo Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-KAM", "Kamchatka Krai", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-KGD", "Kaliningrad Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-KEM", "Kemerovo Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-KHA", "Khabarovsk Krai", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-KIR", "Kirov Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-KO", "Komi Republic", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-KYA", "Krasnoyarsk Krai", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-KR", "Karelia", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-LEN", "Leningrad Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-MAG", "Magadan Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-MOS", "Moscow Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-MUR", "Murmansk Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-NIZ", "Nizhny Novgorod Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-NVS", "Novosibirsk Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-OMS", "Omsk Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-PER", "Perm Krai", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-PRI", "Primorsky Krai", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-ROS", "Rostov Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-SAM", "Samara Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-SAR", "Saratov Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-SAK", "Sakhalin Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-SVE", "Sverdlovsk Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-TOM", "Tomsk Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-TYU", "Tyumen Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-VGG", "Volgograd Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-VLA", "Vladimir Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-VOR", "Voronezh Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-YAR", "Yaroslavl Oblast", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("RU-ZAB", "Zabaykalsky Krai", "RUS", CYRILLIC),
    TerritoryInfo::subdivision("IN-AP", "Andhra Pradesh", "IND", ROMAN),
    TerritoryInfo::subdivision("IN-DL", "Delhi", "IND", DEVANAGARI),
    TerritoryInfo::subdivision("IN-GA", "Goa", "IND", DEVANAGARI),
    TerritoryInfo::subdivision("IN-GJ", "Gujarat", "IND", DEVANAGARI),
    TerritoryInfo::subdivision("IN-KA", "Karnataka", "IND", ROMAN),
    TerritoryInfo::subdivision("IN-KL", "Kerala", "IND", MALAYALAM),
    TerritoryInfo::subdivision("IN-MH", "Maharashtra", "IND", DEVANAGARI),
    TerritoryInfo::subdivision("IN-PB", "Punjab", "IND", GURMUKHI),
    TerritoryInfo::subdivision("IN-PY", "Puducherry", "IND", ROMAN).named(&["Pondicherry"]),
    TerritoryInfo::subdivision("IN-TN", "Tamil Nadu", "IND", ROMAN),
    TerritoryInfo::subdivision("IN-UP", "Uttar Pradesh", "IND", DEVANAGARI),
    TerritoryInfo::subdivision("IN-WB", "West Bengal", "IND", BENGALI),
    TerritoryInfo::subdivision("IN-AN", "Andaman and Nicobar Islands", "IND", ROMAN),
    TerritoryInfo::subdivision("IN-AR", "Arunachal Pradesh", "IND", ROMAN),
    TerritoryInfo::subdivision("IN-AS", "Assam", "IND", BENGALI),
    TerritoryInfo::subdivision("IN-BR", "Bihar", "IND", DEVANAGARI),
    TerritoryInfo::subdivision("IN-CH", "Chandigarh", "IND", GURMUKHI),
    TerritoryInfo::subdivision("IN-CT", "Chhattisgarh", "IND", DEVANAGARI),
    TerritoryInfo::subdivision("IN-DH", "Dadra and Nagar Haveli and Daman and Diu", "IND", ROMAN),
    TerritoryInfo::subdivision("IN-HR", "Haryana", "IND", DEVANAGARI),
    TerritoryInfo::subdivision("IN-HP", "Himachal Pradesh", "IND", DEVANAGARI),
    TerritoryInfo::subdivision("IN-JK", "Jammu and Kashmir", "IND", ROMAN),
    TerritoryInfo::subdivision("IN-JH", "Jharkhand", "IND", DEVANAGARI),
    TerritoryInfo::subdivision("IN-LA", "Ladakh", "IND", ROMAN),
    TerritoryInfo::subdivision("IN-LD", "Lakshadweep", "IND", MALAYALAM),
    TerritoryInfo::subdivision("IN-MP", "Madhya Pradesh", "IND", DEVANAGARI),
    TerritoryInfo::subdivision("IN-MN", "Manipur", "IND", BENGALI),
    TerritoryInfo::subdivision("IN-ML", "Meghalaya", "IND", ROMAN),
    TerritoryInfo::subdivision("IN-MZ", "Mizoram", "IND", ROMAN),
    TerritoryInfo::subdivision("IN-NL", "Nagaland", "IND", ROMAN),
    TerritoryInfo::subdivision("IN-OR", "Odisha", "IND", ROMAN),
    TerritoryInfo::subdivision("IN-RJ", "Rajasthan", "IND", DEVANAGARI),
    TerritoryInfo::subdivision("IN-SK", "Sikkim", "IND", ROMAN),
    TerritoryInfo::subdivision("IN-TG", "Telangana", "IND", ROMAN),
    TerritoryInfo::subdivision("IN-TR", "Tripura", "IND", BENGALI),
    TerritoryInfo::subdivision("IN-UT", "Uttarakhand", "IND", DEVANAGARI),
    TerritoryInfo::subdivision("CN-BJ", "Beijing", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-GD", "Guangdong", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-SH", "Shanghai", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-XZ", "Tibet", "CHN", &[Alphabet::Tibetan, Alphabet::Roman])
        .named(&["Xizang"]),
    TerritoryInfo::subdivision("CN-AH", "Anhui", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-CQ", "Chongqing", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-FJ", "Fujian", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-GS", "Gansu", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-GX", "Guangxi", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-GZ", "Guizhou", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-HI", "Hainan", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-HE", "Hebei", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-HL", "Heilongjiang", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-HA", "Henan", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-HB", "Hubei", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-HN", "Hunan", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-JS", "Jiangsu", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-JX", "Jiangxi", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-JL", "Jilin", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-LN", "Liaoning", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-NM", "Inner Mongolia", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-NX", "Ningxia", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-QH", "Qinghai", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-SN", "Shaanxi", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-SD", "Shandong", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-SX", "Shanxi", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-SC", "Sichuan", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-TJ", "Tianjin", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-XJ", "Xinjiang", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-YN", "Yunnan", "CHN", ROMAN),
    TerritoryInfo::subdivision("CN-ZJ", "Zhejiang", "CHN", ROMAN),
    TerritoryInfo::subdivision("AU-ACT", "Australian Capital Territory", "AUS", ROMAN),
    TerritoryInfo::subdivision("AU-NSW", "New South Wales", "AUS", ROMAN),
    TerritoryInfo::subdivision("AU-NT", "Northern Territory", "AUS", ROMAN),
    TerritoryInfo::subdivision("AU-QLD", "Queensland", "AUS", ROMAN),
    TerritoryInfo::subdivision("AU-SA", "South Australia", "AUS", ROMAN),
    TerritoryInfo::subdivision("AU-TAS", "Tasmania", "AUS", ROMAN),
    TerritoryInfo::subdivision("AU-VIC", "Victoria", "AUS", ROMAN),
    TerritoryInfo::subdivision("AU-WA", "Western Australia", "AUS", ROMAN),
];

// ============================================================================
// INDEX
// ============================================================================

/// Lookup tables derived from [`TERRITORIES`], built once.
struct Catalog {
    /// Upper-case codes, minimal codes and aliases to territories.
    /// Each list holds top-level territories first, then catalog order.
    by_code: HashMap<String, Vec<Territory>>,
    /// Lower-case full names and full-name aliases to territories.
    by_name: HashMap<String, Vec<Territory>>,
    parents: Vec<Option<Territory>>,
    minimal_unambiguous: Vec<&'static str>,
}

fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::build)
}

impl Catalog {
    fn build() -> Self {
        let index_of: HashMap<&str, u16> = TERRITORIES
            .iter()
            .enumerate()
            .map(|(i, info)| (info.code, i as u16))
            .collect();

        let parents: Vec<Option<Territory>> = TERRITORIES
            .iter()
            .map(|info| {
                info.parent
                    .and_then(|code| index_of.get(code))
                    .map(|&i| Territory(i))
            })
            .collect();

        let mut by_code: HashMap<String, Vec<Territory>> = HashMap::new();
        let mut by_name: HashMap<String, Vec<Territory>> = HashMap::new();

        for (i, info) in TERRITORIES.iter().enumerate() {
            let territory = Territory(i as u16);
            let mut codes = vec![info.code, minimal_code_of(info.code)];
            codes.extend_from_slice(info.aliases);
            codes.dedup();
            for code in codes {
                push_unique(&mut by_code, code.to_ascii_uppercase(), territory);
            }

            let names = std::iter::once(&info.full_name).chain(info.full_name_aliases);
            for name in names {
                push_unique(&mut by_name, name.to_lowercase(), territory);
            }
        }

        // Countries win over same-named subdivisions when no scope is given.
        for list in by_code.values_mut().chain(by_name.values_mut()) {
            list.sort_by_key(|t| parents[t.index()].is_some());
        }

        let minimal_unambiguous = TERRITORIES
            .iter()
            .map(|info| {
                let minimal = minimal_code_of(info.code);
                match by_code.get(minimal) {
                    Some(list) if list.len() == 1 => minimal,
                    _ => info.code,
                }
            })
            .collect();

        Self {
            by_code,
            by_name,
            parents,
            minimal_unambiguous,
        }
    }
}

fn push_unique(map: &mut HashMap<String, Vec<Territory>>, key: String, territory: Territory) {
    let list = map.entry(key).or_default();
    if !list.contains(&territory) {
        list.push(territory);
    }
}

fn minimal_code_of(code: &'static str) -> &'static str {
    code.split_once('-').map_or(code, |(_, minimal)| minimal)
}

/// Upper-case, trim and read `_` as `-`.
pub(crate) fn normalize_code(token: &str) -> String {
    token.trim().replace('_', "-").to_ascii_uppercase()
}

// ============================================================================
// TERRITORY HANDLE
// ============================================================================

/// A territory from the static catalog.
///
/// This is a small `Copy` handle; all attributes are looked up in
/// [`TERRITORIES`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Territory(u16);

impl Territory {
    /// The worldwide pseudo-territory that owns international mapcodes.
    pub const AAA: Territory = Territory(0);

    fn index(self) -> usize {
        self.0 as usize
    }

    fn info(self) -> &'static TerritoryInfo {
        &TERRITORIES[self.index()]
    }

    /// All territories in catalog order.
    pub fn all() -> impl ExactSizeIterator<Item = Territory> {
        (0..TERRITORIES.len() as u16).map(Territory)
    }

    /// Number of territories in the catalog.
    pub fn count() -> usize {
        TERRITORIES.len()
    }

    /// Look up a territory by its exact canonical code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Territory> {
        let code = normalize_code(code);
        TERRITORIES
            .iter()
            .position(|info| info.code == code)
            .map(|i| Territory(i as u16))
    }

    /// Parse a territory token, optionally within the scope of a parent.
    ///
    /// Codes and aliases match upper-cased with `_` read as `-`; full
    /// names match case-insensitively. Without a scope the first match
    /// wins (countries before subdivisions); with a scope only children
    /// of `parent` match. A token such as `USA-NLD` that does not match as
    /// a whole is retried with the part after the divider.
    ///
    /// # Errors
    ///
    /// Returns [`MapcoderError::UnknownTerritory`] if nothing matches.
    pub fn parse(token: &str, parent: Option<Territory>) -> Result<Territory> {
        let key = normalize_code(token);
        if key.is_empty() {
            return Err(MapcoderError::UnknownTerritory {
                token: token.to_string(),
            });
        }

        let catalog = catalog();
        let matches = catalog
            .by_code
            .get(&key)
            .into_iter()
            .chain(catalog.by_name.get(&token.trim().to_lowercase()))
            .flatten();

        let found = match parent {
            None => matches.copied().next(),
            Some(parent) => matches.copied().find(|t| t.parent() == Some(parent)),
        };
        if let Some(territory) = found {
            return Ok(territory);
        }

        if let Some(pos) = key.find(['-', ' ']) {
            let rest = &key[pos + 1..];
            if !rest.is_empty() {
                return Territory::parse(rest, parent);
            }
        }

        Err(MapcoderError::UnknownTerritory {
            token: token.to_string(),
        })
    }

    /// Canonical alpha code, e.g. `"US-IN"`.
    pub fn code(self) -> &'static str {
        self.info().code
    }

    /// The code without the country prefix, e.g. `"IN"` for `US-IN`.
    pub fn minimal_code(self) -> &'static str {
        minimal_code_of(self.info().code)
    }

    /// The shortest code that still identifies this territory on its own.
    pub fn minimal_unambiguous_code(self) -> &'static str {
        catalog().minimal_unambiguous[self.index()]
    }

    pub fn full_name(self) -> &'static str {
        self.info().full_name
    }

    /// The parent country of a subdivision.
    pub fn parent(self) -> Option<Territory> {
        catalog().parents[self.index()]
    }

    pub fn aliases(self) -> &'static [&'static str] {
        self.info().aliases
    }

    pub fn full_name_aliases(self) -> &'static [&'static str] {
        self.info().full_name_aliases
    }

    /// Alphabets used in this territory, most common first.
    pub fn alphabets(self) -> &'static [Alphabet] {
        self.info().alphabets
    }

    /// The alphabet mapcodes of this territory are usually shown in.
    pub fn default_alphabet(self) -> Alphabet {
        self.alphabets().first().copied().unwrap_or(Alphabet::Roman)
    }

    /// Whether this is the worldwide pseudo-territory `AAA`.
    pub fn is_international(self) -> bool {
        self == Territory::AAA
    }

    /// The top-level country: the parent of a subdivision, else itself.
    pub fn country(self) -> Territory {
        self.parent().unwrap_or(self)
    }

    /// Comma-separated list of all canonical codes, for error messages.
    pub fn valid_codes() -> String {
        TERRITORIES
            .iter()
            .map(|info| info.code)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Debug for Territory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Territory({})", self.code())
    }
}

impl fmt::Display for Territory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Territory {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Territory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Territory::parse(&token, None).map_err(serde::de::Error::custom)
    }
}
