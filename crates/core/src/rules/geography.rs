//! Destination eligibility for shipped orders.
//!
//! Fresh meat travels overnight in refrigerated transport, which the courier
//! network does not offer for Sicily, Sardinia or the minor islands. The
//! block-lists therefore cover island provinces, island municipalities and
//! the postal-code prefixes of islands administratively attached to mainland
//! provinces.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Provinces the shop does not ship to: all of Sicily and Sardinia.
const BLOCKED_PROVINCES: [&str; 14] = [
    "AG", "CL", "CT", "EN", "ME", "PA", "RG", "SR", "TP", // Sicily
    "CA", "NU", "OR", "SS", "SU", // Sardinia
];

/// Postal-code prefixes of minor islands whose province is on the mainland.
const BLOCKED_ZIP_PREFIXES: [&str; 32] = [
    "98050", "98055", // Aeolian islands
    "91023", // Egadi islands
    "91017", // Pantelleria
    "92031", // Pelagie islands
    "90010", // Ustica
    "57030", "57031", "57032", "57033", "57034", "57035", "57036", "57037", "57038",
    "57039", // Elba
    "58012", "58019", // Giglio, Santo Stefano
    "04020", "04027", // Pontine islands
    "80070", "80071", "80073", "80074", "80075", "80076", "80077", "80079", // Gulf of Naples
    "71040", // Tremiti islands
    "09014", "09017", // Sulcis islands
    "07024", // La Maddalena
];

/// City names the shop does not ship to, stored pre-normalized.
const BLOCKED_CITIES: [&str; 26] = [
    // Sicilian provincial capitals
    "palermo",
    "catania",
    "messina",
    "siracusa",
    "ragusa",
    "trapani",
    "agrigento",
    "caltanissetta",
    "enna",
    // Sardinian provincial capitals
    "cagliari",
    "sassari",
    "nuoro",
    "oristano",
    "olbia",
    // Minor-island municipalities
    "lipari",
    "lampedusa e linosa",
    "pantelleria",
    "favignana",
    "ustica",
    "portoferraio",
    "capri",
    "anacapri",
    "ischia",
    "procida",
    "carloforte",
    "la maddalena",
];

/// Block-lists deciding where the shop ships.
///
/// The default policy carries the standard lists above; a custom policy can
/// be built with [`GeographyPolicy::new`] (the constructor normalizes its
/// inputs, so callers may pass raw city names and lowercase province codes).
#[derive(Debug, Clone)]
pub struct GeographyPolicy {
    blocked_cities: Vec<String>,
    blocked_provinces: Vec<String>,
    blocked_zip_prefixes: Vec<String>,
}

impl Default for GeographyPolicy {
    fn default() -> Self {
        Self {
            blocked_cities: BLOCKED_CITIES.iter().map(|c| (*c).to_owned()).collect(),
            blocked_provinces: BLOCKED_PROVINCES.iter().map(|p| (*p).to_owned()).collect(),
            blocked_zip_prefixes: BLOCKED_ZIP_PREFIXES
                .iter()
                .map(|z| (*z).to_owned())
                .collect(),
        }
    }
}

impl GeographyPolicy {
    /// Build a policy from raw block-lists.
    #[must_use]
    pub fn new<C, P, Z>(cities: C, provinces: P, zip_prefixes: Z) -> Self
    where
        C: IntoIterator<Item = String>,
        P: IntoIterator<Item = String>,
        Z: IntoIterator<Item = String>,
    {
        Self {
            blocked_cities: cities.into_iter().map(|c| normalize_city(&c)).collect(),
            blocked_provinces: provinces
                .into_iter()
                .map(|p| p.trim().to_uppercase())
                .collect(),
            blocked_zip_prefixes: zip_prefixes
                .into_iter()
                .map(|z| z.trim().to_owned())
                .collect(),
        }
    }

    /// Whether the shop ships to this destination.
    ///
    /// The three checks are independent: a blocked ZIP prefix refuses the
    /// destination even when city and province are fine (islands like Lipari
    /// share a mainland province code). Malformed fields are a concern for
    /// upstream validation; this predicate just answers the question for the
    /// strings it is given and never panics.
    #[must_use]
    pub fn is_destination_allowed(&self, city: &str, province: &str, zip: &str) -> bool {
        !self.is_city_blocked(city) && !self.is_province_blocked(province) && !self.is_zip_blocked(zip)
    }

    /// Whether the city is on the block-list, compared diacritic-insensitively.
    #[must_use]
    pub fn is_city_blocked(&self, city: &str) -> bool {
        let city = normalize_city(city);
        self.blocked_cities.iter().any(|blocked| *blocked == city)
    }

    /// Whether the two-letter province code is on the block-list.
    #[must_use]
    pub fn is_province_blocked(&self, province: &str) -> bool {
        let province = province.trim().to_uppercase();
        self.blocked_provinces.iter().any(|blocked| *blocked == province)
    }

    /// Whether the postal code starts with a blocked island prefix.
    #[must_use]
    pub fn is_zip_blocked(&self, zip: &str) -> bool {
        let zip = zip.trim();
        self.blocked_zip_prefixes
            .iter()
            .any(|prefix| zip.starts_with(prefix.as_str()))
    }
}

/// Canonical form for city comparison: NFD-decomposed, combining marks
/// stripped, lowercased. "Lìpari", "LIPARI" and "lipari" all map to the same
/// string.
#[must_use]
pub fn normalize_city(city: &str) -> String {
    city.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}
