//! Fuel station value type.

/// One fuel retail point with address, prices, brand, and service
/// attributes.
///
/// Stations are ephemeral: every fetch rebuilds them from scratch, and
/// only `id` carries identity across fetches (it is the join key for the
/// favorites store). Missing source fields degrade to the sentinel
/// constants below rather than failing the record.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    /// Comma-joined fuel-type codes, e.g. `"Gazole, SP95"`.
    pub fuel_types: String,
    /// `None` means not sold / not reported, distinct from a zero price.
    pub price_gazole: Option<f64>,
    pub price_sp95: Option<f64>,
    pub price_sp98: Option<f64>,
    pub brand: String,
    pub services: ServiceFlags,
}

impl Station {
    /// Sentinel for a missing `id` field.
    pub const UNKNOWN_ID: &'static str = "ID inconnu";
    /// Sentinel for a missing `address` field.
    pub const UNKNOWN_ADDRESS: &'static str = "Adresse inconnue";
    /// Sentinel for a missing city field.
    pub const UNKNOWN_CITY: &'static str = "Ville inconnue";
    /// Sentinel for a missing postal-code field.
    pub const UNKNOWN_POSTAL_CODE: &'static str = "Code Postal inconnu";
    /// Sentinel for a missing `brand` field.
    pub const UNKNOWN_BRAND: &'static str = "Marque inconnue";
    /// Sentinel for an absent or empty fuel list.
    pub const NO_FUEL: &'static str = "Aucun";
}

/// Optional on-site services, parsed from the raw `"/"`-delimited
/// `service` list by case-insensitive substring match.
///
/// All flags default to `false` when the source field is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceFlags {
    pub toilets: bool,
    pub shop: bool,
    pub air_pump: bool,
}

impl ServiceFlags {
    /// Parse flags from a raw service list such as
    /// `"Toilettes publiques/Boutique alimentaire/Station de gonflage"`.
    pub fn from_service_list(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        let has = |needle: &str| lower.split('/').any(|entry| entry.contains(needle));
        Self {
            toilets: has("toilettes"),
            shop: has("boutique"),
            air_pump: has("gonflage"),
        }
    }
}
