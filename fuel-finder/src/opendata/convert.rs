//! Conversion from raw API records to domain stations.
//!
//! Normalization is total: every missing or unparseable field degrades to
//! its documented sentinel, so a `Station` is always fully constructed.
//! Only a record that is not a JSON object at all is skipped, with a
//! warning.

use serde_json::Value;
use tracing::warn;

use crate::domain::{ServiceFlags, Station};

use super::types::RawStation;

/// Normalize one raw record into a `Station`, substituting sentinels for
/// missing fields. Pure and infallible.
pub fn normalize(raw: RawStation) -> Station {
    Station {
        id: raw.id.unwrap_or_else(|| Station::UNKNOWN_ID.to_string()),
        address: raw
            .address
            .unwrap_or_else(|| Station::UNKNOWN_ADDRESS.to_string()),
        city: raw.city.unwrap_or_else(|| Station::UNKNOWN_CITY.to_string()),
        postal_code: raw
            .postal_code
            .unwrap_or_else(|| Station::UNKNOWN_POSTAL_CODE.to_string()),
        fuel_types: match raw.fuel {
            Some(codes) if !codes.is_empty() => codes.join(", "),
            _ => Station::NO_FUEL.to_string(),
        },
        price_gazole: raw.price_gazole,
        price_sp95: raw.price_sp95,
        price_sp98: raw.price_sp98,
        brand: raw
            .brand
            .unwrap_or_else(|| Station::UNKNOWN_BRAND.to_string()),
        services: raw
            .service
            .as_deref()
            .map(ServiceFlags::from_service_list)
            .unwrap_or_default(),
    }
}

/// Convert the raw `results` array of one page, skipping (and logging)
/// any element that does not deserialize as a record. One bad record
/// never discards its page.
pub fn convert_results(results: Vec<Value>) -> Vec<Station> {
    results
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<RawStation>(value) {
            Ok(raw) => Some(normalize(raw)),
            Err(e) => {
                warn!("skipping malformed station record: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_get_sentinels() {
        let station = normalize(RawStation::default());

        assert_eq!(station.id, Station::UNKNOWN_ID);
        assert_eq!(station.address, Station::UNKNOWN_ADDRESS);
        assert_eq!(station.city, Station::UNKNOWN_CITY);
        assert_eq!(station.postal_code, Station::UNKNOWN_POSTAL_CODE);
        assert_eq!(station.brand, Station::UNKNOWN_BRAND);
        assert_eq!(station.fuel_types, Station::NO_FUEL);
        assert_eq!(station.price_gazole, None);
        assert_eq!(station.services, ServiceFlags::default());
    }

    #[test]
    fn one_missing_field_leaves_the_rest_populated() {
        let raw: RawStation = serde_json::from_value(json!({
            "address": "2 avenue Jean Jaurès",
            "com_arm_name": "Paris",
            "cp": "75019",
            "fuel": ["Gazole"],
            "price_gazole": 1.75,
            "brand": "Carrefour"
        }))
        .unwrap();

        let station = normalize(raw);
        assert_eq!(station.id, Station::UNKNOWN_ID);
        assert_eq!(station.address, "2 avenue Jean Jaurès");
        assert_eq!(station.city, "Paris");
        assert_eq!(station.postal_code, "75019");
        assert_eq!(station.fuel_types, "Gazole");
        assert_eq!(station.price_gazole, Some(1.75));
        assert_eq!(station.brand, "Carrefour");
    }

    #[test]
    fn empty_fuel_list_yields_sentinel() {
        let raw: RawStation = serde_json::from_value(json!({ "fuel": [] })).unwrap();
        assert_eq!(normalize(raw).fuel_types, Station::NO_FUEL);
    }

    #[test]
    fn fuel_list_is_comma_joined() {
        let raw: RawStation =
            serde_json::from_value(json!({ "fuel": ["Gazole", "SP95"] })).unwrap();
        assert_eq!(normalize(raw).fuel_types, "Gazole, SP95");
    }

    #[test]
    fn service_list_sets_flags() {
        let raw: RawStation = serde_json::from_value(
            json!({ "service": "Toilettes publiques/Station de gonflage" }),
        )
        .unwrap();
        let station = normalize(raw);
        assert!(station.services.toilets);
        assert!(!station.services.shop);
        assert!(station.services.air_pump);
    }

    #[test]
    fn convert_results_skips_non_object_records() {
        let stations = convert_results(vec![
            json!({ "id": "A", "com_arm_name": "Lyon" }),
            json!("not a record"),
            json!({ "id": "B", "com_arm_name": "Paris" }),
        ]);

        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].id, "A");
        assert_eq!(stations[1].id, "B");
    }

    #[test]
    fn convert_results_preserves_order() {
        let stations = convert_results(vec![
            json!({ "id": "3" }),
            json!({ "id": "1" }),
            json!({ "id": "2" }),
        ]);
        let ids: Vec<&str> = stations.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }
}
