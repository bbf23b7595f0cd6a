//! Representative fuel-price API payloads for tests.
//!
//! Trimmed from real `prix-des-carburants-j-1` responses: three records
//! in Paris, Lyon, and Marseille, plus degraded variants exercising the
//! lenient parsing paths.

/// A complete single-page envelope with three well-formed records.
pub(crate) fn page_three_cities() -> &'static str {
    r#"{
      "total_count": 3,
      "results": [
        {
          "id": "75019004",
          "address": "2 avenue Jean Jaurès",
          "com_arm_name": "Paris",
          "cp": "75019",
          "fuel": ["Gazole", "SP95", "SP98"],
          "price_gazole": 1.789,
          "price_sp95": 1.879,
          "price_sp98": 1.939,
          "brand": "Total",
          "service": "Toilettes publiques/Boutique alimentaire"
        },
        {
          "id": "69003002",
          "address": "18 cours Lafayette",
          "com_arm_name": "Lyon",
          "cp": "69003",
          "fuel": ["Gazole", "SP95"],
          "price_gazole": 1.749,
          "price_sp95": 1.849,
          "brand": "Carrefour",
          "service": "Station de gonflage"
        },
        {
          "id": "13008001",
          "address": "41 avenue du Prado",
          "com_arm_name": "Marseille",
          "cp": "13008",
          "fuel": ["Gazole"],
          "price_gazole": 1.769,
          "brand": "Leclerc"
        }
      ]
    }"#
}

/// An envelope whose second record is not an object and whose third has
/// mistyped price and fuel fields.
pub(crate) fn page_with_degraded_records() -> &'static str {
    r#"{
      "total_count": 3,
      "results": [
        { "id": "A1", "com_arm_name": "Lille", "fuel": ["E85"] },
        "corrupted entry",
        { "id": "A3", "com_arm_name": "Nantes", "price_gazole": "n/a", "fuel": "Gazole" }
      ]
    }"#
}

/// An envelope with no results field at all.
pub(crate) fn page_missing_results() -> &'static str {
    r#"{ "total_count": 10 }"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opendata::{RecordsPage, convert_results};

    #[test]
    fn three_cities_fixture_converts_cleanly() {
        let page: RecordsPage = serde_json::from_str(page_three_cities()).unwrap();
        let stations = convert_results(page.results.unwrap());

        assert_eq!(stations.len(), 3);
        let cities: Vec<&str> = stations.iter().map(|s| s.city.as_str()).collect();
        assert_eq!(cities, ["Paris", "Lyon", "Marseille"]);
        assert_eq!(stations[0].fuel_types, "Gazole, SP95, SP98");
        assert!(stations[0].services.toilets);
        assert_eq!(stations[2].price_sp95, None);
    }

    #[test]
    fn degraded_fixture_skips_only_the_corrupt_record() {
        let page: RecordsPage = serde_json::from_str(page_with_degraded_records()).unwrap();
        let stations = convert_results(page.results.unwrap());

        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].id, "A1");
        // The mistyped fields degraded, the record survived.
        assert_eq!(stations[1].id, "A3");
        assert_eq!(stations[1].price_gazole, None);
        assert_eq!(stations[1].fuel_types, crate::domain::Station::NO_FUEL);
    }

    #[test]
    fn missing_results_fixture_parses_as_empty_envelope() {
        let page: RecordsPage = serde_json::from_str(page_missing_results()).unwrap();
        assert!(page.results.is_none());
        assert_eq!(page.total_count, Some(10));
    }
}
