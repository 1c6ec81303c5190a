//! Tests for the processing facility directory

use proptest::prelude::*;
use shared::{
    all_facilities, facilities_by_location, facilities_by_pathway, facilities_by_waste_type,
    facility, haversine_km, nearest_facility,
};

mod directory {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let facilities = all_facilities();
        for (i, a) in facilities.iter().enumerate() {
            assert!(facilities[i + 1..].iter().all(|b| b.id != a.id), "duplicate {}", a.id);
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(facility("f1").map(|f| f.name), Some("EcoCompost Solutions"));
        assert!(facility("f999").is_none());
    }

    #[test]
    fn location_search_ignores_case() {
        let found = facilities_by_location("tamil nadu", "COIMBATORE", None);
        assert!(found.iter().any(|f| f.id == "f1"));
        assert!(facilities_by_location("Tamil Nadu", "Coimbatore", Some("nowhere")).is_empty());
    }

    #[test]
    fn pathway_and_waste_filters() {
        assert!(facilities_by_pathway("Composting").iter().any(|f| f.id == "f1"));
        assert!(facilities_by_waste_type("rice husk").iter().any(|f| f.id == "f1"));
        assert!(facilities_by_pathway("Plasma Gasification").is_empty());
    }

    #[test]
    fn nearest_can_skip_own_district() {
        let own = nearest_facility(11.0086, 76.9960, None).unwrap();
        assert_eq!(own.facility.district, "Coimbatore");

        let other = nearest_facility(11.0086, 76.9960, Some("Coimbatore")).unwrap();
        assert_ne!(other.facility.district, "Coimbatore");
        assert!(other.distance_km >= own.distance_km);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Great-circle distance is symmetric and non-negative
    #[test]
    fn haversine_is_symmetric(
        lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
        lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
    ) {
        let there = haversine_km(lat1, lon1, lat2, lon2);
        let back = haversine_km(lat2, lon2, lat1, lon1);
        prop_assert!(there >= 0.0);
        prop_assert!((there - back).abs() < 1e-6);
        // Half the Earth's circumference bounds every distance
        prop_assert!(there <= std::f64::consts::PI * 6371.0 + 1e-6);
    }

    /// No facility is closer than the reported nearest one
    #[test]
    fn nearest_is_minimal(lat in 5.0f64..35.0, lon in 65.0f64..95.0) {
        let nearest = nearest_facility(lat, lon, None).unwrap();
        for f in all_facilities() {
            prop_assert!(haversine_km(lat, lon, f.latitude, f.longitude) >= nearest.distance_km);
        }
    }
}
