//! Processing facility directory

use serde::Serialize;

use crate::types::GpsCoordinates;

/// Earth radius used for great-circle distances, km
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A processing facility that accepts agricultural waste
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Facility {
    pub id: &'static str,
    pub name: &'static str,
    pub state: &'static str,
    pub district: &'static str,
    pub city: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub facility_type: &'static str,
    pub waste_types_accepted: &'static [&'static str],
    pub processing_capacity: &'static str,
    pub contact: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub established: u16,
    pub certifications: &'static [&'static str],
    pub pathways_supported: &'static [&'static str],
}

impl Facility {
    pub fn coordinates(&self) -> GpsCoordinates {
        GpsCoordinates::new(self.latitude, self.longitude)
    }
}

pub const FACILITIES: &[Facility] = &[
    // Tamil Nadu
    Facility {
        id: "f1",
        name: "EcoCompost Solutions",
        state: "Tamil Nadu",
        district: "Coimbatore",
        city: "Coimbatore",
        latitude: 11.0086,
        longitude: 76.9960,
        facility_type: "Composting Unit",
        waste_types_accepted: &["Rice Husk", "Banana Peel", "Agricultural Residue"],
        processing_capacity: "25 tonnes/day",
        contact: "Raj Kumar",
        phone: "+91 94423 12345",
        email: "info@ecocompost.in",
        established: 2015,
        certifications: &["ISO 9001", "Organic Certified"],
        pathways_supported: &["Composting", "Anaerobic Digestion"],
    },
    Facility {
        id: "f2",
        name: "BioEnergy Systems Tamil Nadu",
        state: "Tamil Nadu",
        district: "Thanjavur",
        city: "Thanjavur",
        latitude: 10.7905,
        longitude: 79.1379,
        facility_type: "Biogas Generation",
        waste_types_accepted: &["Rice Bran", "Agricultural Waste", "Food Waste"],
        processing_capacity: "30 tonnes/day",
        contact: "Meera Singh",
        phone: "+91 98765 43210",
        email: "contact@bioenergy-tn.in",
        established: 2017,
        certifications: &["ISO 14001", "MNRE Accredited"],
        pathways_supported: &["Anaerobic Digestion", "Biomass Energy"],
    },
    Facility {
        id: "f3",
        name: "Green Energy Biomass Works",
        state: "Tamil Nadu",
        district: "Madurai",
        city: "Madurai",
        latitude: 9.9252,
        longitude: 78.1198,
        facility_type: "Biomass Processing",
        waste_types_accepted: &["Coconut Fiber", "Groundnut Shell", "Agri-waste"],
        processing_capacity: "40 tonnes/day",
        contact: "Suresh Gupta",
        phone: "+91 98765 65432",
        email: "contact@greenergyworks.in",
        established: 2019,
        certifications: &["ISO 14001", "BIS Certified"],
        pathways_supported: &["Biomass Energy", "Biochar"],
    },
    // West Bengal
    Facility {
        id: "f4",
        name: "Bengal Biogas Solutions",
        state: "West Bengal",
        district: "Kolkata",
        city: "Kolkata",
        latitude: 22.5726,
        longitude: 88.3639,
        facility_type: "Biogas Generation",
        waste_types_accepted: &["Rice Husk", "Food Waste", "Agricultural Residue"],
        processing_capacity: "35 tonnes/day",
        contact: "Amit Sharma",
        phone: "+91 98234 56789",
        email: "info@bengalbiogas.in",
        established: 2016,
        certifications: &["ISO 9001", "MNRE Accredited"],
        pathways_supported: &["Anaerobic Digestion", "Biogas Energy"],
    },
    Facility {
        id: "f5",
        name: "Darjeeling Organic Compost",
        state: "West Bengal",
        district: "Darjeeling",
        city: "Darjeeling",
        latitude: 27.0410,
        longitude: 88.2663,
        facility_type: "Composting Unit",
        waste_types_accepted: &["Banana Peel", "Tea Waste", "Organic Matter"],
        processing_capacity: "15 tonnes/day",
        contact: "Priya Das",
        phone: "+91 99876 54321",
        email: "contact@darjeelingcompost.in",
        established: 2018,
        certifications: &["Organic Certified"],
        pathways_supported: &["Composting"],
    },
    // Karnataka
    Facility {
        id: "f6",
        name: "Bangalore Waste Solutions",
        state: "Karnataka",
        district: "Bangalore Urban",
        city: "Bangalore",
        latitude: 12.9716,
        longitude: 77.5946,
        facility_type: "Integrated Facility",
        waste_types_accepted: &["All Agricultural Waste", "Food Processing Waste"],
        processing_capacity: "50 tonnes/day",
        contact: "Rakesh Patel",
        phone: "+91 98765 12340",
        email: "contact@bangalorewaste.in",
        established: 2014,
        certifications: &["ISO 14001", "MNRE Accredited", "BIS Certified"],
        pathways_supported: &["Composting", "Anaerobic Digestion", "Biomass Energy"],
    },
    // Maharashtra
    Facility {
        id: "f7",
        name: "Maharashtra Green Processing",
        state: "Maharashtra",
        district: "Pune",
        city: "Pune",
        latitude: 18.5204,
        longitude: 73.8567,
        facility_type: "Biochar Production",
        waste_types_accepted: &["Sugarcane Bagasse", "Coconut Shell", "Agricultural Residue"],
        processing_capacity: "45 tonnes/day",
        contact: "Vikas Kumar",
        phone: "+91 98234 67890",
        email: "contact@mahagreenprocessing.in",
        established: 2015,
        certifications: &["ISO 14001", "BIS Certified"],
        pathways_supported: &["Biochar", "Biomass Energy"],
    },
    // Uttar Pradesh
    Facility {
        id: "f8",
        name: "UP Biorenewables",
        state: "Uttar Pradesh",
        district: "Lucknow",
        city: "Lucknow",
        latitude: 26.8467,
        longitude: 80.9462,
        facility_type: "Anaerobic Digestion",
        waste_types_accepted: &["Rice Bran", "Wheat Straw", "Agricultural Waste"],
        processing_capacity: "38 tonnes/day",
        contact: "Sharma Ji",
        phone: "+91 98765 23456",
        email: "contact@upbiorenewables.in",
        established: 2017,
        certifications: &["ISO 9001", "MNRE Accredited"],
        pathways_supported: &["Anaerobic Digestion", "Biogas Energy"],
    },
    // Rajasthan
    Facility {
        id: "f9",
        name: "Rajasthan Agri Solutions",
        state: "Rajasthan",
        district: "Jaipur",
        city: "Jaipur",
        latitude: 26.9124,
        longitude: 75.7873,
        facility_type: "Composting & Biochar",
        waste_types_accepted: &["Groundnut Shell", "Maize Straw", "Agricultural Waste"],
        processing_capacity: "32 tonnes/day",
        contact: "Ajay Singh",
        phone: "+91 99234 56789",
        email: "contact@rajagrisolutions.in",
        established: 2016,
        certifications: &["ISO 14001"],
        pathways_supported: &["Composting", "Biochar"],
    },
    // Gujarat
    Facility {
        id: "f10",
        name: "Gujarat BioWaste Management",
        state: "Gujarat",
        district: "Ahmedabad",
        city: "Ahmedabad",
        latitude: 23.0225,
        longitude: 72.5714,
        facility_type: "Integrated Facility",
        waste_types_accepted: &["Cotton Stalk", "Groundnut Husk", "Agricultural Residue"],
        processing_capacity: "42 tonnes/day",
        contact: "Nikhil Desai",
        phone: "+91 98765 34567",
        email: "contact@gujaratbiowaste.in",
        established: 2015,
        certifications: &["ISO 9001", "MNRE Accredited"],
        pathways_supported: &["Composting", "Biomass Energy", "Biochar"],
    },
    // Haryana
    Facility {
        id: "f11",
        name: "Haryana Organic Waste Processing",
        state: "Haryana",
        district: "Faridabad",
        city: "Faridabad",
        latitude: 28.4089,
        longitude: 77.3178,
        facility_type: "Composting Unit",
        waste_types_accepted: &["Rice Straw", "Maize Residue", "Agricultural Waste"],
        processing_capacity: "28 tonnes/day",
        contact: "Priya Sharma",
        phone: "+91 98876 54321",
        email: "contact@haryanaorganic.in",
        established: 2018,
        certifications: &["ISO 9001"],
        pathways_supported: &["Composting"],
    },
    // Punjab
    Facility {
        id: "f12",
        name: "Punjab BioEnergy Hub",
        state: "Punjab",
        district: "Ludhiana",
        city: "Ludhiana",
        latitude: 30.9010,
        longitude: 75.8573,
        facility_type: "Biogas & Composting",
        waste_types_accepted: &["Rice Husk", "Wheat Straw", "Food Processing Waste"],
        processing_capacity: "48 tonnes/day",
        contact: "Mandeep Singh",
        phone: "+91 98765 45678",
        email: "contact@punjabbioenergy.in",
        established: 2014,
        certifications: &["ISO 14001", "MNRE Accredited", "BIS Certified"],
        pathways_supported: &["Anaerobic Digestion", "Composting", "Biomass Energy"],
    },
    // Andhra Pradesh
    Facility {
        id: "f13",
        name: "Andhra Green Processing",
        state: "Andhra Pradesh",
        district: "Visakhapatnam",
        city: "Visakhapatnam",
        latitude: 17.6869,
        longitude: 83.2185,
        facility_type: "Biochar Production",
        waste_types_accepted: &["Coconut Shell", "Rice Husk", "Agricultural Waste"],
        processing_capacity: "35 tonnes/day",
        contact: "Krishna Kumar",
        phone: "+91 98234 78901",
        email: "contact@andhrgreen.in",
        established: 2017,
        certifications: &["ISO 9001", "BIS Certified"],
        pathways_supported: &["Biochar", "Biomass Energy"],
    },
    // Telangana
    Facility {
        id: "f14",
        name: "Telangana Waste Solutions",
        state: "Telangana",
        district: "Hyderabad",
        city: "Hyderabad",
        latitude: 17.3850,
        longitude: 78.4867,
        facility_type: "Integrated Facility",
        waste_types_accepted: &["All Agricultural Waste", "Food Waste"],
        processing_capacity: "52 tonnes/day",
        contact: "Sanjay Reddy",
        phone: "+91 99876 23456",
        email: "contact@telwastesolutions.in",
        established: 2016,
        certifications: &["ISO 14001", "MNRE Accredited"],
        pathways_supported: &["Composting", "Anaerobic Digestion", "Biochar"],
    },
];

pub fn all_facilities() -> &'static [Facility] {
    FACILITIES
}

pub fn facility(id: &str) -> Option<&'static Facility> {
    FACILITIES.iter().find(|f| f.id == id)
}

/// Facilities in a state and district, optionally narrowed by city substring.
/// All comparisons ignore case.
pub fn facilities_by_location(
    state: &str,
    district: &str,
    city: Option<&str>,
) -> Vec<&'static Facility> {
    FACILITIES
        .iter()
        .filter(|f| {
            f.state.eq_ignore_ascii_case(state)
                && f.district.eq_ignore_ascii_case(district)
                && city.map_or(true, |c| {
                    f.city.to_lowercase().contains(&c.to_lowercase())
                })
        })
        .collect()
}

/// Facilities supporting a pathway name such as "Composting"
pub fn facilities_by_pathway(pathway: &str) -> Vec<&'static Facility> {
    FACILITIES
        .iter()
        .filter(|f| {
            f.pathways_supported
                .iter()
                .any(|p| p.eq_ignore_ascii_case(pathway))
        })
        .collect()
}

/// Facilities accepting a waste name such as "Rice Husk"
pub fn facilities_by_waste_type(waste_type: &str) -> Vec<&'static Facility> {
    FACILITIES
        .iter()
        .filter(|f| {
            f.waste_types_accepted
                .iter()
                .any(|w| w.eq_ignore_ascii_case(waste_type))
        })
        .collect()
}

/// Great-circle distance between two points, km
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// A facility with its distance from a query point
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FacilityDistance {
    pub facility: &'static Facility,
    pub distance_km: f64,
}

/// Nearest facility to a point, skipping one district if given
pub fn nearest_facility(
    latitude: f64,
    longitude: f64,
    exclude_district: Option<&str>,
) -> Option<FacilityDistance> {
    FACILITIES
        .iter()
        .filter(|f| exclude_district.map_or(true, |d| f.district != d))
        .map(|f| FacilityDistance {
            facility: f,
            distance_km: haversine_km(latitude, longitude, f.latitude, f.longitude),
        })
        .min_by(|a, b| a.distance_km.total_cmp(&b.distance_km))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        assert!(haversine_km(12.97, 77.59, 12.97, 77.59).abs() < 1e-9);
    }

    #[test]
    fn bangalore_to_hyderabad() {
        let d = haversine_km(12.9716, 77.5946, 17.3850, 78.4867);
        // ~500 km as the crow flies
        assert!((490.0..510.0).contains(&d), "got {}", d);
    }

    #[test]
    fn location_lookup_ignores_case() {
        let found = facilities_by_location("tamil nadu", "COIMBATORE", Some("coim"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "f1");
    }
}
