use super::Coordinate;

/// Coordinate used for "Remote" postings and for any city missing from the table.
pub const REMOTE_COORDINATE: Coordinate = Coordinate::new(20.5937, 78.9629);

const CITY_COORDINATES: &[(&str, Coordinate)] = &[
    ("delhi", Coordinate::new(28.7041, 77.1025)),
    ("new delhi", Coordinate::new(28.6139, 77.2090)),
    ("mumbai", Coordinate::new(19.0760, 72.8777)),
    ("bangalore", Coordinate::new(12.9716, 77.5946)),
    ("bengaluru", Coordinate::new(12.9716, 77.5946)),
    ("hyderabad", Coordinate::new(17.3850, 78.4867)),
    ("chennai", Coordinate::new(13.0827, 80.2707)),
    ("kolkata", Coordinate::new(22.5726, 88.3639)),
    ("pune", Coordinate::new(18.5204, 73.8567)),
    ("ahmedabad", Coordinate::new(23.0225, 72.5714)),
    ("jaipur", Coordinate::new(26.9124, 75.7873)),
    ("noida", Coordinate::new(28.5355, 77.3910)),
    ("gurgaon", Coordinate::new(28.4595, 77.0266)),
    ("gurugram", Coordinate::new(28.4595, 77.0266)),
    ("chandigarh", Coordinate::new(30.7333, 76.7794)),
    ("lucknow", Coordinate::new(26.8467, 80.9462)),
    ("kochi", Coordinate::new(9.9312, 76.2673)),
    ("indore", Coordinate::new(22.7196, 75.8577)),
    ("remote", REMOTE_COORDINATE),
];

/// Exact table lookup; case-insensitive and whitespace-trimmed.
pub fn lookup_city(city: &str) -> Option<Coordinate> {
    let key = city.trim().to_lowercase();
    CITY_COORDINATES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, coord)| *coord)
}

/// Table lookup falling back to the remote coordinate. Always yields a coordinate.
pub fn resolve_city(city: &str) -> Coordinate {
    lookup_city(city).unwrap_or(REMOTE_COORDINATE)
}
