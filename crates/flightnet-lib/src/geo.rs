//! Great-circle distance helpers used to derive route weights.

/// Mean Earth radius in kilometres used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Assumed average cruise speed used to derive flight durations.
pub const CRUISE_SPEED_KMH: f64 = 800.0;

/// Haversine distance in kilometres between two points given in degrees.
///
/// The evaluation order is fixed so the same inputs always produce the same
/// bits in double precision. NaN inputs propagate to the result.
pub fn great_circle_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + lat1.to_radians().cos()
            * lat2.to_radians().cos()
            * (d_lon / 2.0).sin()
            * (d_lon / 2.0).sin();
    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Flight time in hours for a distance flown at [`CRUISE_SPEED_KMH`].
pub fn flight_duration_hours(distance_km: f64) -> f64 {
    distance_km / CRUISE_SPEED_KMH
}
