use crate::catalog::Coordinates;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two capitals, haversine on a spherical
/// Earth.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let phi_a = a.lat.to_radians();
    let phi_b = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lon - a.lon).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi_a.cos() * phi_b.cos() * (d_lambda / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const OSLO: Coordinates = Coordinates { lat: 59.91, lon: 10.75 };
    const STOCKHOLM: Coordinates = Coordinates { lat: 59.33, lon: 18.07 };
    const BERLIN: Coordinates = Coordinates { lat: 52.52, lon: 13.41 };
    const PARIS: Coordinates = Coordinates { lat: 48.86, lon: 2.35 };

    #[test]
    fn oslo_to_stockholm() {
        let d = haversine_km(OSLO, STOCKHOLM);
        assert!((d - 417.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn paris_to_berlin() {
        let d = haversine_km(PARIS, BERLIN);
        assert!((d - 878.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        assert_eq!(haversine_km(OSLO, OSLO), 0.0);
        let there = haversine_km(OSLO, BERLIN);
        let back = haversine_km(BERLIN, OSLO);
        assert!((there - back).abs() < 1e-9);
    }
}
