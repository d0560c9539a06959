/// Geographic position in WGS84 degrees.
///
/// Stored latitude-first to match how click coordinates arrive from the
/// map surface; GeoJSON output swaps to longitude-first at serialization.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LatLng {
    pub lat_deg: f64,
    pub lng_deg: f64,
}

impl LatLng {
    pub const fn new(lat_deg: f64, lng_deg: f64) -> Self {
        Self { lat_deg, lng_deg }
    }
}
