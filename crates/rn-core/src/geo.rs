//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Snap decisions compare
//! haversine distances against thresholds of tens of metres, and building
//! centroids are derived from footprints a few metres across, so the extra
//! precision over `f32` is load-bearing here.

/// Mean Earth radius in metres, shared by haversine and the local projector.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// `true` if both coordinates are finite numbers.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Area-weighted centroid of a footprint ring, treating `lon` as x and `lat`
/// as y.
///
/// - Open rings are closed implicitly.
/// - Fewer than three vertices, or a ring whose signed area is (near) zero,
///   fall back to the vertex mean.
/// - Returns `None` only when `ring` is empty.
pub fn polygon_centroid(ring: &[GeoPoint]) -> Option<GeoPoint> {
    if ring.is_empty() {
        return None;
    }
    if ring.len() < 3 {
        return Some(vertex_mean(ring));
    }

    let closed = ring.first() == ring.last();
    let n = if closed { ring.len() - 1 } else { ring.len() };

    // Work relative to the first vertex so city-scale footprints do not lose
    // their area to cancellation against large absolute coordinates.
    let origin = ring[0];
    let rel = |p: GeoPoint| (p.lon - origin.lon, p.lat - origin.lat);

    let mut area = 0.0;
    let mut magnitude = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let (x0, y0) = rel(ring[i]);
        let (x1, y1) = rel(ring[(i + 1) % n]);
        let cross = x0 * y1 - x1 * y0;
        area += cross;
        magnitude += cross.abs();
        cx += (x0 + x1) * cross;
        cy += (y0 + y1) * cross;
    }

    // Collinear rings cancel to rounding noise relative to their terms.
    if area == 0.0 || area.abs() <= magnitude * 1e-12 {
        return Some(vertex_mean(ring));
    }

    area *= 0.5;
    Some(GeoPoint::new(
        origin.lat + cy / (6.0 * area),
        origin.lon + cx / (6.0 * area),
    ))
}

fn vertex_mean(points: &[GeoPoint]) -> GeoPoint {
    let n = points.len() as f64;
    let lat = points.iter().map(|p| p.lat).sum::<f64>() / n;
    let lon = points.iter().map(|p| p.lon).sum::<f64>() / n;
    GeoPoint::new(lat, lon)
}
