//! Local tangent-plane projection for fast Euclidean nearest-neighbour math.
//!
//! ```text
//! x = R · (lon − lon₀) · cos(lat₀)
//! y = R · (lat − lat₀)
//! ```
//!
//! The origin is the centroid of the candidate nodes.  Error grows with the
//! distance from the origin; at city scale it stays well below the
//! tens-of-metres tolerance snapping works with, and the projected distance
//! is only ever used to shortlist a candidate, never reported.

use crate::geo::{EARTH_RADIUS_M, GeoPoint};

/// Equirectangular projection around a fixed origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoProjector {
    origin_lat_rad: f64,
    origin_lon_rad: f64,
    cos_origin:     f64,
}

impl GeoProjector {
    /// Projector centred on `origin`.
    pub fn new(origin: GeoPoint) -> Self {
        let origin_lat_rad = origin.lat.to_radians();
        Self {
            origin_lat_rad,
            origin_lon_rad: origin.lon.to_radians(),
            cos_origin: origin_lat_rad.cos(),
        }
    }

    /// Projector centred on the mean position of `points`.
    ///
    /// Returns `None` when `points` is empty or its mean is not finite; the
    /// caller is expected to use a non-projected fallback in that case.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut count = 0usize;
        let mut sum_lat = 0.0;
        let mut sum_lon = 0.0;
        for p in points {
            count += 1;
            sum_lat += p.lat;
            sum_lon += p.lon;
        }
        if count == 0 {
            return None;
        }
        let origin = GeoPoint::new(sum_lat / count as f64, sum_lon / count as f64);
        origin.is_finite().then(|| Self::new(origin))
    }

    /// Project `p` to `[x, y]` metres relative to the origin.
    #[inline]
    pub fn project(&self, p: GeoPoint) -> [f64; 2] {
        let x = EARTH_RADIUS_M * (p.lon.to_radians() - self.origin_lon_rad) * self.cos_origin;
        let y = EARTH_RADIUS_M * (p.lat.to_radians() - self.origin_lat_rad);
        [x, y]
    }
}
