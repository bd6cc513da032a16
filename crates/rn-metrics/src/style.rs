//! Visual encoding of betweenness: marker radius and a blue-to-red colour.

/// Radius when the betweenness column has no spread.
pub const BASE_RADIUS: f64 = 1.0;

/// Radius added at the top of the ramp.
pub const RADIUS_SPAN: f64 = 10.0;

/// Colour when the betweenness column has no spread.
pub const FLAT_COLOR: &str = "rgb(0, 0, 0)";

/// Radius and colour of one vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeStyle {
    pub radius: f64,
    pub color:  String,
}

impl NodeStyle {
    fn flat() -> Self {
        Self { radius: BASE_RADIUS, color: FLAT_COLOR.to_owned() }
    }

    /// Style for a value already rescaled to `[0, 1]`.
    pub fn from_normalised(t: f64) -> Self {
        let red = (255.0 * t).round() as u8;
        let blue = (255.0 * (1.0 - t)).round() as u8;
        Self {
            radius: BASE_RADIUS + RADIUS_SPAN * t,
            color:  format!("rgb({red}, 0, {blue})"),
        }
    }
}

/// Style every value of `betweenness` by min-max rescaling.
///
/// A column whose maximum equals its minimum (all zeros included) gets
/// radius 1 and black everywhere.
pub fn style_column(betweenness: &[f64]) -> Vec<NodeStyle> {
    let min = betweenness.iter().copied().fold(f64::INFINITY, f64::min);
    let max = betweenness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    if !(span.is_finite() && span > 0.0) {
        return vec![NodeStyle::flat(); betweenness.len()];
    }
    betweenness
        .iter()
        .map(|&b| NodeStyle::from_normalised((b - min) / span))
        .collect()
}
