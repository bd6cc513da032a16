//! Strongly typed, zero-cost identifier wrappers.
//!
//! OSM identifiers are signed 64-bit integers (negative ids appear in
//! locally edited extracts), so every wrapper holds an `i64`.  All IDs are
//! `Copy + Ord + Hash` so they can key `BTreeMap`s directly, which is what
//! gives the assembler its sorted, run-to-run stable emission order.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw integer id as it appears in the source data.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }

        impl From<$name> for $inner {
            #[inline(always)]
            fn from(id: $name) -> $inner {
                id.0
            }
        }
    };
}

typed_id! {
    /// Id of an OSM node referenced by a road way.
    pub struct OsmNodeId(i64);
}

typed_id! {
    /// Id of an OSM way (roads and building footprints share this space).
    pub struct WayId(i64);
}

typed_id! {
    /// Id of a point in a polygon-filtered base graph.
    pub struct PointId(i64);
}
