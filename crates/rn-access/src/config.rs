//! Assembler configuration.

use rn_core::{RnError, RnResult};

/// Default maximum building-to-road snap distance, in metres.
pub const DEFAULT_SNAP_DISTANCE_M: f64 = 80.0;

/// Parameters for [`AccessGraphAssembler`](crate::AccessGraphAssembler).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssemblerConfig {
    /// A building is linked only if its nearest road node is at most this
    /// far away (haversine metres).
    pub snap_distance_m: f64,
}

impl AssemblerConfig {
    /// # Errors
    ///
    /// [`RnError::Config`] if `snap_distance_m` is negative, NaN or infinite.
    pub fn new(snap_distance_m: f64) -> RnResult<Self> {
        let config = Self { snap_distance_m };
        config.validate()?;
        Ok(config)
    }

    /// Check a config built by hand or deserialised.
    ///
    /// # Errors
    ///
    /// [`RnError::Config`] if `snap_distance_m` is negative, NaN or infinite.
    pub fn validate(&self) -> RnResult<()> {
        let d = self.snap_distance_m;
        if !d.is_finite() || d < 0.0 {
            return Err(RnError::Config(format!(
                "snap distance must be a finite, non-negative number of metres (got {d})"
            )));
        }
        Ok(())
    }
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self { snap_distance_m: DEFAULT_SNAP_DISTANCE_M }
    }
}
