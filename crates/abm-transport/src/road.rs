//! A road with a fixed number of lanes.

use std::time::SystemTime;

use abm_core::{AbmError, AbmResult};
use tracing::debug;

/// A road segment.
///
/// `lanes` is fixed at construction.  `repaved_at` only moves through
/// [`repave`](Self::repave) and never goes backward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Road {
    lanes:      u32,
    repaved_at: SystemTime,
}

impl Road {
    /// Default width of one lane, in [`LENGTH_UNITS`](Self::LENGTH_UNITS).
    pub const LANE_WIDTH_DEFAULT: u32 = 12;
    pub const LENGTH_UNITS: &'static str = "feet";

    /// A freshly paved road with `lanes ≥ 1` lanes.
    pub fn new(lanes: i64) -> AbmResult<Self> {
        let lanes = u32::try_from(lanes)
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(|| AbmError::InvalidArgument(format!("a road needs at least 1 lane, got {lanes}")))?;
        Ok(Self { lanes, repaved_at: SystemTime::now() })
    }

    pub fn lanes(&self) -> u32 {
        self.lanes
    }

    pub fn repaved_at(&self) -> SystemTime {
        self.repaved_at
    }

    /// Total paved width at the default lane width.  Widened to `u64` so
    /// every accepted lane count fits.
    pub fn width(&self) -> u64 {
        u64::from(self.lanes) * u64::from(Self::LANE_WIDTH_DEFAULT)
    }

    /// Stamp the road as repaved now.
    pub fn repave(&mut self) {
        let now = SystemTime::now();
        if now > self.repaved_at {
            self.repaved_at = now;
        }
        debug!(lanes = self.lanes, "road repaved");
    }
}
