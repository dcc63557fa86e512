//! Run configuration.

use crate::{CoreError, CoreResult};

/// Top-level simulation configuration.
///
/// Built by the application from parsed input (or by hand in tests) and
/// passed to the simulation builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of ants waiting in the start room.  Must be at least 1.
    pub ant_count: usize,
}

impl SimConfig {
    pub fn new(ant_count: usize) -> Self {
        Self { ant_count }
    }

    /// Reject configurations that cannot be scheduled.
    pub fn validate(&self) -> CoreResult<()> {
        if self.ant_count == 0 {
            return Err(CoreError::InvalidAntCount(0));
        }
        if u32::try_from(self.ant_count).is_err() {
            return Err(CoreError::Config(format!(
                "ant count {} exceeds the supported maximum of {}",
                self.ant_count,
                u32::MAX
            )));
        }
        Ok(())
    }
}
