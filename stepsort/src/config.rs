//! Configuration for the sorting engine.

use crate::error::{EngineError, Result};
use std::time::Duration;

/// Upper bound for any configured delay.
const MAX_DELAY: Duration = Duration::from_secs(10);

/// Engine configuration.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Initial pacing delay each instrumented primitive waits before
    /// yielding control back. Adjustable at runtime via
    /// [`crate::Controller::set_pacing`].
    pub pacing: Duration,

    /// Delay between per-index celebration markers after a completed run.
    pub celebrate_step: Duration,

    /// Seed for the dataset generator. `None` derives one from the system
    /// clock.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pacing: Duration::from_millis(200),
            celebrate_step: Duration::from_millis(50),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create a config suited for tests: no pacing, no celebration delay,
    /// fixed seed.
    pub fn instant(seed: u64) -> Self {
        Self {
            pacing: Duration::ZERO,
            celebrate_step: Duration::ZERO,
            seed: Some(seed),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.pacing > MAX_DELAY {
            return Err(EngineError::Config(format!(
                "pacing {:?} exceeds maximum {:?}",
                self.pacing, MAX_DELAY
            )));
        }
        if self.celebrate_step > MAX_DELAY {
            return Err(EngineError::Config(format!(
                "celebrate_step {:?} exceeds maximum {:?}",
                self.celebrate_step, MAX_DELAY
            )));
        }
        Ok(())
    }

    pub(crate) fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_excessive_pacing_rejected() {
        let config = EngineConfig {
            pacing: Duration::from_secs(60),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn test_instant_config() {
        let config = EngineConfig::instant(42);
        assert!(config.validate().is_ok());
        assert_eq!(config.pacing, Duration::ZERO);
        assert_eq!(config.seed_or_clock(), 42);
    }
}
