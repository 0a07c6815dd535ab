//! Simulation configuration.

/// Parameters for one simulation run.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    /// Number of doors in the game (at least 3).
    pub door_count: usize,
    /// Number of independent trials to run.
    pub trial_count: usize,
    /// Whether the player switches doors after the host reveal.
    pub switch_strategy: bool,
    /// Narrate every trial to stdout.
    pub verbose: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            door_count: 3,
            trial_count: 10_000,
            switch_strategy: true,
            verbose: false,
        }
    }
}

impl SimConfig {
    /// Check the parameters before any trial runs.
    ///
    /// With fewer than 3 doors the host has no goat door to open, and with
    /// zero trials there is no win rate to report. Both are configuration
    /// errors, rejected up front rather than discovered mid-run.
    pub fn validate(&self) -> Result<(), String> {
        if self.door_count < 3 {
            return Err(format!(
                "door_count must be at least 3, got {}",
                self.door_count
            ));
        }
        if self.trial_count == 0 {
            return Err("trial_count must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_too_few_doors() {
        let config = SimConfig {
            door_count: 2,
            ..SimConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("at least 3"), "unexpected message: {err}");
    }

    #[test]
    fn test_rejects_zero_trials() {
        let config = SimConfig {
            trial_count: 0,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
