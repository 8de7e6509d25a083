use std::env;

use serde::{Deserialize, Serialize};

fn default_favorable() -> u8 {
    75
}

fn default_intermediate() -> u8 {
    50
}

/// Score thresholds for pronunciation feedback tiers
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Scores at or above this are favorable
    #[serde(default = "default_favorable")]
    pub favorable: u8,
    /// Scores at or above this (and below `favorable`) are intermediate
    #[serde(default = "default_intermediate")]
    pub intermediate: u8,
}

impl FeedbackConfig {
    pub fn new() -> Self {
        let favorable = env::var("FAVORABLE_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_favorable);

        let intermediate = env::var("INTERMEDIATE_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_intermediate);

        Self {
            favorable,
            intermediate,
        }
        .sanitized()
    }

    /// Clamp so that `intermediate <= favorable <= 100`
    pub fn sanitized(self) -> Self {
        let favorable = self.favorable.min(100);
        let intermediate = self.intermediate.min(favorable);

        Self {
            favorable,
            intermediate,
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            favorable: default_favorable(),
            intermediate: default_intermediate(),
        }
    }
}
