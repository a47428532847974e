use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::{
    scroll::{AnchorTracker, BreakpointTracker, ScrollError, Spring},
    sections::Section,
    transition::{GestureInput, TransitionController},
};

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";

/// Spring constants, as stiffness / damping pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
}

impl SpringConfig {
    pub fn spring(&self) -> Spring {
        Spring::new(self.stiffness, self.damping)
    }
}

/// Tuning parameters for the scroll choreography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Fraction of an anchor that must be inside the viewport to count as crossed.
    pub anchor_threshold: f64,
    /// Progress breakpoints between consecutive sections.
    pub breakpoints: Vec<f64>,
    pub cooldown_ms: i64,
    /// Summed wheel travel that steps one section.
    pub wheel_threshold: f64,
    /// Pause that separates two wheel gestures.
    pub wheel_gap_ms: i64,
    pub swipe_threshold: f64,
    pub smooth_scroll_ms: f64,
    /// Height of the fixed header kept clear when scrolling to an anchor.
    pub scroll_offset: f64,
    pub card_spring: SpringConfig,
    pub progress_spring: SpringConfig,
    pub notice_ms: i64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            anchor_threshold: 0.4,
            breakpoints: vec![0.2, 0.35, 0.55, 0.75],
            cooldown_ms: 1000,
            wheel_threshold: 30.0,
            wheel_gap_ms: 150,
            swipe_threshold: 50.0,
            smooth_scroll_ms: 500.0,
            scroll_offset: 80.0,
            card_spring: SpringConfig {
                stiffness: 100.0,
                damping: 20.0,
            },
            progress_spring: SpringConfig {
                stiffness: 100.0,
                damping: 30.0,
            },
            notice_ms: 5000,
        }
    }
}

impl SiteConfig {
    pub fn cooldown(&self) -> TimeDelta {
        TimeDelta::milliseconds(self.cooldown_ms)
    }

    pub fn notice_lifetime(&self) -> TimeDelta {
        TimeDelta::milliseconds(self.notice_ms)
    }

    pub fn anchor_tracker(&self) -> AnchorTracker {
        AnchorTracker::new(self.anchor_threshold)
    }

    pub fn breakpoint_tracker(&self) -> Result<BreakpointTracker, ScrollError> {
        BreakpointTracker::new(self.breakpoints.clone())
    }

    pub fn controller(&self) -> TransitionController {
        TransitionController::new(Section::COUNT, self.cooldown())
    }

    pub fn gestures(&self) -> GestureInput {
        GestureInput {
            wheel_threshold: self.wheel_threshold,
            swipe_threshold: self.swipe_threshold,
            wheel_gap: TimeDelta::milliseconds(self.wheel_gap_ms),
        }
    }
}

/// Identifiers of the e-mail relay account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).unwrap_or_default();
        Self {
            service_id: get(SERVICE_ID_VAR),
            template_id: get(TEMPLATE_ID_VAR),
            public_key: get(PUBLIC_KEY_VAR),
        }
    }

    /// Names of the variables that are unset or empty.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (SERVICE_ID_VAR, &self.service_id),
            (TEMPLATE_ID_VAR, &self.template_id),
            (PUBLIC_KEY_VAR, &self.public_key),
        ]
        .into_iter()
        .filter(|(_, v)| v.is_empty())
        .map(|(k, _)| k)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_consistent() {
        let config = SiteConfig::default();
        let tracker = config.breakpoint_tracker().expect("default breakpoints are valid");
        assert_eq!(tracker.len(), Section::COUNT);
        assert_eq!(config.controller().len(), Section::COUNT);
        assert_eq!(config.cooldown(), TimeDelta::milliseconds(1000));
        assert_eq!(config.notice_lifetime(), TimeDelta::seconds(5));
        assert_eq!(config.gestures().wheel_gap, TimeDelta::milliseconds(150));
    }

    #[test]
    fn test_relay_config_lookup() {
        let vars = HashMap::from([
            (SERVICE_ID_VAR, "service_abc".to_string()),
            (TEMPLATE_ID_VAR, "  ".to_string()),
        ]);
        let config = RelayConfig::from_lookup(|k| vars.get(k).cloned());
        assert_eq!(config.service_id, "service_abc");
        assert_eq!(config.missing(), vec![TEMPLATE_ID_VAR, PUBLIC_KEY_VAR]);
        assert!(!config.is_complete());

        let full = RelayConfig {
            service_id: "s".into(),
            template_id: "t".into(),
            public_key: "k".into(),
        };
        assert!(full.is_complete());
    }
}
