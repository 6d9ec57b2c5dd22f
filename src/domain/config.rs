use serde::{Deserialize, Serialize};

use super::shapes::TARGET_AREA;

/// Tunables for the menu background. Every field has a default, so a
/// partial JSON object (or `{}`) is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneConfig {
    /// Downward acceleration, in engine gravity units
    pub gravity_y: f32,
    pub target_area: f32,
    /// Distance below the viewport bottom at which pieces are pruned
    pub offscreen_margin: f32,
    /// Fraction of viewport height a piece must pass to unlock a burst
    pub spawn_trigger_fraction: f32,
    pub burst_size: u32,
    pub burst_delay_ms: f64,
    pub intro_pieces: u32,
    pub intro_interval_ms: f64,
    /// Fixed simulation step
    pub step_ms: f64,
    /// Fixed spawn seed; unset draws a fresh one per controller
    pub seed: Option<u32>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            gravity_y: 0.1,
            target_area: TARGET_AREA,
            offscreen_margin: 100.0,
            spawn_trigger_fraction: 0.3,
            burst_size: 2,
            burst_delay_ms: 1000.0,
            intro_pieces: 3,
            intro_interval_ms: 1000.0,
            step_ms: 1000.0 / 60.0,
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let cfg: SceneConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), String> {
        if !(self.target_area > 0.0) {
            return Err(format!("targetArea must be positive, got {}", self.target_area));
        }
        if !(self.step_ms > 0.0) {
            return Err(format!("stepMs must be positive, got {}", self.step_ms));
        }
        if !(0.0..=1.0).contains(&self.spawn_trigger_fraction) {
            return Err(format!(
                "spawnTriggerFraction must be within 0..=1, got {}",
                self.spawn_trigger_fraction
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(SceneConfig::from_json("{}").unwrap(), SceneConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = SceneConfig::from_json(r#"{"burstSize": 4, "seed": 9}"#).unwrap();
        assert_eq!(cfg.burst_size, 4);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.burst_delay_ms, 1000.0);
    }

    #[test]
    fn seed_is_unset_by_default() {
        assert_eq!(SceneConfig::default().seed, None);
        assert_eq!(SceneConfig::from_json(r#"{"seed": null}"#).unwrap().seed, None);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(SceneConfig::from_json(r#"{"targetArea": 0}"#).is_err());
        assert!(SceneConfig::from_json(r#"{"spawnTriggerFraction": 1.5}"#).is_err());
        assert!(SceneConfig::from_json("not json").is_err());
    }
}
