use crate::consts::*;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunable behavior of a plugin session. Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
	/// Fewest selected elements the stack and shuffle commands accept
	pub min_selection_count: usize,
	pub startup_report_delay_ms: u64,
	pub action_count_fade_delay_ms: u64,
	/// Opacity an action count label fades to once its delay has passed
	pub action_count_faded_opacity: f64,
	pub notification_fade_delay_ms: u64,
	/// Time between a notification starting to fade and its removal
	pub notification_removal_delay_ms: u64,
	pub panel_width: u32,
	pub panel_height: u32,
	/// Seed for the shuffle's random source. A fresh seed is drawn from the OS when absent.
	pub seed: Option<u64>,
}

impl Default for PluginConfig {
	fn default() -> Self {
		Self {
			min_selection_count: MIN_SELECTION_COUNT,
			startup_report_delay_ms: STARTUP_REPORT_DELAY_MS,
			action_count_fade_delay_ms: ACTION_COUNT_FADE_DELAY_MS,
			action_count_faded_opacity: ACTION_COUNT_FADED_OPACITY,
			notification_fade_delay_ms: NOTIFICATION_FADE_DELAY_MS,
			notification_removal_delay_ms: NOTIFICATION_REMOVAL_DELAY_MS,
			panel_width: PANEL_WIDTH,
			panel_height: PANEL_HEIGHT,
			seed: None,
		}
	}
}

impl PluginConfig {
	pub fn startup_report_delay(&self) -> Duration {
		Duration::from_millis(self.startup_report_delay_ms)
	}

	pub fn action_count_fade_delay(&self) -> Duration {
		Duration::from_millis(self.action_count_fade_delay_ms)
	}

	pub fn notification_fade_delay(&self) -> Duration {
		Duration::from_millis(self.notification_fade_delay_ms)
	}

	pub fn notification_removal_delay(&self) -> Duration {
		Duration::from_millis(self.notification_removal_delay_ms)
	}
}
