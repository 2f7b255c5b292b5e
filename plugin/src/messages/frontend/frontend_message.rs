use crate::messages::panel::utility_types::{NotificationKind, StatusKind};

use serde::{Deserialize, Serialize};

/// Updates for whatever renders the panel, in the order they happened.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum FrontendMessage {
	// Display prefix: make the frontend show something
	DisplayNotification {
		id: u64,
		text: String,
		kind: NotificationKind,
	},
	DisplayRemoveNotification {
		id: u64,
	},

	// Trigger prefix: start something on the frontend side
	TriggerNotificationFadeOut {
		id: u64,
	},
	TriggerShowPanel {
		width: u32,
		height: u32,
	},

	// Update prefix: give the frontend a new value or state for it to use
	UpdateActionCount {
		id: String,
		text: String,
		opacity: f64,
	},
	UpdateSelectionStatus {
		status: String,
		kind: StatusKind,
		hint: String,
		#[serde(rename = "buttonsDisabled")]
		buttons_disabled: bool,
	},
}
