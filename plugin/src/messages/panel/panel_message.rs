use super::utility_types::PanelAction;
use crate::messages::bridge::Position;
use crate::messages::prelude::*;

use serde::{Deserialize, Serialize};

#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum PanelMessage {
	/// The host finished constructing the panel's content
	ContentLoaded,
	Initialize,

	// User input
	ClickStack,
	ClickShuffle,

	// Events received over the bridge
	SelectionChanged { count: usize },
	StackComplete { count: usize, position: Position },
	ShuffleComplete { count: usize },
	Error { message: String },

	// Deferred cosmetic updates
	FadeActionCount { action: PanelAction },
	FadeOutNotification { id: u64 },
	RemoveNotification { id: u64 },
}

impl From<PluginEvent> for PanelMessage {
	fn from(event: PluginEvent) -> Self {
		match event {
			PluginEvent::SelectionChanged { count } => PanelMessage::SelectionChanged { count },
			PluginEvent::StackComplete { count, position } => PanelMessage::StackComplete { count, position },
			PluginEvent::ShuffleComplete { count } => PanelMessage::ShuffleComplete { count },
			PluginEvent::Error { message } => PanelMessage::Error { message },
		}
	}
}
