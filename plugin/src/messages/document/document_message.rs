use crate::messages::prelude::*;

use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Debug, Hash, Serialize, Deserialize)]
pub enum DocumentMessage {
	Startup,
	ReportSelectionCount,
	/// The host announced that the user changed the selection
	SelectionChanged,

	// Commands received over the bridge
	UiReady,
	StackElements,
	ShuffleOrder,
}

impl From<PluginCommand> for DocumentMessage {
	fn from(command: PluginCommand) -> Self {
		match command {
			PluginCommand::UiReady => DocumentMessage::UiReady,
			PluginCommand::StackElements => DocumentMessage::StackElements,
			PluginCommand::ShuffleOrder => DocumentMessage::ShuffleOrder,
		}
	}
}
