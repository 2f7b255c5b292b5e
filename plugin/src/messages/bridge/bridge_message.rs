use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Sent from the panel to the document controller.
/// On the wire each command is a JSON object tagged by `type`. An additional `data` field is accepted and ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PluginCommand {
	/// The panel is listening and wants the current selection count
	UiReady,
	StackElements,
	ShuffleOrder,
}

impl PluginCommand {
	pub const KINDS: &'static [&'static str] = &["ui-ready", "stack-elements", "shuffle-order"];
}

/// Sent from the document controller to the panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum PluginEvent {
	SelectionChanged { count: usize },
	StackComplete { count: usize, position: Position },
	ShuffleComplete { count: usize },
	Error { message: String },
}

impl PluginEvent {
	pub const KINDS: &'static [&'static str] = &["selection-changed", "stack-complete", "shuffle-complete", "error"];
}

/// A point in document space as it is written on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl From<DVec2> for Position {
	fn from(point: DVec2) -> Self {
		Self { x: point.x, y: point.y }
	}
}

impl From<Position> for DVec2 {
	fn from(position: Position) -> Self {
		DVec2::new(position.x, position.y)
	}
}

/// Hands a message to the bridge for delivery to the other side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BridgeMessage {
	PostCommand(PluginCommand),
	PostEvent(PluginEvent),
}
