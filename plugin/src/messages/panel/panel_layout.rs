//! The widgets of the panel and their current state.

use super::utility_types::{NotificationKind, PanelAction, SelectionStatus, StatusKind};
use crate::consts::{ACTION_COUNT_OPACITY, SHUFFLE_BUTTON_LABEL, STACK_BUTTON_LABEL};
use crate::messages::bridge::PluginCommand;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLabel {
	pub id: String,

	pub opacity: f64,

	// Body
	pub value: String,
}

impl TextLabel {
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			opacity: ACTION_COUNT_OPACITY,
			..Default::default()
		}
	}

	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = id.into();
		self
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextButton {
	pub label: String,

	pub disabled: bool,

	// Callbacks
	/// The command sent over the bridge when the button is clicked
	pub on_click: PluginCommand,
}

impl TextButton {
	pub fn new(label: impl Into<String>, on_click: PluginCommand) -> Self {
		Self {
			label: label.into(),
			disabled: false,
			on_click,
		}
	}
}

/// A transient message that fades out and is then removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
	pub id: u64,
	pub text: String,
	pub kind: NotificationKind,
	pub fading: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelLayout {
	pub status: TextLabel,
	pub status_kind: StatusKind,
	pub hint: TextLabel,
	pub stack_button: TextButton,
	pub shuffle_button: TextButton,
	/// Action count labels in the order they were first shown
	pub actions: Vec<TextLabel>,
	pub notifications: Vec<Notification>,
}

impl Default for PanelLayout {
	fn default() -> Self {
		let mut layout = Self {
			status: TextLabel::new("").id("selection-status"),
			status_kind: StatusKind::Warning,
			hint: TextLabel::new("").id("selection-hint"),
			stack_button: TextButton::new(STACK_BUTTON_LABEL, PanelAction::Stack.command()),
			shuffle_button: TextButton::new(SHUFFLE_BUTTON_LABEL, PanelAction::Shuffle.command()),
			actions: Vec::new(),
			notifications: Vec::new(),
		};
		layout.apply_status(&SelectionStatus::for_count(0));
		layout
	}
}

impl PanelLayout {
	pub fn button(&self, action: PanelAction) -> &TextButton {
		match action {
			PanelAction::Stack => &self.stack_button,
			PanelAction::Shuffle => &self.shuffle_button,
		}
	}

	pub fn apply_status(&mut self, status: &SelectionStatus) {
		self.status.value.clone_from(&status.status);
		self.status_kind = status.kind;
		self.hint.value.clone_from(&status.hint);
		self.stack_button.disabled = !status.ready;
		self.shuffle_button.disabled = !status.ready;
	}

	pub fn action_count(&self, action: PanelAction) -> Option<&TextLabel> {
		self.actions.iter().find(|label| label.id == action.count_label_id())
	}

	pub fn action_count_mut(&mut self, action: PanelAction) -> Option<&mut TextLabel> {
		self.actions.iter_mut().find(|label| label.id == action.count_label_id())
	}

	/// The count label of `action`, appended to the actions section the first time it is needed.
	pub fn action_count_entry(&mut self, action: PanelAction) -> &mut TextLabel {
		let index = match self.actions.iter().position(|label| label.id == action.count_label_id()) {
			Some(index) => index,
			None => {
				self.actions.push(TextLabel::new("").id(action.count_label_id()));
				self.actions.len() - 1
			}
		};
		&mut self.actions[index]
	}

	pub fn notification_mut(&mut self, id: u64) -> Option<&mut Notification> {
		self.notifications.iter_mut().find(|notification| notification.id == id)
	}

	pub fn remove_notification(&mut self, id: u64) -> Option<Notification> {
		let index = self.notifications.iter().position(|notification| notification.id == id)?;
		Some(self.notifications.remove(index))
	}
}

impl fmt::Display for PanelLayout {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let kind = match self.status_kind {
			StatusKind::Warning => "warning",
			StatusKind::Success => "success",
		};
		writeln!(f, "[{kind}] {}", self.status.value)?;
		writeln!(f, "{}", self.hint.value)?;

		let buttons: Vec<_> = [&self.stack_button, &self.shuffle_button]
			.into_iter()
			.map(|button| if button.disabled { format!("( {} )", button.label) } else { format!("[ {} ]", button.label) })
			.collect();
		writeln!(f, "{}", buttons.join(" "))?;

		for label in &self.actions {
			writeln!(f, "{} (opacity {})", label.value, label.opacity)?;
		}
		for notification in &self.notifications {
			let state = if notification.fading { " (fading)" } else { "" };
			writeln!(f, "{}{state}", notification.text)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	use pretty_assertions::assert_eq;

	#[test]
	fn buttons_follow_the_selection_status() {
		let mut layout = PanelLayout::default();
		assert!(layout.stack_button.disabled && layout.shuffle_button.disabled);
		assert_eq!(layout.button(PanelAction::Shuffle).on_click, PluginCommand::ShuffleOrder);

		layout.apply_status(&SelectionStatus::for_count(5));
		assert!(!layout.stack_button.disabled && !layout.shuffle_button.disabled);
		assert_eq!(layout.status.value, "5 elements selected");
	}

	#[test]
	fn action_count_labels_are_created_once() {
		let mut layout = PanelLayout::default();
		layout.action_count_entry(PanelAction::Shuffle).value = "Shuffled 1 time (2 elements)".into();
		layout.action_count_entry(PanelAction::Stack);
		layout.action_count_entry(PanelAction::Shuffle).value = "Shuffled 2 times (2 elements)".into();

		let ids: Vec<_> = layout.actions.iter().map(|label| label.id.as_str()).collect();
		assert_eq!(ids, ["shuffle-count", "stack-count"]);
		assert_eq!(layout.action_count(PanelAction::Shuffle).map(|label| label.value.as_str()), Some("Shuffled 2 times (2 elements)"));
	}

	#[test]
	fn renders_as_text() {
		let mut layout = PanelLayout::default();
		layout.apply_status(&SelectionStatus::for_count(3));
		layout.action_count_entry(PanelAction::Stack).value = "Stacked 1 time (3 elements)".into();

		assert_eq!(
			layout.to_string(),
			"[success] 3 elements selected\nReady to stack and shuffle\n[ Stack Elements ] [ Shuffle Order ]\nStacked 1 time (3 elements) (opacity 1)\n"
		);
	}
}
