use crate::messages::bridge::PluginCommand;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelAction {
	Stack,
	Shuffle,
}

impl PanelAction {
	/// Element ID of the label counting how often the action completed.
	pub fn count_label_id(&self) -> &'static str {
		match self {
			PanelAction::Stack => "stack-count",
			PanelAction::Shuffle => "shuffle-count",
		}
	}

	pub fn past_tense(&self) -> &'static str {
		match self {
			PanelAction::Stack => "Stacked",
			PanelAction::Shuffle => "Shuffled",
		}
	}

	pub fn command(&self) -> PluginCommand {
		match self {
			PanelAction::Stack => PluginCommand::StackElements,
			PanelAction::Shuffle => PluginCommand::ShuffleOrder,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
	#[default]
	Warning,
	Success,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
	#[default]
	Success,
	Error,
}

/// Counters of one panel session, changed only by events from the document controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PanelSession {
	pub selected_count: usize,
	pub stack_count: usize,
	pub shuffle_count: usize,
}

impl PanelSession {
	/// Counts one more completion of `action` and returns the new total.
	pub fn record_completion(&mut self, action: PanelAction) -> usize {
		let count = match action {
			PanelAction::Stack => &mut self.stack_count,
			PanelAction::Shuffle => &mut self.shuffle_count,
		};
		*count += 1;
		*count
	}
}

/// What the status area shows for a given number of selected elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionStatus {
	pub status: String,
	pub kind: StatusKind,
	pub hint: String,
	/// Whether the action buttons are enabled
	pub ready: bool,
}

impl SelectionStatus {
	pub fn for_count(count: usize) -> Self {
		let (status, kind, hint, ready) = match count {
			0 => ("No elements selected".to_string(), StatusKind::Warning, "Please select elements in Figjam to continue", false),
			1 => ("1 element selected".to_string(), StatusKind::Warning, "Select at least 2 elements to stack or shuffle", false),
			count => (format!("{count} elements selected"), StatusKind::Success, "Ready to stack and shuffle", true),
		};
		Self {
			status,
			kind,
			hint: hint.to_string(),
			ready,
		}
	}
}

pub fn action_count_text(action: PanelAction, count: usize, element_count: usize) -> String {
	let times = if count > 1 { "times" } else { "time" };
	format!("{} {count} {times} ({element_count} elements)", action.past_tense())
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn status_boundaries() {
		let none = SelectionStatus::for_count(0);
		assert_eq!((none.status.as_str(), none.kind, none.ready), ("No elements selected", StatusKind::Warning, false));
		assert_eq!(none.hint, "Please select elements in Figjam to continue");

		let one = SelectionStatus::for_count(1);
		assert_eq!((one.status.as_str(), one.kind, one.ready), ("1 element selected", StatusKind::Warning, false));
		assert_eq!(one.hint, "Select at least 2 elements to stack or shuffle");

		let two = SelectionStatus::for_count(2);
		assert_eq!((two.status.as_str(), two.kind, two.ready), ("2 elements selected", StatusKind::Success, true));
		assert_eq!(two.hint, "Ready to stack and shuffle");
	}

	#[test]
	fn action_counts_pluralize_times_only() {
		assert_eq!(action_count_text(PanelAction::Stack, 1, 3), "Stacked 1 time (3 elements)");
		assert_eq!(action_count_text(PanelAction::Shuffle, 2, 1), "Shuffled 2 times (1 elements)");
	}

	#[test]
	fn completions_are_counted_per_action() {
		let mut session = PanelSession::default();
		assert_eq!(session.record_completion(PanelAction::Stack), 1);
		assert_eq!(session.record_completion(PanelAction::Stack), 2);
		assert_eq!(session.record_completion(PanelAction::Shuffle), 1);
		assert_eq!((session.stack_count, session.shuffle_count, session.selected_count), (2, 1, 0));
	}
}
