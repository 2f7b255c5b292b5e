use super::PluginHost;
use crate::PluginError;

use stack_shuffle_document::{Document, DocumentError, DocumentResponse, LayerId, Operation};

use glam::DVec2;

/// Hosts the plugin on an in-memory [Document]. Nodes are layer paths.
#[derive(Debug, Clone, Default)]
pub struct DocumentHost {
	document: Document,
	notifications: Vec<String>,
	selection_changed: bool,
}

impl DocumentHost {
	pub fn new(document: Document) -> Self {
		Self {
			document,
			notifications: Vec::new(),
			selection_changed: false,
		}
	}

	pub fn document(&self) -> &Document {
		&self.document
	}

	pub fn into_document(self) -> Document {
		self.document
	}

	/// Applies a user edit to the document, raising a selection change notification if the edit changed the selection.
	pub fn handle_operation(&mut self, operation: Operation) -> Result<(), DocumentError> {
		let responses = self.document.handle_operation(operation)?.unwrap_or_default();
		if responses.contains(&DocumentResponse::SelectionChanged) {
			self.selection_changed = true;
		}
		Ok(())
	}

	/// Every notification shown since the last call, oldest first.
	pub fn take_notifications(&mut self) -> Vec<String> {
		std::mem::take(&mut self.notifications)
	}

	pub fn notifications(&self) -> &[String] {
		&self.notifications
	}
}

impl PluginHost for DocumentHost {
	type Node = Vec<LayerId>;

	fn selection(&self) -> Vec<Self::Node> {
		self.document.selection().to_vec()
	}

	fn position(&self, node: &Self::Node) -> Option<DVec2> {
		Some(self.document.layer(node).ok()?.as_shape().ok()?.position)
	}

	fn size(&self, node: &Self::Node) -> Option<DVec2> {
		Some(self.document.layer(node).ok()?.as_shape().ok()?.size)
	}

	fn set_position(&mut self, node: &Self::Node, position: DVec2) -> Result<(), PluginError> {
		Ok(self.document.set_position(node, position)?)
	}

	fn parent(&self, node: &Self::Node) -> Option<Self::Node> {
		node.split_last().map(|(_, parent)| parent.to_vec())
	}

	fn reparent_to_end(&mut self, node: &Self::Node, parent: &Self::Node) -> Result<(), PluginError> {
		self.document.move_layer_to_end(node, parent)?;
		Ok(())
	}

	fn notify(&mut self, message: &str) {
		info!("Notification: {message}");
		self.notifications.push(message.to_string());
	}

	fn take_selection_change(&mut self) -> bool {
		std::mem::take(&mut self.selection_changed)
	}
}
