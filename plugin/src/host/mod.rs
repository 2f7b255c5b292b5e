//! The capabilities the document controller needs from the design tool that hosts the plugin.

pub mod document_host;

pub use document_host::DocumentHost;

use crate::PluginError;

use glam::DVec2;
use std::fmt::Debug;
use std::hash::Hash;

/// Access to the live document of the host application.
///
/// Nodes are opaque handles owned by the host. Geometry is optional: a node without both a
/// position and a size is skipped by the stack command but still counts towards the selection.
pub trait PluginHost {
	type Node: Clone + Eq + Hash + Debug;

	/// The nodes currently selected by the user, in selection order.
	fn selection(&self) -> Vec<Self::Node>;

	/// Top-left corner of the node.
	fn position(&self, node: &Self::Node) -> Option<DVec2>;

	/// Width and height of the node.
	fn size(&self, node: &Self::Node) -> Option<DVec2>;

	fn set_position(&mut self, node: &Self::Node, position: DVec2) -> Result<(), PluginError>;

	/// The immediate parent of the node, or `None` for parentless nodes.
	fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

	/// Re-inserts `node` as the last child of `parent`, placing it above its siblings.
	fn reparent_to_end(&mut self, node: &Self::Node, parent: &Self::Node) -> Result<(), PluginError>;

	/// Shows a short-lived message to the user.
	fn notify(&mut self, message: &str);

	/// Returns `true` once after the selection was changed by the user.
	fn take_selection_change(&mut self) -> bool;

	fn geometry(&self, node: &Self::Node) -> Option<(DVec2, DVec2)> {
		Some((self.position(node)?, self.size(node)?))
	}
}
