use stack_shuffle_document::DocumentError;

use thiserror::Error;

/// The error type used by the plugin.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PluginError {
	/// The user-facing message shown when too few elements are selected for a command.
	#[error("Please select at least {required} element{}", plural_suffix(.required))]
	InsufficientSelection { required: usize },

	#[error("Unknown message type \"{0}\"")]
	UnknownMessage(String),

	#[error("Malformed message:\n{0}")]
	MalformedMessage(String),

	#[error("The bridge between the document and the panel is closed")]
	BridgeClosed,

	#[error("The operation caused a document error:\n{0}")]
	Document(#[from] DocumentError),
}

pub(crate) fn plural_suffix(count: &usize) -> &'static str {
	if *count > 1 { "s" } else { "" }
}
