use super::LayerId;

use thiserror::Error;

/// A set of different errors that can occur when using this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
	#[error("No layer exists at {0:?}")]
	LayerNotFound(Vec<LayerId>),
	#[error("The path does not point to a layer")]
	InvalidPath,
	#[error("The insert index is outside of the folder")]
	IndexOutOfBounds,
	#[error("The layer is not a folder")]
	NotAFolder,
	#[error("The layer has no position or size")]
	NotAShape,
	#[error("The document could not be read:\n{0}")]
	InvalidFile(String),
}
