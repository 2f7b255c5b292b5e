use crate::LayerId;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DocumentResponse {
	FolderChanged {
		path: Vec<LayerId>,
	},
	CreatedLayer {
		path: Vec<LayerId>,
	},
	DeletedLayer {
		path: Vec<LayerId>,
	},
	/// The layer moved or changed its content.
	LayerChanged {
		path: Vec<LayerId>,
	},
	/// The set of selected layers is different than before.
	SelectionChanged,
}

impl fmt::Display for DocumentResponse {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			DocumentResponse::FolderChanged { .. } => write!(f, "FolderChanged"),
			DocumentResponse::CreatedLayer { .. } => write!(f, "CreatedLayer"),
			DocumentResponse::LayerChanged { .. } => write!(f, "LayerChanged"),
			DocumentResponse::DeletedLayer { .. } => write!(f, "DeleteLayer"),
			DocumentResponse::SelectionChanged => write!(f, "SelectionChanged"),
		}
	}
}
