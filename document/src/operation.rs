use crate::LayerId;

use glam::DVec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
/// Operations that can be performed to mutate the document.
/// Paths of added layers end with the ID the new layer should receive.
pub enum Operation {
	AddShape {
		path: Vec<LayerId>,
		insert_index: isize,
		position: DVec2,
		size: DVec2,
	},
	AddFolder {
		path: Vec<LayerId>,
		insert_index: isize,
	},
	AddAnnotation {
		path: Vec<LayerId>,
		insert_index: isize,
		text: String,
	},
	SetLayerPosition {
		path: Vec<LayerId>,
		position: DVec2,
	},
	/// Reparents the layer into `folder`, placing it above all of its new siblings.
	MoveLayerToEnd {
		path: Vec<LayerId>,
		folder: Vec<LayerId>,
	},
	DeleteLayer {
		path: Vec<LayerId>,
	},
	SetSelection {
		paths: Vec<Vec<LayerId>>,
	},
}
