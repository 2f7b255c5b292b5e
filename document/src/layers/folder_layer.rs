use super::layer_info::{Layer, LayerDataType};
use crate::{DocumentError, LayerId};

use serde::{Deserialize, Serialize};

/// A layer that encapsulates other layers, including potentially more folders.
/// The contained layers are rendered in the same order they are stored, so the last one is on top.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct FolderLayer {
	/// The ID that will be assigned to the next layer that is added to the folder
	#[serde(default)]
	next_assignment_id: LayerId,
	/// The IDs of the [Layer]s contained within the Folder
	pub layer_ids: Vec<LayerId>,
	/// The [Layer]s contained in the folder
	layers: Vec<Layer>,
}

impl FolderLayer {
	/// When a insertion ID is provided, try to insert the layer with the given ID.
	/// If that ID is already used, return `None`.
	/// When no ID is provided, the next free ID is taken.
	/// Passing a negative `insert_index` indexes relative to the end.
	/// -1 is equivalent to adding the layer to the top.
	///
	/// # Example
	///
	/// ```
	/// # use stack_shuffle_document::layers::folder_layer::FolderLayer;
	/// # use stack_shuffle_document::layers::layer_info::Layer;
	/// let mut folder = FolderLayer::default();
	///
	/// let back = folder.add_layer(Layer::new_folder(), None, -1).unwrap();
	/// let front = folder.add_layer(Layer::new_folder(), None, -1).unwrap();
	/// let bottom = folder.add_layer(Layer::new_folder(), None, 0).unwrap();
	///
	/// assert_eq!(folder.layer_ids, vec![bottom, back, front]);
	/// ```
	pub fn add_layer(&mut self, layer: Layer, id: Option<LayerId>, insert_index: isize) -> Option<LayerId> {
		let mut insert_index = insert_index as i128;
		if insert_index < 0 {
			insert_index = self.layers.len() as i128 + insert_index + 1;
		}
		if insert_index < 0 || insert_index > self.layers.len() as i128 {
			return None;
		}

		let id = self.assignable_id(id)?;
		self.next_assignment_id = self.next_assignment_id.max(id + 1);

		self.layers.insert(insert_index as usize, layer);
		self.layer_ids.insert(insert_index as usize, id);
		Some(id)
	}

	/// The ID [add_layer](FolderLayer::add_layer) would give a layer, without adding it.
	/// `None` if the requested ID is taken or the IDs are exhausted. [LayerId::MAX] is never handed out,
	/// so the assignment counter can always move past the last ID.
	pub fn assignable_id(&self, id: Option<LayerId>) -> Option<LayerId> {
		let id = match id {
			Some(id) if self.layer_ids.contains(&id) => return None,
			Some(id) => id,
			None => {
				let mut id = self.next_assignment_id;
				while self.layer_ids.contains(&id) {
					id = id.checked_add(1)?;
				}
				id
			}
		};
		id.checked_add(1).map(|_| id)
	}

	/// Remove a layer with a given ID from the folder, handing it back to the caller.
	/// This operation will fail if `id` is not present in the folder.
	pub fn remove_layer(&mut self, id: LayerId) -> Result<Layer, DocumentError> {
		let position = self.position_of_layer(id)?;
		self.layer_ids.remove(position);
		Ok(self.layers.remove(position))
	}

	/// Move the layer with the given ID behind all of its siblings in the order, which places it on top.
	pub fn move_layer_to_end(&mut self, id: LayerId) -> Result<(), DocumentError> {
		let position = self.position_of_layer(id)?;
		let layer = self.layers.remove(position);
		self.layer_ids.remove(position);
		self.layers.push(layer);
		self.layer_ids.push(id);
		Ok(())
	}

	/// Returns a list of [LayerId]s in the folder.
	pub fn list_layers(&self) -> &[LayerId] {
		self.layer_ids.as_slice()
	}

	/// Get references to all the [Layer]s in the folder.
	pub fn layers(&self) -> &[Layer] {
		self.layers.as_slice()
	}

	pub fn layer(&self, id: LayerId) -> Option<&Layer> {
		let index = self.position_of_layer(id).ok()?;
		Some(&self.layers[index])
	}

	pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
		let index = self.position_of_layer(id).ok()?;
		Some(&mut self.layers[index])
	}

	/// Returns `true` if the folder contains a layer with the given [LayerId].
	pub fn folder_contains(&self, id: LayerId) -> bool {
		self.layer_ids.contains(&id)
	}

	/// Tries to find the index of a layer with the given [LayerId] within the folder.
	/// This operation will fail if no layer with a matching ID is present in the folder.
	pub fn position_of_layer(&self, layer_id: LayerId) -> Result<usize, DocumentError> {
		self.layer_ids.iter().position(|x| *x == layer_id).ok_or_else(|| DocumentError::LayerNotFound([layer_id].into()))
	}

	/// Tries to get a reference to a folder with the given [LayerId].
	/// This operation will return `None` if either no layer with `id` exists
	/// in the folder or the layer with matching ID is not a folder.
	pub fn folder(&self, id: LayerId) -> Option<&FolderLayer> {
		match self.layer(id) {
			Some(Layer {
				data: LayerDataType::Folder(folder), ..
			}) => Some(folder),
			_ => None,
		}
	}

	/// Checks that every stored ID has a layer and that no ID appears twice, recursively.
	/// Files written by hand can break both.
	pub fn is_consistent(&self) -> bool {
		let unique = self.layer_ids.iter().enumerate().all(|(index, id)| !self.layer_ids[..index].contains(id));
		unique
			&& self.layer_ids.len() == self.layers.len()
			&& self.layers.iter().all(|layer| match &layer.data {
				LayerDataType::Folder(folder) => folder.is_consistent(),
				_ => true,
			})
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::layers::shape_layer::ShapeLayer;

	use glam::DVec2;
	use pretty_assertions::assert_eq;

	fn shape(x: f64) -> Layer {
		Layer::new(LayerDataType::Shape(ShapeLayer::new(DVec2::new(x, 0.), DVec2::ONE)))
	}

	#[test]
	fn insert_index_out_of_bounds_is_rejected() {
		let mut folder = FolderLayer::default();
		assert_eq!(folder.add_layer(shape(0.), None, 1), None);
		assert_eq!(folder.add_layer(shape(0.), None, -2), None);
		assert_eq!(folder.add_layer(shape(0.), None, 0), Some(0));
	}

	#[test]
	fn explicit_ids_are_never_reused() {
		let mut folder = FolderLayer::default();
		assert_eq!(folder.add_layer(shape(0.), Some(4), -1), Some(4));
		assert_eq!(folder.add_layer(shape(1.), Some(4), -1), None);
		assert_eq!(folder.add_layer(shape(2.), None, -1), Some(5));
	}

	#[test]
	fn exhausted_ids_are_rejected() {
		let mut folder = FolderLayer::default();
		assert_eq!(folder.add_layer(shape(0.), Some(LayerId::MAX), -1), None);
		assert!(folder.list_layers().is_empty());

		folder.next_assignment_id = LayerId::MAX - 1;
		assert_eq!(folder.add_layer(shape(1.), None, -1), Some(LayerId::MAX - 1));
		assert_eq!(folder.assignable_id(None), None);
		assert_eq!(folder.add_layer(shape(2.), None, -1), None);
		// Explicit IDs below the counter still fit
		assert_eq!(folder.add_layer(shape(3.), Some(7), -1), Some(7));
	}

	#[test]
	fn move_layer_to_end_puts_layer_on_top() {
		let mut folder = FolderLayer::default();
		for x in 0..4 {
			folder.add_layer(shape(x as f64), None, -1);
		}

		folder.move_layer_to_end(1).unwrap();
		assert_eq!(folder.list_layers(), &[0, 2, 3, 1]);
		assert_eq!(folder.layer(1), Some(&shape(1.)));
		assert_eq!(folder.layers().last(), Some(&shape(1.)));

		assert_eq!(folder.move_layer_to_end(9), Err(DocumentError::LayerNotFound(vec![9])));
	}

	#[test]
	fn remove_layer_hands_back_the_layer() {
		let mut folder = FolderLayer::default();
		folder.add_layer(shape(3.), None, -1);
		assert_eq!(folder.remove_layer(0), Ok(shape(3.)));
		assert!(folder.list_layers().is_empty());
		assert!(folder.remove_layer(0).is_err());
	}
}
