use crate::layers::annotation_layer::AnnotationLayer;
use crate::layers::folder_layer::FolderLayer;
use crate::layers::layer_info::{Layer, LayerDataType};
use crate::layers::shape_layer::ShapeLayer;
use crate::{DocumentError, DocumentResponse, Operation};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A number that identifies a layer.
/// This does not technically need to be unique globally, only within a folder.
pub type LayerId = u64;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Document {
	/// The root layer, a [FolderLayer](crate::layers::folder_layer::FolderLayer) that contains all other [Layers](crate::layers::layer_info::Layer).
	pub root: Layer,
	/// Paths of the selected layers in the order they were selected.
	#[serde(default)]
	selection: Vec<Vec<LayerId>>,
}

impl Default for Document {
	fn default() -> Self {
		Self {
			root: Layer::new(LayerDataType::Folder(FolderLayer::default())),
			selection: Vec::new(),
		}
	}
}

impl Document {
	/// Reads a document from its RON representation, rejecting trees whose folders are inconsistent.
	/// A path listed more than once in the selection is kept at its first position.
	pub fn with_content(serialized_content: &str) -> Result<Self, DocumentError> {
		let mut document: Document = ron::from_str(serialized_content).map_err(|e| DocumentError::InvalidFile(e.to_string()))?;

		let root = document.root.as_folder().map_err(|_| DocumentError::InvalidFile("The root layer must be a folder".into()))?;
		if !root.is_consistent() {
			return Err(DocumentError::InvalidFile("A folder lists a different number of ids than layers, or repeats an id".into()));
		}
		if let Some(path) = document.selection.iter().find(|path| path.is_empty() || document.layer(path).is_err()) {
			return Err(DocumentError::InvalidFile(format!("The selection refers to a missing layer at {path:?}")));
		}
		document.selection = unique_paths(std::mem::take(&mut document.selection));

		Ok(document)
	}

	pub fn serialize_document(&self) -> Result<String, DocumentError> {
		ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()).map_err(|e| DocumentError::InvalidFile(e.to_string()))
	}

	/// Returns a reference to the requested folder. Fails if the path does not exist,
	/// or if the requested layer is not of type folder.
	pub fn folder(&self, path: impl AsRef<[LayerId]>) -> Result<&FolderLayer, DocumentError> {
		let mut root = &self.root;
		for id in path.as_ref() {
			root = root.as_folder()?.layer(*id).ok_or_else(|| DocumentError::LayerNotFound(path.as_ref().into()))?;
		}
		root.as_folder()
	}

	/// Returns a mutable reference to the requested folder. Fails if the path does not exist,
	/// or if the requested layer is not of type folder.
	fn folder_mut(&mut self, path: &[LayerId]) -> Result<&mut FolderLayer, DocumentError> {
		let mut root = &mut self.root;
		for id in path {
			root = root.as_folder_mut()?.layer_mut(*id).ok_or_else(|| DocumentError::LayerNotFound(path.into()))?;
		}
		root.as_folder_mut()
	}

	/// Returns a reference to the layer or folder at the path.
	pub fn layer(&self, path: &[LayerId]) -> Result<&Layer, DocumentError> {
		if path.is_empty() {
			return Ok(&self.root);
		}
		let (folder_path, id) = split_path(path)?;
		self.folder(folder_path)?.layer(id).ok_or_else(|| DocumentError::LayerNotFound(path.into()))
	}

	/// Returns a mutable reference to the layer or folder at the path.
	pub fn layer_mut(&mut self, path: &[LayerId]) -> Result<&mut Layer, DocumentError> {
		if path.is_empty() {
			return Ok(&mut self.root);
		}
		let (folder_path, id) = split_path(path)?;
		self.folder_mut(folder_path)?.layer_mut(id).ok_or_else(|| DocumentError::LayerNotFound(path.into()))
	}

	/// Paths of all layers below `path`, depth first in draw order.
	pub fn descendant_paths(&self, path: &[LayerId]) -> Vec<Vec<LayerId>> {
		let mut paths = Vec::new();
		if let Ok(folder) = self.folder(path) {
			for id in folder.list_layers() {
				let child = [path, &[*id]].concat();
				let nested = self.descendant_paths(&child);
				paths.push(child);
				paths.extend(nested);
			}
		}
		paths
	}

	/// Inserts `layer` at `path`, whose last element is the ID the layer receives.
	/// An existing layer at the same path is replaced in place.
	fn set_layer(&mut self, path: &[LayerId], layer: Layer, insert_index: isize) -> Result<(), DocumentError> {
		let (folder_path, id) = split_path(path)?;
		let folder = self.folder_mut(folder_path)?;
		if let Some(folder_layer) = folder.layer_mut(id) {
			*folder_layer = layer;
			return Ok(());
		}
		folder.add_layer(layer, Some(id), insert_index).ok_or(DocumentError::IndexOutOfBounds)?;
		Ok(())
	}

	/// Adds a new layer to the folder specified by `path`.
	/// Passing a negative `insert_index` indexes relative to the end.
	/// -1 is equivalent to adding the layer to the top.
	pub fn add_layer(&mut self, path: &[LayerId], layer: Layer, insert_index: isize) -> Result<LayerId, DocumentError> {
		let folder = self.folder_mut(path)?;
		folder.add_layer(layer, None, insert_index).ok_or(DocumentError::IndexOutOfBounds)
	}

	/// Deletes the layer specified by `path`, also dropping it and its descendants from the selection.
	pub fn delete(&mut self, path: &[LayerId]) -> Result<Layer, DocumentError> {
		let (folder_path, id) = split_path(path)?;
		let layer = self.folder_mut(folder_path)?.remove_layer(id)?;
		self.selection.retain(|selected| !selected.starts_with(path));
		Ok(layer)
	}

	/// Moves the top-left corner of the shape at `path`.
	pub fn set_position(&mut self, path: &[LayerId], position: DVec2) -> Result<(), DocumentError> {
		self.layer_mut(path)?.as_shape_mut()?.position = position;
		Ok(())
	}

	pub fn selection(&self) -> &[Vec<LayerId>] {
		&self.selection
	}

	/// Replaces the selection. Every path must point to an existing layer other than the root.
	/// Returns whether the selection is different than before.
	pub fn set_selection(&mut self, paths: Vec<Vec<LayerId>>) -> Result<bool, DocumentError> {
		for path in &paths {
			if path.is_empty() {
				return Err(DocumentError::InvalidPath);
			}
			self.layer(path)?;
		}
		let unique = unique_paths(paths);

		let changed = unique != self.selection;
		self.selection = unique;
		Ok(changed)
	}

	/// Moves the layer at `path` into the folder at `folder_path`, above all of its new siblings.
	/// The layer keeps its ID unless the destination already uses it. Returns the new path of the layer.
	pub fn move_layer_to_end(&mut self, path: &[LayerId], folder_path: &[LayerId]) -> Result<Vec<LayerId>, DocumentError> {
		let (old_folder_path, id) = split_path(path)?;
		if folder_path.starts_with(path) {
			return Err(DocumentError::InvalidPath);
		}
		self.folder(folder_path)?;

		if old_folder_path == folder_path {
			self.folder_mut(folder_path)?.move_layer_to_end(id)?;
			return Ok(path.to_vec());
		}

		// The ID is settled before the layer leaves its folder so a full destination cannot drop it
		let destination = self.folder(folder_path)?;
		let new_id = destination.assignable_id(Some(id)).or_else(|| destination.assignable_id(None)).ok_or(DocumentError::IndexOutOfBounds)?;
		let layer = self.folder_mut(old_folder_path)?.remove_layer(id)?;
		self.folder_mut(folder_path)?.add_layer(layer, Some(new_id), -1).ok_or(DocumentError::IndexOutOfBounds)?;
		let new_path = [folder_path, &[new_id]].concat();

		for selected in self.selection.iter_mut() {
			if selected.starts_with(path) {
				*selected = [new_path.as_slice(), &selected[path.len()..]].concat();
			}
		}

		Ok(new_path)
	}

	/// Mutate the document by applying the `operation` to it. If the operation necessitates a
	/// reaction from the frontend, responses may be returned.
	pub fn handle_operation(&mut self, operation: Operation) -> Result<Option<Vec<DocumentResponse>>, DocumentError> {
		use DocumentResponse::*;

		trace!("Applying operation {operation:?}");

		let responses = match operation {
			Operation::AddShape { path, insert_index, position, size } => {
				let layer = Layer::new(LayerDataType::Shape(ShapeLayer::new(position, size)));
				self.set_layer(&path, layer, insert_index)?;
				Some(vec![CreatedLayer { path }])
			}
			Operation::AddFolder { path, insert_index } => {
				self.set_layer(&path, Layer::new_folder(), insert_index)?;
				Some(vec![CreatedLayer { path }])
			}
			Operation::AddAnnotation { path, insert_index, text } => {
				let layer = Layer::new(LayerDataType::Annotation(AnnotationLayer::new(text)));
				self.set_layer(&path, layer, insert_index)?;
				Some(vec![CreatedLayer { path }])
			}
			Operation::SetLayerPosition { path, position } => {
				self.set_position(&path, position)?;
				Some(vec![LayerChanged { path }])
			}
			Operation::MoveLayerToEnd { path, folder } => {
				let old_folder = split_path(&path)?.0.to_vec();
				let new_path = self.move_layer_to_end(&path, &folder)?;
				let mut responses = vec![FolderChanged { path: folder.clone() }];
				if old_folder != folder {
					responses.insert(0, FolderChanged { path: old_folder });
				}
				responses.push(LayerChanged { path: new_path });
				Some(responses)
			}
			Operation::DeleteLayer { path } => {
				let mut responses: Vec<_> = self.descendant_paths(&path).into_iter().map(|path| DeletedLayer { path }).collect();
				let selected_before = self.selection.len();

				self.delete(&path)?;

				let (folder, _) = split_path(&path)?;
				responses.insert(0, DeletedLayer { path: path.clone() });
				responses.push(FolderChanged { path: folder.to_vec() });
				if self.selection.len() != selected_before {
					responses.push(SelectionChanged);
				}
				Some(responses)
			}
			Operation::SetSelection { paths } => {
				let changed = self.set_selection(paths)?;
				changed.then(|| vec![SelectionChanged])
			}
		};

		Ok(responses)
	}
}

fn unique_paths(paths: Vec<Vec<LayerId>>) -> Vec<Vec<LayerId>> {
	let mut unique: Vec<Vec<LayerId>> = Vec::with_capacity(paths.len());
	for path in paths {
		if !unique.contains(&path) {
			unique.push(path);
		}
	}
	unique
}

fn split_path(path: &[LayerId]) -> Result<(&[LayerId], LayerId), DocumentError> {
	let (id, path) = path.split_last().ok_or(DocumentError::InvalidPath)?;
	Ok((path, *id))
}

#[cfg(test)]
mod test {
	use super::*;

	use pretty_assertions::assert_eq;

	fn add_shape(document: &mut Document, path: &[LayerId], position: (f64, f64), size: (f64, f64)) {
		document
			.handle_operation(Operation::AddShape {
				path: path.to_vec(),
				insert_index: -1,
				position: position.into(),
				size: size.into(),
			})
			.unwrap();
	}

	fn ids(document: &Document, path: &[LayerId]) -> Vec<LayerId> {
		document.folder(path).unwrap().list_layers().to_vec()
	}

	/// Root holds shapes 0 and 1 and folder 2, which holds shapes 0 and 1.
	fn nested_document() -> Document {
		let mut document = Document::default();
		add_shape(&mut document, &[0], (0., 0.), (10., 10.));
		add_shape(&mut document, &[1], (20., 20.), (10., 10.));
		document.handle_operation(Operation::AddFolder { path: vec![2], insert_index: -1 }).unwrap();
		add_shape(&mut document, &[2, 0], (5., 5.), (1., 1.));
		add_shape(&mut document, &[2, 1], (50., 0.), (2., 2.));
		document
	}

	#[test]
	fn the_last_layer_id_is_never_assigned() {
		let mut document = nested_document();
		let operation = Operation::AddShape {
			path: vec![LayerId::MAX],
			insert_index: -1,
			position: DVec2::ZERO,
			size: DVec2::ONE,
		};
		assert_eq!(document.handle_operation(operation), Err(DocumentError::IndexOutOfBounds));
		assert_eq!(ids(&document, &[]), vec![0, 1, 2]);
	}

	#[test]
	fn moves_into_a_full_folder_keep_the_layer() {
		let content = r#"(
			root: (data: Folder((
				next_assignment_id: 18446744073709551615,
				layer_ids: [0],
				layers: [(data: Folder((layer_ids: [0], layers: [(data: Annotation((text: "note")))])))],
			))),
		)"#;
		let mut document = Document::with_content(content).unwrap();

		assert_eq!(document.move_layer_to_end(&[0, 0], &[]), Err(DocumentError::IndexOutOfBounds));
		assert_eq!(ids(&document, &[0]), vec![0]);
		assert_eq!(ids(&document, &[]), vec![0]);
	}

	#[test]
	fn adding_to_a_used_path_replaces_the_layer() {
		let mut document = nested_document();
		add_shape(&mut document, &[1], (-1., -1.), (1., 1.));
		assert_eq!(ids(&document, &[]), vec![0, 1, 2]);
		assert_eq!(document.layer(&[1]).unwrap().as_shape().unwrap().position, DVec2::new(-1., -1.));
	}

	#[test]
	fn selection_paths_must_exist() {
		let mut document = nested_document();
		assert_eq!(document.set_selection(vec![vec![0], vec![7]]), Err(DocumentError::LayerNotFound(vec![7])));
		assert_eq!(document.set_selection(vec![vec![]]), Err(DocumentError::InvalidPath));
		assert_eq!(document.set_selection(vec![vec![2, 1], vec![0], vec![2, 1]]), Ok(true));
		assert_eq!(document.selection(), &[vec![2, 1], vec![0]]);
		assert_eq!(document.set_selection(vec![vec![2, 1], vec![0]]), Ok(false));
	}

	#[test]
	fn unchanged_selection_produces_no_response() {
		let mut document = nested_document();
		let responses = document.handle_operation(Operation::SetSelection { paths: vec![vec![0]] }).unwrap();
		assert_eq!(responses, Some(vec![DocumentResponse::SelectionChanged]));
		let responses = document.handle_operation(Operation::SetSelection { paths: vec![vec![0]] }).unwrap();
		assert_eq!(responses, None);
	}

	#[test]
	fn deleting_a_folder_prunes_the_selection() {
		let mut document = nested_document();
		document.set_selection(vec![vec![2, 0], vec![1]]).unwrap();

		let responses = document.handle_operation(Operation::DeleteLayer { path: vec![2] }).unwrap().unwrap();

		assert_eq!(document.selection(), &[vec![1]]);
		assert_eq!(responses.first(), Some(&DocumentResponse::DeletedLayer { path: vec![2] }));
		assert!(responses.contains(&DocumentResponse::DeletedLayer { path: vec![2, 1] }));
		assert_eq!(responses.last(), Some(&DocumentResponse::SelectionChanged));
	}

	#[test]
	fn move_layer_to_end_within_its_folder() {
		let mut document = nested_document();
		assert_eq!(document.move_layer_to_end(&[0], &[]), Ok(vec![0]));
		assert_eq!(ids(&document, &[]), vec![1, 2, 0]);
	}

	#[test]
	fn move_layer_to_end_across_folders_updates_the_selection() {
		let mut document = nested_document();
		document.set_selection(vec![vec![2, 1]]).unwrap();

		let new_path = document.move_layer_to_end(&[2, 1], &[]).unwrap();

		// ID 1 is taken in the root folder so a fresh one is assigned
		assert_eq!(new_path, vec![3]);
		assert_eq!(ids(&document, &[]), vec![0, 1, 2, 3]);
		assert_eq!(ids(&document, &[2]), vec![0]);
		assert_eq!(document.selection(), &[vec![3]]);
	}

	#[test]
	fn folders_cannot_move_into_themselves() {
		let mut document = nested_document();
		assert_eq!(document.move_layer_to_end(&[2], &[2]), Err(DocumentError::InvalidPath));
		assert_eq!(document.move_layer_to_end(&[0], &[1]), Err(DocumentError::NotAFolder));
	}

	#[test]
	fn only_shapes_can_be_positioned() {
		let mut document = nested_document();
		assert_eq!(document.set_position(&[2], DVec2::ZERO), Err(DocumentError::NotAShape));
		document.set_position(&[2, 0], DVec2::new(3., 4.)).unwrap();
		assert_eq!(document.layer(&[2, 0]).unwrap().as_shape().unwrap().position, DVec2::new(3., 4.));
	}

	#[test]
	fn serialized_documents_load_again() {
		let mut document = nested_document();
		document.set_selection(vec![vec![1], vec![2, 0]]).unwrap();

		let serialized = document.serialize_document().unwrap();
		assert_eq!(Document::with_content(&serialized), Ok(document));
	}

	#[test]
	fn inconsistent_files_are_rejected() {
		let content = "(root: (data: Folder((layer_ids: [0, 1], layers: []))))";
		assert!(matches!(Document::with_content(content), Err(DocumentError::InvalidFile(_))));

		let content = "(root: (data: Folder((layer_ids: [], layers: []))), selection: [[4]])";
		assert!(matches!(Document::with_content(content), Err(DocumentError::InvalidFile(_))));

		assert!(matches!(Document::with_content("not ron"), Err(DocumentError::InvalidFile(_))));
	}

	#[test]
	fn repeated_selection_paths_load_once() {
		let content = r#"(
			root: (data: Folder((
				layer_ids: [0, 1],
				layers: [
					(data: Shape((position: (0.0, 0.0), size: (1.0, 1.0)))),
					(data: Shape((position: (5.0, 0.0), size: (1.0, 1.0)))),
				],
			))),
			selection: [[1], [0], [1], [0]],
		)"#;
		let document = Document::with_content(content).unwrap();
		assert_eq!(document.selection(), &[vec![1], vec![0]]);
	}

	#[test]
	fn hand_written_scenes_load() {
		let content = r#"(
			root: (data: Folder((
				layer_ids: [3, 8],
				layers: [
					(name: Some("Box"), data: Shape((position: (1.0, 2.0), size: (3.0, 4.0)))),
					(visible: false, data: Annotation((text: "Hello"))),
				],
			))),
			selection: [[3], [8]],
		)"#;
		let document = Document::with_content(content).unwrap();

		assert_eq!(document.selection(), &[vec![3], vec![8]]);
		assert_eq!(document.layer(&[3]).unwrap().as_shape().unwrap().size, DVec2::new(3., 4.));
		assert!(!document.layer(&[8]).unwrap().visible);

		// Files without an assignment counter hand out the lowest free ID first
		let mut document = document;
		assert_eq!(document.add_layer(&[], Layer::new_folder(), -1), Ok(0));
	}
}
