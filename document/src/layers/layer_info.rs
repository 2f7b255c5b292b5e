use super::annotation_layer::AnnotationLayer;
use super::folder_layer::FolderLayer;
use super::shape_layer::ShapeLayer;
use crate::DocumentError;

use serde::{Deserialize, Serialize};

// =============
// LayerDataType
// =============

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
/// Represents different types of layers.
pub enum LayerDataType {
	/// A layer that wraps a [FolderLayer] struct.
	Folder(FolderLayer),
	/// A layer that wraps a [ShapeLayer] struct.
	Shape(ShapeLayer),
	/// A layer that wraps an [AnnotationLayer] struct.
	Annotation(AnnotationLayer),
}

// =====
// Layer
// =====

fn return_true() -> bool {
	true
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Layer {
	/// Whether or not the layer is drawn. Hidden layers can still be selected and moved.
	#[serde(default = "return_true")]
	pub visible: bool,
	/// The user-given name of the layer.
	#[serde(default)]
	pub name: Option<String>,
	/// The type of layer, such as folder or shape.
	pub data: LayerDataType,
}

impl Layer {
	pub fn new(data: LayerDataType) -> Self {
		Self { visible: true, name: None, data }
	}

	pub fn new_folder() -> Self {
		Self::new(LayerDataType::Folder(FolderLayer::default()))
	}

	/// Get a reference to the Shape wrapped by the layer.
	/// This operation will fail if the [Layer type](Layer::data) is not `LayerDataType::Shape`.
	pub fn as_shape(&self) -> Result<&ShapeLayer, DocumentError> {
		match &self.data {
			LayerDataType::Shape(shape) => Ok(shape),
			_ => Err(DocumentError::NotAShape),
		}
	}

	pub fn as_shape_mut(&mut self) -> Result<&mut ShapeLayer, DocumentError> {
		match &mut self.data {
			LayerDataType::Shape(shape) => Ok(shape),
			_ => Err(DocumentError::NotAShape),
		}
	}

	/// Get a mutable reference to the Folder wrapped by the layer.
	/// This operation will fail if the [Layer type](Layer::data) is not `LayerDataType::Folder`.
	pub fn as_folder_mut(&mut self) -> Result<&mut FolderLayer, DocumentError> {
		match &mut self.data {
			LayerDataType::Folder(f) => Ok(f),
			_ => Err(DocumentError::NotAFolder),
		}
	}

	/// Get a reference to the Folder wrapped by the layer.
	/// This operation will fail if the [Layer type](Layer::data) is not `LayerDataType::Folder`.
	pub fn as_folder(&self) -> Result<&FolderLayer, DocumentError> {
		match &self.data {
			LayerDataType::Folder(f) => Ok(f),
			_ => Err(DocumentError::NotAFolder),
		}
	}
}
