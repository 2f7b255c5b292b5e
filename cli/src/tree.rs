use stack_shuffle_document::layers::folder_layer::FolderLayer;
use stack_shuffle_document::layers::layer_info::LayerDataType;
use stack_shuffle_document::{Document, LayerId};

use std::fmt::{self, Write};

/// Draws the layer tree with the topmost layer of each folder first. Selected layers are marked with `*`.
pub fn layer_tree(document: &Document) -> String {
	let mut tree = String::new();
	if let Ok(root) = document.root.as_folder() {
		// Writing into a `String` cannot fail
		let _ = write_folder(&mut tree, root, &mut Vec::new(), document.selection());
	}
	tree
}

fn write_folder(tree: &mut impl Write, folder: &FolderLayer, path: &mut Vec<LayerId>, selection: &[Vec<LayerId>]) -> fmt::Result {
	for (id, layer) in folder.list_layers().iter().zip(folder.layers()).rev() {
		path.push(*id);

		let indent = "  ".repeat(path.len() - 1);
		let marker = if selection.contains(path) { "*" } else { " " };
		let name = layer.name.as_deref().map(|name| format!(" \"{name}\"")).unwrap_or_default();
		let hidden = if layer.visible { "" } else { " (hidden)" };

		match &layer.data {
			LayerDataType::Folder(_) => writeln!(tree, "{marker} {indent}{id}{name}: folder{hidden}")?,
			LayerDataType::Shape(shape) => writeln!(
				tree,
				"{marker} {indent}{id}{name}: shape at ({}, {}) size {}x{}{hidden}",
				shape.position.x, shape.position.y, shape.size.x, shape.size.y
			)?,
			LayerDataType::Annotation(annotation) => writeln!(tree, "{marker} {indent}{id}{name}: annotation {:?}{hidden}", annotation.text)?,
		}

		if let LayerDataType::Folder(child) = &layer.data {
			write_folder(tree, child, path, selection)?;
		}
		path.pop();
	}
	Ok(())
}
