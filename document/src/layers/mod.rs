//! # Layers
//! A document consists of a tree of [Layers](layer_info::Layer).
//! There are currently these different types of layers:
//! * [Folder layers](folder_layer::FolderLayer), which encapsulate sub-layers
//! * [Shape layers](shape_layer::ShapeLayer), which have a position and a size on the canvas
//! * [Annotation layers](annotation_layer::AnnotationLayer), which carry content but no geometry of their own
//!
//! ## Draw order
//! Sibling layers are drawn in the order they are stored in their folder, so the last layer of a folder is drawn on top.

/// Contains the [AnnotationLayer](annotation_layer::AnnotationLayer) type, a layer without geometry.
pub mod annotation_layer;
/// Contains the [FolderLayer](folder_layer::FolderLayer) type that encapsulates other layers, including more folders.
pub mod folder_layer;
/// Contains the base [Layer](layer_info::Layer) type, an abstraction over the different types of layers.
pub mod layer_info;
/// Contains the [ShapeLayer](shape_layer::ShapeLayer) type, an axis-aligned box on the canvas.
pub mod shape_layer;
