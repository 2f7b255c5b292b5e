use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box on the canvas, addressed by its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Default)]
pub struct ShapeLayer {
	/// Top-left corner in document space
	pub position: DVec2,
	/// Width and height, never negative
	pub size: DVec2,
}

impl ShapeLayer {
	pub fn new(position: DVec2, size: DVec2) -> Self {
		Self { position, size: size.abs() }
	}
}
