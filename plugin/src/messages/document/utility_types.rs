use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The smallest axis-aligned box covering a set of nodes.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Bounds {
	/// Combines nodes given as `(position, size)` pairs. Returns `None` when there are no nodes.
	pub fn combine(nodes: impl IntoIterator<Item = (DVec2, DVec2)>) -> Option<Self> {
		let [min, max] = nodes.into_iter().map(|(position, size)| [position, position + size]).reduce(|a, b| [a[0].min(b[0]), a[1].max(b[1])])?;
		Some(Self {
			x: min.x,
			y: min.y,
			width: max.x - min.x,
			height: max.y - min.y,
		})
	}

	pub fn center(&self) -> DVec2 {
		DVec2::new(self.x + self.width / 2., self.y + self.height / 2.)
	}
}
