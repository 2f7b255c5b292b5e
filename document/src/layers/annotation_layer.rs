use serde::{Deserialize, Serialize};

/// A layer such as a comment pin or a connector label which can be selected but has no box of its own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct AnnotationLayer {
	pub text: String,
}

impl AnnotationLayer {
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into() }
	}
}
