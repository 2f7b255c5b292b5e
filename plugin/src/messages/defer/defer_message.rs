use crate::messages::prelude::*;

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum DeferMessage {
	/// Dispatch `message` once the clock has advanced by `delay`. Scheduled messages cannot be cancelled.
	After { delay: Duration, message: Box<Message> },
}

impl DeferMessage {
	pub fn after(delay: Duration, message: impl Into<Message>) -> Self {
		DeferMessage::After {
			delay,
			message: Box::new(message.into()),
		}
	}
}
