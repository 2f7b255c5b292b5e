use crate::messages::prelude::*;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Message {
	NoOp,

	Bridge(BridgeMessage),
	Defer(DeferMessage),
	Document(DocumentMessage),
	Frontend(FrontendMessage),
	Panel(PanelMessage),
}

macro_rules! child_message {
	($child:ty, $variant:ident) => {
		impl From<$child> for Message {
			fn from(message: $child) -> Self {
				Message::$variant(message)
			}
		}
	};
}

child_message!(BridgeMessage, Bridge);
child_message!(DeferMessage, Defer);
child_message!(DocumentMessage, Document);
child_message!(FrontendMessage, Frontend);
child_message!(PanelMessage, Panel);

impl Message {
	/// The name of the message including the variant of its child, like `Panel::ClickStack`.
	pub fn name(&self) -> String {
		fn variant_name(debug: String) -> String {
			debug.split([' ', '(', '{']).next().unwrap_or_default().to_string()
		}

		match self {
			Message::NoOp => "NoOp".to_string(),
			Message::Bridge(message) => format!("Bridge::{}", variant_name(format!("{message:?}"))),
			Message::Defer(message) => format!("Defer::{}", variant_name(format!("{message:?}"))),
			Message::Document(message) => format!("Document::{}", variant_name(format!("{message:?}"))),
			Message::Frontend(message) => format!("Frontend::{}", variant_name(format!("{message:?}"))),
			Message::Panel(message) => format!("Panel::{}", variant_name(format!("{message:?}"))),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn names_include_the_child_variant() {
		assert_eq!(Message::from(PanelMessage::ClickStack).name(), "Panel::ClickStack");
		assert_eq!(Message::from(PanelMessage::SelectionChanged { count: 2 }).name(), "Panel::SelectionChanged");
		assert_eq!(Message::from(BridgeMessage::PostCommand(PluginCommand::UiReady)).name(), "Bridge::PostCommand");
		assert_eq!(Message::NoOp.name(), "NoOp");
	}
}
