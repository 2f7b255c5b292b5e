mod panel_message;
mod panel_message_handler;

pub mod panel_layout;
pub mod utility_types;

#[doc(inline)]
pub use panel_message::PanelMessage;
#[doc(inline)]
pub use panel_message_handler::{PanelMessageContext, PanelMessageHandler};
