// Root
pub use crate::messages::message::Message;
pub use crate::messages::message_handler::{MessageHandler, Responses};

// Message, MessageHandler
pub use crate::messages::bridge::{BridgeMessage, PluginCommand, PluginEvent};
pub use crate::messages::defer::{DeferMessage, DeferMessageHandler};
pub use crate::messages::document::{DocumentMessage, DocumentMessageContext, DocumentMessageHandler};
pub use crate::messages::frontend::FrontendMessage;
pub use crate::messages::panel::{PanelMessage, PanelMessageContext, PanelMessageHandler};

// Others
pub use crate::config::PluginConfig;
pub use crate::host::PluginHost;
pub use crate::misc::PluginError;
pub use std::collections::VecDeque;
