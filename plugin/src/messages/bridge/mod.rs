//! The sandboxed channel between the document controller and the panel.
//! Anything crossing it is serialized to JSON on one side and parsed again on the other.

mod bridge_message;
pub mod channel;

#[doc(inline)]
pub use bridge_message::{BridgeMessage, PluginCommand, PluginEvent, Position};
#[doc(inline)]
pub use channel::{BridgeDirection, BridgeTraffic, DocumentEndpoint, PanelEndpoint, channel};
