//! The root-level messages forming the first layer of the message system architecture.

pub mod bridge;
pub mod defer;
pub mod document;
pub mod frontend;
pub mod message;
pub mod message_handler;
pub mod panel;
pub mod prelude;
