mod defer_message;
mod defer_message_handler;

#[doc(inline)]
pub use defer_message::DeferMessage;
#[doc(inline)]
pub use defer_message_handler::DeferMessageHandler;
