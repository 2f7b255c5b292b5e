mod document_message;
mod document_message_handler;

pub mod shuffle;
pub mod utility_types;

#[doc(inline)]
pub use document_message::DocumentMessage;
#[doc(inline)]
pub use document_message_handler::{DocumentMessageContext, DocumentMessageHandler};
