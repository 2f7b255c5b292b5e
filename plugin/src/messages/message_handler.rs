use super::message::Message;

use std::collections::VecDeque;

pub trait MessageHandler<M, C> {
	/// Reacts to `message`, pushing any follow-up messages to `responses`.
	fn process_message(&mut self, message: M, responses: &mut VecDeque<Message>, context: C);
}

/// Shorthand for queueing anything that converts into a [Message].
pub trait Responses {
	fn add(&mut self, message: impl Into<Message>);
}

impl Responses for VecDeque<Message> {
	fn add(&mut self, message: impl Into<Message>) {
		self.push_back(message.into());
	}
}
