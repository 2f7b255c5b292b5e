use crate::messages::prelude::*;

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
struct ScheduledMessage {
	deadline: Duration,
	sequence: u64,
	message: Message,
}

/// Holds deferred messages against a virtual clock that only moves when told to.
/// Messages become due in deadline order, ties broken by the order they were scheduled in.
#[derive(Debug, Default)]
pub struct DeferMessageHandler {
	now: Duration,
	pending: Vec<ScheduledMessage>,
	next_sequence: u64,
}

impl MessageHandler<DeferMessage, ()> for DeferMessageHandler {
	fn process_message(&mut self, message: DeferMessage, _responses: &mut VecDeque<Message>, _context: ()) {
		match message {
			DeferMessage::After { delay, message } => {
				let scheduled = ScheduledMessage {
					deadline: self.now + delay,
					sequence: self.next_sequence,
					message: *message,
				};
				self.next_sequence += 1;

				let index = self.pending.partition_point(|pending| (pending.deadline, pending.sequence) <= (scheduled.deadline, scheduled.sequence));
				self.pending.insert(index, scheduled);
			}
		}
	}
}

impl DeferMessageHandler {
	/// Time elapsed on the virtual clock since the session started.
	pub fn now(&self) -> Duration {
		self.now
	}

	pub fn next_deadline(&self) -> Option<Duration> {
		self.pending.first().map(|pending| pending.deadline)
	}

	pub fn pending_count(&self) -> usize {
		self.pending.len()
	}

	/// Takes the earliest message due no later than `until`, moving the clock to its deadline.
	pub fn pop_due(&mut self, until: Duration) -> Option<Message> {
		if self.next_deadline()? > until {
			return None;
		}
		let scheduled = self.pending.remove(0);
		self.now = self.now.max(scheduled.deadline);
		Some(scheduled.message)
	}

	/// Moves the clock forward to `until`. The clock never runs backwards.
	pub fn advance_to(&mut self, until: Duration) {
		self.now = self.now.max(until);
	}
}
