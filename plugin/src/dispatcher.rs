use crate::messages::bridge::{BridgeTraffic, DocumentEndpoint, PanelEndpoint, channel};
use crate::messages::prelude::*;

use rand_chacha::ChaCha20Rng;
use std::time::Duration;

pub struct Dispatcher<H: PluginHost> {
	message_queues: Vec<VecDeque<Message>>,
	pub responses: Vec<FrontendMessage>,
	pub message_handlers: DispatcherMessageHandlers,
	pub host: H,
	rng: ChaCha20Rng,
	config: PluginConfig,
	document_endpoint: DocumentEndpoint,
	panel_endpoint: PanelEndpoint,
	traffic: Vec<BridgeTraffic>,
}

#[derive(Debug, Default)]
pub struct DispatcherMessageHandlers {
	pub defer_message_handler: DeferMessageHandler,
	pub document_message_handler: DocumentMessageHandler,
	pub panel_message_handler: PanelMessageHandler,
}

impl<H: PluginHost> Dispatcher<H> {
	pub fn new(host: H, rng: ChaCha20Rng, config: PluginConfig) -> Self {
		let (document_endpoint, panel_endpoint) = channel();

		Self {
			message_queues: Vec::new(),
			responses: Vec::new(),
			message_handlers: DispatcherMessageHandlers::default(),
			host,
			rng,
			config,
			document_endpoint,
			panel_endpoint,
			traffic: Vec::new(),
		}
	}

	pub fn config(&self) -> &PluginConfig {
		&self.config
	}

	/// Everything that crossed the bridge since the last call, in the order it was sent.
	pub fn take_traffic(&mut self) -> Vec<BridgeTraffic> {
		std::mem::take(&mut self.traffic)
	}

	// If the deepest queues (higher index in queues list) are now empty (after being popped from) then remove them
	fn cleanup_queues(&mut self, leave_last: bool) {
		while self.message_queues.last().filter(|queue| queue.is_empty()).is_some() {
			if leave_last && self.message_queues.len() == 1 {
				break;
			}
			self.message_queues.pop();
		}
	}

	/// Add a message to a queue so that it can be executed.
	/// If `process_after_all_current` is set, all currently queued messages (including children) will be processed first.
	/// If not set, it (and its children) will be processed as soon as possible.
	pub fn schedule_execution(message_queues: &mut Vec<VecDeque<Message>>, process_after_all_current: bool, messages: impl IntoIterator<Item = Message>) {
		match message_queues.first_mut() {
			// If there are currently messages being processed and we are processing after them, add to the end of the first queue
			Some(queue) if process_after_all_current => queue.extend(messages),
			// In all other cases, make a new inner queue and add our message there
			_ => message_queues.push(VecDeque::from_iter(messages)),
		}
	}

	/// Processes the message and all of its children, then keeps delivering whatever arrived on the bridge until both sides are quiet.
	pub fn handle_message<T: Into<Message>>(&mut self, message: T, process_after_all_current: bool) {
		Self::schedule_execution(&mut self.message_queues, process_after_all_current, [message.into()]);

		loop {
			self.process_queues();

			let delivered = self.receive_bridge_messages();
			if delivered.is_empty() {
				break;
			}
			Self::schedule_execution(&mut self.message_queues, true, delivered);
		}
	}

	fn process_queues(&mut self) {
		while let Some(message) = self.message_queues.last_mut().and_then(VecDeque::pop_front) {
			self.log_message(&message);

			// Create a new queue for the child messages
			let mut queue = VecDeque::new();

			match message {
				Message::NoOp => {}
				Message::Bridge(message) => self.post(message),
				Message::Defer(message) => {
					self.message_handlers.defer_message_handler.process_message(message, &mut queue, ());
				}
				Message::Document(message) => {
					let context = DocumentMessageContext {
						host: &mut self.host,
						rng: &mut self.rng,
						config: &self.config,
					};
					self.message_handlers.document_message_handler.process_message(message, &mut queue, context);
				}
				Message::Frontend(message) => {
					// `FrontendMessage`s are saved and will be handed to the host shell after the message queue is done being processed
					self.responses.push(message);
				}
				Message::Panel(message) => {
					let context = PanelMessageContext { config: &self.config };
					self.message_handlers.panel_message_handler.process_message(message, &mut queue, context);
				}
			}

			// If there are child messages, append the queue to the list of queues
			if !queue.is_empty() {
				self.message_queues.push(queue);
			}

			self.cleanup_queues(false);
		}
	}

	/// Serializes the message onto its side of the bridge. Nothing is delivered until the queues are drained.
	fn post(&mut self, message: BridgeMessage) {
		let sent = match &message {
			BridgeMessage::PostCommand(command) => self.panel_endpoint.post(command).map(BridgeTraffic::to_document),
			BridgeMessage::PostEvent(event) => self.document_endpoint.post(event).map(BridgeTraffic::to_panel),
		};

		match sent {
			Ok(traffic) => {
				debug!("{traffic}");
				self.traffic.push(traffic);
			}
			Err(error) => error!("Could not send {message:?}: {error}"),
		}
	}

	/// Decodes everything waiting on the bridge into messages for the receiving controllers.
	/// A selection change made by the user in the meantime is picked up here too.
	fn receive_bridge_messages(&mut self) -> Vec<Message> {
		let mut messages = Vec::new();

		while let Some(command) = self.document_endpoint.try_receive() {
			match command {
				Ok(command) => messages.push(DocumentMessage::from(command).into()),
				Err(error) => warn!("Rejected a message sent to the document controller: {error}"),
			}
		}
		while let Some(event) = self.panel_endpoint.try_receive() {
			match event {
				Ok(event) => messages.push(PanelMessage::from(event).into()),
				Err(error) => warn!("Rejected a message sent to the panel: {error}"),
			}
		}
		if self.host.take_selection_change() {
			messages.push(DocumentMessage::SelectionChanged.into());
		}

		messages
	}

	/// Sends text to the document controller exactly as given, as a foreign panel would.
	pub fn post_raw_command(&mut self, json: impl Into<String>) {
		let json = json.into();
		if let Err(error) = self.panel_endpoint.post_raw(json.clone()) {
			error!("Could not send {json}: {error}");
			return;
		}
		self.traffic.push(BridgeTraffic::to_document(json));
	}

	/// Delivers anything pending on the bridge or raised by the host without dispatching a new message first.
	pub fn poll(&mut self) {
		self.handle_message(Message::NoOp, true);
	}

	/// Moves the virtual clock forward, dispatching every deferred message that becomes due on the way.
	pub fn advance_time(&mut self, elapsed: Duration) {
		let until = self.message_handlers.defer_message_handler.now() + elapsed;

		while let Some(message) = self.message_handlers.defer_message_handler.pop_due(until) {
			self.handle_message(message, true);
		}
		self.message_handlers.defer_message_handler.advance_to(until);
	}

	/// Dispatches deferred messages until none are left, returning how far the clock moved.
	pub fn run_until_idle(&mut self) -> Duration {
		let start = self.message_handlers.defer_message_handler.now();

		while let Some(deadline) = self.message_handlers.defer_message_handler.next_deadline() {
			if let Some(message) = self.message_handlers.defer_message_handler.pop_due(deadline) {
				self.handle_message(message, true);
			}
		}

		self.message_handlers.defer_message_handler.now() - start
	}

	/// Create the tree structure for logging the messages as a tree
	fn create_indents(queues: &[VecDeque<Message>]) -> String {
		String::from_iter(queues.iter().enumerate().skip(1).map(|(index, queue)| {
			if index == queues.len() - 1 {
				if queue.is_empty() { "└── " } else { "├── " }
			} else if queue.is_empty() {
				"   "
			} else {
				"│    "
			}
		}))
	}

	fn log_message(&self, message: &Message) {
		if matches!(message, Message::NoOp) {
			return;
		}
		trace!("{}{}", Self::create_indents(&self.message_queues), message.name());
	}
}
