use crate::dispatcher::Dispatcher;
use crate::messages::bridge::BridgeTraffic;
use crate::messages::prelude::*;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::time::Duration;

/// One run of the plugin inside a host: the document controller, the panel and the bridge between them.
pub struct PluginSession<H: PluginHost> {
	pub dispatcher: Dispatcher<H>,
}

impl<H: PluginHost> PluginSession<H> {
	/// Seeds the shuffle from the config, or from the OS when no seed is configured.
	pub fn new(host: H, config: PluginConfig) -> Self {
		let rng = match config.seed {
			Some(seed) => ChaCha20Rng::seed_from_u64(seed),
			None => ChaCha20Rng::from_os_rng(),
		};
		Self::with_rng(host, config, rng)
	}

	pub fn with_rng(host: H, config: PluginConfig, rng: ChaCha20Rng) -> Self {
		Self {
			dispatcher: Dispatcher::new(host, rng, config),
		}
	}

	/// Launches the plugin with a panel whose content is already constructed.
	pub fn start(&mut self) -> Vec<FrontendMessage> {
		self.dispatcher.handle_message(DocumentMessage::Startup, true);
		self.dispatcher.handle_message(PanelMessage::ContentLoaded, true);
		self.handle_message(PanelMessage::Initialize)
	}

	/// Launches the plugin while the panel content is still loading. The panel initializes on [Self::content_loaded].
	pub fn start_before_content_loaded(&mut self) -> Vec<FrontendMessage> {
		self.dispatcher.handle_message(DocumentMessage::Startup, true);
		self.handle_message(PanelMessage::Initialize)
	}

	pub fn content_loaded(&mut self) -> Vec<FrontendMessage> {
		self.handle_message(PanelMessage::ContentLoaded)
	}

	/// Returns every [FrontendMessage] produced since the last call, including those of earlier host updates.
	pub fn handle_message<T: Into<Message>>(&mut self, message: T) -> Vec<FrontendMessage> {
		self.dispatcher.handle_message(message, true);

		std::mem::take(&mut self.dispatcher.responses)
	}

	pub fn click_stack(&mut self) -> Vec<FrontendMessage> {
		self.handle_message(PanelMessage::ClickStack)
	}

	pub fn click_shuffle(&mut self) -> Vec<FrontendMessage> {
		self.handle_message(PanelMessage::ClickShuffle)
	}

	/// Lets the user change the document, then reports a resulting selection change to the panel.
	pub fn update_host<R>(&mut self, update: impl FnOnce(&mut H) -> R) -> R {
		let result = update(&mut self.dispatcher.host);
		self.dispatcher.poll();
		result
	}

	/// Sends text to the document controller as if a panel had posted it.
	pub fn post_raw_command(&mut self, json: impl Into<String>) -> Vec<FrontendMessage> {
		self.dispatcher.post_raw_command(json);
		self.handle_message(Message::NoOp)
	}

	pub fn advance_time(&mut self, elapsed: Duration) -> Vec<FrontendMessage> {
		self.dispatcher.advance_time(elapsed);
		std::mem::take(&mut self.dispatcher.responses)
	}

	/// Fires every remaining timer, moving the clock to the last deadline.
	pub fn run_until_idle(&mut self) -> Vec<FrontendMessage> {
		let elapsed = self.dispatcher.run_until_idle();
		trace!("Ran timers for {elapsed:?}");
		std::mem::take(&mut self.dispatcher.responses)
	}

	/// Time on the virtual clock since the session started.
	pub fn now(&self) -> Duration {
		self.dispatcher.message_handlers.defer_message_handler.now()
	}

	pub fn host(&self) -> &H {
		&self.dispatcher.host
	}

	pub fn into_host(self) -> H {
		self.dispatcher.host
	}

	pub fn panel(&self) -> &PanelMessageHandler {
		&self.dispatcher.message_handlers.panel_message_handler
	}

	pub fn config(&self) -> &PluginConfig {
		self.dispatcher.config()
	}

	pub fn take_bridge_traffic(&mut self) -> Vec<BridgeTraffic> {
		self.dispatcher.take_traffic()
	}
}
