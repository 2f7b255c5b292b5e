use super::panel_layout::{Notification, PanelLayout};
use super::utility_types::{NotificationKind, PanelAction, PanelSession, SelectionStatus, action_count_text};
use crate::consts::ACTION_COUNT_OPACITY;
use crate::messages::prelude::*;

pub struct PanelMessageContext<'a> {
	pub config: &'a PluginConfig,
}

/// The isolated side of the plugin. It only learns about the document through events and can only change it by sending commands.
#[derive(Debug, Default)]
pub struct PanelMessageHandler {
	session: PanelSession,
	/// Built on initialization, absent while the panel content is still being constructed
	layout: Option<PanelLayout>,
	content_loaded: bool,
	initialize_on_load: bool,
	next_notification_id: u64,
}

impl MessageHandler<PanelMessage, PanelMessageContext<'_>> for PanelMessageHandler {
	fn process_message(&mut self, message: PanelMessage, responses: &mut VecDeque<Message>, context: PanelMessageContext) {
		let PanelMessageContext { config } = context;

		match message {
			PanelMessage::ContentLoaded => {
				self.content_loaded = true;
				if std::mem::take(&mut self.initialize_on_load) {
					responses.add(PanelMessage::Initialize);
				}
			}
			PanelMessage::Initialize => {
				if !self.content_loaded {
					debug!("Deferring panel initialization until its content is loaded");
					self.initialize_on_load = true;
					return;
				}
				if self.layout.is_some() {
					warn!("The panel is already initialized");
					return;
				}

				info!("Initializing the panel");
				self.layout = Some(PanelLayout::default());
				self.render_status(responses);
				responses.add(BridgeMessage::PostCommand(PluginCommand::UiReady));
			}
			PanelMessage::ClickStack => self.click(PanelAction::Stack, responses),
			PanelMessage::ClickShuffle => self.click(PanelAction::Shuffle, responses),
			PanelMessage::SelectionChanged { count } => {
				self.session.selected_count = count;
				self.render_status(responses);
			}
			PanelMessage::StackComplete { count, position } => {
				debug!("{count} elements were stacked at ({}, {})", position.x, position.y);
				self.show_action_count(PanelAction::Stack, count, config, responses);
			}
			PanelMessage::ShuffleComplete { count } => {
				self.show_action_count(PanelAction::Shuffle, count, config, responses);
			}
			PanelMessage::Error { message } => {
				self.show_notification(format!("❌ {message}"), NotificationKind::Error, config, responses);
			}
			PanelMessage::FadeActionCount { action } => {
				let Some(label) = self.layout.as_mut().and_then(|layout| layout.action_count_mut(action)) else {
					return;
				};
				label.opacity = config.action_count_faded_opacity;
				responses.add(FrontendMessage::UpdateActionCount {
					id: label.id.clone(),
					text: label.value.clone(),
					opacity: label.opacity,
				});
			}
			PanelMessage::FadeOutNotification { id } => {
				let Some(notification) = self.layout.as_mut().and_then(|layout| layout.notification_mut(id)) else {
					return;
				};
				notification.fading = true;
				responses.add(FrontendMessage::TriggerNotificationFadeOut { id });
				responses.add(DeferMessage::after(config.notification_removal_delay(), PanelMessage::RemoveNotification { id }));
			}
			PanelMessage::RemoveNotification { id } => {
				if self.layout.as_mut().and_then(|layout| layout.remove_notification(id)).is_some() {
					responses.add(FrontendMessage::DisplayRemoveNotification { id });
				}
			}
		}
	}
}

impl PanelMessageHandler {
	pub fn session(&self) -> &PanelSession {
		&self.session
	}

	pub fn layout(&self) -> Option<&PanelLayout> {
		self.layout.as_ref()
	}

	pub fn is_initialized(&self) -> bool {
		self.layout.is_some()
	}

	fn click(&mut self, action: PanelAction, responses: &mut VecDeque<Message>) {
		let Some(layout) = &self.layout else {
			warn!("Clicked {action:?} before the panel was initialized");
			return;
		};

		let button = layout.button(action);
		if button.disabled {
			debug!("Ignoring a click on the disabled \"{}\" button", button.label);
			return;
		}
		debug!("The \"{}\" button was clicked", button.label);
		responses.add(BridgeMessage::PostCommand(button.on_click));
	}

	fn render_status(&mut self, responses: &mut VecDeque<Message>) {
		let Some(layout) = &mut self.layout else {
			debug!("Skipping the status render, the panel is not initialized");
			return;
		};

		let status = SelectionStatus::for_count(self.session.selected_count);
		layout.apply_status(&status);
		responses.add(FrontendMessage::UpdateSelectionStatus {
			status: status.status,
			kind: status.kind,
			hint: status.hint,
			buttons_disabled: !status.ready,
		});
	}

	fn show_action_count(&mut self, action: PanelAction, element_count: usize, config: &PluginConfig, responses: &mut VecDeque<Message>) {
		let count = self.session.record_completion(action);
		let Some(layout) = &mut self.layout else {
			warn!("Could not find the actions section of the panel");
			return;
		};

		let label = layout.action_count_entry(action);
		label.value = action_count_text(action, count, element_count);
		label.opacity = ACTION_COUNT_OPACITY;
		responses.add(FrontendMessage::UpdateActionCount {
			id: label.id.clone(),
			text: label.value.clone(),
			opacity: label.opacity,
		});
		responses.add(DeferMessage::after(config.action_count_fade_delay(), PanelMessage::FadeActionCount { action }));
	}

	fn show_notification(&mut self, text: String, kind: NotificationKind, config: &PluginConfig, responses: &mut VecDeque<Message>) {
		let Some(layout) = &mut self.layout else {
			warn!("Dropping the notification \"{text}\", the panel is not initialized");
			return;
		};

		let id = self.next_notification_id;
		self.next_notification_id += 1;

		layout.notifications.push(Notification {
			id,
			text: text.clone(),
			kind,
			fading: false,
		});
		responses.add(FrontendMessage::DisplayNotification { id, text, kind });
		responses.add(DeferMessage::after(config.notification_fade_delay(), PanelMessage::FadeOutNotification { id }));
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::messages::bridge::Position;
	use crate::messages::panel::utility_types::StatusKind;

	use pretty_assertions::assert_eq;
	use std::time::Duration;

	struct Fixture {
		handler: PanelMessageHandler,
		config: PluginConfig,
	}

	impl Fixture {
		fn initialized() -> Self {
			let mut fixture = Self {
				handler: PanelMessageHandler::default(),
				config: PluginConfig::default(),
			};
			fixture.process(PanelMessage::ContentLoaded);
			fixture.process(PanelMessage::Initialize);
			fixture
		}

		fn process(&mut self, message: PanelMessage) -> Vec<Message> {
			let mut responses = VecDeque::new();
			self.handler.process_message(message, &mut responses, PanelMessageContext { config: &self.config });
			responses.into()
		}

		fn layout(&self) -> &PanelLayout {
			self.handler.layout().unwrap()
		}
	}

	#[test]
	fn initialization_waits_for_content() {
		let mut fixture = Fixture {
			handler: PanelMessageHandler::default(),
			config: PluginConfig::default(),
		};

		assert!(fixture.process(PanelMessage::Initialize).is_empty());
		assert!(!fixture.handler.is_initialized());

		assert_eq!(fixture.process(PanelMessage::ContentLoaded), vec![Message::from(PanelMessage::Initialize)]);
		let responses = fixture.process(PanelMessage::Initialize);

		assert!(fixture.handler.is_initialized());
		assert_eq!(responses.last(), Some(&Message::from(BridgeMessage::PostCommand(PluginCommand::UiReady))));
	}

	#[test]
	fn initialization_sends_ready_once() {
		let mut fixture = Fixture::initialized();
		assert!(fixture.process(PanelMessage::Initialize).is_empty());
	}

	#[test]
	fn disabled_buttons_send_nothing() {
		let mut fixture = Fixture::initialized();
		fixture.process(PanelMessage::SelectionChanged { count: 1 });
		assert!(fixture.process(PanelMessage::ClickStack).is_empty());

		fixture.process(PanelMessage::SelectionChanged { count: 2 });
		assert_eq!(fixture.process(PanelMessage::ClickStack), vec![Message::from(BridgeMessage::PostCommand(PluginCommand::StackElements))]);
		assert_eq!(fixture.process(PanelMessage::ClickShuffle), vec![Message::from(BridgeMessage::PostCommand(PluginCommand::ShuffleOrder))]);
	}

	#[test]
	fn selection_status_is_rendered() {
		let mut fixture = Fixture::initialized();
		let responses = fixture.process(PanelMessage::SelectionChanged { count: 4 });

		assert_eq!(
			responses,
			vec![Message::from(FrontendMessage::UpdateSelectionStatus {
				status: "4 elements selected".into(),
				kind: StatusKind::Success,
				hint: "Ready to stack and shuffle".into(),
				buttons_disabled: false,
			})]
		);
		assert_eq!(fixture.handler.session().selected_count, 4);
	}

	#[test]
	fn selection_before_initialization_is_remembered() {
		let mut fixture = Fixture {
			handler: PanelMessageHandler::default(),
			config: PluginConfig::default(),
		};
		assert!(fixture.process(PanelMessage::SelectionChanged { count: 3 }).is_empty());

		fixture.process(PanelMessage::ContentLoaded);
		fixture.process(PanelMessage::Initialize);
		assert_eq!(fixture.layout().status.value, "3 elements selected");
	}

	#[test]
	fn completions_update_and_fade_the_counter() {
		let mut fixture = Fixture::initialized();
		let completion = PanelMessage::StackComplete {
			count: 3,
			position: Position { x: 15., y: 15. },
		};

		let responses = fixture.process(completion.clone());
		assert_eq!(
			responses,
			vec![
				Message::from(FrontendMessage::UpdateActionCount {
					id: "stack-count".into(),
					text: "Stacked 1 time (3 elements)".into(),
					opacity: 1.,
				}),
				Message::from(DeferMessage::after(Duration::from_secs(3), PanelMessage::FadeActionCount { action: PanelAction::Stack })),
			]
		);

		fixture.process(completion);
		assert_eq!(fixture.layout().actions.len(), 1);
		assert_eq!(fixture.layout().actions[0].value, "Stacked 2 times (3 elements)");

		fixture.process(PanelMessage::FadeActionCount { action: PanelAction::Stack });
		assert_eq!(fixture.layout().actions[0].opacity, 0.5);
	}

	#[test]
	fn errors_become_fading_notifications() {
		let mut fixture = Fixture::initialized();
		let responses = fixture.process(PanelMessage::Error {
			message: "Please select at least 2 elements".into(),
		});

		assert_eq!(
			responses[0],
			Message::from(FrontendMessage::DisplayNotification {
				id: 0,
				text: "❌ Please select at least 2 elements".into(),
				kind: NotificationKind::Error,
			})
		);
		assert_eq!(responses[1], Message::from(DeferMessage::after(Duration::from_secs(3), PanelMessage::FadeOutNotification { id: 0 })));

		let responses = fixture.process(PanelMessage::FadeOutNotification { id: 0 });
		assert!(fixture.layout().notifications[0].fading);
		assert_eq!(responses[1], Message::from(DeferMessage::after(Duration::from_millis(300), PanelMessage::RemoveNotification { id: 0 })));

		assert_eq!(fixture.process(PanelMessage::RemoveNotification { id: 0 }), vec![Message::from(FrontendMessage::DisplayRemoveNotification { id: 0 })]);
		assert!(fixture.layout().notifications.is_empty());
		assert!(fixture.process(PanelMessage::RemoveNotification { id: 0 }).is_empty());
	}
}
