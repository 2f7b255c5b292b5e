use super::shuffle::{fisher_yates_shuffle, group_by_parent};
use super::utility_types::Bounds;
use crate::messages::prelude::*;

use rand_chacha::ChaCha20Rng;

pub struct DocumentMessageContext<'a, H: PluginHost> {
	pub host: &'a mut H,
	pub rng: &'a mut ChaCha20Rng,
	pub config: &'a PluginConfig,
}

/// The privileged side of the plugin, the only one allowed to read and change the document.
#[derive(Debug, Default)]
pub struct DocumentMessageHandler {
	started: bool,
}

impl<H: PluginHost> MessageHandler<DocumentMessage, DocumentMessageContext<'_, H>> for DocumentMessageHandler {
	fn process_message(&mut self, message: DocumentMessage, responses: &mut VecDeque<Message>, context: DocumentMessageContext<H>) {
		let DocumentMessageContext { host, rng, config } = context;

		match message {
			DocumentMessage::Startup => {
				if self.started {
					warn!("The document controller was started twice");
					return;
				}
				self.started = true;
				info!("Plugin started with {} selected elements", host.selection().len());

				responses.add(FrontendMessage::TriggerShowPanel {
					width: config.panel_width,
					height: config.panel_height,
				});
				responses.add(DocumentMessage::ReportSelectionCount);
				responses.add(DeferMessage::after(config.startup_report_delay(), DocumentMessage::ReportSelectionCount));
			}
			DocumentMessage::ReportSelectionCount => {
				let count = host.selection().len();
				debug!("Sending selection count {count}");
				responses.add(BridgeMessage::PostEvent(PluginEvent::SelectionChanged { count }));
			}
			DocumentMessage::SelectionChanged => {
				responses.add(DocumentMessage::ReportSelectionCount);
			}
			DocumentMessage::UiReady => {
				debug!("The panel is ready");
				responses.add(DocumentMessage::ReportSelectionCount);
			}
			DocumentMessage::StackElements => stack(host, config, responses),
			DocumentMessage::ShuffleOrder => shuffle(host, rng, config, responses),
		}
	}
}

/// Fails when fewer than `required` elements are selected, telling the user about it through the host and the panel.
fn validate<H: PluginHost>(selected: usize, required: usize, host: &mut H, responses: &mut VecDeque<Message>) -> Result<(), PluginError> {
	if selected >= required {
		return Ok(());
	}

	let error = PluginError::InsufficientSelection { required };
	let message = error.to_string();
	host.notify(&message);
	responses.add(BridgeMessage::PostEvent(PluginEvent::Error { message }));
	Err(error)
}

/// Moves every selected node with geometry so that its center lies on the center of the selection's bounds.
fn stack<H: PluginHost>(host: &mut H, config: &PluginConfig, responses: &mut VecDeque<Message>) {
	let selection = host.selection();
	if let Err(error) = validate(selection.len(), config.min_selection_count, host, responses) {
		debug!("Not stacking: {error}");
		return;
	}

	let nodes: Vec<_> = selection.iter().filter_map(|node| Some((node, host.geometry(node)?))).collect();
	let Some(bounds) = Bounds::combine(nodes.iter().map(|(_, geometry)| *geometry)) else {
		warn!("None of the {} selected elements has a position and size, nothing to stack", selection.len());
		return;
	};
	let center = bounds.center();
	debug!("Stacking elements to center {center}");

	for (node, (_, size)) in nodes {
		if let Err(error) = host.set_position(node, center - size / 2.) {
			warn!("Could not move {node:?}: {error}");
		}
	}

	let count = selection.len();
	host.notify(&format!("{count} elements stacked at center position"));
	responses.add(BridgeMessage::PostEvent(PluginEvent::StackComplete { count, position: center.into() }));
}

/// Randomly reorders the selected nodes among their siblings, one parent at a time.
fn shuffle<H: PluginHost>(host: &mut H, rng: &mut ChaCha20Rng, config: &PluginConfig, responses: &mut VecDeque<Message>) {
	let selection = host.selection();
	if let Err(error) = validate(selection.len(), config.min_selection_count, host, responses) {
		debug!("Not shuffling: {error}");
		return;
	}

	let mut count = 0;
	for (parent, mut nodes) in group_by_parent(&selection, |node| host.parent(node)) {
		if nodes.len() < 2 {
			trace!("Skipping {parent:?}, it has only one selected child");
			continue;
		}

		fisher_yates_shuffle(&mut nodes, rng);
		for node in &nodes {
			if let Err(error) = host.reparent_to_end(node, &parent) {
				warn!("Could not reorder {node:?}: {error}");
			}
		}
		count += nodes.len();
	}

	host.notify(&format!("Shuffled z-order of {count} elements"));
	responses.add(BridgeMessage::PostEvent(PluginEvent::ShuffleComplete { count }));
}
