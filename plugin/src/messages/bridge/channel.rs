use super::{PluginCommand, PluginEvent};
use crate::PluginError;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

/// Creates both ends of a bridge. Commands flow from the panel to the document, events the other way.
pub fn channel() -> (DocumentEndpoint, PanelEndpoint) {
	let (command_sender, command_receiver) = std::sync::mpsc::channel();
	let (event_sender, event_receiver) = std::sync::mpsc::channel();

	let document = DocumentEndpoint {
		commands: command_receiver,
		events: event_sender,
	};
	let panel = PanelEndpoint {
		commands: command_sender,
		events: event_receiver,
	};
	(document, panel)
}

/// The privileged side of the bridge.
#[derive(Debug)]
pub struct DocumentEndpoint {
	commands: Receiver<String>,
	events: Sender<String>,
}

impl DocumentEndpoint {
	/// Serializes and sends the event, returning the JSON that was sent.
	pub fn post(&self, event: &PluginEvent) -> Result<String, PluginError> {
		post(&self.events, event)
	}

	/// The next command waiting on the bridge, or `None` if there is none right now.
	pub fn try_receive(&mut self) -> Option<Result<PluginCommand, PluginError>> {
		try_receive(&self.commands, PluginCommand::KINDS)
	}
}

/// The isolated panel side of the bridge.
#[derive(Debug)]
pub struct PanelEndpoint {
	commands: Sender<String>,
	events: Receiver<String>,
}

impl PanelEndpoint {
	pub fn post(&self, command: &PluginCommand) -> Result<String, PluginError> {
		post(&self.commands, command)
	}

	/// Sends text exactly as given, such as a message written by hand or by a foreign panel.
	pub fn post_raw(&self, json: impl Into<String>) -> Result<(), PluginError> {
		self.commands.send(json.into()).map_err(|_| PluginError::BridgeClosed)
	}

	pub fn try_receive(&mut self) -> Option<Result<PluginEvent, PluginError>> {
		try_receive(&self.events, PluginEvent::KINDS)
	}
}

fn post<T: Serialize>(sender: &Sender<String>, message: &T) -> Result<String, PluginError> {
	let json = serde_json::to_string(message).map_err(|e| PluginError::MalformedMessage(e.to_string()))?;
	sender.send(json.clone()).map_err(|_| PluginError::BridgeClosed)?;
	Ok(json)
}

fn try_receive<T: DeserializeOwned>(receiver: &Receiver<String>, kinds: &[&str]) -> Option<Result<T, PluginError>> {
	match receiver.try_recv() {
		Ok(json) => Some(decode(&json, kinds)),
		Err(TryRecvError::Disconnected) => Some(Err(PluginError::BridgeClosed)),
		Err(TryRecvError::Empty) => None,
	}
}

/// Parses a message of one of the `kinds`, telling unknown kinds apart from payloads that do not fit their kind.
pub fn decode<T: DeserializeOwned>(json: &str, kinds: &[&str]) -> Result<T, PluginError> {
	let value: serde_json::Value = serde_json::from_str(json).map_err(|e| PluginError::MalformedMessage(e.to_string()))?;

	let Some(kind) = value.get("type").and_then(serde_json::Value::as_str) else {
		return Err(PluginError::MalformedMessage(format!("Missing \"type\" in {json}")));
	};
	if !kinds.contains(&kind) {
		return Err(PluginError::UnknownMessage(kind.to_string()));
	}

	serde_json::from_value(value).map_err(|e| PluginError::MalformedMessage(e.to_string()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgeDirection {
	ToDocument,
	ToPanel,
}

/// A message as it crossed the bridge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeTraffic {
	pub direction: BridgeDirection,
	pub json: String,
}

impl BridgeTraffic {
	pub fn to_document(json: String) -> Self {
		Self {
			direction: BridgeDirection::ToDocument,
			json,
		}
	}

	pub fn to_panel(json: String) -> Self {
		Self {
			direction: BridgeDirection::ToPanel,
			json,
		}
	}

	pub fn event(&self) -> Option<PluginEvent> {
		(self.direction == BridgeDirection::ToPanel).then(|| decode(&self.json, PluginEvent::KINDS).ok()).flatten()
	}

}

impl fmt::Display for BridgeTraffic {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.direction {
			BridgeDirection::ToDocument => write!(f, "panel -> document: {}", self.json),
			BridgeDirection::ToPanel => write!(f, "document -> panel: {}", self.json),
		}
	}
}
