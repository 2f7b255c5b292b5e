mod cli;
mod logging;
mod tree;

use cli::{Action, Cli};

use stack_shuffle_document::{Document, Operation};
use stack_shuffle_plugin::host::DocumentHost;
use stack_shuffle_plugin::messages::prelude::{FrontendMessage, Message};
use stack_shuffle_plugin::{PluginConfig, PluginSession};

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;

fn main() -> Result<()> {
	let cli = Cli::parse();
	logging::init(cli.verbose).context("Failed to set up logging")?;

	let document = load_scene(&cli.scene)?;
	let mut config = match &cli.config {
		Some(path) => load_config(path)?,
		None => PluginConfig::default(),
	};
	if cli.seed.is_some() {
		config.seed = cli.seed;
	}

	let mut session = PluginSession::new(DocumentHost::new(document), config);

	println!("> start");
	let responses = session.start();
	report(&mut session, responses);

	for action in &cli.actions {
		println!("> {action}");
		let responses = match action {
			Action::Stack => session.click_stack(),
			Action::Shuffle => session.click_shuffle(),
			Action::Select(paths) => {
				let operation = Operation::SetSelection { paths: paths.clone() };
				session.update_host(|host| host.handle_operation(operation)).with_context(|| format!("Could not apply {action}"))?;
				session.handle_message(Message::NoOp)
			}
			Action::Wait(duration) => session.advance_time(*duration),
		};
		report(&mut session, responses);
	}

	println!("> finish");
	let responses = session.run_until_idle();
	report(&mut session, responses);

	if let Some(layout) = session.panel().layout() {
		println!("\n{layout}");
	}

	let document = session.into_host().into_document();
	print!("{}", tree::layer_tree(&document));

	if let Some(path) = &cli.output {
		let scene = document.serialize_document().context("Failed to serialize the scene")?;
		fs::write(path, scene).with_context(|| format!("Failed to write the scene to {}", path.display()))?;
	}

	Ok(())
}

fn load_scene(path: &Path) -> Result<Document> {
	let content = fs::read_to_string(path).with_context(|| format!("Failed to read the scene {}", path.display()))?;
	Document::with_content(&content).with_context(|| format!("Failed to load the scene {}", path.display()))
}

fn load_config(path: &Path) -> Result<PluginConfig> {
	let content = fs::read_to_string(path).with_context(|| format!("Failed to read the config {}", path.display()))?;
	ron::from_str(&content).with_context(|| format!("Failed to parse the config {}", path.display()))
}

/// Prints what crossed the bridge, what the host showed to the user and what the panel was told to update.
fn report(session: &mut PluginSession<DocumentHost>, responses: Vec<FrontendMessage>) {
	for traffic in session.take_bridge_traffic() {
		println!("  {traffic}");
	}
	for notification in session.dispatcher.host.take_notifications() {
		println!("  notify: {notification}");
	}
	for response in responses {
		println!("  panel: {response:?}");
	}
	println!("  t = {} ms", session.now().as_millis());
}

#[cfg(test)]
mod test {
	use super::*;

	use pretty_assertions::assert_eq;
	use stack_shuffle_plugin::messages::prelude::PluginHost;

	fn demo(name: &str) -> std::path::PathBuf {
		Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos").join(name)
	}

	#[test]
	fn demo_scene_stacks_around_its_center() {
		let document = load_scene(&demo("three_boxes.ron")).unwrap();
		let config = load_config(&demo("slow_fades.ron")).unwrap();
		assert_eq!(config.seed, Some(42));
		assert_eq!(config.action_count_fade_delay_ms, 5000);

		let mut session = PluginSession::new(DocumentHost::new(document), config);
		session.start();
		session.click_stack();

		let position = session.host().position(&vec![0]).map(|position| (position.x, position.y));
		assert_eq!(position, Some((25., 10.)));
		assert_eq!(session.host().notifications(), &["4 elements stacked at center position".to_string()]);
	}
}
