use crate::application::PluginSession;
use crate::host::DocumentHost;
use crate::messages::panel::panel_layout::PanelLayout;
use crate::messages::prelude::*;

use stack_shuffle_document::{LayerId, Operation};

use glam::DVec2;

/// A set of utility functions to make the writing of plugin tests more declarative
pub struct PluginTestUtils {
	pub session: PluginSession<DocumentHost>,
}

impl PluginTestUtils {
	/// A started session over root level shapes given as `[x, y, width, height]`, all of them selected.
	pub fn with_shapes(shapes: &[[f64; 4]]) -> Self {
		let mut utils = Self::unstarted(shapes);
		utils.session.start();
		utils
	}

	pub fn unstarted(shapes: &[[f64; 4]]) -> Self {
		let _ = env_logger::builder().is_test(true).try_init();

		let mut host = DocumentHost::default();
		for (id, [x, y, width, height]) in shapes.iter().enumerate() {
			let operation = Operation::AddShape {
				path: vec![id as LayerId],
				insert_index: -1,
				position: DVec2::new(*x, *y),
				size: DVec2::new(*width, *height),
			};
			host.handle_operation(operation).unwrap();
		}
		let paths = (0..shapes.len() as LayerId).map(|id| vec![id]).collect();
		host.handle_operation(Operation::SetSelection { paths }).unwrap();
		host.take_selection_change();

		let config = PluginConfig { seed: Some(0), ..Default::default() };
		Self {
			session: PluginSession::new(host, config),
		}
	}

	/// Selects the layers like a user would, returning what the panel updated in response.
	pub fn select(&mut self, paths: &[&[LayerId]]) -> Vec<FrontendMessage> {
		let paths = paths.iter().map(|path| path.to_vec()).collect();
		self.session.update_host(|host| host.handle_operation(Operation::SetSelection { paths })).unwrap();
		self.session.handle_message(Message::NoOp)
	}

	/// Events the document controller sent since the last call.
	pub fn events(&mut self) -> Vec<PluginEvent> {
		self.session.take_bridge_traffic().iter().filter_map(|traffic| traffic.event()).collect()
	}

	pub fn position(&self, path: &[LayerId]) -> DVec2 {
		self.session.host().position(&path.to_vec()).unwrap()
	}

	/// IDs of the folder's children from bottom to top.
	pub fn layer_ids(&self, folder: &[LayerId]) -> Vec<LayerId> {
		self.session.host().document().folder(folder).unwrap().list_layers().to_vec()
	}

	pub fn layout(&self) -> &PanelLayout {
		self.session.panel().layout().unwrap()
	}
}

pub mod test_prelude {
	pub use super::PluginTestUtils;
	pub use crate::messages::panel::utility_types::PanelAction;
	pub use crate::messages::prelude::*;
}
