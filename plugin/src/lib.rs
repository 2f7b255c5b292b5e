// `macro_use` puts the log macros (`error!`, `warn!`, `debug!`, `info!` and `trace!`) in scope for the crate
#[macro_use]
extern crate log;

pub mod application;
pub mod config;
pub mod consts;
pub mod dispatcher;
pub mod host;
pub mod messages;
pub mod misc;

#[cfg(test)]
pub mod test_utils;

#[doc(inline)]
pub use application::PluginSession;
#[doc(inline)]
pub use config::PluginConfig;
#[doc(inline)]
pub use misc::PluginError;
