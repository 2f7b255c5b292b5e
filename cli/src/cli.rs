use stack_shuffle_document::LayerId;

use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Parser)]
#[clap(name = "stack-shuffle", version, about = "Stack and shuffle the selected layers of a scene")]
pub struct Cli {
	/// RON scene file (a serialized document)
	pub scene: PathBuf,

	/// Steps to perform in order: stack | shuffle | select=<path>[,<path>...] | wait=<ms>
	pub actions: Vec<Action>,

	#[arg(short, long, help = "RON plugin config overriding the defaults")]
	pub config: Option<PathBuf>,

	#[arg(short, long, help = "Seed for the shuffle random source")]
	pub seed: Option<u64>,

	#[arg(short, long, help = "Write the resulting scene (RON) here")]
	pub output: Option<PathBuf>,

	#[arg(short, long, action = clap::ArgAction::Count, help = "Raise the log level, repeat for more")]
	pub verbose: u8,
}

/// One step of a run, given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
	/// Click the stack button of the panel
	Stack,
	/// Click the shuffle button of the panel
	Shuffle,
	/// Change the selection of the document like the user would
	Select(Vec<Vec<LayerId>>),
	/// Let time pass so timers can fire
	Wait(Duration),
}

impl FromStr for Action {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.split_once('=') {
			None if s == "stack" => Ok(Action::Stack),
			None if s == "shuffle" => Ok(Action::Shuffle),
			Some(("select", paths)) => paths.split(',').filter(|path| !path.is_empty()).map(parse_path).collect::<Result<_, _>>().map(Action::Select),
			Some(("wait", ms)) => ms.parse().map(|ms| Action::Wait(Duration::from_millis(ms))).map_err(|_| format!("\"{ms}\" is not a number of milliseconds")),
			_ => Err(format!("Unknown action \"{s}\", expected stack, shuffle, select=<path>[,<path>...] or wait=<ms>")),
		}
	}
}

/// Parses a `/`-separated list of layer IDs, such as `0/2`.
fn parse_path(path: &str) -> Result<Vec<LayerId>, String> {
	path.split('/').map(|id| id.parse().map_err(|_| format!("\"{id}\" in \"{path}\" is not a layer ID"))).collect()
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Action::Stack => write!(f, "stack"),
			Action::Shuffle => write!(f, "shuffle"),
			Action::Select(paths) => {
				let paths: Vec<_> = paths.iter().map(|path| path.iter().map(LayerId::to_string).collect::<Vec<_>>().join("/")).collect();
				write!(f, "select={}", paths.join(","))
			}
			Action::Wait(duration) => write!(f, "wait={}", duration.as_millis()),
		}
	}
}
