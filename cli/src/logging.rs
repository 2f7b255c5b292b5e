use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Logs to stderr, keeping stdout for the run's output. Each `-v` shows one more level.
pub fn init(verbosity: u8) -> Result<(), log::SetLoggerError> {
	let colors = ColoredLevelConfig::new().debug(Color::Magenta).info(Color::Green).warn(Color::Yellow).error(Color::Red);

	let level = match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};

	fern::Dispatch::new()
		.chain(std::io::stderr())
		.level(level)
		.format(move |out, message, record| {
			out.finish(format_args!(
				"[{}]{} {}",
				// This will color the log level only, not the whole line. Just a touch.
				colors.color(record.level()),
				chrono::Local::now().format("[%H:%M:%S%.3f]"),
				message
			))
		})
		.apply()
}
