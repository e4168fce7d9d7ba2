use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use log::LevelFilter;
use traynote::{ConfigStore, NotificationEmitter, NotificationRequest, PlatformShell, Severity};

const HELP: &str = "\
Usage: traynote [OPTIONS] <TITLE> <MESSAGE>

Options:
	-s, --severity <CODE>	0 info, 1 error, 2 warning, 3 none; names also accepted
	-c, --config <PATH>	Read settings from PATH instead of the default location
	    --dismiss	Remove the tray slot for the severity instead of showing a balloon
	    --save-config	Write the settings file, storing --severity as the default severity
	-v, --verbose	Log descriptor details
	-h, --help	Print this help";

struct Args {
	title: String,
	message: String,
	severity: Option<String>,
	config: Option<PathBuf>,
	dismiss: bool,
	save_config: bool,
	verbose: bool,
}

impl Args {
	fn parse() -> Result<Option<Self>, pico_args::Error> {
		let mut args = pico_args::Arguments::from_env();
		if args.contains(["-h", "--help"]) {
			return Ok(None);
		}
		let severity = args.opt_value_from_str(["-s", "--severity"])?;
		let config = args.opt_value_from_os_str(["-c", "--config"], |s| Ok::<_, String>(PathBuf::from(s)))?;
		let dismiss = args.contains("--dismiss");
		let save_config = args.contains("--save-config");
		let verbose = args.contains(["-v", "--verbose"]);
		let (title, message) = if dismiss || save_config {
			(String::new(), String::new())
		} else {
			(args.free_from_str()?, args.free_from_str()?)
		};
		let rest = args.finish();
		if !rest.is_empty() {
			return Err(pico_args::Error::ArgumentParsingFailed {
				cause: format!("unexpected arguments: {rest:?}"),
			});
		}
		Ok(Some(Self { title, message, severity, config, dismiss, save_config, verbose }))
	}
}

fn main() -> ExitCode {
	let args = match Args::parse() {
		Ok(Some(args)) => args,
		Ok(None) => {
			println!("{HELP}");
			return ExitCode::SUCCESS;
		}
		Err(e) => {
			eprintln!("{e}\n\n{HELP}");
			return ExitCode::from(2);
		}
	};
	let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
	if let Err(e) = simple_logger::SimpleLogger::new().with_level(level).init() {
		eprintln!("Failed to initialise logging: {e}");
	}
	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			if let Some(e) = err.downcast_ref::<traynote::Error>()
				&& e.is_invalid_severity()
			{
				log::debug!("{e}");
				println!("{}", e.user_message());
				return ExitCode::from(1);
			}
			eprintln!("Error: {err:#}");
			ExitCode::from(2)
		}
	}
}

fn run(args: &Args) -> Result<()> {
	let severity = args.severity.as_deref().map(str::parse::<Severity>).transpose()?;
	let (store, mut config) = match &args.config {
		Some(path) => {
			let store = ConfigStore::at(path);
			let config =
				store.try_load().with_context(|| format!("Failed to read config from {}", store.path().display()))?;
			(store, config)
		}
		None => {
			let store = ConfigStore::new();
			let config = store.load();
			(store, config)
		}
	};
	if args.save_config {
		if let Some(severity) = severity {
			config.default_severity = severity;
		}
		store.save(&config).with_context(|| format!("Failed to write config to {}", store.path().display()))?;
		log::info!("Saved config to {}", store.path().display());
		return Ok(());
	}
	let severity = severity.unwrap_or(config.default_severity);
	let emitter = NotificationEmitter::with_config(PlatformShell::new(), config);
	if args.dismiss {
		emitter.dismiss(severity)?;
		return Ok(());
	}
	let request = NotificationRequest::new(args.title.as_str(), args.message.as_str()).with_severity(severity);
	emitter.emit(&request)?;
	Ok(())
}
