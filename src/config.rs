use std::{
	env, fs, io,
	path::{Path, PathBuf},
	time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{descriptor::StockIcon, error::Result, severity::Severity};

const APP_NAME: &str = "traynote";
const CONFIG_FILENAME: &str = "config.json";

pub const DEFAULT_TOOLTIP: &str = "My App Notification";
pub const DEFAULT_TIMEOUT_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitterConfig {
	#[serde(default = "default_tooltip")]
	pub tooltip: String,
	#[serde(default = "default_timeout_ms")]
	pub timeout_ms: u32,
	#[serde(default)]
	pub icon: IconPolicy,
	/// Used when the caller gives no severity.
	#[serde(default)]
	pub default_severity: Severity,
}

/// Which stock glyph goes into the tray slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconPolicy {
	#[default]
	AlwaysInformation,
	MatchSeverity,
}

impl IconPolicy {
	pub const fn icon_for(self, severity: Severity) -> StockIcon {
		match (self, severity) {
			(Self::MatchSeverity, Severity::Error) => StockIcon::Error,
			(Self::MatchSeverity, Severity::Warning) => StockIcon::Warning,
			_ => StockIcon::Information,
		}
	}
}

fn default_tooltip() -> String {
	DEFAULT_TOOLTIP.to_string()
}

const fn default_timeout_ms() -> u32 {
	DEFAULT_TIMEOUT_MS
}

impl Default for EmitterConfig {
	fn default() -> Self {
		Self {
			tooltip: default_tooltip(),
			timeout_ms: DEFAULT_TIMEOUT_MS,
			icon: IconPolicy::default(),
			default_severity: Severity::default(),
		}
	}
}

impl EmitterConfig {
	pub fn timeout(&self) -> Duration {
		Duration::from_millis(u64::from(self.timeout_ms))
	}
}

pub struct ConfigStore {
	path: PathBuf,
}

impl ConfigStore {
	pub fn new() -> Self {
		Self { path: config_path() }
	}

	pub fn at(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Reads the file, treating a missing file as defaults. Parse errors are
	/// returned so an explicitly chosen file can be reported.
	pub fn try_load(&self) -> Result<EmitterConfig> {
		match fs::read_to_string(&self.path) {
			Ok(contents) => Ok(serde_json::from_str(&contents)?),
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(EmitterConfig::default()),
			Err(err) => Err(err.into()),
		}
	}

	pub fn load(&self) -> EmitterConfig {
		self.try_load().unwrap_or_else(|err| {
			log::warn!("Ignoring config at {}: {err}", self.path.display());
			EmitterConfig::default()
		})
	}

	pub fn save(&self, config: &EmitterConfig) -> Result<()> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent)?;
		}
		let contents = serde_json::to_string_pretty(config)?;
		fs::write(&self.path, contents)?;
		Ok(())
	}
}

impl Default for ConfigStore {
	fn default() -> Self {
		Self::new()
	}
}

fn config_path() -> PathBuf {
	if let Ok(appdata) = env::var("APPDATA") {
		return PathBuf::from(appdata).join(APP_NAME).join(CONFIG_FILENAME);
	}
	env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join(CONFIG_FILENAME)
}
