use std::{fmt, io};

use thiserror::Error;

use crate::severity::SlotId;

/// Which half of the two-phase submission failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellPhase {
	Add,
	Modify,
	Delete,
}

impl fmt::Display for ShellPhase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Add => "add",
			Self::Modify => "modify",
			Self::Delete => "delete",
		};
		f.write_str(name)
	}
}

#[derive(Debug, Error)]
pub enum Error {
	#[error("Unknown notification type: {0}")]
	InvalidSeverity(i32),
	#[error("Unknown notification type name: {0:?}")]
	UnknownSeverityName(String),
	#[error("Text is not valid UTF-16")]
	InvalidUtf16,
	#[error("Shell rejected {phase} for notification slot {slot}")]
	Shell { phase: ShellPhase, slot: SlotId },
	#[error("Failed to load stock icon: {0}")]
	IconLoad(String),
	#[error("Tray notifications are only supported on Windows")]
	Unsupported,
	#[error("IO error: {0}")]
	Io(#[from] io::Error),
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

impl Error {
	pub fn user_message(&self) -> &str {
		match self {
			Self::InvalidSeverity(_) | Self::UnknownSeverityName(_) => "Unknown Notification type!",
			Self::InvalidUtf16 => "The notification text could not be converted.",
			Self::Shell { .. } => "The Windows shell refused to show the notification.",
			Self::IconLoad(_) => "The notification icon could not be loaded.",
			Self::Unsupported => "Tray notifications are not available on this platform.",
			Self::Io(_) => "A file system error occurred.",
			Self::Json(_) => "The configuration file is malformed.",
		}
	}

	pub const fn is_invalid_severity(&self) -> bool {
		matches!(self, Self::InvalidSeverity(_) | Self::UnknownSeverityName(_))
	}
}

/// Type alias for Results using our unified Error type.
pub type Result<T> = std::result::Result<T, Error>;
