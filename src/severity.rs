use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Urgency category of a notification. The discriminant is the integer code
/// callers pass on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
	#[default]
	Info = 0,
	Error = 1,
	Warning = 2,
	None = 3,
}

/// Identifier the shell uses to tell our tray registrations apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub u32);

impl fmt::Display for SlotId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Severity flag understood by the balloon renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalloonFlag {
	Info,
	Error,
	Warning,
	NoIcon,
}

impl BalloonFlag {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Info => "info",
			Self::Error => "error",
			Self::Warning => "warning",
			Self::NoIcon => "no-icon",
		}
	}
}

impl fmt::Display for BalloonFlag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotEntry {
	pub slot: SlotId,
	pub flag: BalloonFlag,
}

// Indexed by `Severity as usize`.
const SLOT_TABLE: [SlotEntry; 4] = [
	SlotEntry { slot: SlotId(1001), flag: BalloonFlag::Info },
	SlotEntry { slot: SlotId(1002), flag: BalloonFlag::Error },
	SlotEntry { slot: SlotId(1003), flag: BalloonFlag::Warning },
	SlotEntry { slot: SlotId(1004), flag: BalloonFlag::NoIcon },
];

impl Severity {
	pub const ALL: [Self; 4] = [Self::Info, Self::Error, Self::Warning, Self::None];

	pub fn from_code(code: i32) -> Result<Self> {
		usize::try_from(code)
			.ok()
			.and_then(|index| Self::ALL.get(index).copied())
			.ok_or(Error::InvalidSeverity(code))
	}

	pub const fn code(self) -> i32 {
		self as i32
	}

	pub const fn entry(self) -> SlotEntry {
		SLOT_TABLE[self as usize]
	}

	pub const fn slot(self) -> SlotId {
		self.entry().slot
	}

	pub const fn flag(self) -> BalloonFlag {
		self.entry().flag
	}
}

impl FromStr for Severity {
	type Err = Error;

	/// Accepts either the integer code or the lowercase name.
	fn from_str(s: &str) -> Result<Self> {
		let trimmed = s.trim();
		if let Ok(code) = trimmed.parse::<i32>() {
			return Self::from_code(code);
		}
		match trimmed.to_ascii_lowercase().as_str() {
			"info" => Ok(Self::Info),
			"error" => Ok(Self::Error),
			"warning" | "warn" => Ok(Self::Warning),
			"none" => Ok(Self::None),
			_ => Err(Error::UnknownSeverityName(trimmed.to_string())),
		}
	}
}
