use std::time::Duration;

use crate::{
	config::EmitterConfig,
	severity::{BalloonFlag, Severity, SlotId},
	text::FixedText,
};

// Field sizes of NOTIFYICONDATAW.
pub const TIP_CAPACITY: usize = 128;
pub const INFO_CAPACITY: usize = 256;
pub const INFO_TITLE_CAPACITY: usize = 64;

/// Stock system glyph shown in the tray slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockIcon {
	Information,
	Error,
	Warning,
}

/// Everything the shell needs to render one balloon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDescriptor {
	pub slot: SlotId,
	pub flag: BalloonFlag,
	pub icon: StockIcon,
	pub tip: FixedText<TIP_CAPACITY>,
	pub info: FixedText<INFO_CAPACITY>,
	pub info_title: FixedText<INFO_TITLE_CAPACITY>,
	pub timeout: Duration,
}

impl NotificationDescriptor {
	pub fn build(title: &[u16], message: &[u16], severity: Severity, config: &EmitterConfig) -> Self {
		let entry = severity.entry();
		let descriptor = Self {
			slot: entry.slot,
			flag: entry.flag,
			icon: config.icon.icon_for(severity),
			tip: FixedText::new(&config.tooltip),
			info: FixedText::from_wide(message),
			info_title: FixedText::from_wide(title),
			timeout: config.timeout(),
		};
		descriptor.log_truncation();
		descriptor
	}

	/// Descriptor carrying only the slot, for removal.
	pub fn slot_only(severity: Severity) -> Self {
		let entry = severity.entry();
		Self {
			slot: entry.slot,
			flag: entry.flag,
			icon: StockIcon::Information,
			tip: FixedText::default(),
			info: FixedText::default(),
			info_title: FixedText::default(),
			timeout: Duration::ZERO,
		}
	}

	/// Timeout in whole milliseconds, saturating at `u32::MAX`.
	pub fn timeout_ms(&self) -> u32 {
		u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX)
	}

	fn log_truncation(&self) {
		for (field, truncated) in [
			("tooltip", self.tip.was_truncated()),
			("body", self.info.was_truncated()),
			("heading", self.info_title.was_truncated()),
		] {
			if truncated {
				log::debug!("Truncated notification {field} for slot {}", self.slot);
			}
		}
	}
}
