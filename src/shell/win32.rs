use windows::Win32::{
	Foundation::HWND,
	UI::{
		Shell::{
			NIF_ICON, NIF_INFO, NIF_TIP, NIIF_ERROR, NIIF_INFO, NIIF_NONE, NIIF_WARNING, NIM_ADD, NIM_DELETE,
			NIM_MODIFY, NOTIFY_ICON_INFOTIP_FLAGS, NOTIFY_ICON_MESSAGE, NOTIFYICONDATAW, NOTIFYICONDATAW_0,
			Shell_NotifyIconW,
		},
		WindowsAndMessaging::{HICON, IDI_ERROR, IDI_INFORMATION, IDI_WARNING, LoadIconW},
	},
};

use super::NotifyShell;
use crate::{
	descriptor::{NotificationDescriptor, StockIcon},
	error::{Error, Result, ShellPhase},
	severity::BalloonFlag,
};

/// Tray area of the current desktop, reached through `Shell_NotifyIconW`.
#[derive(Debug, Default)]
pub struct Win32Shell {
	owner: Option<HWND>,
}

impl Win32Shell {
	/// Registers slots without an owner window.
	pub const fn new() -> Self {
		Self { owner: None }
	}

	/// Registers slots under `owner`, which then receives tray callbacks.
	pub const fn with_owner(owner: HWND) -> Self {
		Self { owner: Some(owner) }
	}

	fn submit(&self, message: NOTIFY_ICON_MESSAGE, phase: ShellPhase, data: &NOTIFYICONDATAW) -> Result<()> {
		let accepted = unsafe { Shell_NotifyIconW(message, data) };
		if accepted.as_bool() {
			Ok(())
		} else {
			Err(Error::Shell { phase, slot: crate::severity::SlotId(data.uID) })
		}
	}

	fn balloon_data(&self, descriptor: &NotificationDescriptor) -> Result<NOTIFYICONDATAW> {
		Ok(NOTIFYICONDATAW {
			uFlags: NIF_INFO | NIF_ICON | NIF_TIP,
			hIcon: load_stock_icon(descriptor.icon)?,
			szTip: *descriptor.tip.raw(),
			szInfo: *descriptor.info.raw(),
			szInfoTitle: *descriptor.info_title.raw(),
			dwInfoFlags: info_flags(descriptor.flag),
			Anonymous: NOTIFYICONDATAW_0 { uTimeout: descriptor.timeout_ms() },
			..self.slot_data(descriptor)
		})
	}

	fn slot_data(&self, descriptor: &NotificationDescriptor) -> NOTIFYICONDATAW {
		NOTIFYICONDATAW {
			cbSize: size_of::<NOTIFYICONDATAW>() as u32,
			hWnd: self.owner.unwrap_or_default(),
			uID: descriptor.slot.0,
			..Default::default()
		}
	}
}

impl NotifyShell for Win32Shell {
	fn add(&self, descriptor: &NotificationDescriptor) -> Result<()> {
		let data = self.balloon_data(descriptor)?;
		self.submit(NIM_ADD, ShellPhase::Add, &data)
	}

	fn modify(&self, descriptor: &NotificationDescriptor) -> Result<()> {
		let data = self.balloon_data(descriptor)?;
		self.submit(NIM_MODIFY, ShellPhase::Modify, &data)
	}

	fn delete(&self, descriptor: &NotificationDescriptor) -> Result<()> {
		let data = self.slot_data(descriptor);
		self.submit(NIM_DELETE, ShellPhase::Delete, &data)
	}
}

fn load_stock_icon(icon: StockIcon) -> Result<HICON> {
	let name = match icon {
		StockIcon::Information => IDI_INFORMATION,
		StockIcon::Error => IDI_ERROR,
		StockIcon::Warning => IDI_WARNING,
	};
	// Stock icons live in the system, so no module handle is needed.
	unsafe { LoadIconW(None, name) }.map_err(|e| Error::IconLoad(e.message()))
}

const fn info_flags(flag: BalloonFlag) -> NOTIFY_ICON_INFOTIP_FLAGS {
	match flag {
		BalloonFlag::Info => NIIF_INFO,
		BalloonFlag::Error => NIIF_ERROR,
		BalloonFlag::Warning => NIIF_WARNING,
		BalloonFlag::NoIcon => NIIF_NONE,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{config::EmitterConfig, severity::Severity, text::to_wide};

	fn descriptor(title: &str, message: &str, severity: Severity) -> NotificationDescriptor {
		NotificationDescriptor::build(&to_wide(title), &to_wide(message), severity, &EmitterConfig::default())
	}

	#[test]
	fn heading_and_body_land_in_their_own_fields() {
		let d = descriptor("Build OK", "All tests passed", Severity::Info);
		let data = Win32Shell::new().balloon_data(&d).unwrap();
		assert_eq!(data.szInfo, *d.info.raw());
		assert_eq!(data.szInfoTitle, *d.info_title.raw());
		assert_ne!(data.szInfo, data.szInfoTitle);
		assert_eq!(data.szTip, *d.tip.raw());
	}

	#[test]
	fn slot_and_info_flags_follow_severity() {
		let expected = [
			(Severity::Info, 1001, NIIF_INFO),
			(Severity::Error, 1002, NIIF_ERROR),
			(Severity::Warning, 1003, NIIF_WARNING),
			(Severity::None, 1004, NIIF_NONE),
		];
		for (severity, id, flags) in expected {
			let data = Win32Shell::new().balloon_data(&descriptor("t", "m", severity)).unwrap();
			assert_eq!(data.uID, id);
			assert_eq!(data.dwInfoFlags, flags);
			assert_eq!(info_flags(severity.flag()), flags);
		}
	}

	#[test]
	fn balloon_carries_info_icon_and_tip_with_two_second_timeout() {
		let data = Win32Shell::new().balloon_data(&descriptor("t", "m", Severity::Warning)).unwrap();
		assert_eq!(data.uFlags, NIF_INFO | NIF_ICON | NIF_TIP);
		assert_eq!(unsafe { data.Anonymous.uTimeout }, 2000);
		assert_eq!(data.cbSize as usize, size_of::<NOTIFYICONDATAW>());
		assert!(!data.hIcon.is_invalid());
		assert!(data.hWnd.is_invalid());
	}

	#[test]
	fn slot_data_only_identifies_the_slot() {
		let data = Win32Shell::new().slot_data(&NotificationDescriptor::slot_only(Severity::Error));
		assert_eq!(data.uID, 1002);
		assert_eq!(data.cbSize as usize, size_of::<NOTIFYICONDATAW>());
		assert_eq!(data.uFlags.0, 0);
		assert_eq!(data.szInfo, [0u16; 256]);
	}
}
