use crate::{descriptor::NotificationDescriptor, error::Result};

#[cfg(target_os = "windows")]
mod win32;

#[cfg(target_os = "windows")]
pub use win32::Win32Shell;

/// The OS notification area, keyed by slot id.
pub trait NotifyShell {
	fn add(&self, descriptor: &NotificationDescriptor) -> Result<()>;
	fn modify(&self, descriptor: &NotificationDescriptor) -> Result<()>;
	fn delete(&self, descriptor: &NotificationDescriptor) -> Result<()>;
}

impl<S: NotifyShell + ?Sized> NotifyShell for &S {
	fn add(&self, descriptor: &NotificationDescriptor) -> Result<()> {
		(**self).add(descriptor)
	}

	fn modify(&self, descriptor: &NotificationDescriptor) -> Result<()> {
		(**self).modify(descriptor)
	}

	fn delete(&self, descriptor: &NotificationDescriptor) -> Result<()> {
		(**self).delete(descriptor)
	}
}

#[cfg(not(target_os = "windows"))]
#[derive(Debug, Default)]
pub struct UnsupportedShell;

#[cfg(not(target_os = "windows"))]
impl UnsupportedShell {
	pub const fn new() -> Self {
		Self
	}
}

#[cfg(not(target_os = "windows"))]
impl NotifyShell for UnsupportedShell {
	fn add(&self, _: &NotificationDescriptor) -> Result<()> {
		Err(crate::error::Error::Unsupported)
	}

	fn modify(&self, _: &NotificationDescriptor) -> Result<()> {
		Err(crate::error::Error::Unsupported)
	}

	fn delete(&self, _: &NotificationDescriptor) -> Result<()> {
		Err(crate::error::Error::Unsupported)
	}
}

#[cfg(target_os = "windows")]
pub type PlatformShell = Win32Shell;

#[cfg(not(target_os = "windows"))]
pub type PlatformShell = UnsupportedShell;
