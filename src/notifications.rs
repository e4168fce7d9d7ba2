use crate::{
	config::EmitterConfig,
	descriptor::NotificationDescriptor,
	error::{Error, Result},
	severity::Severity,
	shell::NotifyShell,
	text::to_wide,
};

/// A single balloon to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
	pub title: String,
	pub message: String,
	pub severity: Severity,
}

impl NotificationRequest {
	pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
		Self { title: title.into(), message: message.into(), severity: Severity::default() }
	}

	#[must_use]
	pub fn with_severity(mut self, severity: Severity) -> Self {
		self.severity = severity;
		self
	}
}

pub struct NotificationEmitter<S> {
	shell: S,
	config: EmitterConfig,
}

impl<S: NotifyShell> NotificationEmitter<S> {
	pub fn new(shell: S) -> Self {
		Self::with_config(shell, EmitterConfig::default())
	}

	pub const fn with_config(shell: S, config: EmitterConfig) -> Self {
		Self { shell, config }
	}

	pub fn describe(&self, request: &NotificationRequest) -> NotificationDescriptor {
		NotificationDescriptor::build(
			&to_wide(&request.title),
			&to_wide(&request.message),
			request.severity,
			&self.config,
		)
	}

	/// Shows `request` by registering its slot and then updating it.
	///
	/// A rejected add is logged and the update still runs. Only a rejected
	/// modify is reported.
	pub fn emit(&self, request: &NotificationRequest) -> Result<()> {
		let descriptor = self.describe(request);
		log::debug!(
			"Showing notification in slot {} ({}): {:?} / {:?}",
			descriptor.slot,
			descriptor.flag,
			descriptor.info_title,
			descriptor.info
		);
		match self.shell.add(&descriptor) {
			Ok(()) => {}
			Err(Error::Shell { phase, slot }) => log::warn!("Shell rejected {phase} for slot {slot}, updating anyway"),
			Err(err) => return Err(err),
		}
		self.shell.modify(&descriptor)
	}

	/// Like [`emit`](Self::emit), but takes the raw integer severity code.
	pub fn emit_code(&self, title: &str, message: &str, code: i32) -> Result<()> {
		let severity = Severity::from_code(code)?;
		self.emit(&NotificationRequest::new(title, message).with_severity(severity))
	}

	/// Removes the tray slot used by `severity`.
	pub fn dismiss(&self, severity: Severity) -> Result<()> {
		self.shell.delete(&NotificationDescriptor::slot_only(severity))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		config::IconPolicy,
		descriptor::StockIcon,
		error::ShellPhase,
		severity::SlotId,
		shell::testing::RecordingShell,
	};

	#[test]
	fn build_ok_uses_info_slot() {
		let shell = RecordingShell::default();
		let emitter = NotificationEmitter::new(&shell);
		emitter.emit(&NotificationRequest::new("Build OK", "All tests passed")).unwrap();

		let calls = shell.calls.borrow();
		let d = &calls[1].descriptor;
		assert_eq!(d.slot, SlotId(1001));
		assert_eq!(d.flag.as_str(), "info");
		assert_eq!(d.info.to_string_lossy(), "All tests passed");
		assert_eq!(d.info_title.to_string_lossy(), "Build OK");
	}

	#[test]
	fn build_failed_uses_error_slot() {
		let shell = RecordingShell::default();
		NotificationEmitter::new(&shell).emit_code("Build Failed", "2 errors", 1).unwrap();

		let calls = shell.calls.borrow();
		assert_eq!(calls[0].descriptor.slot, SlotId(1002));
		assert_eq!(calls[0].descriptor.flag.as_str(), "error");
	}

	#[test]
	fn adds_then_modifies_with_same_descriptor() {
		let shell = RecordingShell::default();
		NotificationEmitter::new(&shell).emit_code("t", "m", 2).unwrap();

		assert_eq!(shell.phases(), [ShellPhase::Add, ShellPhase::Modify]);
		let calls = shell.calls.borrow();
		assert_eq!(calls[0].descriptor, calls[1].descriptor);
	}

	#[test]
	fn every_valid_code_selects_its_table_entry() {
		for severity in Severity::ALL {
			let shell = RecordingShell::default();
			NotificationEmitter::new(&shell).emit_code("t", "m", severity.code()).unwrap();
			let calls = shell.calls.borrow();
			assert_eq!(calls[1].descriptor.slot, severity.slot());
			assert_eq!(calls[1].descriptor.flag, severity.flag());
		}
	}

	#[test]
	fn invalid_code_submits_nothing() {
		for code in [4, -1, 99] {
			let shell = RecordingShell::default();
			let result = NotificationEmitter::new(&shell).emit_code("x", "y", code);
			assert!(matches!(result, Err(Error::InvalidSeverity(c)) if c == code));
			assert!(shell.calls.borrow().is_empty());
		}
	}

	#[test]
	fn non_ascii_text_reaches_the_shell_intact() {
		let shell = RecordingShell::default();
		NotificationEmitter::new(&shell).emit(&NotificationRequest::new("Größe ✓", "ビルド成功 🎉")).unwrap();
		let calls = shell.calls.borrow();
		let d = &calls[1].descriptor;
		assert_eq!(crate::text::from_wide(d.info_title.raw()).unwrap(), "Größe ✓");
		assert_eq!(crate::text::from_wide(d.info.raw()).unwrap(), "ビルド成功 🎉");
	}

	#[test]
	fn rejected_add_still_modifies() {
		let shell = RecordingShell::rejecting(ShellPhase::Add);
		NotificationEmitter::new(&shell).emit(&NotificationRequest::new("t", "m")).unwrap();
		assert_eq!(shell.phases(), [ShellPhase::Add, ShellPhase::Modify]);
	}

	#[test]
	fn rejected_modify_is_reported() {
		let shell = RecordingShell::rejecting(ShellPhase::Modify);
		let result = NotificationEmitter::new(&shell).emit(&NotificationRequest::new("t", "m").with_severity(Severity::Warning));
		assert!(matches!(result, Err(Error::Shell { phase: ShellPhase::Modify, slot: SlotId(1003) })));
	}

	#[test]
	fn configured_tooltip_and_icon_are_used() {
		let shell = RecordingShell::default();
		let config =
			EmitterConfig { tooltip: "CI".into(), timeout_ms: 500, icon: IconPolicy::MatchSeverity, ..EmitterConfig::default() };
		let emitter = NotificationEmitter::with_config(&shell, config);
		emitter.emit(&NotificationRequest::new("t", "m").with_severity(Severity::Error)).unwrap();
		let calls = shell.calls.borrow();
		let d = &calls[0].descriptor;
		assert_eq!(d.tip.to_string_lossy(), "CI");
		assert_eq!(d.icon, StockIcon::Error);
		assert_eq!(d.timeout_ms(), 500);
	}

	#[test]
	fn dismiss_deletes_the_severity_slot() {
		let shell = RecordingShell::default();
		NotificationEmitter::new(&shell).dismiss(Severity::None).unwrap();
		let calls = shell.calls.borrow();
		assert_eq!(shell.phases(), [ShellPhase::Delete]);
		assert_eq!(calls[0].descriptor.slot, SlotId(1004));
	}
}
