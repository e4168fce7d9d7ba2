//! Windows tray balloon notifications.
//!
//! ```no_run
//! use traynote::{NotificationEmitter, NotificationRequest, PlatformShell, Severity};
//!
//! let emitter = NotificationEmitter::new(PlatformShell::new());
//! emitter.emit(&NotificationRequest::new("Build Failed", "2 errors").with_severity(Severity::Error))?;
//! # Ok::<(), traynote::Error>(())
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod notifications;
pub mod severity;
pub mod shell;
pub mod text;

pub use config::{ConfigStore, EmitterConfig, IconPolicy};
pub use descriptor::{NotificationDescriptor, StockIcon};
pub use error::{Error, Result};
pub use notifications::{NotificationEmitter, NotificationRequest};
pub use severity::{BalloonFlag, Severity, SlotId};
pub use shell::{NotifyShell, PlatformShell};
