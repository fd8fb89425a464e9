//! # Signal Surface
//!
//! User-facing signals the cart emits around mutations.
//!
//! ## Signal Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Notice Lifecycle                              │
//! │                                                                     │
//! │  CartStore mutation succeeds                                        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Notifier::notify(Notice)  ← trait seam, injected at construction   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  UI collaborator renders a transient, auto-dismissing toast         │
//! │  (the rendering itself is outside this workspace)                   │
//! │                                                                     │
//! │  Kinds mirror the toast styling: Success = green, Error = red.      │
//! │  "Removed"/"cleared" use Error styling on purpose; that is the      │
//! │  storefront's visual language, not a failure.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ts_rs::TS;

// =============================================================================
// Notice
// =============================================================================

/// Visual flavor of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    /// Green toast.
    Success,
    /// Red toast.
    Error,
}

/// One user-facing signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    /// Creates a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// Creates an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

// =============================================================================
// Notifier
// =============================================================================

/// Sink for user-facing signals.
///
/// The UI-binding layer supplies its own implementation; the two below cover
/// headless operation and tests.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Logs notices through `tracing` instead of a UI.
///
/// Used by the kiosk binary and any headless host.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => info!(message = %notice.message, "notice"),
            NoticeKind::Error => warn!(message = %notice.message, "notice"),
        }
    }
}

/// Buffers notices for later inspection.
#[derive(Debug, Default)]
pub struct BufferNotifier {
    notices: std::sync::Mutex<Vec<Notice>>,
}

impl BufferNotifier {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        BufferNotifier::default()
    }

    /// Returns and clears everything buffered so far.
    pub fn drain(&self) -> Vec<Notice> {
        let mut notices = self.notices.lock().expect("notice buffer poisoned");
        std::mem::take(&mut *notices)
    }

    /// Copy of the buffered notices, without clearing.
    pub fn snapshot(&self) -> Vec<Notice> {
        self.notices.lock().expect("notice buffer poisoned").clone()
    }
}

impl Notifier for BufferNotifier {
    fn notify(&self, notice: Notice) {
        let mut notices = self.notices.lock().expect("notice buffer poisoned");
        notices.push(notice);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
