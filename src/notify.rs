//! Transient Notifier
//!
//! Ephemeral status messages ("toasts"). Each toast expires on its own after
//! the configured duration; several can be on screen at once, stacked in the
//! order they were raised. The notifier holds no clock: callers pass the
//! current time in milliseconds and arm their own timers.

use serde::Serialize;

/// Default time a toast stays visible
pub const DEFAULT_TOAST_MS: u64 = 3000;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    /// Background colour used by both renderers
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Success => "#28a745",
            Severity::Error => "#dc3545",
            Severity::Info => "#007bff",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✕",
            Severity::Info => "ℹ",
        }
    }
}

pub type ToastId = u64;

/// A single notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub created_at: i64,
    pub expires_at: i64,
}

impl Toast {
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at
    }
}

/// Stack of live toasts
#[derive(Debug, Clone)]
pub struct Notifier {
    toasts: Vec<Toast>,
    next_id: ToastId,
    duration_ms: u64,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_MS)
    }
}

impl Notifier {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            duration_ms,
        }
    }

    /// How long each toast lives
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Raise a toast and return its id
    pub fn push(&mut self, message: impl Into<String>, severity: Severity, now_ms: i64) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;

        let toast = Toast {
            id,
            message: message.into(),
            severity,
            created_at: now_ms,
            expires_at: now_ms.saturating_add(self.duration_ms as i64),
        };
        tracing::debug!(id, severity = ?toast.severity, message = %toast.message, "toast raised");
        self.toasts.push(toast);
        id
    }

    pub fn success(&mut self, message: impl Into<String>, now_ms: i64) -> ToastId {
        self.push(message, Severity::Success, now_ms)
    }

    pub fn error(&mut self, message: impl Into<String>, now_ms: i64) -> ToastId {
        self.push(message, Severity::Error, now_ms)
    }

    pub fn info(&mut self, message: impl Into<String>, now_ms: i64) -> ToastId {
        self.push(message, Severity::Info, now_ms)
    }

    /// Remove one toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop every toast whose time is up and return them
    pub fn expire(&mut self, now_ms: i64) -> Vec<Toast> {
        let (expired, live): (Vec<Toast>, Vec<Toast>) =
            self.toasts.drain(..).partition(|t| t.is_expired(now_ms));
        self.toasts = live;
        expired
    }

    /// Toasts still on screen at `now_ms`, oldest first
    pub fn visible(&self, now_ms: i64) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(move |t| !t.is_expired(now_ms))
    }

    /// All toasts not yet removed
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
