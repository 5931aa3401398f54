//! Toast notifications.

use std::fmt;

/// How long a toast stays up by default, in milliseconds.
pub const DEFAULT_TOAST_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl ToastKind {
    /// Parse a kind name; unknown names fall back to info.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }

    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Success => "#28a745",
            Self::Error => "#dc3545",
            Self::Info => "#17a2b8",
            Self::Warning => "#ffc107",
        }
    }

    /// Warning toasts sit on a yellow background and need dark text.
    #[must_use]
    pub const fn foreground(self) -> &'static str {
        match self {
            Self::Warning => "#1a1a1a",
            _ => "#fff",
        }
    }

    #[must_use]
    pub fn class(self) -> String {
        format!("toast toast-{} slide-in-top", self.as_str())
    }

    /// Inline style for the toast box.
    #[must_use]
    pub fn style(self) -> String {
        format!(
            "position:fixed;top:20px;right:20px;padding:15px 20px;border-radius:5px;z-index:9999;max-width:300px;word-wrap:break-word;background-color:{};color:{};",
            self.background(),
            self.foreground()
        )
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
}

/// Visible toasts in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast with the default duration and return its id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.push_for(message, kind, DEFAULT_TOAST_MS)
    }

    pub fn push_for(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        duration_ms: u32,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            duration_ms,
        });
        id
    }

    /// Remove a toast. Returns whether it was still visible.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_falls_back_to_info() {
        assert_eq!(ToastKind::parse("celebrate"), ToastKind::Info);
        assert_eq!(ToastKind::parse("warning").foreground(), "#1a1a1a");
        assert_eq!(ToastKind::Error.background(), "#dc3545");
        assert!(ToastKind::Success.style().contains("background-color:#28a745"));
    }

    #[test]
    fn queue_assigns_ids_and_dismisses() {
        let mut queue = ToastQueue::new();
        let first = queue.push("Request created!", ToastKind::Success);
        let second = queue.push_for("Network error", ToastKind::Error, 5000);
        assert_ne!(first, second);
        assert_eq!(queue.toasts()[1].duration_ms, 5000);
        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.toasts().len(), 1);
    }
}
