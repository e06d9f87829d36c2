use uuid::Uuid;

use crate::application::ports::ToastVariant;

/// How long a toast stays on screen.
pub const TOAST_TTL_MS: u64 = 2_500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub variant: ToastVariant,
    pub text: String,
    pub ttl_ms: u64,
}

impl Toast {
    pub fn new(text: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            variant,
            text: text.into(),
            ttl_ms: TOAST_TTL_MS,
        }
    }

    pub fn icon(&self) -> &'static str {
        icon(self.variant)
    }

    pub fn render(&self) -> String {
        format!("{} {}", self.icon(), self.text)
    }
}

pub fn icon(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Create => "✅",
        ToastVariant::Update => "ℹ️",
        ToastVariant::Delete => "🗑️",
        ToastVariant::Default => "ℹ️",
    }
}
