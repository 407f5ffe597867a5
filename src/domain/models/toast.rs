use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
            ToastLevel::Warning => "warning",
            ToastLevel::Error => "error",
        }
    }

    /// Glyph prepended to the rendered line for this level
    pub fn glyph(&self) -> &'static str {
        match self {
            ToastLevel::Info => "ℹ",
            ToastLevel::Success => "✔",
            ToastLevel::Warning => "⚠",
            ToastLevel::Error => "✖",
        }
    }
}

impl std::fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Toast entity shown to the workstation user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toast {
    pub id: String,
    pub level: ToastLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub body: String,
    pub created_at: String, // ISO 8601 timestamp
}

impl Toast {
    pub fn new(level: ToastLevel, body: String) -> Self {
        let now = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap();

        Self {
            id: Uuid::new_v4().to_string(),
            level,
            title: None,
            body,
            created_at: now,
        }
    }

    pub fn with_title(level: ToastLevel, title: String, body: String) -> Self {
        let mut toast = Self::new(level, body);
        toast.title = Some(title);
        toast
    }

    pub fn info(body: String) -> Self {
        Self::new(ToastLevel::Info, body)
    }

    pub fn success(body: String) -> Self {
        Self::new(ToastLevel::Success, body)
    }

    pub fn warning(body: String) -> Self {
        Self::new(ToastLevel::Warning, body)
    }

    pub fn error(body: String) -> Self {
        Self::new(ToastLevel::Error, body)
    }

    /// Render the toast as one plain text line the embedding UI can print
    pub fn render_line(&self) -> String {
        match &self.title {
            Some(title) => format!("{} {}: {}", self.level.glyph(), title, self.body),
            None => format!("{} {}", self.level.glyph(), self.body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_tags_and_glyphs() {
        assert_eq!(ToastLevel::Success.as_str(), "success");
        assert_eq!(ToastLevel::Error.as_str(), "error");
        assert_eq!(ToastLevel::Success.glyph(), "✔");
        assert_eq!(ToastLevel::Warning.glyph(), "⚠");
    }

    #[test]
    fn test_render_line_without_title() {
        let toast = Toast::success("Sale recorded".to_string());
        assert_eq!(toast.render_line(), "✔ Sale recorded");
    }

    #[test]
    fn test_render_line_with_title() {
        let toast = Toast::with_title(
            ToastLevel::Error,
            "Sync".to_string(),
            "Could not reach the server".to_string(),
        );
        assert_eq!(toast.render_line(), "✖ Sync: Could not reach the server");
    }

    #[test]
    fn test_created_at_is_rfc3339() {
        let toast = Toast::info("Shift started".to_string());
        let parsed = time::OffsetDateTime::parse(
            &toast.created_at,
            &time::format_description::well_known::Rfc3339,
        );
        assert!(parsed.is_ok());
    }

    #[test]
    fn test_toasts_get_distinct_ids() {
        let a = Toast::info("first".to_string());
        let b = Toast::info("second".to_string());
        assert_ne!(a.id, b.id);
    }
}
