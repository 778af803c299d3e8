//! Navigation menu configuration

use serde::{Deserialize, Serialize};

/// One navigable destination shown in the overlay menu.
///
/// The shell never interprets the destination itself; it is handed to the
/// router as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Visible label.
    pub label: String,
    /// Destination path, handed to the router.
    pub href: String,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_config_json() {
        let entries: Vec<MenuEntry> = serde_json::from_str(
            r#"[
                {"label": "Home", "href": "/"},
                {"label": "Docs", "href": "/docs"}
            ]"#,
        )
        .expect("valid menu config");

        assert_eq!(
            entries,
            vec![
                MenuEntry::new("Home", "/"),
                MenuEntry::new("Docs", "/docs"),
            ]
        );
    }
}
