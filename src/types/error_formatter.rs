//! Report formatting utilities.

use core::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trait for customizing how a list of errors is rendered.
pub trait ReportFormatter {
    fn format_item(&self, _index: usize, item: &dyn Display) -> String {
        item.to_string()
    }

    fn separator(&self) -> &str {
        "\n"
    }

    fn format_report<'a>(&self, items: impl Iterator<Item = &'a dyn Display>) -> String {
        items
            .enumerate()
            .map(|(i, item)| self.format_item(i, item))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

/// Configuration-based report layout.
///
/// # Examples
///
/// ```
/// use validation_rail::types::error_formatter::{ReportFormat, ReportFormatter};
///
/// let items = ["first", "second"];
/// let report = ReportFormat::bulleted()
///     .format_report(items.iter().map(|s| s as &dyn core::fmt::Display));
/// assert_eq!(report, "- first\n- second");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReportFormat {
    pub separator: String,
    pub item_prefix: Option<String>,
    pub numbered: bool,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self {
            separator: "\n".into(),
            item_prefix: None,
            numbered: false,
        }
    }
}

impl ReportFormat {
    /// Single line, entries joined with ` | `.
    #[inline]
    pub fn compact() -> Self {
        Self {
            separator: " | ".into(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn bulleted() -> Self {
        Self {
            item_prefix: Some("- ".into()),
            ..Default::default()
        }
    }

    /// One entry per line, prefixed with `1. `, `2. `, ...
    #[inline]
    pub fn numbered() -> Self {
        Self {
            numbered: true,
            ..Default::default()
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl ReportFormatter for ReportFormat {
    fn format_item(&self, index: usize, item: &dyn Display) -> String {
        let mut result = String::new();
        if self.numbered {
            result.push_str(&format!("{}. ", index + 1));
        }
        if let Some(prefix) = &self.item_prefix {
            result.push_str(prefix);
        }
        result.push_str(&item.to_string());
        result
    }

    fn separator(&self) -> &str {
        &self.separator
    }
}
