use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One learnable item, persisted as a single YAML document.
///
/// Every field is optional on disk; a missing field resolves to its default
/// here, so an empty (or unparsable) file is a valid blank record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Display text. When absent, the filename stem (underscores as spaces)
    /// stands in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Next due date. Absent means the item has never been scheduled and is
    /// classified as new.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Date of the most recent graded review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<NaiveDate>,

    /// Dates on which the item was reviewed or buried, append-only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub past_dates: Vec<NaiveDate>,

    /// FIFO ordering key (epoch seconds). Defaults to the file's
    /// modification time when absent; never interpreted as a review outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touch: Option<f64>,

    /// Suspended items are invisible to all selection.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub suspend: bool,
}

impl ItemRecord {
    /// Display label for the item backed by `path`.
    pub fn label(&self, path: &Path) -> String {
        match &self.content {
            Some(content) => content.clone(),
            None => label_from_path(path),
        }
    }
}

/// Filename stem with underscores rendered as spaces.
pub fn label_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn label_falls_back_to_filename() {
        let record = ItemRecord::default();
        let path = PathBuf::from("/root/Math/chain_rule.yaml");
        assert_eq!(record.label(&path), "chain rule");
    }

    #[test]
    fn content_wins_over_filename() {
        let record = ItemRecord {
            content: Some("the chain rule".to_string()),
            ..ItemRecord::default()
        };
        assert_eq!(record.label(Path::new("x.yaml")), "the chain rule");
    }

    #[test]
    fn default_record_is_new_and_not_suspended() {
        let record = ItemRecord::default();
        assert!(record.date.is_none());
        assert!(!record.suspend);
        assert!(record.past_dates.is_empty());
    }
}
