//! Content Fragment references and selection batches

use super::errors::BatchError;
use super::ids::FragmentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Publish status of a Content Fragment as reported by the host console
///
/// The console sends free-form status strings, so unknown values are kept
/// verbatim in [`FragmentStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FragmentStatus {
    Draft,
    Published,
    Modified,
    Unpublished,
    Other(String),
}

impl FragmentStatus {
    /// Case-insensitive check against "published"
    pub fn is_published(&self) -> bool {
        matches!(self, FragmentStatus::Published)
    }
}

impl From<String> for FragmentStatus {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "draft" => FragmentStatus::Draft,
            "published" => FragmentStatus::Published,
            "modified" => FragmentStatus::Modified,
            "unpublished" => FragmentStatus::Unpublished,
            _ => FragmentStatus::Other(value),
        }
    }
}

impl From<FragmentStatus> for String {
    fn from(status: FragmentStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for FragmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentStatus::Draft => write!(f, "Draft"),
            FragmentStatus::Published => write!(f, "Published"),
            FragmentStatus::Modified => write!(f, "Modified"),
            FragmentStatus::Unpublished => write!(f, "Unpublished"),
            FragmentStatus::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Read-only copy of a Content Fragment selected in the host console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFragmentRef {
    /// Repository path of the fragment
    pub id: FragmentId,

    /// Display title
    pub title: String,

    /// Publish status at selection time
    pub status: FragmentStatus,
}

impl ContentFragmentRef {
    /// Create a new fragment reference
    pub fn new(id: FragmentId, title: impl Into<String>, status: FragmentStatus) -> Self {
        Self {
            id,
            title: title.into(),
            status,
        }
    }
}

/// Ordered selection of fragments handed to the export modal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch(Vec<ContentFragmentRef>);

impl Batch {
    /// Create a batch from fragment references, keeping their order
    pub fn new(fragments: Vec<ContentFragmentRef>) -> Self {
        Self(fragments)
    }

    /// Parse the JSON array the host stores for a batch
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Malformed`] if the data is not a JSON array of
    /// fragment references or an entry fails identifier validation.
    pub fn from_json(data: &str) -> Result<Self, BatchError> {
        serde_json::from_str(data).map_err(|e| BatchError::Malformed(e.to_string()))
    }

    /// Encode the batch in the stored JSON form
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn fragments(&self) -> &[ContentFragmentRef] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Identifiers of every selected fragment, in selection order
    pub fn paths(&self) -> Vec<FragmentId> {
        self.0.iter().map(|cf| cf.id.clone()).collect()
    }

    /// Fragments whose status is not "published"
    pub fn unpublished(&self) -> impl Iterator<Item = &ContentFragmentRef> {
        self.0.iter().filter(|cf| !cf.status.is_published())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"[
        {"id":"/content/a","title":"A","status":"Published"},
        {"id":"/content/b","title":"B","status":"Draft"}
    ]"#;

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert!(FragmentStatus::from("published".to_string()).is_published());
        assert!(FragmentStatus::from("PUBLISHED".to_string()).is_published());
        assert!(!FragmentStatus::from("Draft".to_string()).is_published());
        assert_eq!(
            FragmentStatus::from("Review".to_string()),
            FragmentStatus::Other("Review".to_string())
        );
    }

    #[test]
    fn test_batch_from_json() {
        let batch = Batch::from_json(SCENARIO).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.fragments()[0].title, "A");
        assert_eq!(batch.fragments()[1].status, FragmentStatus::Draft);
    }

    #[test]
    fn test_batch_paths_keep_order() {
        let batch = Batch::from_json(SCENARIO).unwrap();
        let paths: Vec<String> = batch.paths().into_iter().map(String::from).collect();
        assert_eq!(paths, vec!["/content/a", "/content/b"]);
    }

    #[test]
    fn test_unpublished_filter() {
        let batch = Batch::from_json(SCENARIO).unwrap();
        let titles: Vec<&str> = batch.unpublished().map(|cf| cf.title.as_str()).collect();
        assert_eq!(titles, vec!["B"]);
    }

    #[test]
    fn test_batch_from_json_rejects_malformed() {
        assert!(matches!(
            Batch::from_json("not json"),
            Err(BatchError::Malformed(_))
        ));
        assert!(matches!(
            Batch::from_json(r#"{"id":"/content/a"}"#),
            Err(BatchError::Malformed(_))
        ));
        assert!(matches!(
            Batch::from_json(r#"[{"id":"","title":"A","status":"Draft"}]"#),
            Err(BatchError::Malformed(_))
        ));
    }

    #[test]
    fn test_unknown_status_survives_reencoding() {
        let batch = Batch::from_json(r#"[{"id":"/content/x","title":"X","status":"In Review"}]"#)
            .unwrap();
        let json = batch.to_json().unwrap();
        assert!(json.contains("In Review"));
    }
}
