//! Render model for the export modal
//!
//! Everything here is derived from the current selection on demand; nothing
//! is cached between renders.

use crate::domain::{Batch, ContentFragmentRef, FragmentId};
use serde::Serialize;

pub const PUBLISH_PROMPT_MESSAGE: &str = "The Adobe Target offer may not be displayed correctly if the Content Fragment is not published.<br>Do you also want to publish the Content Fragment?";

pub const PUBLISH_PROMPT_MESSAGE_MULTIPLE: &str = "The Adobe Target offers may not be displayed correctly if the pages are not published.<br>Do you also want to publish the pages?";

pub const PUBLISH_WARNING: &str =
    "Please note that publish will publish the Content Fragment Models and variations as well.";

const UNPUBLISHED_HEADING_SINGLE: &str = "The following content fragment is not published:";
const UNPUBLISHED_HEADING_MULTIPLE: &str = "The following content fragments are not published:";

/// Workspace picker entries as `(key, label)`
pub const WORKSPACES: &[(&str, &str)] = &[
    ("0", "Default Workspace"),
    ("sometimes", "My Workspace"),
    ("always", "Hidden Workspace"),
];

/// Link to an unpublished fragment in the editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnpublishedLink {
    pub id: FragmentId,
    pub title: String,
    /// Fallback navigation target; clicks are routed through the host instead
    pub href: String,
}

impl From<&ContentFragmentRef> for UnpublishedLink {
    fn from(cf: &ContentFragmentRef) -> Self {
        Self {
            id: cf.id.clone(),
            title: cf.title.clone(),
            href: editor_href(&cf.id),
        }
    }
}

/// Fallback editor URL for a fragment
pub fn editor_href(id: &FragmentId) -> String {
    format!("/index.html#/content-fragment/{}", id.relative_path())
}

/// What the modal shows for its current state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalView {
    /// Set while publish/export runs; the rest of the view is hidden then
    pub processing: bool,
    pub prompt: &'static str,
    pub unpublished_heading: &'static str,
    pub unpublished: Vec<UnpublishedLink>,
    pub warning: &'static str,
    pub workspaces: Vec<&'static str>,
}

impl ModalView {
    pub(crate) fn render(selection: &Batch, processing: bool) -> Self {
        let unpublished: Vec<UnpublishedLink> =
            selection.unpublished().map(UnpublishedLink::from).collect();

        let prompt = if selection.len() > 1 {
            PUBLISH_PROMPT_MESSAGE_MULTIPLE
        } else {
            PUBLISH_PROMPT_MESSAGE
        };

        let unpublished_heading = if unpublished.len() > 1 {
            UNPUBLISHED_HEADING_MULTIPLE
        } else {
            UNPUBLISHED_HEADING_SINGLE
        };

        Self {
            processing,
            prompt,
            unpublished_heading,
            unpublished,
            warning: PUBLISH_WARNING,
            workspaces: WORKSPACES.iter().map(|(_, label)| *label).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FragmentStatus;

    fn cf(id: &str, title: &str, status: FragmentStatus) -> ContentFragmentRef {
        ContentFragmentRef::new(FragmentId::new(id).unwrap(), title, status)
    }

    #[test]
    fn test_single_selection_uses_singular_texts() {
        let batch = Batch::new(vec![cf("/content/a", "A", FragmentStatus::Draft)]);
        let view = ModalView::render(&batch, false);

        assert_eq!(view.prompt, PUBLISH_PROMPT_MESSAGE);
        assert_eq!(view.unpublished_heading, UNPUBLISHED_HEADING_SINGLE);
        assert_eq!(view.unpublished.len(), 1);
    }

    #[test]
    fn test_multiple_unpublished_use_plural_texts() {
        let batch = Batch::new(vec![
            cf("/content/a", "A", FragmentStatus::Draft),
            cf("/content/b", "B", FragmentStatus::Modified),
            cf("/content/c", "C", FragmentStatus::Published),
        ]);
        let view = ModalView::render(&batch, false);

        assert_eq!(view.prompt, PUBLISH_PROMPT_MESSAGE_MULTIPLE);
        assert_eq!(view.unpublished_heading, UNPUBLISHED_HEADING_MULTIPLE);
        let titles: Vec<_> = view.unpublished.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_link_href_strips_leading_slash() {
        let id = FragmentId::new("/content/dam/site/hero").unwrap();
        assert_eq!(
            editor_href(&id),
            "/index.html#/content-fragment/content/dam/site/hero"
        );
    }

    #[test]
    fn test_workspace_labels() {
        let view = ModalView::render(&Batch::default(), false);
        assert_eq!(
            view.workspaces,
            vec!["Default Workspace", "My Workspace", "Hidden Workspace"]
        );
        assert_eq!(view.warning, PUBLISH_WARNING);
    }
}
