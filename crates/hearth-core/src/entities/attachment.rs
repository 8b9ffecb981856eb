use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AttachmentKind;
use crate::ids;

/// A file descriptor collected before a chat message is submitted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Attachment {
    /// Short random token, only used to unstage the file before submission.
    pub id: String,
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Attachment {
    /// Build a descriptor with a freshly generated id.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        size: u64,
        mime_type: impl Into<String>,
        url: Option<String>,
    ) -> Self {
        Self {
            id: ids::short_id(ids::PREFIX_ATTACHMENT),
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            url,
        }
    }

    #[must_use]
    pub fn kind(&self) -> AttachmentKind {
        AttachmentKind::from_mime(&self.mime_type)
    }
}

#[cfg(test)]
mod tests {
    use super::Attachment;
    use crate::enums::AttachmentKind;

    #[test]
    fn new_attachments_get_distinct_ids() {
        let a = Attachment::new("sink.jpg", 2048, "image/jpeg", None);
        let b = Attachment::new("sink.jpg", 2048, "image/jpeg", None);
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("att-"));
    }

    #[test]
    fn kind_follows_mime_type() {
        let photo = Attachment::new("leak.png", 10, "image/png", None);
        let notes = Attachment::new("notes.txt", 10, "text/plain", None);
        let lease = Attachment::new("lease.pdf", 10, "application/pdf", None);
        assert_eq!(photo.kind(), AttachmentKind::Image);
        assert_eq!(notes.kind(), AttachmentKind::Document);
        assert_eq!(lease.kind(), AttachmentKind::File);
    }
}
