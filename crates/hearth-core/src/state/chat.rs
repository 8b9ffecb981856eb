use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify::RequestClassifier;
use crate::entities::{Attachment, ChatMessage, MaintenanceRequest};
use crate::enums::MessageKind;
use crate::errors::CoreError;
use crate::ids;

/// What a single submission added to the transcript.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatOutcome {
    pub message: ChatMessage,
    /// Present when the text was recognised as a maintenance request.
    pub request: Option<MaintenanceRequest>,
    /// Confirmation naming the new request id.
    pub reply: Option<ChatMessage>,
}

/// Chat transcript plus the attachments staged for the next message.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    staged: Vec<Attachment>,
    classifier: RequestClassifier,
}

impl ChatSession {
    /// Start a transcript with a single system greeting.
    #[must_use]
    pub fn new(welcome: impl Into<String>, classifier: RequestClassifier) -> Self {
        let greeting = ChatMessage {
            id: "welcome".to_string(),
            content: welcome.into(),
            kind: MessageKind::System,
            timestamp: Utc::now(),
            attachments: None,
        };
        Self {
            messages: vec![greeting],
            staged: Vec::new(),
            classifier,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn staged(&self) -> &[Attachment] {
        &self.staged
    }

    /// Queue a file for the next message and return its descriptor.
    pub fn stage_attachment(&mut self, attachment: Attachment) -> &Attachment {
        tracing::debug!(id = %attachment.id, name = %attachment.name, "attachment staged");
        self.staged.push(attachment);
        &self.staged[self.staged.len() - 1]
    }

    /// Drop a staged file by id.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` if nothing staged has `id`.
    pub fn unstage_attachment(&mut self, id: &str) -> Result<Attachment, CoreError> {
        let position = self
            .staged
            .iter()
            .position(|attachment| attachment.id == id)
            .ok_or_else(|| CoreError::not_found("attachment", id))?;
        Ok(self.staged.remove(position))
    }

    /// Submit `text` with whatever is staged, as of now.
    ///
    /// # Errors
    ///
    /// See [`ChatSession::submit_at`].
    pub fn submit(&mut self, text: &str) -> Result<ChatOutcome, CoreError> {
        self.submit_at(text, Utc::now())
    }

    /// Submit `text` with whatever is staged.
    ///
    /// The user message is always recorded. If the classifier recognises a
    /// request, a system confirmation follows it. Staged attachments travel
    /// with the message and are cleared afterwards.
    ///
    /// # Errors
    ///
    /// `CoreError::Validation` if `text` is blank and nothing is staged. The
    /// transcript and staged files are left untouched in that case.
    pub fn submit_at(&mut self, text: &str, now: DateTime<Utc>) -> Result<ChatOutcome, CoreError> {
        if text.trim().is_empty() && self.staged.is_empty() {
            return Err(CoreError::Validation(
                "message is empty and no files are attached".to_string(),
            ));
        }

        let attachments = std::mem::take(&mut self.staged);
        let request = self.classifier.classify_at(text, &attachments, now);

        let message = ChatMessage {
            id: ids::short_id(ids::PREFIX_MESSAGE),
            content: text.to_string(),
            kind: MessageKind::User,
            timestamp: now,
            attachments: (!attachments.is_empty()).then_some(attachments),
        };
        self.messages.push(message.clone());

        let reply = request.as_ref().map(|request| ChatMessage {
            id: ids::short_id(ids::PREFIX_MESSAGE),
            content: format!(
                "I've created a maintenance request for you! Request ID: {}",
                request.id
            ),
            kind: MessageKind::System,
            timestamp: now,
            attachments: None,
        });
        if let Some(reply) = &reply {
            self.messages.push(reply.clone());
        }

        Ok(ChatOutcome {
            message,
            request,
            reply,
        })
    }
}
