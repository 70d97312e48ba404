//! `Properties`: the second optional section of a message, carrying immutable application
//! metadata (§3.2.4, §6 "Properties"). Grounded in
//! `fe2o3-amqp-types::messaging::Properties`, with the `serde` derive stripped the same way as
//! [`super::header::Header`].
//!
//! Each field has a fixed wire type regardless of the host value handed to it: `to`/`subject`/
//! `reply_to`/`group_id`/`reply_to_group_id` always encode as `string`, `content_type`/
//! `content_encoding` always as `symbol`, `user_id` always as `binary`, and `message_id`/
//! `correlation_id` as the 4-variant [`MessageId`] union.

use crate::primitives::Symbol;
use crate::primitives::Timestamp;

use super::MessageId;

/// Immutable properties of a message (§6 "Properties"). An unset field encodes as AMQP `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    /// Application-provided message identifier.
    pub message_id: Option<MessageId>,
    /// The identity of the user responsible for producing the message.
    pub user_id: Option<Vec<u8>>,
    /// The address of the node the message is destined for.
    pub to: Option<String>,
    /// A common field for summary information about the message content and purpose.
    pub subject: Option<String>,
    /// The address of the node to send replies to.
    pub reply_to: Option<String>,
    /// Client-specific id referencing the message this is a reply to.
    pub correlation_id: Option<MessageId>,
    /// MIME type describing the message body's encoding.
    pub content_type: Option<Symbol>,
    /// Content-encoding of the message body, e.g. `"gzip"`.
    pub content_encoding: Option<Symbol>,
    /// An absolute time after which the message is considered to be expired.
    pub absolute_expiry_time: Option<Timestamp>,
    /// An absolute time when this message was created.
    pub creation_time: Option<Timestamp>,
    /// Identifies the group the message belongs to.
    pub group_id: Option<String>,
    /// The relative position of this message within its group.
    pub group_sequence: Option<u32>,
    /// The group the reply message belongs to.
    pub reply_to_group_id: Option<String>,
}

impl Properties {
    /// Creates a builder for [`Properties`].
    pub fn builder() -> Builder {
        Builder::default()
    }
}

/// Builder for [`Properties`].
#[derive(Debug, Default, Clone)]
pub struct Builder {
    inner: Properties,
}

impl Builder {
    /// Sets the `message_id` field.
    pub fn message_id(mut self, value: impl Into<MessageId>) -> Self {
        self.inner.message_id = Some(value.into());
        self
    }

    /// Sets the `user_id` field.
    pub fn user_id(mut self, value: impl Into<Vec<u8>>) -> Self {
        self.inner.user_id = Some(value.into());
        self
    }

    /// Sets the `to` field.
    pub fn to(mut self, value: impl Into<String>) -> Self {
        self.inner.to = Some(value.into());
        self
    }

    /// Sets the `subject` field.
    pub fn subject(mut self, value: impl Into<String>) -> Self {
        self.inner.subject = Some(value.into());
        self
    }

    /// Sets the `reply_to` field.
    pub fn reply_to(mut self, value: impl Into<String>) -> Self {
        self.inner.reply_to = Some(value.into());
        self
    }

    /// Sets the `correlation_id` field.
    pub fn correlation_id(mut self, value: impl Into<MessageId>) -> Self {
        self.inner.correlation_id = Some(value.into());
        self
    }

    /// Sets the `content_type` field.
    pub fn content_type(mut self, value: impl Into<Symbol>) -> Self {
        self.inner.content_type = Some(value.into());
        self
    }

    /// Sets the `content_encoding` field.
    pub fn content_encoding(mut self, value: impl Into<Symbol>) -> Self {
        self.inner.content_encoding = Some(value.into());
        self
    }

    /// Sets the `absolute_expiry_time` field.
    pub fn absolute_expiry_time(mut self, value: impl Into<Timestamp>) -> Self {
        self.inner.absolute_expiry_time = Some(value.into());
        self
    }

    /// Sets the `creation_time` field.
    pub fn creation_time(mut self, value: impl Into<Timestamp>) -> Self {
        self.inner.creation_time = Some(value.into());
        self
    }

    /// Sets the `group_id` field.
    pub fn group_id(mut self, value: impl Into<String>) -> Self {
        self.inner.group_id = Some(value.into());
        self
    }

    /// Sets the `group_sequence` field.
    pub fn group_sequence(mut self, value: u32) -> Self {
        self.inner.group_sequence = Some(value);
        self
    }

    /// Sets the `reply_to_group_id` field.
    pub fn reply_to_group_id(mut self, value: impl Into<String>) -> Self {
        self.inner.reply_to_group_id = Some(value.into());
        self
    }

    /// Builds the [`Properties`].
    pub fn build(self) -> Properties {
        self.inner
    }
}

impl From<Builder> for Properties {
    fn from(builder: Builder) -> Self {
        builder.build()
    }
}
