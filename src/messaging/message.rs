//! `Message`: the top-level record this crate's payload encoder assembles into the framed
//! section sequence described in §4.6/§6. Grounded in
//! `fe2o3-amqp-types::messaging::message::Message`, trimmed to `header`, `properties`, and
//! exactly one body form, and stripped of the link/session fields (`delivery_annotations`,
//! `message_annotations`, `footer`, …) that sit outside an encode-only crate's scope.

use super::{AmqpSequence, AmqpValue, Data, Header, Properties};
use crate::value::Value;

/// An AMQP 1.0 message: optional `header` and `properties` sections plus exactly one body form.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Transport headers (§6 "Header").
    pub header: Option<Header>,
    /// Immutable application properties (§6 "Properties").
    pub properties: Option<Properties>,
    /// The message body — one of `Data`, `AmqpSequence`, or `AmqpValue`.
    pub body: BodySection,
}

impl<T> From<T> for Message
where
    T: Into<BodySection>,
{
    fn from(value: T) -> Self {
        Message {
            header: None,
            properties: None,
            body: value.into(),
        }
    }
}

impl Message {
    /// Creates a builder seeded with the given body.
    pub fn builder(body: impl Into<BodySection>) -> Builder {
        Builder {
            header: None,
            properties: None,
            body: body.into(),
        }
    }
}

/// Builder for [`Message`].
#[derive(Debug, Clone)]
pub struct Builder {
    header: Option<Header>,
    properties: Option<Properties>,
    body: BodySection,
}

impl Builder {
    /// Sets the `header` section.
    pub fn header(mut self, header: impl Into<Option<Header>>) -> Self {
        self.header = header.into();
        self
    }

    /// Sets the `properties` section.
    pub fn properties(mut self, properties: impl Into<Option<Properties>>) -> Self {
        self.properties = properties.into();
        self
    }

    /// Replaces the body.
    pub fn body(mut self, body: impl Into<BodySection>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the [`Message`].
    pub fn build(self) -> Message {
        Message {
            header: self.header,
            properties: self.properties,
            body: self.body,
        }
    }
}

/// The message body: exactly one of a sequence of binary `Data` chunks, an `AmqpSequence` of
/// values, or a single `AmqpValue` (§3 "Collaborators").
#[derive(Debug, Clone, PartialEq)]
pub enum BodySection {
    /// One or more `Data` sections, each a raw binary chunk.
    Data(Vec<Data>),
    /// A single `AmqpSequence` section.
    Sequence(AmqpSequence),
    /// A single `AmqpValue` section.
    Value(AmqpValue),
}

impl BodySection {
    /// Builds a `Data`-bodied section from one binary chunk.
    pub fn data(chunk: impl Into<Vec<u8>>) -> Self {
        BodySection::Data(vec![Data(chunk.into())])
    }

    /// Builds a `Data`-bodied section from multiple binary chunks, each emitted as its own
    /// described Data section (§4.6).
    pub fn data_chunks(chunks: impl IntoIterator<Item = Vec<u8>>) -> Self {
        BodySection::Data(chunks.into_iter().map(Data).collect())
    }
}

impl From<Data> for BodySection {
    fn from(val: Data) -> Self {
        Self::Data(vec![val])
    }
}

impl From<AmqpSequence> for BodySection {
    fn from(val: AmqpSequence) -> Self {
        Self::Sequence(val)
    }
}

impl From<AmqpValue> for BodySection {
    fn from(val: AmqpValue) -> Self {
        Self::Value(val)
    }
}

impl From<Value> for BodySection {
    fn from(val: Value) -> Self {
        Self::Value(AmqpValue(val))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_value_converts_into_a_value_body() {
        let message: Message = Value::Bool(true).into();
        assert_eq!(message.body, BodySection::Value(AmqpValue(Value::Bool(true))));
        assert!(message.header.is_none());
        assert!(message.properties.is_none());
    }

    #[test]
    fn builder_sets_header_and_properties() {
        let message = Message::builder(BodySection::data(b"hi".to_vec()))
            .header(Header::builder().durable(true).build())
            .build();
        assert!(message.header.is_some());
        assert_eq!(message.body, BodySection::Data(vec![Data(b"hi".to_vec())]));
    }
}
