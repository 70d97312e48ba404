//! `message-id`: the 4-variant union AMQP 1.0 uses for both `Properties.message_id` and
//! `Properties.correlation_id` (§3.2.11–§3.2.14 of the AMQP 1.0 type system). Grounded in
//! `fe2o3-amqp-types::messaging::message_id::MessageId`, stripped of its `serde` visitor and
//! given a direct `From<MessageId> for Value` instead, since this crate dispatches encoding by
//! matching on [`crate::value::Value`] rather than through a `Serialize` impl.

use crate::primitives::{ULong, Uuid};
use crate::value::Value;

/// A message or correlation identifier, carried as one of four AMQP wire kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageId {
    /// `message-id-ulong`
    Ulong(ULong),
    /// `message-id-uuid`
    Uuid(Uuid),
    /// `message-id-binary`
    Binary(Vec<u8>),
    /// `message-id-string`
    String(String),
}

impl From<u64> for MessageId {
    fn from(value: u64) -> Self {
        Self::Ulong(value)
    }
}

impl From<Uuid> for MessageId {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<Vec<u8>> for MessageId {
    fn from(value: Vec<u8>) -> Self {
        Self::Binary(value)
    }
}

impl From<String> for MessageId {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for MessageId {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<MessageId> for Value {
    fn from(id: MessageId) -> Self {
        match id {
            MessageId::Ulong(v) => Value::ULong(v),
            MessageId::Uuid(v) => Value::Uuid(v),
            MessageId::Binary(v) => Value::Binary(v),
            MessageId::String(v) => Value::String(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_every_variant_to_its_wire_value() {
        assert_eq!(Value::from(MessageId::from(123u64)), Value::ULong(123));
        assert_eq!(
            Value::from(MessageId::from(vec![1u8, 2])),
            Value::Binary(vec![1, 2])
        );
        assert_eq!(
            Value::from(MessageId::from("amqp")),
            Value::String("amqp".to_string())
        );
    }
}
