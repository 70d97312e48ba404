//! `AmqpValue`: a message body section carrying a single AMQP value (§3.2.8, §6 "AmqpValue").
//! Grounded in `fe2o3-amqp-types::messaging::AmqpValue`, specialized to
//! [`crate::value::Value`] instead of a generic `T: Serialize`, since this crate has no
//! `Serialize` trait to generalize over.

use crate::value::Value;

/// The single-value form of a message body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmqpValue(pub Value);

impl<T: Into<Value>> From<T> for AmqpValue {
    fn from(value: T) -> Self {
        Self(value.into())
    }
}
