//! `AmqpSequence`: a message body section carrying an ordered list of AMQP values (§3.2.7, §6
//! "AmqpSequence"). Grounded in `fe2o3-amqp-types::messaging::AmqpSequence`, specialized to
//! `Vec<Value>` for the same reason as [`super::amqp_value::AmqpValue`].

use crate::value::Value;

/// The list-of-values form of a message body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmqpSequence(pub Vec<Value>);

impl AmqpSequence {
    /// Creates a new [`AmqpSequence`].
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl From<Vec<Value>> for AmqpSequence {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}
