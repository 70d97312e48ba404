//! `Data`: a message body section carrying one opaque binary chunk (§3.2.6, §6 "Data").
//! Grounded in `fe2o3-amqp-types::messaging::Data`, reduced to a plain newtype since this crate
//! encodes it with a direct call to [`crate::encode::encode_binary`] rather than a `Serialize`
//! impl.

/// One `Data` section's payload. A [`super::BodySection::Data`] body may carry more than one —
/// AMQP 1.0 emits one described Data section per binary chunk (§4.6).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Data(pub Vec<u8>);

impl From<Vec<u8>> for Data {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for Data {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}
