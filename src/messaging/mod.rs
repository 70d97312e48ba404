//! Message domain records: `Message`, its `Header`/`Properties` sections, and the three body
//! section shapes (`Data`, `AmqpSequence`, `AmqpValue`). Grounded in
//! `fe2o3-amqp-types::messaging`'s module layout — one file per record — with every `serde` impl
//! stripped in favor of the explicit encoders in [`crate::encode::payload`].

mod amqp_sequence;
mod amqp_value;
mod data;
mod header;
mod message;
mod message_id;
mod properties;

pub use amqp_sequence::AmqpSequence;
pub use amqp_value::AmqpValue;
pub use data::Data;
pub use header::Header;
pub use message::{BodySection, Message};
pub use message_id::MessageId;
pub use properties::Properties;
