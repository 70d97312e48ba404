#![deny(missing_docs, missing_debug_implementations)]

//! A bit-exact encoder for the AMQP 1.0 type system and message section framing.
//!
//! This crate writes AMQP 1.0 wire bytes; it does not read them back. Every encoder picks the
//! smallest legal wire form for its value by default and never seeks backward to patch a size or
//! count it already wrote — compound bodies are built into a temporary buffer first, and the
//! header is only written once the body's final length is known.
//!
//! # Primitive types
//!
//! The fixed-width and variable-width AMQP primitives (`null` through `array`) are each one
//! function in [`encode`], taking the value, a `with_constructor` flag (write the leading
//! format-code byte or not), and a `use_smallest` flag (pick the shortest legal wire form or
//! force the full-width one).
//!
//! ```
//! use amqp_codec::encode::encode_uint;
//!
//! let mut buf = Vec::new();
//! encode_uint(&mut buf, 1, true, true).unwrap();
//! assert_eq!(buf, vec![0x52, 0x01]); // smalluint
//! ```
//!
//! # Untyped values
//!
//! A heterogeneous AMQP value — a list element, a map key or value, a message body — is held in
//! [`value::Value`] and dispatched through [`encode::encode_value`], which matches on the
//! value's own variant unless the caller supplies an explicit [`value::Tagged::Explicit`]
//! override naming a different wire kind.
//!
//! # Message sections
//!
//! [`messaging::Message`] assembles the `Header`, `Properties`, and body sections a message
//! carries; [`encode::encode_payload`] writes them out in order as AMQP described types.
//!
//! ```
//! use amqp_codec::messaging::{BodySection, Header, Message};
//! use amqp_codec::encode::encode_payload;
//!
//! let message = Message::builder(BodySection::data(b"hello".to_vec()))
//!     .header(Header::builder().durable(true).build())
//!     .build();
//! let mut buf = Vec::new();
//! encode_payload(&mut buf, &message).unwrap();
//! ```
//!
//! # Feature flags
//!
//! - `chrono`: adds `From<chrono::DateTime<chrono::Utc>>` for [`primitives::Timestamp`].

pub mod descriptor;
pub mod encode;
pub mod error;
pub mod fixed_width;
pub mod format_code;
pub mod messaging;
pub mod primitives;
pub mod value;

pub use error::{Error, Result};
pub use value::Value;
