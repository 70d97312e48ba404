//! The `encode_*` function surface: one function per AMQP primitive and compound type, a tagged
//! dispatcher (`encode_value`), and a payload assembler (`encode_payload`).
//!
//! Every encoder shares the same shape, grounded in `serde_amqp::ser::Serializer`'s per-type
//! `serialize_*` methods but exposed as a plain function instead of a trait method, since this
//! crate does not implement `serde::Serializer` (see `DESIGN.md`):
//!
//! ```rust,ignore
//! fn encode_x(buf: &mut Vec<u8>, value: X, with_constructor: bool, use_smallest: bool) -> Result<()>
//! ```
//!
//! `buf` is the caller-owned, append-only output buffer (§5: no hidden I/O, no global state).
//! `with_constructor` controls whether the leading format-code byte is written at all.
//! `use_smallest` picks the shortest legal wire form; `false` forces the type's full-width form.
//! Every encoder validates its value's range *before* writing any byte, so a failing call leaves
//! `buf` exactly as long as it was (§4, §7).

mod compound;
mod dispatch;
mod payload;
mod primitives;
mod variable;

pub use compound::{encode_array, encode_list, encode_map};
pub use dispatch::{encode_descriptor, encode_value};
pub use payload::encode_payload;
pub use primitives::{
    encode_bool, encode_byte, encode_double, encode_float, encode_int, encode_long, encode_null,
    encode_short, encode_timestamp, encode_ubyte, encode_uint, encode_ulong, encode_ushort,
    encode_uuid,
};
pub use variable::{encode_binary, encode_string, encode_symbol};
