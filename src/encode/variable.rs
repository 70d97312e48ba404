//! Variable-width primitive encoders: `binary`, `string`, `symbol`. Grounded in
//! `serde_amqp::ser::Serializer::{serialize_bytes, serialize_str}`, which pick the short
//! (`vbin8`/`str8`/`sym8`) vs. long (`vbin32`/`str32`/`sym32`) form by the *encoded* byte length,
//! not by element count.

use bytes::BufMut;

use crate::error::{Error, Result};
use crate::fixed_width::VARIABLE_WIDTH_SHORT_MAX;
use crate::format_code::EncodingCodes;
use crate::primitives::Symbol;

fn check_length(type_name: &'static str, len: usize) -> Result<()> {
    if len > u32::MAX as usize {
        return Err(Error::range(type_name, len, "encoded length must be less than 2^32"));
    }
    Ok(())
}

fn write_variable_width(
    buf: &mut Vec<u8>,
    bytes: &[u8],
    short_code: EncodingCodes,
    long_code: EncodingCodes,
    with_constructor: bool,
    use_smallest: bool,
) {
    let len = bytes.len();
    if use_smallest && len <= VARIABLE_WIDTH_SHORT_MAX {
        if with_constructor {
            buf.put_u8(short_code as u8);
        }
        buf.put_u8(len as u8);
    } else {
        if with_constructor {
            buf.put_u8(long_code as u8);
        }
        buf.put_u32(len as u32);
    }
    buf.put_slice(bytes);
}

/// `binary` (`0xA0`/`0xB0`). Octets are copied verbatim; no re-encoding happens.
pub fn encode_binary(buf: &mut Vec<u8>, value: &[u8], with_constructor: bool, use_smallest: bool) -> Result<()> {
    check_length("binary", value.len())?;
    write_variable_width(
        buf,
        value,
        EncodingCodes::VBin8,
        EncodingCodes::VBin32,
        with_constructor,
        use_smallest,
    );
    Ok(())
}

/// `string` (`0xA1`/`0xB1`). Length is measured in UTF-8 bytes, not chars.
pub fn encode_string(buf: &mut Vec<u8>, value: &str, with_constructor: bool, use_smallest: bool) -> Result<()> {
    let bytes = value.as_bytes();
    check_length("string", bytes.len())?;
    write_variable_width(
        buf,
        bytes,
        EncodingCodes::Str8,
        EncodingCodes::Str32,
        with_constructor,
        use_smallest,
    );
    Ok(())
}

/// `symbol` (`0xA3`/`0xB3`). AMQP restricts `symbol` to the ASCII range; non-ASCII content is a
/// range error raised before any byte of the symbol is written.
pub fn encode_symbol(buf: &mut Vec<u8>, value: &Symbol, with_constructor: bool, use_smallest: bool) -> Result<()> {
    let text = value.as_str();
    if !text.is_ascii() {
        return Err(Error::range("symbol", text, "symbol content must be ASCII"));
    }
    let bytes = text.as_bytes();
    check_length("symbol", bytes.len())?;
    write_variable_width(
        buf,
        bytes,
        EncodingCodes::Sym8,
        EncodingCodes::Sym32,
        with_constructor,
        use_smallest,
    );
    Ok(())
}
