//! Fixed-width primitive encoders: null, boolean, the integer families, float/double, timestamp,
//! uuid. Grounded in `serde_amqp::ser::Serializer::serialize_{bool,i8,i16,i32,i64,u8,u16,u32,u64,
//! f32,f64}` — same constructor bytes, same small/zero-form thresholds, rewritten as free
//! functions that take the `with_constructor`/`use_smallest` flags explicitly instead of reading
//! them off serializer state.

use bytes::BufMut;

use crate::error::{Error, Result};
use crate::fixed_width::{TIMESTAMP_WIDTH, UUID_WIDTH};
use crate::format_code::EncodingCodes;
use crate::primitives::{Timestamp, Uuid};

/// `null` (`0x40`). Emits nothing when `with_constructor` is `false` — `null` has no payload.
pub fn encode_null(buf: &mut Vec<u8>, with_constructor: bool) -> Result<()> {
    if with_constructor {
        buf.put_u8(EncodingCodes::Null as u8);
    }
    Ok(())
}

/// `boolean` (`0x56` byte-valued, or `0x41`/`0x42` for the smallest true/false forms).
///
/// With `with_constructor`, `use_smallest` picks between the 1-byte smallest form (`0x41`/
/// `0x42`, no payload) and the 2-byte byte-valued form (`0x56` + payload byte) — the smallest
/// form is strictly shorter, which is what the smallest-monotonicity property requires.
/// Without `with_constructor`, only the payload byte (`0x00`/`0x01`) is written.
pub fn encode_bool(buf: &mut Vec<u8>, value: bool, with_constructor: bool, use_smallest: bool) -> Result<()> {
    if with_constructor {
        if use_smallest {
            buf.put_u8(if value {
                EncodingCodes::BooleanTrue as u8
            } else {
                EncodingCodes::BooleanFalse as u8
            });
        } else {
            buf.put_u8(EncodingCodes::Boolean as u8);
            buf.put_u8(value as u8);
        }
    } else {
        buf.put_u8(value as u8);
    }
    Ok(())
}

/// `ubyte` (`0x50` + 1 byte). A `u8` is always in range; `use_smallest` has nothing to pick
/// between (there is exactly one non-empty form), so it is accepted but ignored.
pub fn encode_ubyte(buf: &mut Vec<u8>, value: u8, with_constructor: bool, _use_smallest: bool) -> Result<()> {
    if with_constructor {
        buf.put_u8(EncodingCodes::UByte as u8);
    }
    buf.put_u8(value);
    Ok(())
}

/// `ushort` (`0x60` + 2 BE bytes). A `u16` is always in range.
pub fn encode_ushort(buf: &mut Vec<u8>, value: u16, with_constructor: bool, _use_smallest: bool) -> Result<()> {
    if with_constructor {
        buf.put_u8(EncodingCodes::UShort as u8);
    }
    buf.put_u16(value);
    Ok(())
}

/// `uint`: `0x43` (empty, value 0), `0x52` + 1 byte (1..=255), or `0x70` + 4 BE bytes (full).
/// `use_smallest=false` always forces the full, zero-extended form, even for `value == 0`.
pub fn encode_uint(buf: &mut Vec<u8>, value: u32, with_constructor: bool, use_smallest: bool) -> Result<()> {
    if use_smallest {
        match value {
            0 => {
                if with_constructor {
                    buf.put_u8(EncodingCodes::Uint0 as u8);
                }
            }
            1..=255 => {
                if with_constructor {
                    buf.put_u8(EncodingCodes::SmallUint as u8);
                }
                buf.put_u8(value as u8);
            }
            _ => {
                if with_constructor {
                    buf.put_u8(EncodingCodes::UInt as u8);
                }
                buf.put_u32(value);
            }
        }
    } else {
        if with_constructor {
            buf.put_u8(EncodingCodes::UInt as u8);
        }
        buf.put_u32(value);
    }
    Ok(())
}

/// `ulong`: `0x44` (empty, value 0), `0x53` + 1 byte (1..=255), or `0x80` + 8 BE bytes (full).
pub fn encode_ulong(buf: &mut Vec<u8>, value: u64, with_constructor: bool, use_smallest: bool) -> Result<()> {
    if use_smallest {
        match value {
            0 => {
                if with_constructor {
                    buf.put_u8(EncodingCodes::Ulong0 as u8);
                }
            }
            1..=255 => {
                if with_constructor {
                    buf.put_u8(EncodingCodes::SmallUlong as u8);
                }
                buf.put_u8(value as u8);
            }
            _ => {
                if with_constructor {
                    buf.put_u8(EncodingCodes::ULong as u8);
                }
                buf.put_u64(value);
            }
        }
    } else {
        if with_constructor {
            buf.put_u8(EncodingCodes::ULong as u8);
        }
        buf.put_u64(value);
    }
    Ok(())
}

/// `byte` (`0x51` + 1 signed byte). An `i8` is always in range.
pub fn encode_byte(buf: &mut Vec<u8>, value: i8, with_constructor: bool, _use_smallest: bool) -> Result<()> {
    if with_constructor {
        buf.put_u8(EncodingCodes::Byte as u8);
    }
    buf.put_i8(value);
    Ok(())
}

/// `short` (`0x61` + 2 BE two's-complement bytes). An `i16` is always in range.
pub fn encode_short(buf: &mut Vec<u8>, value: i16, with_constructor: bool, _use_smallest: bool) -> Result<()> {
    if with_constructor {
        buf.put_u8(EncodingCodes::Short as u8);
    }
    buf.put_i16(value);
    Ok(())
}

/// `int`: `0x54` + 1 signed byte when `use_smallest` and `-128..=127`, else `0x71` + 4 BE bytes.
pub fn encode_int(buf: &mut Vec<u8>, value: i32, with_constructor: bool, use_smallest: bool) -> Result<()> {
    if use_smallest && (-128..=127).contains(&value) {
        if with_constructor {
            buf.put_u8(EncodingCodes::SmallInt as u8);
        }
        buf.put_i8(value as i8);
    } else {
        if with_constructor {
            buf.put_u8(EncodingCodes::Int as u8);
        }
        buf.put_i32(value);
    }
    Ok(())
}

/// `long`: `0x55` + 1 signed byte when `use_smallest` and `-128..=127`, else `0x81` + 8 BE bytes.
pub fn encode_long(buf: &mut Vec<u8>, value: i64, with_constructor: bool, use_smallest: bool) -> Result<()> {
    if use_smallest && (-128..=127).contains(&value) {
        if with_constructor {
            buf.put_u8(EncodingCodes::SmallLong as u8);
        }
        buf.put_i8(value as i8);
    } else {
        if with_constructor {
            buf.put_u8(EncodingCodes::Long as u8);
        }
        buf.put_i64(value);
    }
    Ok(())
}

/// `float` (`0x72` + 4 bytes IEEE-754 binary32 BE). No size selection; `use_smallest` is ignored.
pub fn encode_float(buf: &mut Vec<u8>, value: f32, with_constructor: bool, _use_smallest: bool) -> Result<()> {
    if with_constructor {
        buf.put_u8(EncodingCodes::Float as u8);
    }
    buf.put_f32(value);
    Ok(())
}

/// `double` (`0x82` + 8 bytes IEEE-754 binary64 BE). No size selection.
pub fn encode_double(buf: &mut Vec<u8>, value: f64, with_constructor: bool, _use_smallest: bool) -> Result<()> {
    if with_constructor {
        buf.put_u8(EncodingCodes::Double as u8);
    }
    buf.put_f64(value);
    Ok(())
}

/// `timestamp` (`0x83` + 8 BE bytes): signed milliseconds since the Unix epoch.
pub fn encode_timestamp(
    buf: &mut Vec<u8>,
    value: Timestamp,
    with_constructor: bool,
    _use_smallest: bool,
) -> Result<()> {
    if with_constructor {
        buf.put_u8(EncodingCodes::Timestamp as u8);
    }
    debug_assert_eq!(TIMESTAMP_WIDTH, 8);
    buf.put_i64(value.milliseconds());
    Ok(())
}

/// `uuid` (`0x98` + 16 raw bytes), always the 16-byte big-endian form regardless of how the
/// [`Uuid`] was constructed (raw bytes, `uuid::Uuid`, or a canonical dashed-hex string).
pub fn encode_uuid(buf: &mut Vec<u8>, value: &Uuid, with_constructor: bool, _use_smallest: bool) -> Result<()> {
    if with_constructor {
        buf.put_u8(EncodingCodes::Uuid as u8);
    }
    let bytes = value.as_bytes();
    debug_assert_eq!(bytes.len(), UUID_WIDTH);
    buf.put_slice(bytes);
    Ok(())
}

/// Raises a [`Error::RangeError`] for an unsigned value supplied as negative rather than
/// silently absolute-valuing it.
pub(crate) fn reject_negative(type_name: &'static str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(Error::range(type_name, value, "unsigned type cannot hold a negative value"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_with_and_without_constructor() {
        let mut buf = Vec::new();
        encode_null(&mut buf, true).unwrap();
        assert_eq!(buf, vec![0x40]);

        let mut buf = Vec::new();
        encode_null(&mut buf, false).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn bool_smallest_vs_full() {
        let mut buf = Vec::new();
        encode_bool(&mut buf, true, true, true).unwrap();
        assert_eq!(buf, vec![0x41]);

        let mut buf = Vec::new();
        encode_bool(&mut buf, false, true, true).unwrap();
        assert_eq!(buf, vec![0x42]);

        let mut buf = Vec::new();
        encode_bool(&mut buf, true, true, false).unwrap();
        assert_eq!(buf, vec![0x56, 0x01]);

        let mut buf = Vec::new();
        encode_bool(&mut buf, true, false, true).unwrap();
        assert_eq!(buf, vec![0x01]);
    }

    #[test]
    fn ubyte_small_and_boundary() {
        let mut buf = Vec::new();
        encode_ubyte(&mut buf, 255, true, true).unwrap();
        assert_eq!(buf, vec![0x50, 0xFF]);
    }

    #[test]
    fn uint_zero_small_and_full_forms() {
        let mut buf = Vec::new();
        encode_uint(&mut buf, 0, true, true).unwrap();
        assert_eq!(buf, vec![0x43]);

        let mut buf = Vec::new();
        encode_uint(&mut buf, 255, true, true).unwrap();
        assert_eq!(buf, vec![0x52, 0xFF]);

        let mut buf = Vec::new();
        encode_uint(&mut buf, u32::MAX, true, true).unwrap();
        assert_eq!(buf[0], EncodingCodes::UInt as u8);
        assert_eq!(buf.len(), 5);

        let mut buf = Vec::new();
        encode_uint(&mut buf, 0, true, false).unwrap();
        assert_eq!(buf, vec![0x70, 0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn int_smallest_and_full_forms() {
        let mut buf = Vec::new();
        encode_int(&mut buf, 127, true, false).unwrap();
        assert_eq!(buf, vec![0x71, 0x00, 0x00, 0x00, 0x7F]);

        let mut buf = Vec::new();
        encode_int(&mut buf, 127, true, true).unwrap();
        assert_eq!(buf, vec![0x54, 0x7F]);
    }

    #[test]
    fn constructor_suppression_strips_leading_byte() {
        let mut with_ctor = Vec::new();
        encode_int(&mut with_ctor, 42, true, true).unwrap();

        let mut without_ctor = Vec::new();
        encode_int(&mut without_ctor, 42, false, true).unwrap();

        assert_eq!(&with_ctor[1..], &without_ctor[..]);
    }

    #[test]
    fn timestamp_encodes_milliseconds_be() {
        let mut buf = Vec::new();
        encode_timestamp(&mut buf, Timestamp::from(13), true, true).unwrap();
        assert_eq!(buf, vec![0x83, 0, 0, 0, 0, 0, 0, 0, 13]);
    }

    #[test]
    fn uuid_encodes_sixteen_bytes() {
        let bytes: [u8; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
        let mut buf = Vec::new();
        encode_uuid(&mut buf, &Uuid::from(bytes), true, true).unwrap();
        assert_eq!(buf[0], 0x98);
        assert_eq!(&buf[1..], &bytes[..]);
    }
}
