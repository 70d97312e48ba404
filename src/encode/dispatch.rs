//! Tagged dispatch over [`Value`]/[`Tagged`], and the described-type descriptor writer.
//!
//! A `Value` built in Rust already knows its own wire kind from its variant, so [`encode_value`]
//! mostly just matches on that variant; the `Tagged::Explicit` arm is the one place this crate
//! still needs a runtime tag, for a caller that wants to force a wire kind other than a value's
//! own (e.g. encode a small `Value::Int` as a `long`).

use crate::descriptor::Descriptor;
use crate::encode::compound::{encode_array, encode_list, encode_map};
use crate::encode::primitives::{
    encode_bool, encode_byte, encode_double, encode_float, encode_int, encode_long, encode_null,
    encode_short, encode_timestamp, encode_ubyte, encode_uint, encode_ulong, encode_ushort,
    encode_uuid, reject_negative,
};
use crate::encode::variable::{encode_binary, encode_string, encode_symbol};
use crate::error::{Error, Result};
use crate::primitives::{Symbol, Timestamp, Uuid};
use crate::value::{Tagged, TypeTag, Value};

/// Encodes one value, dispatching on its own variant ([`Tagged::Plain`]) or on an explicit
/// `{TYPE, VALUE}` override ([`Tagged::Explicit`]).
pub fn encode_value(buf: &mut Vec<u8>, input: &Tagged, with_constructor: bool, use_smallest: bool) -> Result<()> {
    match input {
        Tagged::Plain(value) => encode_plain(buf, value, with_constructor, use_smallest),
        Tagged::Explicit(tag, value) => encode_explicit(buf, *tag, value, with_constructor, use_smallest),
    }
}

fn encode_plain(buf: &mut Vec<u8>, value: &Value, with_constructor: bool, use_smallest: bool) -> Result<()> {
    match value {
        Value::Null => encode_null(buf, with_constructor),
        Value::Bool(v) => encode_bool(buf, *v, with_constructor, use_smallest),
        Value::UByte(v) => encode_ubyte(buf, *v, with_constructor, use_smallest),
        Value::UShort(v) => encode_ushort(buf, *v, with_constructor, use_smallest),
        Value::UInt(v) => encode_uint(buf, *v, with_constructor, use_smallest),
        Value::ULong(v) => encode_ulong(buf, *v, with_constructor, use_smallest),
        Value::Byte(v) => encode_byte(buf, *v, with_constructor, use_smallest),
        Value::Short(v) => encode_short(buf, *v, with_constructor, use_smallest),
        Value::Int(v) => encode_int(buf, *v, with_constructor, use_smallest),
        Value::Long(v) => encode_long(buf, *v, with_constructor, use_smallest),
        Value::Float(v) => encode_float(buf, *v, with_constructor, use_smallest),
        Value::Double(v) => encode_double(buf, *v, with_constructor, use_smallest),
        Value::Timestamp(v) => encode_timestamp(buf, *v, with_constructor, use_smallest),
        Value::Uuid(v) => encode_uuid(buf, v, with_constructor, use_smallest),
        Value::Binary(v) => encode_binary(buf, v, with_constructor, use_smallest),
        Value::String(v) => encode_string(buf, v, with_constructor, use_smallest),
        Value::Symbol(v) => encode_symbol(buf, v, with_constructor, use_smallest),
        Value::List(v) => encode_list(buf, v, with_constructor, use_smallest),
        Value::Map(v) => encode_map(buf, v, with_constructor, use_smallest),
        Value::Array(v) => encode_array(buf, v, with_constructor, use_smallest),
    }
}

fn encode_explicit(
    buf: &mut Vec<u8>,
    tag: TypeTag,
    value: &Value,
    with_constructor: bool,
    use_smallest: bool,
) -> Result<()> {
    match tag {
        TypeTag::Null => encode_null(buf, with_constructor),
        TypeTag::Bool => encode_bool(buf, expect_bool(value)?, with_constructor, use_smallest),
        TypeTag::UByte => {
            let v = expect_unsigned("ubyte", value, u8::MAX as u64)?;
            encode_ubyte(buf, v as u8, with_constructor, use_smallest)
        }
        TypeTag::UShort => {
            let v = expect_unsigned("ushort", value, u16::MAX as u64)?;
            encode_ushort(buf, v as u16, with_constructor, use_smallest)
        }
        TypeTag::UInt => {
            let v = expect_unsigned("uint", value, u32::MAX as u64)?;
            encode_uint(buf, v as u32, with_constructor, use_smallest)
        }
        TypeTag::ULong => {
            let v = expect_u64("ulong", value)?;
            encode_ulong(buf, v, with_constructor, use_smallest)
        }
        TypeTag::Byte => {
            let v = expect_signed("byte", value, i8::MIN as i64, i8::MAX as i64)?;
            encode_byte(buf, v as i8, with_constructor, use_smallest)
        }
        TypeTag::Short => {
            let v = expect_signed("short", value, i16::MIN as i64, i16::MAX as i64)?;
            encode_short(buf, v as i16, with_constructor, use_smallest)
        }
        TypeTag::Int => {
            let v = expect_signed("int", value, i32::MIN as i64, i32::MAX as i64)?;
            encode_int(buf, v as i32, with_constructor, use_smallest)
        }
        TypeTag::Long => {
            let v = expect_i64("long", value)?;
            encode_long(buf, v, with_constructor, use_smallest)
        }
        TypeTag::Float => encode_float(buf, expect_f32(value)?, with_constructor, use_smallest),
        TypeTag::Double => encode_double(buf, expect_f64(value)?, with_constructor, use_smallest),
        TypeTag::Timestamp => encode_timestamp(buf, expect_timestamp(value)?, with_constructor, use_smallest),
        TypeTag::Uuid => encode_uuid(buf, &expect_uuid(value)?, with_constructor, use_smallest),
        TypeTag::Binary => encode_binary(buf, &expect_bytes(value)?, with_constructor, use_smallest),
        TypeTag::String => encode_string(buf, &expect_string(value)?, with_constructor, use_smallest),
        TypeTag::Symbol => encode_symbol(buf, &expect_symbol(value)?, with_constructor, use_smallest),
        TypeTag::List => encode_list(buf, &expect_list(value)?, with_constructor, use_smallest),
        TypeTag::Map => encode_map(buf, &expect_map(value)?, with_constructor, use_smallest),
        TypeTag::Array => encode_array(buf, &expect_array(value)?, with_constructor, use_smallest),
    }
}

/// Writes an AMQP described-type prefix: `0x00` followed by the descriptor itself (a `symbol`
/// name or a small `ulong` code). The described value's own encoding is the caller's
/// responsibility — this only writes the `0x00` marker and the descriptor (§4.6).
pub fn encode_descriptor(buf: &mut Vec<u8>, descriptor: &Descriptor) -> Result<()> {
    buf.push(crate::format_code::EncodingCodes::DescribedType as u8);
    match descriptor {
        Descriptor::Code(code) => encode_ulong(buf, *code, true, true),
        Descriptor::Name(name) => encode_symbol(buf, name, true, true),
    }
}

fn type_error(tag_name: &'static str, value: &Value) -> Error {
    Error::TypeError(format!(
        "cannot encode {value:?} (kind {}) as {tag_name}",
        TypeTag::of(value).name()
    ))
}

fn expect_bool(value: &Value) -> Result<bool> {
    match value {
        Value::Bool(v) => Ok(*v),
        _ => Err(type_error("boolean", value)),
    }
}

fn expect_u64(tag_name: &'static str, value: &Value) -> Result<u64> {
    match value {
        Value::UByte(v) => Ok(*v as u64),
        Value::UShort(v) => Ok(*v as u64),
        Value::UInt(v) => Ok(*v as u64),
        Value::ULong(v) => Ok(*v),
        Value::Byte(v) => {
            reject_negative(tag_name, *v as i64)?;
            Ok(*v as u64)
        }
        Value::Short(v) => {
            reject_negative(tag_name, *v as i64)?;
            Ok(*v as u64)
        }
        Value::Int(v) => {
            reject_negative(tag_name, *v as i64)?;
            Ok(*v as u64)
        }
        Value::Long(v) => {
            reject_negative(tag_name, *v)?;
            Ok(*v as u64)
        }
        _ => Err(type_error(tag_name, value)),
    }
}

fn expect_unsigned(tag_name: &'static str, value: &Value, max: u64) -> Result<u64> {
    let v = expect_u64(tag_name, value)?;
    if v > max {
        return Err(Error::range(tag_name, v, "value exceeds the type's range"));
    }
    Ok(v)
}

fn expect_i64(tag_name: &'static str, value: &Value) -> Result<i64> {
    match value {
        Value::Byte(v) => Ok(*v as i64),
        Value::Short(v) => Ok(*v as i64),
        Value::Int(v) => Ok(*v as i64),
        Value::Long(v) => Ok(*v),
        Value::UByte(v) => Ok(*v as i64),
        Value::UShort(v) => Ok(*v as i64),
        Value::UInt(v) => Ok(*v as i64),
        Value::ULong(v) => {
            i64::try_from(*v).map_err(|_| Error::range(tag_name, *v, "value exceeds the type's range"))
        }
        _ => Err(type_error(tag_name, value)),
    }
}

fn expect_signed(tag_name: &'static str, value: &Value, min: i64, max: i64) -> Result<i64> {
    let v = expect_i64(tag_name, value)?;
    if v < min || v > max {
        return Err(Error::range(tag_name, v, "value exceeds the type's range"));
    }
    Ok(v)
}

fn expect_f32(value: &Value) -> Result<f32> {
    match value {
        Value::Float(v) => Ok(*v),
        Value::Double(v) => Ok(*v as f32),
        _ => Err(type_error("float", value)),
    }
}

fn expect_f64(value: &Value) -> Result<f64> {
    match value {
        Value::Double(v) => Ok(*v),
        Value::Float(v) => Ok(*v as f64),
        _ => Err(type_error("double", value)),
    }
}

fn expect_timestamp(value: &Value) -> Result<Timestamp> {
    match value {
        Value::Timestamp(v) => Ok(*v),
        Value::Long(v) => Ok(Timestamp::from(*v)),
        _ => Err(type_error("timestamp", value)),
    }
}

fn expect_uuid(value: &Value) -> Result<Uuid> {
    match value {
        Value::Uuid(v) => Ok(*v),
        _ => Err(type_error("uuid", value)),
    }
}

fn expect_bytes(value: &Value) -> Result<Vec<u8>> {
    match value {
        Value::Binary(v) => Ok(v.clone()),
        _ => Err(type_error("binary", value)),
    }
}

fn expect_string(value: &Value) -> Result<String> {
    match value {
        Value::String(v) => Ok(v.clone()),
        Value::Symbol(v) => Ok(v.as_str().to_string()),
        _ => Err(type_error("string", value)),
    }
}

fn expect_symbol(value: &Value) -> Result<Symbol> {
    match value {
        Value::Symbol(v) => Ok(v.clone()),
        Value::String(v) => Ok(Symbol::new(v.clone())),
        _ => Err(type_error("symbol", value)),
    }
}

fn expect_list(value: &Value) -> Result<Vec<Value>> {
    match value {
        Value::List(v) => Ok(v.clone()),
        Value::Array(v) => Ok(v.clone()),
        _ => Err(type_error("list", value)),
    }
}

fn expect_map(value: &Value) -> Result<Vec<(Value, Value)>> {
    match value {
        Value::Map(v) => Ok(v.clone()),
        _ => Err(type_error("map", value)),
    }
}

fn expect_array(value: &Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(v) => Ok(v.clone()),
        Value::List(v) => Ok(v.clone()),
        _ => Err(type_error("array", value)),
    }
}
