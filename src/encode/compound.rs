//! Compound encoders: `list`, `map`, `array`. Grounded in `serde_amqp::ser`'s `SeqSerializer`/
//! `MapSerializer`, which encode the body into a temporary buffer first and only then write the
//! header (constructor, size, count) in front of it — there is no backward seek/overwrite
//! anywhere in this crate.

use crate::encode::dispatch::encode_value;
use crate::error::{Error, Result};
use crate::fixed_width::{COMPOUND_BODY_SHORT_MAX, SHORT_FORM_COUNT_MAX};
use crate::format_code::EncodingCodes;
use crate::value::{Tagged, Value};

/// `list0`/`list8`/`list32` (§4.2).
///
/// An empty list is the single-byte `list0` constructor (`0x45`) regardless of
/// `with_constructor`/`use_smallest` — there is no payload to suppress or shrink. A non-empty
/// list encodes every element (each with its own constructor) into a temporary buffer, then
/// picks `list8` when the body is at most [`COMPOUND_BODY_SHORT_MAX`] bytes and the element
/// count is at most [`SHORT_FORM_COUNT_MAX`], else `list32`.
pub fn encode_list(buf: &mut Vec<u8>, elements: &[Value], with_constructor: bool, use_smallest: bool) -> Result<()> {
    if elements.is_empty() {
        if with_constructor {
            buf.push(EncodingCodes::List0 as u8);
        }
        return Ok(());
    }

    let mut body = Vec::new();
    for element in elements {
        encode_value(&mut body, &Tagged::Plain(element.clone()), true, use_smallest)?;
    }
    write_compound_header(
        buf,
        &body,
        elements.len(),
        EncodingCodes::List8,
        EncodingCodes::List32,
        with_constructor,
        use_smallest,
        "list",
    )?;
    buf.extend_from_slice(&body);
    Ok(())
}

/// `map8`/`map32` (§4.3). Order is preserved exactly; duplicate keys are the caller's
/// responsibility, which is why `pairs` is an ordered slice rather than a `BTreeMap`/`HashMap`.
/// An empty map is still fully framed (`0xC1 0x01 0x00`) — unlike an empty list, there is no
/// zero-byte shorthand for maps.
pub fn encode_map(
    buf: &mut Vec<u8>,
    pairs: &[(Value, Value)],
    with_constructor: bool,
    use_smallest: bool,
) -> Result<()> {
    let mut body = Vec::new();
    for (key, value) in pairs {
        encode_value(&mut body, &Tagged::Plain(key.clone()), true, use_smallest)?;
        encode_value(&mut body, &Tagged::Plain(value.clone()), true, use_smallest)?;
    }
    let entry_count = pairs
        .len()
        .checked_mul(2)
        .ok_or_else(|| Error::range("map", pairs.len(), "entry count overflowed"))?;
    write_compound_header(
        buf,
        &body,
        entry_count,
        EncodingCodes::Map8,
        EncodingCodes::Map32,
        with_constructor,
        use_smallest,
        "map",
    )?;
    buf.extend_from_slice(&body);
    Ok(())
}

/// Writes a compound header (constructor, size, count) in front of an already-encoded body.
/// `with_constructor=false` suppresses the leading `short_code`/`long_code` byte, matching the
/// same flag on every other encoder in this crate — only the size and count fields are written,
/// followed by the caller's own `body` (§8 "Constructor suppression").
pub(crate) fn write_compound_header(
    buf: &mut Vec<u8>,
    body: &[u8],
    count: usize,
    short_code: EncodingCodes,
    long_code: EncodingCodes,
    with_constructor: bool,
    use_smallest: bool,
    type_name: &'static str,
) -> Result<()> {
    let short_form = use_smallest && body.len() <= COMPOUND_BODY_SHORT_MAX && count <= SHORT_FORM_COUNT_MAX;
    if short_form {
        if with_constructor {
            buf.push(short_code as u8);
        }
        buf.push((body.len() + 1) as u8);
        buf.push(count as u8);
    } else {
        let size = body
            .len()
            .checked_add(4)
            .ok_or_else(|| Error::range(type_name, body.len(), "body size overflowed"))?;
        if size > u32::MAX as usize || count > u32::MAX as usize {
            return Err(Error::range(type_name, size, "encoded size exceeds 2^32"));
        }
        if with_constructor {
            buf.push(long_code as u8);
        }
        buf.extend_from_slice(&(size as u32).to_be_bytes());
        buf.extend_from_slice(&(count as u32).to_be_bytes());
    }
    Ok(())
}

/// `array8`/`array32` (§4.4).
///
/// Every element of a non-empty array shares one constructor `C`, computed from the first
/// element and then required of every other one — so, unlike list/map elements, array elements
/// are always encoded in their **full** (non-smallest) wire form: an array can't know whether a
/// later, larger element will force the wide form, so every element commits to it up front. This
/// is why `encode_array(&[249u8_as_binary])` picks `vbin32` even though 249 bytes would fit
/// `vbin8`'s 255-byte short form on its own. `use_smallest` only ever controls the array's own
/// short-vs-long header form, never the per-element form.
///
/// An empty array needs no element-type descriptor at all: it degenerates to `0xE0 0x01 0x00`.
pub fn encode_array(buf: &mut Vec<u8>, elements: &[Value], with_constructor: bool, use_smallest: bool) -> Result<()> {
    if elements.is_empty() {
        if with_constructor {
            buf.push(EncodingCodes::Array8 as u8);
        }
        buf.push(1);
        buf.push(0);
        return Ok(());
    }

    let mut first = Vec::new();
    encode_value(&mut first, &Tagged::Plain(elements[0].clone()), true, false)?;
    let constructor = first[0];
    let mut payloads = Vec::new();
    payloads.extend_from_slice(&first[1..]);

    for element in &elements[1..] {
        let mut encoded = Vec::new();
        encode_value(&mut encoded, &Tagged::Plain(element.clone()), true, false)?;
        if encoded[0] != constructor {
            return Err(Error::mismatched_array_element(
                &format_code_name(constructor),
                &format_code_name(encoded[0]),
            ));
        }
        payloads.extend_from_slice(&encoded[1..]);
    }

    let constructor_len = 1usize;
    let short_form =
        use_smallest && payloads.len() + constructor_len <= COMPOUND_BODY_SHORT_MAX && elements.len() <= SHORT_FORM_COUNT_MAX;
    if short_form {
        if with_constructor {
            buf.push(EncodingCodes::Array8 as u8);
        }
        buf.push((payloads.len() + constructor_len + 1) as u8);
        buf.push(elements.len() as u8);
    } else {
        let size = payloads.len() + constructor_len + 4;
        if size > u32::MAX as usize || elements.len() > u32::MAX as usize {
            return Err(Error::range("array", size, "encoded size exceeds 2^32"));
        }
        if with_constructor {
            buf.push(EncodingCodes::Array32 as u8);
        }
        buf.extend_from_slice(&(size as u32).to_be_bytes());
        buf.extend_from_slice(&(elements.len() as u32).to_be_bytes());
    }
    buf.push(constructor);
    buf.extend_from_slice(&payloads);
    Ok(())
}

fn format_code_name(code: u8) -> String {
    format!("{code:#04x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_single_byte() {
        let mut buf = Vec::new();
        encode_list(&mut buf, &[], true, true).unwrap();
        assert_eq!(buf, vec![0x45]);
    }

    #[test]
    fn short_list_at_254_nulls() {
        let elements = vec![Value::Null; 254];
        let mut buf = Vec::new();
        encode_list(&mut buf, &elements, true, true).unwrap();
        let mut expected = vec![0xC0, 0xFE + 1, 0xFE];
        expected.extend(std::iter::repeat(0x40).take(254));
        assert_eq!(buf, expected);
    }

    #[test]
    fn long_list_at_255_nulls() {
        let elements = vec![Value::Null; 255];
        let mut buf = Vec::new();
        encode_list(&mut buf, &elements, true, true).unwrap();
        let mut expected = vec![0xD0, 0x00, 0x00, 0x01, 0x03, 0x00, 0x00, 0x00, 0xFF];
        expected.extend(std::iter::repeat(0x40).take(255));
        assert_eq!(buf, expected);
    }

    #[test]
    fn list_constructor_suppression_strips_leading_byte() {
        // original_source/tests/test_encode.py:558-560 — a single-null list, long form,
        // without_constructor must drop only the leading 0xD0.
        let mut buf = Vec::new();
        encode_list(&mut buf, &[Value::Null], false, false).unwrap();
        assert_eq!(buf, vec![0x00, 0x00, 0x00, 0x05, 0x00, 0x00, 0x00, 0x01, 0x40]);
    }

    #[test]
    fn empty_map_is_fully_framed() {
        let mut buf = Vec::new();
        encode_map(&mut buf, &[], true, true).unwrap();
        assert_eq!(buf, vec![0xC1, 0x01, 0x00]);
    }

    #[test]
    fn map_constructor_suppression_strips_leading_byte() {
        // original_source/tests/test_encode.py:573-575 — a single-pair map, long form,
        // without_constructor must drop only the leading 0xD1.
        let mut buf = Vec::new();
        encode_map(&mut buf, &[(Value::Null, Value::Null)], false, false).unwrap();
        assert_eq!(
            buf,
            vec![0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00, 0x02, 0x40, 0x40]
        );
    }

    #[test]
    fn map_preserves_pair_order() {
        let pairs = vec![
            (Value::UInt(13), Value::Bool(true)),
            (Value::UInt(45), Value::Bool(false)),
        ];
        let mut buf = Vec::new();
        encode_map(&mut buf, &pairs, true, true).unwrap();
        assert_eq!(buf[0], 0xC1);
        assert_eq!(buf[2], 4); // 2 pairs = 4 entries
    }

    #[test]
    fn array_of_249_byte_binary_uses_long_binary_form() {
        let elements = vec![Value::Binary(vec![0u8; 249])];
        let mut buf = Vec::new();
        encode_array(&mut buf, &elements, true, true).unwrap();
        let mut expected = vec![0xE0, 0xFF, 0x01, 0xB0, 0x00, 0x00, 0x00, 0xF9];
        expected.extend(std::iter::repeat(0).take(249));
        assert_eq!(buf, expected);
    }

    #[test]
    fn array_of_250_byte_binary_flips_to_long_array_form() {
        let elements = vec![Value::Binary(vec![0u8; 250])];
        let mut buf = Vec::new();
        encode_array(&mut buf, &elements, true, true).unwrap();
        let mut expected = vec![
            0xF0, 0x00, 0x00, 0x01, 0x03, 0x00, 0x00, 0x00, 0x01, 0xB0, 0x00, 0x00, 0x00, 0xFA,
        ];
        expected.extend(std::iter::repeat(0).take(250));
        assert_eq!(buf, expected);
    }

    #[test]
    fn empty_array_has_no_element_constructor() {
        let mut buf = Vec::new();
        encode_array(&mut buf, &[], true, true).unwrap();
        assert_eq!(buf, vec![0xE0, 0x01, 0x00]);
    }

    #[test]
    fn mixed_element_types_is_a_type_error() {
        let elements = vec![Value::Int(1), Value::String("x".to_string())];
        let mut buf = Vec::new();
        let err = encode_array(&mut buf, &elements, true, true).unwrap_err();
        assert!(matches!(err, Error::TypeError(_)));
    }
}
