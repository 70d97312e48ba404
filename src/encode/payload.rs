//! Payload / section assembly: emits a [`Message`]'s `Header`, `Properties`, and body section(s)
//! as AMQP 1.0 described types (§4.6, §6). Grounded in `serde_amqp`'s own described-type framing
//! (`0x00` marker + small-ulong descriptor code), but written as a direct tree walk over
//! [`Message`] instead of through a `Serialize` impl, matching the rest of this crate's explicit
//! `encode_*` function surface.

use crate::descriptor::Descriptor;
use crate::encode::compound::write_compound_header;
use crate::encode::dispatch::{encode_descriptor, encode_value};
use crate::encode::primitives::{encode_bool, encode_null, encode_timestamp, encode_ubyte, encode_uint};
use crate::encode::variable::{encode_binary, encode_string, encode_symbol};
use crate::error::Result;
use crate::format_code::EncodingCodes;
use crate::messaging::{BodySection, Header, Message, Properties};
use crate::value::{Tagged, Value};

/// Small-ulong descriptor codes for the five section types this crate emits (§4.6).
const HEADER_CODE: u64 = 0x70;
const PROPERTIES_CODE: u64 = 0x73;
const DATA_CODE: u64 = 0x75;
const AMQP_SEQUENCE_CODE: u64 = 0x76;
const AMQP_VALUE_CODE: u64 = 0x77;

/// Encodes a [`Message`]'s sections, in the fixed order `Header`, `Properties`, then the body
/// (§4.6 "Message emission order").
pub fn encode_payload(buf: &mut Vec<u8>, message: &Message) -> Result<()> {
    if let Some(header) = &message.header {
        encode_descriptor(buf, &Descriptor::Code(HEADER_CODE))?;
        encode_header_body(buf, header)?;
    }
    if let Some(properties) = &message.properties {
        encode_descriptor(buf, &Descriptor::Code(PROPERTIES_CODE))?;
        encode_properties_body(buf, properties)?;
    }
    match &message.body {
        BodySection::Data(chunks) => {
            for chunk in chunks {
                encode_descriptor(buf, &Descriptor::Code(DATA_CODE))?;
                encode_binary(buf, &chunk.0, true, true)?;
            }
        }
        BodySection::Sequence(sequence) => {
            encode_descriptor(buf, &Descriptor::Code(AMQP_SEQUENCE_CODE))?;
            crate::encode::compound::encode_list(buf, &sequence.0, true, true)?;
        }
        BodySection::Value(value) => {
            encode_descriptor(buf, &Descriptor::Code(AMQP_VALUE_CODE))?;
            encode_value(buf, &Tagged::Plain(value.0.clone()), true, true)?;
        }
    }
    Ok(())
}

/// Encodes an optional field as its value when set, or AMQP `null` when unset.
fn encode_optional<T>(body: &mut Vec<u8>, field: Option<T>, encode: impl FnOnce(&mut Vec<u8>, T) -> Result<()>) -> Result<()> {
    match field {
        Some(value) => encode(body, value),
        None => encode_null(body, true),
    }
}

/// Encodes the `Header` section body as an AMQP list of its 5 fields (§6 "Header"). Boolean
/// fields (`durable`, `first_acquirer`) always use the byte-valued `boolean` form (`0x56`), never
/// the smaller `0x41`/`0x42` shorthand, even though every other field in the section still picks
/// its own smallest legal form.
fn encode_header_body(buf: &mut Vec<u8>, header: &Header) -> Result<()> {
    let mut body = Vec::new();
    encode_optional(&mut body, header.durable, |b, v| encode_bool(b, v, true, false))?;
    encode_optional(&mut body, header.priority, |b, v| encode_ubyte(b, v, true, true))?;
    encode_optional(&mut body, header.ttl, |b, v| encode_uint(b, v, true, true))?;
    encode_optional(&mut body, header.first_acquirer, |b, v| encode_bool(b, v, true, false))?;
    encode_optional(&mut body, header.delivery_count, |b, v| encode_uint(b, v, true, true))?;

    write_compound_header(buf, &body, 5, EncodingCodes::List8, EncodingCodes::List32, true, true, "header")?;
    buf.extend_from_slice(&body);
    Ok(())
}

/// Encodes the `Properties` section body as an AMQP list of its 13 fields, each using its
/// resolved static wire type.
fn encode_properties_body(buf: &mut Vec<u8>, properties: &Properties) -> Result<()> {
    let mut body = Vec::new();
    encode_optional(&mut body, properties.message_id.clone(), |b, v| {
        encode_value(b, &Tagged::Plain(Value::from(v)), true, true)
    })?;
    encode_optional(&mut body, properties.user_id.clone(), |b, v| encode_binary(b, &v, true, true))?;
    encode_optional(&mut body, properties.to.clone(), |b, v| encode_string(b, &v, true, true))?;
    encode_optional(&mut body, properties.subject.clone(), |b, v| encode_string(b, &v, true, true))?;
    encode_optional(&mut body, properties.reply_to.clone(), |b, v| encode_string(b, &v, true, true))?;
    encode_optional(&mut body, properties.correlation_id.clone(), |b, v| {
        encode_value(b, &Tagged::Plain(Value::from(v)), true, true)
    })?;
    encode_optional(&mut body, properties.content_type.clone(), |b, v| encode_symbol(b, &v, true, true))?;
    encode_optional(&mut body, properties.content_encoding.clone(), |b, v| encode_symbol(b, &v, true, true))?;
    encode_optional(&mut body, properties.absolute_expiry_time, |b, v| encode_timestamp(b, v, true, true))?;
    encode_optional(&mut body, properties.creation_time, |b, v| encode_timestamp(b, v, true, true))?;
    encode_optional(&mut body, properties.group_id.clone(), |b, v| encode_string(b, &v, true, true))?;
    encode_optional(&mut body, properties.group_sequence, |b, v| encode_uint(b, v, true, true))?;
    encode_optional(&mut body, properties.reply_to_group_id.clone(), |b, v| encode_string(b, &v, true, true))?;

    write_compound_header(buf, &body, 13, EncodingCodes::List8, EncodingCodes::List32, true, true, "properties")?;
    buf.extend_from_slice(&body);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messaging::{BodySection, Data};

    #[test]
    fn data_body_with_no_sections_is_just_the_data_section() {
        let message = Message {
            header: None,
            properties: None,
            body: BodySection::Data(vec![Data(b"Abc 123 !@#".to_vec())]),
        };
        let mut buf = Vec::new();
        encode_payload(&mut buf, &message).unwrap();
        assert_eq!(buf, b"\x00Su\xA0\x0BAbc 123 !@#".to_vec());
    }

    #[test]
    fn value_body_string() {
        let message: Message = Value::String("Abc 123 !@#".to_string()).into();
        let mut buf = Vec::new();
        encode_payload(&mut buf, &message).unwrap();
        assert_eq!(buf, b"\x00Sw\xA1\x0BAbc 123 !@#".to_vec());
    }

    #[test]
    fn value_body_map() {
        let message: Message = Value::Map(vec![(
            Value::String("key".to_string()),
            Value::String("value".to_string()),
        )])
        .into();
        let mut buf = Vec::new();
        encode_payload(&mut buf, &message).unwrap();
        assert_eq!(
            buf,
            b"\x00Sw\xc1\r\x02\xa1\x03key\xa1\x05value".to_vec()
        );
    }

    #[test]
    fn header_with_only_durable_set() {
        let message = Message {
            header: Some(Header::builder().durable(true).build()),
            properties: None,
            body: BodySection::Data(vec![Data(b"Abc 123 !@#".to_vec())]),
        };
        let mut buf = Vec::new();
        encode_payload(&mut buf, &message).unwrap();
        let mut expected = b"\x00\x53\x70\xc0\x07\x05\x56\x01\x40\x40\x40\x40".to_vec();
        expected.extend_from_slice(b"\x00\x53\x75\xa0\x0b\x41\x62\x63\x20\x31\x32\x33\x20\x21\x40\x23");
        assert_eq!(buf, expected);
    }

    #[test]
    fn header_with_ttl_and_delivery_count() {
        let message = Message {
            header: Some(
                Header::builder()
                    .durable(true)
                    .ttl(1000)
                    .delivery_count(1)
                    .build(),
            ),
            properties: None,
            body: BodySection::Data(vec![Data(b"Abc 123 !@#".to_vec())]),
        };
        let mut buf = Vec::new();
        encode_payload(&mut buf, &message).unwrap();
        let mut expected = b"\x00\x53\x70\xc0\x0c\x05\x56\x01\x40\x70\x00\x00\x03\xe8\x40\x52\x01".to_vec();
        expected.extend_from_slice(b"\x00\x53\x75\xa0\x0b\x41\x62\x63\x20\x31\x32\x33\x20\x21\x40\x23");
        assert_eq!(buf, expected);
    }

    #[test]
    fn properties_with_all_fields_set() {
        let message = Message {
            header: None,
            properties: Some(
                Properties::builder()
                    .message_id(b"1".to_vec())
                    .user_id(b"user".to_vec())
                    .to("t")
                    .subject("s")
                    .reply_to("rt")
                    .correlation_id(b"1".to_vec())
                    .content_type("ct")
                    .content_encoding("ce")
                    .absolute_expiry_time(1587603220000i64)
                    .creation_time(1587603220000i64)
                    .group_id("gid")
                    .group_sequence(100)
                    .reply_to_group_id("rgid")
                    .build(),
            ),
            body: BodySection::Data(vec![Data(b"Abc 123 !@#".to_vec())]),
        };
        let mut buf = Vec::new();
        encode_payload(&mut buf, &message).unwrap();
        let expected = hex_decode(
            "0053 73c0 3e0d a001 31a0 0475 7365 72a1 0174 a101 73a1 0272 74a0 0131 a302 6374 a302 6365 8300 0001 71a4 86a6 2083 0000 0171 a486 a620 a103 6769 6452 64a1 0472 6769 6400 5375 a00b 4162 6320 3132 3320 2140 23",
        );
        assert_eq!(buf, expected);
    }

    #[test]
    fn properties_with_some_fields_unset() {
        let message = Message {
            header: None,
            properties: Some(
                Properties::builder()
                    .message_id(b"1".to_vec())
                    .content_encoding("ce")
                    .creation_time(1587603220000i64)
                    .build(),
            ),
            body: BodySection::Data(vec![Data(b"Abc 123 !@#".to_vec())]),
        };
        let mut buf = Vec::new();
        encode_payload(&mut buf, &message).unwrap();
        let expected = hex_decode(
            "0053 73c0 1b0d a001 3140 4040 4040 40a3 0263 6540 8300 0001 71a4 86a6 2040 4040 0053 75a0 0b41 6263 2031 3233 2021 4023",
        );
        assert_eq!(buf, expected);
    }

    fn hex_decode(spaced_hex: &str) -> Vec<u8> {
        let compact: String = spaced_hex.chars().filter(|c| !c.is_whitespace()).collect();
        (0..compact.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&compact[i..i + 2], 16).unwrap())
            .collect()
    }
}
