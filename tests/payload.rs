//! End-to-end message encoding: `Header`/`Properties` sections plus each body section shape,
//! assembled through `Message::builder` and run through `encode_payload`.

use amqp_codec::encode::encode_payload;
use amqp_codec::messaging::{BodySection, Data, Header, Message, Properties};
use amqp_codec::Value;

fn hex_decode(spaced_hex: &str) -> Vec<u8> {
    let compact: String = spaced_hex.chars().filter(|c| !c.is_whitespace()).collect();
    (0..compact.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&compact[i..i + 2], 16).unwrap())
        .collect()
}

#[test]
fn bare_data_body_round_trips_the_chunk_verbatim() {
    let message = Message::builder(BodySection::data(b"Abc 123 !@#".to_vec())).build();
    let mut buf = Vec::new();
    encode_payload(&mut buf, &message).unwrap();
    assert_eq!(buf, b"\x00Su\xA0\x0BAbc 123 !@#".to_vec());
}

#[test]
fn multiple_data_chunks_each_get_their_own_descriptor() {
    let message = Message::builder(BodySection::data_chunks(vec![b"ab".to_vec(), b"cd".to_vec()])).build();
    let mut buf = Vec::new();
    encode_payload(&mut buf, &message).unwrap();
    assert_eq!(buf, b"\x00Su\xA0\x02ab\x00Su\xA0\x02cd".to_vec());
}

#[test]
fn value_body_wraps_a_plain_value() {
    let message: Message = Value::from("Abc 123 !@#").into();
    let mut buf = Vec::new();
    encode_payload(&mut buf, &message).unwrap();
    assert_eq!(buf, b"\x00Sw\xA1\x0BAbc 123 !@#".to_vec());
}

#[test]
fn sequence_body_encodes_as_a_described_list() {
    let message = Message::builder(BodySection::Sequence(
        amqp_codec::messaging::AmqpSequence::new(vec![Value::from(1i32), Value::from(2i32)]),
    ))
    .build();
    let mut buf = Vec::new();
    encode_payload(&mut buf, &message).unwrap();
    assert_eq!(buf, b"\x00Sv\xc0\x05\x02\x54\x01\x54\x02".to_vec());
}

#[test]
fn header_with_durable_and_data_body() {
    let message = Message::builder(BodySection::data(b"Abc 123 !@#".to_vec()))
        .header(Header::builder().durable(true).build())
        .build();
    let mut buf = Vec::new();
    encode_payload(&mut buf, &message).unwrap();
    let mut expected = hex_decode("00 53 70 c0 07 05 56 01 40 40 40 40");
    expected.extend_from_slice(b"\x00Su\xA0\x0BAbc 123 !@#");
    assert_eq!(buf, expected);
}

#[test]
fn header_with_ttl_and_delivery_count_uses_smallest_form_for_non_bool_fields() {
    let message = Message::builder(BodySection::data(b"Abc 123 !@#".to_vec()))
        .header(
            Header::builder()
                .durable(true)
                .ttl(1000)
                .delivery_count(1)
                .build(),
        )
        .build();
    let mut buf = Vec::new();
    encode_payload(&mut buf, &message).unwrap();
    let mut expected = hex_decode("00 53 70 c0 0c 05 56 01 40 70 00 00 03 e8 40 52 01");
    expected.extend_from_slice(b"\x00Su\xA0\x0BAbc 123 !@#");
    assert_eq!(buf, expected);
}

#[test]
fn properties_resolve_field_typing_per_fixed_wire_kind() {
    let message = Message::builder(BodySection::data(b"Abc 123 !@#".to_vec()))
        .properties(
            Properties::builder()
                .message_id(b"1".to_vec())
                .content_encoding("ce")
                .creation_time(1587603220000i64)
                .build(),
        )
        .build();
    let mut buf = Vec::new();
    encode_payload(&mut buf, &message).unwrap();
    let mut expected = hex_decode(
        "00 53 73 c0 1b 0d a0 01 31 40 40 40 40 40 40 a3 02 63 65 40 83 00 00 01 71 a4 86 a6 20 40 40 40",
    );
    expected.extend_from_slice(b"\x00Su\xA0\x0BAbc 123 !@#");
    assert_eq!(buf, expected);
}

#[test]
fn header_and_properties_and_body_emit_in_fixed_order() {
    let message = Message::builder(BodySection::data(b"x".to_vec()))
        .header(Header::builder().durable(true).build())
        .properties(Properties::builder().to("dest").build())
        .build();
    let mut buf = Vec::new();
    encode_payload(&mut buf, &message).unwrap();
    assert_eq!(buf[0..3], [0x00, 0x53, 0x70]); // header first
    let properties_marker = buf.windows(3).position(|w| w == [0x00, 0x53, 0x73]).unwrap();
    let data_marker = buf.windows(3).position(|w| w == [0x00, 0x53, 0x75]).unwrap();
    assert!(properties_marker < data_marker);
}
