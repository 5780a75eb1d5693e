#![allow(non_snake_case)]

use super::*;
use crate::value::ValueType;

fn fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("speed", ValueType::Float).persisted(),
        FieldDescriptor::new("displayName", ValueType::String).persisted(),
        FieldDescriptor::new("position", ValueType::Vector3).persisted(),
    ]
}

fn values(speed: f32, name: &str, position: [f32; 3]) -> BTreeMap<String, FieldValue> {
    BTreeMap::from([
        ("speed".to_string(), FieldValue::Float(speed)),
        ("displayName".to_string(), FieldValue::String(name.to_string())),
        ("position".to_string(), FieldValue::Vector3(position)),
    ])
}

#[test]
fn write_record___lays_out_fields_in_declaration_order() {
    let bytes = write_record(&fields(), &values(1.5, "Hi", [1.0, 2.0, 3.0])).unwrap();

    let mut expected = Vec::new();
    expected.extend_from_slice(&1.5f32.to_le_bytes());
    expected.extend_from_slice(&2i32.to_le_bytes());
    expected.extend_from_slice(&[b'H', 0, b'i', 0]);
    for c in [1.0f32, 2.0, 3.0] {
        expected.extend_from_slice(&c.to_le_bytes());
    }
    assert_eq!(bytes, expected);
}

#[test]
fn read_record___round_trips_float_string_vector() {
    let original = values(-0.0, "Ünïcødé 🎮", [f32::MIN_POSITIVE, -1e30, 0.1]);

    let bytes = write_record(&fields(), &original).unwrap();
    let decoded = read_record(&fields(), &bytes).unwrap();

    assert_eq!(decoded, original);
    match (&decoded["speed"], &original["speed"]) {
        (FieldValue::Float(a), FieldValue::Float(b)) => assert_eq!(a.to_bits(), b.to_bits()),
        other => panic!("unexpected values {other:?}"),
    }
}

#[test]
fn write_record___enum_field_has_no_binary_strategy() {
    let fields = vec![FieldDescriptor::new("mode", ValueType::Enum("Mode".to_string()))];
    let values = BTreeMap::from([("mode".to_string(), FieldValue::Enum(1))]);

    let err = write_record(&fields, &values).unwrap_err();

    assert!(matches!(
        err,
        GenError::UnknownType {
            behavior: Behavior::BinaryWrite,
            ..
        }
    ));
}

#[test]
fn write_record___missing_value_is_unknown_field() {
    let mut partial = values(1.0, "x", [0.0; 3]);
    partial.remove("displayName");

    let err = write_record(&fields(), &partial).unwrap_err();

    assert!(matches!(err, GenError::UnknownField(name) if name == "displayName"));
}

#[test]
fn RecordWriter___write___rejects_mismatched_value() {
    let mut writer = RecordWriter::new();

    let err = writer
        .write(BinaryEncoding::Single, &FieldValue::Integer(3))
        .unwrap_err();

    assert!(matches!(err, GenError::Codec(_)));
}

#[test]
fn read_record___truncated_input_is_codec_error() {
    let bytes = write_record(&fields(), &values(1.0, "abc", [0.0; 3])).unwrap();

    let err = read_record(&fields(), &bytes[..bytes.len() - 1]).unwrap_err();

    assert!(matches!(err, GenError::Codec(msg) if msg.contains("truncated")));
}

#[test]
fn read_record___trailing_bytes_are_codec_error() {
    let mut bytes = write_record(&fields(), &values(1.0, "abc", [0.0; 3])).unwrap();
    bytes.push(0);

    let err = read_record(&fields(), &bytes).unwrap_err();

    assert!(matches!(err, GenError::Codec(msg) if msg.contains("trailing")));
}

#[test]
fn RecordReader___read___rejects_invalid_boolean_byte() {
    let mut reader = RecordReader::new(&[2]);

    assert!(reader.read(BinaryEncoding::Boolean).is_err());
}

#[test]
fn RecordReader___read___rejects_negative_string_length() {
    let bytes = (-1i32).to_le_bytes();
    let mut reader = RecordReader::new(&bytes);

    assert!(reader.read(BinaryEncoding::Utf16).is_err());
}

#[test]
fn RecordReader___read___quaternion_and_color_use_four_singles() {
    let mut writer = RecordWriter::new();
    writer
        .write(
            BinaryEncoding::Quaternion,
            &FieldValue::Quaternion([0.0, 0.0, 0.0, 1.0]),
        )
        .unwrap();
    writer
        .write(BinaryEncoding::Color, &FieldValue::Color([1.0, 0.5, 0.25, 1.0]))
        .unwrap();
    let bytes = writer.into_bytes();
    let mut reader = RecordReader::new(&bytes);

    assert_eq!(bytes.len(), 32);
    assert_eq!(
        reader.read(BinaryEncoding::Quaternion).unwrap(),
        FieldValue::Quaternion([0.0, 0.0, 0.0, 1.0])
    );
    assert_eq!(
        reader.read(BinaryEncoding::Color).unwrap(),
        FieldValue::Color([1.0, 0.5, 0.25, 1.0])
    );
    assert_eq!(reader.remaining(), 0);
}
