#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(ValueType::Boolean, "bool")]
#[test_case(ValueType::Integer, "int")]
#[test_case(ValueType::Float, "float")]
#[test_case(ValueType::String, "string")]
#[test_case(ValueType::Vector3, "Vector3")]
#[test_case(ValueType::Quaternion, "Quaternion")]
#[test_case(ValueType::Color, "Color")]
#[test_case(ValueType::Enum("CameraSettings.Mode".to_string()), "CameraSettings.Mode")]
fn ValueType___cs_type___returns_target_type_name(value_type: ValueType, expected: &str) {
    assert_eq!(value_type.cs_type(), expected);
}

#[test_case(ValueType::Boolean, "boolean")]
#[test_case(ValueType::Integer, "number")]
#[test_case(ValueType::Float, "number")]
#[test_case(ValueType::Vector3, "THREE.Vector3")]
#[test_case(ValueType::Quaternion, "THREE.Quaternion")]
#[test_case(ValueType::Color, "THREE.Color")]
fn ValueType___jsdoc_type___returns_script_type_name(value_type: ValueType, expected: &str) {
    assert_eq!(value_type.jsdoc_type(), expected);
}

#[test_case(ValueType::Boolean, ChangeGuard::Exact)]
#[test_case(ValueType::Integer, ChangeGuard::Exact)]
#[test_case(ValueType::String, ChangeGuard::Exact)]
#[test_case(ValueType::Color, ChangeGuard::Exact)]
#[test_case(ValueType::Enum("Mode".to_string()), ChangeGuard::Exact)]
#[test_case(ValueType::Float, ChangeGuard::FloatEpsilon)]
#[test_case(ValueType::Vector3, ChangeGuard::VectorDistance)]
#[test_case(ValueType::Quaternion, ChangeGuard::QuaternionAngle)]
fn ValueType___change_guard___matches_type(value_type: ValueType, expected: ChangeGuard) {
    assert_eq!(value_type.change_guard(), expected);
}

#[test]
fn ValueType___binary_encoding___none_for_enum() {
    assert_eq!(ValueType::Enum("Mode".to_string()).binary_encoding(), None);
}

#[test]
fn ValueType___assert_function___integer_and_float_share_number_assert() {
    assert_eq!(ValueType::Integer.assert_function(), Some("assertNumber"));
    assert_eq!(ValueType::Float.assert_function(), Some("assertNumber"));
}

#[test]
fn ValueType___require___missing_entry_is_unknown_type() {
    let value_type = ValueType::Enum("Mode".to_string());

    let err = value_type
        .require("mode", Behavior::Assert, value_type.assert_function())
        .unwrap_err();

    match err {
        GenError::UnknownType {
            field,
            value_type,
            behavior,
        } => {
            assert_eq!(field, "mode");
            assert_eq!(value_type, "enum Mode");
            assert_eq!(behavior, Behavior::Assert);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn ValueType___implicit_default___only_for_vector_and_quaternion() {
    assert_eq!(ValueType::Vector3.implicit_default(), Some("Vector3.zero"));
    assert_eq!(
        ValueType::Quaternion.implicit_default(),
        Some("Quaternion.identity")
    );
    assert_eq!(ValueType::Float.implicit_default(), None);
}

#[test]
fn ValueKind___all___covers_every_type_once() {
    let types = [
        ValueType::Boolean,
        ValueType::Integer,
        ValueType::Float,
        ValueType::String,
        ValueType::Vector3,
        ValueType::Quaternion,
        ValueType::Color,
        ValueType::Enum("E".to_string()),
    ];

    let kinds: Vec<ValueKind> = types.iter().map(ValueType::kind).collect();

    assert_eq!(kinds, ValueKind::ALL);
}

#[test]
fn ValueKind___accessor_stem___none_for_integer_and_enum() {
    assert_eq!(ValueKind::Integer.accessor_stem(), None);
    assert_eq!(ValueKind::Enum.accessor_stem(), None);
    assert_eq!(ValueKind::Float.accessor_stem(), Some("Float"));
}

#[test]
fn BinaryEncoding___write_suffix___bare_for_numeric_and_quaternion() {
    assert_eq!(BinaryEncoding::Int32.write_suffix(), "");
    assert_eq!(BinaryEncoding::Single.write_suffix(), "");
    assert_eq!(BinaryEncoding::Quaternion.write_suffix(), "");
    assert_eq!(BinaryEncoding::Utf16.write_suffix(), "Utf16");
}

#[test_case(1.0, 1.00005, true ; "within epsilon")]
#[test_case(1.0, 1.001, false ; "beyond epsilon")]
#[test_case(0.0, -0.00009, true ; "negative within epsilon")]
#[test_case(5.0, 5.0, true ; "identical")]
fn ChangeGuard___float_epsilon___compares_with_tolerance(old: f32, new: f32, unchanged: bool) {
    let guard = ChangeGuard::FloatEpsilon;

    assert_eq!(
        guard.is_unchanged(&FieldValue::Float(old), &FieldValue::Float(new)),
        unchanged
    );
}

#[test]
fn ChangeGuard___vector_distance___uses_euclidean_distance() {
    let guard = ChangeGuard::VectorDistance;
    let origin = FieldValue::Vector3([0.0, 0.0, 0.0]);

    // Each component is under epsilon but the distance is not.
    let diagonal = FieldValue::Vector3([0.00008, 0.00008, 0.00008]);
    let close = FieldValue::Vector3([0.00005, 0.0, 0.0]);

    assert!(!guard.is_unchanged(&origin, &diagonal));
    assert!(guard.is_unchanged(&origin, &close));
}

#[test]
fn ChangeGuard___quaternion_angle___treats_negated_quaternion_as_same_rotation() {
    let guard = ChangeGuard::QuaternionAngle;
    let identity = FieldValue::Quaternion([0.0, 0.0, 0.0, 1.0]);
    let negated = FieldValue::Quaternion([0.0, 0.0, 0.0, -1.0]);

    assert!(guard.is_unchanged(&identity, &negated));
}

#[test]
fn ChangeGuard___quaternion_angle___detects_real_rotation() {
    let guard = ChangeGuard::QuaternionAngle;
    let identity = FieldValue::Quaternion([0.0, 0.0, 0.0, 1.0]);
    let half = std::f32::consts::FRAC_1_SQRT_2;
    let quarter_turn = FieldValue::Quaternion([0.0, half, 0.0, half]);

    assert!(!guard.is_unchanged(&identity, &quarter_turn));
}

#[test]
fn ChangeGuard___exact___different_kinds_are_never_equal() {
    assert!(!ChangeGuard::Exact.is_unchanged(&FieldValue::Integer(1), &FieldValue::Enum(1)));
    assert!(!ChangeGuard::FloatEpsilon.is_unchanged(&FieldValue::Float(1.0), &FieldValue::Integer(1)));
}

#[test]
fn FieldValue___zero___quaternion_is_identity() {
    assert_eq!(
        FieldValue::zero(&ValueType::Quaternion),
        FieldValue::Quaternion([0.0, 0.0, 0.0, 1.0])
    );
}

#[test]
fn FieldValue___normalized___scales_quaternion_to_unit_length() {
    let q = FieldValue::Quaternion([0.0, 0.0, 0.0, 2.0]).normalized();

    assert_eq!(q, FieldValue::Quaternion([0.0, 0.0, 0.0, 1.0]));
}

#[test]
fn FieldValue___normalized___zero_quaternion_becomes_identity() {
    let q = FieldValue::Quaternion([0.0; 4]).normalized();

    assert_eq!(q, FieldValue::Quaternion([0.0, 0.0, 0.0, 1.0]));
}

#[test]
fn FieldValue___normalized___leaves_other_values_alone() {
    let v = FieldValue::Vector3([3.0, 4.0, 0.0]);

    assert_eq!(v.clone().normalized(), v);
}
