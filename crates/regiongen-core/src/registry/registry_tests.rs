#![allow(non_snake_case)]

use super::*;
use crate::emit::{AnnotationStyle, LineEnding};

fn hello(out: &mut Emitter<'_>, prefix: &str) -> GenResult<()> {
    out.emit("hello", prefix);
    Ok(())
}

#[test]
fn MarkerRegistry___register___rejects_duplicate_marker() {
    let err = MarkerRegistry::new("actor")
        .register("FIELDS", hello)
        .unwrap()
        .register("FIELDS", hello)
        .unwrap_err();

    assert!(matches!(err, GenError::Registry(msg) if msg.contains("FIELDS")));
}

#[test]
fn MarkerRegistry___register___rejects_non_identifier_names() {
    assert!(MarkerRegistry::new("actor").register("", hello).is_err());
    assert!(MarkerRegistry::new("actor").register("TWO WORDS", hello).is_err());
    assert!(MarkerRegistry::new("actor").register("FIELDS*/", hello).is_err());
    assert!(MarkerRegistry::new("actor").register("NATIVE-ACCESSORS", hello).is_err());
}

#[test]
fn MarkerRegistry___markers___sorted_by_name() {
    let registry = MarkerRegistry::new("actor")
        .register("ZETA", hello)
        .unwrap()
        .register("ALPHA", hello)
        .unwrap();

    assert_eq!(registry.markers().collect::<Vec<_>>(), ["ALPHA", "ZETA"]);
    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
}

#[test]
fn MarkerRegistry___get___runs_closure_generator_with_captured_state() {
    let names = vec!["a".to_string(), "b".to_string()];
    let registry = MarkerRegistry::new("test")
        .register("LIST", |out: &mut Emitter<'_>, prefix: &str| {
            for name in &names {
                out.emit(name, prefix);
            }
            Ok(())
        })
        .unwrap();
    let style = AnnotationStyle::default();
    let mut text = String::new();
    let mut emitter = Emitter::new(&mut text, LineEnding::Lf, &style);

    registry
        .get("LIST")
        .unwrap()
        .generate(&mut emitter, "> ")
        .unwrap();

    assert_eq!(text, "> a\n> b\n");
}

#[test]
fn MarkerRegistry___get___none_for_unregistered_marker() {
    let registry = MarkerRegistry::new("actor").register("FIELDS", hello).unwrap();

    assert!(registry.get("OTHER").is_none());
    assert!(registry.contains("FIELDS"));
    assert!(!registry.contains("fields"));
}
