#![allow(non_snake_case)]

use super::*;
use crate::test_support::render;
use test_case::test_case;

fn functions(table: &[(&str, &str)]) -> Vec<RemoteFunction> {
    RemoteFunction::parse_table(table).unwrap()
}

#[test_case("worldPos", &["worldPos"] ; "single")]
#[test_case("yawRadians, pitchRadians, rollRadians", &["yawRadians", "pitchRadians", "rollRadians"] ; "several")]
#[test_case("a,b", &["a", "b"] ; "no spaces")]
#[test_case("", &[] ; "none")]
#[test_case("   ", &[] ; "blank")]
fn RemoteFunction___parse___splits_arguments(args: &str, expected: &[&str]) {
    let function = RemoteFunction::parse("turn", args).unwrap();

    assert_eq!(function.params, expected);
}

#[test]
fn RemoteFunction___parse___empty_argument_entry___is_invalid() {
    let result = RemoteFunction::parse("turn", "radians,,axis");

    assert!(matches!(
        result,
        Err(SchemaError::InvalidField { field, .. }) if field == "turn"
    ));
}

#[test]
fn RemoteFunction___parse___empty_name___is_invalid() {
    assert!(matches!(
        RemoteFunction::parse(" ", "x"),
        Err(SchemaError::InvalidField { .. })
    ));
}

#[test]
fn RemoteFunction___parse_table___duplicate_name___is_rejected() {
    let result = RemoteFunction::parse_table(&[("show", "visible"), ("show", "")]);

    assert_eq!(
        result,
        Err(SchemaError::DuplicateField {
            schema: "remote-api".to_string(),
            field: "show".to_string(),
        })
    );
}

#[test]
fn please_wrappers___documented_wrapper_per_function() {
    let functions = functions(&[("setPos", "worldPos")]);
    let registry = registry(&functions).unwrap();

    let expected = "
/**
 * Politely requests that the given actor call {@link setPos} on itself.
 *
 * <p>This has to be a request because actors can't directly modify other
 * actors, so what this does is send a message to the other actor asking
 * it to call a given function on itself.</p>
 *
 * <p>This is asynchronous and could take a while to execute in a networked
 * game, so don't rely on the results being immediate.</p>
 *
 * <p>See the documentation for {@link setPos} for details
 * about the function itself.</p>
 *
 * @param {ActorRef} actor The actor to send the request to.
 * @param worldPos (see original function)
 */
function setPosPlease(actor, worldPos) {
  assert(exists(actor), 'setPosPlease: actor does not exist: ' + actor);
  if (actor === myself()) {
    setPos(worldPos);
  } else {
    send(actor, 'PoliteRequest', { verb: 'setPos', args: encodeUndefineds([worldPos]) });
  }
}

";
    assert_eq!(render(&registry, "REMOTE_API_FUNCTIONS_JAVASCRIPT"), expected);
}

#[test]
fn please_wrappers___no_arguments___no_param_lines() {
    let functions = functions(&[("hide", "")]);
    let registry = registry(&functions).unwrap();

    let text = render(&registry, "REMOTE_API_FUNCTIONS_JAVASCRIPT");

    assert!(text.contains(" * @param {ActorRef} actor The actor to send the request to.\n */\n"));
    assert!(text.contains("function hidePlease(actor) {\n"));
    assert!(text.contains("    hide();\n"));
    assert!(text.contains("args: encodeUndefineds([]) });"));
    assert!(!text.contains("(see original function)"));
}

#[test]
fn handler_cases___one_case_per_function_in_order() {
    let functions = functions(&[("setYaw", "yawRadians"), ("destroySelf", "")]);
    let registry = registry(&functions).unwrap();

    assert_eq!(
        render(&registry, "REMOTE_API_HANDLER_CASES_JAVASCRIPT"),
        "\
case 'setYaw': setYaw.apply(null, decodeUndefineds(args)); break;
case 'destroySelf': destroySelf.apply(null, decodeUndefineds(args)); break;
"
    );
}
