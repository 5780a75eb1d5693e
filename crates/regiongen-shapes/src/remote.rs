//! Remote API registry: polite-request wrappers around actor functions
//!
//! Actors cannot modify each other directly. For every listed function the
//! registry generates `<name>Please(actor, ...)`, which calls the function
//! directly on `myself()` and otherwise sends a `PoliteRequest` message, plus
//! the `case` line that handles that message on the receiving side.

use regiongen_core::template::fill_template;
use regiongen_core::{Emitter, GenResult, MarkerRegistry, SchemaError};
use std::collections::HashSet;

/// Registry name used in `regiongen.toml`
pub const REGISTRY: &str = "remote-api";

const NAME: &str = "GenRemoteName";
const PARAMS: &str = "GenRemoteParams";
const ARGS: &str = "GenRemoteArgs";
const PARAM_DOCS: &str = "GenRemoteParamDocs";

const PLEASE_WRAPPER: &str = r#"

/**
 * Politely requests that the given actor call {@link GenRemoteName} on itself.
 *
 * <p>This has to be a request because actors can't directly modify other
 * actors, so what this does is send a message to the other actor asking
 * it to call a given function on itself.</p>
 *
 * <p>This is asynchronous and could take a while to execute in a networked
 * game, so don't rely on the results being immediate.</p>
 *
 * <p>See the documentation for {@link GenRemoteName} for details
 * about the function itself.</p>
 *
 * @param {ActorRef} actor The actor to send the request to.
GenRemoteParamDocs */
function GenRemoteNamePlease(actorGenRemoteParams) {
  assert(exists(actor), 'GenRemoteNamePlease: actor does not exist: ' + actor);
  if (actor === myself()) {
    GenRemoteName(GenRemoteArgs);
  } else {
    send(actor, 'PoliteRequest', { verb: 'GenRemoteName', args: encodeUndefineds([GenRemoteArgs]) });
  }
}
"#;

const HANDLER_CASE: &str =
    "case 'GenRemoteName': GenRemoteName.apply(null, decodeUndefineds(args)); break;";

/// One function other actors may ask an actor to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFunction {
    pub name: String,
    pub params: Vec<String>,
}

impl RemoteFunction {
    /// Parse a `(name, "a, b")` table entry
    pub fn parse(name: &str, args: &str) -> Result<Self, SchemaError> {
        let invalid = |reason: &str| SchemaError::InvalidField {
            schema: REGISTRY.to_string(),
            field: name.to_string(),
            reason: reason.to_string(),
        };

        if name.trim().is_empty() {
            return Err(invalid("function name is empty"));
        }
        let params: Vec<String> = if args.trim().is_empty() {
            Vec::new()
        } else {
            args.split(',').map(|p| p.trim().to_string()).collect()
        };
        if params.iter().any(String::is_empty) {
            return Err(invalid("argument list has an empty entry"));
        }

        Ok(Self {
            name: name.trim().to_string(),
            params,
        })
    }

    /// Parse a whole table; names must be unique
    pub fn parse_table(table: &[(&str, &str)]) -> Result<Vec<Self>, SchemaError> {
        let mut seen = HashSet::new();
        let mut functions = Vec::with_capacity(table.len());
        for (name, args) in table {
            let function = Self::parse(name, args)?;
            if !seen.insert(function.name.clone()) {
                return Err(SchemaError::DuplicateField {
                    schema: REGISTRY.to_string(),
                    field: function.name,
                });
            }
            functions.push(function);
        }
        Ok(functions)
    }

    /// Arguments as written at a call site: `a, b`
    pub fn args(&self) -> String {
        self.params.join(", ")
    }

    fn param_docs(&self) -> String {
        self.params
            .iter()
            .map(|p| format!(" * @param {p} (see original function)\n"))
            .collect()
    }

    fn wrapper(&self) -> GenResult<String> {
        let args = self.args();
        let params = if args.is_empty() {
            String::new()
        } else {
            format!(", {args}")
        };
        let docs = self.param_docs();
        fill_template(
            PLEASE_WRAPPER,
            &[
                (NAME, self.name.as_str()),
                (PARAMS, params.as_str()),
                (ARGS, args.as_str()),
                (PARAM_DOCS, docs.as_str()),
            ],
        )
    }
}

pub fn registry(functions: &[RemoteFunction]) -> GenResult<MarkerRegistry<'_>> {
    MarkerRegistry::new(REGISTRY)
        .register("REMOTE_API_FUNCTIONS_JAVASCRIPT", move |out, prefix| {
            please_wrappers(functions, out, prefix)
        })?
        .register("REMOTE_API_HANDLER_CASES_JAVASCRIPT", move |out, prefix| {
            handler_cases(functions, out, prefix)
        })
}

fn please_wrappers(
    functions: &[RemoteFunction],
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    for function in functions {
        out.emit(&function.wrapper()?, prefix);
    }
    Ok(())
}

fn handler_cases(
    functions: &[RemoteFunction],
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    for function in functions {
        out.emit(
            &fill_template(HANDLER_CASE, &[(NAME, function.name.as_str())])?,
            prefix,
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "remote/remote_tests.rs"]
mod remote_tests;
