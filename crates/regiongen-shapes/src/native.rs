//! Native accessor registry: delegate caching in `Native.cs`
//!
//! The script host gets one getter and one setter delegate per accessor
//! kind. `Native.cs` remembers the last delegate handed over and only calls
//! into the host again when it changes.

use regiongen_core::template::Placeholders;
use regiongen_core::{Behavior, Emitter, GenError, GenResult, MarkerRegistry, ValueKind};
use std::rc::Rc;

/// Registry name used in `regiongen.toml`
pub const REGISTRY: &str = "native-accessors";

const KIND: &str = "AccessorKind";
const ACCESSOR: &str = "Accessor";
const VERB: &str = "acc";

const DELEGATE_CACHE: &str = "private static ActorAccessorKindAccessor lastAccessorKindAccessorCallback;";

const DELEGATE_MAYBE_SET: &str = r#"
if (lastAccessorKindAccessorCallback != callbacks.accActorAccessorKind)
{
  SetActorAccessorKindAccessor(callbacks.accActorAccessorKind);
  lastAccessorKindAccessorCallback = callbacks.accActorAccessorKind;
}
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Getter,
    Setter,
}

impl Direction {
    const BOTH: [Direction; 2] = [Direction::Getter, Direction::Setter];

    fn name(self) -> &'static str {
        match self {
            Direction::Getter => "Getter",
            Direction::Setter => "Setter",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Direction::Getter => "get",
            Direction::Setter => "set",
        }
    }
}

/// Templates expanded once per (kind, direction), kinds outermost
struct AccessorTemplates<'k> {
    kinds: &'k [ValueKind],
    placeholders: Placeholders,
}

impl<'k> AccessorTemplates<'k> {
    fn new(kinds: &'k [ValueKind]) -> GenResult<Self> {
        Ok(Self {
            kinds,
            placeholders: Placeholders::new([KIND, ACCESSOR, VERB])?,
        })
    }

    fn emit(&self, template: &str, out: &mut Emitter<'_>, prefix: &str) -> GenResult<()> {
        for &kind in self.kinds {
            let stem = kind.accessor_stem().ok_or_else(|| GenError::UnknownType {
                field: format!("{kind} accessor"),
                value_type: kind.to_string(),
                behavior: Behavior::ScriptAccessor,
            })?;
            for direction in Direction::BOTH {
                let code = self.placeholders.fill(template, |token| match token {
                    KIND => stem.to_string(),
                    ACCESSOR => direction.name().to_string(),
                    VERB => direction.verb().to_string(),
                    other => other.to_string(),
                });
                out.emit(&code, prefix);
            }
        }
        Ok(())
    }
}

pub fn registry(kinds: &[ValueKind]) -> GenResult<MarkerRegistry<'_>> {
    let templates = Rc::new(AccessorTemplates::new(kinds)?);
    let caches = Rc::clone(&templates);

    MarkerRegistry::new(REGISTRY)
        .register("ACTOR_ACCESSOR_DELEGATE_CACHES", move |out, prefix| {
            caches.emit(DELEGATE_CACHE, out, prefix)
        })?
        .register("ACTOR_ACCESSOR_DELEGATE_MAYBE_SETS", move |out, prefix| {
            templates.emit(DELEGATE_MAYBE_SET, out, prefix)
        })
}
