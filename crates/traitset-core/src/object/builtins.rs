//! Built-in members of the root object and the trait-aware replacements
//! that `create` installs on fresh instances.

use std::sync::{Arc, OnceLock};

use super::Object;
use crate::errors::Result;
use crate::model::{Method, PropertyDescriptor, Slot, Value};

pub const TO_STRING: &str = "toString";
pub const CONSTRUCTOR: &str = "constructor";

struct Builtins {
    object_to_string: Method,
    object_constructor: Method,
    trait_to_string: Method,
    trait_constructor: Method,
}

fn builtins() -> &'static Builtins {
    static BUILTINS: OnceLock<Builtins> = OnceLock::new();
    BUILTINS.get_or_init(|| Builtins {
        object_to_string: Method::named(TO_STRING, |_, _| Ok(Value::from("[object Object]"))),
        object_constructor: Method::named("Object", construct),
        trait_to_string: Method::named(TO_STRING, render_with_constructor),
        trait_constructor: Method::named("Trait", construct),
    })
}

fn construct(_: &Object, _: &[Value]) -> Result<Value> {
    Ok(Value::from(Object::new()))
}

/// `[object <Name>]` where the name comes from the receiver's constructor
fn render_with_constructor(this: &Object, _: &[Value]) -> Result<Value> {
    let name = match this.get(CONSTRUCTOR)? {
        Value::Function(ctor) => ctor.name().unwrap_or("Object").to_string(),
        _ => "Object".to_string(),
    };
    Ok(Value::from(format!("[object {}]", name)))
}

fn hidden(method: &Method) -> PropertyDescriptor {
    PropertyDescriptor::data(method.clone()).with_enumerable(false)
}

pub(crate) fn root() -> Arc<Object> {
    static ROOT: OnceLock<Arc<Object>> = OnceLock::new();
    ROOT.get_or_init(|| {
        let b = builtins();
        let mut root = Object::bare();
        root.properties
            .insert(TO_STRING.to_string(), hidden(&b.object_to_string));
        root.properties
            .insert(CONSTRUCTOR.to_string(), hidden(&b.object_constructor));
        Arc::new(root)
    })
    .clone()
}

/// Whether the member visible under `name` is still the root's built-in
fn is_untouched_builtin(object: &Object, name: &str, builtin: &Method) -> bool {
    match object.find_property(name).map(|p| &p.slot) {
        Some(Slot::Value(Value::Function(found))) => found.same(builtin),
        _ => false,
    }
}

/// Replace inherited root `toString`/`constructor` with the trait-aware
/// versions; a prototype that customized either keeps its own
///
/// # Errors
///
/// * `NotConfigurable` - cannot happen on a fresh instance without own members
pub(crate) fn install_trait_defaults(object: &mut Object) -> Result<()> {
    let b = builtins();
    if is_untouched_builtin(object, TO_STRING, &b.object_to_string) {
        object.define_property(TO_STRING, hidden(&b.trait_to_string))?;
    }
    if is_untouched_builtin(object, CONSTRUCTOR, &b.object_constructor) {
        object.define_property(CONSTRUCTOR, hidden(&b.trait_constructor))?;
    }
    Ok(())
}
