use std::sync::{Arc, OnceLock};

use traitset_core::{Member, Method, Object, PropertyDescriptor, Trait, Value};

/// A method that returns a fixed string
#[allow(dead_code)]
pub fn constant_method(text: &'static str) -> Method {
    Method::new(move |_, _| Ok(Value::from(text)))
}

/// A one-member trait holding `value` under `name`
#[allow(dead_code)]
pub fn single(name: &str, value: impl Into<Value>) -> Trait {
    Trait::new([(name.to_string(), Member::value(value))])
}

/// A shared prototype with the given data members
#[allow(dead_code)]
pub fn prototype_with(members: &[(&str, Value)]) -> Arc<Object> {
    let mut proto = Object::new();
    for (name, value) in members {
        proto
            .define_property(*name, PropertyDescriptor::data(value.clone()))
            .unwrap();
    }
    Arc::new(proto)
}

/// Process-wide methods with stable identity, for generated traits
#[allow(dead_code)]
pub fn shared_methods() -> &'static [Method] {
    static METHODS: OnceLock<Vec<Method>> = OnceLock::new();
    METHODS.get_or_init(|| {
        vec![
            constant_method("first"),
            constant_method("second"),
            constant_method("third"),
        ]
    })
}
