//! Compose a greeter from small traits and instantiate it
//!
//! Run with `cargo run --example greeter_demo`; set `RUST_LOG` to change
//! the log filter.

use traitset_core::logging_facility::{init, Profile};
use traitset_core::{Member, Resolution, Trait, TraitError, Value, REQUIRED};

fn main() -> Result<(), TraitError> {
    init(Profile::Development);

    let named = Trait::new([("name", REQUIRED)]);
    let polite = Trait::new([(
        "greet",
        Member::method(|this, _| Ok(Value::from(format!("hello, {}", this.get("name")?)))),
    )]);
    let casual = Trait::new([(
        "greet",
        Member::method(|this, _| Ok(Value::from(format!("hey {}", this.get("name")?)))),
    )]);

    let clash = named.compose(&polite).compose(&casual);
    println!("conflicts: {:?}", clash.conflict_names());
    if let Err(err) = clash.create() {
        println!("create failed: {}", err);
    }

    let resolved = named
        .compose(&polite)
        .compose(&casual.resolve([("greet", Resolution::from("greet_casually"))]))
        .compose(&Trait::new([("name", Member::value("ann"))]));

    let greeter = resolved.create()?;
    println!("{}", greeter.call("greet", &[])?);
    println!("{}", greeter.call("greet_casually", &[])?);
    println!("{}", greeter);

    Ok(())
}
