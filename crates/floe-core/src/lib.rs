//! Floe construction protocol
//!
//! Floe emulates classical visibility tiers (private, protected, public)
//! and single-chain inheritance on a dynamic, string-keyed object model.
//! A class is declared as a data-only [`ClassSpec`]; [`define_class`]
//! resolves it into a [`Factory`] that produces finalized, immutable
//! [`Instance`]s.
//!
//! # How construction works
//!
//! Every factory call is a synchronous recursive descent: the parent level
//! constructs first, handing its protected view and shared containers down
//! the chain. Each level layers its own write-once delegators and bound
//! statics on top, runs its constructor body against a tier-appropriate
//! view, and the outermost call freezes everything before returning the
//! public surface.
//!
//! # Example
//!
//! ```
//! use floe_core::{define_class, ClassSpec, MemberDecls, Value};
//!
//! let point = define_class(
//!     ClassSpec::new()
//!         .with_name("Point")
//!         .with_members(MemberDecls::new().with_public(["x", "y"]))
//!         .with_constructor(|this, args| {
//!             this.set("x", args[0].clone())?;
//!             this.set("y", args[1].clone())?;
//!             Ok(())
//!         }),
//! )
//! .unwrap();
//!
//! let p = point.construct(&[Value::from(3), Value::from(4)]).unwrap();
//! assert_eq!(p.get("x"), Some(Value::Int(3)));
//! assert_eq!(p.get("y"), Some(Value::Int(4)));
//! ```

#![deny(unsafe_code)]

mod chain;
mod container;
mod delegate;
mod factory;
mod instance;
mod scope;
mod spec;
mod statics;
mod value;
mod view;

pub use factory::{define_class, Factory};
pub use instance::Instance;
pub use scope::Scope;
pub use spec::{ClassSpec, Constructor};
pub use value::{BoundMethod, Method, MethodFn, Value};
pub use view::View;

// Re-export the data vocabulary so downstream code needs one import.
pub use floe_types::{FactoryId, FloeError, FloeResult, MemberDecls, Tier};
