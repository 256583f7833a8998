//! Method execution scopes
//!
//! A method body runs either against an instance view (instance-tier
//! statics and member methods) or against the factory that declared it
//! (factory-level statics, and public statics called on the factory
//! surface).

use crate::factory::Factory;
use crate::value::Value;
use crate::view::View;
use floe_types::{FloeError, FloeResult};

/// The context a method executes in.
pub enum Scope<'a> {
    Instance(&'a View),
    Factory(&'a Factory),
}

impl Scope<'_> {
    /// Read a member or static visible from this scope
    pub fn get(&self, name: &str) -> Value {
        match self {
            Scope::Instance(view) => view.get(name),
            Scope::Factory(factory) => factory.static_value(name).unwrap_or(Value::Unset),
        }
    }

    /// One-time member write. Factories are frozen at definition time, so
    /// factory-scoped writes always fail.
    pub fn set(&self, name: &str, value: Value) -> FloeResult<()> {
        match self {
            Scope::Instance(view) => view.set(name, value),
            Scope::Factory(_) => Err(FloeError::ImmutabilityViolation(name.to_string())),
        }
    }

    /// Invoke another method visible from this scope
    pub fn call(&self, name: &str, args: &[Value]) -> FloeResult<Value> {
        match self {
            Scope::Instance(view) => view.call(name, args),
            Scope::Factory(factory) => factory.call_static(name, args),
        }
    }

    /// The ancestor protected view, when running in an instance scope
    pub fn parent(&self) -> Option<&View> {
        match self {
            Scope::Instance(view) => view.parent(),
            Scope::Factory(_) => None,
        }
    }
}
