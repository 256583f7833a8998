//! Dynamic member values
//!
//! Members and statics hold `Value`s: scalars, lists, and methods. The
//! `Unset` variant is the explicit sentinel returned when a declared member
//! is read before its one-time assignment.

use crate::scope::Scope;
use crate::view::{View, ViewInner};
use floe_types::{FloeError, FloeResult};
use std::fmt;
use std::rc::{Rc, Weak};

/// Body type for method values. Methods receive the scope they were invoked
/// in (an instance view or a factory) plus the caller's arguments.
pub type MethodFn = dyn Fn(&Scope<'_>, &[Value]) -> FloeResult<Value>;

/// An unbound method value, as written in a static table or assigned to a
/// member during construction.
#[derive(Clone)]
pub struct Method {
    f: Rc<MethodFn>,
}

impl Method {
    pub fn new(f: impl Fn(&Scope<'_>, &[Value]) -> FloeResult<Value> + 'static) -> Self {
        Self { f: Rc::new(f) }
    }

    /// Invoke with an explicit scope. Bound forms are produced during
    /// construction; this entry point serves factory-scoped calls.
    pub fn call(&self, scope: &Scope<'_>, args: &[Value]) -> FloeResult<Value> {
        (self.f)(scope, args)
    }

    pub(crate) fn bind(&self, name: &str, ctx: &Weak<ViewInner>) -> BoundMethod {
        BoundMethod {
            name: name.to_string(),
            f: Rc::clone(&self.f),
            ctx: Weak::clone(ctx),
        }
    }

    fn ptr_eq(&self, other: &Method) -> bool {
        Rc::ptr_eq(&self.f, &other.f)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<method>")
    }
}

/// A method bound to the private view of the level that declared it.
///
/// Binding holds the view weakly; the finished instance retains the view
/// chain, so a bound method works for as long as its instance is alive.
/// Calling one after the instance is dropped yields `DetachedMethod`.
#[derive(Clone)]
pub struct BoundMethod {
    name: String,
    f: Rc<MethodFn>,
    ctx: Weak<ViewInner>,
}

impl BoundMethod {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> FloeResult<Value> {
        let inner = self
            .ctx
            .upgrade()
            .ok_or_else(|| FloeError::DetachedMethod(self.name.clone()))?;
        let this = View::from_inner(inner);
        (self.f)(&Scope::Instance(&this), args)
    }
}

impl fmt::Debug for BoundMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<bound method {}>", self.name)
    }
}

/// A dynamic member value.
#[derive(Clone, Default)]
pub enum Value {
    /// Declared but not yet assigned
    #[default]
    Unset,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    /// Unbound method (static tables, specification input)
    Method(Method),
    /// Method bound to a constructed instance
    Bound(BoundMethod),
}

impl Value {
    /// Shorthand for `Value::Method(Method::new(f))`
    pub fn method(f: impl Fn(&Scope<'_>, &[Value]) -> FloeResult<Value> + 'static) -> Self {
        Value::Method(Method::new(f))
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Value::Unset)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Unset, Value::Unset) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            // Methods compare by function identity.
            (Value::Method(a), Value::Method(b)) => a.ptr_eq(b),
            (Value::Bound(a), Value::Bound(b)) => {
                Rc::ptr_eq(&a.f, &b.f) && Weak::ptr_eq(&a.ctx, &b.ctx)
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unset => write!(f, "Unset"),
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::List(items) => f.debug_list().entries(items).finish(),
            Value::Method(m) => fmt::Debug::fmt(m, f),
            Value::Bound(m) => fmt::Debug::fmt(m, f),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from(3), Value::Int(3));
        assert_eq!(Value::from("hi"), Value::Str("hi".into()));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert!(Value::default().is_unset());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Str("x".into()).as_str(), Some("x"));
        assert_eq!(Value::Int(7).as_str(), None);
        let list = Value::from(vec![Value::from(1), Value::from(2)]);
        assert_eq!(list.as_list().map(<[Value]>::len), Some(2));
    }

    #[test]
    fn test_method_identity_equality() {
        let m = Method::new(|_, _| Ok(Value::Null));
        let a = Value::Method(m.clone());
        let b = Value::Method(m);
        assert_eq!(a, b);
        assert_ne!(a, Value::method(|_, _| Ok(Value::Null)));
    }
}
