//! Tier-scoped views: the `this` handed to constructor and method bodies
//!
//! A view exposes a level's delegators and bound statics, chained to the
//! ancestor's protected view for "super" traversal. The private view of a
//! level sees all three tiers; the protected view, which descendants
//! inherit, sees protected and public only.
//!
//! Views are assembled once per construction level and are structurally
//! immutable from then on; the only mutation they admit is each delegator's
//! one-time write into its container.

use crate::delegate::Delegator;
use crate::scope::Scope;
use crate::value::Value;
use floe_types::{FloeError, FloeResult};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ViewAccess {
    /// Private view: all tiers of the level
    Full,
    /// Protected view: what descendants inherit
    Shared,
}

pub(crate) struct ViewInner {
    pub(crate) access: ViewAccess,
    pub(crate) members: BTreeMap<String, Delegator>,
    pub(crate) statics: BTreeMap<String, Value>,
    pub(crate) parent: Option<View>,
}

/// A constrained window onto an instance under construction.
#[derive(Clone)]
pub struct View {
    inner: Rc<ViewInner>,
}

impl View {
    /// Assemble a view whose bound statics need a handle to the view itself
    /// (method binding targets the private view being built).
    pub(crate) fn new_cyclic(build: impl FnOnce(&Weak<ViewInner>) -> ViewInner) -> View {
        View {
            inner: Rc::new_cyclic(build),
        }
    }

    pub(crate) fn assemble(inner: ViewInner) -> View {
        View {
            inner: Rc::new(inner),
        }
    }

    pub(crate) fn from_inner(inner: Rc<ViewInner>) -> View {
        View { inner }
    }

    pub(crate) fn downgrade(&self) -> Weak<ViewInner> {
        Rc::downgrade(&self.inner)
    }

    /// Read a member or static. Resolution order: this level's members, this
    /// level's statics, then the ancestor chain. Unresolved names read as
    /// the unset sentinel rather than an error.
    pub fn get(&self, name: &str) -> Value {
        if let Some(delegator) = self.inner.members.get(name) {
            return delegator.get();
        }
        if let Some(value) = self.inner.statics.get(name) {
            return value.clone();
        }
        match &self.inner.parent {
            Some(parent) => parent.get(name),
            None => Value::Unset,
        }
    }

    /// One-time write to a declared member. A name declared at an ancestor
    /// level (and not redeclared here) writes through to that ancestor's
    /// delegator, subject to the same write-once guard. Names with no
    /// delegator anywhere in the chain are rejected: the view is frozen and
    /// grows no new members.
    pub fn set(&self, name: &str, value: Value) -> FloeResult<()> {
        if let Some(delegator) = self.inner.members.get(name) {
            return delegator.set(value);
        }
        match &self.inner.parent {
            Some(parent) => parent.set(name, value),
            None => Err(FloeError::ImmutabilityViolation(name.to_string())),
        }
    }

    /// Invoke a method member or static by name
    pub fn call(&self, name: &str, args: &[Value]) -> FloeResult<Value> {
        match self.get(name) {
            Value::Bound(method) => method.call(args),
            Value::Method(method) => method.call(&Scope::Instance(self), args),
            Value::Unset => Err(FloeError::UnknownMember(name.to_string())),
            _ => Err(FloeError::NotCallable(name.to_string())),
        }
    }

    /// Structural parent lookup: the ancestor level's protected view. This
    /// is the "super" mechanism; the ancestor's values are observable as
    /// they stood after the ancestor finished its own assignments.
    pub fn parent(&self) -> Option<&View> {
        self.inner.parent.as_ref()
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let access = match self.inner.access {
            ViewAccess::Full => "private",
            ViewAccess::Shared => "protected",
        };
        let mut s = f.debug_struct("View");
        s.field("access", &access);
        let members: Vec<String> = self
            .inner
            .members
            .values()
            .map(|d| format!("{} {}", d.tier(), d.name()))
            .collect();
        s.field("members", &members);
        s.field("statics", &self.inner.statics.keys().collect::<Vec<_>>());
        s.field("chained", &self.inner.parent.is_some());
        s.finish()
    }
}
