//! Write-once delegators
//!
//! A delegator makes a view appear to hold a member while the true storage
//! lives in a container. Reads before the one-time write return the unset
//! sentinel; reads never traverse the container chain, so a redeclared name
//! shadows its ancestor instead of leaking the inherited value.

use crate::container::Container;
use crate::value::Value;
use crate::view::ViewInner;
use floe_types::{FloeResult, Tier};
use std::rc::{Rc, Weak};

#[derive(Clone)]
pub(crate) struct Delegator {
    tier: Tier,
    name: String,
    target: Rc<Container>,
    /// Binding context for method values assigned through this delegator:
    /// the private view of the declaring level.
    ctx: Weak<ViewInner>,
}

impl Delegator {
    pub(crate) fn new(
        tier: Tier,
        name: impl Into<String>,
        target: Rc<Container>,
        ctx: Weak<ViewInner>,
    ) -> Self {
        Self {
            tier,
            name: name.into(),
            target,
            ctx,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn tier(&self) -> Tier {
        self.tier
    }

    /// Own-storage read: the level's written value, or the unset sentinel
    pub(crate) fn get(&self) -> Value {
        self.target.read_local(&self.name).unwrap_or(Value::Unset)
    }

    /// One-time write into the target container. Method values are bound to
    /// the declaring level's private view on the way in, so they remain
    /// callable from the finished instance.
    pub(crate) fn set(&self, value: Value) -> FloeResult<()> {
        let value = match value {
            Value::Method(m) => Value::Bound(m.bind(&self.name, &self.ctx)),
            other => other,
        };
        self.target.write(&self.name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floe_types::FloeError;

    fn delegator(tier: Tier, name: &str, target: &Rc<Container>) -> Delegator {
        Delegator::new(tier, name, Rc::clone(target), Weak::new())
    }

    #[test]
    fn test_unset_before_first_write() {
        let c = Container::root(Tier::Public);
        let d = delegator(Tier::Public, "x", &c);
        assert!(d.get().is_unset());

        d.set(Value::from(5)).unwrap();
        assert_eq!(d.get(), Value::Int(5));
    }

    #[test]
    fn test_second_write_is_reassignment() {
        let c = Container::root(Tier::Protected);
        let d = delegator(Tier::Protected, "x", &c);
        d.set(Value::from(1)).unwrap();
        let err = d.set(Value::from(2)).unwrap_err();
        assert!(matches!(err, FloeError::Reassignment(name) if name == "x"));
    }

    #[test]
    fn test_no_leak_from_ancestor_storage() {
        let base = Container::root(Tier::Public);
        base.write("x", Value::from(9)).unwrap();
        let child = Container::derive(&base);

        // A redeclaring level's delegator must not dredge the ancestor value.
        let d = delegator(Tier::Public, "x", &child);
        assert!(d.get().is_unset());

        d.set(Value::from(10)).unwrap();
        assert_eq!(d.get(), Value::Int(10));
        assert_eq!(base.read_local("x"), Some(Value::Int(9)));
    }
}
