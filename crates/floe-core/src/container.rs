//! Per-level backing storage, partitioned by visibility
//!
//! Each construction level owns one container per tier. Protected and public
//! containers are chained by reference down the inheritance lineage so that a
//! descendant's writes shadow, never clone, the ancestor's values. Private
//! containers are never chained.

use crate::value::Value;
use floe_types::{FloeError, FloeResult, Tier};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::trace;

pub(crate) struct Container {
    tier: Tier,
    values: RefCell<BTreeMap<String, Value>>,
    parent: Option<Rc<Container>>,
    frozen: Cell<bool>,
}

impl Container {
    /// A fresh container with no ancestor link
    pub(crate) fn root(tier: Tier) -> Rc<Self> {
        Rc::new(Self {
            tier,
            values: RefCell::new(BTreeMap::new()),
            parent: None,
            frozen: Cell::new(false),
        })
    }

    /// A fresh container whose unresolved reads fall through to `parent`
    pub(crate) fn derive(parent: &Rc<Container>) -> Rc<Self> {
        Rc::new(Self {
            tier: parent.tier,
            values: RefCell::new(BTreeMap::new()),
            parent: Some(Rc::clone(parent)),
            frozen: Cell::new(false),
        })
    }

    pub(crate) fn is_frozen(&self) -> bool {
        self.frozen.get()
    }

    /// One-time assignment of a declared member. The reassignment guard
    /// fires before the freeze check: a member written during construction
    /// stays a reassignment error forever, not an immutability one.
    pub(crate) fn write(&self, name: &str, value: Value) -> FloeResult<()> {
        if self.values.borrow().contains_key(name) {
            return Err(FloeError::Reassignment(name.to_string()));
        }
        if self.frozen.get() {
            return Err(FloeError::ImmutabilityViolation(name.to_string()));
        }
        trace!(member = name, tier = %self.tier, "assign");
        self.values.borrow_mut().insert(name.to_string(), value);
        Ok(())
    }

    /// Install a prepared (static) entry. Construction-time only; entries
    /// are placed before the level's constructor body can observe them.
    pub(crate) fn define(&self, name: &str, value: Value) {
        self.values.borrow_mut().insert(name.to_string(), value);
    }

    /// Read this level's own storage only; never traverses the chain
    pub(crate) fn read_local(&self, name: &str) -> Option<Value> {
        self.values.borrow().get(name).cloned()
    }

    /// Read with ancestor fallback, most-derived level first
    pub(crate) fn read_chain(&self, name: &str) -> Option<Value> {
        match self.read_local(name) {
            Some(value) => Some(value),
            None => self.parent.as_ref().and_then(|p| p.read_chain(name)),
        }
    }

    /// Freeze this container and every ancestor in its chain
    pub(crate) fn freeze_chain(&self) {
        self.frozen.set(true);
        if let Some(parent) = &self.parent {
            parent.freeze_chain();
        }
    }

    /// All names reachable through the chain, deduplicated
    pub(crate) fn chain_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.values.borrow().keys().cloned().collect();
        if let Some(parent) = &self.parent {
            for name in parent.chain_names() {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names.sort();
        names
    }
}
