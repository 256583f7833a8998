//! Class specifications
//!
//! A `ClassSpec` is the data-only description handed to `define_class`:
//! constructor logic, declared member names per tier, static tables, and an
//! optional parent factory. Every field is optional; absence means an empty
//! default, never an error.

use crate::factory::Factory;
use crate::statics::StaticTables;
use crate::value::Value;
use crate::view::View;
use floe_types::{FloeError, FloeResult, MemberDecls, Tier};
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

/// A user-declared constructor body. Runs with the level's private view as
/// its context and the caller-supplied arguments, and performs the level's
/// one-time member assignments.
#[derive(Clone)]
pub struct Constructor {
    f: Rc<dyn Fn(&View, &[Value]) -> FloeResult<()>>,
}

impl Constructor {
    pub fn new(f: impl Fn(&View, &[Value]) -> FloeResult<()> + 'static) -> Self {
        Self { f: Rc::new(f) }
    }

    pub(crate) fn invoke(&self, this: &View, args: &[Value]) -> FloeResult<()> {
        (self.f)(this, args)
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<constructor>")
    }
}

/// Data-only description of one class-like entity.
#[derive(Clone, Debug, Default)]
pub struct ClassSpec {
    pub(crate) name: Option<String>,
    pub(crate) parent: Option<Factory>,
    pub(crate) constructor: Option<Constructor>,
    pub(crate) members: MemberDecls,
    pub(crate) statics: StaticTables,
}

impl ClassSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostic name, surfaced in tracing output and instance debugging
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Single-chain inheritance: construct through `parent` first
    pub fn extends(mut self, parent: Factory) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_constructor(
        mut self,
        f: impl Fn(&View, &[Value]) -> FloeResult<()> + 'static,
    ) -> Self {
        self.constructor = Some(Constructor::new(f));
        self
    }

    pub fn with_members(mut self, members: MemberDecls) -> Self {
        self.members = members;
        self
    }

    /// Declare a static for one instance tier
    pub fn with_static(mut self, tier: Tier, name: impl Into<String>, value: Value) -> Self {
        self.statics.tier_mut(tier).insert(name.into(), value);
        self
    }

    /// Declare a static attached to the factory object itself
    pub fn with_factory_static(mut self, name: impl Into<String>, value: Value) -> Self {
        self.statics.factory.insert(name.into(), value);
        self
    }

    /// Declaration-time validation: member names unique per level, and no
    /// name doubles as both a member and an instance-tier static. The
    /// factory table is a separate surface and is exempt.
    pub(crate) fn validate(&self) -> FloeResult<()> {
        self.members.validate()?;
        let mut seen: HashSet<&str> = self.members.iter().map(|(_, name)| name).collect();
        for tier in Tier::ALL {
            for name in self.statics.tier(tier).keys() {
                if !seen.insert(name.as_str()) {
                    return Err(FloeError::duplicate(tier, name));
                }
            }
        }
        Ok(())
    }
}
