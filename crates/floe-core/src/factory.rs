//! Factories: the public entry point of the protocol
//!
//! `define_class` resolves a `ClassSpec` into a `Factory`: a cheaply
//! clonable, frozen definition that constructs finalized instances and
//! doubles as the parent for further extension.

use crate::chain::{construct_level, Mode};
use crate::instance::Instance;
use crate::scope::Scope;
use crate::spec::{ClassSpec, Constructor};
use crate::statics::StaticTables;
use crate::value::Value;
use floe_types::{FactoryId, FloeError, FloeResult, MemberDecls};
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// The resolved, immutable definition behind a factory.
pub(crate) struct FactoryDef {
    pub(crate) id: FactoryId,
    pub(crate) name: Option<String>,
    pub(crate) parent: Option<Factory>,
    pub(crate) constructor: Option<Constructor>,
    pub(crate) members: MemberDecls,
    pub(crate) statics: StaticTables,
}

/// A reusable constructor for fully-encapsulated, immutable instances.
///
/// Cloning a factory clones a handle; all clones construct through the same
/// definition. Factories are frozen at definition time: nothing about the
/// declared members or static tables can change afterwards.
#[derive(Clone)]
pub struct Factory {
    def: Rc<FactoryDef>,
}

/// Resolve a specification into a factory. The only validation performed is
/// declaration uniqueness; omitted fields fall back to empty defaults.
pub fn define_class(spec: ClassSpec) -> FloeResult<Factory> {
    Factory::define(spec)
}

impl Factory {
    pub fn define(spec: ClassSpec) -> FloeResult<Self> {
        spec.validate()?;
        let id = FactoryId::generate();
        debug!(
            %id,
            class = spec.name.as_deref().unwrap_or("<anonymous>"),
            extends = ?spec.parent.as_ref().map(Factory::debug_name),
            "class defined"
        );
        Ok(Self {
            def: Rc::new(FactoryDef {
                id,
                name: spec.name,
                parent: spec.parent,
                constructor: spec.constructor,
                members: spec.members,
                statics: spec.statics,
            }),
        })
    }

    /// Construct a finalized instance, forwarding `args` verbatim to every
    /// constructor body in the inheritance chain.
    pub fn construct(&self, args: &[Value]) -> FloeResult<Instance> {
        let state = construct_level(self, args, Mode::Root)?;
        Ok(Instance::new(
            self.def.name.clone(),
            state.public_container,
            state.views,
        ))
    }

    pub fn id(&self) -> &FactoryId {
        &self.def.id
    }

    pub fn name(&self) -> Option<&str> {
        self.def.name.as_deref()
    }

    /// Read a static from the factory surface: the factory-level table
    /// first, then the public table. Method entries come back unbound.
    pub fn static_value(&self, name: &str) -> Option<Value> {
        self.def
            .statics
            .factory
            .get(name)
            .or_else(|| self.def.statics.public.get(name))
            .cloned()
    }

    /// Invoke a factory-surface static method. Execution context is the
    /// factory itself, never an instance.
    pub fn call_static(&self, name: &str, args: &[Value]) -> FloeResult<Value> {
        match self.static_value(name) {
            Some(Value::Method(method)) => method.call(&Scope::Factory(self), args),
            Some(Value::Bound(method)) => method.call(args),
            Some(_) => Err(FloeError::NotCallable(name.to_string())),
            None => Err(FloeError::UnknownMember(name.to_string())),
        }
    }

    pub(crate) fn definition(&self) -> &FactoryDef {
        &self.def
    }

    pub(crate) fn debug_name(&self) -> &str {
        self.def.name.as_deref().unwrap_or("<anonymous>")
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("id", &self.def.id)
            .field("class", &self.debug_name())
            .field("extends", &self.def.parent.as_ref().map(Factory::debug_name))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floe_types::Tier;

    #[test]
    fn test_empty_spec_constructs_empty_instance() {
        let factory = define_class(ClassSpec::new()).unwrap();
        let instance = factory.construct(&[]).unwrap();
        assert!(instance.names().is_empty());
        assert_eq!(instance.get("anything"), None);
    }

    #[test]
    fn test_definition_rejects_duplicates() {
        let spec = ClassSpec::new().with_members(MemberDecls::new().with_public(["x", "x"]));
        assert!(matches!(
            define_class(spec),
            Err(FloeError::DuplicateMember(_))
        ));
    }

    #[test]
    fn test_factory_statics_are_factory_bound() {
        let factory = define_class(
            ClassSpec::new()
                .with_factory_static("BASE", Value::from(40))
                .with_factory_static("answer", Value::method(|scope, _| {
                    let base = scope.get("BASE").as_int().unwrap_or(0);
                    Ok(Value::from(base + 2))
                })),
        )
        .unwrap();

        assert_eq!(factory.static_value("BASE"), Some(Value::Int(40)));
        assert_eq!(factory.call_static("answer", &[]).unwrap(), Value::Int(42));
    }

    #[test]
    fn test_public_statics_readable_on_factory_surface() {
        let factory = define_class(
            ClassSpec::new().with_static(Tier::Public, "LIMIT", Value::from(5)),
        )
        .unwrap();
        assert_eq!(factory.static_value("LIMIT"), Some(Value::Int(5)));
    }

    #[test]
    fn test_factory_level_table_shadows_public_on_the_factory() {
        let factory = define_class(
            ClassSpec::new()
                .with_static(Tier::Public, "K", Value::from(1))
                .with_factory_static("K", Value::from(2)),
        )
        .unwrap();
        assert_eq!(factory.static_value("K"), Some(Value::Int(2)));
    }

    #[test]
    fn test_call_static_errors() {
        let factory = define_class(
            ClassSpec::new().with_factory_static("K", Value::from(1)),
        )
        .unwrap();
        assert!(matches!(
            factory.call_static("K", &[]),
            Err(FloeError::NotCallable(_))
        ));
        assert!(matches!(
            factory.call_static("missing", &[]),
            Err(FloeError::UnknownMember(_))
        ));
    }
}
