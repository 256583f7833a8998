//! Static tables and the static binder
//!
//! Statics are predefined, per-factory values shared by every instance:
//! constants and methods. Tables are prepared once at definition time and
//! never mutated afterwards; method entries are bound freshly for every
//! construction so their execution context is the constructing instance's
//! private view, not the table or the factory.

use crate::value::Value;
use crate::view::ViewInner;
use floe_types::Tier;
use std::collections::BTreeMap;
use std::rc::Weak;

/// Per-level static declarations: one table per instance tier plus the
/// factory-level table exposed on the factory object itself.
#[derive(Clone, Debug, Default)]
pub(crate) struct StaticTables {
    pub(crate) private: BTreeMap<String, Value>,
    pub(crate) protected: BTreeMap<String, Value>,
    pub(crate) public: BTreeMap<String, Value>,
    pub(crate) factory: BTreeMap<String, Value>,
}

impl StaticTables {
    pub(crate) fn tier(&self, tier: Tier) -> &BTreeMap<String, Value> {
        match tier {
            Tier::Private => &self.private,
            Tier::Protected => &self.protected,
            Tier::Public => &self.public,
        }
    }

    pub(crate) fn tier_mut(&mut self, tier: Tier) -> &mut BTreeMap<String, Value> {
        match tier {
            Tier::Private => &mut self.private,
            Tier::Protected => &mut self.protected,
            Tier::Public => &mut self.public,
        }
    }
}

/// Bind one table for a construction level. Method values are bound to the
/// level's private view; everything else passes through unchanged. Entries
/// land in `out`, later tables shadowing earlier ones.
pub(crate) fn bind_table(
    table: &BTreeMap<String, Value>,
    ctx: &Weak<ViewInner>,
    out: &mut BTreeMap<String, Value>,
) {
    for (name, value) in table {
        let bound = match value {
            Value::Method(method) => Value::Bound(method.bind(name, ctx)),
            other => other.clone(),
        };
        out.insert(name.clone(), bound);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_passes_values_through() {
        let mut table = BTreeMap::new();
        table.insert("LIMIT".to_string(), Value::from(10));
        table.insert("greet".to_string(), Value::method(|_, _| Ok(Value::Null)));

        let mut out = BTreeMap::new();
        bind_table(&table, &Weak::new(), &mut out);

        assert_eq!(out["LIMIT"], Value::Int(10));
        assert!(matches!(out["greet"], Value::Bound(_)));
    }
}
