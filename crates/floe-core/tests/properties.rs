//! Property tests: the write-once and visibility contracts hold for
//! arbitrary declarations and assignment sequences.

use floe_core::{define_class, ClassSpec, FloeError, MemberDecls, Tier, Value};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Distinct member names, split round-robin across the three tiers.
fn arb_tiered_names() -> impl Strategy<Value = (Vec<String>, Vec<String>, Vec<String>)> {
    prop::collection::btree_set("[a-z]{1,8}", 1..9).prop_map(|names: BTreeSet<String>| {
        let mut tiers = (Vec::new(), Vec::new(), Vec::new());
        for (index, name) in names.into_iter().enumerate() {
            match index % 3 {
                0 => tiers.0.push(name),
                1 => tiers.1.push(name),
                _ => tiers.2.push(name),
            }
        }
        tiers
    })
}

proptest! {
    /// The first write to a member succeeds and is immediately visible;
    /// every later write fails with a reassignment error and leaves the
    /// stored value untouched.
    #[test]
    fn property_write_once_per_level(
        name in "[a-z]{1,10}",
        values in prop::collection::vec(any::<i64>(), 2..6),
    ) {
        let member = name.clone();
        let written = values.clone();
        let factory = define_class(
            ClassSpec::new()
                .with_members(MemberDecls::new().with_public([member.clone()]))
                .with_constructor(move |this, _| {
                    this.set(&member, Value::from(written[0]))?;
                    assert_eq!(this.get(&member), Value::Int(written[0]));
                    for value in &written[1..] {
                        let err = this.set(&member, Value::from(*value)).unwrap_err();
                        assert!(matches!(err, FloeError::Reassignment(_)));
                        assert_eq!(this.get(&member), Value::Int(written[0]));
                    }
                    Ok(())
                }),
        )
        .unwrap();

        let instance = factory.construct(&[]).unwrap();
        prop_assert_eq!(instance.get(&name), Some(Value::Int(values[0])));
    }

    /// Exactly the public tier surfaces on the instance, regardless of how
    /// declarations are distributed across tiers.
    #[test]
    fn property_only_public_members_surface(
        (private, protected, public) in arb_tiered_names(),
    ) {
        let decls = MemberDecls::new()
            .with_private(private.clone())
            .with_protected(protected.clone())
            .with_public(public.clone());
        let all: Vec<String> = decls.iter().map(|(_, n)| n.to_string()).collect();
        let assigned = all.clone();

        let factory = define_class(
            ClassSpec::new()
                .with_members(decls)
                .with_constructor(move |this, _| {
                    for (index, name) in assigned.iter().enumerate() {
                        this.set(name, Value::from(index as i64))?;
                    }
                    Ok(())
                }),
        )
        .unwrap();

        let instance = factory.construct(&[]).unwrap();
        let mut expected = public.clone();
        expected.sort();
        prop_assert_eq!(instance.names(), expected);
        for name in private.iter().chain(&protected) {
            prop_assert_eq!(instance.get(name), None);
        }
        for name in &public {
            prop_assert!(instance.get(name).is_some());
        }
    }

    /// Construction is deterministic: identical arguments give instances
    /// with equal public values.
    #[test]
    fn property_construction_deterministic(args in prop::collection::vec(any::<i64>(), 0..5)) {
        let factory = define_class(
            ClassSpec::new()
                .with_members(MemberDecls::new().with_public(["sum", "len"]))
                .with_static(Tier::Public, "SCALE", Value::from(10))
                .with_constructor(|this, args| {
                    let sum: i64 = args.iter().filter_map(Value::as_int).sum();
                    this.set("sum", Value::from(sum))?;
                    this.set("len", Value::from(args.len() as i64))
                }),
        )
        .unwrap();

        let values: Vec<Value> = args.iter().copied().map(Value::from).collect();
        let first = factory.construct(&values).unwrap();
        let second = factory.construct(&values).unwrap();

        prop_assert_eq!(first.get("sum"), second.get("sum"));
        prop_assert_eq!(first.get("len"), Some(Value::Int(args.len() as i64)));
        prop_assert_eq!(first.get("SCALE"), Some(Value::Int(10)));
    }
}
