//! The inheritance chain resolver
//!
//! Construction is a depth-first, fully synchronous recursive descent: a
//! factory call first constructs its parent level in inheriting mode, then
//! layers its own containers, delegators, and bound statics on top. The
//! chain unwinds from the root ancestor outward; only the outermost (root
//! mode) call freezes the shared containers and yields an instance.
//!
//! The mode is a crate-private enum, so an inheriting call can never be
//! forged from outside the protocol.

use crate::container::Container;
use crate::delegate::Delegator;
use crate::factory::Factory;
use crate::statics::bind_table;
use crate::value::Value;
use crate::view::{View, ViewAccess, ViewInner};
use floe_types::{FloeResult, Tier};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use tracing::{debug, debug_span};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Direct factory call: freeze and return the public surface
    Root,
    /// Intermediate step feeding a more-derived level
    Inheriting,
}

/// What one level hands to the level deriving from it.
pub(crate) struct LevelState {
    pub(crate) protected_view: View,
    pub(crate) public_container: Rc<Container>,
    pub(crate) protected_container: Rc<Container>,
    /// Keep-alives: every view created along the chain. The finished
    /// instance retains them so bound methods stay callable.
    pub(crate) views: Vec<View>,
}

/// Run one construction level. Ancestors first, then this level's storage,
/// views, statics, and constructor body.
pub(crate) fn construct_level(
    factory: &Factory,
    args: &[Value],
    mode: Mode,
) -> FloeResult<LevelState> {
    let span = debug_span!("construct", class = factory.debug_name(), ?mode);
    let _guard = span.enter();
    let def = factory.definition();

    // Parasitic descent: the root ancestor executes first.
    let parent_state = match &def.parent {
        Some(parent) => Some(construct_level(parent, args, Mode::Inheriting)?),
        None => None,
    };

    // Inherited tiers chain to the parent's containers and protected view;
    // the private container is level-local and never chained.
    let (parent_view, public_container, protected_container, mut views) = match parent_state {
        Some(state) => (
            Some(state.protected_view.clone()),
            Container::derive(&state.public_container),
            Container::derive(&state.protected_container),
            state.views,
        ),
        None => (
            None,
            Container::root(Tier::Public),
            Container::root(Tier::Protected),
            Vec::new(),
        ),
    };
    let private_container = Container::root(Tier::Private);

    // The private view carries every delegator and every instance-tier
    // static; method statics bind to this view, so it is assembled
    // cyclically. Delegators for the inherited tiers are exported for the
    // protected view built next.
    let mut inherited: BTreeMap<String, Delegator> = BTreeMap::new();
    let private_view = View::new_cyclic(|ctx: &Weak<ViewInner>| {
        let mut members = BTreeMap::new();
        let tiers = [
            (Tier::Public, &public_container),
            (Tier::Protected, &protected_container),
            (Tier::Private, &private_container),
        ];
        for (tier, container) in tiers {
            for name in def.members.names(tier) {
                let delegator =
                    Delegator::new(tier, name.clone(), Rc::clone(container), Weak::clone(ctx));
                if tier.is_inherited() {
                    inherited.insert(name.clone(), delegator.clone());
                }
                members.insert(name.clone(), delegator);
            }
        }

        let mut statics = BTreeMap::new();
        bind_table(&def.statics.public, ctx, &mut statics);
        bind_table(&def.statics.protected, ctx, &mut statics);
        bind_table(&def.statics.private, ctx, &mut statics);

        ViewInner {
            access: ViewAccess::Full,
            members,
            statics,
            parent: parent_view.clone(),
        }
    });
    let ctx = private_view.downgrade();

    // The protected view is the limited window descendants inherit:
    // protected and public delegators, protected and public statics.
    let mut shared_statics = BTreeMap::new();
    bind_table(&def.statics.public, &ctx, &mut shared_statics);
    bind_table(&def.statics.protected, &ctx, &mut shared_statics);
    let protected_view = View::assemble(ViewInner {
        access: ViewAccess::Shared,
        members: inherited,
        statics: shared_statics,
        parent: parent_view,
    });

    // Public statics also live on the public container, so they are
    // reachable on the finished instance and shadowed by descendant levels.
    let mut surface_statics = BTreeMap::new();
    bind_table(&def.statics.public, &ctx, &mut surface_statics);
    for (name, value) in surface_statics {
        public_container.define(&name, value);
    }

    // A level with no constructor body is a pure pass-through.
    if let Some(constructor) = &def.constructor {
        constructor.invoke(&private_view, args)?;
    }

    views.push(private_view);
    views.push(protected_view.clone());

    if mode == Mode::Root {
        // Only the outermost call freezes: freezing mid-chain would block
        // descendant overrides.
        public_container.freeze_chain();
        protected_container.freeze_chain();
        debug!(class = factory.debug_name(), "instance finalized");
    }

    Ok(LevelState {
        protected_view,
        public_container,
        protected_container,
        views,
    })
}
