//! Finalized instances
//!
//! An instance is the outermost public container of a completed
//! construction, frozen before it is returned. It exposes read and call
//! access to public members only; there is no mutation surface. The view
//! chain is retained internally so bound methods stay callable for the
//! instance's lifetime.

use crate::container::Container;
use crate::value::Value;
use crate::view::View;
use floe_types::{FloeError, FloeResult};
use std::fmt;
use std::rc::Rc;

pub struct Instance {
    class: Option<String>,
    public: Rc<Container>,
    /// Keep-alive for the private/protected views bound methods point at
    _views: Vec<View>,
}

impl Instance {
    pub(crate) fn new(class: Option<String>, public: Rc<Container>, views: Vec<View>) -> Self {
        debug_assert!(public.is_frozen());
        Self {
            class,
            public,
            _views: views,
        }
    }

    /// The diagnostic class name of the most-derived level, if one was set
    pub fn class_name(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Read a public member, most-derived override first. Private and
    /// protected members, undeclared names, and declared-but-never-assigned
    /// public members all read as `None`.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.public.read_chain(name)
    }

    /// Invoke a public method member or public static
    pub fn call(&self, name: &str, args: &[Value]) -> FloeResult<Value> {
        match self.get(name) {
            Some(Value::Bound(method)) => method.call(args),
            Some(_) => Err(FloeError::NotCallable(name.to_string())),
            None => Err(FloeError::UnknownMember(name.to_string())),
        }
    }

    /// The names of every public member reachable on this instance
    pub fn names(&self) -> Vec<String> {
        self.public.chain_names()
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("class", &self.class.as_deref().unwrap_or("<anonymous>"))
            .field("public", &self.names())
            .finish()
    }
}
