//! Lexical environments.
//!
//! Each frame is a `Scope` behind a shared `LocalScope` handle. A function
//! object keeps a clone of the handle for the frame it was defined in, so
//! the frame lives as long as any closure can still see it, and a binding
//! made through one handle is visible through every other.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::object::Object;

/// A single-threaded, reference-counted cell.
///
/// All frame allocations go through `LocalScope::new`. Not `Send`: the
/// interpreter runs on one thread.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether two handles refer to the same frame.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One frame of bindings.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<String, Object>,
    parent: Option<Environment>,
}

impl Scope {
    /// Look up `name` here, then along the parent chain.
    fn lookup(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.get(name))
    }
}

/// Handle to an environment frame.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A fresh top-level frame.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::default()),
        }
    }

    /// A fresh frame whose parent is `outer`.
    pub fn new_enclosed(outer: &Environment) -> Self {
        Environment {
            scope: LocalScope::new(Scope {
                bindings: FxHashMap::default(),
                parent: Some(outer.clone()),
            }),
        }
    }

    /// Resolve `name` through this frame and its ancestors.
    pub fn get(&self, name: &str) -> Option<Object> {
        self.scope.borrow().lookup(name)
    }

    /// Bind `name` in this frame, shadowing any outer binding. Returns the
    /// bound value.
    pub fn set(&self, name: impl Into<String>, value: Object) -> Object {
        self.scope
            .borrow_mut()
            .bindings
            .insert(name.into(), value.clone());
        value
    }

    /// Whether both handles refer to the same frame.
    pub fn same_frame(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// Values are omitted: a frame can hold a closure that captures the frame.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.scope.borrow();
        let mut names: Vec<&str> = scope.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("bindings", &names)
            .field("enclosed", &scope.parent.is_some())
            .finish()
    }
}
