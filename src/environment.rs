//! Lexically-scoped, chained environments. Lookup walks the parent
//! chain; `set` is always local — the write-isolation that gives
//! closures their "assignment never mutates an outer binding"
//! semantics (see `interpreter.rs`).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::object::{Builtin, Value};

/// Environments are shared: every closure pins its defining
/// environment, and a call creates a child of it. Reference-counted
/// interior mutability is the natural fit since execution is
/// single-threaded and parent pointers never form a cycle.
pub type EnvRef = Rc<RefCell<Environment>>;

#[derive(Debug)]
pub struct Environment {
    store: HashMap<String, Value>,
    parent: Option<EnvRef>,
}

impl Environment {
    /// A fresh root environment, seeded with the built-in bindings.
    pub fn new_root() -> EnvRef {
        let mut store = HashMap::new();
        store.insert("true".to_string(), Value::Boolean(true));
        store.insert("false".to_string(), Value::Boolean(false));
        store.insert("null".to_string(), Value::Null);
        store.insert("puts".to_string(), Value::Builtin(Builtin::Puts));
        store.insert("if".to_string(), Value::Builtin(Builtin::If));
        Rc::new(RefCell::new(Environment { store, parent: None }))
    }

    /// A child scope with an empty local map, used on entering a
    /// function body. `parent` is the function's *defining*
    /// environment, not the caller's.
    pub fn new_child(parent: &EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Environment { store: HashMap::new(), parent: Some(Rc::clone(parent)) }))
    }

    /// Local map first, then recursive parent lookup.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.borrow().get(name))
    }

    /// Local-only insertion — never walks to a parent, even if the
    /// name already exists there.
    pub fn set(&mut self, name: &str, value: Value) {
        self.store.insert(name.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_builtins() {
        let env = Environment::new_root();
        assert_eq!(env.borrow().get("true"), Some(Value::Boolean(true)));
        assert_eq!(env.borrow().get("puts"), Some(Value::Builtin(Builtin::Puts)));
    }

    #[test]
    fn get_walks_parent_chain() {
        let root = Environment::new_root();
        root.borrow_mut().set("val", Value::Integer(12));
        let child = Environment::new_child(&root);
        assert_eq!(child.borrow().get("val"), Some(Value::Integer(12)));
    }

    #[test]
    fn set_never_writes_through_to_parent() {
        let root = Environment::new_root();
        root.borrow_mut().set("val", Value::Integer(56));
        let child = Environment::new_child(&root);
        child.borrow_mut().set("val", Value::Integer(78));
        assert_eq!(child.borrow().get("val"), Some(Value::Integer(78)));
        assert_eq!(root.borrow().get("val"), Some(Value::Integer(56)));
    }

    #[test]
    fn missing_name_resolves_to_none() {
        let env = Environment::new_root();
        assert_eq!(env.borrow().get("nope"), None);
    }
}
