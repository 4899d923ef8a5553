//! Tagged values.
//!
//! The VM is dynamically typed; every runtime value is one of null, a
//! boolean, a double, or a heap object. The compiler only ever constructs
//! the subset that can appear in a constant pool: numbers, strings, and
//! function objects. Classes and instances exist purely at run time.

use std::fmt;
use std::rc::Rc;

use crate::func::ObjFn;

/// A runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Num(f64),
    Obj(Obj),
}

/// A heap object, shared by reference.
#[derive(Clone, Debug, PartialEq)]
pub enum Obj {
    /// An immutable string.
    Str(Rc<str>),
    /// A compiled function body.
    Fn(Rc<ObjFn>),
}

impl Value {
    /// A numeric value.
    pub fn num(value: f64) -> Value {
        Value::Num(value)
    }

    /// A string object holding a copy of `text`.
    pub fn string(text: &str) -> Value {
        Value::Obj(Obj::Str(Rc::from(text)))
    }

    /// A function object value, taking ownership of `func`.
    pub fn func(func: ObjFn) -> Value {
        Value::Obj(Obj::Fn(Rc::new(func)))
    }

    /// The function object inside, if this value is one.
    pub fn as_fn(&self) -> Option<&ObjFn> {
        match self {
            Value::Obj(Obj::Fn(func)) => Some(func),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Num(n) => write!(f, "{}", n),
            Value::Obj(Obj::Str(s)) => write!(f, "\"{}\"", s),
            Value::Obj(Obj::Fn(func)) => write!(f, "<fn {} bytes>", func.code.len()),
        }
    }
}
