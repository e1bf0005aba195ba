use std::fmt;
use std::sync::Arc;

use crate::errors::Result;
use crate::object::Object;

type MethodFn = dyn Fn(&Object, &[Value]) -> Result<Value> + Send + Sync;
type GetterFn = dyn Fn(&Object) -> Result<Value> + Send + Sync;
type SetterFn = dyn Fn(&mut Object, Value) -> Result<()> + Send + Sync;

/// Address of the shared allocation, ignoring vtable metadata
fn addr<T: ?Sized>(ptr: &Arc<T>) -> *const () {
    Arc::as_ptr(ptr) as *const ()
}

/// A shared callable member
///
/// Methods receive the object they were called on as their first argument.
/// Two methods are the same method only if they share one allocation, which
/// is how composition tells a re-exported member apart from a lookalike.
#[derive(Clone)]
pub struct Method {
    name: Option<Arc<str>>,
    func: Arc<MethodFn>,
}

impl Method {
    /// Create an anonymous method
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Object, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: None,
            func: Arc::new(func),
        }
    }

    /// Create a named method; the name shows up in `toString` of instances
    /// whose `constructor` is this method
    pub fn named<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&Object, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            func: Arc::new(func),
        }
    }

    /// The method's name, if it was given one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invoke the method with `this` bound to `receiver`
    ///
    /// # Errors
    ///
    /// Returns whatever error the method body raises.
    pub fn call(&self, receiver: &Object, args: &[Value]) -> Result<Value> {
        (self.func)(receiver, args)
    }

    /// Identity comparison
    pub fn same(&self, other: &Method) -> bool {
        addr(&self.func) == addr(&other.func)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "[Function: {}]", name),
            None => f.write_str("[Function]"),
        }
    }
}

/// Read half of an accessor member
#[derive(Clone)]
pub struct Getter(Arc<GetterFn>);

impl Getter {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Object) -> Result<Value> + Send + Sync + 'static,
    {
        Self(Arc::new(func))
    }

    /// Run the getter against `receiver`
    ///
    /// # Errors
    ///
    /// Returns whatever error the getter body raises.
    pub fn call(&self, receiver: &Object) -> Result<Value> {
        (self.0)(receiver)
    }

    /// Identity comparison
    pub fn same(&self, other: &Getter) -> bool {
        addr(&self.0) == addr(&other.0)
    }
}

impl fmt::Debug for Getter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Getter]")
    }
}

/// Write half of an accessor member
#[derive(Clone)]
pub struct Setter(Arc<SetterFn>);

impl Setter {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&mut Object, Value) -> Result<()> + Send + Sync + 'static,
    {
        Self(Arc::new(func))
    }

    /// Run the setter against `receiver`
    ///
    /// # Errors
    ///
    /// Returns whatever error the setter body raises.
    pub fn call(&self, receiver: &mut Object, value: Value) -> Result<()> {
        (self.0)(receiver, value)
    }

    /// Identity comparison
    pub fn same(&self, other: &Setter) -> bool {
        addr(&self.0) == addr(&other.0)
    }
}

impl fmt::Debug for Setter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Setter]")
    }
}

/// A member value
///
/// Equality is strict equality: scalars and strings compare by content,
/// functions and objects by identity. There is no deep comparison.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(Arc<str>),
    Function(Method),
    Object(Arc<Object>),
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Method> {
        match self {
            Value::Function(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Arc<Object>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.same(b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Value::Number(n) => write!(f, "{}", n),
            Value::Str(s) => f.write_str(s),
            Value::Function(m) => write!(f, "{:?}", m),
            Value::Object(o) => write!(f, "{}", o),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<Method> for Value {
    fn from(m: Method) -> Self {
        Value::Function(m)
    }
}

impl From<Arc<Object>> for Value {
    fn from(o: Arc<Object>) -> Self {
        Value::Object(o)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(Arc::new(o))
    }
}
