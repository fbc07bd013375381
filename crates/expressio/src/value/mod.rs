//! Runtime values produced by evaluation

mod display;

/// What evaluating a tree node yields.
///
/// Every node except an assignment evaluates to a `Number`; an assignment
/// evaluates to the `Variable` it just bound.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A plain numeric result
    Number(f64),

    /// A freshly assigned variable
    Variable {
        /// Name that was bound
        name: String,
        /// Value it was bound to
        value: f64,
    },
}

impl Value {
    /// The numeric payload, whichever variant this is.
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Variable { value, .. } => *value,
        }
    }
}

/// The result of running one line, as handed to the host.
///
/// An assignment carries the bound name and has `is_assignment` set. A bare
/// expression is anonymous: empty name, flag unset.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    /// Assigned variable name; empty for a bare expression
    pub name: String,

    /// Resulting value
    pub value: f64,

    /// Whether the line was an assignment
    pub is_assignment: bool,
}

impl Output {
    /// An anonymous result of a bare expression.
    pub fn anonymous(value: f64) -> Self {
        Self {
            name: String::new(),
            value,
            is_assignment: false,
        }
    }

    /// The result of binding `name` to `value`.
    pub fn assignment(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            is_assignment: true,
        }
    }
}

impl From<Value> for Output {
    fn from(value: Value) -> Self {
        match value {
            Value::Variable { name, value } => Output::assignment(name, value),
            Value::Number(n) => Output::anonymous(n),
        }
    }
}
