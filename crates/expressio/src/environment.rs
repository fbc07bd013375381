//! Session variable table

use indexmap::IndexMap;

/// The variable table shared by every line of a session.
///
/// Names are unique; assigning an existing name overwrites it in place.
/// Entries are only ever removed all at once by [`Environment::clear`].
/// Iteration yields variables in the order they were first assigned.
///
/// # Example
///
/// ```
/// use expressio::Environment;
///
/// let mut env = Environment::new();
///
/// env.set("x", 1.0);
/// env.set("y", 2.0);
/// env.set("x", 10.0); // Overwrites x
///
/// assert_eq!(env.get("x"), Some(10.0));
/// assert_eq!(env.len(), 2);
///
/// env.clear();
/// assert_eq!(env.get("y"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: IndexMap<String, f64>,
}

impl Environment {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up a variable by exact name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }

    /// Check if a variable exists.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Mutation
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `name` to `value`, overwriting any previous value.
    ///
    /// Returns the previous value, if there was one.
    pub fn set(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.bindings.insert(name.into(), value)
    }

    /// Remove every variable.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Iterate over all variables, in first-assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Get the number of variables.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_returns_previous() {
        let mut env = Environment::new();
        assert_eq!(env.set("a", 1.0), None);
        assert_eq!(env.set("a", 2.0), Some(1.0));
        assert_eq!(env.get("a"), Some(2.0));
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let mut env = Environment::new();
        env.set("a", 1.0);
        env.set("b", 2.0);
        env.set("a", 3.0);
        let names: Vec<&str> = env.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut env = Environment::new();
        env.set("X", 1.0);
        assert!(env.contains("X"));
        assert!(!env.contains("x"));
    }
}
