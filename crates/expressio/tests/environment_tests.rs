//! Environment tests

use expressio::*;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════
// Basic Operations
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_environment_new_is_empty() {
    let env = Environment::new();
    assert!(env.is_empty());
    assert_eq!(env.len(), 0);
}

#[test]
fn test_environment_set_and_get() {
    let mut env = Environment::new();
    env.set("x", 42.0);

    assert_eq!(env.get("x"), Some(42.0));
    assert_eq!(env.get("y"), None);
    assert!(env.contains("x"));
    assert!(!env.contains("y"));
}

#[test]
fn test_environment_set_multiple() {
    let mut env = Environment::new();
    env.set("a", 1.0);
    env.set("b", 2.0);
    env.set("c", 3.0);

    assert_eq!(env.len(), 3);
    assert_eq!(env.get("a"), Some(1.0));
    assert_eq!(env.get("b"), Some(2.0));
    assert_eq!(env.get("c"), Some(3.0));
}

// ═══════════════════════════════════════════════════════════════════════
// Overwriting
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_environment_overwrite_does_not_duplicate() {
    let mut env = Environment::new();
    env.set("x", 1.0);
    env.set("x", 2.0);

    assert_eq!(env.len(), 1);
    assert_eq!(env.get("x"), Some(2.0));
}

// ═══════════════════════════════════════════════════════════════════════
// Iteration and Inspection
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_environment_iter_in_first_assignment_order() {
    let mut env = Environment::new();
    env.set("z", 1.0);
    env.set("a", 2.0);
    env.set("z", 3.0);

    let entries: Vec<(&str, f64)> = env.iter().collect();
    assert_eq!(entries, vec![("z", 3.0), ("a", 2.0)]);
}

#[test]
fn test_environment_clear() {
    let mut env = Environment::new();
    env.set("a", 1.0);
    env.set("b", 2.0);

    env.clear();

    assert!(env.is_empty());
    assert!(!env.contains("a"));
    assert_eq!(env.iter().count(), 0);
}

#[test]
fn test_environment_clone_is_independent() {
    let mut env = Environment::new();
    env.set("a", 1.0);

    let mut copy = env.clone();
    copy.set("a", 5.0);

    assert_eq!(env.get("a"), Some(1.0));
    assert_eq!(copy.get("a"), Some(5.0));
}

// ═══════════════════════════════════════════════════════════════════════
// Through the Interpreter
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_environment_populated_by_assignments() {
    let mut interp = Interpreter::new();
    interp.run("a = 1").unwrap();
    interp.run("b = a + 1").unwrap();
    interp.run("a + b").unwrap();

    let entries: Vec<(&str, f64)> = interp.environment().iter().collect();
    assert_eq!(entries, vec![("a", 1.0), ("b", 2.0)]);
}
