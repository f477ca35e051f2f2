use pretty_assertions::assert_eq;

use super::*;

#[test]
fn define_then_lookup() {
    let mut env = Env::new();
    env.define("x", 5);
    assert_eq!(env.lookup("x"), Some(5));
    assert!(env.is_defined("x"));
}

#[test]
fn absent_names_are_none() {
    let env = Env::new();
    assert_eq!(env.lookup("x"), None);
    assert!(!env.is_defined("x"));
    assert!(env.is_empty());
}

#[test]
fn redefine_overwrites() {
    let mut env = Env::new();
    env.define("x", 1);
    env.define("x", 2);
    assert_eq!(env.lookup("x"), Some(2));
    assert_eq!(env.len(), 1);
}

#[test]
fn snapshot_restore_discards_later_bindings() {
    let mut env = Env::new();
    env.define("x", 1);
    let snapshot = env.snapshot();

    env.define("x", 99);
    env.define("local", 7);
    assert_eq!(env.lookup("x"), Some(99));

    env.restore(snapshot);
    assert_eq!(env.lookup("x"), Some(1));
    assert_eq!(env.lookup("local"), None);
}
