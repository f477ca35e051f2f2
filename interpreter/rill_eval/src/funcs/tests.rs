use pretty_assertions::assert_eq;

use super::*;

fn def(params: &[&str], body: &[&str]) -> FunctionDef {
    FunctionDef {
        params: params.iter().map(ToString::to_string).collect(),
        body: body.iter().map(ToString::to_string).collect(),
    }
}

#[test]
fn define_then_lookup() {
    let mut table = FunctionTable::new();
    table.define("greet", def(&["who"], &["print who"]));
    assert!(table.contains("greet"));
    let stored = table.lookup("greet");
    assert_eq!(stored.map(|d| d.params.len()), Some(1));
}

#[test]
fn unknown_names_are_none() {
    let table = FunctionTable::new();
    assert!(table.lookup("nope").is_none());
    assert!(table.is_empty());
}

#[test]
fn redefinition_overwrites() {
    let mut table = FunctionTable::new();
    table.define("f", def(&[], &["print 1"]));
    table.define("f", def(&["a"], &["print a"]));
    assert_eq!(table.len(), 1);
    assert_eq!(table.lookup("f").map(|d| d.params.len()), Some(1));
}

#[test]
fn body_lines_are_stored_verbatim() {
    let mut table = FunctionTable::new();
    table.define("f", def(&[], &["x = 1 + 2", "print x"]));
    let body = table.lookup("f").map(|d| d.body.clone()).unwrap_or_default();
    assert_eq!(body, ["x = 1 + 2", "print x"]);
}
