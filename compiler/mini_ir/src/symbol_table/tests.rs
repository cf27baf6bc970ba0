use super::*;
use pretty_assertions::assert_eq;

#[test]
fn indices_follow_insertion_order() {
    let mut table = SymbolTable::new();
    assert_eq!(table.intern("x"), 0);
    assert_eq!(table.intern("y"), 1);
    assert_eq!(table.intern("z"), 2);
    assert_eq!(table.len(), 3);
}

#[test]
fn repeated_names_reuse_index() {
    let mut table = SymbolTable::new();
    let first = table.intern("count");
    table.intern("other");
    assert_eq!(table.intern("count"), first);
    assert_eq!(table.intern("count"), first);
    assert_eq!(table.len(), 2);
}

#[test]
fn lookup_does_not_insert() {
    let mut table = SymbolTable::new();
    assert_eq!(table.lookup("missing"), None);
    assert!(table.is_empty());
    table.intern("present");
    assert_eq!(table.lookup("present"), Some(0));
}

#[test]
fn entries_are_ordered() {
    let mut table = SymbolTable::new();
    for name in ["b", "a", "b", "c", "a"] {
        table.intern(name);
    }
    let names: Vec<&str> = table.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
    assert_eq!(table.get(2).map(|e| e.name.as_str()), Some("c"));
    assert_eq!(table.get(3), None);
}

#[test]
fn entry_display() {
    let mut table = SymbolTable::new();
    table.intern("main");
    assert_eq!(table.entries()[0].to_string(), "[0] main");
}
