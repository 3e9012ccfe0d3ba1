//! Behavioral properties of the route tree.

use routedoc::{DocEntry, RouteTree};
use serde_json::json;

#[test]
fn test_equivalent_patterns_address_same_node() {
    let patterns = ["/a/b", "a/b/", "/a/b/*", "//a//b//"];

    for pattern in patterns {
        let mut tree = RouteTree::new();
        tree.register("GET", pattern, Some(DocEntry::titled(pattern)));
        let doc = tree.doc("get", "/a/b").unwrap();
        assert_eq!(doc.title.as_deref(), Some(pattern));
    }
}

#[test]
fn test_methods_accumulate_at_a_node() {
    let mut tree = RouteTree::new();
    tree.register("GET", "/things", Some(DocEntry::titled("list")));
    tree.register("POST", "/things", Some(DocEntry::titled("create")));
    tree.register("GET", "/things", Some(DocEntry::titled("list again")));

    let node = tree.node("/things").unwrap();
    assert_eq!(node.methods().len(), 2);
    assert_eq!(node.method("POST").unwrap().title.as_deref(), Some("create"));
    assert_eq!(
        node.method("GET").unwrap().title.as_deref(),
        Some("list again")
    );
}

#[test]
fn test_get_then_delete_on_param_path() {
    let some_doc = DocEntry::titled("Remove")
        .description("Deletes the user")
        .output(json!({"deleted": true}));

    let mut tree = RouteTree::new();
    tree.register("GET", "/users/:id", None);
    tree.register("DELETE", "/users/:id", Some(some_doc.clone()));

    let node = tree
        .root()
        .child("/users")
        .and_then(|users| users.child("/:id"))
        .unwrap();

    assert_eq!(
        node.method("GET").unwrap(),
        &DocEntry::new().url_param("id", "string")
    );
    assert_eq!(
        node.method("DELETE").unwrap(),
        &some_doc.url_param("id", "string")
    );
}

#[test]
fn test_mount_admin_group() {
    let mut admin = RouteTree::new();
    admin.register("GET", "/stats", None);
    admin.register("GET", "/users", None);

    let mut tree = RouteTree::new();
    tree.mount("/admin/*", admin);

    let node = tree.node("/admin").unwrap();
    assert_eq!(
        node.children().keys().collect::<Vec<_>>(),
        vec!["/stats", "/users"]
    );
}

#[test]
fn test_mount_keeps_target_methods_before_and_after() {
    let mut child = RouteTree::new();
    child.register("GET", "/leaf", None);

    let mut tree = RouteTree::new();
    tree.register("GET", "/x", Some(DocEntry::titled("before")));
    tree.mount("/x", child);
    tree.register("PUT", "/x", Some(DocEntry::titled("after")));

    let node = tree.node("/x").unwrap();
    assert_eq!(node.method("GET").unwrap().title.as_deref(), Some("before"));
    assert_eq!(node.method("PUT").unwrap().title.as_deref(), Some("after"));
    assert!(node.child("/leaf").is_some());
}

#[test]
fn test_mount_at_root_unions_children() {
    let mut child = RouteTree::new();
    child.register("GET", "/c", None);

    for pattern in ["", "/", "/*"] {
        let mut tree = RouteTree::new();
        tree.register("GET", "/p", None);
        tree.mount(pattern, child.clone());

        let keys: Vec<_> = tree.root().children().keys().cloned().collect();
        assert_eq!(keys, vec!["/c", "/p"], "pattern {pattern:?}");
    }
}

#[test]
fn test_register_twice_equals_once() {
    let doc = DocEntry::titled("same").form_value("file", "binary");

    let mut once = RouteTree::new();
    once.register("POST", "/upload/:bucket", Some(doc.clone()));

    let mut twice = once.clone();
    twice.register("POST", "/upload/:bucket", Some(doc));

    assert_eq!(once, twice);
    assert_eq!(
        serde_json::to_string(&once).unwrap(),
        serde_json::to_string(&twice).unwrap()
    );
}
