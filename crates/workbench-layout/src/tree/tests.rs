use pretty_assertions::assert_eq;
use serde_json::json;

use workbench_common::{LayoutError, PaneKind};

use super::*;

fn editor() -> ItemConfig {
    ItemConfig::component(PaneKind::Editor, json!({ "id": 1 }))
}

fn compiler() -> ItemConfig {
    ItemConfig::component(PaneKind::Compiler, json!({ "id": 1 }))
}

fn diff() -> ItemConfig {
    ItemConfig::component(PaneKind::Diff, json!({}))
}

fn kinds(tree: &LayoutTree) -> Vec<PaneKind> {
    tree.panes()
        .into_iter()
        .map(|id| tree.slot(id).unwrap().kind)
        .collect()
}

// -- add_at_root --

#[test]
fn add_at_root_on_empty_tree_creates_row() {
    let mut tree = LayoutTree::new();
    let pane = tree.add_at_root(&editor());

    assert_eq!(tree.top_level().len(), 1);
    let root = tree.first_top_level().unwrap();
    assert!(matches!(tree.node(root), Some(LayoutNode::Row { .. })));
    assert_eq!(tree.children(root), &[pane]);
    assert_eq!(tree.parent(pane), Some(root));
}

#[test]
fn add_at_root_wraps_single_pane_in_row() {
    let mut tree = LayoutTree::from_config(&[editor()]);
    let original = tree.first_top_level().unwrap();

    let new = tree.add_at_root(&compiler());

    let root = tree.first_top_level().unwrap();
    assert_ne!(root, original);
    assert!(matches!(tree.node(root), Some(LayoutNode::Row { .. })));
    assert_eq!(tree.children(root), &[original, new]);
    assert_eq!(tree.parent(original), Some(root));
    assert_eq!(tree.parent(new), Some(root));
    assert_eq!(tree.parent(root), None);
    assert_eq!(kinds(&tree), vec![PaneKind::Editor, PaneKind::Compiler]);
}

#[test]
fn add_at_root_appends_to_existing_row() {
    let mut tree = LayoutTree::from_config(&[ItemConfig::row(vec![editor(), compiler()])]);
    let root = tree.first_top_level().unwrap();
    let before = tree.children(root).to_vec();

    let new = tree.add_at_root(&diff());

    assert_eq!(tree.first_top_level(), Some(root));
    let after = tree.children(root);
    assert_eq!(&after[..2], &before[..]);
    assert_eq!(after[2], new);
    assert_eq!(
        kinds(&tree),
        vec![PaneKind::Editor, PaneKind::Compiler, PaneKind::Diff]
    );
}

#[test]
fn add_at_root_appends_to_existing_column() {
    let mut tree = LayoutTree::from_config(&[ItemConfig::column(vec![editor()])]);
    let root = tree.first_top_level().unwrap();

    let new = tree.add_at_root(&diff());

    assert!(matches!(tree.node(root), Some(LayoutNode::Column { .. })));
    assert_eq!(tree.children(root).len(), 2);
    assert_eq!(tree.children(root)[1], new);
}

#[test]
fn add_at_root_twice_from_single_pane_keeps_one_row() {
    let mut tree = LayoutTree::from_config(&[editor()]);
    tree.add_at_root(&compiler());
    tree.add_at_root(&diff());

    assert_eq!(tree.top_level().len(), 1);
    let root = tree.first_top_level().unwrap();
    assert_eq!(tree.children(root).len(), 3);
}

#[test]
fn add_at_root_inserts_whole_subtree() {
    let mut tree = LayoutTree::from_config(&[ItemConfig::row(vec![editor()])]);
    let new = tree.add_at_root(&ItemConfig::column(vec![compiler(), diff()]));

    assert_eq!(tree.children(new).len(), 2);
    assert_eq!(tree.panes_under(new).len(), 2);
    assert_eq!(tree.panes().len(), 3);
}

// -- find_parent_row_or_column --

#[test]
fn find_parent_of_nested_pane() {
    let tree = LayoutTree::from_config(&[ItemConfig::row(vec![
        editor(),
        ItemConfig::column(vec![compiler(), diff()]),
    ])]);
    let panes = tree.panes();
    let root = tree.first_top_level().unwrap();
    let column = tree.children(root)[1];

    assert_eq!(tree.find_parent_row_or_column(panes[0]), Some(root));
    assert_eq!(tree.find_parent_row_or_column(panes[1]), Some(column));
    assert_eq!(tree.find_parent_row_or_column(column), Some(root));
}

#[test]
fn find_parent_is_strictly_upward() {
    let tree = LayoutTree::from_config(&[ItemConfig::row(vec![editor()])]);
    let root = tree.first_top_level().unwrap();
    // The row itself is not its own answer.
    assert_eq!(tree.find_parent_row_or_column(root), None);
}

#[test]
fn find_parent_of_lone_top_level_pane_is_none() {
    let tree = LayoutTree::from_config(&[editor()]);
    let pane = tree.first_top_level().unwrap();
    assert_eq!(tree.find_parent_row_or_column(pane), None);
}

#[test]
fn find_parent_of_unknown_node_is_none() {
    let tree = LayoutTree::new();
    assert_eq!(tree.find_parent_row_or_column(NodeId(9)), None);
}

// -- primitives --

#[test]
fn add_child_rejects_pane_container() {
    let mut tree = LayoutTree::from_config(&[editor()]);
    let pane = tree.first_top_level().unwrap();
    let other = tree.create_content_item(&diff());
    assert_eq!(
        tree.add_child(pane, other),
        Err(LayoutError::NotAContainer(pane.index()))
    );
}

#[test]
fn add_child_rejects_attached_child() {
    let mut tree = LayoutTree::from_config(&[ItemConfig::row(vec![editor()])]);
    let root = tree.first_top_level().unwrap();
    let pane = tree.children(root)[0];
    assert_eq!(
        tree.add_child(root, pane),
        Err(LayoutError::AlreadyAttached(pane.index()))
    );
}

#[test]
fn add_child_rejects_cycles() {
    let mut tree = LayoutTree::new();
    let outer = tree.create_content_item(&ItemConfig::row(vec![ItemConfig::column(vec![])]));
    let inner = tree.children(outer)[0];
    assert_eq!(
        tree.add_child(inner, outer),
        Err(LayoutError::AlreadyAttached(outer.index()))
    );
}

#[test]
fn add_child_unknown_node() {
    let mut tree = LayoutTree::new();
    let row = tree.create_content_item(&ItemConfig::row(vec![]));
    assert_eq!(
        tree.add_child(row, NodeId(42)),
        Err(LayoutError::UnknownNode(42))
    );
}

#[test]
fn replace_child_keeps_old_node_alive() {
    let mut tree = LayoutTree::from_config(&[ItemConfig::row(vec![editor(), compiler()])]);
    let root = tree.first_top_level().unwrap();
    let old = tree.children(root)[0];
    let new = tree.create_content_item(&diff());

    tree.replace_child(old, new).unwrap();

    assert_eq!(tree.children(root)[0], new);
    assert!(tree.contains(old));
    assert!(!tree.is_attached(old));
    assert_eq!(tree.parent(old), None);

    // The detached node can go back in.
    tree.add_child(root, old).unwrap();
    assert_eq!(tree.children(root)[2], old);
}

#[test]
fn replace_detached_child_is_rejected() {
    let mut tree = LayoutTree::new();
    let a = tree.create_content_item(&editor());
    let b = tree.create_content_item(&diff());
    assert_eq!(
        tree.replace_child(a, b),
        Err(LayoutError::UnknownNode(a.index()))
    );
}

#[test]
fn remove_frees_subtree() {
    let mut tree = LayoutTree::from_config(&[ItemConfig::row(vec![
        editor(),
        ItemConfig::column(vec![compiler(), diff()]),
    ])]);
    let root = tree.first_top_level().unwrap();
    let column = tree.children(root)[1];

    let freed = tree.remove(column).unwrap();

    assert_eq!(freed.len(), 3);
    assert_eq!(freed[0], column);
    assert_eq!(tree.children(root).len(), 1);
    assert_eq!(kinds(&tree), vec![PaneKind::Editor]);
    assert!(!tree.contains(column));
    assert_eq!(tree.remove(column), Err(LayoutError::UnknownNode(column.index())));
}

#[test]
fn remove_top_level_item() {
    let mut tree = LayoutTree::from_config(&[editor()]);
    let pane = tree.first_top_level().unwrap();
    tree.remove(pane).unwrap();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
}

#[test]
fn push_top_level_requires_detached_node() {
    let mut tree = LayoutTree::new();
    let pane = tree.create_content_item(&editor());
    tree.push_top_level(pane).unwrap();
    assert_eq!(
        tree.push_top_level(pane),
        Err(LayoutError::AlreadyAttached(pane.index()))
    );
}

#[test]
fn set_closable_only_applies_to_panes() {
    let mut tree = LayoutTree::from_config(&[ItemConfig::row(vec![ItemConfig::Component {
        kind: PaneKind::Editor,
        state: json!({}),
        closable: false,
        title: None,
    }])]);
    let root = tree.first_top_level().unwrap();
    let pane = tree.children(root)[0];

    assert!(!tree.slot(pane).unwrap().closable);
    assert!(tree.set_closable(pane, true));
    assert!(tree.slot(pane).unwrap().closable);
    assert!(!tree.set_closable(root, true));
}

#[test]
fn collapse_promotes_only_child_to_top_level() {
    let mut tree = LayoutTree::from_config(&[editor()]);
    let pane = tree.first_top_level().unwrap();
    let new = tree.add_at_root(&compiler());
    let row = tree.parent(new).unwrap();

    tree.remove(new).unwrap();
    assert_eq!(tree.collapse(row), Some(pane));

    assert_eq!(tree.top_level(), &[pane]);
    assert_eq!(tree.parent(pane), None);
    assert!(!tree.contains(row));
    assert_eq!(tree.to_config(), vec![editor()]);
}

#[test]
fn collapse_nested_container_keeps_position() {
    let mut tree = LayoutTree::from_config(&[ItemConfig::row(vec![
        editor(),
        ItemConfig::column(vec![compiler()]),
        diff(),
    ])]);
    let root = tree.first_top_level().unwrap();
    let column = tree.children(root)[1];
    let inner = tree.children(column)[0];

    assert_eq!(tree.collapse(column), Some(inner));
    assert_eq!(tree.children(root)[1], inner);
    assert_eq!(tree.parent(inner), Some(root));
    assert_eq!(kinds(&tree), vec![PaneKind::Editor, PaneKind::Compiler, PaneKind::Diff]);
}

#[test]
fn collapse_needs_exactly_one_child() {
    let mut tree = LayoutTree::from_config(&[ItemConfig::row(vec![editor(), compiler()])]);
    let root = tree.first_top_level().unwrap();
    let pane = tree.children(root)[0];

    assert_eq!(tree.collapse(root), None);
    assert_eq!(tree.collapse(pane), None);
    assert_eq!(tree.children(root).len(), 2);
}

#[test]
fn removed_node_ids_are_not_reused() {
    let mut tree = LayoutTree::from_config(&[editor()]);
    let old = tree.first_top_level().unwrap();
    tree.remove(old).unwrap();

    let new = tree.add_at_root(&diff());
    assert_ne!(new, old);
    assert!(!tree.contains(old));
    assert!(!tree.is_attached(old));
}

// -- config --

#[test]
fn config_round_trips_through_tree() {
    let items = vec![ItemConfig::row(vec![
        editor(),
        ItemConfig::column(vec![compiler(), diff()]),
    ])];
    let tree = LayoutTree::from_config(&items);
    assert_eq!(tree.to_config(), items);
}

#[test]
fn config_json_shape() {
    let json = r#"[
        {"type": "row", "content": [
            {"type": "component", "kind": "editor", "state": {"id": 1}, "closable": false},
            {"type": "component", "kind": "gcc_dump"}
        ]}
    ]"#;
    let items: Vec<ItemConfig> = serde_json::from_str(json).unwrap();
    let tree = LayoutTree::from_config(&items);
    let panes = tree.panes();

    let first = tree.slot(panes[0]).unwrap();
    assert_eq!(first.kind, PaneKind::Editor);
    assert_eq!(first.state, json!({ "id": 1 }));
    assert!(!first.closable);

    let second = tree.slot(panes[1]).unwrap();
    assert_eq!(second.kind, PaneKind::GccDump);
    assert!(second.closable);
    assert_eq!(second.state, serde_json::Value::Null);
}

#[test]
fn detached_items_are_not_in_snapshot() {
    let mut tree = LayoutTree::from_config(&[editor()]);
    tree.create_content_item(&diff());
    assert_eq!(tree.to_config(), vec![editor()]);
    assert_eq!(tree.len(), 2);
}
