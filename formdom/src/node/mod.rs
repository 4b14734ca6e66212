mod content;
mod extensions;
#[allow(clippy::module_inception)]
mod node;

pub use content::Content;
pub use extensions::Extensions;
pub use node::Node;

/// Find a node by ID in the tree.
pub fn find_node<'a>(root: &'a Node, id: &str) -> Option<&'a Node> {
    if root.id == id {
        return Some(root);
    }

    root.child_nodes()
        .iter()
        .find_map(|child| find_node(child, id))
}

/// Find a node by ID in the tree, mutably.
pub fn find_node_mut<'a>(root: &'a mut Node, id: &str) -> Option<&'a mut Node> {
    if root.id == id {
        return Some(root);
    }

    root.child_nodes_mut()
        .iter_mut()
        .find_map(|child| find_node_mut(child, id))
}

/// Find the first node (pre-order) declaring the given field name.
pub fn find_named<'a>(root: &'a Node, name: &str) -> Option<&'a Node> {
    if root.field_name() == Some(name) {
        return Some(root);
    }

    root.child_nodes()
        .iter()
        .find_map(|child| find_named(child, name))
}

pub fn find_named_mut<'a>(root: &'a mut Node, name: &str) -> Option<&'a mut Node> {
    if root.field_name() == Some(name) {
        return Some(root);
    }

    root.child_nodes_mut()
        .iter_mut()
        .find_map(|child| find_named_mut(child, name))
}

/// Find the last node (pre-order) declaring the given field name.
///
/// When several nodes share a name, later declarations shadow earlier ones.
pub fn find_last_named<'a>(root: &'a Node, name: &str) -> Option<&'a Node> {
    root.child_nodes()
        .iter()
        .rev()
        .find_map(|child| find_last_named(child, name))
        .or_else(|| (root.field_name() == Some(name)).then_some(root))
}

pub fn find_last_named_mut<'a>(root: &'a mut Node, name: &str) -> Option<&'a mut Node> {
    if !root.child_nodes().iter().any(|child| contains_named(child, name)) {
        return (root.field_name() == Some(name)).then_some(root);
    }

    root.child_nodes_mut()
        .iter_mut()
        .rev()
        .find_map(|child| find_last_named_mut(child, name))
}

fn contains_named(root: &Node, name: &str) -> bool {
    find_last_named(root, name).is_some()
}

/// Visit every node depth-first, parents before children.
pub fn walk<'a>(root: &'a Node, visit: &mut impl FnMut(&'a Node)) {
    visit(root);
    for child in root.child_nodes() {
        walk(child, visit);
    }
}

/// Collect all nodes that declare a field name, in tree order.
pub fn collect_named(root: &Node) -> Vec<&Node> {
    let mut named = Vec::new();
    walk(root, &mut |node| {
        if node.field_name().is_some() {
            named.push(node);
        }
    });
    named
}
