use pagekit_model::ComponentInstance;

/// What the walker should do after visiting a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Descend into the node's children
    Continue,
    /// Do not descend into this node's children
    SkipChildren,
    /// End the walk immediately
    Stop,
}

/// Visitor pattern for traversing instance trees immutably
///
/// Override `visit_instance` to act on each node. Nodes are handed out in
/// pre-order: a node before its children, children in order.
pub trait Visitor<'a> {
    fn visit_instance(&mut self, instance: &'a ComponentInstance) -> Walk;
}

/// Walk `root` and its descendants in pre-order.
///
/// Uses an explicit stack, so depth is bounded by memory rather than by
/// the call stack.
pub fn walk_instance<'a, V: Visitor<'a>>(visitor: &mut V, root: &'a ComponentInstance) {
    let mut stack: Vec<&'a ComponentInstance> = vec![root];

    while let Some(instance) = stack.pop() {
        match visitor.visit_instance(instance) {
            Walk::Continue => {
                // Reversed so the first child is popped next
                stack.extend(instance.children.iter().rev());
            }
            Walk::SkipChildren => {}
            Walk::Stop => return,
        }
    }
}

impl<'a, F> Visitor<'a> for F
where
    F: FnMut(&'a ComponentInstance) -> Walk,
{
    fn visit_instance(&mut self, instance: &'a ComponentInstance) -> Walk {
        self(instance)
    }
}

/// Find the node with `id` in the subtree rooted at `root`
pub fn find_instance<'a>(root: &'a ComponentInstance, id: &str) -> Option<&'a ComponentInstance> {
    let mut found = None;

    walk_instance(
        &mut |instance: &'a ComponentInstance| {
            if instance.id == id {
                found = Some(instance);
                Walk::Stop
            } else {
                Walk::Continue
            }
        },
        root,
    );

    found
}

/// Ids of every node in the subtree, in pre-order
pub fn instance_ids<'a>(root: &'a ComponentInstance) -> Vec<&'a str> {
    let mut ids = Vec::new();

    walk_instance(
        &mut |instance: &'a ComponentInstance| {
            ids.push(instance.id.as_str());
            Walk::Continue
        },
        root,
    );

    ids
}
