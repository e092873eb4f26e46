use super::NodeRef;
use std::collections::VecDeque;

/// ## In-order walk
///
/// Yields nodes in ascending name order. The descent is kept on an
/// explicit stack, so tree depth never reaches the call stack.

pub struct InOrder<'a> {
    stack: Vec<NodeRef<'a>>,
    cursor: Option<NodeRef<'a>>,
}

impl<'a> InOrder<'a> {
    pub fn new(root: Option<NodeRef<'a>>) -> InOrder<'a> {
        InOrder {
            stack: vec![],
            cursor: root,
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<NodeRef<'a>> {
        while let Some(node) = self.cursor {
            self.stack.push(node);
            self.cursor = node.left();
        }
        let node = self.stack.pop()?;
        self.cursor = node.right();
        Some(node)
    }
}

/// ## Level-order walk
///
/// Yields the root, then every node one level down, and so on, left
/// child before right. Replaying nodes in this order into an empty
/// table rebuilds the same shape because every parent precedes its
/// children.

pub struct LevelOrder<'a> {
    queue: VecDeque<NodeRef<'a>>,
}

impl<'a> LevelOrder<'a> {
    pub fn new(root: Option<NodeRef<'a>>) -> LevelOrder<'a> {
        LevelOrder {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for LevelOrder<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<NodeRef<'a>> {
        let node = self.queue.pop_front()?;
        if let Some(left) = node.left() {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right() {
            self.queue.push_back(right);
        }
        Some(node)
    }
}
