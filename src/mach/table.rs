use super::{InOrder, LevelOrder};
use std::cmp::Ordering;
use std::io::{self, Write};

type NodeId = usize;

#[derive(Debug)]
struct Node {
    name: Vec<u8>,
    value: i32,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

#[derive(Debug)]
enum Slot {
    Occupied(Node),
    Vacant,
}

/// The place a subtree hangs from.
#[derive(Debug, Clone, Copy)]
enum Link {
    Root,
    Left(NodeId),
    Right(NodeId),
}

/// ## Symbol table
///
/// An unbalanced binary search tree from names to values, ordered by
/// byte-wise comparison of names. A name is any non-empty run of bytes;
/// it needn't be UTF-8. Nodes live in an arena and refer to
/// their children by index; vacated slots are reused.
///
/// No operation recurses, so a tree that degenerated into a list
/// (names stored in sorted order) is as safe to walk, edit and drop as
/// a bushy one. It is only slower.

#[derive(Debug, Default)]
pub struct SymbolTable {
    slots: Vec<Slot>,
    free: Vec<NodeId>,
    root: Option<NodeId>,
    len: usize,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.root.map(|id| NodeRef { table: self, id })
    }

    /// Bindings in ascending name order.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self.root())
    }

    /// Bindings a depth at a time, root first.
    pub fn level_order(&self) -> LevelOrder<'_> {
        LevelOrder::new(self.root())
    }

    pub fn get<N: AsRef<[u8]>>(&self, name: N) -> Option<i32> {
        let name = name.as_ref();
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.node(id);
            match name.cmp(node.name.as_slice()) {
                Ordering::Equal => return Some(node.value),
                Ordering::Less => cursor = node.left,
                Ordering::Greater => cursor = node.right,
            }
        }
        None
    }

    /// Binds `name`, returning the value it replaced. An existing node
    /// is updated where it stands; a new one becomes a leaf.
    pub fn insert<N: AsRef<[u8]>>(&mut self, name: N, value: i32) -> Option<i32> {
        let name = name.as_ref();
        let mut link = Link::Root;
        while let Some(id) = self.follow(link) {
            let node = self.node_mut(id);
            match name.cmp(node.name.as_slice()) {
                Ordering::Equal => return Some(std::mem::replace(&mut node.value, value)),
                Ordering::Less => link = Link::Left(id),
                Ordering::Greater => link = Link::Right(id),
            }
        }
        let id = self.alloc(Node {
            name: name.to_vec(),
            value,
            left: None,
            right: None,
        });
        *self.link_mut(link) = Some(id);
        None
    }

    /// Unbinds `name`, returning its value if it was bound. The two
    /// subtrees of the removed node are merged into its place.
    pub fn remove<N: AsRef<[u8]>>(&mut self, name: N) -> Option<i32> {
        let name = name.as_ref();
        let mut link = Link::Root;
        while let Some(id) = self.follow(link) {
            let node = self.node(id);
            match name.cmp(node.name.as_slice()) {
                Ordering::Equal => {
                    let (left, right) = (node.left, node.right);
                    let merged = self.merge(left, right);
                    *self.link_mut(link) = merged;
                    return Some(self.release(id).value);
                }
                Ordering::Less => link = Link::Left(id),
                Ordering::Greater => link = Link::Right(id),
            }
        }
        None
    }

    /// Releases every node, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let mut released = 0;
        while let Some(id) = self.root {
            let node = self.node(id);
            let (left, right) = (node.left, node.right);
            self.root = self.merge(left, right);
            self.release(id);
            released += 1;
        }
        debug_assert_eq!(self.len, 0);
        self.slots.clear();
        self.free.clear();
        released
    }

    /// Combines two sibling subtrees into one. Every name under `right`
    /// is greater than every name under `left`, so `right` can hang,
    /// children and all, from the slot its root would be inserted at.
    fn merge(&mut self, left: Option<NodeId>, right: Option<NodeId>) -> Option<NodeId> {
        let (left, right) = match (left, right) {
            (None, right) => return right,
            (left, None) => return left,
            (Some(left), Some(right)) => (left, right),
        };
        let mut parent = left;
        loop {
            let link = match self.node(right).name.cmp(&self.node(parent).name) {
                Ordering::Less => Link::Left(parent),
                Ordering::Greater => Link::Right(parent),
                Ordering::Equal => unreachable!("merging subtrees that share a name"),
            };
            match self.follow(link) {
                Some(next) => parent = next,
                None => {
                    *self.link_mut(link) = Some(right);
                    return Some(left);
                }
            }
        }
    }

    fn follow(&self, link: Link) -> Option<NodeId> {
        match link {
            Link::Root => self.root,
            Link::Left(id) => self.node(id).left,
            Link::Right(id) => self.node(id).right,
        }
    }

    fn link_mut(&mut self, link: Link) -> &mut Option<NodeId> {
        match link {
            Link::Root => &mut self.root,
            Link::Left(id) => &mut self.node_mut(id).left,
            Link::Right(id) => &mut self.node_mut(id).right,
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        match &self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant => unreachable!("link to vacant slot {}", id),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match &mut self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant => unreachable!("link to vacant slot {}", id),
        }
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Slot::Occupied(node);
                id
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node {
        self.len -= 1;
        self.free.push(id);
        match std::mem::replace(&mut self.slots[id], Slot::Vacant) {
            Slot::Occupied(node) => node,
            Slot::Vacant => unreachable!("double release of slot {}", id),
        }
    }
}

/// Read-only handle to one node of a `SymbolTable`.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    table: &'a SymbolTable,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn name(&self) -> &'a [u8] {
        let table: &'a SymbolTable = self.table;
        &table.node(self.id).name
    }

    pub fn value(&self) -> i32 {
        self.table.node(self.id).value
    }

    pub fn left(&self) -> Option<NodeRef<'a>> {
        self.child(self.table.node(self.id).left)
    }

    pub fn right(&self) -> Option<NodeRef<'a>> {
        self.child(self.table.node(self.id).right)
    }

    fn child(&self, id: Option<NodeId>) -> Option<NodeRef<'a>> {
        let table = self.table;
        id.map(|id| NodeRef { table, id })
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", String::from_utf8_lossy(self.name()), self.value())
    }
}

impl std::fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "VARIABLE: {}, VALUE: {}",
            String::from_utf8_lossy(self.name()),
            self.value()
        )
    }
}

impl NodeRef<'_> {
    /// Writes the `list` line for this binding, name bytes untouched.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(b"VARIABLE: ")?;
        w.write_all(self.name())?;
        writeln!(w, ", VALUE: {}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(table: &SymbolTable) -> Vec<String> {
        table
            .iter()
            .map(|n| String::from_utf8_lossy(n.name()).into_owned())
            .collect()
    }

    #[test]
    fn test_insert_and_get() {
        let mut t = SymbolTable::new();
        assert_eq!(t.insert("m", 1), None);
        assert_eq!(t.insert("c", 2), None);
        assert_eq!(t.insert("x", 3), None);
        assert_eq!(t.get("c"), Some(2));
        assert_eq!(t.get("nope"), None);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_update_keeps_children() {
        let mut t = SymbolTable::new();
        t.insert("m", 1);
        t.insert("c", 2);
        t.insert("x", 3);
        assert_eq!(t.insert("m", 10), Some(1));
        let root = t.root().unwrap();
        assert_eq!(root.name(), b"m");
        assert_eq!(root.value(), 10);
        assert_eq!(root.left().unwrap().name(), b"c");
        assert_eq!(root.right().unwrap().name(), b"x");
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_remove_root() {
        let mut t = SymbolTable::new();
        for name in &["m", "c", "x", "a", "e", "z"] {
            t.insert(name, 0);
        }
        assert_eq!(t.remove("m"), Some(0));
        assert_eq!(t.root().unwrap().name(), b"c");
        assert_eq!(names(&t), ["a", "c", "e", "x", "z"]);
        // right subtree hangs off the greatest name on the left
        let e = t.root().unwrap().right().unwrap();
        assert_eq!(e.name(), b"e");
        assert_eq!(e.right().unwrap().name(), b"x");
    }

    #[test]
    fn test_remove_missing() {
        let mut t = SymbolTable::new();
        t.insert("a", 1);
        assert_eq!(t.remove("b"), None);
        assert_eq!(t.len(), 1);
        assert_eq!(t.remove("a"), Some(1));
        assert!(t.is_empty());
        assert_eq!(t.remove("a"), None);
    }

    #[test]
    fn test_slots_are_reused() {
        let mut t = SymbolTable::new();
        t.insert("a", 1);
        t.insert("b", 2);
        t.remove("a");
        t.insert("c", 3);
        assert_eq!(t.slots.len(), 2);
        assert_eq!(names(&t), ["b", "c"]);
    }

    #[test]
    fn test_byte_order() {
        let mut t = SymbolTable::new();
        for name in &["b", "B", "a", "_", "10", "9"] {
            t.insert(name, 0);
        }
        assert_eq!(names(&t), ["10", "9", "B", "_", "a", "b"]);
    }

    #[test]
    fn test_names_outside_utf8() {
        let mut t = SymbolTable::new();
        t.insert(&b"caf\xe9"[..], 1);
        t.insert("cafe", 2);
        t.insert(&b"\xff"[..], 3);
        assert_eq!(t.get(&b"caf\xe9"[..]), Some(1));
        let order: Vec<&[u8]> = t.iter().map(|n| n.name()).collect();
        assert_eq!(order, [&b"cafe"[..], &b"caf\xe9"[..], &b"\xff"[..]]);
        let mut line = vec![];
        t.root().unwrap().write_to(&mut line).unwrap();
        assert_eq!(line, b"VARIABLE: caf\xe9, VALUE: 1\n");
    }

    #[test]
    fn test_clear_degenerate_tree() {
        let mut t = SymbolTable::new();
        for n in 0..10_000 {
            t.insert(&format!("{:06}", n), n);
        }
        assert_eq!(t.iter().count(), 10_000);
        assert_eq!(t.level_order().count(), 10_000);
        assert_eq!(t.clear(), 10_000);
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
    }
}
