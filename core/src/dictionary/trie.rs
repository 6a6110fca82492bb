//! dictionary/trie.rs
//! Encoder prefix trie stored as an arena of nodes addressed by index.
//!
//! The root (index 0) is the empty word. Every other node is reachable from
//! exactly one parent slot. Resetting truncates the arena back to the root, so
//! a whole subtree is released in one step with no recursive walk.

use crate::constants::{Code, Symbol, ALPHABET, EMPTY_CODE};

/// Index of a node inside its trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

type Children = [Option<NodeId>; ALPHABET];

#[derive(Debug, Clone)]
pub struct TrieNode {
    code: Code,
    // 256 child slots, allocated on the first insert so leaves stay small
    children: Option<Box<Children>>,
}

impl TrieNode {
    fn new(code: Code) -> Self {
        Self { code, children: None }
    }

    pub fn code(&self) -> Code {
        self.code
    }

    fn child(&self, sym: Symbol) -> Option<NodeId> {
        self.children.as_ref().and_then(|c| c[sym as usize])
    }

    fn set_child(&mut self, sym: Symbol, id: NodeId) {
        let slots = self.children.get_or_insert_with(|| Box::new([None; ALPHABET]));
        slots[sym as usize] = Some(id);
    }

    pub fn is_leaf(&self) -> bool {
        self.children
            .as_ref()
            .map_or(true, |c| c.iter().all(Option::is_none))
    }
}

#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// A trie holding only the root, coded `EMPTY_CODE`.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(TrieNode::new(EMPTY_CODE));
        Self { nodes }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Child of `node` along `sym`, if that extension is known.
    #[inline]
    pub fn step(&self, node: NodeId, sym: Symbol) -> Option<NodeId> {
        self.nodes[node.index()].child(sym)
    }

    /// Code of the word ending at `node`.
    #[inline]
    pub fn code(&self, node: NodeId) -> Code {
        self.nodes[node.index()].code
    }

    /// Add the child `node + sym`, coded `code`. The slot must be empty.
    pub fn insert(&mut self, node: NodeId, sym: Symbol, code: Code) -> NodeId {
        debug_assert!(self.step(node, sym).is_none(), "slot already occupied");
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(TrieNode::new(code));
        self.nodes[node.index()].set_child(sym, id);
        id
    }

    /// Drop every node except the root.
    pub fn reset(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0].children = None;
    }

    /// Nodes including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when only the root is left.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    /// Follow `word` from the root; `None` if some prefix is unknown.
    pub fn lookup(&self, word: &[Symbol]) -> Option<Code> {
        let mut node = self.root();
        for &sym in word {
            node = self.step(node, sym)?;
        }
        Some(self.code(node))
    }
}
