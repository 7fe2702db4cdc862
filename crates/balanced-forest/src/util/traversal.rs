//! Lazy depth-first and breadth-first traversals.
//!
//! Each traversal is a pull-based iterator over node indices with an explicit
//! stack (or queue), so tree height never turns into call-stack depth.
//! Calling the constructor again restarts the walk.

use std::collections::VecDeque;

use crate::types::Node;

use super::{get_l, get_r};

/// Left subtree, node, right subtree. Ascending key order in a search tree.
pub fn inorder<N: Node>(arena: &[N], root: Option<u32>) -> InOrder<'_, N> {
    InOrder {
        arena,
        stack: Vec::new(),
        curr: root,
    }
}

/// Node, left subtree, right subtree.
pub fn preorder<N: Node>(arena: &[N], root: Option<u32>) -> PreOrder<'_, N> {
    PreOrder {
        arena,
        stack: root.into_iter().collect(),
    }
}

/// Left subtree, right subtree, node.
pub fn postorder<N: Node>(arena: &[N], root: Option<u32>) -> PostOrder<'_, N> {
    PostOrder {
        arena,
        stack: root.map(|r| (r, false)).into_iter().collect(),
    }
}

/// Breadth-first, one layer at a time.
pub fn level_order<N: Node>(arena: &[N], root: Option<u32>) -> LevelOrder<'_, N> {
    let mut visited = vec![false; arena.len()];
    let mut queue = VecDeque::new();
    if let Some(r) = root {
        visited[r as usize] = true;
        queue.push_back(r);
    }
    LevelOrder {
        arena,
        queue,
        visited,
    }
}

pub struct InOrder<'a, N> {
    arena: &'a [N],
    stack: Vec<u32>,
    curr: Option<u32>,
}

impl<N: Node> Iterator for InOrder<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while let Some(c) = self.curr {
            self.stack.push(c);
            self.curr = get_l(self.arena, c);
        }
        let node = self.stack.pop()?;
        self.curr = get_r(self.arena, node);
        Some(node)
    }
}

pub struct PreOrder<'a, N> {
    arena: &'a [N],
    stack: Vec<u32>,
}

impl<N: Node> Iterator for PreOrder<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let node = self.stack.pop()?;
        if let Some(r) = get_r(self.arena, node) {
            self.stack.push(r);
        }
        if let Some(l) = get_l(self.arena, node) {
            self.stack.push(l);
        }
        Some(node)
    }
}

pub struct PostOrder<'a, N> {
    arena: &'a [N],
    // (node, children already scheduled)
    stack: Vec<(u32, bool)>,
}

impl<N: Node> Iterator for PostOrder<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(node);
            }
            self.stack.push((node, true));
            if let Some(r) = get_r(self.arena, node) {
                self.stack.push((r, false));
            }
            if let Some(l) = get_l(self.arena, node) {
                self.stack.push((l, false));
            }
        }
        None
    }
}

pub struct LevelOrder<'a, N> {
    arena: &'a [N],
    queue: VecDeque<u32>,
    visited: Vec<bool>,
}

impl<N: Node> LevelOrder<'_, N> {
    fn enqueue(&mut self, child: Option<u32>) {
        if let Some(c) = child {
            if !self.visited[c as usize] {
                self.visited[c as usize] = true;
                self.queue.push_back(c);
            }
        }
    }
}

impl<N: Node> Iterator for LevelOrder<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let node = self.queue.pop_front()?;
        self.enqueue(get_l(self.arena, node));
        self.enqueue(get_r(self.arena, node));
        Some(node)
    }
}
