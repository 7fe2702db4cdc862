use tracing::trace;

use crate::balancing::{rotate_left, rotate_right};
use crate::error::ValidationError;
use crate::types::Node;
use crate::util::{assert_links, get_l, get_p, get_r};

use super::types::{Color, ColorNode};

#[inline]
fn is_red<N: ColorNode>(arena: &[N], node: Option<u32>) -> bool {
    node.is_some_and(|i| arena[i as usize].color() == Color::Red)
}

#[inline]
fn set_color<N: ColorNode>(arena: &mut [N], node: u32, c: Color) {
    arena[node as usize].set_color(c);
}

pub fn grandparent<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    get_p(arena, get_p(arena, node)?)
}

/// The other child of `node`'s parent.
pub fn sibling<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    let p = get_p(arena, node)?;
    if get_l(arena, p) == Some(node) {
        get_r(arena, p)
    } else {
        get_l(arena, p)
    }
}

pub fn uncle<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    sibling(arena, get_p(arena, node)?)
}

#[inline]
fn child<N: Node>(arena: &[N], node: u32, left: bool) -> Option<u32> {
    if left {
        get_l(arena, node)
    } else {
        get_r(arena, node)
    }
}

/// Rotates `node` so that its `left`-side subtree gets deeper.
#[inline]
fn rotate_toward<N: ColorNode>(arena: &mut [N], node: u32, left: bool) {
    if left {
        rotate_left(arena, node);
    } else {
        rotate_right(arena, node);
    }
}

/// Restores the red-black invariants after the red node `node` was attached.
///
/// Rotations swap payloads in place, so after the inner-child rotation
/// `node` already names the lower of the two red nodes and needs no
/// re-targeting. The root slot never moves. O(log n) recolorings, at most two
/// rotations.
pub fn insert_fix<N: ColorNode>(arena: &mut [N], root: u32, mut node: u32) {
    while let Some(p) = get_p(arena, node) {
        if !is_red(arena, Some(p)) {
            break;
        }
        let g = get_p(arena, p).expect("red parent is never the root");
        let parent_is_left = get_l(arena, g) == Some(p);
        let u = child(arena, g, !parent_is_left);

        if is_red(arena, u) {
            trace!(node, parent = p, grandparent = g, "insert fix: red uncle, recolor");
            set_color(arena, p, Color::Black);
            if let Some(u) = u {
                set_color(arena, u, Color::Black);
            }
            set_color(arena, g, Color::Red);
            node = g;
            continue;
        }

        if child(arena, p, !parent_is_left) == Some(node) {
            trace!(node, parent = p, "insert fix: inner child, straighten");
            rotate_toward(arena, p, parent_is_left);
        }
        trace!(node, grandparent = g, "insert fix: black uncle, rotate grandparent");
        set_color(arena, p, Color::Black);
        set_color(arena, g, Color::Red);
        rotate_toward(arena, g, !parent_is_left);
    }
    set_color(arena, root, Color::Black);
}

/// Resolves the black-height deficit left by removing the leaf `node`.
///
/// Must run while `node` is still attached: it plays the double-black
/// position during the fix-up and is unlinked by the caller afterwards.
///
/// # Panics
///
/// Panics if a double-black node has no sibling, which only happens when the
/// black-height invariant was already broken.
pub fn delete_fix<N: ColorNode>(arena: &mut [N], root: u32, mut node: u32) {
    while node != root && !is_red(arena, Some(node)) {
        let mut p = get_p(arena, node).expect("non-root node has a parent");
        let left = get_l(arena, p) == Some(node);
        let mut s = child(arena, p, !left).expect("double-black node has a sibling");

        if is_red(arena, Some(s)) {
            trace!(node, sibling = s, "delete fix: red sibling, rotate parent");
            set_color(arena, s, Color::Black);
            set_color(arena, p, Color::Red);
            rotate_toward(arena, p, left);
            p = get_p(arena, node).expect("node keeps a parent after rotation");
            s = child(arena, p, !left).expect("double-black node has a sibling");
        }

        let near = child(arena, s, left);
        let far = child(arena, s, !left);
        if !is_red(arena, near) && !is_red(arena, far) {
            trace!(node, sibling = s, "delete fix: black nephews, push deficit up");
            set_color(arena, s, Color::Red);
            node = p;
            continue;
        }

        if !is_red(arena, far) {
            trace!(node, sibling = s, "delete fix: near nephew red, rotate sibling");
            if let Some(n) = near {
                set_color(arena, n, Color::Black);
            }
            set_color(arena, s, Color::Red);
            rotate_toward(arena, s, !left);
            s = child(arena, p, !left).expect("double-black node has a sibling");
        }

        trace!(node, sibling = s, "delete fix: far nephew red, rotate parent");
        let parent_color = arena[p as usize].color();
        set_color(arena, s, parent_color);
        set_color(arena, p, Color::Black);
        if let Some(f) = child(arena, s, !left) {
            set_color(arena, f, Color::Black);
        }
        rotate_toward(arena, p, left);
        node = root;
    }
    set_color(arena, node, Color::Black);
}

/// Checks links and the red-black coloring rules under `root`.
///
/// Key order is not checked here; see [`crate::search::assert_order`].
pub fn assert_red_black_tree<N: ColorNode>(
    arena: &[N],
    root: Option<u32>,
) -> Result<(), ValidationError> {
    let Some(root) = root else {
        return Ok(());
    };
    assert_links(arena, Some(root))?;
    if is_red(arena, Some(root)) {
        return Err(ValidationError::RedRoot);
    }

    fn black_height<N: ColorNode>(
        arena: &[N],
        node: Option<u32>,
    ) -> Result<usize, ValidationError> {
        let Some(node) = node else {
            return Ok(0);
        };
        let l = get_l(arena, node);
        let r = get_r(arena, node);
        let red = is_red(arena, Some(node));
        if red && (is_red(arena, l) || is_red(arena, r)) {
            return Err(ValidationError::RedRed(node));
        }
        let lh = black_height(arena, l)?;
        let rh = black_height(arena, r)?;
        if lh != rh {
            return Err(ValidationError::BlackHeightMismatch(node));
        }
        Ok(lh + usize::from(!red))
    }

    black_height(arena, Some(root)).map(|_| ())
}
