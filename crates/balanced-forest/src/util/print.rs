use std::fmt::Debug;

use crate::types::DataNode;

/// Renders child branches under a parent line, in the `├─` / `└─` layout of
/// sonic-forest's `printTree`.
///
/// Each child is a closure that receives the indentation for its own
/// children. `None` entries are skipped; an empty rendering draws a bare `│`.
pub fn print_tree(tab: &str, children: &[Option<&dyn Fn(&str) -> String>]) -> String {
    let mut out = String::new();
    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child) in children.iter().enumerate().take(last + 1) {
        let Some(child) = child else {
            continue;
        };
        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let rendered = child(&child_tab);
        let branch = if rendered.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !rendered.is_empty() {
            out.push(' ');
            out.push_str(&rendered);
        }
    }

    out
}

/// Debug printer for any node variant.
///
/// Prints `Node[idx] key` plus the variant tag (height, color, size), then
/// the left and right subtrees. Missing children print as `∅`.
pub fn print<K, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    N: DataNode<K>,
{
    let Some(i) = node else {
        return "∅".to_string();
    };
    let n = &arena[i as usize];
    let head = match n.tag() {
        Some(tag) => format!("Node[{i}] {:?} [{tag}]", n.data()),
        None => format!("Node[{i}] {:?}", n.data()),
    };
    if n.l().is_none() && n.r().is_none() {
        return head;
    }
    let (l, r) = (n.l(), n.r());
    let left: &dyn Fn(&str) -> String = &|tab: &str| print::<K, N>(arena, l, tab);
    let right: &dyn Fn(&str) -> String = &|tab: &str| print::<K, N>(arena, r, tab);
    head + &print_tree(tab, &[Some(left), Some(right)])
}
