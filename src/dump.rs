//! Graphviz rendering of a tree's node graph.
//!
//! The output is a `digraph` in the dot language. Every key becomes a record node; real child
//! edges are solid (blue to the left, gold to the right), threads are dotted, parent links are
//! grey, and the sentinel is drawn once as the yellow `end` node anchoring the root. The walk goes
//! from the leftmost node by successor and never restructures the tree.

use core::fmt::{self, Display, Write};

use crate::raw::{Handle, Link, RawTree};

const END: &str = "end";

pub(crate) fn write_dot<K: Display, A, W: Write>(tree: &RawTree<K, A>, out: &mut W) -> fmt::Result {
    out.write_str("digraph Tree\n{\n    rankdir = TB;\n    node [shape = record];\n\n")?;
    writeln!(
        out,
        "    {END} [color = black, style = filled, fillcolor = yellow, label = \"end node\"];"
    )?;

    let mut current = tree.control().leftmost();
    while let Some(handle) = current {
        write!(
            out,
            "    {} [color = black, style = filled, fillcolor = red, fontcolor = black, label = \"",
            Id(Some(handle))
        )?;
        write!(Escaped(&mut *out), "{}", tree.key(handle))?;
        out.write_str("\"];\n")?;
        current = tree.successor(handle);
    }
    out.write_char('\n')?;

    let mut current = tree.control().leftmost();
    while let Some(handle) = current {
        let node = tree.node(handle);
        write_link(out, handle, node.left(), "blue")?;
        write_link(out, handle, node.right(), "gold")?;
        writeln!(out, "    {} -> {} [color = \"dimgray\"];", Id(Some(handle)), Id(node.parent()))?;
        current = tree.successor(handle);
    }

    if let Some(root) = tree.control().root() {
        writeln!(out, "    {END} -> {} [color = \"blue\"];", Id(Some(root)))?;
    }
    out.write_str("}\n")
}

fn write_link<W: Write>(out: &mut W, from: Handle, link: Link, color: &str) -> fmt::Result {
    match link {
        Link::Child(child) => writeln!(out, "    {} -> {} [color = \"{color}\"];", Id(Some(from)), Id(Some(child))),
        Link::Thread(target) => writeln!(
            out,
            "    {} -> {} [color = \"{color}\", style = dotted];",
            Id(Some(from)),
            Id(target)
        ),
    }
}

// Dot identifier of a node, `None` being the sentinel.
struct Id(Option<Handle>);

impl Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(handle) => write!(f, "node_{}", handle.to_index()),
            None => f.write_str(END),
        }
    }
}

// Escapes the characters that would end a quoted dot label.
struct Escaped<'a, W>(&'a mut W);

impl<W: Write> Write for Escaped<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if matches!(c, '"' | '\\') {
                self.0.write_char('\\')?;
            }
            self.0.write_char(c)?;
        }
        Ok(())
    }
}
