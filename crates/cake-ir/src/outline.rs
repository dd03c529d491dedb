//! Compact text outline of a scene document.
//!
//! One line per node, indented two spaces per depth level, children in
//! insertion order. Intended for terminals and snapshot-style assertions.
//!
//! # Format
//!
//! ```text
//! # cake 0.1
//! G @x,y,z ["name"]                         # Group
//! Y rt rb h [open] color @x,y,z ["name"]     # Cylinder
//! S r color @x,y,z ["name"]                 # Sphere
//! K r h color @x,y,z ["name"]               # Cone
//! O r tube arc color @x,y,z ["name"]        # Torus
//! B w h d color @x,y,z ["name"]             # Box
//! ```
//!
//! Emissive materials append `*color` after the base color.

use crate::{Document, Geometry, MaterialDef, Node, NodeId, NodeKind, Vec3};
use std::fmt::Write as FmtWrite;

/// Render every root of `doc` (and its subtree) as an outline.
///
/// Nodes referenced as children but missing from the document are reported
/// inline as `? id` rather than aborting the dump.
pub fn to_outline(doc: &Document) -> String {
    let mut output = String::new();
    writeln!(output, "# cake {}", doc.version).unwrap();
    for &root in &doc.roots {
        write_node(&mut output, doc, root, 0);
    }
    output
}

fn write_node(output: &mut String, doc: &Document, id: NodeId, depth: usize) {
    let indent = "  ".repeat(depth);
    let Some(node) = doc.nodes.get(&id) else {
        writeln!(output, "{indent}? {id}").unwrap();
        return;
    };
    writeln!(output, "{indent}{}", format_node(node)).unwrap();
    for &child in &node.children {
        write_node(output, doc, child, depth + 1);
    }
}

fn format_node(node: &Node) -> String {
    let position = format_vec(&node.transform.position);
    let name_suffix = node
        .name
        .as_deref()
        .map(|n| format!(" {}", format_quoted_string(n)))
        .unwrap_or_default();

    match &node.kind {
        NodeKind::Group => format!("G @{position}{name_suffix}"),
        NodeKind::Mesh { geometry, material } => format!(
            "{} {} @{}{}",
            format_geometry(geometry),
            format_material(material),
            position,
            name_suffix
        ),
    }
}

fn format_geometry(geometry: &Geometry) -> String {
    match geometry {
        Geometry::Cylinder {
            radius_top,
            radius_bottom,
            height,
            open_ended,
            ..
        } => {
            let open = if *open_ended { " open" } else { "" };
            format!("Y {radius_top} {radius_bottom} {height}{open}")
        }
        Geometry::Sphere { radius, .. } => format!("S {radius}"),
        Geometry::Cone { radius, height, .. } => format!("K {radius} {height}"),
        Geometry::Torus {
            radius, tube, arc, ..
        } => format!("O {radius} {tube} {arc:.4}"),
        Geometry::Box {
            width,
            height,
            depth,
        } => format!("B {width} {height} {depth}"),
    }
}

fn format_material(material: &MaterialDef) -> String {
    match material.emissive {
        Some(emissive) => format!("{} *{}", material.color, emissive),
        None => material.color.to_string(),
    }
}

fn format_vec(v: &Vec3) -> String {
    format!("{},{},{}", trim(v.x), trim(v.y), trim(v.z))
}

/// Round to four decimals and drop trailing zeros.
fn trim(value: f64) -> String {
    let s = format!("{value:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn format_quoted_string(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rgb, Transform};

    fn node(id: NodeId, name: &str, kind: NodeKind, transform: Transform) -> Node {
        Node {
            id,
            name: Some(name.to_string()),
            parent: None,
            children: Vec::new(),
            transform,
            kind,
        }
    }

    #[test]
    fn outline_nests_children() {
        let mut doc = Document::new();
        let mut root = node(1, "cake", NodeKind::Group, Transform::IDENTITY);
        root.children = vec![2, 3];
        doc.nodes.insert(1, root);
        doc.nodes.insert(
            2,
            node(
                2,
                "tier-0-body",
                NodeKind::Mesh {
                    geometry: Geometry::cylinder(1.5, 0.5, 32),
                    material: MaterialDef::new(Rgb::hex(0xf7d795), 30.0),
                },
                Transform::at(0.0, 0.25, 0.0),
            ),
        );
        doc.nodes.insert(
            3,
            node(
                3,
                "flame",
                NodeKind::Mesh {
                    geometry: Geometry::sphere(0.07, 8),
                    material: MaterialDef::new(Rgb::hex(0xffcc00), 100.0)
                        .with_emissive(Rgb::hex(0xff6600)),
                },
                Transform::at(0.0, 0.25, 0.0),
            ),
        );
        doc.roots.push(1);

        let text = to_outline(&doc);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# cake 0.1");
        assert_eq!(lines[1], "G @0,0,0 \"cake\"");
        assert_eq!(lines[2], "  Y 1.5 1.5 0.5 #f7d795 @0,0.25,0 \"tier-0-body\"");
        assert_eq!(lines[3], "  S 0.07 #ffcc00 *#ff6600 @0,0.25,0 \"flame\"");
    }

    #[test]
    fn outline_reports_dangling_children() {
        let mut doc = Document::new();
        let mut root = node(1, "cake", NodeKind::Group, Transform::IDENTITY);
        root.children = vec![42];
        doc.nodes.insert(1, root);
        doc.roots.push(1);

        let text = to_outline(&doc);
        assert!(text.contains("  ? 42"));
    }

    #[test]
    fn trim_formats_compactly() {
        assert_eq!(trim(0.25), "0.25");
        assert_eq!(trim(1.0), "1");
        assert_eq!(trim(-0.00001), "0");
        assert_eq!(trim(0.123456), "0.1235");
    }
}
