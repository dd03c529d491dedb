//! Human-readable summaries printed by the CLI.

use cake::presets::{CHIPS, FEATURED};
use cake::{BuildOutcome, SceneGraph};
use cake_ir::{Document, NodeId};
use std::collections::BTreeMap;

/// Node names worth counting in a summary.
const DECORATIONS: &[(&str, &str)] = &[
    ("piping", "piping"),
    ("wedding-motif", "wedding motifs"),
    ("flame", "candles"),
    ("sprinkle", "sprinkles"),
    ("flower", "flowers"),
    ("cascade-flower", "cascading flowers"),
    ("chocolate-curl", "chocolate curls"),
    ("chocolate-drip", "chocolate drips"),
    ("strawberry", "strawberries"),
    ("blueberry", "blueberries"),
    ("lemon-slice", "lemon slices"),
    ("topper", "topper"),
];

/// Non-zero decoration counts under `root`, in display order.
pub fn decoration_counts(scene: &SceneGraph, root: NodeId) -> Vec<(&'static str, usize)> {
    DECORATIONS
        .iter()
        .map(|(name, label)| (*label, scene.find_named(root, name).len()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

/// Mesh count per primitive kind.
pub fn primitive_counts(doc: &Document) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for geometry in doc.nodes.values().filter_map(|n| n.geometry()) {
        *counts.entry(geometry.kind()).or_insert(0) += 1;
    }
    counts
}

pub fn print_outcome(scene: &SceneGraph, outcome: &BuildOutcome) {
    match outcome {
        BuildOutcome::Built { root, attributes } => {
            println!("Cake: {}", attributes.flavor);
            println!("  Sponge: {}", attributes.cake_color);
            println!(
                "  Frosting: {}{}",
                attributes.frosting_color,
                if attributes.explicit_frosting {
                    " (requested)"
                } else {
                    ""
                }
            );
            println!("  Tiers: {}", attributes.layer_count);
            if attributes.is_wedding {
                println!("  Occasion: wedding");
            }
            print_decorations(scene, *root);
        }
        BuildOutcome::Fallback { root, reason } => {
            println!("Cake: fallback ({reason})");
            print_decorations(scene, *root);
        }
    }
}

fn print_decorations(scene: &SceneGraph, root: NodeId) {
    let counts = decoration_counts(scene, root);
    if counts.is_empty() {
        return;
    }
    println!("\nDecorations:");
    for (label, n) in counts {
        println!("  {label}: {n}");
    }
}

pub fn print_presets() {
    println!("Featured designs:");
    for design in FEATURED {
        println!("  {} - {}", design.title, design.blurb);
        println!("    \"{}\"", design.prompt);
    }
    println!("\nChips:");
    for chip in CHIPS {
        println!("  {:<12} {}", chip.label, chip.value);
    }
}
