//! End-to-end: prompt in, scene document out.

use cake::color::WHITE_FROSTING;
use cake::presets::featured;
use cake::{contrast, extract, BuildOutcome, CakeConfig, Flavor, SceneBackend, SceneGraph, Session};
use cake_ir::{Document, NodeId};

fn session() -> Session {
    Session::with_seed(CakeConfig::default(), 2024)
}

fn built(outcome: BuildOutcome) -> (NodeId, cake::DesignAttributes) {
    match outcome {
        BuildOutcome::Built { root, attributes } => (root, attributes),
        BuildOutcome::Fallback { reason, .. } => panic!("unexpected fallback: {reason}"),
    }
}

fn names(scene: &SceneGraph, root: NodeId, name: &str) -> usize {
    scene.find_named(root, name).len()
}

#[test]
fn classic_strawberry() {
    let mut s = session();
    let (root, attrs) = built(s.visualize(featured("Classic Strawberry").unwrap().prompt));
    assert_eq!(attrs.flavor, Flavor::Strawberry);
    assert_eq!(attrs.frosting_color, WHITE_FROSTING);
    assert_eq!(attrs.layer_count, 2);
    assert!(!attrs.is_wedding);
    assert_eq!(names(s.scene(), root, "strawberry"), 8);
}

#[test]
fn wedding_special() {
    let mut s = session();
    let (root, attrs) = built(s.visualize(
        "Elegant three-tiered wedding cake with white frosting and rose decorations",
    ));
    assert_eq!(attrs.flavor, Flavor::Vanilla);
    assert_eq!(attrs.frosting_color, WHITE_FROSTING);
    assert_eq!(attrs.layer_count, 3);
    assert!(attrs.is_wedding && attrs.has_flowers);
    assert_eq!(names(s.scene(), root, "topper"), 1);
    assert_eq!(names(s.scene(), root, "cascade-flower"), 12);
}

#[test]
fn empty_prompt_is_a_plain_cake() {
    let mut s = session();
    let (root, attrs) = built(s.visualize(""));
    assert_eq!(attrs.flavor, Flavor::Vanilla);
    assert_eq!(attrs.layer_count, 2);
    assert!(attrs.is_plain());
    let scene = s.scene();
    assert_eq!(scene.find_prefixed(root, "candle-").len(), 0);
    assert_eq!(names(scene, root, "sprinkle"), 0);
    assert_eq!(names(scene, root, "flower"), 0);
}

#[test]
fn chocolate_frosting_alone_keeps_vanilla() {
    let attrs = extract("vanilla sponge with chocolate frosting");
    assert_eq!(attrs.flavor, Flavor::Vanilla);
    assert!(attrs.explicit_frosting);

    let attrs = extract("chocolate cake with chocolate frosting");
    assert_eq!(attrs.flavor, Flavor::Chocolate);
}

#[test]
fn contrast_flips_between_two_colors() {
    for c in [0x000000, 0xffffff, 0x4a2c0f, 0xf8f8f0, 0x808080] {
        let once = contrast(cake_ir::Rgb::hex(c));
        let twice = contrast(once);
        assert_ne!(once, twice);
        assert_eq!(contrast(twice), once);
    }
}

#[test]
fn body_and_disc_count_match_layers() {
    let mut s = session();
    for prompt in ["", "wedding", "blueberry birthday", "lemon with sprinkles and roses"] {
        let (root, attrs) = built(s.visualize(prompt));
        let n = attrs.layer_count as usize;
        for i in 0..attrs.layer_count {
            assert_eq!(names(s.scene(), root, &format!("tier-{i}-body")), 1);
            assert_eq!(names(s.scene(), root, &format!("tier-{i}-top-frosting")), 1);
        }
        assert_eq!(s.scene().find_prefixed(root, "tier-").len(), 3 * n);
    }
}

#[test]
fn repeated_builds_keep_one_root() {
    let mut s = session();
    for prompt in ["chocolate", "wedding", "birthday", "wedding"] {
        s.visualize(prompt);
        assert_eq!(s.scene().roots().len(), 1);
    }
}

#[test]
fn document_survives_json() {
    let mut s = session();
    let root = s.visualize("chocolate wedding cake with candles and sprinkles").root();
    let doc = s.scene().to_document();
    let json = doc.to_json().unwrap();
    let back = Document::from_json(&json).unwrap();
    assert_eq!(back.roots, vec![root]);
    assert_eq!(back.nodes.len(), doc.nodes.len());
    assert_eq!(back.mesh_count(), doc.mesh_count());
    for (id, node) in &doc.nodes {
        let copy = &back.nodes[id];
        assert_eq!(copy.name, node.name);
        assert_eq!(copy.children, node.children);
        assert_eq!(copy.material(), node.material());
    }

    let outline = cake_ir::outline::to_outline(&back);
    // Header plus one line per node.
    assert_eq!(outline.lines().count(), 1 + back.nodes.len());
    assert!(outline.contains("\"topper\""));
}
