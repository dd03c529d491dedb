//! Canned designs and suggestion chips for quick prompting.

use serde::Serialize;

/// A named, ready-made prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeaturedDesign {
    pub title: &'static str,
    pub blurb: &'static str,
    pub prompt: &'static str,
}

/// Featured designs, in display order.
pub const FEATURED: &[FeaturedDesign] = &[
    FeaturedDesign {
        title: "Classic Strawberry",
        blurb: "Fresh strawberries with cream frosting",
        prompt: "Classic strawberry cake with white frosting and fresh strawberries",
    },
    FeaturedDesign {
        title: "Chocolate Dream",
        blurb: "Rich chocolate layers with ganache",
        prompt: "Rich chocolate cake with chocolate ganache and chocolate shavings",
    },
    FeaturedDesign {
        title: "Wedding Special",
        blurb: "Elegant tiered cake with floral decorations",
        prompt: "Elegant three-tiered wedding cake with white frosting and rose decorations",
    },
];

/// A short phrase that can be appended to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub label: &'static str,
    pub value: &'static str,
}

/// Suggestion chips, in display order.
pub const CHIPS: &[Chip] = &[
    Chip {
        label: "Chocolate",
        value: "chocolate",
    },
    Chip {
        label: "Strawberry",
        value: "strawberry",
    },
    Chip {
        label: "Wedding",
        value: "wedding cake",
    },
    Chip {
        label: "Birthday",
        value: "with candles",
    },
    Chip {
        label: "Roses",
        value: "with roses",
    },
];

/// Look up a featured design by title, ignoring case.
pub fn featured(title: &str) -> Option<&'static FeaturedDesign> {
    FEATURED.iter().find(|d| d.title.eq_ignore_ascii_case(title))
}

/// Look up a chip by label or value, ignoring case.
pub fn chip(name: &str) -> Option<&'static Chip> {
    CHIPS
        .iter()
        .find(|c| c.label.eq_ignore_ascii_case(name) || c.value.eq_ignore_ascii_case(name))
}

/// Add `chip` to `input`.
///
/// Blank input is replaced by the chip text. Otherwise the chip is appended
/// with a space, unless the input already mentions it (case-insensitive).
pub fn apply_chip(input: &str, chip: &str) -> String {
    if input.trim().is_empty() {
        return chip.to_string();
    }
    if input.to_lowercase().contains(&chip.to_lowercase()) {
        input.to_string()
    } else {
        format!("{input} {chip}")
    }
}
