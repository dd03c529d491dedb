//! Keyword extraction: free-form prompt → [`DesignAttributes`].
//!
//! Matching is case-insensitive substring search driven by ordered rule
//! tables. Earlier rules shadow later ones, so the table order *is* the
//! tie-break policy: "chocolate lemon cake" resolves to chocolate.

use crate::color::{CHOCOLATE_FROSTING, WHITE_FROSTING};
use cake_ir::Rgb;
use serde::Serialize;
use std::fmt;

/// Cake body flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// Plain sponge; the fallback when nothing matches.
    #[default]
    Vanilla,
    /// Dark chocolate sponge.
    Chocolate,
    /// Pink strawberry sponge.
    Strawberry,
    /// Blue blueberry sponge.
    Blueberry,
    /// Red velvet with cream-cheese frosting.
    RedVelvet,
    /// Pale yellow lemon sponge.
    Lemon,
}

impl Flavor {
    /// Sponge color for this flavor.
    pub fn cake_color(self) -> Rgb {
        match self {
            Flavor::Vanilla => Rgb::hex(0xf7d795),
            Flavor::Chocolate => Rgb::hex(0x3c1803),
            Flavor::Strawberry => Rgb::hex(0xff6b8a),
            Flavor::Blueberry => Rgb::hex(0x0000cd),
            Flavor::RedVelvet => Rgb::hex(0xb30000),
            Flavor::Lemon => Rgb::hex(0xfff9a6),
        }
    }

    /// Frosting color used when the prompt does not name one.
    pub fn default_frosting(self) -> Rgb {
        match self {
            Flavor::Chocolate => CHOCOLATE_FROSTING,
            Flavor::RedVelvet => WHITE_FROSTING,
            other => other.cake_color(),
        }
    }

    /// Lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Flavor::Vanilla => "vanilla",
            Flavor::Chocolate => "chocolate",
            Flavor::Strawberry => "strawberry",
            Flavor::Blueberry => "blueberry",
            Flavor::RedVelvet => "redvelvet",
            Flavor::Lemon => "lemon",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the flavor priority table.
#[derive(Debug, Clone, Copy)]
pub struct FlavorRule {
    /// Flavor selected when the rule matches.
    pub flavor: Flavor,
    /// Any of these substrings triggers the rule.
    pub keywords: &'static [&'static str],
    /// Phrases blanked out of the prompt before `keywords` are searched.
    pub masked: &'static [&'static str],
}

impl FlavorRule {
    /// Whether the (lowercased) prompt triggers this rule.
    pub fn matches(&self, prompt: &str) -> bool {
        let visible = mask(prompt, self.masked);
        self.keywords.iter().any(|k| visible.contains(k))
    }
}

/// Flavor rules in priority order.
pub const FLAVOR_RULES: &[FlavorRule] = &[
    FlavorRule {
        flavor: Flavor::Chocolate,
        keywords: &["chocolate"],
        masked: &["chocolate frosting"],
    },
    FlavorRule {
        flavor: Flavor::Strawberry,
        keywords: &["strawberry", "pink cake"],
        masked: &[],
    },
    FlavorRule {
        flavor: Flavor::Blueberry,
        keywords: &["blueberry", "blue cake", "blue berry"],
        masked: &[],
    },
    FlavorRule {
        flavor: Flavor::RedVelvet,
        keywords: &["red velvet", "redvelvet"],
        masked: &[],
    },
    FlavorRule {
        flavor: Flavor::Lemon,
        keywords: &["lemon"],
        masked: &[],
    },
    FlavorRule {
        flavor: Flavor::Vanilla,
        keywords: &["vanilla"],
        masked: &[],
    },
];

/// Explicit frosting phrases in priority order.
pub const FROSTING_RULES: &[(&str, Rgb)] = &[
    ("pink frosting", Rgb::hex(0xff69b4)),
    ("chocolate frosting", CHOCOLATE_FROSTING),
    ("blue frosting", Rgb::hex(0x1e90ff)),
    ("white frosting", WHITE_FROSTING),
    ("green frosting", Rgb::hex(0x00cc44)),
    ("yellow frosting", Rgb::hex(0xffff00)),
    ("red frosting", Rgb::hex(0xff0000)),
];

const WEDDING_KEYWORDS: &[&str] = &["wedding", "bride", "marriage"];
const CANDLE_KEYWORDS: &[&str] = &["candle", "birthday"];
const SPRINKLE_KEYWORDS: &[&str] = &["sprinkle"];
const FLOWER_KEYWORDS: &[&str] = &["flower", "rose"];
const FLOWER_NEGATIONS: &[&str] = &["no flower", "without flower"];

/// Tiers on a wedding cake.
pub const WEDDING_LAYERS: u32 = 3;
/// Tiers on every other cake.
pub const DEFAULT_LAYERS: u32 = 2;

/// Structured design derived from a prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignAttributes {
    /// Body flavor.
    pub flavor: Flavor,
    /// Sponge color, fixed by the flavor.
    pub cake_color: Rgb,
    /// Frosting color, explicit or flavor default.
    pub frosting_color: Rgb,
    /// Whether the frosting color came from an explicit phrase.
    pub explicit_frosting: bool,
    /// Number of stacked tiers.
    pub layer_count: u32,
    /// Wedding occasion detected.
    pub is_wedding: bool,
    /// Candle ring on the top tier.
    pub has_candles: bool,
    /// Sprinkles scattered on the top tier.
    pub has_sprinkles: bool,
    /// Flower ring (and wedding cascade).
    pub has_flowers: bool,
}

impl Default for DesignAttributes {
    fn default() -> Self {
        let flavor = Flavor::default();
        Self {
            flavor,
            cake_color: flavor.cake_color(),
            frosting_color: flavor.default_frosting(),
            explicit_frosting: false,
            layer_count: DEFAULT_LAYERS,
            is_wedding: false,
            has_candles: false,
            has_sprinkles: false,
            has_flowers: false,
        }
    }
}

impl DesignAttributes {
    /// True when the design adds nothing beyond the plain layered cake.
    pub fn is_plain(&self) -> bool {
        !(self.is_wedding || self.has_candles || self.has_sprinkles || self.has_flowers)
    }
}

/// Derive design attributes from a free-form prompt. Never fails.
pub fn extract(prompt: &str) -> DesignAttributes {
    let prompt = prompt.to_lowercase();

    let flavor = resolve_flavor(&prompt);
    let explicit = resolve_frosting(&prompt);
    let frosting_color = explicit.unwrap_or_else(|| flavor.default_frosting());

    let is_wedding = contains_any(&prompt, WEDDING_KEYWORDS);
    let has_candles = contains_any(&prompt, CANDLE_KEYWORDS);
    let has_sprinkles = contains_any(&prompt, SPRINKLE_KEYWORDS);
    let flowers_negated = contains_any(&prompt, FLOWER_NEGATIONS);
    // "no flowers" must not count as a flower request.
    let flowers_asked = contains_any(&mask(&prompt, FLOWER_NEGATIONS), FLOWER_KEYWORDS);
    let has_flowers = flowers_asked || (is_wedding && !flowers_negated);

    let attributes = DesignAttributes {
        flavor,
        cake_color: flavor.cake_color(),
        frosting_color,
        explicit_frosting: explicit.is_some(),
        layer_count: if is_wedding {
            WEDDING_LAYERS
        } else {
            DEFAULT_LAYERS
        },
        is_wedding,
        has_candles,
        has_sprinkles,
        has_flowers,
    };
    log::debug!(
        "extracted {} cake, frosting {} (explicit: {}), {} layers, wedding={} candles={} sprinkles={} flowers={}",
        attributes.flavor,
        attributes.frosting_color,
        attributes.explicit_frosting,
        attributes.layer_count,
        attributes.is_wedding,
        attributes.has_candles,
        attributes.has_sprinkles,
        attributes.has_flowers
    );
    attributes
}

/// First flavor rule that matches, or vanilla.
pub fn resolve_flavor(prompt: &str) -> Flavor {
    FLAVOR_RULES
        .iter()
        .find(|rule| rule.matches(prompt))
        .map(|rule| rule.flavor)
        .unwrap_or_default()
}

/// First explicit frosting phrase present in the prompt.
pub fn resolve_frosting(prompt: &str) -> Option<Rgb> {
    FROSTING_RULES
        .iter()
        .find(|(phrase, _)| prompt.contains(phrase))
        .map(|&(_, color)| color)
}

fn contains_any(prompt: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| prompt.contains(k))
}

/// Replace every occurrence of each phrase with a single space.
fn mask(prompt: &str, phrases: &[&str]) -> String {
    phrases
        .iter()
        .fold(prompt.to_string(), |text, phrase| text.replace(phrase, " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_prompt_yields_defaults() {
        for prompt in ["", "   ", "a nice cake please", "42", "ÜBER TORTE"] {
            let attrs = extract(prompt);
            assert_eq!(attrs, DesignAttributes::default(), "prompt {prompt:?}");
            assert!(attrs.is_plain());
        }
    }

    #[test]
    fn defaults_are_vanilla_two_layers() {
        let attrs = DesignAttributes::default();
        assert_eq!(attrs.flavor, Flavor::Vanilla);
        assert_eq!(attrs.layer_count, 2);
        assert_eq!(attrs.frosting_color, attrs.cake_color);
    }

    #[test]
    fn chocolate_mention_sets_flavor() {
        let attrs = extract("Rich chocolate cake with chocolate ganache and chocolate shavings");
        assert_eq!(attrs.flavor, Flavor::Chocolate);
        assert_eq!(attrs.cake_color, Rgb::hex(0x3c1803));
        assert_eq!(attrs.frosting_color, CHOCOLATE_FROSTING);
        assert!(!attrs.explicit_frosting);
    }

    #[test]
    fn chocolate_frosting_alone_keeps_body_flavor() {
        let attrs = extract("Vanilla sponge with chocolate frosting");
        assert_eq!(attrs.flavor, Flavor::Vanilla);
        assert_eq!(attrs.frosting_color, CHOCOLATE_FROSTING);
        assert!(attrs.explicit_frosting);

        let attrs = extract("lemon cake, chocolate frosting");
        assert_eq!(attrs.flavor, Flavor::Lemon);
        assert_eq!(attrs.frosting_color, CHOCOLATE_FROSTING);
    }

    #[test]
    fn chocolate_frosting_plus_other_chocolate_mention_is_chocolate() {
        let attrs = extract("chocolate frosting on a chocolate sponge");
        assert_eq!(attrs.flavor, Flavor::Chocolate);
        assert!(attrs.explicit_frosting);
    }

    #[test]
    fn earlier_rules_shadow_later_ones() {
        assert_eq!(extract("chocolate lemon cake").flavor, Flavor::Chocolate);
        assert_eq!(extract("lemon and strawberry").flavor, Flavor::Strawberry);
        assert_eq!(extract("blueberry red velvet").flavor, Flavor::Blueberry);
        assert_eq!(extract("vanilla lemon").flavor, Flavor::Lemon);
    }

    #[test]
    fn rule_table_order() {
        let order: Vec<Flavor> = FLAVOR_RULES.iter().map(|r| r.flavor).collect();
        assert_eq!(
            order,
            vec![
                Flavor::Chocolate,
                Flavor::Strawberry,
                Flavor::Blueberry,
                Flavor::RedVelvet,
                Flavor::Lemon,
                Flavor::Vanilla,
            ]
        );
        let phrases: Vec<&str> = FROSTING_RULES.iter().map(|(p, _)| *p).collect();
        assert_eq!(phrases[0], "pink frosting");
        assert_eq!(phrases[6], "red frosting");
    }

    #[test]
    fn rules_match_in_isolation() {
        let chocolate = &FLAVOR_RULES[0];
        assert!(chocolate.matches("chocolate"));
        assert!(!chocolate.matches("white cake, chocolate frosting"));
        let strawberry = &FLAVOR_RULES[1];
        assert!(strawberry.matches("a pink cake"));
        assert!(!strawberry.matches("pink frosting"));
    }

    #[test]
    fn alternate_flavor_keywords() {
        assert_eq!(extract("PINK CAKE").flavor, Flavor::Strawberry);
        assert_eq!(extract("blue cake").flavor, Flavor::Blueberry);
        assert_eq!(extract("blue berry tart").flavor, Flavor::Blueberry);
        assert_eq!(extract("RedVelvet").flavor, Flavor::RedVelvet);
    }

    #[test]
    fn red_velvet_defaults_to_cream_frosting() {
        let attrs = extract("red velvet");
        assert_eq!(attrs.cake_color, Rgb::hex(0xb30000));
        assert_eq!(attrs.frosting_color, WHITE_FROSTING);
    }

    #[test]
    fn first_frosting_phrase_wins() {
        let attrs = extract("red frosting and pink frosting");
        assert_eq!(attrs.frosting_color, Rgb::hex(0xff69b4));
        let attrs = extract("green frosting or yellow frosting");
        assert_eq!(attrs.frosting_color, Rgb::hex(0x00cc44));
    }

    #[test]
    fn wedding_implies_three_layers_and_flowers() {
        for prompt in ["wedding cake", "for the bride", "marriage celebration"] {
            let attrs = extract(prompt);
            assert!(attrs.is_wedding, "{prompt}");
            assert_eq!(attrs.layer_count, 3);
            assert!(attrs.has_flowers);
        }
    }

    #[test]
    fn negation_cancels_wedding_flowers() {
        for prompt in ["wedding cake with no flowers", "wedding cake without flowers"] {
            let attrs = extract(prompt);
            assert!(attrs.is_wedding);
            assert!(!attrs.has_flowers, "{prompt}");
        }
        assert!(!extract("plain cake, no flowers").has_flowers);
    }

    #[test]
    fn explicit_roses_survive_negation() {
        for prompt in [
            "wedding cake with roses but no flowers",
            "cake with roses and no flowers",
            "without flowers, but a flower on top",
        ] {
            assert!(extract(prompt).has_flowers, "{prompt}");
        }
    }

    #[test]
    fn decoration_flags_are_independent() {
        let attrs = extract("birthday cake with sprinkles and roses");
        assert!(attrs.has_candles);
        assert!(attrs.has_sprinkles);
        assert!(attrs.has_flowers);
        assert!(!attrs.is_wedding);
        assert_eq!(attrs.layer_count, 2);

        assert!(extract("two candles").has_candles);
        assert!(extract("a sprinkle").has_sprinkles);
        assert!(extract("a single flower").has_flowers);
    }

    #[test]
    fn featured_prompts() {
        let attrs = extract("Classic strawberry cake with white frosting and fresh strawberries");
        assert_eq!(attrs.flavor, Flavor::Strawberry);
        assert_eq!(attrs.frosting_color, WHITE_FROSTING);
        assert_eq!(attrs.layer_count, 2);
        assert!(!attrs.is_wedding);

        let attrs =
            extract("Elegant three-tiered wedding cake with white frosting and rose decorations");
        assert_eq!(attrs.flavor, Flavor::Vanilla);
        assert_eq!(attrs.frosting_color, WHITE_FROSTING);
        assert_eq!(attrs.layer_count, 3);
        assert!(attrs.is_wedding);
        assert!(attrs.has_flowers);
    }

    #[test]
    fn flavor_serializes_lowercase() {
        let json = serde_json::to_string(&Flavor::RedVelvet).unwrap();
        assert_eq!(json, r#""redvelvet""#);
    }
}
