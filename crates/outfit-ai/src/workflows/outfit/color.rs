use super::domain::ColorPalette;
use serde::{Deserialize, Serialize};

/// Colors treated as pairing with anything.
pub const NEUTRAL_COLORS: &[&str] = &["black", "white", "grey", "gray", "beige", "brown", "navy"];

/// How a candidate palette relates to the base item's palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorVerdict {
    /// Either side carries a neutral color.
    Neutral,
    /// No neutral, but both sides share at least one color.
    SharedColor,
    Unmatched,
}

impl ColorVerdict {
    pub fn assess(candidate: &ColorPalette, base: &ColorPalette) -> Self {
        if has_neutral(base) || has_neutral(candidate) {
            Self::Neutral
        } else if shares_color(candidate, base) {
            Self::SharedColor
        } else {
            Self::Unmatched
        }
    }
}

pub fn has_neutral(palette: &ColorPalette) -> bool {
    NEUTRAL_COLORS.iter().any(|neutral| palette.contains(neutral))
}

pub fn shares_color(left: &ColorPalette, right: &ColorPalette) -> bool {
    left.colors().iter().any(|color| right.contains(color))
}

/// Decides whether a candidate may be paired with the base item on color alone.
pub trait ColorPolicy: Send + Sync {
    fn is_compatible(&self, candidate: &ColorPalette, base: &ColorPalette) -> bool;
}

/// Accepts every pairing. Reports still carry the verdict for each
/// recommended item, but an unmatched verdict does not reject.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveColorPolicy;

impl ColorPolicy for PermissiveColorPolicy {
    fn is_compatible(&self, candidate: &ColorPalette, base: &ColorPalette) -> bool {
        match ColorVerdict::assess(candidate, base) {
            ColorVerdict::Neutral | ColorVerdict::SharedColor => true,
            ColorVerdict::Unmatched => true,
        }
    }
}

/// Rejects pairings with neither a neutral nor a shared color.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictColorPolicy;

impl ColorPolicy for StrictColorPolicy {
    fn is_compatible(&self, candidate: &ColorPalette, base: &ColorPalette) -> bool {
        ColorVerdict::assess(candidate, base) != ColorVerdict::Unmatched
    }
}

/// Runtime-selectable policy, chosen through configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorPolicyKind {
    #[default]
    Permissive,
    Strict,
}

impl ColorPolicyKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "permissive" | "any" => Some(Self::Permissive),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Permissive => "permissive",
            Self::Strict => "strict",
        }
    }
}

impl ColorPolicy for ColorPolicyKind {
    fn is_compatible(&self, candidate: &ColorPalette, base: &ColorPalette) -> bool {
        match self {
            Self::Permissive => PermissiveColorPolicy.is_compatible(candidate, base),
            Self::Strict => StrictColorPolicy.is_compatible(candidate, base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(raw: &str) -> ColorPalette {
        ColorPalette::parse(raw)
    }

    #[test]
    fn verdict_prefers_neutral_then_shared() {
        assert_eq!(
            ColorVerdict::assess(&palette("Red"), &palette("Navy")),
            ColorVerdict::Neutral
        );
        assert_eq!(
            ColorVerdict::assess(&palette("Grey, Red"), &palette("Pink")),
            ColorVerdict::Neutral
        );
        assert_eq!(
            ColorVerdict::assess(&palette("Red, Green"), &palette(" green ")),
            ColorVerdict::SharedColor
        );
        assert_eq!(
            ColorVerdict::assess(&palette("Red"), &palette("Purple")),
            ColorVerdict::Unmatched
        );
    }

    #[test]
    fn navy_blue_is_not_the_neutral_navy() {
        assert!(!has_neutral(&palette("Navy Blue")));
        assert!(has_neutral(&palette("navy")));
    }

    #[test]
    fn permissive_policy_accepts_every_pairing() {
        let samples = ["Red", "Purple", "Lime, Teal", "Black", "Magenta", "Silver"];
        for candidate in samples {
            for base in samples {
                assert!(
                    PermissiveColorPolicy.is_compatible(&palette(candidate), &palette(base)),
                    "{candidate} vs {base} rejected"
                );
            }
        }
        assert!(PermissiveColorPolicy.is_compatible(&palette(""), &palette("")));
    }

    #[test]
    fn strict_policy_rejects_unmatched_palettes() {
        assert!(!StrictColorPolicy.is_compatible(&palette("Red"), &palette("Purple")));
        assert!(StrictColorPolicy.is_compatible(&palette("Red"), &palette("White")));
        assert!(StrictColorPolicy.is_compatible(&palette("Red, Gold"), &palette("gold")));
    }

    #[test]
    fn policy_kind_parses_and_dispatches() {
        assert_eq!(ColorPolicyKind::parse(" Strict "), Some(ColorPolicyKind::Strict));
        assert_eq!(ColorPolicyKind::parse("permissive"), Some(ColorPolicyKind::Permissive));
        assert_eq!(ColorPolicyKind::parse("loose"), None);
        assert!(ColorPolicyKind::Permissive.is_compatible(&palette("Red"), &palette("Purple")));
        assert!(!ColorPolicyKind::Strict.is_compatible(&palette("Red"), &palette("Purple")));
    }
}
