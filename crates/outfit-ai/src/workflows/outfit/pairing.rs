/// Garment categories searched when a base category has no pairing rule.
pub const GENERIC_GARMENTS: &[&str] = &[
    "shirt", "t-shirt", "top", "blouse", "sweater", "jacket", "pants", "jeans", "trousers",
    "shorts", "skirt", "dress", "jumpsuit",
];

pub const SHOES: &str = "shoes";
pub const ACCESSORY: &str = "accessory";
pub const WATCH: &str = "watch";

const TOPS_PAIR_WITH: &[&str] = &["pants", "jeans", "trousers", "shorts", "skirt"];
const BOTTOMS_PAIR_WITH: &[&str] = &["shirt", "t-shirt", "top", "blouse", "sweater", "jacket"];
const LAYERS_PAIR_WITH: &[&str] = &["jacket", "cardigan"];

/// A category keyword and the categories that complete an outfit around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingRule {
    pub keyword: &'static str,
    pub complements: Vec<&'static str>,
}

impl PairingRule {
    fn new(keyword: &'static str, complements: &[&'static str]) -> Self {
        Self {
            keyword,
            complements: complements.to_vec(),
        }
    }

    fn with_extras(
        keyword: &'static str,
        complements: &[&'static str],
        extras: &[&'static str],
    ) -> Self {
        let mut rule = Self::new(keyword, complements);
        rule.complements.extend_from_slice(extras);
        rule
    }

    pub fn matches(&self, normalized_category: &str) -> bool {
        normalized_category.contains(self.keyword)
    }
}

/// Ordered pairing rules. Lookup is first-match-wins in declaration order, so
/// a keyword must precede every shorter keyword it contains.
#[derive(Debug, Clone)]
pub struct PairingRuleTable {
    rules: Vec<PairingRule>,
}

impl PairingRuleTable {
    pub fn standard() -> Self {
        Self {
            rules: standard_rules(),
        }
    }

    pub fn from_rules(rules: Vec<PairingRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[PairingRule] {
        &self.rules
    }

    pub fn first_match(&self, normalized_category: &str) -> Option<&PairingRule> {
        self.rules
            .iter()
            .find(|rule| rule.matches(normalized_category))
    }
}

impl Default for PairingRuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_rules() -> Vec<PairingRule> {
    vec![
        PairingRule::new("track pants", &["t-shirt", "shirt", "hoodie", "sports bra"]),
        PairingRule::new("t-shirt", TOPS_PAIR_WITH),
        PairingRule::new("shirt", TOPS_PAIR_WITH),
        PairingRule::new("top", TOPS_PAIR_WITH),
        PairingRule::new("blouse", TOPS_PAIR_WITH),
        PairingRule::new("sweater", TOPS_PAIR_WITH),
        PairingRule::new(
            "jacket",
            &[
                "shirt", "t-shirt", "top", "blouse", "sweater", "pants", "jeans", "trousers",
                "shorts", "skirt",
            ],
        ),
        PairingRule::new("pants", BOTTOMS_PAIR_WITH),
        PairingRule::new("jeans", BOTTOMS_PAIR_WITH),
        PairingRule::new("trousers", BOTTOMS_PAIR_WITH),
        PairingRule::new("shorts", &["shirt", "t-shirt", "top", "blouse", "sweater"]),
        PairingRule::new("skirt", &["top", "blouse", "shirt", "t-shirt", "sweater", "jacket"]),
        PairingRule::new("dress", LAYERS_PAIR_WITH),
        PairingRule::new("jumpsuit", LAYERS_PAIR_WITH),
        PairingRule::with_extras("garment", GENERIC_GARMENTS, &[SHOES, ACCESSORY]),
        PairingRule::with_extras(WATCH, GENERIC_GARMENTS, &[SHOES]),
        PairingRule::new(
            SHOES,
            &["pants", "jeans", "trousers", "shorts", "skirt", "dress", "jumpsuit"],
        ),
        PairingRule::with_extras(ACCESSORY, GENERIC_GARMENTS, &[SHOES, WATCH]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_keywords_precede_the_keywords_they_contain() {
        let table = PairingRuleTable::standard();
        let rules = table.rules();
        for (later_index, later) in rules.iter().enumerate() {
            for earlier in &rules[..later_index] {
                assert!(
                    !later.keyword.contains(earlier.keyword),
                    "'{}' is shadowed by earlier keyword '{}'",
                    later.keyword,
                    earlier.keyword
                );
            }
        }
    }

    #[test]
    fn first_match_uses_substring_lookup() {
        let table = PairingRuleTable::standard();
        let rule = table
            .first_match("men's formal shirt")
            .expect("shirt rule matches");
        assert_eq!(rule.keyword, "shirt");

        let rule = table.first_match("track pants").expect("track pants rule");
        assert_eq!(rule.keyword, "track pants");

        assert!(table.first_match("scarf").is_none());
    }

    #[test]
    fn watch_rule_leaves_the_accessory_slot_out() {
        let table = PairingRuleTable::standard();
        let watch = table.first_match("watch").expect("watch rule");
        assert!(watch.complements.contains(&SHOES));
        assert!(!watch.complements.contains(&ACCESSORY));
    }
}
