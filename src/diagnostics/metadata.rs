//! Static rule registry.

use super::{Category, RuleId};

/// Fixed facts about a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMeta {
    pub category: Category,
    pub help: &'static str,
}

pub fn rule_meta(id: RuleId) -> RuleMeta {
    let (category, help) = match id {
        RuleId::HardcodedText => (
            Category::Code,
            "move the text into the locale files and render it with a translation call",
        ),
        RuleId::HardcodedAttribute => (
            Category::Code,
            "user-facing attributes such as title, alt and placeholder should use a translation call",
        ),
        RuleId::LocaleTernary => (
            Category::Code,
            "branching on the locale bypasses the translation layer; add a key per locale instead",
        ),
        RuleId::HardcodedNotification => (
            Category::Code,
            "notification messages are shown to users and should be translated",
        ),
        RuleId::HardcodedVariable => (
            Category::Code,
            "if this string is displayed, store it as a translation key",
        ),
        RuleId::TranslationKey => (
            Category::Code,
            "informational: a translation key referenced from code",
        ),
        RuleId::DynamicKeyAmbiguous => (
            Category::Code,
            "narrow the pattern with a longer static prefix, or list the keys explicitly",
        ),
        RuleId::DynamicKeyUnmatched => (
            Category::Coverage,
            "no key in the source locale matches this pattern; add the keys or fix the pattern",
        ),
        RuleId::MissingTranslation => (
            Category::Coverage,
            "add the key to the target locale file",
        ),
        RuleId::PlaceholderMismatch => (
            Category::Quality,
            "the translation must use the same placeholders as the source text",
        ),
        RuleId::OrphanKey => (
            Category::Performance,
            "remove the key from the locale files if it is no longer used",
        ),
        RuleId::UndefinedKey => (
            Category::Coverage,
            "add the key to the source locale file or fix the key in code",
        ),
        RuleId::EmptyTranslation => (
            Category::Quality,
            "provide a translated value; empty strings render as blank text",
        ),
        RuleId::UntranslatedValue => (
            Category::Quality,
            "the value is identical to the source text; translate it or confirm it is intentional",
        ),
        RuleId::ExtraKey => (
            Category::Structure,
            "the key does not exist in the source locale; remove it or add it to the source",
        ),
    };
    RuleMeta { category, help }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_has_help() {
        for id in RuleId::ALL {
            let meta = rule_meta(id);
            assert!(!meta.help.is_empty(), "{id}");
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(rule_meta(RuleId::MissingTranslation).category, Category::Coverage);
        assert_eq!(rule_meta(RuleId::PlaceholderMismatch).category, Category::Quality);
        assert_eq!(rule_meta(RuleId::OrphanKey).category, Category::Performance);
        assert_eq!(rule_meta(RuleId::ExtraKey).category, Category::Structure);
        assert_eq!(rule_meta(RuleId::HardcodedText).category, Category::Code);
    }
}
