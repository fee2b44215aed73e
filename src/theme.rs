use yew::Properties;

/// CSS class names selected by the dark-mode flag.
///
/// Every field is a class defined in [`crate::styles::GLOBAL_CSS`], so the
/// render tree only ever concatenates these into `class` attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeTokens {
    pub primary_text: &'static str,
    pub secondary_text: &'static str,
    pub card_background: &'static str,
    pub page: &'static str,
    pub toggle_background: &'static str,
}

pub const DARK: ThemeTokens = ThemeTokens {
    primary_text: "text-gray-100",
    secondary_text: "text-gray-400",
    card_background: "card-bg-dark",
    page: "page-dark",
    toggle_background: "toggle-bg-dark",
};

pub const LIGHT: ThemeTokens = ThemeTokens {
    primary_text: "text-gray-900",
    secondary_text: "text-gray-600",
    card_background: "card-bg-light",
    page: "page-light",
    toggle_background: "toggle-bg-light",
};

/// Props for sections that only need the current theme.
#[derive(Properties, PartialEq)]
pub struct ThemedProps {
    pub tokens: ThemeTokens,
}

pub fn derived_tokens(dark_mode: bool) -> ThemeTokens {
    if dark_mode {
        DARK
    } else {
        LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_and_light_sets_are_distinct() {
        let dark = derived_tokens(true);
        let light = derived_tokens(false);
        assert_ne!(dark, light);
        assert_ne!(dark.primary_text, light.primary_text);
        assert_ne!(dark.secondary_text, light.secondary_text);
        assert_ne!(dark.card_background, light.card_background);
    }

    #[test]
    fn mapping_is_stable_across_calls() {
        for flag in [true, false] {
            assert_eq!(derived_tokens(flag), derived_tokens(flag));
        }
        assert_eq!(derived_tokens(true), DARK);
        assert_eq!(derived_tokens(false), LIGHT);
    }

    #[test]
    fn tokens_are_single_class_names() {
        for tokens in [DARK, LIGHT] {
            for class in [
                tokens.primary_text,
                tokens.secondary_text,
                tokens.card_background,
                tokens.page,
                tokens.toggle_background,
            ] {
                assert!(!class.is_empty());
                assert!(!class.contains(char::is_whitespace), "{class}");
            }
        }
    }
}
