use crate::i18n::{Language, Localizer};
use crate::views::View;

/// Section links: catalog path of the label and the anchor it jumps to.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("nav.economy", "#economy"),
    ("nav.education", "#education"),
    ("nav.medicine", "#medicine"),
    ("nav.data", "#data"),
    ("nav.gallery", "#media"),
];

const BRAND: &str = "AI IMPACT";

/// One control of the language switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageButton {
    pub language: Language,
    pub label: &'static str,
    pub active: bool,
}

/// Top navigation with the language switcher.
#[derive(Debug, Default)]
pub struct NavBar;

impl NavBar {
    pub fn links<'a>(&self, i18n: &'a Localizer) -> Vec<(&'a str, &'static str)> {
        NAV_LINKS
            .iter()
            .map(|(path, href)| (i18n.t(path), *href))
            .collect()
    }

    /// One button per supported language, the current one marked active.
    pub fn language_buttons(&self, i18n: &Localizer) -> Vec<LanguageButton> {
        let current = i18n.current_language();
        Language::ALL
            .iter()
            .map(|language| LanguageButton {
                language: *language,
                label: language.label(),
                active: *language == current,
            })
            .collect()
    }

    /// Handle a click on a switcher button.
    pub fn select_language(&self, i18n: &Localizer, language: Language) {
        i18n.set_language(language);
    }
}

impl View for NavBar {
    fn render(&self, i18n: &Localizer) -> String {
        let links = self
            .links(i18n)
            .iter()
            .map(|(label, href)| format!("{} ({})", label, href))
            .collect::<Vec<_>>()
            .join(" · ");

        let switcher = self
            .language_buttons(i18n)
            .iter()
            .map(|button| {
                if button.active {
                    format!("[{}]", button.label)
                } else {
                    button.label.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        format!("{} | {} | {}", BRAND, links, switcher)
    }
}
