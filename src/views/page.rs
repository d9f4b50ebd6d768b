use crate::audio::{AmbientPlayer, TracingSink};
use crate::gemini::GeminiClient;
use crate::i18n::{Language, Localizer};
use crate::views::{
    ChatBot, DataSection, EconomySection, EducationSection, Footer, GallerySection, Hero,
    MedicineSection, NavBar, NewsTicker, View,
};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

/// The whole site: every section plus the chat widget and music control.
pub struct Page {
    i18n: Arc<Localizer>,
    language: watch::Receiver<Language>,
    audio: AmbientPlayer<TracingSink>,
    pub nav: NavBar,
    pub hero: Hero,
    pub news: NewsTicker,
    pub economy: EconomySection,
    pub education: EducationSection,
    pub medicine: MedicineSection,
    pub data: DataSection,
    pub gallery: GallerySection,
    pub footer: Footer,
    pub chat: ChatBot,
}

impl Page {
    pub fn new(i18n: Arc<Localizer>) -> Self {
        Self {
            language: i18n.subscribe(),
            audio: AmbientPlayer::tracing(),
            nav: NavBar,
            hero: Hero,
            news: NewsTicker,
            economy: EconomySection::default(),
            education: EducationSection::default(),
            medicine: MedicineSection::new(&i18n),
            data: DataSection::default(),
            gallery: GallerySection::default(),
            footer: Footer,
            chat: ChatBot::new(&i18n),
            i18n,
        }
    }

    pub fn localizer(&self) -> &Localizer {
        &self.i18n
    }

    /// Switch language from the navbar and apply it right away.
    pub fn select_language(&mut self, language: Language) {
        self.nav.select_language(&self.i18n, language);
        self.sync_language();
    }

    /// Apply a language change made through any handle of the localizer.
    ///
    /// Returns true if there was a pending change.
    pub fn sync_language(&mut self) -> bool {
        if !self.language.has_changed().unwrap_or(false) {
            return false;
        }

        let language = *self.language.borrow_and_update();
        info!("Language switched to {}", language.name());
        self.medicine.on_language_change(&self.i18n);
        self.chat.on_language_change(&self.i18n);
        true
    }

    pub async fn research(&mut self, client: &GeminiClient) {
        self.medicine.research(client, &self.i18n).await;
    }

    pub async fn generate_image(&mut self, client: &GeminiClient) {
        self.gallery.generate(client, &self.i18n).await;
    }

    pub async fn send_chat(&mut self, client: &GeminiClient, input: &str) {
        self.chat.send(client, &self.i18n, input).await;
    }

    pub fn is_music_playing(&self) -> bool {
        self.audio.is_playing()
    }

    /// Play or pause the ambient music. Must be called inside a tokio runtime.
    pub fn toggle_music(&mut self) -> bool {
        self.audio.toggle()
    }

    pub fn render(&self) -> String {
        let views: [&dyn View; 10] = [
            &self.nav,
            &self.hero,
            &self.news,
            &self.economy,
            &self.education,
            &self.medicine,
            &self.data,
            &self.gallery,
            &self.footer,
            &self.chat,
        ];

        views
            .iter()
            .map(|view| view.render(&self.i18n))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        Page::new(Arc::new(Localizer::builtin().unwrap()))
    }

    #[test]
    fn test_render_has_no_unresolved_paths() {
        let page = page();
        let text = page.render();

        assert!(text.starts_with("AI IMPACT"));
        assert_eq!(page.localizer().metrics().missing, 0);
        assert_eq!(page.localizer().metrics().not_leaf, 0);
    }

    #[test]
    fn test_select_language_resyncs_stateful_views() {
        let mut page = page();
        page.select_language(Language::Russian);

        assert_eq!(page.medicine.query(), "Последние прорывы ИИ в медицине");
        assert!(page.chat.messages()[0].text.starts_with("Привет!"));
        assert!(page.render().contains("Экономика (#economy)"));
    }

    #[test]
    fn test_sync_language_sees_external_switch() {
        let mut page = page();
        assert!(!page.sync_language());

        page.localizer().set_language(Language::Kazakh);
        assert!(page.sync_language());
        assert!(!page.sync_language());

        // Re-selecting the current language is not a change.
        page.localizer().set_language(Language::Kazakh);
        assert!(!page.sync_language());
    }

    #[tokio::test]
    async fn test_music_toggle() {
        let mut page = page();
        assert!(!page.is_music_playing());

        assert!(page.toggle_music());
        assert!(page.is_music_playing());

        assert!(!page.toggle_music());
        assert!(!page.is_music_playing());
    }
}
