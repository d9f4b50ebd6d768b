//! Presentational units of the page.
//!
//! Views hold only their own interaction state (sort order, slider position,
//! in-flight flags). Every string they display comes from the `Localizer`
//! at render time, so a language switch shows up on the next render without
//! any view being told about it. The few views that derive state from the
//! language (the chat welcome message, the default research query) are
//! re-synced by `Page::sync_language`.

mod chat;
mod economy;
mod gallery;
mod medicine;
mod nav;
mod page;
mod sections;

pub use chat::ChatBot;
pub use economy::{EconomySection, SectorRow, SortDirection, SortKey, SortState, Trend};
pub use gallery::{GallerySection, DEFAULT_IMAGE_PROMPT};
pub use medicine::{MedicineSection, ResearchState};
pub use nav::{LanguageButton, NavBar, NAV_LINKS};
pub use page::Page;
pub use sections::{
    ChartType, DataSection, EducationSection, Footer, Hero, MarketShare, Metric, NewsTicker,
    TimelineEvent,
};

use crate::i18n::Localizer;

/// A unit of the page that renders itself as plain text.
pub trait View {
    /// Render in the localizer's current language.
    fn render(&self, i18n: &Localizer) -> String;
}
