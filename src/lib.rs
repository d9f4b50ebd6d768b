//! Logic behind the AI Impact site: trilingual catalogs and the language
//! resolver, the page's views, the Gemini adapter and the ambient music
//! scheduler.

pub mod audio;
pub mod config;
pub mod gemini;
pub mod i18n;
pub mod views;
