use crate::gemini::{GeminiClient, SearchSummary};
use crate::i18n::Localizer;
use crate::views::View;
use tracing::{error, info};

/// Outcome of the last research run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResearchState {
    #[default]
    Idle,
    Done(SearchSummary),
    /// Localized error text shown in place of a summary.
    Failed(String),
}

/// Medicine section with the web-grounded research agent.
#[derive(Debug)]
pub struct MedicineSection {
    query: String,
    loading: bool,
    state: ResearchState,
}

impl MedicineSection {
    pub fn new(i18n: &Localizer) -> Self {
        Self {
            query: i18n.t("medicine.agent.defaultQuery").to_string(),
            loading: false,
            state: ResearchState::Idle,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn state(&self) -> &ResearchState {
        &self.state
    }

    /// The query box holds a localized default, so it follows the language.
    pub fn on_language_change(&mut self, i18n: &Localizer) {
        self.query = i18n.t("medicine.agent.defaultQuery").to_string();
    }

    /// Run the agent on the current query. Blank queries are ignored.
    pub async fn research(&mut self, client: &GeminiClient, i18n: &Localizer) {
        let query = self.query.trim().to_string();
        if query.is_empty() {
            return;
        }

        self.loading = true;
        self.state = ResearchState::Idle;

        self.state = match client.search_summarize(&query).await {
            Ok(summary) => {
                info!(
                    "Research finished with {} sources",
                    summary.sources.len()
                );
                ResearchState::Done(summary)
            }
            Err(e) => {
                error!("Research request failed: {}", e);
                ResearchState::Failed(i18n.t("medicine.agent.error").to_string())
            }
        };
        self.loading = false;
    }

    fn button_label<'a>(&self, i18n: &'a Localizer) -> &'a str {
        if self.loading {
            i18n.t("medicine.agent.scanning")
        } else {
            i18n.t("medicine.agent.button")
        }
    }
}

impl View for MedicineSection {
    fn render(&self, i18n: &Localizer) -> String {
        let mut lines = vec![
            format!("## {}", i18n.t("medicine.title")),
            i18n.t("medicine.desc").to_string(),
            format!(
                "- {}: {}",
                i18n.t("medicine.diagnostics"),
                i18n.t("medicine.diagnosticsDesc")
            ),
            format!(
                "- {}: {}",
                i18n.t("medicine.genomics"),
                i18n.t("medicine.genomicsDesc")
            ),
            format!(
                "### {} ({})",
                i18n.t("medicine.agent.title"),
                i18n.t("medicine.agent.liveSearch")
            ),
            format!("> {} [{}]", self.query, self.button_label(i18n)),
        ];

        if self.loading {
            lines.push(i18n.t("medicine.agent.loading").to_string());
            return lines.join("\n");
        }

        match &self.state {
            ResearchState::Idle => lines.push(i18n.t("medicine.agent.noData").to_string()),
            ResearchState::Done(summary) => {
                lines.push(summary.text.clone());
                for source in &summary.sources {
                    lines.push(format!("- [{}]({})", source.title, source.uri));
                }
            }
            ResearchState::Failed(message) => lines.push(message.clone()),
        }

        lines.join("\n")
    }
}
