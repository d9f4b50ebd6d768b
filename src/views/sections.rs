//! Mostly static sections: hero, news ticker, education, data dashboard and
//! footer.

use crate::i18n::Localizer;
use crate::views::View;

// ==================== Hero ====================

#[derive(Debug, Default)]
pub struct Hero;

impl View for Hero {
    fn render(&self, i18n: &Localizer) -> String {
        [
            format!("# {}", i18n.t("hero.title")),
            i18n.t("hero.subtitle").to_string(),
            format!(
                "[{}](#economy)  [{}](#medicine)",
                i18n.t("hero.readAnalytics"),
                i18n.t("hero.launchAgent")
            ),
        ]
        .join("\n")
    }
}

// ==================== News Ticker ====================

#[derive(Debug, Default)]
pub struct NewsTicker;

impl View for NewsTicker {
    fn render(&self, i18n: &Localizer) -> String {
        format!("[{}] {}", i18n.t("news.label"), i18n.t("news.text"))
    }
}

// ==================== Education ====================

pub const DEFAULT_SLIDER_POSITION: u8 = 50;

/// Before/after comparison of a traditional and an AI-assisted classroom.
#[derive(Debug)]
pub struct EducationSection {
    slider: u8,
}

impl Default for EducationSection {
    fn default() -> Self {
        Self {
            slider: DEFAULT_SLIDER_POSITION,
        }
    }
}

impl EducationSection {
    /// Share of the traditional image that is visible, 0-100.
    pub fn slider(&self) -> u8 {
        self.slider
    }

    /// Move the slider; values outside 0-100 are clamped.
    pub fn set_slider(&mut self, value: i32) {
        self.slider = value.clamp(0, 100) as u8;
    }
}

impl View for EducationSection {
    fn render(&self, i18n: &Localizer) -> String {
        [
            format!("## {}", i18n.t("education.title")),
            i18n.t("education.subtitle").to_string(),
            format!(
                "{} {}% | {} {}%",
                i18n.t("education.slider.traditional"),
                self.slider,
                i18n.t("education.slider.ai"),
                100 - self.slider
            ),
            format!("### {}", i18n.t("education.demo.title")),
            format!("> {}", i18n.t("education.demo.student")),
            format!("> {}", i18n.t("education.demo.aiResponse")),
            format!("> ({})", i18n.t("education.demo.graph")),
            i18n.t("education.demo.desc").to_string(),
            format!("40% {}", i18n.t("education.stats.grading")),
            format!("3.5x {}", i18n.t("education.stats.engagement")),
        ]
        .join("\n")
    }
}

// ==================== Data Dashboard ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartType {
    #[default]
    Bar,
    Donut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketShare {
    pub name: &'static str,
    /// Percent of the global market
    pub value: u8,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: String,
    pub value: &'static str,
    pub change: &'static str,
    pub positive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEvent {
    pub year: &'static str,
    pub title: String,
    pub description: String,
}

const MARKET_SHARE: [(&str, u8, &str); 4] = [
    ("US", 40, "#3B82F6"),
    ("China", 35, "#EF4444"),
    ("EU", 15, "#10B981"),
    ("Other", 10, "#F59E0B"),
];

const METRICS: [(&str, &str, &str); 4] = [
    ("data.marketVal", "$407B", "+18%"),
    ("data.CAGR", "37.3%", "+2.1%"),
    ("data.adoption", "72%", "+15%"),
    ("data.efficiency", "40%", "Optimization"),
];

const TIMELINE: [(&str, &str, &str); 4] = [
    ("1950", "data.events.turing", "data.events.turingDesc"),
    ("1997", "data.events.deepBlue", "data.events.deepBlueDesc"),
    ("2022", "data.events.generative", "data.events.generativeDesc"),
    ("2030", "data.events.agi", "data.events.agiDesc"),
];

/// Market dashboard with a bar/donut toggle, key metrics and a timeline.
#[derive(Debug, Default)]
pub struct DataSection {
    chart: ChartType,
    hovered: Option<usize>,
}

impl DataSection {
    pub fn chart_type(&self) -> ChartType {
        self.chart
    }

    pub fn set_chart_type(&mut self, chart: ChartType) {
        self.chart = chart;
        self.hovered = None;
    }

    pub fn market_share(&self) -> Vec<MarketShare> {
        MARKET_SHARE
            .iter()
            .map(|(name, value, color)| MarketShare {
                name: *name,
                value: *value,
                color: *color,
            })
            .collect()
    }

    /// Hover a donut segment by region name; unknown names clear the hover.
    pub fn hover(&mut self, name: Option<&str>) {
        self.hovered = name.and_then(|n| MARKET_SHARE.iter().position(|(region, _, _)| *region == n));
    }

    /// Text in the middle of the donut: value and caption.
    pub fn donut_center(&self, i18n: &Localizer) -> (String, String) {
        match self.hovered.map(|i| MARKET_SHARE[i]) {
            Some((name, value, _)) => (format!("{}%", value), name.to_string()),
            None => ("100%".to_string(), i18n.t("data.total").to_string()),
        }
    }

    pub fn metrics(&self, i18n: &Localizer) -> Vec<Metric> {
        METRICS
            .iter()
            .map(|(path, value, change)| Metric {
                label: i18n.t(path).to_string(),
                value: *value,
                change: *change,
                positive: true,
            })
            .collect()
    }

    pub fn timeline(&self, i18n: &Localizer) -> Vec<TimelineEvent> {
        TIMELINE
            .iter()
            .map(|(year, title, desc)| TimelineEvent {
                year: *year,
                title: i18n.t(title).to_string(),
                description: i18n.t(desc).to_string(),
            })
            .collect()
    }
}

impl View for DataSection {
    fn render(&self, i18n: &Localizer) -> String {
        let mut lines = vec![
            format!("## {}", i18n.t("data.title")),
            i18n.t("data.subtitle").to_string(),
        ];

        let (bar, donut) = match self.chart {
            ChartType::Bar => (format!("[{}]", i18n.t("data.barChart")), i18n.t("data.donutChart").to_string()),
            ChartType::Donut => (i18n.t("data.barChart").to_string(), format!("[{}]", i18n.t("data.donutChart"))),
        };
        lines.push(format!("### {} {} {}", i18n.t("data.marketShare"), bar, donut));

        match self.chart {
            ChartType::Bar => {
                for share in self.market_share() {
                    lines.push(format!(
                        "{:<6} {} {}%",
                        share.name,
                        "█".repeat(share.value as usize / 5),
                        share.value
                    ));
                }
            }
            ChartType::Donut => {
                let (value, caption) = self.donut_center(i18n);
                lines.push(format!("({} {})", value, caption));
                let legend = self
                    .market_share()
                    .iter()
                    .map(|s| format!("{} {}%", s.name, s.value))
                    .collect::<Vec<_>>()
                    .join(", ");
                lines.push(legend);
            }
        }

        lines.push(format!("### {}", i18n.t("data.keyMetrics")));
        for metric in self.metrics(i18n) {
            lines.push(format!("{}: {} ({})", metric.label, metric.value, metric.change));
        }

        lines.push(format!("### {}", i18n.t("data.timeline")));
        for event in self.timeline(i18n) {
            lines.push(format!("{} {}: {}", event.year, event.title, event.description));
        }

        lines.join("\n")
    }
}

// ==================== Footer ====================

const TOOLS: [&str; 6] = [
    "Rust + Tokio",
    "reqwest",
    "Gemini API (Agent/Chat)",
    "Google Search Grounding",
    "Gemini Flash Image",
    "Sortable tables",
];

#[derive(Debug, Default)]
pub struct Footer;

impl View for Footer {
    fn render(&self, i18n: &Localizer) -> String {
        let mut lines = vec![
            format!("## {}", i18n.t("footer.conclusionTitle")),
            i18n.t("footer.conclusionText").to_string(),
            i18n.t("footer.copyright").to_string(),
            format!("## {}", i18n.t("footer.toolsTitle")),
        ];
        lines.extend(TOOLS.iter().map(|tool| format!("✅ {}", tool)));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn i18n() -> Localizer {
        Localizer::builtin().unwrap()
    }

    #[test]
    fn test_hero_in_kazakh() {
        let i18n = i18n();
        i18n.set_language(Language::Kazakh);

        let text = Hero.render(&i18n);
        assert!(text.starts_with("# Жасанды интеллекттің"));
        assert!(!text.contains("hero."));
    }

    #[test]
    fn test_news_ticker() {
        let text = NewsTicker.render(&i18n());
        assert!(text.starts_with("[Breaking] "));
    }

    #[test]
    fn test_slider_clamps() {
        let mut section = EducationSection::default();
        assert_eq!(section.slider(), 50);

        section.set_slider(130);
        assert_eq!(section.slider(), 100);
        section.set_slider(-5);
        assert_eq!(section.slider(), 0);
        section.set_slider(30);

        let text = section.render(&i18n());
        assert!(text.contains("Traditional 30% | AI-Powered 70%"));
    }

    #[test]
    fn test_market_share_sums_to_hundred() {
        let total: u32 = DataSection::default()
            .market_share()
            .iter()
            .map(|s| s.value as u32)
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_donut_hover() {
        let i18n = i18n();
        let mut section = DataSection::default();
        section.set_chart_type(ChartType::Donut);

        assert_eq!(section.donut_center(&i18n), ("100%".to_string(), "Total".to_string()));

        section.hover(Some("China"));
        assert_eq!(section.donut_center(&i18n), ("35%".to_string(), "China".to_string()));

        section.hover(Some("Mars"));
        assert_eq!(section.donut_center(&i18n).0, "100%");
    }

    #[test]
    fn test_switching_chart_clears_hover() {
        let i18n = i18n();
        let mut section = DataSection::default();
        section.hover(Some("EU"));
        section.set_chart_type(ChartType::Donut);

        assert_eq!(section.donut_center(&i18n).0, "100%");
    }

    #[test]
    fn test_data_render_is_fully_localized() {
        let i18n = i18n();
        i18n.set_language(Language::Russian);
        let mut section = DataSection::default();

        let bar = section.render(&i18n);
        assert!(bar.contains("[Столбцы]"));
        assert!(bar.contains("1950 Тест Тьюринга"));

        section.set_chart_type(ChartType::Donut);
        let donut = section.render(&i18n);
        assert!(donut.contains("[Кольцо]"));
        assert!(donut.contains("(100% Всего)"));

        assert_eq!(i18n.metrics().missing, 0);
    }

    #[test]
    fn test_footer_lists_tools() {
        let text = Footer.render(&i18n());
        assert_eq!(text.matches("✅").count(), 6);
        assert!(text.contains("## Conclusion"));
    }
}
