use crate::i18n::Localizer;
use crate::views::View;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Stable,
    Down,
}

impl Trend {
    fn label_path(&self) -> &'static str {
        match self {
            Trend::Up => "economy.table.trendUp",
            Trend::Stable => "economy.table.trendStable",
            Trend::Down => "economy.table.trendDown",
        }
    }
}

/// One row of the sector table, with strings already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorRow {
    pub sector: String,
    pub impact_score: u8,
    pub description: String,
    pub trend: Trend,
}

/// Columns the table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Sector,
    ImpactScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

// (sector path, description path, impact score, trend), in display order
const SECTORS: [(&str, &str, u8, Trend); 5] = [
    ("economy.table.sectors.finance", "economy.table.sectors.financeDesc", 85, Trend::Up),
    ("economy.table.sectors.manufacturing", "economy.table.sectors.manufacturingDesc", 60, Trend::Stable),
    ("economy.table.sectors.retail", "economy.table.sectors.retailDesc", 78, Trend::Up),
    ("economy.table.sectors.logistics", "economy.table.sectors.logisticsDesc", 88, Trend::Up),
    ("economy.table.sectors.customerService", "economy.table.sectors.customerServiceDesc", 92, Trend::Up),
];

const STATS: [(&str, &str); 3] = [
    ("$15T", "economy.stats.gdp"),
    ("85M", "economy.stats.displaced"),
    ("97M", "economy.stats.created"),
];

/// Economy section: headline stats and a sortable sector table.
#[derive(Debug, Default)]
pub struct EconomySection {
    sort: Option<SortState>,
}

impl EconomySection {
    pub fn sort_state(&self) -> Option<SortState> {
        self.sort
    }

    /// Handle a click on a column header.
    ///
    /// A new column sorts ascending; clicking the ascending column again
    /// flips it to descending, and clicking a descending column goes back
    /// to ascending.
    pub fn request_sort(&mut self, key: SortKey) {
        let direction = match self.sort {
            Some(state) if state.key == key && state.direction == SortDirection::Ascending => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortState { key, direction });
    }

    /// Rows in the current language, in the current sort order.
    ///
    /// Rows are rebuilt from the catalog on every call so sorting by sector
    /// name follows the language on screen.
    pub fn rows(&self, i18n: &Localizer) -> Vec<SectorRow> {
        let mut rows: Vec<SectorRow> = SECTORS
            .iter()
            .map(|(sector, description, score, trend)| SectorRow {
                sector: i18n.t(sector).to_string(),
                impact_score: *score,
                description: i18n.t(description).to_string(),
                trend: *trend,
            })
            .collect();

        if let Some(state) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = compare_rows(a, b, state.key);
                match state.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        rows
    }

    fn header(&self, i18n: &Localizer, key: SortKey, path: &str) -> String {
        match self.sort {
            Some(state) if state.key == key => format!("{} {}", i18n.t(path), state.direction.arrow()),
            _ => i18n.t(path).to_string(),
        }
    }
}

fn compare_rows(a: &SectorRow, b: &SectorRow, key: SortKey) -> Ordering {
    match key {
        SortKey::Sector => a.sector.cmp(&b.sector),
        SortKey::ImpactScore => a.impact_score.cmp(&b.impact_score),
    }
}

impl View for EconomySection {
    fn render(&self, i18n: &Localizer) -> String {
        let mut lines = vec![
            format!("## {}", i18n.t("economy.title")),
            format!("### {}", i18n.t("economy.videoTitle")),
            i18n.t("economy.videoDesc").to_string(),
            STATS
                .iter()
                .map(|(value, path)| format!("{} {}", value, i18n.t(path)))
                .collect::<Vec<_>>()
                .join(" | "),
            format!(
                "### {} ({})",
                i18n.t("economy.table.title"),
                i18n.t("economy.table.liveData")
            ),
            format!(
                "{} | {} | {}",
                self.header(i18n, SortKey::Sector, "economy.table.colSector"),
                self.header(i18n, SortKey::ImpactScore, "economy.table.colImpact"),
                i18n.t("economy.table.colTrend")
            ),
        ];

        for row in self.rows(i18n) {
            lines.push(format!(
                "{} ({}) | {} | {}",
                row.sector,
                row.description,
                row.impact_score,
                i18n.t(row.trend.label_path())
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn scores(section: &EconomySection, i18n: &Localizer) -> Vec<u8> {
        section.rows(i18n).iter().map(|r| r.impact_score).collect()
    }

    #[test]
    fn test_unsorted_keeps_display_order() {
        let i18n = Localizer::builtin().unwrap();
        let section = EconomySection::default();

        assert_eq!(section.sort_state(), None);
        assert_eq!(scores(&section, &i18n), vec![85, 60, 78, 88, 92]);
    }

    #[test]
    fn test_sort_toggles_between_directions() {
        let i18n = Localizer::builtin().unwrap();
        let mut section = EconomySection::default();

        section.request_sort(SortKey::ImpactScore);
        assert_eq!(scores(&section, &i18n), vec![60, 78, 85, 88, 92]);

        section.request_sort(SortKey::ImpactScore);
        assert_eq!(scores(&section, &i18n), vec![92, 88, 85, 78, 60]);

        section.request_sort(SortKey::ImpactScore);
        assert_eq!(
            section.sort_state().map(|s| s.direction),
            Some(SortDirection::Ascending)
        );
    }

    #[test]
    fn test_new_key_resets_to_ascending() {
        let i18n = Localizer::builtin().unwrap();
        let mut section = EconomySection::default();

        section.request_sort(SortKey::ImpactScore);
        section.request_sort(SortKey::ImpactScore);
        section.request_sort(SortKey::Sector);

        assert_eq!(
            section.sort_state(),
            Some(SortState {
                key: SortKey::Sector,
                direction: SortDirection::Ascending
            })
        );
        let sectors: Vec<String> = section.rows(&i18n).into_iter().map(|r| r.sector).collect();
        assert_eq!(
            sectors,
            vec!["Customer Service", "Finance", "Logistics", "Manufacturing", "Retail"]
        );
    }

    #[test]
    fn test_sector_sort_follows_language() {
        let i18n = Localizer::builtin().unwrap();
        let mut section = EconomySection::default();
        section.request_sort(SortKey::Sector);

        i18n.set_language(Language::Russian);
        let first = section.rows(&i18n).remove(0);
        assert_eq!(first.sector, "Логистика");
    }

    #[test]
    fn test_render_marks_sorted_column() {
        let i18n = Localizer::builtin().unwrap();
        let mut section = EconomySection::default();

        assert!(section.render(&i18n).contains("Sector | Impact | Trend"));

        section.request_sort(SortKey::ImpactScore);
        section.request_sort(SortKey::ImpactScore);
        let text = section.render(&i18n);
        assert!(text.contains("Sector | Impact ↓ | Trend"));
        assert!(text.contains("Manufacturing (Predictive maintenance and robotic assembly lines.) | 60 | – Stable"));
    }
}
