//! Aggregate views over the persisted dataset.

use serde::{Deserialize, Serialize};

use crate::models::{PropulsionMode, ReportRow};
use crate::services::fuel_model::round2;

/// Totals and means for one propulsion mode across all rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeSummary {
    pub mode: PropulsionMode,
    pub total_consumption: f64,
    pub mean_consumption: f64,
    pub total_cost: f64,
    pub mean_cost: f64,
    pub total_emission_kg: f64,
    pub mean_emission_kg: f64,
    /// Emission reduction relative to diesel, in percent (0 for diesel itself)
    pub emission_savings_vs_diesel_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub total_distance_km: f64,
    pub modes: Vec<ModeSummary>,
    pub lowest_emission_mode: Option<PropulsionMode>,
}

impl DatasetSummary {
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        let n = rows.len() as f64;
        let mean = |total: f64| if rows.is_empty() { 0.0 } else { total / n };

        let diesel_emission: f64 = rows.iter().map(|r| r.diesel.emission_kg).sum();

        let modes: Vec<ModeSummary> = PropulsionMode::ALL
            .iter()
            .map(|&mode| {
                let total_consumption: f64 = rows.iter().map(|r| r.figures(mode).consumption).sum();
                let total_cost: f64 = rows.iter().map(|r| r.figures(mode).cost).sum();
                let total_emission: f64 = rows.iter().map(|r| r.figures(mode).emission_kg).sum();

                let savings = if diesel_emission > 0.0 {
                    (1.0 - total_emission / diesel_emission) * 100.0
                } else {
                    0.0
                };

                ModeSummary {
                    mode,
                    total_consumption: round2(total_consumption),
                    mean_consumption: round2(mean(total_consumption)),
                    total_cost: round2(total_cost),
                    mean_cost: round2(mean(total_cost)),
                    total_emission_kg: round2(total_emission),
                    mean_emission_kg: round2(mean(total_emission)),
                    emission_savings_vs_diesel_pct: round2(savings),
                }
            })
            .collect();

        let lowest_emission_mode = if rows.is_empty() {
            None
        } else {
            modes
                .iter()
                .min_by(|a, b| a.mean_emission_kg.total_cmp(&b.mean_emission_kg))
                .map(|m| m.mode)
        };

        DatasetSummary {
            rows: rows.len(),
            total_distance_km: round2(rows.iter().map(|r| r.distance_km).sum()),
            modes,
            lowest_emission_mode,
        }
    }

    pub fn mode(&self, mode: PropulsionMode) -> Option<&ModeSummary> {
        self.modes.iter().find(|m| m.mode == mode)
    }
}

/// Format the summary for terminal display
pub fn format_summary(summary: &DatasetSummary) -> String {
    let mut out = String::from("=== Dataset Summary ===\n");

    out.push_str(&format!(
        "rows: {}   total distance: {:.2} km\n",
        summary.rows, summary.total_distance_km
    ));

    for m in &summary.modes {
        out.push_str(&format!(
            "\n{}\n  consumption: {:.2} {} (mean {:.2})\n  cost:        R$ {:.2} (mean {:.2})\n  CO2:         {:.2} kg (mean {:.2}, {:.1}% vs diesel)\n",
            m.mode,
            m.total_consumption,
            m.mode.consumption_unit(),
            m.mean_consumption,
            m.total_cost,
            m.mean_cost,
            m.total_emission_kg,
            m.mean_emission_kg,
            m.emission_savings_vs_diesel_pct,
        ));
    }

    if let Some(best) = summary.lowest_emission_mode {
        out.push_str(&format!("\nlowest emission: {}\n", best));
    }

    out
}
