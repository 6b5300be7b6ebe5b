use crate::models::PropulsionMode;
use serde::{Deserialize, Serialize};

pub const COLUMN_COUNT: usize = 16;

/// Persisted column order. The header is written exactly once, on dataset creation.
pub const DATASET_COLUMNS: [&str; COLUMN_COUNT] = [
    "Rota",
    "Origem",
    "Destino",
    "Distância (km)",
    "Tempo (h)",
    "Preço do Diesel (R$)",
    "Peso (Ton)",
    "Emissão de CO2 Diesel (Kg)",
    "Emissão de CO2 Híbrido (kg)",
    "Emissão de CO2 Elétrico (kg)",
    "Consumo Diesel (litros)",
    "Consumo Híbrido (litros)",
    "Consumo Elétrico (kWh)",
    "Custo do Combustível Diesel (R$)",
    "Custo do Combustível Híbrido (R$)",
    "Custo do Combustível Elétrico (R$)",
];

/// Consumption, cost and CO2 figures for one propulsion mode
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModeFigures {
    /// Liters for diesel/hybrid, kWh for electric
    pub consumption: f64,
    /// R$
    pub cost: f64,
    /// kg CO2
    pub emission_kg: f64,
}

/// One route of one query, joined with its trip data and derived metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub route: String,
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
    pub duration: String,
    pub diesel_price: f64,
    pub weight_tonnes: f64,
    pub diesel: ModeFigures,
    pub hybrid: ModeFigures,
    pub electric: ModeFigures,
}

impl ReportRow {
    pub fn figures(&self, mode: PropulsionMode) -> &ModeFigures {
        match mode {
            PropulsionMode::Diesel => &self.diesel,
            PropulsionMode::Hybrid => &self.hybrid,
            PropulsionMode::Electric => &self.electric,
        }
    }
}

/// All persisted report rows, in append order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<ReportRow>,
}

impl Dataset {
    pub fn empty() -> Self {
        Dataset {
            columns: DATASET_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_rows(rows: Vec<ReportRow>) -> Self {
        Dataset {
            rows,
            ..Self::empty()
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// Response types for API endpoints

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub rows: Vec<ReportRow>,
    /// Rows appended to the dataset by this request
    pub persisted: usize,
}
