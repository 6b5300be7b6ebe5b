//! Stable application-wide constants.
//!
//! Values here are structural invariants, model coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! Propulsion constants that are meant to be tuned per fleet live in
//! [`PropulsionParameters`](crate::models::PropulsionParameters) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Persistence ---

/// Default dataset file. Overridden by `DATASET_PATH`.
pub const DEFAULT_DATASET_PATH: &str = "dados_rotas.csv";

// --- Cache defaults ---

/// Default route cache TTL: 1 hour. Overridden by `ROUTE_CACHE_TTL`.
pub const DEFAULT_ROUTE_CACHE_TTL_SECONDS: u64 = 3_600;
/// Maximum entries for the in-memory route cache (LRU eviction).
pub const DEFAULT_MEMORY_CACHE_MAX_ENTRIES: u64 = 1_000;

// --- Route normalization ---

/// Every successful routing query is normalized to exactly this many routes.
/// Missing alternatives are filled by repeating the last one.
pub const NORMALIZED_ROUTE_COUNT: usize = 3;

pub const METERS_PER_KM: f64 = 1000.0;
pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_MINUTE: u64 = 60;

// --- Consumption model ---

/// Every tonne of cargo increases consumption by 5%, for all propulsion modes.
pub const WEIGHT_ADJUSTMENT_PER_TONNE: f64 = 0.05;

/// Default diesel truck efficiency (km per liter).
pub const DEFAULT_DIESEL_KM_PER_LITER: f64 = 3.0;
/// kg of CO2 per liter of diesel burned.
pub const DEFAULT_DIESEL_KG_CO2_PER_LITER: f64 = 2.7;

/// Default hybrid truck efficiency before the electric offset (km per liter).
pub const DEFAULT_HYBRID_KM_PER_LITER: f64 = 6.0;
/// Fraction by which the hybrid's usable combustion rate is scaled down.
pub const DEFAULT_HYBRID_ELECTRIC_OFFSET: f64 = 0.2;
/// kg of CO2 per liter burned by the hybrid.
pub const DEFAULT_HYBRID_KG_CO2_PER_LITER: f64 = 2.7;

/// Default electric truck consumption (kWh per km).
pub const DEFAULT_ELECTRIC_KWH_PER_KM: f64 = 1.0;
/// kg of CO2 per kWh drawn from the grid.
pub const DEFAULT_ELECTRIC_KG_CO2_PER_KWH: f64 = 0.1;
/// Default energy price (R$ per kWh).
pub const DEFAULT_ELECTRIC_PRICE_PER_KWH: f64 = 0.75;
