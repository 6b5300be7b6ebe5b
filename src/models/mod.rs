pub mod coordinates;
pub mod propulsion;
pub mod report;
pub mod route;
pub mod trip;

pub use coordinates::Coordinates;
pub use propulsion::{
    DieselParameters, ElectricParameters, HybridParameters, PropulsionMode, PropulsionParameters,
};
pub use report::{Dataset, ModeFigures, ReportRow, COLUMN_COUNT, DATASET_COLUMNS};
pub use route::{DirectionsResult, RouteCandidate, RouteRecord};
pub use trip::{EnergyPrices, TripContext};
