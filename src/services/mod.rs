pub mod fuel_model;
pub mod google_maps;
pub mod map;
pub mod report_builder;
pub mod route_normalizer;
pub mod routing;
