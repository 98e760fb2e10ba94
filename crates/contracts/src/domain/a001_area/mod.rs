pub mod aggregate;
pub mod catalog;

pub use aggregate::{Area, AreaId, Coordinates, SafetyLevel};
pub use catalog::{AreaCatalog, CatalogError, RANCHI_CATALOG};
