pub mod catalogue;
pub mod config;

pub use catalogue::{load_catalogue, parse_catalogue, CatalogueError};
pub use config::{AppConfig, GridConfig, PreviewConfig, StylizeConfig};
