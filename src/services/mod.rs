pub mod bead_service;
pub mod stylizer;

pub use bead_service::{BeadPattern, BeadService, PatternError, PatternReport, UsageRow};
pub use stylizer::{OpenAiStylizer, StylizeError, Stylizer};
