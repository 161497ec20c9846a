use bead_quantize::{BeadGrid, GridQuantizer, Palette, QuantizeError, UsageAggregate};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use utoipa::ToSchema;

use crate::decode::{decode_png, DecodeError};
use crate::models::GridConfig;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Grid size {value} out of range ({min}..={max})")]
    InvalidGridSize { value: u32, min: u32, max: u32 },

    #[error("Image too large: {width}x{height} (max {max}x{max})")]
    ImageTooLarge { width: u32, height: u32, max: u32 },

    #[error(transparent)]
    Quantize(#[from] QuantizeError),

    #[error("Pattern task failed: {0}")]
    Task(String),
}

impl From<DecodeError> for PatternError {
    fn from(e: DecodeError) -> Self {
        match e {
            DecodeError::TooLarge { width, height, max } => {
                PatternError::ImageTooLarge { width, height, max }
            }
            other => PatternError::Quantize(other.into()),
        }
    }
}

/// A finished pattern: the bead grid and its bill of materials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeadPattern {
    pub grid: BeadGrid,
    pub usage: UsageAggregate,
}

/// One line of the bill of materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UsageRow {
    /// Bead code
    pub id: String,
    /// Human-readable color name
    pub name: String,
    /// Color as `#RRGGBB`
    pub hex: String,
    /// Number of beads of this color
    pub count: usize,
}

/// Serializable form of a [`BeadPattern`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PatternReport {
    /// Cells per side
    pub grid_size: u32,
    /// Bead codes, one inner list per row, top to bottom
    pub grid: Vec<Vec<String>>,
    /// Colors used, most frequent first
    pub usage: Vec<UsageRow>,
    /// Total number of beads (`grid_size²`)
    pub total: usize,
}

impl BeadPattern {
    pub fn report(&self) -> PatternReport {
        PatternReport {
            grid_size: self.grid.size(),
            grid: self
                .grid
                .ids()
                .into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
            usage: self
                .usage
                .by_count()
                .into_iter()
                .map(|item| UsageRow {
                    id: item.entry.id.clone(),
                    name: item.entry.name.clone(),
                    hex: item.entry.rgb.to_hex(),
                    count: item.count,
                })
                .collect(),
            total: self.usage.total(),
        }
    }

    /// Bill of materials as CSV, most frequent color first.
    pub fn usage_csv(&self) -> String {
        let mut csv = String::from("id,name,hex,count\n");
        for item in self.usage.by_count() {
            csv.push_str(&format!(
                "{},{},{},{}\n",
                csv_field(&item.entry.id),
                csv_field(&item.entry.name),
                item.entry.rgb.to_hex(),
                item.count
            ));
        }
        csv
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Turns uploaded images into bead patterns.
///
/// Owns the active palette and the accepted grid-size range. The quantizer
/// itself never clamps grid sizes; the range is enforced here.
pub struct BeadService {
    quantizer: GridQuantizer,
    limits: GridConfig,
}

impl BeadService {
    pub fn new(palette: Palette, limits: GridConfig) -> Self {
        Self {
            quantizer: GridQuantizer::new(palette).parallel(true),
            limits,
        }
    }

    pub fn palette(&self) -> &Palette {
        self.quantizer.palette()
    }

    pub fn limits(&self) -> GridConfig {
        self.limits
    }

    /// Resolve an optional grid size against the configured default and range
    pub fn resolve_grid_size(&self, requested: Option<u32>) -> Result<u32, PatternError> {
        let value = requested.unwrap_or(self.limits.default_size);
        if !self.limits.contains(value) {
            return Err(PatternError::InvalidGridSize {
                value,
                min: self.limits.min_size,
                max: self.limits.max_size,
            });
        }
        Ok(value)
    }

    /// Decode a PNG and quantize it.
    pub fn generate(
        &self,
        png_bytes: &[u8],
        grid_size: Option<u32>,
    ) -> Result<BeadPattern, PatternError> {
        let grid_size = self.resolve_grid_size(grid_size)?;
        let started = Instant::now();

        let image = decode_png(png_bytes)?;
        let (grid, usage) = self.quantizer.quantize(&image, grid_size)?;

        tracing::info!(
            grid_size,
            colors = usage.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Generated bead pattern"
        );

        Ok(BeadPattern { grid, usage })
    }

    /// [`generate`](Self::generate) on the blocking thread pool.
    ///
    /// Decoding and quantizing are CPU-bound and must not stall the async
    /// runtime.
    pub async fn generate_async(
        self: &Arc<Self>,
        png_bytes: Vec<u8>,
        grid_size: Option<u32>,
    ) -> Result<BeadPattern, PatternError> {
        let service = Arc::clone(self);
        tokio::task::spawn_blocking(move || service.generate(&png_bytes, grid_size))
            .await
            .map_err(|e| PatternError::Task(e.to_string()))?
    }
}
