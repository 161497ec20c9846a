//! Pattern previews: an indexed PNG with one colored square per bead, and a
//! plain-text chart of bead codes.

use bead_quantize::{BeadGrid, Rgb};
use std::fmt::Write as _;
use std::io::Cursor;

use crate::error::RenderError;

/// Color of the 1-px separators between cells.
pub const GRID_LINE_COLOR: Rgb = Rgb::new(0x80, 0x80, 0x80);

/// Largest preview width or height in pixels.
pub const MAX_PREVIEW_DIMENSION: u32 = 8192;

const MAX_PLTE_ENTRIES: usize = 256;

/// Text color that stays readable on top of `background`.
///
/// Light beads (relative luminance above one half) get dark text, everything
/// else gets white.
pub fn label_color(background: Rgb) -> Rgb {
    if background.luminance() > 0.5 {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

/// Pixel size of a preview: `size * cell`, plus one separator line between
/// and around cells when `grid_lines` is set.
pub fn preview_dimensions(grid_size: u32, cell_size: u32, grid_lines: bool) -> u32 {
    let cells = grid_size.saturating_mul(cell_size);
    if grid_lines {
        cells.saturating_add(grid_size + 1)
    } else {
        cells
    }
}

/// Render `grid` as an indexed PNG.
///
/// `PLTE` holds the bead palette in order, followed by [`GRID_LINE_COLOR`]
/// when grid lines are drawn. The result is re-compressed with oxipng.
pub fn render_preview_png(
    grid: &BeadGrid,
    cell_size: u32,
    grid_lines: bool,
) -> Result<Vec<u8>, RenderError> {
    if cell_size == 0 {
        return Err(RenderError::InvalidCellSize(cell_size));
    }

    let palette = grid.palette();
    let line_index = palette.len();
    let colors = palette.len() + usize::from(grid_lines);
    if colors > MAX_PLTE_ENTRIES {
        return Err(RenderError::TooManyColors {
            colors,
            max: MAX_PLTE_ENTRIES,
        });
    }

    let size = grid.size();
    let side = preview_dimensions(size, cell_size, grid_lines);
    if side > MAX_PREVIEW_DIMENSION {
        return Err(RenderError::PreviewTooLarge {
            side,
            max: MAX_PREVIEW_DIMENSION,
        });
    }
    let pitch = cell_size + u32::from(grid_lines);

    // Map each output column/row to a cell, or None for a separator line
    let axis: Vec<Option<u32>> = (0..side)
        .map(|p| {
            if grid_lines {
                if p % pitch == 0 {
                    None
                } else {
                    Some(p / pitch)
                }
            } else {
                Some(p / cell_size)
            }
        })
        .collect();

    let mut indices = Vec::with_capacity(side as usize * side as usize);
    for &row in &axis {
        for &col in &axis {
            let idx = match (row, col) {
                (Some(y), Some(x)) => grid.index(x, y),
                _ => line_index,
            };
            // colors <= 256, so every index fits a byte
            indices.push(idx as u8);
        }
    }

    let mut plte: Vec<u8> = palette.iter().flat_map(|e| e.rgb.to_bytes()).collect();
    if grid_lines {
        plte.extend_from_slice(&GRID_LINE_COLOR.to_bytes());
    }

    let (depth, bits) = match colors {
        0..=2 => (png::BitDepth::One, 1),
        3..=4 => (png::BitDepth::Two, 2),
        5..=16 => (png::BitDepth::Four, 4),
        _ => (png::BitDepth::Eight, 8),
    };
    let packed = if bits == 8 {
        indices
    } else {
        pack_nbits(&indices, side, bits)
    };

    let png_bytes = encode_indexed_png(side, side, depth, &plte, &packed)?;

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes);

    tracing::debug!(
        grid_size = size,
        cell_size,
        grid_lines,
        colors,
        bytes = optimized.len(),
        "Rendered preview"
    );

    Ok(optimized)
}

/// Bead codes laid out as rows, padded to the widest code.
///
/// With `ansi` set, every code is printed on its bead color using 24-bit
/// terminal escapes, with [`label_color`] for the text.
pub fn render_text(grid: &BeadGrid, ansi: bool) -> String {
    let width = grid
        .palette()
        .iter()
        .map(|e| e.id.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in grid.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|entry| {
                if ansi {
                    let bg = entry.rgb;
                    let fg = label_color(bg);
                    format!(
                        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m{:<width$}\x1b[0m",
                        bg.r, bg.g, bg.b, fg.r, fg.g, fg.b, entry.id
                    )
                } else {
                    format!("{:<width$}", entry.id)
                }
            })
            .collect();
        let line = cells.join(" ");
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

fn encode_indexed_png(
    width: u32,
    height: u32,
    bit_depth: png::BitDepth,
    plte: &[u8],
    packed: &[u8],
) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(packed)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack indices into 1, 2 or 4 bits per pixel, each row starting on a byte
/// boundary.
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * (indices.len() / width as usize));

    for row in indices.chunks(width as usize) {
        for chunk in row.chunks(pixels_per_byte) {
            let mut byte = 0u8;
            for (i, &idx) in chunk.iter().enumerate() {
                let shift = (8 - bits) - i as u8 * bits;
                byte |= (idx & mask) << shift;
            }
            packed.push(byte);
        }
    }

    packed
}
