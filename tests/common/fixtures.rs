//! Test fixtures: PNGs encoded in memory.

/// Encode an RGBA8 buffer as PNG
pub fn rgba_png(width: u32, height: u32, rgba: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(rgba).unwrap();
    }
    buf
}

/// A PNG where every pixel is `rgba`
pub fn solid_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    rgba_png(width, height, &rgba.repeat((width * height) as usize))
}

/// A PNG built by evaluating `f` for every pixel
pub fn png_from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> Vec<u8> {
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            rgba.extend_from_slice(&f(x, y));
        }
    }
    rgba_png(width, height, &rgba)
}

/// Colors from the built-in catalogue
pub mod beads {
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
    pub const BLACK: [u8; 4] = [0, 0, 0, 255];
    /// D03 Golden Yellow
    pub const GOLDEN: [u8; 4] = [255, 215, 0, 255];
    pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];
}

/// A bead catalogue YAML with white first and red second
pub const RED_WHITE_CATALOGUE: &str = "\
- code: W
  name: White
  hex: \"#FFFFFF\"
- code: R
  name: Red
  hex: \"#FF0000\"
";
