//! Test fixtures and constants.

/// Configuration with two overlapping buckets and one that never matches
pub const COLORS_TOML: &str = r#"
[[colors]]
name = "red"
red = { start = 200, end = 255 }
green = { start = 0, end = 50 }
blue = { start = 0, end = 50 }

[[colors]]
name = "bright"
red = { start = 128, end = 255 }
green = { start = 0, end = 255 }
blue = { start = 0, end = 255 }

[[colors]]
name = "inverted"
red = { start = 255, end = 0 }
green = { start = 0, end = 255 }
blue = { start = 0, end = 255 }
"#;

/// Pixel values used by the fixtures
pub mod pixels {
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const PINK: [u8; 3] = [240, 128, 128];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const BLACK: [u8; 3] = [0, 0, 0];
}

/// Expected header for [`COLORS_TOML`]
pub fn header() -> Vec<String> {
    ["filename", "red", "bright", "inverted"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
