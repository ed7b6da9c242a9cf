//! Named burst presets and palettes.
//!
//! Presets are plain configs - callers tweak them with struct-update syntax,
//! or load their own from TOML via [`BurstConfig::from_toml_str`].

use fanfare_core::{BurstConfig, Color};

/// The stock celebration burst: the engine defaults.
#[must_use]
pub fn celebration() -> BurstConfig {
    BurstConfig::default()
}

/// A slow wide starburst: full-circle spread, floaty gravity.
#[must_use]
pub fn fireworks() -> BurstConfig {
    BurstConfig {
        particle_count: 150,
        spread: 360.0,
        start_velocity: 45.0,
        gravity: 0.6,
        decay: 0.94,
        ..BurstConfig::default()
    }
}

/// A tight upward cannon shot from the bottom of the viewport.
#[must_use]
pub fn cannon() -> BurstConfig {
    BurstConfig {
        particle_count: 80,
        spread: 30.0,
        angle: -60.0,
        start_velocity: 55.0,
        origin: fanfare_core::Vec2::new(0.1, 1.0),
        ..BurstConfig::default()
    }
}

/// Looks up a preset by name.
#[must_use]
pub fn by_name(name: &str) -> Option<BurstConfig> {
    match name {
        "celebration" => Some(celebration()),
        "fireworks" => Some(fireworks()),
        "cannon" => Some(cannon()),
        _ => None,
    }
}

/// Saturated neon palette.
#[must_use]
pub fn neon_palette() -> Vec<Color> {
    vec![
        Color::hex(0x39_ff_14_ff),
        Color::hex(0x00_e5_ff_ff),
        Color::hex(0xff_10_f0_ff),
        Color::hex(0xff_e6_00_ff),
    ]
}

/// Soft pastel palette.
#[must_use]
pub fn pastel_palette() -> Vec<Color> {
    vec![
        Color::hex(0xa8_d8_ea_ff),
        Color::hex(0xaa_96_da_ff),
        Color::hex(0xfc_ba_d3_ff),
        Color::hex(0xff_ff_d2_ff),
    ]
}
