//! Snowfall tunables and color handling.
//!
//! All tunables are fixed at startup; there is no runtime mutation path.
//! `SnowConfig` deserializes from JSON with per-field defaults, so a host
//! page only has to name the fields it wants to change.

use serde::{Deserialize, Deserializer};

/// RGBA color for the flakes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Parses a CSS color string.
	/// Supports hex (`#RRGGBB`) and `rgb()`/`rgba()` functional notation;
	/// anything else falls back to mid-gray.
	pub fn parse(color_str: &str) -> Self {
		if color_str.starts_with('#') && color_str.len() == 7 {
			let r = u8::from_str_radix(&color_str[1..3], 16).unwrap_or(128);
			let g = u8::from_str_radix(&color_str[3..5], 16).unwrap_or(128);
			let b = u8::from_str_radix(&color_str[5..7], 16).unwrap_or(128);
			Color::rgb(r, g, b)
		} else if color_str.starts_with("rgb") {
			let nums: Vec<&str> = color_str
				.trim_start_matches("rgba(")
				.trim_start_matches("rgb(")
				.trim_end_matches(')')
				.split(',')
				.collect();
			let r = nums
				.first()
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(128);
			let g = nums
				.get(1)
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(128);
			let b = nums
				.get(2)
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(128);
			let a = nums
				.get(3)
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(1.0);
			Color::rgba(r, g, b, a)
		} else {
			Color::rgb(128, 128, 128)
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

impl<'de> Deserialize<'de> for Color {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let s = String::deserialize(deserializer)?;
		Ok(Color::parse(&s))
	}
}

/// Tunables for the snowfall effect.
///
/// Deserializable from a JSON object with camelCase keys; every field is
/// optional and missing fields keep their defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnowConfig {
	/// Number of flakes in the pool.
	pub count: usize,
	/// Smallest flake radius in pixels.
	pub min_radius: f64,
	/// Largest flake radius in pixels.
	pub max_radius: f64,
	/// Slowest fall speed in pixels per frame.
	pub min_speed: f64,
	/// Fastest fall speed in pixels per frame.
	pub max_speed: f64,
	/// Lateral drift applied each frame; zero keeps flakes falling straight down.
	pub drift: f64,
	/// Fill color shared by every flake.
	pub color: Color,
}

impl Default for SnowConfig {
	fn default() -> Self {
		Self {
			count: 150,
			min_radius: 1.0,
			max_radius: 4.0,
			min_speed: 2.0,
			max_speed: 5.0,
			drift: 0.0,
			color: Color::rgb(255, 255, 255),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_describe_the_stock_effect() {
		let config = SnowConfig::default();
		assert_eq!(config.count, 150);
		assert_eq!(config.min_radius, 1.0);
		assert_eq!(config.max_radius, 4.0);
		assert_eq!(config.min_speed, 2.0);
		assert_eq!(config.max_speed, 5.0);
		assert_eq!(config.drift, 0.0);
		assert_eq!(config.color, Color::rgb(255, 255, 255));
	}

	#[test]
	fn json_overrides_only_named_fields() {
		let config: SnowConfig =
			serde_json::from_str(r#"{"count": 40, "maxSpeed": 8.5}"#).unwrap();
		assert_eq!(config.count, 40);
		assert_eq!(config.max_speed, 8.5);
		assert_eq!(config.min_radius, 1.0);
		assert_eq!(config.color, Color::rgb(255, 255, 255));
	}

	#[test]
	fn color_parses_hex_and_functional_notation() {
		assert_eq!(Color::parse("#336699"), Color::rgb(0x33, 0x66, 0x99));
		assert_eq!(Color::parse("rgb(10, 20, 30)"), Color::rgb(10, 20, 30));
		assert_eq!(
			Color::parse("rgba(200, 220, 255, 0.9)"),
			Color::rgba(200, 220, 255, 0.9)
		);
	}

	#[test]
	fn unparseable_color_falls_back_to_gray() {
		assert_eq!(Color::parse("bogus"), Color::rgb(128, 128, 128));
	}

	#[test]
	fn color_deserializes_from_css_string() {
		let config: SnowConfig = serde_json::from_str(r##"{"color": "#aaccee"}"##).unwrap();
		assert_eq!(config.color, Color::rgb(0xaa, 0xcc, 0xee));
	}

	#[test]
	fn to_css_round_trips_opaque_and_translucent() {
		assert_eq!(Color::rgb(255, 255, 255).to_css(), "#ffffff");
		assert_eq!(
			Color::rgba(200, 220, 255, 0.9).to_css(),
			"rgba(200, 220, 255, 0.9)"
		);
	}
}
