//! Canvas drawing for the snowfall overlay.
//!
//! One pass per frame: clear the whole surface, reset the blur state left
//! over from the previous frame, then draw every flake in pool order as a
//! filled circle with a soft shadow proportional to its radius.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::SnowConfig;
use super::particles::ParticlePool;

/// Renders the current pool state to the canvas.
pub fn render(pool: &ParticlePool, ctx: &CanvasRenderingContext2d, config: &SnowConfig) {
	ctx.clear_rect(0.0, 0.0, pool.width(), pool.height());
	ctx.set_shadow_blur(0.0);

	let fill = config.color.to_css();
	for p in &pool.particles {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&fill);
		// Shadow in the fill color softens the flake edges.
		ctx.set_shadow_blur(p.radius * 0.5);
		ctx.set_shadow_color(&fill);
		ctx.fill();
	}
}
