//! Falling-flake particle pool.
//!
//! The pool owns a fixed count of flakes plus the surface dimensions it was
//! built against. Flakes are never deallocated: one that falls past the
//! bottom edge is respawned in place above the top edge. A viewport resize
//! discards the whole pool and rebuilds it at the same count.

use super::config::SnowConfig;

/// Xorshift32 generator; cheap and good enough for scatter positions.
#[derive(Clone, Debug)]
struct Rng {
	state: u32,
}

impl Rng {
	fn new(seed: u32) -> Self {
		// A zero state would never advance.
		Self {
			state: if seed == 0 { 0x9e37_79b9 } else { seed },
		}
	}

	/// Next value uniform in [0, 1).
	fn next_f64(&mut self) -> f64 {
		self.state ^= self.state << 13;
		self.state ^= self.state >> 17;
		self.state ^= self.state << 5;
		(self.state >> 8) as f64 * (1.0 / 16_777_216.0)
	}

	/// Next value uniform in [min, max).
	fn range(&mut self, min: f64, max: f64) -> f64 {
		min + self.next_f64() * (max - min)
	}
}

/// A single falling snowflake.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub speed: f64,
}

impl Particle {
	/// Spawn a flake above the top edge with fresh radius and speed.
	fn spawn(config: &SnowConfig, width: f64, height: f64, rng: &mut Rng) -> Self {
		Self {
			x: rng.next_f64() * width,
			y: -(rng.next_f64() * height),
			radius: rng.range(config.min_radius, config.max_radius),
			speed: rng.range(config.min_speed, config.max_speed),
		}
	}
}

/// Fixed-count pool of snowflakes bound to the current surface size.
pub struct ParticlePool {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
	rng: Rng,
}

impl ParticlePool {
	pub fn new(config: &SnowConfig, width: f64, height: f64, seed: u32) -> Self {
		let mut pool = Self {
			particles: Vec::with_capacity(config.count),
			width,
			height,
			rng: Rng::new(seed),
		};
		pool.fill(config);
		pool
	}

	/// Scatter a fresh pool across the visible area so the first frame is
	/// already snowing instead of starting with an empty screen.
	fn fill(&mut self, config: &SnowConfig) {
		self.particles.clear();
		for _ in 0..config.count {
			let mut p = Particle::spawn(config, self.width, self.height, &mut self.rng);
			p.y = self.rng.next_f64() * self.height;
			self.particles.push(p);
		}
	}

	/// Advance every flake one frame. A flake that exits the bottom edge is
	/// respawned above the top edge with fresh radius and speed.
	pub fn update(&mut self, config: &SnowConfig) {
		for p in &mut self.particles {
			p.x += config.drift;
			p.y += p.speed;
			if p.y > self.height {
				*p = Particle::spawn(config, self.width, self.height, &mut self.rng);
			}
		}
	}

	/// Rebind the pool to new surface dimensions, discarding every flake and
	/// rebuilding the pool at the same fixed count.
	pub fn resize(&mut self, config: &SnowConfig, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.fill(config);
	}

	/// Surface width the pool was built against.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Surface height the pool was built against.
	pub fn height(&self) -> f64 {
		self.height
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SEED: u32 = 0x5eed_1234;

	fn pool_800x600() -> (SnowConfig, ParticlePool) {
		let config = SnowConfig::default();
		let pool = ParticlePool::new(&config, 800.0, 600.0, SEED);
		(config, pool)
	}

	#[test]
	fn init_scatters_fixed_count_across_viewport() {
		let (_, pool) = pool_800x600();
		assert_eq!(pool.particles.len(), 150);
		for p in &pool.particles {
			assert!((0.0..800.0).contains(&p.x));
			assert!((-600.0..=600.0).contains(&p.y));
		}
	}

	#[test]
	fn radius_and_speed_stay_in_configured_ranges() {
		let (config, mut pool) = pool_800x600();
		for _ in 0..1000 {
			pool.update(&config);
			for p in &pool.particles {
				assert!(p.radius >= config.min_radius && p.radius <= config.max_radius);
				assert!(p.speed >= config.min_speed && p.speed <= config.max_speed);
			}
		}
	}

	#[test]
	fn update_never_leaves_flakes_below_bottom_edge() {
		let (config, mut pool) = pool_800x600();
		for _ in 0..1000 {
			pool.update(&config);
			for p in &pool.particles {
				assert!(p.y <= 600.0);
			}
		}
	}

	#[test]
	fn flake_past_bottom_respawns_above_top() {
		let (config, mut pool) = pool_800x600();
		pool.particles[0] = Particle {
			x: 400.0,
			y: 599.0,
			radius: 2.0,
			speed: 5.0,
		};
		pool.update(&config);
		let p = &pool.particles[0];
		assert!(p.y < 0.0 && p.y >= -600.0);
	}

	#[test]
	fn flake_short_of_bottom_keeps_falling() {
		let (config, mut pool) = pool_800x600();
		pool.particles[0] = Particle {
			x: 400.0,
			y: 100.0,
			radius: 2.0,
			speed: 5.0,
		};
		pool.update(&config);
		assert_eq!(pool.particles[0].y, 105.0);
		assert_eq!(pool.particles[0].x, 400.0);
	}

	#[test]
	fn resize_rebuilds_pool_inside_new_bounds() {
		let (config, mut pool) = pool_800x600();
		let before = pool.particles.clone();
		pool.resize(&config, 1024.0, 768.0);
		assert_eq!(pool.particles.len(), before.len());
		assert_eq!(pool.width(), 1024.0);
		assert_eq!(pool.height(), 768.0);
		for p in &pool.particles {
			assert!((0.0..1024.0).contains(&p.x));
			assert!((0.0..=768.0).contains(&p.y));
		}
		// The old pool is discarded wholesale, not carried over.
		assert!(
			pool.particles
				.iter()
				.zip(&before)
				.any(|(a, b)| a.x != b.x || a.y != b.y)
		);
	}

	#[test]
	fn repeated_resizes_keep_the_count_fixed() {
		let (config, mut pool) = pool_800x600();
		for (w, h) in [(320.0, 480.0), (1920.0, 1080.0), (800.0, 600.0), (64.0, 64.0)] {
			pool.resize(&config, w, h);
			assert_eq!(pool.particles.len(), config.count);
		}
	}
}
