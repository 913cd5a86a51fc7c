use std::f64::consts::PI;

const LATTICE_MASK: usize = 4095;
const OCTAVES: usize = 4;
const FALLOFF: f64 = 0.5;

/// Smooth 1-D value noise: a random lattice blended with cosine
/// interpolation over a few octaves. Output lies in `[0, 1)`.
pub struct Noise {
	lattice: Vec<f64>,
}

impl Noise {
	pub fn new(random: &mut dyn FnMut() -> f64) -> Self {
		Self {
			lattice: (0..=LATTICE_MASK).map(|_| random()).collect(),
		}
	}

	pub fn sample(&self, x: f64) -> f64 {
		let x = x.abs();
		let (mut xi, mut xf) = (x.floor() as usize, x.fract());
		let (mut out, mut amplitude) = (0.0, 0.5);

		for _ in 0..OCTAVES {
			let n1 = self.lattice[xi & LATTICE_MASK];
			let n2 = self.lattice[(xi + 1) & LATTICE_MASK];
			out += (n1 + scaled_cosine(xf) * (n2 - n1)) * amplitude;
			amplitude *= FALLOFF;

			xi = xi.wrapping_shl(1);
			xf *= 2.0;
			if xf >= 1.0 {
				xi = xi.wrapping_add(1);
				xf -= 1.0;
			}
		}
		out
	}
}

fn scaled_cosine(t: f64) -> f64 {
	0.5 * (1.0 - (t * PI).cos())
}

/// Linear-congruential source of `[0, 1)` values for deterministic tests.
#[cfg(test)]
pub(super) fn seeded_random(seed: u64) -> impl FnMut() -> f64 {
	let mut state = seed;
	move || {
		state = state
			.wrapping_mul(6364136223846793005)
			.wrapping_add(1442695040888963407);
		(state >> 11) as f64 / (1u64 << 53) as f64
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn same_seed_same_field() {
		let a = Noise::new(&mut seeded_random(7));
		let b = Noise::new(&mut seeded_random(7));
		for i in 0..100 {
			let x = i as f64 * 0.37;
			assert_eq!(a.sample(x), b.sample(x));
		}
	}

	#[test]
	fn output_stays_in_unit_range() {
		let noise = Noise::new(&mut seeded_random(42));
		for i in 0..5000 {
			let v = noise.sample(i as f64 * 0.731 + 500.0);
			assert!((0.0..1.0).contains(&v), "{v}");
		}
	}

	#[test]
	fn small_steps_give_small_changes() {
		let noise = Noise::new(&mut seeded_random(3));
		let mut x = 12.0;
		while x < 40.0 {
			let delta = (noise.sample(x + 0.001) - noise.sample(x)).abs();
			assert!(delta < 0.05, "jump of {delta} at {x}");
			x += 0.25;
		}
	}
}
