//! Deterministic tensor fixtures for tests, benches, and demos.
//!
//! Fill patterns for rank-3 tensors: seeded uniform noise plus two structured
//! ramps whose top-k results are predictable by inspection.

use crate::kernel_types::KernelFloat;

/// How to fill a [dim0, dim1, dim2] tensor.
#[derive(Debug, Clone, Copy)]
pub enum FillPattern {
    /// Uniform noise in [min, max), seeded.
    Uniform { min: f32, max: f32 },
    /// Value = column index (d2). Every row is an ascending ramp.
    ColumnIndex,
    /// Value = 10 * (d1 * d0) + d2. Rows differ across the batch.
    RowColRamp,
}

/// Simple LCG random number generator for reproducibility.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        // LCG constants from Numerical Recipes
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    /// Uniform in [0, 1).
    fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}

/// Fill a caller-provided [dim0, dim1, dim2] buffer with the given pattern.
///
/// # Panics
/// If `tensor.len() != dim0 * dim1 * dim2`.
pub fn fill_tensor<T: KernelFloat>(
    tensor: &mut [T],
    dim0: usize,
    dim1: usize,
    dim2: usize,
    pattern: FillPattern,
    seed: u64,
) {
    assert_eq!(tensor.len(), dim0 * dim1 * dim2);

    let mut rng = SimpleRng::new(seed);
    for d0 in 0..dim0 {
        for d1 in 0..dim1 {
            for d2 in 0..dim2 {
                let idx = d0 * dim1 * dim2 + d1 * dim2 + d2;
                let v = match pattern {
                    FillPattern::Uniform { min, max } => min + rng.next_f32() * (max - min),
                    FillPattern::ColumnIndex => d2 as f32,
                    FillPattern::RowColRamp => (10 * (d1 * d0) + d2) as f32,
                };
                tensor[idx] = T::from_f32(v);
            }
        }
    }
}
