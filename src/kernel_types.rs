//! Kernel-related types shared across ops.

/// Float type identifier for const-time kernel selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatType {
    F32,
    F16,
    BF16,
}

/// Trait for kernel-compatible floating point types.
/// Implemented for f32, half::f16, and half::bf16. Zero-cost via monomorphization.
///
/// Comparisons inside the kernels go through `to_f32`, so IEEE-754 semantics
/// (NaN compares unordered) hold for the half types as well.
pub trait KernelFloat: Copy + Default + Send + Sync + 'static {
    /// Compile-time type identifier for zero-cost kernel selection.
    const TYPE_ID: FloatType;

    fn to_f32(self) -> f32;
    fn from_f32(v: f32) -> Self;
}

impl KernelFloat for f32 {
    const TYPE_ID: FloatType = FloatType::F32;

    #[inline(always)]
    fn to_f32(self) -> f32 { self }
    #[inline(always)]
    fn from_f32(v: f32) -> Self { v }
}

impl KernelFloat for half::f16 {
    const TYPE_ID: FloatType = FloatType::F16;

    #[inline(always)]
    fn to_f32(self) -> f32 { half::f16::to_f32(self) }
    #[inline(always)]
    fn from_f32(v: f32) -> Self { half::f16::from_f32(v) }
}

impl KernelFloat for half::bf16 {
    const TYPE_ID: FloatType = FloatType::BF16;

    #[inline(always)]
    fn to_f32(self) -> f32 { half::bf16::to_f32(self) }
    #[inline(always)]
    fn from_f32(v: f32) -> Self { half::bf16::from_f32(v) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ids_are_distinct() {
        assert_eq!(<f32 as KernelFloat>::TYPE_ID, FloatType::F32);
        assert_eq!(<half::f16 as KernelFloat>::TYPE_ID, FloatType::F16);
        assert_eq!(<half::bf16 as KernelFloat>::TYPE_ID, FloatType::BF16);
    }

    #[test]
    fn test_half_round_trip_preserves_nan() {
        let v = half::f16::from_f32(f32::NAN);
        assert!(v.to_f32().is_nan());
        // NaN must stay unordered through the f32 comparison path.
        assert!(!(v.to_f32() > v.to_f32()));
    }
}
