//! Human-readable dumps of rank-3 tensor slices.
//!
//! Kernel rows are independent, so inspecting a (d0, d1) prefix of a result
//! tensor is valid without looking at the rest.

use crate::kernel_types::KernelFloat;
use std::fmt::Write;

/// Render a (limit_d0, limit_d1) prefix of a [dim0, dim1, dim2] tensor as
/// `name[d0,d1,d2] = value` lines.
///
/// # Panics
/// If a limit exceeds its dimension or the buffer length does not match the
/// shape.
pub fn format_tensor_slice<T: KernelFloat>(
    tensor: &[T],
    dim0: usize,
    dim1: usize,
    dim2: usize,
    name: &str,
    limit_d0: usize,
    limit_d1: usize,
) -> String {
    assert_eq!(tensor.len(), dim0 * dim1 * dim2);
    assert!(limit_d0 <= dim0, "limit_d0 {limit_d0} exceeds dim0 {dim0}");
    assert!(limit_d1 <= dim1, "limit_d1 {limit_d1} exceeds dim1 {dim1}");

    let mut out = String::new();
    let _ = writeln!(out, "DUMP: {name}");
    for d0 in 0..limit_d0 {
        for d1 in 0..limit_d1 {
            for d2 in 0..dim2 {
                let idx = d0 * dim1 * dim2 + d1 * dim2 + d2;
                let _ = writeln!(
                    out,
                    "{name}[{d0},{d1},{d2}] = {}",
                    tensor[idx].to_f32()
                );
            }
        }
    }
    out
}
