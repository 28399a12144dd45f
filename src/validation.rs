//! Runtime validation for kernel shape parameters.
//!
//! The kernels themselves assert on bad shapes (a shape violation is a caller
//! bug). Callers that assemble shapes from untrusted configuration can use
//! these checks to reject them as a recoverable error instead.
//!
//! All functions return `Result<(), String>` so each caller can map the
//! message into its own error type.

/// Validate batch top-k dimensions (dim0, dim1, dim2, k).
///
/// # Returns
/// - `Ok(())` if the shape is valid
/// - `Err(String)` describing the validation failure
#[inline]
pub fn validate_topk_dims(
    dim0: usize,
    dim1: usize,
    dim2: usize,
    k: usize,
) -> Result<(), String> {
    if dim0 == 0 || dim1 == 0 || dim2 == 0 {
        return Err("Dimensions must be > 0".into());
    }
    if k >= dim2 {
        return Err(format!("k {} must be < row length {}", k, dim2));
    }
    if dim0.checked_mul(dim1).and_then(|r| r.checked_mul(dim2)).is_none() {
        return Err(format!(
            "tensor shape {}x{}x{} overflows usize",
            dim0, dim1, dim2
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dims() {
        assert!(validate_topk_dims(50, 1024, 1024, 20).is_ok());
        assert!(validate_topk_dims(1, 1, 2, 0).is_ok());
    }

    #[test]
    fn test_zero_dim_rejected() {
        assert!(validate_topk_dims(0, 4, 4, 1).is_err());
        assert!(validate_topk_dims(4, 0, 4, 1).is_err());
        assert!(validate_topk_dims(4, 4, 0, 0).is_err());
    }

    #[test]
    fn test_k_at_least_row_length_rejected() {
        assert!(validate_topk_dims(1, 1, 5, 5).is_err());
        assert!(validate_topk_dims(1, 1, 5, 6).is_err());
    }

    #[test]
    fn test_overflowing_shape_rejected() {
        assert!(validate_topk_dims(usize::MAX, 2, 2, 1).is_err());
    }
}
