//! knn-kernels: batched top-k selection for nearest-neighbor search.
//!
//! This crate provides the partial-sort building block of a KNN pipeline:
//! given a batch of NxN score matrices (e.g. negated distances), extract per
//! row the positions of the k largest entries in descending order, plus the
//! row with those k entries sorted into its leading columns.
//!
//! - **Raw slice API**: caller owns every buffer, the kernel allocates only
//!   per-row scratch
//! - **Zero-cost float abstraction**: monomorphized over f32/f16/bf16 via
//!   [`KernelFloat`]
//! - **Row fan-out**: rows are independent and parallelize over the rayon pool
//!
//! # Quick Start
//!
//! ```
//! use knn_kernels::batch_topk;
//!
//! let input = vec![3.0f32, 1.0, 4.0, 1.0, 5.0];
//! let mut indices = vec![0u32; 3];
//! let mut output = vec![0.0f32; 5];
//! batch_topk(&input, &mut indices, &mut output, 1, 1, 5, 3);
//! assert_eq!(indices, vec![4, 2, 0]);
//! assert_eq!(&output[..3], &[5.0, 4.0, 3.0]);
//! ```

pub mod dump;
pub mod fixtures;
pub mod kernel_types;
pub mod ops;
pub mod profiling;
pub mod validation;

pub use dump::format_tensor_slice;
pub use fixtures::{fill_tensor, FillPattern};
pub use kernel_types::{FloatType, KernelFloat};
pub use ops::batch_topk::batch_topk;
pub use profiling::{measure, KernelTimer};
pub use validation::validate_topk_dims;
