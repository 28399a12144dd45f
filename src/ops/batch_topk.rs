//! Batched top-k selection over distance matrices.
//!
//! This is the k-nearest-neighbor building block: given a rank-3 tensor of
//! shape [dim0, dim1, dim2] holding dim0 batches of dim1 rows of dim2 distance
//! scores, extract for every row the positions of its k largest values in
//! descending order, alongside a copy of the row with those k values sorted
//! into its leading positions.
//!
//! The algorithm is a descending partial selection sort: k passes over the
//! unsorted suffix of each row, each pass swapping the earliest-found maximum
//! into place. Deliberately simple and branch-predictable; rows are fully
//! independent and fan out across the rayon pool.

use crate::kernel_types::KernelFloat;
use rayon::prelude::*;

/// Below this many total elements the rayon fan-out costs more than it saves.
const PARALLEL_MIN_ELEMS: usize = 16 * 1024;

/// Select the top-k elements of every dim2 slice of a rank-3 tensor.
///
/// # Arguments
/// * `input` - Distance tensor: [dim0, dim1, dim2], row-major, never mutated
/// * `indices` - Output: original column positions of the top-k values per row,
///   descending: [dim0, dim1, k]
/// * `output` - Output: verbatim copy of `input` whose first k columns per row
///   hold the k largest values in descending order: [dim0, dim1, dim2]
///
/// Positions k..dim2 of each output row are left in whatever order the partial
/// selection sort produced; only the first k columns carry a sorting guarantee.
///
/// Ties go to the smaller original column index (strict `>` scan keeps the
/// earliest-found maximum). NaN compares unordered, so a NaN neither wins a
/// scan nor gets displaced by one; it stays where the pass found it.
///
/// # Panics
/// If `k >= dim2`, any dimension is zero, or a buffer length does not match
/// its shape. Shape violations are caller bugs, not recoverable errors.
pub fn batch_topk<T: KernelFloat>(
    input: &[T],
    indices: &mut [u32],
    output: &mut [T],
    dim0: usize,
    dim1: usize,
    dim2: usize,
    k: usize,
) {
    assert!(dim0 > 0 && dim1 > 0 && dim2 > 0, "dimensions must be > 0");
    assert!(k < dim2, "k ({k}) must be < dim2 ({dim2})");
    assert_eq!(input.len(), dim0 * dim1 * dim2);
    assert_eq!(output.len(), dim0 * dim1 * dim2);
    assert_eq!(indices.len(), dim0 * dim1 * k);

    // Sorting runs on the copy so the input is never edited.
    output.copy_from_slice(input);

    if k == 0 {
        return;
    }

    let rows = dim0 * dim1;
    let use_parallel = rows > 1 && rows * dim2 >= PARALLEL_MIN_ELEMS;

    if use_parallel {
        output
            .par_chunks_exact_mut(dim2)
            .zip(indices.par_chunks_exact_mut(k))
            .for_each(|(row, idx_row)| select_row_topk(row, idx_row));
    } else {
        output
            .chunks_exact_mut(dim2)
            .zip(indices.chunks_exact_mut(k))
            .for_each(|(row, idx_row)| select_row_topk(row, idx_row));
    }
}

/// Partial selection sort of one row, descending, with lockstep position
/// tracking. `idx_row.len()` is k; `row.len()` is dim2.
///
/// The position scratch spans the whole row, not just k slots: a pass can pick
/// its maximum from a slot past k that an earlier swap displaced a value into,
/// and the original column of that value is only known if every slot tracks it.
fn select_row_topk<T: KernelFloat>(row: &mut [T], idx_row: &mut [u32]) {
    let n = row.len();
    let k = idx_row.len();

    let mut positions: Vec<u32> = (0..n as u32).collect();

    for i in 0..k {
        // Earliest-found maximum wins: strict `>` keeps the tie-break stable
        // and leaves NaN (unordered under `>`) unselected and undisplaced.
        let mut max_idx = i;
        for j in (i + 1)..n {
            if row[j].to_f32() > row[max_idx].to_f32() {
                max_idx = j;
            }
        }
        if max_idx != i {
            row.swap(i, max_idx);
            positions.swap(i, max_idx);
        }
    }

    idx_row.copy_from_slice(&positions[..k]);
}
