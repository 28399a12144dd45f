//! End-to-end demo: fill a batch of distance matrices, run the top-k kernel,
//! dump a slice of the sorted output.
//!
//! Run with `cargo run --release --example knn_topk`.

use knn_kernels::{batch_topk, fill_tensor, format_tensor_slice, measure, FillPattern};

const B: usize = 8;
const N: usize = 256;
const K: usize = 20;

fn main() {
    let mut distances = vec![0.0f32; B * N * N];
    fill_tensor(
        &mut distances,
        B,
        N,
        N,
        FillPattern::Uniform { min: -2.0, max: 2.0 },
        0xC0FFEE,
    );

    let mut indices = vec![0u32; B * N * K];
    let mut sorted = vec![0.0f32; B * N * N];

    let (_, micros) = measure("batch_topk", || {
        batch_topk(&distances, &mut indices, &mut sorted, B, N, N, K);
    });
    println!("batch_topk {B}x{N}x{N} k={K}: {micros} us");

    print!("{}", format_tensor_slice(&sorted, B, N, N, "sorted", 1, 2));
    print!("{}", format_tensor_slice_u32(&indices, 1, 2));
}

/// Index rows are small; render them inline rather than via the float dump.
fn format_tensor_slice_u32(indices: &[u32], limit_d0: usize, limit_d1: usize) -> String {
    let mut out = String::from("DUMP: indices\n");
    for d0 in 0..limit_d0 {
        for d1 in 0..limit_d1 {
            let row = d0 * N * K + d1 * K;
            out.push_str(&format!(
                "indices[{d0},{d1},..] = {:?}\n",
                &indices[row..row + K]
            ));
        }
    }
    out
}
