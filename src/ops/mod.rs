pub mod batch_topk;

pub use batch_topk::batch_topk;
