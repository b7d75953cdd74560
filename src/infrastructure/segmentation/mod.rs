//! Word segmentation implementations.

pub mod fmm_segmenter;

pub use fmm_segmenter::FmmSegmenter;
