//! Quadratic sorts, kept as baselines to compare the merge sorts against.

pub mod binsert;
pub mod bubble;
