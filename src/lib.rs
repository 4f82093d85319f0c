pub mod batch;
pub mod config;
pub mod error;
pub mod sum;

pub use sum::{Evaluation, Sign, sum_negative, sum_positive};
