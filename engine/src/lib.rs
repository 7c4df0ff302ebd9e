mod fill;
mod types;

pub use fill::{impute, impute_batch};
pub use types::{Sample, Series};
