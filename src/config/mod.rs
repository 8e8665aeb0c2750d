pub mod cross_validation;

pub use cross_validation::{CrossValidationConfig, RollingParams, SlidingParams};
