//! Common utilities for integration tests

pub mod test_helpers;

// Re-export commonly used items
#[allow(unused_imports)]
pub use test_helpers::{
    assert_boundaries,
    assert_shape,
    last_row_error,
    reference_parameters,
    row_error_scaled,
    small_slab,
};
