// crates/test-utils/src/lib.rs

//! Shared helpers for cookdag's integration and property tests.

pub mod builders;
pub mod fake_layout;

pub use builders::RecipeBuilder;
pub use fake_layout::{FailingLayout, FakeLayout};
