//! Copying of arrays and objects.

mod clone;

pub use clone::{clone, clones};
