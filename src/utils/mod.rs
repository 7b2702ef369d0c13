pub mod math;

pub use math::{mean, modes};
