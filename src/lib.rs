pub mod config;
pub mod utils;
pub mod weighing;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
