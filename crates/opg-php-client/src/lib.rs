mod emitters;
pub mod generator;

pub use generator::{PhpClientGenerator, PhpGeneratorError};
