pub mod common;
pub mod registry;
pub mod resource;

pub use common::*;
pub use registry::*;
pub use resource::*;
