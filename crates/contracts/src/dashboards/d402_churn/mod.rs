pub mod builder;
pub mod dto;

pub use builder::build;
pub use dto::*;
