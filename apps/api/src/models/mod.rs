pub mod builder;
pub mod resume;
