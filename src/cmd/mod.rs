pub mod action;
pub mod builder;
pub mod envvars;
pub mod platform;
pub mod separators;
pub mod tokenize;

pub use action::Action;
pub use platform::Platform;
