pub mod platform;
pub mod sanitize;
