pub mod error;
pub mod logger;
pub mod memoize;
pub mod nested;
pub mod validation;
