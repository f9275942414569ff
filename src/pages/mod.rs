//! Pages of the app. There is exactly one.

mod portfolio;

pub use portfolio::Portfolio;
