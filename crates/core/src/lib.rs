#![forbid(unsafe_code)]

pub mod catalog_data;
pub mod deep_link;
pub mod model;
pub mod search;

pub use catalog_data::builtin_catalog;
