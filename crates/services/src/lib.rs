#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod expanded_state;
mod id_list;
pub mod progress_tracker;

pub use app_services::{AppServices, load_catalog};
pub use error::{AppServicesError, ProgressError};
pub use expanded_state::{EXPANDED_KEY, ExpandedState};
pub use progress_tracker::{PROGRESS_KEY, ProgressTracker};
