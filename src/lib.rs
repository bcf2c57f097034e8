pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod predict;
pub mod view;

pub use error::{Error, Result};
