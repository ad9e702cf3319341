//! Terminal front end: shows a deal street by street.
pub mod app;
pub mod controller;
mod ui;
