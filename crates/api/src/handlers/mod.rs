//! Request handlers.
//!
//! Handlers parse input with the extractors in [`crate::extract`], delegate to
//! [`crate::services::MenuService`] and map errors via [`crate::error::AppError`].

pub mod menu;
