//! Use-case orchestration between the HTTP handlers and the repositories.

pub mod menu;

pub use menu::MenuService;
