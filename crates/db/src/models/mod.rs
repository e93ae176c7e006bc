//! Entity structs and the create DTOs the repositories accept.
//!
//! A [`restaurant::Restaurant`] owns its menu; a [`menu_item::MenuItem`]
//! refers back to its owner by id only.

pub mod menu_item;
pub mod restaurant;
