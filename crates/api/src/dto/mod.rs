//! Wire-level request and response shapes for the menu API.
//!
//! All JSON field names are camelCase; the item type travels as `type`.

pub mod request;
pub mod response;
