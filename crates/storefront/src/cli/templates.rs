//! # CLI Templates
//!
//! Terminal output is rendered through `outstanding` from templates kept in `templates/` and
//! embedded here at compile time. Editing a layout means editing a `.tmp` file,
//! not Rust code.
//!
//! Whitespace around block tags is trimmed explicitly with `{%-` and `-%}`; a tag
//! without them keeps the newline that follows it. Anything harder than a loop or an
//! `if` (padding, truncation, image summaries) is computed in `render.rs` and handed to
//! the template as plain values.

pub const STOREFRONT_TEMPLATE: &str = include_str!("templates/storefront.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
