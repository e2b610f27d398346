//! Procedural macros used across the texcaps crates
//!
//! - `#[flags]`: turn a fieldless enum into a bit-flag struct
//! - `#[derive(EnumCount)]`: implements `texcaps_base::EnumCountT`
//! - `#[derive(EnumFromIndex)]`: implements `texcaps_base::EnumFromIndexT`
//! - `#[derive(EnumDisplay)]`: implements `core::fmt::Display`, names can be overwritten with `#[display("...")]`,
//!   a leading `_` in a variant name is not displayed

use proc_macro::TokenStream;

mod derive;
mod flags;

/// Convert an enum into a set of bit flags.
///
/// Variants without a discriminant get the next power of 2, variants with an explicit value of 0 are used as the 'none' value.
/// A base type can be passed as an argument, i.e. `#[flags(u32)]`, otherwise the smallest fitting unsigned integer is used.
#[proc_macro_attribute]
pub fn flags(args: TokenStream, input: TokenStream) -> TokenStream {
    flags::flags(args.into(), input.into()).into()
}

#[proc_macro_derive(EnumCount)]
pub fn enum_count(item: TokenStream) -> TokenStream {
    derive::enum_count(item.into()).into()
}

#[proc_macro_derive(EnumFromIndex)]
pub fn enum_from_index(item: TokenStream) -> TokenStream {
    derive::enum_from_index(item.into()).into()
}

#[proc_macro_derive(EnumDisplay, attributes(display))]
pub fn enum_display(item: TokenStream) -> TokenStream {
    derive::enum_display(item.into()).into()
}
