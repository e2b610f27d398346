//! Format capability translation
//!
//! Translates abstract pixel formats into the hardware encodings of a GPU family, and derives which usages the hardware supports for them.
//!
//! Every format is described by a static [`FormatDescriptor`], which is looked up using [`Format::descriptor`].
//! A [`FormatCapabilityResolver`] combines these descriptors with a [`DeviceInfo`] to:
//! - classify the buffer, texture, render target and depth encodings of a format
//! - aggregate these into [`FormatProperties`] and [`ImageFormatProperties`]
//! - pack clear colors into the native layout of a format for fast clears
//!
//! Unsupported combinations are not errors: they are reported by sentinel codes (e.g. [`TextureDataFormat::Unknown`]) or empty feature sets.

use texcaps_logging::LogCategory;
use static_assertions as sa;

mod descriptor;
mod format;
mod codes;
mod device;
mod error;
mod features;
mod image;
mod clear;
mod settings;
mod resolver;
pub mod pack;

pub use descriptor::*;
pub use format::*;
pub use codes::*;
pub use device::*;
pub use error::*;
pub use features::*;
pub use image::*;
pub use clear::*;
pub use settings::*;
pub use resolver::*;

pub(crate) const LOG_CAT : LogCategory = LogCategory::new("Format");
pub(crate) const LOG_CAT_CLEAR : LogCategory = LogCategory::new_with_sub("Format", "Clear");

sa::assert_eq_size!(PackedClearColor, [u32; 2]);
sa::assert_eq_size!(FormatFeatures, u32);
sa::assert_impl_all!(FormatCapabilityResolver: Copy, Send, Sync);
