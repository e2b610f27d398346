use core::fmt;

use crate::{ChannelType, Format};

/// Format capability error
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// The operation requires a plain (per-texel) layout
    NonPlainLayout(Format),
    /// The block size (in bits) is not a power of two
    NonPowerOfTwoBlock(Format, u16),
    /// The first 3 components of a 128-bit clear value need to be bit-identical
    MismatchedWideComponents(Format),
    /// Floating point channel with a size that can't be encoded
    UnhandledFloatSize(Format, u8),
    /// Channel type that can't be encoded
    UnhandledChannelType(Format, ChannelType),
    /// The format is not supported for the requested usage
    FormatNotSupported(Format, &'static str),
    /// Invalid settings file
    InvalidSettings(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NonPlainLayout(format)             => f.write_fmt(format_args!("Format '{format}' does not have a plain layout")),
            Error::NonPowerOfTwoBlock(format, bits)   => f.write_fmt(format_args!("Format '{format}' has a block size of {bits} bits, which is not a power of 2")),
            Error::MismatchedWideComponents(format)   => f.write_fmt(format_args!("The first 3 components of a clear value for '{format}' are not identical")),
            Error::UnhandledFloatSize(format, size)   => f.write_fmt(format_args!("Unhandled {size}-bit float channel in format '{format}'")),
            Error::UnhandledChannelType(format, ty)   => f.write_fmt(format_args!("Unhandled channel type '{ty}' in format '{format}'")),
            Error::FormatNotSupported(format, reason) => f.write_fmt(format_args!("Format '{format}' is not supported: {reason}")),
            Error::InvalidSettings(s)                 => f.write_fmt(format_args!("Invalid settings: {s}")),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
