//! Hardware encodings.
//!
//! Every encoding space has its own type, codes from different spaces can only be compared by their display name.
//! Layout codes are named after the channel sizes from the least significant bits upwards, e.g. `16_16` or `2_10_10_10`.
#![allow(non_camel_case_types)]

use texcaps_macros::EnumDisplay;

/// Data layout of a texel or vertex buffer element
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumDisplay)]
pub enum BufferDataFormat {
    Invalid,
    _8,
    _16,
    _8_8,
    _32,
    _16_16,
    _10_11_11,
    _2_10_10_10,
    _8_8_8_8,
    _32_32,
    _16_16_16_16,
    _32_32_32,
    _32_32_32_32,
}

impl BufferDataFormat {
    pub fn is_valid(self) -> bool {
        self != BufferDataFormat::Invalid
    }
}

/// Numeric interpretation of buffer data
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumDisplay)]
pub enum BufferNumFormat {
    Unorm,
    Snorm,
    Uscaled,
    Sscaled,
    Uint,
    Sint,
    Float,
    /// No channel to interpret
    Undefined,
}

impl BufferNumFormat {
    pub fn is_scaled(self) -> bool {
        matches!(self, BufferNumFormat::Uscaled | BufferNumFormat::Sscaled)
    }
}

/// Data layout of a texel in an image
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumDisplay)]
pub enum TextureDataFormat {
    Unknown,
    _8,
    _16,
    _8_8,
    _32,
    _16_16,
    _10_11_11,
    _11_11_10,
    _10_10_10_2,
    _2_10_10_10,
    _8_8_8_8,
    _32_32,
    _16_16_16_16,
    _32_32_32,
    _32_32_32_32,
    _5_6_5,
    _1_5_5_5,
    _5_5_5_1,
    _4_4_4_4,
    _8_24,
    _24_8,
    X24_8_32,
    _5_9_9_9,
    /// 4:2:2 stored as G, B, G, R in memory
    BG_RG,
    /// 4:2:2 stored as B, G, R, G in memory
    GB_GR,
    BC1,
    BC2,
    BC3,
    BC4,
    BC5,
    BC6,
    BC7,
    ETC2_RGB,
    ETC2_RGBA1,
    ETC2_RGBA,
    ETC2_R,
    ETC2_RG,
}

impl TextureDataFormat {
    pub fn is_valid(self) -> bool {
        self != TextureDataFormat::Unknown
    }
}

/// Numeric interpretation of image data
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumDisplay)]
pub enum TextureNumFormat {
    Unorm,
    Snorm,
    Uscaled,
    Sscaled,
    Uint,
    Sint,
    Float,
    Srgb,
}

impl TextureNumFormat {
    pub fn is_scaled(self) -> bool {
        matches!(self, TextureNumFormat::Uscaled | TextureNumFormat::Sscaled)
    }
}

/// Render target layout
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumDisplay)]
pub enum ColorFormat {
    Invalid,
    _8,
    _16,
    _8_8,
    _32,
    _16_16,
    _10_11_11,
    _11_11_10,
    _10_10_10_2,
    _2_10_10_10,
    _8_8_8_8,
    _32_32,
    _16_16_16_16,
    _32_32_32_32,
    _5_6_5,
    _1_5_5_5,
    _5_5_5_1,
    _4_4_4_4,
    _8_24,
    _24_8,
    X24_8_32_FLOAT,
    _5_9_9_9,
}

impl ColorFormat {
    pub fn is_valid(self) -> bool {
        self != ColorFormat::Invalid
    }
}

/// Render target numeric interpretation
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumDisplay)]
pub enum ColorNumFormat {
    Unorm,
    Snorm,
    Uint,
    Sint,
    Srgb,
    Float,
    Invalid,
}

impl ColorNumFormat {
    pub fn is_valid(self) -> bool {
        self != ColorNumFormat::Invalid
    }
}

/// Component reordering applied when writing to a render target
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumDisplay)]
pub enum ColorSwap {
    /// Straight order
    Std,
    /// Alternate order, the last component is swapped with the second
    Alt,
    /// Reversed order
    StdRev,
    /// Reversed alternate order
    AltRev,
    Invalid,
}

impl ColorSwap {
    pub fn is_valid(self) -> bool {
        self != ColorSwap::Invalid
    }
}

/// Byte swap applied when writing to a render target
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumDisplay)]
pub enum ColorEndian {
    None,
    #[display("8in16")]
    Swap8In16,
    #[display("8in32")]
    Swap8In32,
    #[display("8in64")]
    Swap8In64,
}

/// Depth buffer layout
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumDisplay)]
pub enum DepthFormat {
    Invalid,
    Z16,
    Z32Float,
}

impl DepthFormat {
    pub fn is_valid(self) -> bool {
        self != DepthFormat::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_codes_display_without_underscore() {
        assert_eq!(BufferDataFormat::_16_16.to_string(), "16_16");
        assert_eq!(TextureDataFormat::_16_16.to_string(), "16_16");
        assert_eq!(ColorFormat::X24_8_32_FLOAT.to_string(), "X24_8_32_FLOAT");
        assert_eq!(ColorEndian::Swap8In32.to_string(), "8in32");
    }

    #[test]
    fn sentinels() {
        assert!(!BufferDataFormat::Invalid.is_valid());
        assert!(!TextureDataFormat::Unknown.is_valid());
        assert!(!ColorSwap::Invalid.is_valid());
        assert!(TextureNumFormat::Sscaled.is_scaled());
        assert!(!BufferNumFormat::Float.is_scaled());
    }
}
