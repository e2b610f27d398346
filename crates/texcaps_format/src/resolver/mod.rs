use crate::{
    BufferDataFormat, BufferNumFormat, ChannelDescriptor, ChannelType, ColorSpace, DeviceInfo, Format, FormatDescriptor, FormatLayout,
    TextureDataFormat, TextureNumFormat,
};

mod color;
mod clear;
mod properties;
mod image;

#[cfg(test)]
mod tests;

/// Translates formats into the hardware encodings of a device, and derives which usages are supported.
///
/// The resolver only holds the device it was created for, all queries are pure functions of the format descriptor and that device.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FormatCapabilityResolver {
    device: DeviceInfo,
}

/// How the bits of an integer channel are interpreted
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum IntegerKind {
    Normalized,
    Integer,
    Scaled,
}

impl IntegerKind {
    fn of(channel: &ChannelDescriptor) -> Self {
        if channel.normalized {
            IntegerKind::Normalized
        } else if channel.pure_integer {
            IntegerKind::Integer
        } else {
            IntegerKind::Scaled
        }
    }
}

/// Non-uniform texture layouts, keyed on the channel count and the channel sizes
const NON_UNIFORM_TEXTURE_LAYOUTS : [(u8, [u8; 4], TextureDataFormat); 4] = [
    (3, [5, 6, 5, 0],     TextureDataFormat::_5_6_5),
    (4, [5, 5, 5, 1],     TextureDataFormat::_1_5_5_5),
    (4, [1, 5, 5, 5],     TextureDataFormat::_5_5_5_1),
    (4, [10, 10, 10, 2],  TextureDataFormat::_2_10_10_10),
];

/// Non-uniform layouts that have no hardware encoding for a given reference channel encoding
const REJECTED_TEXTURE_LAYOUTS : [(TextureDataFormat, ChannelType, bool); 1] = [
    // no signed normalized 2/10/10/10
    (TextureDataFormat::_2_10_10_10, ChannelType::Signed, true),
];

impl FormatCapabilityResolver {
    /// Create a resolver for a device
    pub fn new(device: DeviceInfo) -> Self {
        Self { device }
    }

    /// Get the device the resolver was created for
    pub fn device(&self) -> DeviceInfo {
        self.device
    }

    /// Get the data layout used to read the format from a texel or vertex buffer.
    ///
    /// The descriptor must not be multi-planar.
    pub fn classify_buffer_layout(&self, desc: &FormatDescriptor) -> BufferDataFormat {
        debug_assert!(desc.layout != FormatLayout::Multiplane, "Multi-planar format '{}' can't be classified as a buffer format", desc.format);

        if desc.format == Format::B10G11R11UFloatPack32 {
            return BufferDataFormat::_10_11_11;
        }

        let Some(reference) = desc.reference_channel() else {
            return BufferDataFormat::Invalid;
        };
        if reference.ty == ChannelType::Fixed {
            return BufferDataFormat::Invalid;
        }
        if desc.channel_count == 4 && desc.channel_sizes() == [10, 10, 10, 2] {
            return BufferDataFormat::_2_10_10_10;
        }

        if desc.used_channels().iter().any(|channel| channel.size != reference.size) {
            return BufferDataFormat::Invalid;
        }

        match (reference.size, desc.channel_count) {
            (8, 1)  => BufferDataFormat::_8,
            (8, 2)  => BufferDataFormat::_8_8,
            (8, 4)  => BufferDataFormat::_8_8_8_8,
            (16, 1) => BufferDataFormat::_16,
            (16, 2) => BufferDataFormat::_16_16,
            (16, 4) => BufferDataFormat::_16_16_16_16,
            // 32-bit reads skip format conversion, so only bit-exact encodings can be used
            (32, _) if reference.ty != ChannelType::Float && !reference.pure_integer => BufferDataFormat::Invalid,
            (32, 1) => BufferDataFormat::_32,
            (32, 2) => BufferDataFormat::_32_32,
            (32, 3) => BufferDataFormat::_32_32_32,
            (32, 4) => BufferDataFormat::_32_32_32_32,
            _ => BufferDataFormat::Invalid,
        }
    }

    /// Get the numeric interpretation of the format when read from a texel or vertex buffer.
    ///
    /// The descriptor must not be multi-planar.
    pub fn classify_buffer_numeric(&self, desc: &FormatDescriptor) -> BufferNumFormat {
        debug_assert!(desc.layout != FormatLayout::Multiplane, "Multi-planar format '{}' can't be classified as a buffer format", desc.format);

        match desc.format {
            Format::B10G11R11UFloatPack32 => return BufferNumFormat::Float,
            // the shared exponent has no per-channel interpretation
            Format::E5B9G9R9UFloatPack32 => return BufferNumFormat::Undefined,
            _ => {},
        }

        let Some(reference) = desc.reference_channel() else {
            return BufferNumFormat::Undefined;
        };

        match (reference.ty, IntegerKind::of(reference)) {
            (ChannelType::Signed, IntegerKind::Normalized)   => BufferNumFormat::Snorm,
            (ChannelType::Signed, IntegerKind::Integer)      => BufferNumFormat::Sint,
            (ChannelType::Signed, IntegerKind::Scaled)       => BufferNumFormat::Sscaled,
            (ChannelType::Unsigned, IntegerKind::Normalized) => BufferNumFormat::Unorm,
            (ChannelType::Unsigned, IntegerKind::Integer)    => BufferNumFormat::Uint,
            (ChannelType::Unsigned, IntegerKind::Scaled)     => BufferNumFormat::Uscaled,
            _ => BufferNumFormat::Float,
        }
    }

    /// Get the data layout used to sample the format from an image.
    ///
    /// The descriptor must describe a single plane.
    pub fn classify_texture_layout(&self, format: Format, desc: &FormatDescriptor) -> TextureDataFormat {
        debug_assert!(desc.plane_count == 1, "Multi-planar format '{format}' can't be classified as a texture format");

        Self::texture_color_space_layout(format, desc)
            .or_else(|| Self::texture_subsampled_layout(format, desc))
            .or_else(|| Self::texture_block_layout(format, desc))
            .or_else(|| Self::texture_packed_float_layout(format))
            .unwrap_or_else(|| Self::texture_structural_layout(desc))
    }

    // Depth/stencil formats are identified by their format, YUV formats have no encoding and sRGB requires 1 or 4 channels.
    fn texture_color_space_layout(format: Format, desc: &FormatDescriptor) -> Option<TextureDataFormat> {
        match desc.color_space {
            ColorSpace::DepthStencil => Some(match format {
                Format::D16UNorm                                   => TextureDataFormat::_16,
                Format::D24UNormS8UInt | Format::X8D24UNormPack32 => TextureDataFormat::_8_24,
                Format::S8UInt                                     => TextureDataFormat::_8,
                Format::D32SFloat                                  => TextureDataFormat::_32,
                Format::D32SFloatS8UInt                            => TextureDataFormat::X24_8_32,
                _                                                  => TextureDataFormat::Unknown,
            }),
            ColorSpace::Yuv => Some(TextureDataFormat::Unknown),
            ColorSpace::Srgb if !matches!(desc.channel_count, 1 | 4) => Some(TextureDataFormat::Unknown),
            _ => None,
        }
    }

    // The layout names are inverted relative to the memory order of the formats.
    fn texture_subsampled_layout(format: Format, desc: &FormatDescriptor) -> Option<TextureDataFormat> {
        if desc.layout != FormatLayout::Subsampled {
            return None;
        }

        Some(match format {
            Format::G8B8G8R8422UNorm => TextureDataFormat::BG_RG,
            Format::B8G8R8G8422UNorm => TextureDataFormat::GB_GR,
            _ => TextureDataFormat::Unknown,
        })
    }

    // Unrecognized formats of a block family fall through to the generic stages.
    fn texture_block_layout(format: Format, desc: &FormatDescriptor) -> Option<TextureDataFormat> {
        match desc.layout {
            FormatLayout::Rgtc => match format {
                Format::BC4UNormBlock | Format::BC4SNormBlock => Some(TextureDataFormat::BC4),
                Format::BC5UNormBlock | Format::BC5SNormBlock => Some(TextureDataFormat::BC5),
                _ => None,
            },
            FormatLayout::S3tc => match format {
                Format::BC1RgbUNormBlock |
                Format::BC1RgbSrgbBlock |
                Format::BC1RgbaUNormBlock |
                Format::BC1RgbaSrgbBlock => Some(TextureDataFormat::BC1),
                Format::BC2UNormBlock | Format::BC2SrgbBlock => Some(TextureDataFormat::BC2),
                Format::BC3UNormBlock | Format::BC3SrgbBlock => Some(TextureDataFormat::BC3),
                _ => None,
            },
            FormatLayout::Bptc => match format {
                Format::BC6HUFloatBlock | Format::BC6HSFloatBlock => Some(TextureDataFormat::BC6),
                Format::BC7UNormBlock | Format::BC7SrgbBlock => Some(TextureDataFormat::BC7),
                _ => None,
            },
            FormatLayout::Etc => match format {
                Format::Etc2R8G8B8UNormBlock | Format::Etc2R8G8B8SrgbBlock => Some(TextureDataFormat::ETC2_RGB),
                Format::Etc2R8G8B8A1UNormBlock | Format::Etc2R8G8B8A1SrgbBlock => Some(TextureDataFormat::ETC2_RGBA1),
                Format::Etc2R8G8B8A8UNormBlock | Format::Etc2R8G8B8A8SrgbBlock => Some(TextureDataFormat::ETC2_RGBA),
                Format::EacR11UNormBlock | Format::EacR11SNormBlock => Some(TextureDataFormat::ETC2_R),
                Format::EacR11G11UNormBlock | Format::EacR11G11SNormBlock => Some(TextureDataFormat::ETC2_RG),
                _ => None,
            },
            _ => None,
        }
    }

    fn texture_packed_float_layout(format: Format) -> Option<TextureDataFormat> {
        match format {
            Format::E5B9G9R9UFloatPack32  => Some(TextureDataFormat::_5_9_9_9),
            Format::B10G11R11UFloatPack32 => Some(TextureDataFormat::_10_11_11),
            _ => None,
        }
    }

    // Layouts derived from the channel sizes
    fn texture_structural_layout(desc: &FormatDescriptor) -> TextureDataFormat {
        // Mixed encodings can't be read, except for depth/stencil where only depth is read
        if desc.is_mixed && desc.color_space != ColorSpace::DepthStencil {
            return TextureDataFormat::Unknown;
        }

        let channels = desc.used_channels();
        let uniform = channels.iter().all(|channel| channel.size == desc.channels[0].size);
        if !uniform {
            let sizes = desc.channel_sizes();
            let Some(&(_, _, layout)) = NON_UNIFORM_TEXTURE_LAYOUTS.iter()
                .find(|(count, pattern, _)| *count == desc.channel_count && *pattern == sizes)
            else {
                return TextureDataFormat::Unknown;
            };

            let first = &desc.channels[0];
            let rejected = REJECTED_TEXTURE_LAYOUTS.iter()
                .any(|&(rejected, ty, normalized)| rejected == layout && first.ty == ty && first.normalized == normalized);
            return if rejected { TextureDataFormat::Unknown } else { layout };
        }

        let Some(reference) = desc.reference_channel() else {
            return TextureDataFormat::Unknown;
        };

        match (reference.size, desc.channel_count) {
            (4, 4)  => TextureDataFormat::_4_4_4_4,
            (8, 1)  => TextureDataFormat::_8,
            (8, 2)  => TextureDataFormat::_8_8,
            (8, 4)  => TextureDataFormat::_8_8_8_8,
            (16, 1) => TextureDataFormat::_16,
            (16, 2) => TextureDataFormat::_16_16,
            (16, 4) => TextureDataFormat::_16_16_16_16,
            (32, 1) => TextureDataFormat::_32,
            (32, 2) => TextureDataFormat::_32_32,
            (32, 3) => TextureDataFormat::_32_32_32,
            (32, 4) => TextureDataFormat::_32_32_32_32,
            _ => TextureDataFormat::Unknown,
        }
    }

    /// Get the numeric interpretation of the format when sampled from an image.
    ///
    /// The descriptor must describe a single plane.
    pub fn classify_texture_numeric(&self, format: Format, desc: &FormatDescriptor) -> TextureNumFormat {
        debug_assert!(desc.plane_count == 1, "Multi-planar format '{format}' can't be classified as a texture format");

        // The stencil channel is never sampled
        if format == Format::D24UNormS8UInt {
            return TextureNumFormat::Unorm;
        }

        let Some(reference) = desc.reference_channel() else {
            return if desc.is_compressed() {
                compressed_texture_numeric(format)
            } else if desc.layout == FormatLayout::Subsampled {
                TextureNumFormat::Unorm
            } else {
                TextureNumFormat::Float
            };
        };

        if desc.color_space == ColorSpace::Srgb {
            return TextureNumFormat::Srgb;
        }

        match (reference.ty, IntegerKind::of(reference)) {
            (ChannelType::Float, _)                          => TextureNumFormat::Float,
            (ChannelType::Signed, IntegerKind::Normalized)   => TextureNumFormat::Snorm,
            (ChannelType::Signed, IntegerKind::Integer)      => TextureNumFormat::Sint,
            (ChannelType::Signed, IntegerKind::Scaled)       => TextureNumFormat::Sscaled,
            (ChannelType::Unsigned, IntegerKind::Normalized) => TextureNumFormat::Unorm,
            (ChannelType::Unsigned, IntegerKind::Integer)    => TextureNumFormat::Uint,
            (ChannelType::Unsigned, IntegerKind::Scaled)     => TextureNumFormat::Uscaled,
            _ => TextureNumFormat::Unorm,
        }
    }
}

/// Numeric interpretation of block compressed formats, which have no channels to inspect
fn compressed_texture_numeric(format: Format) -> TextureNumFormat {
    match format {
        Format::BC1RgbSrgbBlock |
        Format::BC1RgbaSrgbBlock |
        Format::BC2SrgbBlock |
        Format::BC3SrgbBlock |
        Format::BC7SrgbBlock |
        Format::Etc2R8G8B8SrgbBlock |
        Format::Etc2R8G8B8A1SrgbBlock |
        Format::Etc2R8G8B8A8SrgbBlock |
        Format::Astc4x4SrgbBlock => TextureNumFormat::Srgb,
        Format::BC4SNormBlock |
        Format::BC5SNormBlock |
        Format::BC6HSFloatBlock |
        Format::EacR11SNormBlock |
        Format::EacR11G11SNormBlock => TextureNumFormat::Snorm,
        _ => TextureNumFormat::Unorm,
    }
}
