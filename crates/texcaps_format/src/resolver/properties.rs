use texcaps_base::EnumCountT;
use texcaps_logging::log_verbose;

use crate::{
    BufferDataFormat, BufferNumFormat, CapabilityQueryResult, ChipClass, ChipFamily, ColorFormat, ColorNumFormat, Format, FormatFeatures,
    FormatLayout, FormatProperties, TextureDataFormat, TextureNumFormat, LOG_CAT,
};

use super::FormatCapabilityResolver;

/// Families with hardware ETC2/EAC decompression
const ETC_FAMILIES : [ChipFamily; 4] = [ChipFamily::Vega10, ChipFamily::Raven, ChipFamily::Raven2, ChipFamily::Stoney];

/// Layouts that support storage image access
const STORAGE_IMAGE_LAYOUTS : [TextureDataFormat; 17] = [
    TextureDataFormat::_8,
    TextureDataFormat::_16,
    TextureDataFormat::_8_8,
    TextureDataFormat::_32,
    TextureDataFormat::_16_16,
    TextureDataFormat::_10_11_11,
    TextureDataFormat::_11_11_10,
    TextureDataFormat::_10_10_10_2,
    TextureDataFormat::_2_10_10_10,
    TextureDataFormat::_8_8_8_8,
    TextureDataFormat::_32_32,
    TextureDataFormat::_16_16_16_16,
    TextureDataFormat::_32_32_32_32,
    TextureDataFormat::_5_6_5,
    TextureDataFormat::_1_5_5_5,
    TextureDataFormat::_5_5_5_1,
    TextureDataFormat::_4_4_4_4,
];

/// Formats that support min/max filtering when they can be sampled
const FILTER_MINMAX_FORMATS : [Format; 12] = [
    Format::R8UNorm,
    Format::R8SNorm,
    Format::R16UNorm,
    Format::R16SNorm,
    Format::R16SFloat,
    Format::R32SFloat,
    Format::D16UNorm,
    Format::X8D24UNormPack32,
    Format::D32SFloat,
    Format::D16UNormS8UInt,
    Format::D24UNormS8UInt,
    Format::D32SFloatS8UInt,
];

impl FormatCapabilityResolver {
    /// Check if the device can decompress ETC2 and EAC formats
    pub fn device_supports_etc(&self) -> bool {
        ETC_FAMILIES.contains(&self.device.family)
    }

    /// Check if a format can be sampled from.
    ///
    /// Returns `Some(linear_filtering)` if the format can be sampled, `None` otherwise.
    pub fn is_sampler_supported(&self, format: Format) -> Option<bool> {
        let desc = format.descriptor();
        if desc.layout == FormatLayout::Multiplane {
            return None;
        }

        let num_format = self.classify_texture_numeric(format, desc);
        if num_format.is_scaled() {
            return None;
        }
        if !self.classify_texture_layout(format, desc).is_valid() {
            return None;
        }

        Some(matches!(num_format, TextureNumFormat::Unorm | TextureNumFormat::Snorm | TextureNumFormat::Float | TextureNumFormat::Srgb))
    }

    /// Check if a format can be used as a storage image
    pub fn is_storage_image_supported(&self, format: Format) -> bool {
        let desc = format.descriptor();
        if desc.layout == FormatLayout::Multiplane {
            return false;
        }

        let data_format = self.classify_texture_layout(format, desc);
        let num_format = self.classify_texture_numeric(format, desc);

        matches!(num_format,
            TextureNumFormat::Unorm |
            TextureNumFormat::Snorm |
            TextureNumFormat::Uint |
            TextureNumFormat::Sint |
            TextureNumFormat::Float
        ) && STORAGE_IMAGE_LAYOUTS.contains(&data_format)
    }

    /// Check if a format can be read from a buffer.
    ///
    /// Returns `Some(scaled)` if the format is supported, `scaled` being set when the format is read as a scaled integer.
    pub fn is_buffer_supported(&self, format: Format) -> Option<bool> {
        let desc = format.descriptor();
        if desc.layout == FormatLayout::Multiplane {
            return None;
        }

        let data_format = self.classify_buffer_layout(desc);
        let num_format = self.classify_buffer_numeric(desc);
        if data_format == BufferDataFormat::Invalid || num_format == BufferNumFormat::Undefined {
            return None;
        }
        Some(num_format.is_scaled())
    }

    /// Check if a format can be rendered to.
    ///
    /// Returns `Some(blendable)` if the format can be used as a color attachment, `None` otherwise.
    pub fn is_color_attachment_supported(&self, format: Format) -> Option<bool> {
        let desc = format.descriptor();
        let color_format = self.classify_color_attachment_layout(desc);
        let color_swap = self.classify_color_swizzle(desc, false);
        let num_format = self.classify_color_numeric(desc);

        if format == Format::E5B9G9R9UFloatPack32 && self.device.chip_class < ChipClass::Gfx10_3 {
            return None;
        }
        if !color_format.is_valid() || !color_swap.is_valid() || !num_format.is_valid() {
            return None;
        }

        let blendable = !matches!(num_format, ColorNumFormat::Uint | ColorNumFormat::Sint) &&
            !matches!(color_format, ColorFormat::_8_24 | ColorFormat::_24_8 | ColorFormat::X24_8_32_FLOAT);
        Some(blendable)
    }

    /// Check if a format can be used as a depth/stencil attachment
    pub fn is_depth_stencil_supported(&self, format: Format) -> bool {
        self.classify_depth_format(format).is_valid() || format == Format::S8UInt
    }

    /// Check if a format supports min/max filtering
    pub fn is_filter_minmax_supported(&self, format: Format) -> bool {
        FILTER_MINMAX_FORMATS.contains(&format)
    }

    /// Get the features a format supports for linear and optimal tiling and for buffers
    pub fn get_format_properties(&self, format: Format) -> FormatProperties {
        let desc = format.descriptor();

        // TODO: Emulate subsampled formats, so they can at least be sampled
        if desc.layout == FormatLayout::Subsampled {
            return FormatProperties::default();
        }
        if desc.layout == FormatLayout::Etc && !self.device_supports_etc() {
            return FormatProperties::default();
        }

        if desc.layout == FormatLayout::Multiplane {
            let tiling = FormatFeatures::Transfer |
                FormatFeatures::SampledImage |
                FormatFeatures::CositedChromaSamples |
                FormatFeatures::MidpointChromaSamples |
                FormatFeatures::SampledImageYcbcrConversionLinearFilter;
            return FormatProperties {
                linear_tiling_features: tiling,
                optimal_tiling_features: tiling,
                buffer_features: FormatFeatures::None,
            };
        }

        let mut linear = FormatFeatures::None;
        let mut tiled = FormatFeatures::None;
        let mut buffer = FormatFeatures::None;

        if self.is_storage_image_supported(format) {
            linear |= FormatFeatures::StorageImage;
            tiled |= FormatFeatures::StorageImage;
        }

        let scaled = self.classify_buffer_numeric(desc).is_scaled();
        if self.is_buffer_supported(format).is_some() {
            buffer |= FormatFeatures::VertexBuffer;
            if !scaled {
                buffer |= FormatFeatures::UniformTexelBuffer | FormatFeatures::StorageTexelBuffer;
            }
        }

        if format.is_depth_or_stencil() {
            if self.is_depth_stencil_supported(format) {
                tiled |= FormatFeatures::DepthStencilAttachment |
                    FormatFeatures::SampledImage |
                    FormatFeatures::BlitSrc |
                    FormatFeatures::BlitDst |
                    FormatFeatures::Transfer;

                if self.is_filter_minmax_supported(format) {
                    tiled |= FormatFeatures::SampledImageFilterMinmax;
                }

                // Can't blit to combined depth/stencil surfaces
                if format.has_depth() && format.has_stencil() {
                    tiled.disable(FormatFeatures::BlitDst);
                }

                // Linear depth surfaces are not supported
                linear = FormatFeatures::None;
            }
        } else {
            if let Some(linear_filtering) = self.is_sampler_supported(format) {
                linear |= FormatFeatures::SampledImage | FormatFeatures::BlitSrc;
                tiled |= FormatFeatures::SampledImage | FormatFeatures::BlitSrc;

                if self.is_filter_minmax_supported(format) {
                    tiled |= FormatFeatures::SampledImageFilterMinmax;
                }

                if linear_filtering {
                    linear |= FormatFeatures::SampledImageFilterLinear;
                    tiled |= FormatFeatures::SampledImageFilterLinear;
                }

                // No blits from linear R32G32B32 images
                if matches!(format, Format::R32G32B32SFloat | Format::R32G32B32UInt | Format::R32G32B32SInt) {
                    linear.disable(FormatFeatures::BlitSrc);
                }
            }

            if let Some(blendable) = self.is_color_attachment_supported(format) {
                linear |= FormatFeatures::ColorAttachment | FormatFeatures::BlitDst;
                tiled |= FormatFeatures::ColorAttachment | FormatFeatures::BlitDst;
                if blendable {
                    linear |= FormatFeatures::ColorAttachmentBlend;
                    tiled |= FormatFeatures::ColorAttachmentBlend;
                }
            }

            if tiled.is_any() && !scaled {
                tiled |= FormatFeatures::Transfer;
            }

            // Tiled images need a power of 2 texel size
            let block_size = format.block_size();
            if block_size != 0 && !block_size.is_power_of_two() {
                tiled = FormatFeatures::None;
            }
        }

        if linear.is_any() && !scaled {
            linear |= FormatFeatures::Transfer;
        }

        if matches!(format, Format::R32UInt | Format::R32SInt | Format::R32SFloat) {
            buffer |= FormatFeatures::StorageTexelBufferAtomic;
            linear |= FormatFeatures::StorageImageAtomic;
            tiled |= FormatFeatures::StorageImageAtomic;
        }

        // Signed 2/10/10/10 formats are broken on older chips
        let signed_a2 = matches!(format,
            Format::A2R10G10B10SNormPack32 |
            Format::A2B10G10R10SNormPack32 |
            Format::A2R10G10B10SScaledPack32 |
            Format::A2B10G10R10SScaledPack32 |
            Format::A2R10G10B10SIntPack32 |
            Format::A2B10G10R10SIntPack32
        );
        if signed_a2 && self.device.chip_class <= ChipClass::Gfx8 && self.device.family != ChipFamily::Stoney {
            buffer.disable(FormatFeatures::UniformTexelBuffer | FormatFeatures::StorageTexelBuffer);
            linear = FormatFeatures::None;
            tiled = FormatFeatures::None;
        }

        // No linear compressed images
        if format.is_compressed() {
            linear = FormatFeatures::None;
        }

        FormatProperties {
            linear_tiling_features: linear,
            optimal_tiling_features: tiled,
            buffer_features: buffer,
        }
    }

    /// Get the format properties of every format
    pub fn get_format_properties_table(&self) -> Vec<(Format, FormatProperties)> {
        let mut table = Vec::with_capacity(Format::COUNT);
        Format::for_each(|format| table.push((format, self.get_format_properties(format))));

        let supported = table.iter().filter(|(_, props)| !props.is_empty()).count();
        log_verbose!(LOG_CAT, "Built format properties for {} formats on {} ({}), {supported} have features", table.len(), self.device.family, self.device.chip_class);
        table
    }

    /// Get the hardware encodings of a format, together with the usages it supports
    pub fn query_capabilities(&self, format: Format) -> CapabilityQueryResult {
        let desc = format.descriptor();
        let props = self.get_format_properties(format);

        // Planes are classified separately, every plane of the multi-planar formats is an 8-bit unorm plane
        let (buffer_data_format, buffer_num_format, texture_data_format, texture_num_format) = if desc.layout == FormatLayout::Multiplane {
            (BufferDataFormat::Invalid, BufferNumFormat::Undefined, TextureDataFormat::Unknown, TextureNumFormat::Unorm)
        } else {
            (
                self.classify_buffer_layout(desc),
                self.classify_buffer_numeric(desc),
                self.classify_texture_layout(format, desc),
                self.classify_texture_numeric(format, desc),
            )
        };

        let image = props.linear_tiling_features | props.optimal_tiling_features;
        let buffer = props.buffer_features;
        CapabilityQueryResult {
            buffer_data_format,
            buffer_num_format,
            texture_data_format,
            texture_num_format,
            sampling: image.contains(FormatFeatures::SampledImage),
            linear_filtering: image.contains(FormatFeatures::SampledImageFilterLinear),
            storage_image: image.contains(FormatFeatures::StorageImage),
            vertex_buffer: buffer.contains(FormatFeatures::VertexBuffer),
            texel_buffer: buffer.intersects(FormatFeatures::UniformTexelBuffer | FormatFeatures::StorageTexelBuffer),
            color_attachment: image.contains(FormatFeatures::ColorAttachment),
            blendable: image.contains(FormatFeatures::ColorAttachmentBlend),
            depth_stencil_attachment: image.contains(FormatFeatures::DepthStencilAttachment),
        }
    }
}
