use crate::{
    ChannelType, ChipClass, Error, Extent3D, Format, FormatDescriptor, FormatFeatures, FormatLayout, ImageCreateFlags, ImageFormatInfo,
    ImageFormatProperties, ImageTiling, ImageType, ImageUsage, Result, SampleCounts,
};

use super::FormatCapabilityResolver;

/// Features an image format needs for each usage, a usage is allowed when any of its features is supported
const USAGE_REQUIREMENTS : [(ImageUsage, FormatFeatures, &str); 7] = [
    (ImageUsage::Sampled,                FormatFeatures::SampledImage,           "format can't be sampled"),
    (ImageUsage::Storage,                FormatFeatures::StorageImage,           "format can't be used as a storage image"),
    (ImageUsage::ColorAttachment,        FormatFeatures::ColorAttachment,        "format can't be used as a color attachment"),
    (ImageUsage::DepthStencilAttachment, FormatFeatures::DepthStencilAttachment, "format can't be used as a depth/stencil attachment"),
    (ImageUsage::TransferSrc,            FormatFeatures::TransferSrc,            "format can't be copied from"),
    (ImageUsage::TransferDst,            FormatFeatures::TransferDst,            "format can't be copied to"),
    (ImageUsage::InputAttachment,        FormatFeatures::ColorAttachment.bitor(FormatFeatures::DepthStencilAttachment), "format can't be used as an input attachment"),
];

/// Channel categories within which formats can be reinterpreted while keeping the same DCC encoding
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum DccChannelType {
    Float32,
    Uint32,
    Sint32,
    Float16,
    Uint16,
    Sint16,
    Uint10_10_10_2,
    Uint8,
    Sint8,
}

impl DccChannelType {
    fn of(desc: &FormatDescriptor) -> Option<Self> {
        let reference = desc.reference_channel()?;
        match (reference.size, reference.ty) {
            (32, ChannelType::Float)    => Some(DccChannelType::Float32),
            (32, ChannelType::Unsigned) => Some(DccChannelType::Uint32),
            (32, _)                     => Some(DccChannelType::Sint32),
            (16, ChannelType::Float)    => Some(DccChannelType::Float16),
            (16, ChannelType::Unsigned) => Some(DccChannelType::Uint16),
            (16, _)                     => Some(DccChannelType::Sint16),
            (10, _)                     => Some(DccChannelType::Uint10_10_10_2),
            (8, ChannelType::Unsigned)  => Some(DccChannelType::Uint8),
            (8, _)                      => Some(DccChannelType::Sint8),
            _ => None,
        }
    }
}

impl FormatCapabilityResolver {
    /// Get the limits of an image with the given creation parameters.
    ///
    /// Returns [`Error::FormatNotSupported`] when the format can't be used for the requested image.
    pub fn get_image_format_properties(&self, info: &ImageFormatInfo) -> Result<ImageFormatProperties> {
        let format = info.format;
        let desc = format.descriptor();
        let chip_class = self.device.chip_class;

        let props = self.get_format_properties(format);
        let features = match info.tiling {
            ImageTiling::Linear => props.linear_tiling_features,
            ImageTiling::Optimal => props.optimal_tiling_features,
        };

        if features.is_none() {
            return Err(Error::FormatNotSupported(format, "no features for the requested tiling"));
        }
        if info.ty != ImageType::Tex2D && format.is_depth_or_stencil() {
            return Err(Error::FormatNotSupported(format, "depth/stencil images need to be 2D"));
        }

        let array_layers = if chip_class >= ChipClass::Gfx10 { 8192 } else { 2048 };
        let (max_extent, mut max_mip_levels, mut max_array_layers) = match info.ty {
            ImageType::Tex1D => (Extent3D::new(16384, 1, 1), 15, array_layers),
            ImageType::Tex2D => (Extent3D::new(16384, 16384, 1), 15, array_layers),
            ImageType::Tex3D => {
                let size: u32 = if chip_class >= ChipClass::Gfx10 { 8192 } else { 2048 };
                (Extent3D::new(size, size, size), size.ilog2() + 1, 1)
            },
        };

        if desc.layout == FormatLayout::Subsampled {
            max_array_layers = 1;
        }

        let mut sample_counts = SampleCounts::X1;
        if info.tiling == ImageTiling::Optimal &&
            info.ty == ImageType::Tex2D &&
            features.intersects(FormatFeatures::ColorAttachment | FormatFeatures::DepthStencilAttachment) &&
            !info.flags.contains(ImageCreateFlags::CubeCompatible)
        {
            sample_counts |= SampleCounts::X2 | SampleCounts::X4 | SampleCounts::X8;
        }

        // Linear R32G32B32 images only support the bare minimum
        if info.tiling == ImageTiling::Linear && matches!(format, Format::R32G32B32SFloat | Format::R32G32B32UInt | Format::R32G32B32SInt) {
            if info.ty == ImageType::Tex3D {
                return Err(Error::FormatNotSupported(format, "linear R32G32B32 images can't be 3D"));
            }
            max_array_layers = 1;
            max_mip_levels = 1;
        }

        // 3D 128bpp compressed images can't be rendered to through an uncompressed view
        if chip_class >= ChipClass::Gfx9 &&
            info.ty == ImageType::Tex3D &&
            format.block_size_bits() == 128 &&
            format.is_compressed() &&
            info.flags.contains(ImageCreateFlags::BlockTexelViewCompatible) &&
            (info.flags.contains(ImageCreateFlags::ExtendedUsage) || info.usage.contains(ImageUsage::ColorAttachment))
        {
            return Err(Error::FormatNotSupported(format, "3D 128bpp compressed images can't be rendered to"));
        }

        for (usage, required, reason) in USAGE_REQUIREMENTS {
            if info.usage.contains(usage) && !features.intersects(required) {
                return Err(Error::FormatNotSupported(format, reason));
            }
        }

        if info.flags.contains(ImageCreateFlags::SparseBinding) && desc.plane_count > 1 {
            return Err(Error::FormatNotSupported(format, "sparse multi-planar images are not supported"));
        }

        Ok(ImageFormatProperties {
            max_extent,
            max_mip_levels,
            max_array_layers,
            sample_counts,
            max_resource_size: u32::MAX as u64,
        })
    }

    /// Check if an image with one format can be viewed with another format while DCC is enabled
    pub fn dcc_formats_compatible(&self, format_a: Format, format_b: Format) -> bool {
        if format_a == format_b {
            return true;
        }

        let desc_a = format_a.descriptor();
        let desc_b = format_b.descriptor();
        if desc_a.channel_count != desc_b.channel_count {
            return false;
        }

        // Only components that select a channel need to match
        let channel_count = desc_a.channel_count as usize;
        let swizzles_match = desc_a.swizzle[..channel_count].iter()
            .zip(&desc_b.swizzle[..channel_count])
            .all(|(a, b)| a.channel_index().is_none() || b.channel_index().is_none() || a == b);
        if !swizzles_match {
            return false;
        }

        match (DccChannelType::of(desc_a), DccChannelType::of(desc_b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
