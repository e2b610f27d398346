use cfg_if::cfg_if;

use crate::{
    ChannelType, ColorEndian, ColorFormat, ColorNumFormat, ColorSpace, ColorSwap, DepthFormat, Format, FormatDescriptor, FormatLayout,
    Swizzle as S,
};

use super::{FormatCapabilityResolver, IntegerKind};

impl FormatCapabilityResolver {
    /// Get the render target layout of a format.
    pub fn classify_color_attachment_layout(&self, desc: &FormatDescriptor) -> ColorFormat {
        match desc.format {
            Format::B10G11R11UFloatPack32 => return ColorFormat::_10_11_11,
            Format::E5B9G9R9UFloatPack32  => return ColorFormat::_5_9_9_9,
            _ => {},
        }

        if desc.layout != FormatLayout::Plain {
            return ColorFormat::Invalid;
        }
        // Mixed encodings can't be written, except for depth/stencil where stencil is not written
        if desc.is_mixed && desc.color_space != ColorSpace::DepthStencil {
            return ColorFormat::Invalid;
        }

        // Packed layouts are named from the hardware's point of view, so 5/5/5/1 maps to 1_5_5_5 and vice versa
        match (desc.channel_count, desc.channel_sizes()) {
            (1, [8, ..])               => ColorFormat::_8,
            (1, [16, ..])              => ColorFormat::_16,
            (1, [32, ..])              => ColorFormat::_32,
            (2, [8, 8, ..])            => ColorFormat::_8_8,
            (2, [16, 16, ..])          => ColorFormat::_16_16,
            (2, [32, 32, ..])          => ColorFormat::_32_32,
            (2, [8, 24, 0, 0])         => ColorFormat::_24_8,
            (2, [24, 8, 0, 0])         => ColorFormat::_8_24,
            (3, [5, 6, 5, 0])          => ColorFormat::_5_6_5,
            (3, [32, 8, 24, 0])        => ColorFormat::X24_8_32_FLOAT,
            (4, [4, 4, 4, 4])          => ColorFormat::_4_4_4_4,
            (4, [8, 8, 8, 8])          => ColorFormat::_8_8_8_8,
            (4, [16, 16, 16, 16])      => ColorFormat::_16_16_16_16,
            (4, [32, 32, 32, 32])      => ColorFormat::_32_32_32_32,
            (4, [5, 5, 5, 1])          => ColorFormat::_1_5_5_5,
            (4, [1, 5, 5, 5])          => ColorFormat::_5_5_5_1,
            (4, [10, 10, 10, 2])       => ColorFormat::_2_10_10_10,
            _ => ColorFormat::Invalid,
        }
    }

    /// Get the render target numeric interpretation of a format, scaled formats can't be rendered to.
    pub fn classify_color_numeric(&self, desc: &FormatDescriptor) -> ColorNumFormat {
        let Some(reference) = desc.reference_channel() else {
            return ColorNumFormat::Float;
        };
        if reference.ty == ChannelType::Float {
            return ColorNumFormat::Float;
        }
        if desc.color_space == ColorSpace::Srgb {
            return ColorNumFormat::Srgb;
        }

        match (reference.ty, IntegerKind::of(reference)) {
            // pure integer takes precedence over normalized for render targets
            (ChannelType::Signed, _) if reference.pure_integer   => ColorNumFormat::Sint,
            (ChannelType::Signed, IntegerKind::Normalized)       => ColorNumFormat::Snorm,
            (ChannelType::Signed, _)                             => ColorNumFormat::Invalid,
            (ChannelType::Unsigned, _) if reference.pure_integer => ColorNumFormat::Uint,
            (ChannelType::Unsigned, IntegerKind::Normalized)     => ColorNumFormat::Unorm,
            (ChannelType::Unsigned, _)                           => ColorNumFormat::Invalid,
            _ => ColorNumFormat::Unorm,
        }
    }

    /// Get the component reordering needed to write the format's swizzle to a render target.
    ///
    /// `swap_bytes` requests the order used when the render target is byte swapped.
    pub fn classify_color_swizzle(&self, desc: &FormatDescriptor, swap_bytes: bool) -> ColorSwap {
        if matches!(desc.format, Format::B10G11R11UFloatPack32 | Format::E5B9G9R9UFloatPack32) {
            return ColorSwap::Std;
        }
        if desc.layout != FormatLayout::Plain {
            return ColorSwap::Invalid;
        }

        let swizzle = desc.swizzle;
        match desc.channel_count {
            1 => match swizzle {
                [S::X, ..] => ColorSwap::Std,
                [.., S::X] => ColorSwap::AltRev,
                _ => ColorSwap::Invalid,
            },
            // unused components act as wildcards
            2 => match (swizzle[0], swizzle[1], swizzle[3]) {
                (S::X, S::Y, _) | (S::X, S::None, _) | (S::None, S::Y, _) => ColorSwap::Std,
                (S::Y, S::X, _) | (S::Y, S::None, _) | (S::None, S::X, _) => if swap_bytes { ColorSwap::Std } else { ColorSwap::StdRev },
                (S::X, _, S::Y) => ColorSwap::Alt,
                (S::Y, _, S::X) => ColorSwap::AltRev,
                _ => ColorSwap::Invalid,
            },
            3 => match swizzle[0] {
                S::X => if swap_bytes { ColorSwap::StdRev } else { ColorSwap::Std },
                S::Z => ColorSwap::StdRev,
                _ => ColorSwap::Invalid,
            },
            // only the middle components are checked, the outer ones may be unused
            4 => match (swizzle[1], swizzle[2]) {
                (S::Y, S::Z) => ColorSwap::Std,
                (S::Z, S::Y) => ColorSwap::StdRev,
                (S::Y, S::X) => ColorSwap::Alt,
                (S::Z, S::W) => if desc.is_array || !swap_bytes { ColorSwap::AltRev } else { ColorSwap::Alt },
                _ => ColorSwap::Invalid,
            },
            _ => ColorSwap::Invalid,
        }
    }

    /// Get the depth buffer layout of a format
    pub fn classify_depth_format(&self, format: Format) -> DepthFormat {
        match format {
            Format::D16UNorm | Format::D16UNormS8UInt   => DepthFormat::Z16,
            Format::D32SFloat | Format::D32SFloatS8UInt => DepthFormat::Z32Float,
            _ => DepthFormat::Invalid,
        }
    }

    /// Get the byte swap needed to write a render target layout on the host
    pub fn color_endian_swap(&self, color_format: ColorFormat) -> ColorEndian {
        cfg_if!{
            if #[cfg(target_endian = "big")] {
                color_format.big_endian_swap()
            } else {
                let _ = color_format;
                ColorEndian::None
            }
        }
    }
}

impl ColorFormat {
    /// Byte swap needed to write this layout from a big-endian host
    pub fn big_endian_swap(self) -> ColorEndian {
        match self {
            ColorFormat::_8 => ColorEndian::None,

            ColorFormat::_5_6_5 |
            ColorFormat::_1_5_5_5 |
            ColorFormat::_4_4_4_4 |
            ColorFormat::_16 |
            ColorFormat::_8_8 => ColorEndian::Swap8In16,

            ColorFormat::_8_8_8_8 |
            ColorFormat::_2_10_10_10 |
            ColorFormat::_8_24 |
            ColorFormat::_24_8 |
            ColorFormat::_16_16 => ColorEndian::Swap8In32,

            // 64-bit
            ColorFormat::_16_16_16_16 => ColorEndian::Swap8In16,
            ColorFormat::_32_32 => ColorEndian::Swap8In32,

            // 128-bit
            ColorFormat::_32_32_32_32 => ColorEndian::Swap8In32,

            _ => ColorEndian::None,
        }
    }
}
