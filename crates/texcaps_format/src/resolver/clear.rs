use texcaps_logging::log_verbose;

use crate::{
    pack::{float3_to_r11g11b10f, float3_to_rgb9e5, f32_to_f16_rtz, linear_to_srgb_8unorm, round_half_away_from_zero_then_truncate},
    ChannelType, ClearColorValue, ColorSpace, Error, Format, FormatDescriptor, FormatLayout, PackedClearColor, Result, LOG_CAT_CLEAR,
};

use super::FormatCapabilityResolver;

const fn channel_mask(size: u8) -> u64 {
    if size >= 64 { u64::MAX } else { (1u64 << size) - 1 }
}

impl FormatCapabilityResolver {
    /// Pack a clear color into the native layout of a format, so it can be used for a fast clear.
    ///
    /// An error means the format can't be fast cleared with this value, and a regular clear needs to be used.
    /// Formats with blocks larger than 64 bits can only be packed when the first 3 components are identical.
    pub fn pack_clear_color(&self, desc: &FormatDescriptor, clear: &ClearColorValue) -> Result<PackedClearColor> {
        let res = Self::pack_clear_color_impl(desc, clear);
        if let Err(err) = &res {
            log_verbose!(LOG_CAT_CLEAR, "Failed to pack clear color for fast clear: {err}");
        }
        res
    }

    fn pack_clear_color_impl(desc: &FormatDescriptor, clear: &ClearColorValue) -> Result<PackedClearColor> {
        let rgb = [clear.float32(0), clear.float32(1), clear.float32(2)];
        match desc.format {
            Format::B10G11R11UFloatPack32 => return Ok(PackedClearColor::new(float3_to_r11g11b10f(rgb), 0)),
            Format::E5B9G9R9UFloatPack32  => return Ok(PackedClearColor::new(float3_to_rgb9e5(rgb), 0)),
            _ => {},
        }

        if desc.layout != FormatLayout::Plain {
            return Err(Error::NonPlainLayout(desc.format));
        }

        let block_bits = desc.block.bits;
        if block_bits != 0 && !block_bits.is_power_of_two() {
            return Err(Error::NonPowerOfTwoBlock(desc.format, block_bits));
        }

        // 128-bit formats only have room for a single value for the first 3 components, and one for the 4th
        if block_bits > 64 {
            let identical = if desc.channels[0].ty == ChannelType::Float {
                clear.float32(0) == clear.float32(1) && clear.float32(0) == clear.float32(2)
            } else {
                clear.uint32(0) == clear.uint32(1) && clear.uint32(0) == clear.uint32(2)
            };
            if !identical {
                return Err(Error::MismatchedWideComponents(desc.format));
            }
            return Ok(PackedClearColor::new(clear.uint32(0), clear.uint32(3)));
        }

        let mut packed = 0u64;
        for (component, swizzle) in desc.swizzle.iter().enumerate() {
            let Some(channel_idx) = swizzle.channel_index() else {
                continue;
            };
            let channel = &desc.channels[channel_idx];

            let val = if channel.pure_integer {
                clear.uint32(component) as u64
            } else if channel.normalized {
                let val = clear.float32(component);
                if channel.ty == ChannelType::Unsigned && channel_idx < 3 && desc.color_space == ColorSpace::Srgb {
                    linear_to_srgb_8unorm(val) as u64
                } else {
                    let val = val.min(1.0);
                    let scaled = if channel.ty == ChannelType::Unsigned {
                        val.max(0.0) * channel_mask(channel.size) as f32
                    } else {
                        val.max(-1.0) * channel_mask(channel.size.saturating_sub(1)) as f32
                    };
                    round_half_away_from_zero_then_truncate(scaled)
                }
            } else if channel.ty == ChannelType::Float {
                match channel.size {
                    32 => clear.uint32(component) as u64,
                    16 => f32_to_f16_rtz(clear.float32(component)) as u64,
                    size => return Err(Error::UnhandledFloatSize(desc.format, size)),
                }
            } else {
                return Err(Error::UnhandledChannelType(desc.format, channel.ty));
            };

            packed |= (val & channel_mask(channel.size)) << channel.shift;
        }

        Ok(PackedClearColor::from_u64(packed))
    }
}
