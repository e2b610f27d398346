use texcaps_base::EnumCountT;

use crate::*;
use crate::pack::{float3_to_r11g11b10f, round_half_away_from_zero_then_truncate};

fn resolver(family: ChipFamily) -> FormatCapabilityResolver {
    FormatCapabilityResolver::new(DeviceInfo::new(family))
}

fn vega() -> FormatCapabilityResolver {
    resolver(ChipFamily::Vega10)
}

fn single_plane_formats() -> Vec<Format> {
    let mut formats = Vec::new();
    Format::for_each(|format| if format.plane_count() == 1 {
        formats.push(format);
    });
    formats
}

//==============================================================================================================================
// Classification
//==============================================================================================================================

#[test]
fn uniform_layouts_are_named_consistently() {
    let resolver = vega();
    let mut checked = 0;
    for format in single_plane_formats() {
        let desc = format.descriptor();
        if desc.layout != FormatLayout::Plain || desc.color_space != ColorSpace::Rgb || desc.is_mixed {
            continue;
        }
        if !matches!(desc.channel_count, 1 | 2 | 4) {
            continue;
        }
        let size = desc.channels[0].size;
        if !matches!(size, 8 | 16 | 32) || desc.used_channels().iter().any(|channel| channel.size != size) {
            continue;
        }

        let buffer = resolver.classify_buffer_layout(desc);
        let texture = resolver.classify_texture_layout(format, desc);
        assert!(buffer.is_valid(), "{format} has no buffer layout");
        assert!(texture.is_valid(), "{format} has no texture layout");
        assert_eq!(buffer.to_string(), texture.to_string(), "{format}");
        checked += 1;
    }
    assert!(checked > 50);
}

#[test]
fn fixed_point_buffers_are_invalid() {
    let resolver = vega();
    let fixed = ChannelDescriptor::fixed;

    let descs = [
        FormatDescriptor::plain(Format::R32SFloat, &[fixed(32)], Swizzle::from_pattern(b"x001"), ColorSpace::Rgb),
        FormatDescriptor::plain(Format::R16G16B16A16SFloat, &[fixed(16), fixed(16), fixed(16), fixed(16)], Swizzle::from_pattern(b"xyzw"), ColorSpace::Rgb),
        FormatDescriptor::plain(Format::A2B10G10R10UNormPack32, &[fixed(10), fixed(10), fixed(10), fixed(2)], Swizzle::from_pattern(b"xyzw"), ColorSpace::Rgb),
    ];
    for desc in &descs {
        assert_eq!(resolver.classify_buffer_layout(desc), BufferDataFormat::Invalid);
    }
}

#[test]
fn buffer_layouts() {
    let resolver = vega();
    let layout = |format: Format| resolver.classify_buffer_layout(format.descriptor());

    assert_eq!(layout(Format::R8UNorm), BufferDataFormat::_8);
    assert_eq!(layout(Format::R16G16SFloat), BufferDataFormat::_16_16);
    assert_eq!(layout(Format::R32G32B32SFloat), BufferDataFormat::_32_32_32);
    assert_eq!(layout(Format::A2R10G10B10UIntPack32), BufferDataFormat::_2_10_10_10);
    assert_eq!(layout(Format::B10G11R11UFloatPack32), BufferDataFormat::_10_11_11);
    // 3 channels are only supported at 32 bits
    assert_eq!(layout(Format::R8G8B8UNorm), BufferDataFormat::Invalid);
    assert_eq!(layout(Format::R5G6B5UNormPack16), BufferDataFormat::Invalid);
    assert_eq!(layout(Format::BC1RgbUNormBlock), BufferDataFormat::Invalid);
}

#[test]
fn buffer_numerics() {
    let resolver = vega();
    let numeric = |format: Format| resolver.classify_buffer_numeric(format.descriptor());

    assert_eq!(numeric(Format::R8SNorm), BufferNumFormat::Snorm);
    assert_eq!(numeric(Format::R8SInt), BufferNumFormat::Sint);
    assert_eq!(numeric(Format::R8SScaled), BufferNumFormat::Sscaled);
    assert_eq!(numeric(Format::R16UNorm), BufferNumFormat::Unorm);
    assert_eq!(numeric(Format::R16UInt), BufferNumFormat::Uint);
    assert_eq!(numeric(Format::R16UScaled), BufferNumFormat::Uscaled);
    assert_eq!(numeric(Format::R32SFloat), BufferNumFormat::Float);
    assert_eq!(numeric(Format::B10G11R11UFloatPack32), BufferNumFormat::Float);
    assert_eq!(numeric(Format::BC7UNormBlock), BufferNumFormat::Undefined);
}

#[test]
fn texture_layouts() {
    let resolver = vega();
    let layout = |format: Format| resolver.classify_texture_layout(format, format.descriptor());

    assert_eq!(layout(Format::D16UNorm), TextureDataFormat::_16);
    assert_eq!(layout(Format::D24UNormS8UInt), TextureDataFormat::_8_24);
    assert_eq!(layout(Format::X8D24UNormPack32), TextureDataFormat::_8_24);
    assert_eq!(layout(Format::S8UInt), TextureDataFormat::_8);
    assert_eq!(layout(Format::D32SFloatS8UInt), TextureDataFormat::X24_8_32);
    assert_eq!(layout(Format::R8G8Srgb), TextureDataFormat::Unknown);
    assert_eq!(layout(Format::R8G8B8A8Srgb), TextureDataFormat::_8_8_8_8);
    assert_eq!(layout(Format::G8B8G8R8422UNorm), TextureDataFormat::BG_RG);
    assert_eq!(layout(Format::B8G8R8G8422UNorm), TextureDataFormat::GB_GR);
    assert_eq!(layout(Format::BC1RgbaSrgbBlock), TextureDataFormat::BC1);
    assert_eq!(layout(Format::BC5SNormBlock), TextureDataFormat::BC5);
    assert_eq!(layout(Format::BC6HUFloatBlock), TextureDataFormat::BC6);
    assert_eq!(layout(Format::EacR11G11UNormBlock), TextureDataFormat::ETC2_RG);
    assert_eq!(layout(Format::Astc4x4UNormBlock), TextureDataFormat::Unknown);
    assert_eq!(layout(Format::E5B9G9R9UFloatPack32), TextureDataFormat::_5_9_9_9);
    assert_eq!(layout(Format::B10G11R11UFloatPack32), TextureDataFormat::_10_11_11);
    assert_eq!(layout(Format::R5G6B5UNormPack16), TextureDataFormat::_5_6_5);
    assert_eq!(layout(Format::R5G5B5A1UNormPack16), TextureDataFormat::_5_5_5_1);
    assert_eq!(layout(Format::A1R5G5B5UNormPack16), TextureDataFormat::_1_5_5_5);
    assert_eq!(layout(Format::R4G4B4A4UNormPack16), TextureDataFormat::_4_4_4_4);
    assert_eq!(layout(Format::A2B10G10R10UNormPack32), TextureDataFormat::_2_10_10_10);
    // No hardware encoding for signed normalized 2/10/10/10
    assert_eq!(layout(Format::A2B10G10R10SNormPack32), TextureDataFormat::Unknown);
    assert_eq!(layout(Format::A2B10G10R10SIntPack32), TextureDataFormat::_2_10_10_10);
    assert_eq!(layout(Format::R8G8B8UNorm), TextureDataFormat::Unknown);
}

#[test]
fn compressed_srgb_numerics() {
    let resolver = vega();
    let mut srgb_count = 0;
    for format in single_plane_formats() {
        if !format.is_compressed() {
            continue;
        }

        let numeric = resolver.classify_texture_numeric(format, format.descriptor());
        if format.descriptor().color_space == ColorSpace::Srgb {
            assert_eq!(numeric, TextureNumFormat::Srgb, "{format}");
            srgb_count += 1;
        } else {
            assert!(matches!(numeric, TextureNumFormat::Unorm | TextureNumFormat::Snorm), "{format} is {numeric}");
        }
    }
    assert_eq!(srgb_count, 9);

    let numeric = |format: Format| resolver.classify_texture_numeric(format, format.descriptor());
    assert_eq!(numeric(Format::BC4SNormBlock), TextureNumFormat::Snorm);
    assert_eq!(numeric(Format::BC4UNormBlock), TextureNumFormat::Unorm);
    assert_eq!(numeric(Format::EacR11G11SNormBlock), TextureNumFormat::Snorm);
}

#[test]
fn texture_numerics() {
    let resolver = vega();
    let numeric = |format: Format| resolver.classify_texture_numeric(format, format.descriptor());

    // The stencil part is never sampled
    assert_eq!(numeric(Format::D24UNormS8UInt), TextureNumFormat::Unorm);
    assert_eq!(numeric(Format::D32SFloat), TextureNumFormat::Float);
    assert_eq!(numeric(Format::R8Srgb), TextureNumFormat::Srgb);
    assert_eq!(numeric(Format::R16G16SScaled), TextureNumFormat::Sscaled);
    assert_eq!(numeric(Format::R32UInt), TextureNumFormat::Uint);
    assert_eq!(numeric(Format::G8B8G8R8422UNorm), TextureNumFormat::Unorm);
}

#[test]
fn color_attachment_layouts() {
    let resolver = vega();
    let layout = |format: Format| resolver.classify_color_attachment_layout(format.descriptor());

    assert_eq!(layout(Format::R8UNorm), ColorFormat::_8);
    assert_eq!(layout(Format::R16G16SFloat), ColorFormat::_16_16);
    assert_eq!(layout(Format::D24UNormS8UInt), ColorFormat::_8_24);
    assert_eq!(layout(Format::D32SFloatS8UInt), ColorFormat::X24_8_32_FLOAT);
    assert_eq!(layout(Format::R5G6B5UNormPack16), ColorFormat::_5_6_5);
    // Named from the hardware's point of view
    assert_eq!(layout(Format::R5G5B5A1UNormPack16), ColorFormat::_5_5_5_1);
    assert_eq!(layout(Format::A1R5G5B5UNormPack16), ColorFormat::_1_5_5_5);
    assert_eq!(layout(Format::A2R10G10B10UNormPack32), ColorFormat::_2_10_10_10);
    assert_eq!(layout(Format::B10G11R11UFloatPack32), ColorFormat::_10_11_11);
    assert_eq!(layout(Format::E5B9G9R9UFloatPack32), ColorFormat::_5_9_9_9);
    assert_eq!(layout(Format::R8G8B8UNorm), ColorFormat::Invalid);
    assert_eq!(layout(Format::BC1RgbUNormBlock), ColorFormat::Invalid);
}

#[test]
fn mixed_channel_types_are_rejected_outside_depth_stencil() {
    let resolver = vega();
    let channels = [ChannelDescriptor::unorm(8), ChannelDescriptor::sint(8)];
    let swizzle = Swizzle::from_pattern(b"xy01");

    let mixed = FormatDescriptor::plain(Format::R8G8UNorm, &channels, swizzle, ColorSpace::Rgb);
    assert!(mixed.is_mixed);
    assert_eq!(resolver.classify_texture_layout(Format::R8G8UNorm, &mixed), TextureDataFormat::Unknown);
    assert_eq!(resolver.classify_color_attachment_layout(&mixed), ColorFormat::Invalid);

    let depth_stencil = FormatDescriptor::plain(Format::R8G8UNorm, &channels, swizzle, ColorSpace::DepthStencil);
    assert!(depth_stencil.is_mixed);
    assert_eq!(resolver.classify_color_attachment_layout(&depth_stencil), ColorFormat::_8_8);
}

#[test]
fn color_numerics() {
    let resolver = vega();
    let numeric = |format: Format| resolver.classify_color_numeric(format.descriptor());

    assert_eq!(numeric(Format::R8G8B8A8UNorm), ColorNumFormat::Unorm);
    assert_eq!(numeric(Format::R8G8B8A8Srgb), ColorNumFormat::Srgb);
    assert_eq!(numeric(Format::R8G8B8A8SInt), ColorNumFormat::Sint);
    assert_eq!(numeric(Format::R16SNorm), ColorNumFormat::Snorm);
    assert_eq!(numeric(Format::R16SFloat), ColorNumFormat::Float);
    assert_eq!(numeric(Format::R8UScaled), ColorNumFormat::Invalid);
    assert_eq!(numeric(Format::R8SScaled), ColorNumFormat::Invalid);
}

#[test]
fn color_swizzles() {
    let resolver = vega();
    let swap = |format: Format, swap_bytes: bool| resolver.classify_color_swizzle(format.descriptor(), swap_bytes);

    assert_eq!(swap(Format::R8UNorm, false), ColorSwap::Std);
    assert_eq!(swap(Format::S8UInt, false), ColorSwap::Invalid);
    assert_eq!(swap(Format::R8G8B8A8UNorm, false), ColorSwap::Std);
    assert_eq!(swap(Format::R5G6B5UNormPack16, false), ColorSwap::StdRev);
    assert_eq!(swap(Format::B5G6R5UNormPack16, false), ColorSwap::Std);
    assert_eq!(swap(Format::B5G6R5UNormPack16, true), ColorSwap::StdRev);
    assert_eq!(swap(Format::R4G4B4A4UNormPack16, false), ColorSwap::StdRev);
    assert_eq!(swap(Format::E5B9G9R9UFloatPack32, true), ColorSwap::Std);
    assert_eq!(swap(Format::BC3UNormBlock, false), ColorSwap::Invalid);

    // Y and X in the middle
    assert_eq!(swap(Format::B8G8R8A8UNorm, false), ColorSwap::Alt);
    assert_eq!(swap(Format::A1R5G5B5UNormPack16, false), ColorSwap::Alt);
}

#[test]
fn w_swap_depends_on_array_and_byte_swap() {
    let resolver = vega();

    let packed = Format::B4G4R4A4UNormPack16.descriptor();
    assert!(!packed.is_array);
    let array = FormatDescriptor::plain(Format::R8G8B8A8UNorm, &[ChannelDescriptor::unorm(8); 4], Swizzle::from_pattern(b"yzwx"), ColorSpace::Rgb);
    assert!(array.is_array);

    let array_swap = resolver.classify_color_swizzle(&array, true);
    let packed_swap = resolver.classify_color_swizzle(packed, true);
    assert_eq!(array_swap, ColorSwap::AltRev);
    assert_eq!(packed_swap, ColorSwap::Alt);
    assert_ne!(array_swap, packed_swap);

    assert_eq!(resolver.classify_color_swizzle(packed, false), ColorSwap::AltRev);
}

#[test]
fn two_channel_swizzle_wildcards() {
    let resolver = vega();
    let two = |pattern: &[u8; 4]| {
        let desc = FormatDescriptor::plain(Format::R8G8UNorm, &[ChannelDescriptor::unorm(8); 2], Swizzle::from_pattern(pattern), ColorSpace::Rgb);
        (resolver.classify_color_swizzle(&desc, false), resolver.classify_color_swizzle(&desc, true))
    };

    assert_eq!(two(b"xy01"), (ColorSwap::Std, ColorSwap::Std));
    assert_eq!(two(b"x_01"), (ColorSwap::Std, ColorSwap::Std));
    assert_eq!(two(b"yx01"), (ColorSwap::StdRev, ColorSwap::Std));
    assert_eq!(two(b"x00y"), (ColorSwap::Alt, ColorSwap::Alt));
    assert_eq!(two(b"y00x"), (ColorSwap::AltRev, ColorSwap::AltRev));
    assert_eq!(two(b"0000"), (ColorSwap::Invalid, ColorSwap::Invalid));
}

#[test]
fn depth_formats() {
    let resolver = vega();
    assert_eq!(resolver.classify_depth_format(Format::D16UNorm), DepthFormat::Z16);
    assert_eq!(resolver.classify_depth_format(Format::D16UNormS8UInt), DepthFormat::Z16);
    assert_eq!(resolver.classify_depth_format(Format::D32SFloatS8UInt), DepthFormat::Z32Float);
    assert_eq!(resolver.classify_depth_format(Format::D24UNormS8UInt), DepthFormat::Invalid);
    assert_eq!(resolver.classify_depth_format(Format::R32SFloat), DepthFormat::Invalid);
}

#[test]
fn endian_swap() {
    #[cfg(target_endian = "little")]
    assert_eq!(vega().color_endian_swap(ColorFormat::_8_8_8_8), ColorEndian::None);

    assert_eq!(ColorFormat::_8_8_8_8.big_endian_swap(), ColorEndian::Swap8In32);
    assert_eq!(ColorFormat::_16_16_16_16.big_endian_swap(), ColorEndian::Swap8In16);
    assert_eq!(ColorFormat::_8.big_endian_swap(), ColorEndian::None);
}

#[test]
fn classification_is_idempotent() {
    let resolver = vega();
    for format in single_plane_formats() {
        let desc = format.descriptor();
        assert_eq!(resolver.classify_buffer_layout(desc), resolver.classify_buffer_layout(desc));
        assert_eq!(resolver.classify_buffer_numeric(desc), resolver.classify_buffer_numeric(desc));
        assert_eq!(resolver.classify_texture_layout(format, desc), resolver.classify_texture_layout(format, desc));
        assert_eq!(resolver.classify_texture_numeric(format, desc), resolver.classify_texture_numeric(format, desc));
        assert_eq!(resolver.classify_color_attachment_layout(desc), resolver.classify_color_attachment_layout(desc));
        assert_eq!(resolver.classify_color_numeric(desc), resolver.classify_color_numeric(desc));
        assert_eq!(resolver.classify_color_swizzle(desc, true), resolver.classify_color_swizzle(desc, true));
    }
}

//==============================================================================================================================
// Clear colors
//==============================================================================================================================

#[test]
fn wide_clear_needs_identical_components() {
    let resolver = vega();
    let desc = Format::R32G32B32A32SFloat.descriptor();

    let packed = resolver.pack_clear_color(desc, &ClearColorValue::Float([1.0, 1.0, 1.0, 0.5]));
    assert_eq!(packed, Ok(PackedClearColor::new(1.0f32.to_bits(), 0.5f32.to_bits())));

    let packed = resolver.pack_clear_color(desc, &ClearColorValue::Float([1.0, 0.5, 1.0, 0.5]));
    assert_eq!(packed, Err(Error::MismatchedWideComponents(Format::R32G32B32A32SFloat)));

    let desc = Format::R32G32B32A32UInt.descriptor();
    let packed = resolver.pack_clear_color(desc, &ClearColorValue::Unsigned([7, 7, 7, 9]));
    assert_eq!(packed, Ok(PackedClearColor::new(7, 9)));
}

#[test]
fn unorm_clear_rounds_away_from_zero() {
    let resolver = vega();
    let desc = Format::R8UNorm.descriptor();

    let packed = resolver.pack_clear_color(desc, &ClearColorValue::Float([1.0, 0.0, 0.0, 0.0]));
    assert_eq!(packed.map(|packed| packed.words), Ok([255, 0]));
    let packed = resolver.pack_clear_color(desc, &ClearColorValue::Float([0.5, 0.0, 0.0, 0.0]));
    assert_eq!(packed.map(|packed| packed.words), Ok([128, 0]));
    // Out of range values are clamped
    let packed = resolver.pack_clear_color(desc, &ClearColorValue::Float([-3.0, 0.0, 0.0, 0.0]));
    assert_eq!(packed.map(|packed| packed.words), Ok([0, 0]));

    assert_eq!(round_half_away_from_zero_then_truncate(254.5), 255);
    assert_eq!(round_half_away_from_zero_then_truncate(0.5), 1);
}

#[test]
fn snorm_clear_is_masked() {
    let resolver = vega();
    let packed = resolver.pack_clear_color(Format::R8SNorm.descriptor(), &ClearColorValue::Float([-1.0, 0.0, 0.0, 0.0]));
    assert_eq!(packed.map(|packed| packed.as_u64()), Ok(0x81));
    let packed = resolver.pack_clear_color(Format::R8SNorm.descriptor(), &ClearColorValue::Float([1.0, 0.0, 0.0, 0.0]));
    assert_eq!(packed.map(|packed| packed.as_u64()), Ok(0x7F));
}

#[test]
fn clear_follows_channel_offsets() {
    let resolver = vega();
    let red = ClearColorValue::Float([1.0, 0.0, 0.0, 1.0]);

    let packed = resolver.pack_clear_color(Format::B8G8R8A8UNorm.descriptor(), &red);
    assert_eq!(packed.map(|packed| packed.as_u64()), Ok(0xFFFF_0000));
    let packed = resolver.pack_clear_color(Format::R8G8B8A8UNorm.descriptor(), &red);
    assert_eq!(packed.map(|packed| packed.as_u64()), Ok(0xFF00_00FF));
    // Alpha is a constant in the swizzle, so it isn't written
    let packed = resolver.pack_clear_color(Format::R5G6B5UNormPack16.descriptor(), &red);
    assert_eq!(packed.map(|packed| packed.as_u64()), Ok(0xF800));
}

#[test]
fn srgb_and_integer_clears() {
    let resolver = vega();

    let packed = resolver.pack_clear_color(Format::R8G8B8A8Srgb.descriptor(), &ClearColorValue::Float([0.5, 0.5, 0.5, 0.5]));
    assert_eq!(packed.map(|packed| packed.as_u64()), Ok(0x80BC_BCBC));

    let packed = resolver.pack_clear_color(Format::R8UInt.descriptor(), &ClearColorValue::Unsigned([300, 0, 0, 0]));
    assert_eq!(packed.map(|packed| packed.as_u64()), Ok(44));

    let packed = resolver.pack_clear_color(Format::R16G16SInt.descriptor(), &ClearColorValue::Integer([-1, 2, 0, 0]));
    assert_eq!(packed.map(|packed| packed.as_u64()), Ok(0x0002_FFFF));
}

#[test]
fn float_clears() {
    let resolver = vega();

    let packed = resolver.pack_clear_color(Format::R16G16B16A16SFloat.descriptor(), &ClearColorValue::Float([1.0; 4]));
    assert_eq!(packed, Ok(PackedClearColor::new(0x3C00_3C00, 0x3C00_3C00)));

    let packed = resolver.pack_clear_color(Format::R32G32SFloat.descriptor(), &ClearColorValue::Float([1.0, -2.0, 0.0, 0.0]));
    assert_eq!(packed, Ok(PackedClearColor::new(1.0f32.to_bits(), (-2.0f32).to_bits())));

    let rgb = [0.25, 1.0, 4.0];
    let packed = resolver.pack_clear_color(Format::B10G11R11UFloatPack32.descriptor(), &ClearColorValue::Float([0.25, 1.0, 4.0, 1.0]));
    assert_eq!(packed, Ok(PackedClearColor::new(float3_to_r11g11b10f(rgb), 0)));
}

#[test]
fn unsupported_clears_fail() {
    let resolver = vega();
    let clear = ClearColorValue::Float([1.0; 4]);

    assert_eq!(
        resolver.pack_clear_color(Format::BC1RgbUNormBlock.descriptor(), &clear),
        Err(Error::NonPlainLayout(Format::BC1RgbUNormBlock))
    );
    assert_eq!(
        resolver.pack_clear_color(Format::R8G8B8UNorm.descriptor(), &clear),
        Err(Error::NonPowerOfTwoBlock(Format::R8G8B8UNorm, 24))
    );

    let fixed = FormatDescriptor::plain(Format::R32SFloat, &[ChannelDescriptor::fixed(32)], Swizzle::from_pattern(b"x001"), ColorSpace::Rgb);
    assert_eq!(resolver.pack_clear_color(&fixed, &clear), Err(Error::UnhandledChannelType(Format::R32SFloat, ChannelType::Fixed)));

    let mini_float = FormatDescriptor::plain(Format::R8UNorm, &[ChannelDescriptor::float(8)], Swizzle::from_pattern(b"x001"), ColorSpace::Rgb);
    assert_eq!(resolver.pack_clear_color(&mini_float, &clear), Err(Error::UnhandledFloatSize(Format::R8UNorm, 8)));
}

//==============================================================================================================================
// Format properties
//==============================================================================================================================

#[test]
fn common_color_format_features() {
    let resolver = vega();
    let props = resolver.get_format_properties(Format::R8G8B8A8UNorm);

    let expected = FormatFeatures::SampledImage |
        FormatFeatures::StorageImage |
        FormatFeatures::ColorAttachment |
        FormatFeatures::ColorAttachmentBlend |
        FormatFeatures::BlitSrc |
        FormatFeatures::BlitDst |
        FormatFeatures::SampledImageFilterLinear |
        FormatFeatures::Transfer;
    assert_eq!(props.optimal_tiling_features, expected);
    assert_eq!(props.linear_tiling_features, expected);
    assert_eq!(props.buffer_features, FormatFeatures::VertexBuffer | FormatFeatures::UniformTexelBuffer | FormatFeatures::StorageTexelBuffer);
}

#[test]
fn scaled_formats_are_vertex_only() {
    let resolver = vega();
    let props = resolver.get_format_properties(Format::R8G8B8A8UScaled);
    assert_eq!(props.buffer_features, FormatFeatures::VertexBuffer);
    assert!(props.linear_tiling_features.is_none());
    assert!(props.optimal_tiling_features.is_none());
}

#[test]
fn integer_formats_are_not_blendable_or_filterable() {
    let resolver = vega();
    let props = resolver.get_format_properties(Format::R16G16UInt);
    assert!(props.optimal_tiling_features.contains(FormatFeatures::ColorAttachment | FormatFeatures::SampledImage));
    assert!(!props.optimal_tiling_features.intersects(FormatFeatures::ColorAttachmentBlend | FormatFeatures::SampledImageFilterLinear));
}

#[test]
fn depth_stencil_features() {
    let resolver = vega();

    let props = resolver.get_format_properties(Format::D32SFloat);
    assert!(props.optimal_tiling_features.contains(FormatFeatures::DepthStencilAttachment |
        FormatFeatures::SampledImage |
        FormatFeatures::BlitSrc |
        FormatFeatures::BlitDst |
        FormatFeatures::Transfer |
        FormatFeatures::SampledImageFilterMinmax
    ));
    assert!(props.linear_tiling_features.is_none());

    // Combined depth/stencil can't be blitted to
    let props = resolver.get_format_properties(Format::D32SFloatS8UInt);
    assert!(props.optimal_tiling_features.contains(FormatFeatures::DepthStencilAttachment));
    assert!(!props.optimal_tiling_features.contains(FormatFeatures::BlitDst));

    let props = resolver.get_format_properties(Format::S8UInt);
    assert!(props.optimal_tiling_features.contains(FormatFeatures::DepthStencilAttachment | FormatFeatures::BlitDst));
    assert!(!props.optimal_tiling_features.contains(FormatFeatures::SampledImageFilterMinmax));

    let props = resolver.get_format_properties(Format::D24UNormS8UInt);
    assert!(props.optimal_tiling_features.is_none());
    assert!(props.linear_tiling_features.is_none());
}

#[test]
fn npot_formats_have_no_optimal_features() {
    let resolver = vega();

    let props = resolver.get_format_properties(Format::R8G8B8UNorm);
    assert!(props.optimal_tiling_features.is_none());

    let props = resolver.get_format_properties(Format::R32G32B32SFloat);
    assert!(props.optimal_tiling_features.is_none());
    assert!(props.linear_tiling_features.contains(FormatFeatures::SampledImage | FormatFeatures::SampledImageFilterLinear | FormatFeatures::Transfer));
    assert!(!props.linear_tiling_features.contains(FormatFeatures::BlitSrc));
    assert!(props.buffer_features.contains(FormatFeatures::VertexBuffer | FormatFeatures::UniformTexelBuffer));
}

#[test]
fn r32_formats_support_atomics() {
    let resolver = vega();
    for format in [Format::R32UInt, Format::R32SInt, Format::R32SFloat] {
        let props = resolver.get_format_properties(format);
        assert!(props.buffer_features.contains(FormatFeatures::StorageTexelBufferAtomic), "{format}");
        assert!(props.linear_tiling_features.contains(FormatFeatures::StorageImageAtomic), "{format}");
        assert!(props.optimal_tiling_features.contains(FormatFeatures::StorageImageAtomic), "{format}");
    }

    let props = resolver.get_format_properties(Format::R32G32UInt);
    assert!(!props.optimal_tiling_features.contains(FormatFeatures::StorageImageAtomic));
}

#[test]
fn etc_depends_on_family() {
    assert!(vega().device_supports_etc());
    assert!(resolver(ChipFamily::Stoney).device_supports_etc());
    assert!(!resolver(ChipFamily::Navi10).device_supports_etc());

    let props = vega().get_format_properties(Format::Etc2R8G8B8A8UNormBlock);
    assert!(props.optimal_tiling_features.contains(FormatFeatures::SampledImage | FormatFeatures::SampledImageFilterLinear));
    assert!(props.linear_tiling_features.is_none());

    Format::for_each(|format| if format.layout() == FormatLayout::Etc {
        assert!(resolver(ChipFamily::Navi10).get_format_properties(format).is_empty(), "{format}");
    });
}

#[test]
fn shared_exponent_rendering_needs_gfx10_3() {
    assert_eq!(resolver(ChipFamily::Navi21).is_color_attachment_supported(Format::E5B9G9R9UFloatPack32), Some(true));
    assert_eq!(resolver(ChipFamily::Navi10).is_color_attachment_supported(Format::E5B9G9R9UFloatPack32), None);

    let props = resolver(ChipFamily::Navi10).get_format_properties(Format::E5B9G9R9UFloatPack32);
    assert!(props.optimal_tiling_features.contains(FormatFeatures::SampledImage));
    assert!(!props.optimal_tiling_features.contains(FormatFeatures::ColorAttachment));
    assert!(props.buffer_features.is_none());
}

#[test]
fn signed_a2_formats_on_older_chips() {
    let format = Format::A2B10G10R10SNormPack32;

    let props = resolver(ChipFamily::Polaris10).get_format_properties(format);
    assert_eq!(props.buffer_features, FormatFeatures::VertexBuffer);
    assert!(props.linear_tiling_features.is_none());
    assert!(props.optimal_tiling_features.is_none());

    let props = resolver(ChipFamily::Stoney).get_format_properties(format);
    assert!(props.buffer_features.contains(FormatFeatures::UniformTexelBuffer | FormatFeatures::StorageTexelBuffer));

    let props = vega().get_format_properties(format);
    assert!(props.buffer_features.contains(FormatFeatures::UniformTexelBuffer));
}

#[test]
fn compressed_formats_have_no_linear_features() {
    let resolver = vega();
    Format::for_each(|format| if format.is_compressed() {
        assert!(resolver.get_format_properties(format).linear_tiling_features.is_none(), "{format}");
    });

    let props = resolver.get_format_properties(Format::BC7SrgbBlock);
    assert!(props.optimal_tiling_features.contains(FormatFeatures::SampledImage | FormatFeatures::Transfer));
    assert!(props.buffer_features.is_none());
}

#[test]
fn subsampled_and_multiplane_formats() {
    let resolver = vega();
    assert!(resolver.get_format_properties(Format::G8B8G8R8422UNorm).is_empty());

    let props = resolver.get_format_properties(Format::G8B8R83Plane420UNorm);
    let expected = FormatFeatures::Transfer |
        FormatFeatures::SampledImage |
        FormatFeatures::CositedChromaSamples |
        FormatFeatures::MidpointChromaSamples |
        FormatFeatures::SampledImageYcbcrConversionLinearFilter;
    assert_eq!(props.linear_tiling_features, expected);
    assert_eq!(props.optimal_tiling_features, expected);
    assert!(props.buffer_features.is_none());

    assert_eq!(resolver.is_sampler_supported(Format::G8B8R82Plane420UNorm), None);
    assert_eq!(resolver.is_buffer_supported(Format::G8B8R82Plane420UNorm), None);
    assert!(!resolver.is_storage_image_supported(Format::G8B8R82Plane420UNorm));
}

#[test]
fn predicates() {
    let resolver = vega();

    assert_eq!(resolver.is_sampler_supported(Format::R8UNorm), Some(true));
    assert_eq!(resolver.is_sampler_supported(Format::R8UInt), Some(false));
    assert_eq!(resolver.is_sampler_supported(Format::R8UScaled), None);

    assert_eq!(resolver.is_buffer_supported(Format::R8UScaled), Some(true));
    assert_eq!(resolver.is_buffer_supported(Format::R8UNorm), Some(false));
    assert_eq!(resolver.is_buffer_supported(Format::R8G8B8UNorm), None);

    assert_eq!(resolver.is_color_attachment_supported(Format::R8G8B8A8UNorm), Some(true));
    assert_eq!(resolver.is_color_attachment_supported(Format::R8G8B8A8SInt), Some(false));
    assert_eq!(resolver.is_color_attachment_supported(Format::D24UNormS8UInt), Some(false));
    assert_eq!(resolver.is_color_attachment_supported(Format::R8UScaled), None);

    assert!(resolver.is_storage_image_supported(Format::R32G32B32A32SFloat));
    assert!(!resolver.is_storage_image_supported(Format::R8G8B8A8Srgb));
    assert!(!resolver.is_storage_image_supported(Format::R32G32B32SFloat));

    assert!(resolver.is_depth_stencil_supported(Format::S8UInt));
    assert!(resolver.is_depth_stencil_supported(Format::D16UNormS8UInt));
    assert!(!resolver.is_depth_stencil_supported(Format::X8D24UNormPack32));

    assert!(resolver.is_filter_minmax_supported(Format::R16SFloat));
    assert!(!resolver.is_filter_minmax_supported(Format::R16G16SFloat));
}

#[test]
fn properties_table_covers_all_formats() {
    let resolver = vega();
    let table = resolver.get_format_properties_table();
    assert_eq!(table.len(), Format::COUNT);
    for (idx, (format, props)) in table.iter().enumerate() {
        assert_eq!(*format as usize, idx);
        assert_eq!(*props, resolver.get_format_properties(*format));
    }
}

#[test]
fn table_is_identical_across_threads() {
    let resolver = vega();
    let expected = resolver.get_format_properties_table();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(move || resolver.get_format_properties_table())).collect();
        for handle in handles {
            let table = handle.join().expect("resolver thread panicked");
            assert_eq!(table, expected);
        }
    });
}

#[test]
fn capability_queries() {
    let resolver = vega();

    let caps = resolver.query_capabilities(Format::R8G8B8A8UNorm);
    assert_eq!(caps.buffer_data_format, BufferDataFormat::_8_8_8_8);
    assert_eq!(caps.buffer_num_format, BufferNumFormat::Unorm);
    assert_eq!(caps.texture_data_format, TextureDataFormat::_8_8_8_8);
    assert_eq!(caps.texture_num_format, TextureNumFormat::Unorm);
    assert!(caps.sampling && caps.linear_filtering && caps.storage_image);
    assert!(caps.vertex_buffer && caps.texel_buffer);
    assert!(caps.color_attachment && caps.blendable);
    assert!(!caps.depth_stencil_attachment);

    let caps = resolver.query_capabilities(Format::R8G8B8A8UScaled);
    assert!(caps.vertex_buffer);
    assert!(!caps.texel_buffer && !caps.sampling && !caps.color_attachment);

    let caps = resolver.query_capabilities(Format::D16UNorm);
    assert!(caps.depth_stencil_attachment && caps.sampling);
    assert!(!caps.color_attachment);

    let caps = resolver.query_capabilities(Format::G8B8R82Plane420UNorm);
    assert_eq!(caps.buffer_data_format, BufferDataFormat::Invalid);
    assert_eq!(caps.buffer_num_format, BufferNumFormat::Undefined);
    assert_eq!(caps.texture_data_format, TextureDataFormat::Unknown);
    assert_eq!(caps.texture_num_format, TextureNumFormat::Unorm);
    assert!(caps.sampling && !caps.vertex_buffer);
}

//==============================================================================================================================
// Image format properties
//==============================================================================================================================

fn image_info(format: Format, ty: ImageType, tiling: ImageTiling, usage: ImageUsage) -> ImageFormatInfo {
    ImageFormatInfo::new(format, ty, tiling, usage)
}

#[test]
fn image_limits_per_chip_class() {
    let info = image_info(Format::R8G8B8A8UNorm, ImageType::Tex2D, ImageTiling::Optimal, ImageUsage::Sampled | ImageUsage::ColorAttachment);

    let props = vega().get_image_format_properties(&info);
    assert_eq!(props, Ok(ImageFormatProperties {
        max_extent: Extent3D::new(16384, 16384, 1),
        max_mip_levels: 15,
        max_array_layers: 2048,
        sample_counts: SampleCounts::X1 | SampleCounts::X2 | SampleCounts::X4 | SampleCounts::X8,
        max_resource_size: u32::MAX as u64,
    }));

    let props = resolver(ChipFamily::Navi10).get_image_format_properties(&info);
    assert_eq!(props.map(|props| props.max_array_layers), Ok(8192));

    let info = image_info(Format::R8G8B8A8UNorm, ImageType::Tex1D, ImageTiling::Linear, ImageUsage::Sampled);
    let props = vega().get_image_format_properties(&info);
    assert_eq!(props.map(|props| (props.max_extent, props.sample_counts)), Ok((Extent3D::new(16384, 1, 1), SampleCounts::X1)));
}

#[test]
fn image_3d_limits() {
    let info = image_info(Format::R8G8B8A8UNorm, ImageType::Tex3D, ImageTiling::Optimal, ImageUsage::Sampled);

    let props = vega().get_image_format_properties(&info);
    assert_eq!(props.map(|props| (props.max_extent, props.max_mip_levels, props.max_array_layers, props.sample_counts)),
        Ok((Extent3D::new(2048, 2048, 2048), 12, 1, SampleCounts::X1)));

    let props = resolver(ChipFamily::Navi21).get_image_format_properties(&info);
    assert_eq!(props.map(|props| (props.max_extent, props.max_mip_levels)), Ok((Extent3D::new(8192, 8192, 8192), 14)));
}

#[test]
fn cube_compatible_images_are_single_sampled() {
    let info = image_info(Format::R8G8B8A8UNorm, ImageType::Tex2D, ImageTiling::Optimal, ImageUsage::ColorAttachment)
        .with_flags(ImageCreateFlags::CubeCompatible);
    let props = vega().get_image_format_properties(&info);
    assert_eq!(props.map(|props| props.sample_counts), Ok(SampleCounts::X1));
}

#[test]
fn depth_images_must_be_2d() {
    let resolver = vega();
    let usage = ImageUsage::DepthStencilAttachment | ImageUsage::InputAttachment;

    let info = image_info(Format::D16UNorm, ImageType::Tex2D, ImageTiling::Optimal, usage);
    assert!(resolver.get_image_format_properties(&info).is_ok());

    let info = image_info(Format::D16UNorm, ImageType::Tex3D, ImageTiling::Optimal, usage);
    assert!(matches!(resolver.get_image_format_properties(&info), Err(Error::FormatNotSupported(Format::D16UNorm, _))));

    // Linear depth images are not supported
    let info = image_info(Format::D16UNorm, ImageType::Tex2D, ImageTiling::Linear, usage);
    assert!(resolver.get_image_format_properties(&info).is_err());
}

#[test]
fn linear_rgb32_images() {
    let resolver = vega();

    let info = image_info(Format::R32G32B32SFloat, ImageType::Tex2D, ImageTiling::Linear, ImageUsage::Sampled | ImageUsage::TransferDst);
    let props = resolver.get_image_format_properties(&info);
    assert_eq!(props.map(|props| (props.max_mip_levels, props.max_array_layers)), Ok((1, 1)));

    let info = image_info(Format::R32G32B32SFloat, ImageType::Tex3D, ImageTiling::Linear, ImageUsage::Sampled);
    assert!(resolver.get_image_format_properties(&info).is_err());

    let info = image_info(Format::R32G32B32SFloat, ImageType::Tex2D, ImageTiling::Optimal, ImageUsage::Sampled);
    assert!(resolver.get_image_format_properties(&info).is_err());
}

#[test]
fn usage_needs_matching_features() {
    let resolver = vega();

    let info = image_info(Format::R8G8B8A8Srgb, ImageType::Tex2D, ImageTiling::Optimal, ImageUsage::Sampled | ImageUsage::Storage);
    assert!(matches!(resolver.get_image_format_properties(&info), Err(Error::FormatNotSupported(Format::R8G8B8A8Srgb, _))));

    let info = image_info(Format::BC1RgbUNormBlock, ImageType::Tex2D, ImageTiling::Optimal, ImageUsage::ColorAttachment);
    assert!(resolver.get_image_format_properties(&info).is_err());

    let info = image_info(Format::BC1RgbUNormBlock, ImageType::Tex2D, ImageTiling::Optimal, ImageUsage::InputAttachment);
    assert!(resolver.get_image_format_properties(&info).is_err());

    let info = image_info(Format::R8G8B8A8UNorm, ImageType::Tex2D, ImageTiling::Optimal, ImageUsage::InputAttachment | ImageUsage::TransientAttachment);
    assert!(resolver.get_image_format_properties(&info).is_ok());
}

#[test]
fn compressed_3d_views_on_gfx9() {
    let info = image_info(Format::BC7UNormBlock, ImageType::Tex3D, ImageTiling::Optimal, ImageUsage::Sampled)
        .with_flags(ImageCreateFlags::BlockTexelViewCompatible | ImageCreateFlags::ExtendedUsage);

    assert!(vega().get_image_format_properties(&info).is_err());
    assert!(resolver(ChipFamily::Polaris10).get_image_format_properties(&info).is_ok());

    // 64-bit blocks are fine
    let info = ImageFormatInfo { format: Format::BC1RgbUNormBlock, ..info };
    assert!(vega().get_image_format_properties(&info).is_ok());
}

#[test]
fn sparse_multiplane_images() {
    let resolver = vega();
    let info = image_info(Format::G8B8R82Plane420UNorm, ImageType::Tex2D, ImageTiling::Optimal, ImageUsage::Sampled);
    assert!(resolver.get_image_format_properties(&info).is_ok());

    let info = info.with_flags(ImageCreateFlags::SparseBinding);
    assert!(resolver.get_image_format_properties(&info).is_err());
}

#[test]
fn dcc_compatibility() {
    let resolver = vega();

    assert!(resolver.dcc_formats_compatible(Format::R8G8B8A8UNorm, Format::R8G8B8A8UNorm));
    assert!(resolver.dcc_formats_compatible(Format::R8G8B8A8UNorm, Format::R8G8B8A8UInt));
    assert!(resolver.dcc_formats_compatible(Format::R8G8B8A8UNorm, Format::R8G8B8A8Srgb));
    assert!(resolver.dcc_formats_compatible(Format::R16G16SNorm, Format::R16G16SInt));
    assert!(resolver.dcc_formats_compatible(Format::A2B10G10R10UNormPack32, Format::A2B10G10R10UIntPack32));

    assert!(!resolver.dcc_formats_compatible(Format::R8G8B8A8UNorm, Format::R8G8B8A8SNorm));
    assert!(!resolver.dcc_formats_compatible(Format::R8G8B8A8UNorm, Format::B8G8R8A8UNorm));
    assert!(!resolver.dcc_formats_compatible(Format::R32SFloat, Format::R32UInt));
    assert!(!resolver.dcc_formats_compatible(Format::R16G16SFloat, Format::R32SFloat));
    assert!(!resolver.dcc_formats_compatible(Format::BC1RgbUNormBlock, Format::BC1RgbSrgbBlock));
}
