use texcaps_base::{EnumCountT, EnumFromIndexT};
use texcaps_macros::{EnumCount, EnumFromIndex, EnumDisplay};

use crate::{ChannelDescriptor, ColorSpace, FormatDescriptor, FormatLayout, Swizzle};

/// Abstract format identifier, used as the key into the format registry
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, EnumCount, EnumFromIndex, EnumDisplay)]
pub enum Format {
    // Packed 16-bit
    R4G4B4A4UNormPack16,
    B4G4R4A4UNormPack16,
    R5G6B5UNormPack16,
    B5G6R5UNormPack16,
    R5G5B5A1UNormPack16,
    B5G5R5A1UNormPack16,
    A1R5G5B5UNormPack16,

    // R8
    R8UNorm,
    R8SNorm,
    R8UScaled,
    R8SScaled,
    R8UInt,
    R8SInt,
    R8Srgb,

    // R8G8
    R8G8UNorm,
    R8G8SNorm,
    R8G8UScaled,
    R8G8SScaled,
    R8G8UInt,
    R8G8SInt,
    R8G8Srgb,

    // R8G8B8
    R8G8B8UNorm,
    R8G8B8SNorm,
    R8G8B8UScaled,
    R8G8B8SScaled,
    R8G8B8UInt,
    R8G8B8SInt,
    R8G8B8Srgb,

    // R8G8B8A8
    R8G8B8A8UNorm,
    R8G8B8A8SNorm,
    R8G8B8A8UScaled,
    R8G8B8A8SScaled,
    R8G8B8A8UInt,
    R8G8B8A8SInt,
    R8G8B8A8Srgb,

    // B8G8R8A8
    B8G8R8A8UNorm,
    B8G8R8A8SNorm,
    B8G8R8A8UScaled,
    B8G8R8A8SScaled,
    B8G8R8A8UInt,
    B8G8R8A8SInt,
    B8G8R8A8Srgb,

    // A2R10G10B10
    A2R10G10B10UNormPack32,
    A2R10G10B10SNormPack32,
    A2R10G10B10UScaledPack32,
    A2R10G10B10SScaledPack32,
    A2R10G10B10UIntPack32,
    A2R10G10B10SIntPack32,

    // A2B10G10R10
    A2B10G10R10UNormPack32,
    A2B10G10R10SNormPack32,
    A2B10G10R10UScaledPack32,
    A2B10G10R10SScaledPack32,
    A2B10G10R10UIntPack32,
    A2B10G10R10SIntPack32,

    // R16
    R16UNorm,
    R16SNorm,
    R16UScaled,
    R16SScaled,
    R16UInt,
    R16SInt,
    R16SFloat,

    // R16G16
    R16G16UNorm,
    R16G16SNorm,
    R16G16UScaled,
    R16G16SScaled,
    R16G16UInt,
    R16G16SInt,
    R16G16SFloat,

    // R16G16B16
    R16G16B16UNorm,
    R16G16B16SNorm,
    R16G16B16UScaled,
    R16G16B16SScaled,
    R16G16B16UInt,
    R16G16B16SInt,
    R16G16B16SFloat,

    // R16G16B16A16
    R16G16B16A16UNorm,
    R16G16B16A16SNorm,
    R16G16B16A16UScaled,
    R16G16B16A16SScaled,
    R16G16B16A16UInt,
    R16G16B16A16SInt,
    R16G16B16A16SFloat,

    // R32
    R32UInt,
    R32SInt,
    R32SFloat,

    // R32G32
    R32G32UInt,
    R32G32SInt,
    R32G32SFloat,

    // R32G32B32
    R32G32B32UInt,
    R32G32B32SInt,
    R32G32B32SFloat,

    // R32G32B32A32
    R32G32B32A32UInt,
    R32G32B32A32SInt,
    R32G32B32A32SFloat,

    // Packed floats
    B10G11R11UFloatPack32,
    E5B9G9R9UFloatPack32,

    // Depth/stencil
    D16UNorm,
    X8D24UNormPack32,
    D32SFloat,
    S8UInt,
    D16UNormS8UInt,
    D24UNormS8UInt,
    D32SFloatS8UInt,

    // Block compressed
    BC1RgbUNormBlock,
    BC1RgbSrgbBlock,
    BC1RgbaUNormBlock,
    BC1RgbaSrgbBlock,
    BC2UNormBlock,
    BC2SrgbBlock,
    BC3UNormBlock,
    BC3SrgbBlock,
    BC4UNormBlock,
    BC4SNormBlock,
    BC5UNormBlock,
    BC5SNormBlock,
    BC6HUFloatBlock,
    BC6HSFloatBlock,
    BC7UNormBlock,
    BC7SrgbBlock,
    Etc2R8G8B8UNormBlock,
    Etc2R8G8B8SrgbBlock,
    Etc2R8G8B8A1UNormBlock,
    Etc2R8G8B8A1SrgbBlock,
    Etc2R8G8B8A8UNormBlock,
    Etc2R8G8B8A8SrgbBlock,
    EacR11UNormBlock,
    EacR11SNormBlock,
    EacR11G11UNormBlock,
    EacR11G11SNormBlock,
    Astc4x4UNormBlock,
    Astc4x4SrgbBlock,

    // Subsampled and multi-planar
    G8B8G8R8422UNorm,
    B8G8R8G8422UNorm,
    G8B8R82Plane420UNorm,
    G8B8R83Plane420UNorm,
}

impl Format {
    /// Get the descriptor for this format
    pub fn descriptor(self) -> &'static FormatDescriptor {
        &FORMAT_DESCRIPTORS[self as usize]
    }

    /// Get the memory layout family of the format
    pub fn layout(self) -> FormatLayout {
        self.descriptor().layout
    }

    /// Is the format a block compressed format?
    pub fn is_compressed(self) -> bool {
        self.descriptor().is_compressed()
    }

    /// Does the format have a depth component?
    pub fn has_depth(self) -> bool {
        matches!(self,
            Format::D16UNorm |
            Format::X8D24UNormPack32 |
            Format::D32SFloat |
            Format::D16UNormS8UInt |
            Format::D24UNormS8UInt |
            Format::D32SFloatS8UInt
        )
    }

    /// Does the format have a stencil component?
    pub fn has_stencil(self) -> bool {
        matches!(self,
            Format::S8UInt |
            Format::D16UNormS8UInt |
            Format::D24UNormS8UInt |
            Format::D32SFloatS8UInt
        )
    }

    /// Is the format a depth and/or stencil format?
    pub fn is_depth_or_stencil(self) -> bool {
        self.descriptor().color_space == ColorSpace::DepthStencil
    }

    /// Get the size of a format block in bytes
    pub fn block_size(self) -> u16 {
        self.descriptor().block_size()
    }

    /// Get the size of a format block in bits
    pub fn block_size_bits(self) -> u16 {
        self.descriptor().block.bits
    }

    /// Get the number of planes the format is stored in
    pub fn plane_count(self) -> u8 {
        self.descriptor().plane_count
    }

    /// Call a closure for each format.
    pub fn for_each<F>(mut f: F)
    where
        F : FnMut(Format)
    {
        for i in 0..Format::COUNT {
            if let Some(format) = Format::from_idx(i) {
                f(format);
            }
        }
    }
}

//==============================================================================================================================
// LUTS
//==============================================================================================================================

const fn un(size: u8) -> ChannelDescriptor { ChannelDescriptor::unorm(size) }
const fn sn(size: u8) -> ChannelDescriptor { ChannelDescriptor::snorm(size) }
const fn us(size: u8) -> ChannelDescriptor { ChannelDescriptor::uscaled(size) }
const fn ss(size: u8) -> ChannelDescriptor { ChannelDescriptor::sscaled(size) }
const fn ui(size: u8) -> ChannelDescriptor { ChannelDescriptor::uint(size) }
const fn si(size: u8) -> ChannelDescriptor { ChannelDescriptor::sint(size) }
const fn sf(size: u8) -> ChannelDescriptor { ChannelDescriptor::float(size) }
const fn pad(size: u8) -> ChannelDescriptor { ChannelDescriptor::void(size) }

const X001: [Swizzle; 4] = Swizzle::from_pattern(b"x001");
const XY01: [Swizzle; 4] = Swizzle::from_pattern(b"xy01");
const XYZ1: [Swizzle; 4] = Swizzle::from_pattern(b"xyz1");
const XYZW: [Swizzle; 4] = Swizzle::from_pattern(b"xyzw");
const ZYX1: [Swizzle; 4] = Swizzle::from_pattern(b"zyx1");
const ZYXW: [Swizzle; 4] = Swizzle::from_pattern(b"zyxw");
const WZYX: [Swizzle; 4] = Swizzle::from_pattern(b"wzyx");
const YZWX: [Swizzle; 4] = Swizzle::from_pattern(b"yzwx");
const X___: [Swizzle; 4] = Swizzle::from_pattern(b"x___");
const _X__: [Swizzle; 4] = Swizzle::from_pattern(b"_x__");
const XY__: [Swizzle; 4] = Swizzle::from_pattern(b"xy__");

static FORMAT_DESCRIPTORS: [FormatDescriptor; Format::COUNT] = [
    // Packed 16-bit
    /* R4G4B4A4UNormPack16        */ FormatDescriptor::plain(Format::R4G4B4A4UNormPack16       , &[un(4), un(4), un(4), un(4)], WZYX, ColorSpace::Rgb),
    /* B4G4R4A4UNormPack16        */ FormatDescriptor::plain(Format::B4G4R4A4UNormPack16       , &[un(4), un(4), un(4), un(4)], YZWX, ColorSpace::Rgb),
    /* R5G6B5UNormPack16          */ FormatDescriptor::plain(Format::R5G6B5UNormPack16         , &[un(5), un(6), un(5)], ZYX1, ColorSpace::Rgb),
    /* B5G6R5UNormPack16          */ FormatDescriptor::plain(Format::B5G6R5UNormPack16         , &[un(5), un(6), un(5)], XYZ1, ColorSpace::Rgb),
    /* R5G5B5A1UNormPack16        */ FormatDescriptor::plain(Format::R5G5B5A1UNormPack16       , &[un(1), un(5), un(5), un(5)], WZYX, ColorSpace::Rgb),
    /* B5G5R5A1UNormPack16        */ FormatDescriptor::plain(Format::B5G5R5A1UNormPack16       , &[un(1), un(5), un(5), un(5)], YZWX, ColorSpace::Rgb),
    /* A1R5G5B5UNormPack16        */ FormatDescriptor::plain(Format::A1R5G5B5UNormPack16       , &[un(5), un(5), un(5), un(1)], ZYXW, ColorSpace::Rgb),
    // R8
    /* R8UNorm                    */ FormatDescriptor::plain(Format::R8UNorm                   , &[un(8)], X001, ColorSpace::Rgb),
    /* R8SNorm                    */ FormatDescriptor::plain(Format::R8SNorm                   , &[sn(8)], X001, ColorSpace::Rgb),
    /* R8UScaled                  */ FormatDescriptor::plain(Format::R8UScaled                 , &[us(8)], X001, ColorSpace::Rgb),
    /* R8SScaled                  */ FormatDescriptor::plain(Format::R8SScaled                 , &[ss(8)], X001, ColorSpace::Rgb),
    /* R8UInt                     */ FormatDescriptor::plain(Format::R8UInt                    , &[ui(8)], X001, ColorSpace::Rgb),
    /* R8SInt                     */ FormatDescriptor::plain(Format::R8SInt                    , &[si(8)], X001, ColorSpace::Rgb),
    /* R8Srgb                     */ FormatDescriptor::plain(Format::R8Srgb                    , &[un(8)], X001, ColorSpace::Srgb),
    // R8G8
    /* R8G8UNorm                  */ FormatDescriptor::plain(Format::R8G8UNorm                 , &[un(8), un(8)], XY01, ColorSpace::Rgb),
    /* R8G8SNorm                  */ FormatDescriptor::plain(Format::R8G8SNorm                 , &[sn(8), sn(8)], XY01, ColorSpace::Rgb),
    /* R8G8UScaled                */ FormatDescriptor::plain(Format::R8G8UScaled               , &[us(8), us(8)], XY01, ColorSpace::Rgb),
    /* R8G8SScaled                */ FormatDescriptor::plain(Format::R8G8SScaled               , &[ss(8), ss(8)], XY01, ColorSpace::Rgb),
    /* R8G8UInt                   */ FormatDescriptor::plain(Format::R8G8UInt                  , &[ui(8), ui(8)], XY01, ColorSpace::Rgb),
    /* R8G8SInt                   */ FormatDescriptor::plain(Format::R8G8SInt                  , &[si(8), si(8)], XY01, ColorSpace::Rgb),
    /* R8G8Srgb                   */ FormatDescriptor::plain(Format::R8G8Srgb                  , &[un(8), un(8)], XY01, ColorSpace::Srgb),
    // R8G8B8
    /* R8G8B8UNorm                */ FormatDescriptor::plain(Format::R8G8B8UNorm               , &[un(8), un(8), un(8)], XYZ1, ColorSpace::Rgb),
    /* R8G8B8SNorm                */ FormatDescriptor::plain(Format::R8G8B8SNorm               , &[sn(8), sn(8), sn(8)], XYZ1, ColorSpace::Rgb),
    /* R8G8B8UScaled              */ FormatDescriptor::plain(Format::R8G8B8UScaled             , &[us(8), us(8), us(8)], XYZ1, ColorSpace::Rgb),
    /* R8G8B8SScaled              */ FormatDescriptor::plain(Format::R8G8B8SScaled             , &[ss(8), ss(8), ss(8)], XYZ1, ColorSpace::Rgb),
    /* R8G8B8UInt                 */ FormatDescriptor::plain(Format::R8G8B8UInt                , &[ui(8), ui(8), ui(8)], XYZ1, ColorSpace::Rgb),
    /* R8G8B8SInt                 */ FormatDescriptor::plain(Format::R8G8B8SInt                , &[si(8), si(8), si(8)], XYZ1, ColorSpace::Rgb),
    /* R8G8B8Srgb                 */ FormatDescriptor::plain(Format::R8G8B8Srgb                , &[un(8), un(8), un(8)], XYZ1, ColorSpace::Srgb),
    // R8G8B8A8
    /* R8G8B8A8UNorm              */ FormatDescriptor::plain(Format::R8G8B8A8UNorm             , &[un(8), un(8), un(8), un(8)], XYZW, ColorSpace::Rgb),
    /* R8G8B8A8SNorm              */ FormatDescriptor::plain(Format::R8G8B8A8SNorm             , &[sn(8), sn(8), sn(8), sn(8)], XYZW, ColorSpace::Rgb),
    /* R8G8B8A8UScaled            */ FormatDescriptor::plain(Format::R8G8B8A8UScaled           , &[us(8), us(8), us(8), us(8)], XYZW, ColorSpace::Rgb),
    /* R8G8B8A8SScaled            */ FormatDescriptor::plain(Format::R8G8B8A8SScaled           , &[ss(8), ss(8), ss(8), ss(8)], XYZW, ColorSpace::Rgb),
    /* R8G8B8A8UInt               */ FormatDescriptor::plain(Format::R8G8B8A8UInt              , &[ui(8), ui(8), ui(8), ui(8)], XYZW, ColorSpace::Rgb),
    /* R8G8B8A8SInt               */ FormatDescriptor::plain(Format::R8G8B8A8SInt              , &[si(8), si(8), si(8), si(8)], XYZW, ColorSpace::Rgb),
    /* R8G8B8A8Srgb               */ FormatDescriptor::plain(Format::R8G8B8A8Srgb              , &[un(8), un(8), un(8), un(8)], XYZW, ColorSpace::Srgb),
    // B8G8R8A8
    /* B8G8R8A8UNorm              */ FormatDescriptor::plain(Format::B8G8R8A8UNorm             , &[un(8), un(8), un(8), un(8)], ZYXW, ColorSpace::Rgb),
    /* B8G8R8A8SNorm              */ FormatDescriptor::plain(Format::B8G8R8A8SNorm             , &[sn(8), sn(8), sn(8), sn(8)], ZYXW, ColorSpace::Rgb),
    /* B8G8R8A8UScaled            */ FormatDescriptor::plain(Format::B8G8R8A8UScaled           , &[us(8), us(8), us(8), us(8)], ZYXW, ColorSpace::Rgb),
    /* B8G8R8A8SScaled            */ FormatDescriptor::plain(Format::B8G8R8A8SScaled           , &[ss(8), ss(8), ss(8), ss(8)], ZYXW, ColorSpace::Rgb),
    /* B8G8R8A8UInt               */ FormatDescriptor::plain(Format::B8G8R8A8UInt              , &[ui(8), ui(8), ui(8), ui(8)], ZYXW, ColorSpace::Rgb),
    /* B8G8R8A8SInt               */ FormatDescriptor::plain(Format::B8G8R8A8SInt              , &[si(8), si(8), si(8), si(8)], ZYXW, ColorSpace::Rgb),
    /* B8G8R8A8Srgb               */ FormatDescriptor::plain(Format::B8G8R8A8Srgb              , &[un(8), un(8), un(8), un(8)], ZYXW, ColorSpace::Srgb),
    // A2R10G10B10
    /* A2R10G10B10UNormPack32     */ FormatDescriptor::plain(Format::A2R10G10B10UNormPack32    , &[un(10), un(10), un(10), un(2)], ZYXW, ColorSpace::Rgb),
    /* A2R10G10B10SNormPack32     */ FormatDescriptor::plain(Format::A2R10G10B10SNormPack32    , &[sn(10), sn(10), sn(10), sn(2)], ZYXW, ColorSpace::Rgb),
    /* A2R10G10B10UScaledPack32   */ FormatDescriptor::plain(Format::A2R10G10B10UScaledPack32  , &[us(10), us(10), us(10), us(2)], ZYXW, ColorSpace::Rgb),
    /* A2R10G10B10SScaledPack32   */ FormatDescriptor::plain(Format::A2R10G10B10SScaledPack32  , &[ss(10), ss(10), ss(10), ss(2)], ZYXW, ColorSpace::Rgb),
    /* A2R10G10B10UIntPack32      */ FormatDescriptor::plain(Format::A2R10G10B10UIntPack32     , &[ui(10), ui(10), ui(10), ui(2)], ZYXW, ColorSpace::Rgb),
    /* A2R10G10B10SIntPack32      */ FormatDescriptor::plain(Format::A2R10G10B10SIntPack32     , &[si(10), si(10), si(10), si(2)], ZYXW, ColorSpace::Rgb),
    // A2B10G10R10
    /* A2B10G10R10UNormPack32     */ FormatDescriptor::plain(Format::A2B10G10R10UNormPack32    , &[un(10), un(10), un(10), un(2)], XYZW, ColorSpace::Rgb),
    /* A2B10G10R10SNormPack32     */ FormatDescriptor::plain(Format::A2B10G10R10SNormPack32    , &[sn(10), sn(10), sn(10), sn(2)], XYZW, ColorSpace::Rgb),
    /* A2B10G10R10UScaledPack32   */ FormatDescriptor::plain(Format::A2B10G10R10UScaledPack32  , &[us(10), us(10), us(10), us(2)], XYZW, ColorSpace::Rgb),
    /* A2B10G10R10SScaledPack32   */ FormatDescriptor::plain(Format::A2B10G10R10SScaledPack32  , &[ss(10), ss(10), ss(10), ss(2)], XYZW, ColorSpace::Rgb),
    /* A2B10G10R10UIntPack32      */ FormatDescriptor::plain(Format::A2B10G10R10UIntPack32     , &[ui(10), ui(10), ui(10), ui(2)], XYZW, ColorSpace::Rgb),
    /* A2B10G10R10SIntPack32      */ FormatDescriptor::plain(Format::A2B10G10R10SIntPack32     , &[si(10), si(10), si(10), si(2)], XYZW, ColorSpace::Rgb),
    // R16
    /* R16UNorm                   */ FormatDescriptor::plain(Format::R16UNorm                  , &[un(16)], X001, ColorSpace::Rgb),
    /* R16SNorm                   */ FormatDescriptor::plain(Format::R16SNorm                  , &[sn(16)], X001, ColorSpace::Rgb),
    /* R16UScaled                 */ FormatDescriptor::plain(Format::R16UScaled                , &[us(16)], X001, ColorSpace::Rgb),
    /* R16SScaled                 */ FormatDescriptor::plain(Format::R16SScaled                , &[ss(16)], X001, ColorSpace::Rgb),
    /* R16UInt                    */ FormatDescriptor::plain(Format::R16UInt                   , &[ui(16)], X001, ColorSpace::Rgb),
    /* R16SInt                    */ FormatDescriptor::plain(Format::R16SInt                   , &[si(16)], X001, ColorSpace::Rgb),
    /* R16SFloat                  */ FormatDescriptor::plain(Format::R16SFloat                 , &[sf(16)], X001, ColorSpace::Rgb),
    // R16G16
    /* R16G16UNorm                */ FormatDescriptor::plain(Format::R16G16UNorm               , &[un(16), un(16)], XY01, ColorSpace::Rgb),
    /* R16G16SNorm                */ FormatDescriptor::plain(Format::R16G16SNorm               , &[sn(16), sn(16)], XY01, ColorSpace::Rgb),
    /* R16G16UScaled              */ FormatDescriptor::plain(Format::R16G16UScaled             , &[us(16), us(16)], XY01, ColorSpace::Rgb),
    /* R16G16SScaled              */ FormatDescriptor::plain(Format::R16G16SScaled             , &[ss(16), ss(16)], XY01, ColorSpace::Rgb),
    /* R16G16UInt                 */ FormatDescriptor::plain(Format::R16G16UInt                , &[ui(16), ui(16)], XY01, ColorSpace::Rgb),
    /* R16G16SInt                 */ FormatDescriptor::plain(Format::R16G16SInt                , &[si(16), si(16)], XY01, ColorSpace::Rgb),
    /* R16G16SFloat               */ FormatDescriptor::plain(Format::R16G16SFloat              , &[sf(16), sf(16)], XY01, ColorSpace::Rgb),
    // R16G16B16
    /* R16G16B16UNorm             */ FormatDescriptor::plain(Format::R16G16B16UNorm            , &[un(16), un(16), un(16)], XYZ1, ColorSpace::Rgb),
    /* R16G16B16SNorm             */ FormatDescriptor::plain(Format::R16G16B16SNorm            , &[sn(16), sn(16), sn(16)], XYZ1, ColorSpace::Rgb),
    /* R16G16B16UScaled           */ FormatDescriptor::plain(Format::R16G16B16UScaled          , &[us(16), us(16), us(16)], XYZ1, ColorSpace::Rgb),
    /* R16G16B16SScaled           */ FormatDescriptor::plain(Format::R16G16B16SScaled          , &[ss(16), ss(16), ss(16)], XYZ1, ColorSpace::Rgb),
    /* R16G16B16UInt              */ FormatDescriptor::plain(Format::R16G16B16UInt             , &[ui(16), ui(16), ui(16)], XYZ1, ColorSpace::Rgb),
    /* R16G16B16SInt              */ FormatDescriptor::plain(Format::R16G16B16SInt             , &[si(16), si(16), si(16)], XYZ1, ColorSpace::Rgb),
    /* R16G16B16SFloat            */ FormatDescriptor::plain(Format::R16G16B16SFloat           , &[sf(16), sf(16), sf(16)], XYZ1, ColorSpace::Rgb),
    // R16G16B16A16
    /* R16G16B16A16UNorm          */ FormatDescriptor::plain(Format::R16G16B16A16UNorm         , &[un(16), un(16), un(16), un(16)], XYZW, ColorSpace::Rgb),
    /* R16G16B16A16SNorm          */ FormatDescriptor::plain(Format::R16G16B16A16SNorm         , &[sn(16), sn(16), sn(16), sn(16)], XYZW, ColorSpace::Rgb),
    /* R16G16B16A16UScaled        */ FormatDescriptor::plain(Format::R16G16B16A16UScaled       , &[us(16), us(16), us(16), us(16)], XYZW, ColorSpace::Rgb),
    /* R16G16B16A16SScaled        */ FormatDescriptor::plain(Format::R16G16B16A16SScaled       , &[ss(16), ss(16), ss(16), ss(16)], XYZW, ColorSpace::Rgb),
    /* R16G16B16A16UInt           */ FormatDescriptor::plain(Format::R16G16B16A16UInt          , &[ui(16), ui(16), ui(16), ui(16)], XYZW, ColorSpace::Rgb),
    /* R16G16B16A16SInt           */ FormatDescriptor::plain(Format::R16G16B16A16SInt          , &[si(16), si(16), si(16), si(16)], XYZW, ColorSpace::Rgb),
    /* R16G16B16A16SFloat         */ FormatDescriptor::plain(Format::R16G16B16A16SFloat        , &[sf(16), sf(16), sf(16), sf(16)], XYZW, ColorSpace::Rgb),
    // R32
    /* R32UInt                    */ FormatDescriptor::plain(Format::R32UInt                   , &[ui(32)], X001, ColorSpace::Rgb),
    /* R32SInt                    */ FormatDescriptor::plain(Format::R32SInt                   , &[si(32)], X001, ColorSpace::Rgb),
    /* R32SFloat                  */ FormatDescriptor::plain(Format::R32SFloat                 , &[sf(32)], X001, ColorSpace::Rgb),
    // R32G32
    /* R32G32UInt                 */ FormatDescriptor::plain(Format::R32G32UInt                , &[ui(32), ui(32)], XY01, ColorSpace::Rgb),
    /* R32G32SInt                 */ FormatDescriptor::plain(Format::R32G32SInt                , &[si(32), si(32)], XY01, ColorSpace::Rgb),
    /* R32G32SFloat               */ FormatDescriptor::plain(Format::R32G32SFloat              , &[sf(32), sf(32)], XY01, ColorSpace::Rgb),
    // R32G32B32
    /* R32G32B32UInt              */ FormatDescriptor::plain(Format::R32G32B32UInt             , &[ui(32), ui(32), ui(32)], XYZ1, ColorSpace::Rgb),
    /* R32G32B32SInt              */ FormatDescriptor::plain(Format::R32G32B32SInt             , &[si(32), si(32), si(32)], XYZ1, ColorSpace::Rgb),
    /* R32G32B32SFloat            */ FormatDescriptor::plain(Format::R32G32B32SFloat           , &[sf(32), sf(32), sf(32)], XYZ1, ColorSpace::Rgb),
    // R32G32B32A32
    /* R32G32B32A32UInt           */ FormatDescriptor::plain(Format::R32G32B32A32UInt          , &[ui(32), ui(32), ui(32), ui(32)], XYZW, ColorSpace::Rgb),
    /* R32G32B32A32SInt           */ FormatDescriptor::plain(Format::R32G32B32A32SInt          , &[si(32), si(32), si(32), si(32)], XYZW, ColorSpace::Rgb),
    /* R32G32B32A32SFloat         */ FormatDescriptor::plain(Format::R32G32B32A32SFloat        , &[sf(32), sf(32), sf(32), sf(32)], XYZW, ColorSpace::Rgb),
    // Packed floats
    /* B10G11R11UFloatPack32      */ FormatDescriptor::plain(Format::B10G11R11UFloatPack32     , &[sf(11), sf(11), sf(10)], XYZ1, ColorSpace::Rgb),
    /* E5B9G9R9UFloatPack32       */ FormatDescriptor::plain(Format::E5B9G9R9UFloatPack32      , &[sf(9), sf(9), sf(9), pad(5)], XYZ1, ColorSpace::Rgb),
    // Depth/stencil
    /* D16UNorm                   */ FormatDescriptor::plain(Format::D16UNorm                  , &[un(16)], X___, ColorSpace::DepthStencil),
    /* X8D24UNormPack32           */ FormatDescriptor::plain(Format::X8D24UNormPack32          , &[un(24), pad(8)], X___, ColorSpace::DepthStencil),
    /* D32SFloat                  */ FormatDescriptor::plain(Format::D32SFloat                 , &[sf(32)], X___, ColorSpace::DepthStencil),
    /* S8UInt                     */ FormatDescriptor::plain(Format::S8UInt                    , &[ui(8)], _X__, ColorSpace::DepthStencil),
    /* D16UNormS8UInt             */ FormatDescriptor::plain(Format::D16UNormS8UInt            , &[un(16), ui(8), pad(8)], XY__, ColorSpace::DepthStencil),
    /* D24UNormS8UInt             */ FormatDescriptor::plain(Format::D24UNormS8UInt            , &[un(24), ui(8)], XY__, ColorSpace::DepthStencil),
    /* D32SFloatS8UInt            */ FormatDescriptor::plain(Format::D32SFloatS8UInt           , &[sf(32), ui(8), pad(24)], XY__, ColorSpace::DepthStencil),
    // Block compressed
    /* BC1RgbUNormBlock           */ FormatDescriptor::block(Format::BC1RgbUNormBlock          , FormatLayout::S3tc, 4, 4, 64, XYZ1, ColorSpace::Rgb),
    /* BC1RgbSrgbBlock            */ FormatDescriptor::block(Format::BC1RgbSrgbBlock           , FormatLayout::S3tc, 4, 4, 64, XYZ1, ColorSpace::Srgb),
    /* BC1RgbaUNormBlock          */ FormatDescriptor::block(Format::BC1RgbaUNormBlock         , FormatLayout::S3tc, 4, 4, 64, XYZW, ColorSpace::Rgb),
    /* BC1RgbaSrgbBlock           */ FormatDescriptor::block(Format::BC1RgbaSrgbBlock          , FormatLayout::S3tc, 4, 4, 64, XYZW, ColorSpace::Srgb),
    /* BC2UNormBlock              */ FormatDescriptor::block(Format::BC2UNormBlock             , FormatLayout::S3tc, 4, 4, 128, XYZW, ColorSpace::Rgb),
    /* BC2SrgbBlock               */ FormatDescriptor::block(Format::BC2SrgbBlock              , FormatLayout::S3tc, 4, 4, 128, XYZW, ColorSpace::Srgb),
    /* BC3UNormBlock              */ FormatDescriptor::block(Format::BC3UNormBlock             , FormatLayout::S3tc, 4, 4, 128, XYZW, ColorSpace::Rgb),
    /* BC3SrgbBlock               */ FormatDescriptor::block(Format::BC3SrgbBlock              , FormatLayout::S3tc, 4, 4, 128, XYZW, ColorSpace::Srgb),
    /* BC4UNormBlock              */ FormatDescriptor::block(Format::BC4UNormBlock             , FormatLayout::Rgtc, 4, 4, 64, X001, ColorSpace::Rgb),
    /* BC4SNormBlock              */ FormatDescriptor::block(Format::BC4SNormBlock             , FormatLayout::Rgtc, 4, 4, 64, X001, ColorSpace::Rgb),
    /* BC5UNormBlock              */ FormatDescriptor::block(Format::BC5UNormBlock             , FormatLayout::Rgtc, 4, 4, 128, XY01, ColorSpace::Rgb),
    /* BC5SNormBlock              */ FormatDescriptor::block(Format::BC5SNormBlock             , FormatLayout::Rgtc, 4, 4, 128, XY01, ColorSpace::Rgb),
    /* BC6HUFloatBlock            */ FormatDescriptor::block(Format::BC6HUFloatBlock           , FormatLayout::Bptc, 4, 4, 128, XYZ1, ColorSpace::Rgb),
    /* BC6HSFloatBlock            */ FormatDescriptor::block(Format::BC6HSFloatBlock           , FormatLayout::Bptc, 4, 4, 128, XYZ1, ColorSpace::Rgb),
    /* BC7UNormBlock              */ FormatDescriptor::block(Format::BC7UNormBlock             , FormatLayout::Bptc, 4, 4, 128, XYZW, ColorSpace::Rgb),
    /* BC7SrgbBlock               */ FormatDescriptor::block(Format::BC7SrgbBlock              , FormatLayout::Bptc, 4, 4, 128, XYZW, ColorSpace::Srgb),
    /* Etc2R8G8B8UNormBlock       */ FormatDescriptor::block(Format::Etc2R8G8B8UNormBlock      , FormatLayout::Etc, 4, 4, 64, XYZ1, ColorSpace::Rgb),
    /* Etc2R8G8B8SrgbBlock        */ FormatDescriptor::block(Format::Etc2R8G8B8SrgbBlock       , FormatLayout::Etc, 4, 4, 64, XYZ1, ColorSpace::Srgb),
    /* Etc2R8G8B8A1UNormBlock     */ FormatDescriptor::block(Format::Etc2R8G8B8A1UNormBlock    , FormatLayout::Etc, 4, 4, 64, XYZW, ColorSpace::Rgb),
    /* Etc2R8G8B8A1SrgbBlock      */ FormatDescriptor::block(Format::Etc2R8G8B8A1SrgbBlock     , FormatLayout::Etc, 4, 4, 64, XYZW, ColorSpace::Srgb),
    /* Etc2R8G8B8A8UNormBlock     */ FormatDescriptor::block(Format::Etc2R8G8B8A8UNormBlock    , FormatLayout::Etc, 4, 4, 128, XYZW, ColorSpace::Rgb),
    /* Etc2R8G8B8A8SrgbBlock      */ FormatDescriptor::block(Format::Etc2R8G8B8A8SrgbBlock     , FormatLayout::Etc, 4, 4, 128, XYZW, ColorSpace::Srgb),
    /* EacR11UNormBlock           */ FormatDescriptor::block(Format::EacR11UNormBlock          , FormatLayout::Etc, 4, 4, 64, X001, ColorSpace::Rgb),
    /* EacR11SNormBlock           */ FormatDescriptor::block(Format::EacR11SNormBlock          , FormatLayout::Etc, 4, 4, 64, X001, ColorSpace::Rgb),
    /* EacR11G11UNormBlock        */ FormatDescriptor::block(Format::EacR11G11UNormBlock       , FormatLayout::Etc, 4, 4, 128, XY01, ColorSpace::Rgb),
    /* EacR11G11SNormBlock        */ FormatDescriptor::block(Format::EacR11G11SNormBlock       , FormatLayout::Etc, 4, 4, 128, XY01, ColorSpace::Rgb),
    /* Astc4x4UNormBlock          */ FormatDescriptor::block(Format::Astc4x4UNormBlock         , FormatLayout::Astc, 4, 4, 128, XYZW, ColorSpace::Rgb),
    /* Astc4x4SrgbBlock           */ FormatDescriptor::block(Format::Astc4x4SrgbBlock          , FormatLayout::Astc, 4, 4, 128, XYZW, ColorSpace::Srgb),
    // Subsampled and multi-planar
    /* G8B8G8R8422UNorm           */ FormatDescriptor::block(Format::G8B8G8R8422UNorm          , FormatLayout::Subsampled, 2, 1, 32, XYZ1, ColorSpace::Rgb),
    /* B8G8R8G8422UNorm           */ FormatDescriptor::block(Format::B8G8R8G8422UNorm          , FormatLayout::Subsampled, 2, 1, 32, XYZ1, ColorSpace::Rgb),
    /* G8B8R82Plane420UNorm       */ FormatDescriptor::multiplane(Format::G8B8R82Plane420UNorm    , &[un(8), un(8), un(8)], 2),
    /* G8B8R83Plane420UNorm       */ FormatDescriptor::multiplane(Format::G8B8R83Plane420UNorm    , &[un(8), un(8), un(8)], 3),
];
