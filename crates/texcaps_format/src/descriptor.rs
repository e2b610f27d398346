use texcaps_macros::EnumDisplay;

use crate::Format;

/// Numeric type of a single channel
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumDisplay)]
pub enum ChannelType {
    /// Unused bits
    Void,
    Unsigned,
    Signed,
    /// Fixed-point
    Fixed,
    Float,
}

/// Description of a single channel inside a format block
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct ChannelDescriptor {
    pub ty:           ChannelType,
    pub normalized:   bool,
    pub pure_integer: bool,
    /// Size in bits, 0 if the channel is unused
    pub size:         u8,
    /// Bit offset of the channel inside the block
    pub shift:        u16,
}

impl ChannelDescriptor {
    /// An unused channel slot
    pub const UNUSED: ChannelDescriptor = ChannelDescriptor::new(ChannelType::Void, false, false, 0);

    /// Create a channel, the shift is filled in when the channel is placed inside a descriptor
    pub const fn new(ty: ChannelType, normalized: bool, pure_integer: bool, size: u8) -> Self {
        Self { ty, normalized, pure_integer, size, shift: 0 }
    }

    /// Unsigned normalized channel
    pub const fn unorm(size: u8) -> Self { Self::new(ChannelType::Unsigned, true, false, size) }
    /// Signed normalized channel
    pub const fn snorm(size: u8) -> Self { Self::new(ChannelType::Signed, true, false, size) }
    /// Unsigned scaled channel
    pub const fn uscaled(size: u8) -> Self { Self::new(ChannelType::Unsigned, false, false, size) }
    /// Signed scaled channel
    pub const fn sscaled(size: u8) -> Self { Self::new(ChannelType::Signed, false, false, size) }
    /// Unsigned integer channel
    pub const fn uint(size: u8) -> Self { Self::new(ChannelType::Unsigned, false, true, size) }
    /// Signed integer channel
    pub const fn sint(size: u8) -> Self { Self::new(ChannelType::Signed, false, true, size) }
    /// Floating point channel
    pub const fn float(size: u8) -> Self { Self::new(ChannelType::Float, false, false, size) }
    /// Signed fixed-point channel
    pub const fn fixed(size: u8) -> Self { Self::new(ChannelType::Fixed, false, false, size) }
    /// Padding bits
    pub const fn void(size: u8) -> Self { Self::new(ChannelType::Void, false, false, size) }

    /// Check if the channel carries data
    pub const fn is_void(&self) -> bool {
        matches!(self.ty, ChannelType::Void)
    }

    const fn same_encoding(&self, other: &ChannelDescriptor) -> bool {
        self.ty as u8 == other.ty as u8 &&
        self.normalized == other.normalized &&
        self.pure_integer == other.pure_integer
    }
}

/// Source of an output component
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, EnumDisplay)]
pub enum Swizzle {
    X,
    Y,
    Z,
    W,
    #[display("0")]
    Zero,
    #[display("1")]
    One,
    #[display("_")]
    None,
}

impl Swizzle {
    /// Index of the source channel, `None` for constants and unused components
    pub const fn channel_index(self) -> Option<usize> {
        match self {
            Swizzle::X => Some(0),
            Swizzle::Y => Some(1),
            Swizzle::Z => Some(2),
            Swizzle::W => Some(3),
            Swizzle::Zero | Swizzle::One | Swizzle::None => None,
        }
    }

    /// Build a swizzle from a pattern like `b"zyxw"`, using `0`, `1` and `_` for constants and unused components
    pub const fn from_pattern(pattern: &[u8; 4]) -> [Swizzle; 4] {
        let mut res = [Swizzle::None; 4];
        let mut i = 0;
        while i < 4 {
            res[i] = match pattern[i] {
                b'x' => Swizzle::X,
                b'y' => Swizzle::Y,
                b'z' => Swizzle::Z,
                b'w' => Swizzle::W,
                b'0' => Swizzle::Zero,
                b'1' => Swizzle::One,
                _    => Swizzle::None,
            };
            i += 1;
        }
        res
    }
}

/// Color space of a format
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumDisplay)]
pub enum ColorSpace {
    /// Linear RGB
    Rgb,
    Srgb,
    DepthStencil,
    Yuv,
}

/// Memory layout family of a format
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumDisplay)]
pub enum FormatLayout {
    /// Every channel is stored in a fixed number of bits per texel
    Plain,
    /// BC1-BC3
    S3tc,
    /// BC4-BC5
    Rgtc,
    /// BC6H-BC7
    Bptc,
    /// ETC2 and EAC
    Etc,
    Astc,
    /// Packed 4:2:2 formats with shared chroma
    Subsampled,
    /// Each channel group lives in its own plane
    Multiplane,
}

impl FormatLayout {
    /// Is the layout a block compressed layout?
    pub const fn is_compressed(self) -> bool {
        matches!(self, Self::S3tc | Self::Rgtc | Self::Bptc | Self::Etc | Self::Astc)
    }
}

/// Size of a format block
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct BlockInfo {
    /// Width in texels
    pub width:  u8,
    /// Height in texels
    pub height: u8,
    /// Size of the block in bits
    pub bits:   u16,
}

/// Structural description of a format, independent of any hardware encoding
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct FormatDescriptor {
    pub format:        Format,
    pub layout:        FormatLayout,
    pub block:         BlockInfo,
    /// Number of channels in use (1-4)
    pub channel_count: u8,
    /// Channels, ordered from the least significant bits upwards
    pub channels:      [ChannelDescriptor; 4],
    /// Output component (RGBA) to channel mapping
    pub swizzle:       [Swizzle; 4],
    pub color_space:   ColorSpace,
    /// The channels have heterogeneous numeric types
    pub is_mixed:      bool,
    /// The format can be described as an array of identical, byte sized channels
    pub is_array:      bool,
    pub plane_count:   u8,
}

impl FormatDescriptor {
    /// Create a plain descriptor, channel offsets, block size and the mixed/array flags are derived from the channels
    pub const fn plain(format: Format, channels: &[ChannelDescriptor], swizzle: [Swizzle; 4], color_space: ColorSpace) -> Self {
        let mut placed = [ChannelDescriptor::UNUSED; 4];
        let mut shift = 0u16;
        let mut i = 0;
        while i < channels.len() {
            placed[i] = channels[i];
            placed[i].shift = shift;
            shift += channels[i].size as u16;
            i += 1;
        }

        Self {
            format,
            layout: FormatLayout::Plain,
            block: BlockInfo { width: 1, height: 1, bits: shift },
            channel_count: channels.len() as u8,
            channels: placed,
            swizzle,
            color_space,
            is_mixed: Self::calc_is_mixed(channels),
            is_array: Self::calc_is_array(channels),
            plane_count: 1,
        }
    }

    /// Create a descriptor for a block based layout, the block contents are opaque
    pub const fn block(format: Format, layout: FormatLayout, width: u8, height: u8, bits: u16, swizzle: [Swizzle; 4], color_space: ColorSpace) -> Self {
        let mut channels = [ChannelDescriptor::UNUSED; 4];
        channels[0] = ChannelDescriptor::void(bits as u8);

        Self {
            format,
            layout,
            block: BlockInfo { width, height, bits },
            channel_count: 1,
            channels,
            swizzle,
            color_space,
            is_mixed: false,
            is_array: false,
            plane_count: 1,
        }
    }

    /// Create a multi-planar descriptor, `channels` describes the texel as it is sampled
    pub const fn multiplane(format: Format, channels: &[ChannelDescriptor], plane_count: u8) -> Self {
        let mut desc = Self::plain(format, channels, Swizzle::from_pattern(b"xyz1"), ColorSpace::Yuv);
        desc.layout = FormatLayout::Multiplane;
        desc.is_array = false;
        desc.plane_count = plane_count;
        desc
    }

    const fn calc_is_mixed(channels: &[ChannelDescriptor]) -> bool {
        let mut reference: Option<ChannelDescriptor> = None;
        let mut i = 0;
        while i < channels.len() {
            let channel = channels[i];
            if !channel.is_void() {
                match reference {
                    Some(reference) => if !reference.same_encoding(&channel) {
                        return true;
                    },
                    None => reference = Some(channel),
                }
            }
            i += 1;
        }
        false
    }

    const fn calc_is_array(channels: &[ChannelDescriptor]) -> bool {
        if channels.is_empty() || channels[0].is_void() {
            return false;
        }

        let reference = channels[0];
        let mut i = 0;
        while i < channels.len() {
            let channel = channels[i];
            if channel.size != reference.size || channel.size % 8 != 0 || !reference.same_encoding(&channel) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Get the index of the first channel that carries data, i.e. the reference channel
    pub fn first_non_void_channel(&self) -> Option<usize> {
        self.used_channels().iter().position(|channel| !channel.is_void())
    }

    /// Get the reference channel
    pub fn reference_channel(&self) -> Option<&ChannelDescriptor> {
        self.first_non_void_channel().map(|idx| &self.channels[idx])
    }

    /// Get the channels that are in use
    pub fn used_channels(&self) -> &[ChannelDescriptor] {
        &self.channels[..(self.channel_count as usize).min(4)]
    }

    /// Sizes of all 4 channel slots, unused slots have a size of 0
    pub fn channel_sizes(&self) -> [u8; 4] {
        [self.channels[0].size, self.channels[1].size, self.channels[2].size, self.channels[3].size]
    }

    /// Size of a single block in bytes
    pub const fn block_size(&self) -> u16 {
        self.block.bits / 8
    }

    /// Is the format a block compressed format?
    pub const fn is_compressed(&self) -> bool {
        self.layout.is_compressed()
    }
}
