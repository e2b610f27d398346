use texcaps_macros::{flags, EnumDisplay};

use crate::Format;

/// Dimensionality of an image
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumDisplay)]
pub enum ImageType {
    #[display("1D")]
    Tex1D,
    #[display("2D")]
    Tex2D,
    #[display("3D")]
    Tex3D,
}

/// Memory arrangement of image texels
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumDisplay)]
pub enum ImageTiling {
    /// Row-major
    Linear,
    /// Hardware specific tiling
    Optimal,
}

/// Intended usage of an image
#[flags]
pub enum ImageUsage {
    TransferSrc,
    TransferDst,
    Sampled,
    Storage,
    ColorAttachment,
    DepthStencilAttachment,
    TransientAttachment,
    InputAttachment,
}

/// Image creation flags
#[flags]
pub enum ImageCreateFlags {
    SparseBinding,
    SparseResidency,
    SparseAliased,
    MutableFormat,
    CubeCompatible,
    /// Views with an uncompressed format of the same block size can be created
    BlockTexelViewCompatible,
    /// Views may support usages the image format itself does not
    ExtendedUsage,
}

/// Supported sample counts
#[flags]
pub enum SampleCounts {
    X1,
    X2,
    X4,
    X8,
    X16,
}

/// 3D extent in texels
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Extent3D {
    pub width:  u32,
    pub height: u32,
    pub depth:  u32,
}

impl Extent3D {
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        Self { width, height, depth }
    }
}

/// Image creation parameters to validate
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ImageFormatInfo {
    pub format: Format,
    pub ty:     ImageType,
    pub tiling: ImageTiling,
    pub usage:  ImageUsage,
    pub flags:  ImageCreateFlags,
}

impl ImageFormatInfo {
    /// Create image info without any creation flags
    pub fn new(format: Format, ty: ImageType, tiling: ImageTiling, usage: ImageUsage) -> Self {
        Self { format, ty, tiling, usage, flags: ImageCreateFlags::None }
    }

    pub fn with_flags(mut self, flags: ImageCreateFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// Limits of an image created with a given [`ImageFormatInfo`]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ImageFormatProperties {
    pub max_extent:        Extent3D,
    pub max_mip_levels:    u32,
    pub max_array_layers:  u32,
    pub sample_counts:     SampleCounts,
    /// Maximum size of the resource in bytes
    pub max_resource_size: u64,
}
