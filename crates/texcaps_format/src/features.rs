use texcaps_macros::flags;

use crate::{BufferDataFormat, BufferNumFormat, TextureDataFormat, TextureNumFormat};

/// Operations a format supports for a given tiling or for buffers
#[flags(u32)]
pub enum FormatFeatures {
    SampledImage,
    StorageImage,
    StorageImageAtomic,
    UniformTexelBuffer,
    StorageTexelBuffer,
    StorageTexelBufferAtomic,
    VertexBuffer,
    ColorAttachment,
    ColorAttachmentBlend,
    DepthStencilAttachment,
    BlitSrc,
    BlitDst,
    SampledImageFilterLinear,
    TransferSrc,
    TransferDst,
    SampledImageFilterMinmax,
    MidpointChromaSamples,
    CositedChromaSamples,
    SampledImageYcbcrConversionLinearFilter,

    /// Copy source and destination
    Transfer = TransferSrc | TransferDst,
}

/// Feature sets of a format
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FormatProperties {
    pub linear_tiling_features:  FormatFeatures,
    pub optimal_tiling_features: FormatFeatures,
    pub buffer_features:         FormatFeatures,
}

impl FormatProperties {
    /// Does the format not support anything?
    pub fn is_empty(&self) -> bool {
        self.linear_tiling_features.is_none() &&
        self.optimal_tiling_features.is_none() &&
        self.buffer_features.is_none()
    }
}

/// Hardware encodings and usages of a single format
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CapabilityQueryResult {
    pub buffer_data_format:       BufferDataFormat,
    pub buffer_num_format:        BufferNumFormat,
    pub texture_data_format:      TextureDataFormat,
    pub texture_num_format:       TextureNumFormat,
    /// Can be sampled from
    pub sampling:                 bool,
    pub linear_filtering:         bool,
    pub storage_image:            bool,
    pub vertex_buffer:            bool,
    /// Can be used as a uniform or storage texel buffer
    pub texel_buffer:             bool,
    pub color_attachment:         bool,
    pub blendable:                bool,
    pub depth_stencil_attachment: bool,
}
