/// Clear color as provided by the user, the variant decides how the components are interpreted
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ClearColorValue {
    Float([f32; 4]),
    Integer([i32; 4]),
    Unsigned([u32; 4]),
}

impl ClearColorValue {
    /// Get a component as a float, integer components are reinterpreted bitwise
    pub fn float32(&self, idx: usize) -> f32 {
        match self {
            ClearColorValue::Float(vals)    => vals[idx],
            ClearColorValue::Integer(vals)  => f32::from_bits(vals[idx] as u32),
            ClearColorValue::Unsigned(vals) => f32::from_bits(vals[idx]),
        }
    }

    /// Get the raw bits of a component
    pub fn uint32(&self, idx: usize) -> u32 {
        match self {
            ClearColorValue::Float(vals)    => vals[idx].to_bits(),
            ClearColorValue::Integer(vals)  => vals[idx] as u32,
            ClearColorValue::Unsigned(vals) => vals[idx],
        }
    }
}

/// Clear value in the native layout of a format, as written to the clear register pair
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct PackedClearColor {
    pub words: [u32; 2],
}

impl PackedClearColor {
    pub const fn new(lo: u32, hi: u32) -> Self {
        Self { words: [lo, hi] }
    }

    /// Create the clear color from a packed 64-bit value
    pub const fn from_u64(val: u64) -> Self {
        Self { words: [val as u32, (val >> 32) as u32] }
    }

    pub const fn as_u64(&self) -> u64 {
        self.words[0] as u64 | (self.words[1] as u64) << 32
    }

    pub fn to_le_bytes(&self) -> [u8; 8] {
        self.as_u64().to_le_bytes()
    }
}
