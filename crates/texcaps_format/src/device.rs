use texcaps_base::{EnumCountT, EnumFromIndexT};
use texcaps_macros::{EnumCount, EnumFromIndex, EnumDisplay};

/// Hardware generation
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, EnumCount, EnumFromIndex, EnumDisplay)]
pub enum ChipClass {
    #[display("gfx6")]
    Gfx6,
    #[display("gfx7")]
    Gfx7,
    #[display("gfx8")]
    Gfx8,
    #[display("gfx9")]
    Gfx9,
    #[display("gfx10")]
    Gfx10,
    #[display("gfx10.3")]
    Gfx10_3,
}

impl ChipClass {
    /// Find a chip class by its name, e.g. `"gfx10.3"`
    pub fn from_name(name: &str) -> Option<ChipClass> {
        find_by_name(name)
    }
}

/// Chip family, every family belongs to exactly one chip class
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumCount, EnumFromIndex, EnumDisplay)]
pub enum ChipFamily {
    // Gfx6
    Tahiti,
    Pitcairn,
    Verde,
    Oland,
    Hainan,
    // Gfx7
    Bonaire,
    Kaveri,
    Kabini,
    Hawaii,
    // Gfx8
    Tonga,
    Iceland,
    Carrizo,
    Fiji,
    Stoney,
    Polaris10,
    Polaris11,
    Polaris12,
    VegaM,
    // Gfx9
    Vega10,
    Vega12,
    Vega20,
    Raven,
    Raven2,
    Renoir,
    Arcturus,
    // Gfx10
    Navi10,
    Navi12,
    Navi14,
    // Gfx10.3
    Navi21,
}

impl ChipFamily {
    /// Get the chip class the family belongs to
    pub fn chip_class(self) -> ChipClass {
        match self {
            ChipFamily::Tahiti |
            ChipFamily::Pitcairn |
            ChipFamily::Verde |
            ChipFamily::Oland |
            ChipFamily::Hainan => ChipClass::Gfx6,
            ChipFamily::Bonaire |
            ChipFamily::Kaveri |
            ChipFamily::Kabini |
            ChipFamily::Hawaii => ChipClass::Gfx7,
            ChipFamily::Tonga |
            ChipFamily::Iceland |
            ChipFamily::Carrizo |
            ChipFamily::Fiji |
            ChipFamily::Stoney |
            ChipFamily::Polaris10 |
            ChipFamily::Polaris11 |
            ChipFamily::Polaris12 |
            ChipFamily::VegaM => ChipClass::Gfx8,
            ChipFamily::Vega10 |
            ChipFamily::Vega12 |
            ChipFamily::Vega20 |
            ChipFamily::Raven |
            ChipFamily::Raven2 |
            ChipFamily::Renoir |
            ChipFamily::Arcturus => ChipClass::Gfx9,
            ChipFamily::Navi10 |
            ChipFamily::Navi12 |
            ChipFamily::Navi14 => ChipClass::Gfx10,
            ChipFamily::Navi21 => ChipClass::Gfx10_3,
        }
    }

    /// Find a family by its name, case insensitive
    pub fn from_name(name: &str) -> Option<ChipFamily> {
        find_by_name(name)
    }
}

fn find_by_name<T>(name: &str) -> Option<T>
where
    T : EnumCountT + EnumFromIndexT + core::fmt::Display
{
    (0..T::COUNT)
        .filter_map(T::from_idx)
        .find(|val| val.to_string().eq_ignore_ascii_case(name))
}

/// Hardware tag the resolver is specialized for
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct DeviceInfo {
    pub chip_class: ChipClass,
    pub family:     ChipFamily,
}

impl DeviceInfo {
    /// Create the device info for a chip family
    pub fn new(family: ChipFamily) -> Self {
        Self { chip_class: family.chip_class(), family }
    }
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self::new(ChipFamily::Vega10)
    }
}
