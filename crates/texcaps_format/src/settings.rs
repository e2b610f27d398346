use texcaps_logging::{log_error, LogLevel};
use texcaps_toml::{self as toml, Toml};

use crate::{ChipClass, ChipFamily, DeviceInfo, Error, Result, LOG_CAT};

/// Capability query settings, loaded from `texcaps.toml`
#[derive(Clone, Debug)]
pub struct Settings {
    /// Chip class of the device
    pub chip_class : ChipClass,
    /// Chip family of the device
    pub family     : ChipFamily,
    /// Maximum log level
    pub log_level  : LogLevel,
}

impl Settings {
    /// Load settings from a toml string, errors are logged
    pub fn load(toml: &str) -> Option<Settings> {
        match Self::parse(toml) {
            Ok(settings) => Some(settings),
            Err(err) => {
                log_error!(LOG_CAT, Self::load, "Failed to load 'texcaps.toml', err: {err}");
                None
            }
        }
    }

    /// Parse settings from a toml string, missing values fall back to the defaults
    pub fn parse(toml: &str) -> Result<Settings> {
        let toml = Toml::parse(toml).map_err(|err| Error::InvalidSettings(err.to_string()))?;
        let mut settings = Settings::default();

        if let Some(toml::Item::Table(device)) = toml.get("device") {
            let family = match device.get_item("family") {
                Some(toml::Item::String(name)) => match ChipFamily::from_name(name) {
                    Some(family) => Some(family),
                    None => return Err(Error::InvalidSettings(format!("Unknown chip family '{name}'"))),
                },
                Some(_) => return Err(Error::InvalidSettings("'device.family' needs to be a string".to_string())),
                None => None,
            };

            let chip_class = match device.get_item("chip-class") {
                Some(toml::Item::String(name)) => match ChipClass::from_name(name) {
                    Some(chip_class) => Some(chip_class),
                    None => return Err(Error::InvalidSettings(format!("Unknown chip class '{name}'"))),
                },
                Some(_) => return Err(Error::InvalidSettings("'device.chip-class' needs to be a string".to_string())),
                None => None,
            };

            match (chip_class, family) {
                (Some(chip_class), Some(family)) => {
                    if family.chip_class() != chip_class {
                        return Err(Error::InvalidSettings(format!("Chip family '{family}' is not a {chip_class} chip")));
                    }
                    settings.chip_class = chip_class;
                    settings.family = family;
                },
                (None, Some(family)) => {
                    settings.chip_class = family.chip_class();
                    settings.family = family;
                },
                (Some(chip_class), None) => {
                    settings.chip_class = chip_class;
                    settings.family = first_family_of(chip_class);
                },
                (None, None) => {},
            }
        }

        if let Some(toml::Item::Table(debug)) = toml.get("debug") {
            match debug.get_item("log-level") {
                Some(toml::Item::String(level)) => settings.log_level = match LogLevel::from_name(level) {
                    Some(level) => level,
                    None => return Err(Error::InvalidSettings(format!("Unknown log level '{level}'"))),
                },
                Some(_) => return Err(Error::InvalidSettings("'debug.log-level' needs to be a string".to_string())),
                None => {},
            }
        }

        Ok(settings)
    }

    /// Get the device the settings describe
    pub fn device(&self) -> DeviceInfo {
        DeviceInfo { chip_class: self.chip_class, family: self.family }
    }
}

impl Default for Settings {
    fn default() -> Self {
        let device = DeviceInfo::default();
        Self {
            chip_class: device.chip_class,
            family: device.family,
            log_level: LogLevel::Warning,
        }
    }
}

fn first_family_of(chip_class: ChipClass) -> ChipFamily {
    match chip_class {
        ChipClass::Gfx6    => ChipFamily::Tahiti,
        ChipClass::Gfx7    => ChipFamily::Bonaire,
        ChipClass::Gfx8    => ChipFamily::Tonga,
        ChipClass::Gfx9    => ChipFamily::Vega10,
        ChipClass::Gfx10   => ChipFamily::Navi10,
        ChipClass::Gfx10_3 => ChipFamily::Navi21,
    }
}
