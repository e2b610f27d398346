use std::{fs, io::{self, Write}};

use texcaps_format::{ClearColorValue, FormatCapabilityResolver, Settings};
use texcaps_logging::{log_error, log_info, log_warning, set_logger, LogCategory, Logger};

pub const LOG_CAT : LogCategory = LogCategory::new("Main");

const SETTINGS_FILE : &str = "texcaps.toml";

static LOGGER : Logger = Logger::new();

fn main() {
    set_logger(&LOGGER);

    match fs::File::create("log.txt") {
        Ok(file) => { _ = LOGGER.add_writer(Box::new(file)); },
        Err(err) => log_warning!(LOG_CAT, "Failed to create 'log.txt', only logging to the console: {err}"),
    }

    let path = std::env::args().nth(1).unwrap_or_else(|| SETTINGS_FILE.to_string());
    let settings = match fs::read_to_string(&path) {
        Ok(toml) => match Settings::load(&toml) {
            Some(settings) => settings,
            None => return,
        },
        Err(err) => {
            log_warning!(LOG_CAT, "Failed to read '{path}', using the default device: {err}");
            Settings::default()
        },
    };
    LOGGER.set_max_level(settings.log_level);

    let device = settings.device();
    log_info!(LOG_CAT, "Querying format capabilities for {} ({})", device.family, device.chip_class);

    let resolver = FormatCapabilityResolver::new(device);
    if let Err(err) = print_capabilities(&resolver) {
        log_error!(LOG_CAT, main, "Failed to write the format capabilities: {err}");
    }

    LOGGER.flush();
}

fn print_capabilities(resolver: &FormatCapabilityResolver) -> io::Result<()> {
    let mut out = io::stdout().lock();
    let white = ClearColorValue::Float([1.0; 4]);

    for (format, props) in resolver.get_format_properties_table() {
        if props.is_empty() {
            writeln!(out, "{format}: unsupported")?;
            continue;
        }

        let caps = resolver.query_capabilities(format);
        writeln!(out, "{format}:")?;
        writeln!(out, "    buffer:  {} {}", caps.buffer_data_format, caps.buffer_num_format)?;
        writeln!(out, "    texture: {} {}", caps.texture_data_format, caps.texture_num_format)?;
        writeln!(out, "    linear:  {:?}", props.linear_tiling_features)?;
        writeln!(out, "    optimal: {:?}", props.optimal_tiling_features)?;
        writeln!(out, "    buffers: {:?}", props.buffer_features)?;

        if caps.color_attachment && format.plane_count() == 1 {
            match resolver.pack_clear_color(format.descriptor(), &white) {
                Ok(packed) => writeln!(out, "    white:   {:08X} {:08X}", packed.words[1], packed.words[0])?,
                Err(err) => writeln!(out, "    white:   slow clear ({err})")?,
            }
        }
    }
    Ok(())
}
