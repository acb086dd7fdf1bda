//! Interactive height picker driven from stdin.
//!
//! Commands: `scroll <px>`, `by <delta px>`, `goto <cm>`,
//! `unit metric|imperial|0|1`, `ticks`, `quit`.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use height_picker::constants::DEMO_VIEWPORT_HEIGHT;
use height_picker::{
    LogLevel, PickerConfig, PickerMessage, Pixels, ScaleController, ScrollState, SideEffect, TextSurface,
    UnitMode,
};

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    ScrollTo(f32),
    ScrollBy(f32),
    GoTo(i32),
    Unit(UnitMode),
    Ticks,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().ok_or("empty command")?;
    let arg = parts.next();

    let number = |arg: Option<&str>| -> Result<f32, String> {
        let arg = arg.ok_or_else(|| format!("'{}' needs a number", verb))?;
        arg.parse::<f32>()
            .map_err(|e| format!("invalid number '{}': {}", arg, e))
    };

    match verb {
        "scroll" => Ok(Command::ScrollTo(number(arg)?)),
        "by" => Ok(Command::ScrollBy(number(arg)?)),
        "goto" => {
            let arg = arg.ok_or("'goto' needs a height in cm")?;
            arg.parse::<i32>()
                .map(Command::GoTo)
                .map_err(|e| format!("invalid height '{}': {}", arg, e))
        }
        "unit" => {
            let arg = arg.ok_or("'unit' needs metric or imperial")?;
            arg.parse::<UnitMode>()
                .map(Command::Unit)
                .map_err(|e| e.to_string())
        }
        "ticks" => Ok(Command::Ticks),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{}'", other)),
    }
}

fn load_config() -> Result<PickerConfig, Box<dyn Error>> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Ok(PickerConfig::load_from_path(&path)?),
        None => Ok(PickerConfig::load_from_default_path()),
    }
}

/// Level to cap logging at for `level`, or `None` when `RUST_LOG` already
/// chose the filters.
fn configured_level(level: LogLevel, rust_log: Option<&str>) -> Option<log::LevelFilter> {
    match rust_log {
        Some(filters) if !filters.trim().is_empty() => None,
        _ => Some(level.to_level_filter()),
    }
}

/// Install the logger before anything can log. Without `RUST_LOG` every
/// record passes the logger and `log::set_max_level` does the filtering, so
/// the configured level can be applied once the config is loaded.
fn init_logging(rust_log: Option<&str>) {
    let mut builder = env_logger::Builder::new();
    match rust_log {
        Some(filters) if !filters.trim().is_empty() => {
            builder.parse_filters(filters);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();

    if let Some(level) = configured_level(LogLevel::default(), rust_log) {
        log::set_max_level(level);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let rust_log = std::env::var("RUST_LOG").ok();
    init_logging(rust_log.as_deref());

    let config = load_config()?;
    if let Some(level) = configured_level(config.log_level, rust_log.as_deref()) {
        log::set_max_level(level);
    }

    config.validate()?;
    log::info!(
        "Height picker over [{}, {}] cm, {} px/cm",
        config.minimum_value_cm,
        config.maximum_value_cm,
        config.pixel_density
    );

    let surface = TextSurface::new(config.build_tick_labels()?);
    let pulse = SideEffect::new(|| log::info!("Feedback pulse"));
    let mut controller = ScaleController::new(config.build_model()?, surface, pulse);

    let mut scroll = ScrollState::new(Pixels::new(DEMO_VIEWPORT_HEIGHT));
    log::debug!(
        "Content height {} for viewport {}",
        scroll.content_height(controller.content_extent_pixels()),
        scroll.viewport
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", controller.surface().primary_text())?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                continue;
            }
        };

        match command {
            Command::ScrollTo(px) => scroll.scroll_to(Pixels::new(px)),
            Command::ScrollBy(px) => scroll.scroll_by(Pixels::new(px)),
            Command::GoTo(cm) => scroll.scroll_to(controller.offset_for_value(cm)),
            Command::Unit(mode) => controller.update(PickerMessage::UnitToggled(mode)),
            Command::Ticks => {
                for label in controller.surface().tick_labels().iter() {
                    writeln!(out, "  {:>4} cm  {}", label.value, label.text)?;
                }
                continue;
            }
            Command::Quit => break,
        }

        if !matches!(command, Command::Unit(_)) {
            controller.update(PickerMessage::Scrolled(scroll.offset.value()));
        }
        writeln!(out, "{}", controller.surface().primary_text())?;
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}
