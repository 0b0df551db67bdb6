//! Log line formatting: wall-clock time, game tick, level, target and fields.

use std::fmt::{self, Write as _};
use std::sync::atomic::{AtomicU64, Ordering};

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Number of game updates run so far, shown on every log line.
static GAME_TICK: AtomicU64 = AtomicU64::new(0);

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:3]");

/// Formats events as `12:00:01.234 0x01F4  INFO target: message key=value`.
pub struct CustomFormatter;

impl<S, N> FormatEvent<S, N> for CustomFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        let timestamp = OffsetDateTime::now_utc().format(TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;
        paint(&mut writer, ansi, DIM, timestamp)?;
        writer.write_char(' ')?;

        paint(&mut writer, ansi, DIM, format_args!("0x{:04X}", tick() & 0xFFFF))?;
        writer.write_char(' ')?;

        let (color, label) = level_style(meta.level());
        paint(&mut writer, ansi, color, format_args!("{label:>5}"))?;
        writer.write_char(' ')?;

        paint(&mut writer, ansi, DIM, format_args!("{}:", meta.target()))?;
        writer.write_char(' ')?;

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

const DIM: &str = "\x1b[2m";

fn level_style(level: &Level) -> (&'static str, &'static str) {
    match *level {
        Level::TRACE => ("\x1b[35m", "TRACE"),
        Level::DEBUG => ("\x1b[34m", "DEBUG"),
        Level::INFO => ("\x1b[32m", "INFO"),
        Level::WARN => ("\x1b[33m", "WARN"),
        Level::ERROR => ("\x1b[31m", "ERROR"),
    }
}

fn paint(writer: &mut Writer<'_>, ansi: bool, style: &str, text: impl fmt::Display) -> fmt::Result {
    if ansi {
        write!(writer, "{style}{text}\x1b[0m")
    } else {
        write!(writer, "{text}")
    }
}

/// Advances the tick shown in log lines. Called once per game update.
pub fn increment_tick() {
    GAME_TICK.fetch_add(1, Ordering::Relaxed);
}

pub fn tick() -> u64 {
    GAME_TICK.load(Ordering::Relaxed)
}
