//! Tracing subscriber setup: console formatter, run log file, and
//! initialisation.
use std::fs;
use std::io::Write as _;
use std::sync::Mutex;

use tracing::Level;

use super::utils::{ensure_log_file_path, format_utc_datetime, format_utc_time, strip_ansi};

/// Target used for stage headers.
pub(super) const STAGE_TARGET: &str = "yscaffold::stage";

/// How an event is rendered, shared by the console and the log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Stage,
    Info,
    Detail,
    Warn,
    Error,
}

impl LineKind {
    fn of(metadata: &tracing::Metadata<'_>) -> Self {
        match *metadata.level() {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO if metadata.target() == STAGE_TARGET => Self::Stage,
            Level::INFO => Self::Info,
            _ => Self::Detail,
        }
    }

    fn console(self, msg: &str) -> String {
        match self {
            Self::Stage => format!("\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m"),
            Self::Info => format!("  {msg}"),
            Self::Detail => format!("  \x1b[2m{msg}\x1b[0m"),
            Self::Warn => format!("\x1b[33mWARN\x1b[0m  {msg}"),
            Self::Error => format!("\x1b[31mERROR\x1b[0m {msg}"),
        }
    }

    fn file(self, ts: &str, msg: &str) -> String {
        let msg = strip_ansi(msg);
        match self {
            Self::Stage => format!("[{ts}] ==> {msg}"),
            Self::Info => format!("[{ts}]     {msg}"),
            Self::Detail => format!("[{ts}]     [debug] {msg}"),
            Self::Warn => format!("[{ts}]     [warn] {msg}"),
            Self::Error => format!("[{ts}]     [error] {msg}"),
        }
    }
}

/// Pulls the `message` field out of an event.
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl MessageExtractor {
    fn message_of(event: &tracing::Event<'_>) -> String {
        let mut extractor = Self::default();
        event.record(&mut extractor);
        extractor.message
    }
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// Writes every event of one run to `<cache>/yangine-scaffold/<command>.log`.
///
/// The file is truncated at start-up so it only ever holds the last run of
/// that command, which is what the summary points the user at.
#[derive(Debug)]
pub(super) struct RunLogLayer {
    file: Mutex<fs::File>,
}

impl RunLogLayer {
    /// Truncate the log for `command` and write the run header. `None` when
    /// the cache directory is unusable; console output still works then.
    pub(super) fn new(command: &str) -> Option<Self> {
        let path = ensure_log_file_path(command)?;
        let version =
            option_env!("SCAFFOLD_VERSION").unwrap_or(concat!("dev-", env!("CARGO_PKG_VERSION")));
        let cwd = std::env::current_dir()
            .map_or_else(|_| "?".to_string(), |dir| dir.display().to_string());
        let mut file = fs::File::create(&path).ok()?;
        writeln!(
            file,
            "yscaffold {command} {version} started {}\ncwd: {cwd}\n",
            format_utc_datetime(),
        )
        .ok()?;
        Some(Self {
            file: Mutex::new(file),
        })
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for RunLogLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let line = LineKind::of(event.metadata())
            .file(&format_utc_time(), &MessageExtractor::message_of(event));
        if let Ok(mut f) = self.file.lock() {
            writeln!(f, "{line}").ok();
        }
    }
}

/// Console rendering of scaffolding events.
struct ConsoleFormat;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ConsoleFormat
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let line = LineKind::of(event.metadata()).console(&MessageExtractor::message_of(event));
        writeln!(writer, "{line}")
    }
}

/// Install the global subscriber: warnings and errors to stderr, the rest
/// to stdout (debug only with `verbose`), and everything down to `DEBUG`
/// to the run log of `command`.
///
/// Call once, before the first log line.
pub fn init_subscriber(verbose: bool, command: &str) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let make_writer = std::io::stderr
        .with_max_level(Level::WARN)
        .and(std::io::stdout.with_min_level(Level::INFO));

    let console = fmt::layer()
        .event_format(ConsoleFormat)
        .with_writer(make_writer)
        .with_filter(console_level);

    let run_log = RunLogLayer::new(command).map(|l| l.with_filter(LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(console)
        .with(run_log)
        .init();
}
