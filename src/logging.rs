//! `tracing` subscriber setup shared by the binaries.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Compact log lines on stderr.
pub fn init_stderr(level: LevelFilter) {
    init(io::stderr, true, level);
}

/// Log into a file instead, so that a full-screen terminal UI stays intact.
pub fn init_file(path: &Path, level: LevelFilter) -> io::Result<()> {
    let file = File::create(path)?;
    init(Mutex::new(file), false, level);
    Ok(())
}

fn init<W>(writer: W, ansi: bool, level: LevelFilter)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .with_ansi(ansi)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_ansi(ansi)
                .with_writer(writer),
        )
        .with(filter)
        .init();
}
