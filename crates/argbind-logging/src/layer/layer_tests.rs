#![allow(non_snake_case)]

use super::*;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;
use test_case::test_case;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture(level: LogLevel) -> (Captured, impl Subscriber + Send + Sync, reload::Handle<LevelFilter, Registry>) {
    let captured = Captured::default();
    let writer = captured.clone();
    let (subscriber, handle) = subscriber(level, move || writer.clone());
    (captured, subscriber, handle)
}

#[test_case(LogLevel::Trace, LevelFilter::TRACE; "trace")]
#[test_case(LogLevel::Debug, LevelFilter::DEBUG; "debug")]
#[test_case(LogLevel::Info, LevelFilter::INFO; "info")]
#[test_case(LogLevel::Warn, LevelFilter::WARN; "warn")]
#[test_case(LogLevel::Error, LevelFilter::ERROR; "error")]
#[test_case(LogLevel::Off, LevelFilter::OFF; "off")]
fn level_filter___each_level___maps_to_filter(level: LogLevel, expected: LevelFilter) {
    assert_eq!(level_filter(level), expected);
}

#[test]
fn subscriber___event_at_level___is_written_with_target() {
    let (captured, subscriber, _handle) = capture(LogLevel::Info);

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(target: "argbind::test", option = "-Xfoo", "bound option");
    });

    let text = captured.text();
    assert!(text.contains("INFO"));
    assert!(text.contains("argbind::test"));
    assert!(text.contains("bound option"));
    assert!(text.contains("option=\"-Xfoo\""));
}

#[test]
fn subscriber___event_below_level___is_filtered() {
    let (captured, subscriber, _handle) = capture(LogLevel::Warn);

    tracing::subscriber::with_default(subscriber, || {
        tracing::debug!("hidden");
        tracing::warn!("shown");
    });

    let text = captured.text();
    assert!(!text.contains("hidden"));
    assert!(text.contains("shown"));
}

#[test]
fn subscriber___reloaded_handle___changes_level() {
    let (captured, subscriber, handle) = capture(LogLevel::Error);

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("before reload");
        handle.reload(level_filter(LogLevel::Info)).unwrap();
        tracing::info!("after reload");
    });

    let text = captured.text();
    assert!(!text.contains("before reload"));
    assert!(text.contains("after reload"));
}
