// src/utils/logger.rs
//
// `log` backend that writes into the console TextView of the main window.

use gtk4::prelude::*;
use gtk4::{glib, TextView};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

static LOG_VIEW: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

/// (tag name, foreground, bold)
const TAGS: [(&str, &str, bool); 4] = [
  ("error", "#cc2222", true),
  ("warn", "#d98200", false),
  ("info", "#1f6fb2", false),
  ("debug", "#888888", false),
];

pub fn init(view: &TextView, max_level: LevelFilter) -> Result<(), SetLoggerError> {
  let tag_table = view.buffer().tag_table();
  for (name, color, bold) in TAGS {
    if tag_table.lookup(name).is_none() {
      let tag = gtk4::TextTag::new(Some(name));
      tag.set_property("foreground", color);
      if bold {
        tag.set_property("weight", 700);
      }
      tag_table.add(&tag);
    }
  }

  let _ = LOG_VIEW.set(view.downgrade().into());
  log::set_logger(&LOGGER).map(|()| log::set_max_level(max_level))
}

fn tag_for(level: Level) -> (&'static str, &'static str) {
  match level {
    Level::Error => ("ERROR", "error"),
    Level::Warn => ("WARN ", "warn"),
    Level::Info => ("INFO ", "info"),
    Level::Debug | Level::Trace => ("DEBUG", "debug"),
  }
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }
    let (label, tag_name) = tag_for(record.level());
    let msg = format!("{} {}\n", label, record.args());

    // Records can come from anywhere; the buffer is only touched on the main loop
    glib::MainContext::default().spawn_local(async move {
      let Some(view) = LOG_VIEW.get().and_then(|w| w.upgrade()) else {
        eprint!("{}", msg);
        return;
      };
      let buffer = view.buffer();
      let mut end = buffer.end_iter();
      buffer.insert_with_tags_by_name(&mut end, &msg, &[tag_name]);

      let mark = buffer.create_mark(None, &buffer.end_iter(), false);
      view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
      buffer.delete_mark(&mark);
    });
  }

  fn flush(&self) {}
}
