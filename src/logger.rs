//! [`log`] facade integration.
//!
//! A [`Handler`] can stand behind the `log` macros, so
//! `log::info!(port = 8080; "starting")` renders like any other entry.
//! Nothing is filtered here: every record that reaches the facade is written.

use std::collections::HashMap;
use std::io::Write;

use log::kv::{self, VisitSource};

use crate::entry::{Entry, Value};
use crate::handler::Handler;

impl<W: Write + Send> log::Log for Handler<W> {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        // `log` has nowhere to report a failed write, and logging it would
        // go back through this same sink.
        let _ = self.handle(&entry_from_record(record));
    }

    fn flush(&self) {
        let _ = Handler::flush(self);
    }
}

impl<W: Write + Send + 'static> Handler<W> {
    /// Register this handler as the process-wide `log` logger.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

/// Convert a `log` record into an [`Entry`]; key-values become fields.
pub fn entry_from_record(record: &log::Record<'_>) -> Entry {
    let mut entry = Entry::new(record.level().into(), record.args().to_string());
    let mut collect = Collect(&mut entry.fields);
    // Our visitor never fails.
    let _ = record.key_values().visit(&mut collect);
    entry
}

struct Collect<'a>(&'a mut HashMap<String, Value>);

impl<'kvs> VisitSource<'kvs> for Collect<'_> {
    fn visit_pair(&mut self, key: kv::Key<'kvs>, value: kv::Value<'kvs>) -> Result<(), kv::Error> {
        self.0.insert(key.as_str().to_owned(), Value::display(value));
        Ok(())
    }
}
