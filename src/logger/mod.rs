// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod global;

pub use global::ShutdownGuard;
pub use global::global;
pub use global::init;

use std::fmt;
use std::fmt::Write as _;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::error::Error;
use crate::format;
use crate::info::ProjectInfo;
use crate::severity::Severity;
use crate::value::Value;
use crate::writer::FileLogWriter;
use crate::writer::LogWriter;

/// Default bound, in bytes, on one rendered payload.
const DEFAULT_PAYLOAD_CAPACITY: usize = 1024;

/// The logging core: one file sink behind the lock that makes a fluent chain
/// of writes appear atomic to concurrent callers.
///
/// [`Logger::lock`] hands out a [`Chain`] that holds the lock for the whole
/// event; everything else here is lifecycle plumbing around the sink.
///
/// # Examples
///
/// ```no_run
/// use chainlog::Logger;
/// use chainlog::ProjectInfo;
/// use chainlog::Severity;
///
/// let logger = Logger::new();
/// logger.open(ProjectInfo::new("myproject")).unwrap();
/// logger
///     .lock()
///     .time()
///     .severity(Severity::Info)
///     .callsite("main", 7)
///     .log(format_args!("ready"))
///     .eol()
///     .unlock();
/// logger.close();
/// ```
#[derive(Debug)]
pub struct Logger {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    writer: FileLogWriter,
    buffer: String,
    capacity: usize,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a logger with a closed sink; no file is touched until
    /// [`Logger::open`] succeeds.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                writer: FileLogWriter::new(),
                buffer: String::with_capacity(DEFAULT_PAYLOAD_CAPACITY),
                capacity: DEFAULT_PAYLOAD_CAPACITY,
            }),
        }
    }

    /// Create a logger whose sink mirrors everything to `mirror` in addition
    /// to the log file.
    ///
    /// The mirror shares the event lock with the file, nothing more; a slow
    /// mirror extends the critical section for everyone.
    pub fn with_mirror(mirror: Box<dyn io::Write + Send>) -> Self {
        let logger = Self::new();
        logger.lock_inner().writer.set_mirror(mirror);
        logger
    }

    /// Bound, in bytes, on one rendered payload; anything longer is cut at a
    /// character boundary.
    pub fn payload_capacity(self, capacity: usize) -> Self {
        self.lock_inner().capacity = capacity;
        self
    }

    /// Open the log file described by `info`, writing the header block.
    ///
    /// Failures are reported on stderr as well; the sink then stays closed
    /// and chain writes are silently dropped until a later open succeeds.
    pub fn open(&self, info: ProjectInfo) -> Result<(), Error> {
        let path = info.resolved_log_path();
        self.lock_inner().writer.open(&path, info)
    }

    /// Redirect the whole logger to `path`, keeping the current metadata.
    ///
    /// The previous file is closed (footer and all) and the new target starts
    /// from scratch. Safe to call repeatedly.
    pub fn change_log(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.lock_inner().writer.change_log(path.as_ref())
    }

    /// Redirect the whole logger to the log path described by `info`.
    pub fn change_log_info(&self, info: ProjectInfo) -> Result<(), Error> {
        self.lock_inner().writer.change_log_info(info)
    }

    /// Close the sink, writing the footer block. No-op when already closed.
    pub fn close(&self) {
        self.lock_inner().writer.close();
    }

    /// Whether a log file is currently open.
    pub fn is_open(&self) -> bool {
        self.lock_inner().writer.is_open()
    }

    /// Begin a logical event, blocking until the logger is free.
    ///
    /// The returned [`Chain`] keeps the logger locked until it is released,
    /// so the fragments of one event always land contiguously in the sink.
    /// Acquisition order is whatever order the lock grants; there is no
    /// timeout. Do not nest a second `lock` on the same thread while a
    /// [`Chain`] is alive, that deadlocks.
    pub fn lock(&self) -> Chain<'_> {
        Chain {
            inner: self.lock_inner(),
        }
    }

    fn lock_inner(&self) -> MutexGuard<'_, Inner> {
        // a poisoned lock is recovered, the logger keeps accepting events
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// An exclusive handle over the logger for one logical event.
///
/// Produced by [`Logger::lock`]. Every fluent call writes its fragment
/// straight through the sink, with no whole-line buffering, so the handle
/// must live until the event is complete. Releasing it, explicitly via
/// [`Chain::unlock`] or by dropping, ends the event and admits the next
/// caller.
#[must_use = "the event stays open and the logger stays locked until the chain is released"]
pub struct Chain<'a> {
    inner: MutexGuard<'a, Inner>,
}

impl fmt::Debug for Chain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain").finish_non_exhaustive()
    }
}

impl Chain<'_> {
    /// Write the current wall-clock time fragment, `HH:MM:SS `.
    pub fn time(mut self) -> Self {
        let time = format::current_time();
        self.inner.writer.write(&time);
        self.inner.writer.write(" ");
        self
    }

    /// Write the severity label fragment, e.g. `[ERROR] `.
    ///
    /// [`Severity::None`] writes nothing, not even the separating space.
    pub fn severity(mut self, severity: Severity) -> Self {
        let label = severity.label();
        if !label.is_empty() {
            self.inner.writer.write(label);
            self.inner.writer.write(" ");
        }
        self
    }

    /// Write the call-site fragment, `(function:line) `.
    ///
    /// The function name comes from the caller; see [`crate::log_chain!`]
    /// for the macro that captures it automatically.
    pub fn callsite(mut self, function: &str, line: u32) -> Self {
        let tag = format::callsite(function, line);
        self.inner.writer.write(&tag);
        self
    }

    /// Render `args` into the reusable payload buffer and write it.
    ///
    /// One trailing `'\n'` produced by the format step is stripped; the line
    /// terminator is [`Chain::eol`]'s job. Payloads longer than the
    /// configured capacity are truncated at a character boundary, which is a
    /// documented policy rather than an error.
    pub fn log(mut self, args: fmt::Arguments<'_>) -> Self {
        let inner = &mut *self.inner;
        inner.buffer.clear();
        let _ = write!(&mut inner.buffer, "{args}");
        if inner.buffer.ends_with('\n') {
            inner.buffer.pop();
        }
        truncate_at_char_boundary(&mut inner.buffer, inner.capacity);
        inner.writer.write(&inner.buffer);
        self
    }

    /// Render `values` separated by `delimiter` and write the result.
    ///
    /// The delimiter goes between elements only, never after the last one.
    /// The capacity bound of [`Chain::log`] applies here too.
    pub fn log_list(mut self, values: &[Value<'_>], delimiter: &str) -> Self {
        let inner = &mut *self.inner;
        inner.buffer.clear();
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                inner.buffer.push_str(delimiter);
            }
            let _ = write!(&mut inner.buffer, "{value}");
        }
        truncate_at_char_boundary(&mut inner.buffer, inner.capacity);
        inner.writer.write(&inner.buffer);
        self
    }

    /// Write the end-of-line marker.
    pub fn eol(mut self) -> Self {
        self.inner.writer.write(format::EOL);
        self
    }

    /// Finish the event and release the logger.
    ///
    /// Dropping the chain does the same; this spelling just makes the end of
    /// the event explicit at the call site.
    pub fn unlock(self) {}
}

fn truncate_at_char_boundary(buffer: &mut String, capacity: usize) {
    if buffer.len() <= capacity {
        return;
    }
    let mut end = capacity;
    while !buffer.is_char_boundary(end) {
        end -= 1;
    }
    buffer.truncate(end);
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;
    use std::sync::Mutex;

    use super::Logger;
    use crate::severity::Severity;
    use crate::value::Value;

    /// An `io::Write` handle over shared memory, used as a mirror stream so
    /// the tests can observe sink output without a file.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn mirrored_logger() -> (Logger, SharedBuf) {
        let buf = SharedBuf::default();
        let logger = Logger::with_mirror(Box::new(buf.clone()));
        (logger, buf)
    }

    #[test]
    fn log_formats_payload_and_strips_one_trailing_newline() {
        let (logger, buf) = mirrored_logger();
        logger
            .lock()
            .log(format_args!("{}={}\n", "x", 42))
            .eol()
            .unlock();
        assert_eq!(buf.contents(), "x=42\n");
    }

    #[test]
    fn eol_is_separate_from_the_payload() {
        let (logger, buf) = mirrored_logger();
        logger.lock().log(format_args!("no terminator")).unlock();
        assert_eq!(buf.contents(), "no terminator");
    }

    #[test]
    fn log_list_joins_without_trailing_delimiter() {
        let (logger, buf) = mirrored_logger();
        let values = [Value::from(1i64), Value::from(2.5f64), Value::from("ok")];
        logger.lock().log_list(&values, ",").unlock();
        assert_eq!(buf.contents(), "1,2.5,ok");
    }

    #[test]
    fn log_list_of_one_element_has_no_delimiter() {
        let (logger, buf) = mirrored_logger();
        logger.lock().log_list(&[Value::from(7u64)], ", ").unlock();
        assert_eq!(buf.contents(), "7");
    }

    #[test]
    fn none_severity_writes_no_label() {
        let (logger, buf) = mirrored_logger();
        logger
            .lock()
            .severity(Severity::None)
            .log(format_args!("payload"))
            .unlock();
        assert_eq!(buf.contents(), "payload");
    }

    #[test]
    fn event_line_shape() {
        let (logger, buf) = mirrored_logger();
        logger
            .lock()
            .time()
            .severity(Severity::Error)
            .callsite("main", 7)
            .log(format_args!("boom"))
            .eol()
            .unlock();

        let line = buf.contents();
        // "HH:MM:SS [ERROR] (main:7) boom\n"
        assert_eq!(&line[8..], " [ERROR] (main:7) boom\n");
        assert_eq!(line.as_bytes()[2], b':');
        assert_eq!(line.as_bytes()[5], b':');
    }

    #[test]
    fn oversized_payload_is_truncated_at_a_char_boundary() {
        let buf = SharedBuf::default();
        let logger = Logger::with_mirror(Box::new(buf.clone())).payload_capacity(5);
        // 'é' is two bytes; the 5-byte cut would split the third one.
        logger.lock().log(format_args!("ééé")).unlock();
        assert_eq!(buf.contents(), "éé");
    }

    #[test]
    fn chain_drop_releases_the_lock() {
        let (logger, buf) = mirrored_logger();
        {
            let chain = logger.lock().log(format_args!("first"));
            drop(chain);
        }
        logger.lock().log(format_args!(" second")).unlock();
        assert_eq!(buf.contents(), "first second");
    }
}
