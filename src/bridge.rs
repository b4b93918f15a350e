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

//! Bridge from the `log` crate facade into the global chain protocol.
//!
//! Once installed, `log::info!` and friends each become one complete atomic
//! event on the process-wide logger, sharing its lock with direct chain
//! callers. The record's module path and line stand in for the call-site tag.

use crate::global;
use crate::severity::Severity;

struct LogCrateBridge(());

impl log::Log for LogCrateBridge {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let severity = match record.level() {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            // no trace label exists in this model
            log::Level::Debug | log::Level::Trace => Severity::Debug,
        };
        let function = record.module_path().unwrap_or("?");
        let line = record.line().unwrap_or(0);

        global()
            .lock()
            .time()
            .severity(severity)
            .callsite(function, line)
            .log(*record.args())
            .eol()
            .unlock();
    }

    fn flush(&self) {}
}

/// Set up the log crate global logger to forward into chainlog.
///
/// This should be called early in the execution of a Rust program. Any log
/// events that occur before initialization are ignored.
///
/// This function sets the global maximum log level to `Trace`. To override
/// this, call [`log::set_max_level`] afterwards.
///
/// # Errors
///
/// Returns an error if the log crate global logger has already been set.
pub fn try_setup() -> Result<(), log::SetLoggerError> {
    static BRIDGE: LogCrateBridge = LogCrateBridge(());
    log::set_logger(&BRIDGE)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger to forward into chainlog.
///
/// # Panics
///
/// Panics if the log crate global logger has already been set.
pub fn setup() {
    try_setup().expect(
        "chainlog::bridge::setup must be called before the log crate global logger is initialized",
    );
}
