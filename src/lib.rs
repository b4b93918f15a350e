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

//! Chainlog is a small textual event logger for Rust applications, writing
//! timestamped, severity-tagged lines to one file with an optional live
//! mirror stream.
//!
//! # Overview
//!
//! An event is built as a chain of fluent calls on an exclusive [`Chain`]
//! handle obtained from [`Logger::lock`]. Each call writes its fragment
//! straight through the sink; the handle holds the logger's lock for the
//! whole chain, so concurrent callers can never interleave their fragments.
//! Releasing the handle ends the event.
//!
//! # Examples
//!
//! Simple setup with the process-wide logger and the severity shorthands:
//!
//! ```no_run
//! let info = chainlog::ProjectInfo::new("myproject")
//!     .version(1, 0)
//!     .git("master", "c9e5b68");
//! let _guard = chainlog::init(info).unwrap();
//!
//! chainlog::logi!("{} instances started", 2);
//! chainlog::loge!("cannot reach '{}'", "backend");
//! ```
//!
//! Building an event by hand:
//!
//! ```no_run
//! use chainlog::Severity;
//!
//! chainlog::global()
//!     .lock()
//!     .time()
//!     .severity(Severity::Warning)
//!     .callsite("main", 42)
//!     .log(format_args!("short on {}", "memory"))
//!     .eol()
//!     .unlock();
//! ```

pub mod bridge;
pub mod format;
pub mod writer;

mod error;
mod info;
mod logger;
mod macros;
mod severity;
mod value;

pub use error::Error;
pub use info::ProjectInfo;
pub use logger::Chain;
pub use logger::Logger;
pub use logger::ShutdownGuard;
pub use logger::global;
pub use logger::init;
pub use severity::Severity;
pub use value::Value;
pub use writer::FileLogWriter;
pub use writer::LogWriter;
