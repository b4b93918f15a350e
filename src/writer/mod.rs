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

//! Sinks that record rendered log text.

mod file;

pub use file::FileLogWriter;

/// A sink that accepts finished fragments of log text.
///
/// `write` is only invoked while the issuing [`Logger`]'s lock is held, so
/// implementations need no synchronization of their own. I/O failures never
/// cross this interface: a sink swallows them and surfaces targeting problems
/// through its own lifecycle operations instead.
///
/// [`Logger`]: crate::Logger
pub trait LogWriter: Send {
    /// Append `text` to the sink, applying whatever flushing policy the sink
    /// chooses.
    fn write(&mut self, text: &str);
}
