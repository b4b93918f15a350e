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

//! Pure helpers producing the textual fragments of an event line.
//!
//! Every function returns an owned string and keeps no shared state, so the
//! helpers are reentrant on their own. Exclusion over the *sink* is still the
//! caller's business and is provided by [`Logger::lock`].
//!
//! [`Logger::lock`]: crate::Logger::lock

use jiff::Zoned;

/// The end-of-line marker appended by [`Chain::eol`].
///
/// [`Chain::eol`]: crate::Chain::eol
pub const EOL: &str = "\n";

/// Current wall-clock time, formatted `HH:MM:SS`.
pub fn current_time() -> String {
    Zoned::now().strftime("%H:%M:%S").to_string()
}

/// Current wall-clock date, formatted `YYYY-MM-DD`.
pub fn current_date() -> String {
    Zoned::now().strftime("%Y-%m-%d").to_string()
}

/// The call-site tag for an event line: `(function:line) `.
///
/// The function name and line are supplied at the call site; the core never
/// introspects its callers. The [`log_chain!`] and severity shorthand macros
/// fill them in automatically.
///
/// [`log_chain!`]: crate::log_chain
pub fn callsite(function: &str, line: u32) -> String {
    format!("({function}:{line}) ")
}
