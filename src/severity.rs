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

use std::fmt;

/// Classification of a log event.
///
/// The declaration order only drives the label table; severities carry no
/// comparison semantics. `Fatal` is a label like any other, not a
/// process-terminating action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// No classification; renders as no label at all.
    None,
    Info,
    Debug,
    Warning,
    Failed,
    Error,
    Signal,
    Exception,
    Catch,
    Fatal,
}

impl Severity {
    /// The bracketed label written in front of an event line.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlog::Severity;
    ///
    /// assert_eq!(Severity::Error.label(), "[ERROR]");
    /// assert_eq!(Severity::None.label(), "");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            Severity::None => "",
            Severity::Info => "[INFO]",
            Severity::Debug => "[DEBUG]",
            Severity::Warning => "[WARNING]",
            Severity::Failed => "[FAILURE]",
            Severity::Error => "[ERROR]",
            Severity::Signal => "[SIGNAL]",
            Severity::Exception => "[THROW]",
            Severity::Catch => "[CATCH]",
            Severity::Fatal => "[FATAL]",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
