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

use std::io;
use std::path::PathBuf;

/// Errors surfaced when targeting the file sink.
///
/// Only `open`/`change_log` can fail; once a file is open, write failures are
/// swallowed by the sink (durability is attempted per write, not guaranteed).
/// A failed open leaves the sink closed and every subsequent write a no-op.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The parent directory of the log file could not be created.
    #[error("failed to create log directory '{}': {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The log file itself could not be created.
    #[error("failed to create log file '{}': {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
