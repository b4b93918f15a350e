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
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::error::Error;
use crate::format;
use crate::info::ProjectInfo;
use crate::writer::LogWriter;

const BANNER: &str = "======================================================";

/// A sink that owns one log file and an optional live mirror stream.
///
/// Opening always creates the file from scratch: re-targeting replaces the
/// old content rather than appending to it. The file is flushed after every
/// write; durability wins over throughput here.
pub struct FileLogWriter {
    file: Option<File>,
    mirror: Option<Box<dyn Write + Send>>,
    info: ProjectInfo,
}

impl fmt::Debug for FileLogWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileLogWriter")
            .field("file", &self.file)
            .field("mirror", &self.mirror.is_some())
            .field("info", &self.info)
            .finish()
    }
}

impl Default for FileLogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FileLogWriter {
    /// Create a closed sink; nothing is written until [`FileLogWriter::open`]
    /// succeeds.
    pub fn new() -> Self {
        Self {
            file: None,
            mirror: None,
            info: ProjectInfo::default(),
        }
    }

    /// Attach a live stream that receives a copy of everything written.
    ///
    /// The mirror is written before the file and is kept even while the file
    /// is closed.
    pub fn set_mirror(&mut self, mirror: Box<dyn Write + Send>) {
        self.mirror = Some(mirror);
    }

    /// Whether a log file is currently open.
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Open `path` for `info`, writing the header block on success.
    ///
    /// A bare file name (no directory component) resolves against
    /// `info.tmp_path`. The parent directory is created if missing and the
    /// file is created with truncation. An already open file is closed first,
    /// footer included.
    ///
    /// On failure the error is also reported on stderr and the sink stays
    /// closed, turning subsequent writes into no-ops.
    pub fn open(&mut self, path: &Path, info: ProjectInfo) -> Result<(), Error> {
        self.close();
        self.info = info;

        let path = self.resolve(path);
        if let Some(dir) = path.parent() {
            if let Err(source) = fs::create_dir_all(dir) {
                let err = Error::CreateDirectory {
                    path: dir.to_path_buf(),
                    source,
                };
                eprintln!("{err}");
                return Err(err);
            }
        }

        match File::create(&path) {
            Ok(file) => {
                self.file = Some(file);
                println!("Log created: '{}'", path.display());
                self.header();
                Ok(())
            }
            Err(source) => {
                let err = Error::CreateFile { path, source };
                eprintln!("{err}");
                Err(err)
            }
        }
    }

    /// Redirect the sink to `path`, keeping the current project metadata.
    ///
    /// Equivalent to close-then-open and safe to call repeatedly; the
    /// previous file ends with its footer and the new one replaces whatever
    /// content it had.
    pub fn change_log(&mut self, path: &Path) -> Result<(), Error> {
        let info = self.info.clone();
        self.open(path, info)
    }

    /// Redirect the sink to the log path described by `info`.
    pub fn change_log_info(&mut self, info: ProjectInfo) -> Result<(), Error> {
        let path = info.resolved_log_path();
        self.open(&path, info)
    }

    /// Write the footer block and release the file. No-op when closed.
    pub fn close(&mut self) {
        if self.file.is_none() {
            return;
        }
        self.footer();
        if let Some(mut file) = self.file.take() {
            let _ = file.flush();
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => path.to_path_buf(),
            _ => self.info.tmp_path.join(path),
        }
    }

    fn header(&mut self) {
        let text = format!(
            "{BANNER}\n  {} {} {}.{} - Event log - {}\n  git branch: {}\n  git SHA1: {}\n{BANNER}\n\n",
            self.info.name,
            self.info.build_mode(),
            self.info.major_version,
            self.info.minor_version,
            format::current_date(),
            self.info.git_branch,
            self.info.git_sha1,
        );
        self.write(&text);
    }

    fn footer(&mut self) {
        let text = format!(
            "\n{BANNER}\n  {} log closed at {}\n{BANNER}\n\n",
            self.info.name,
            format::current_time(),
        );
        self.write(&text);
    }
}

impl LogWriter for FileLogWriter {
    fn write(&mut self, text: &str) {
        if let Some(mirror) = self.mirror.as_mut() {
            let _ = mirror.write_all(text.as_bytes());
            let _ = mirror.flush();
        }

        let Some(file) = self.file.as_mut() else {
            return;
        };
        let _ = file.write_all(text.as_bytes());
        let _ = file.flush();
    }
}
