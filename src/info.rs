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

use std::env;
use std::path::PathBuf;

/// Project metadata captured once when the log file is opened.
///
/// The fields are only ever read to render the header and footer banners;
/// nothing mutates them afterwards.
///
/// # Examples
///
/// ```
/// use chainlog::ProjectInfo;
///
/// let info = ProjectInfo::new("myproject")
///     .version(1, 0)
///     .git("master", "c9e5b68")
///     .log_name("myproject.log");
/// ```
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    /// Project name (ie. "myproject").
    pub name: String,
    /// Whether the project was compiled in debug mode.
    pub debug: bool,
    /// Major version of the project (ie. 1).
    pub major_version: u32,
    /// Minor version of the project (ie. 0).
    pub minor_version: u32,
    /// Git SHA1 of the build (ie. "c9e5b68").
    pub git_sha1: String,
    /// Git branch of the build (ie. "master").
    pub git_branch: String,
    /// Path where the project resources are installed.
    pub data_path: PathBuf,
    /// Location for temporary files; bare log file names resolve against it.
    pub tmp_path: PathBuf,
    /// File name of the log file (ie. "myproject.log").
    pub log_name: String,
    /// Full path of the log file; overrides `tmp_path`/`log_name` when set.
    pub log_path: Option<PathBuf>,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            name: "project".to_string(),
            debug: cfg!(debug_assertions),
            major_version: 0,
            minor_version: 1,
            git_sha1: String::new(),
            git_branch: String::new(),
            data_path: PathBuf::new(),
            tmp_path: env::temp_dir(),
            log_name: "project.log".to_string(),
            log_path: None,
        }
    }
}

impl ProjectInfo {
    /// Create metadata for `name` with default paths and version `0.1`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the project version.
    pub fn version(mut self, major: u32, minor: u32) -> Self {
        self.major_version = major;
        self.minor_version = minor;
        self
    }

    /// Sets the debug flag recorded in the header banner.
    ///
    /// Defaults to the crate's own `debug_assertions` setting.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets the git branch and SHA1 recorded in the header banner.
    pub fn git(mut self, branch: impl Into<String>, sha1: impl Into<String>) -> Self {
        self.git_branch = branch.into();
        self.git_sha1 = sha1.into();
        self
    }

    /// Sets the project data path.
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Sets the temporary directory bare log file names resolve against.
    ///
    /// Defaults to [`std::env::temp_dir`].
    pub fn tmp_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tmp_path = path.into();
        self
    }

    /// Sets the log file name.
    pub fn log_name(mut self, name: impl Into<String>) -> Self {
        self.log_name = name.into();
        self
    }

    /// Sets the full log file path, overriding `tmp_path`/`log_name`.
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// The path the log file opens at: `log_path` when set, otherwise
    /// `tmp_path` joined with `log_name`.
    pub fn resolved_log_path(&self) -> PathBuf {
        match &self.log_path {
            Some(path) => path.clone(),
            None => self.tmp_path.join(&self.log_name),
        }
    }

    pub(crate) fn build_mode(&self) -> &'static str {
        if self.debug { "Debug" } else { "Release" }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::ProjectInfo;

    #[test]
    fn log_path_overrides_tmp_and_name() {
        let info = ProjectInfo::new("p")
            .tmp_path("/tmp/somewhere")
            .log_name("p.log");
        assert_eq!(
            info.resolved_log_path(),
            Path::new("/tmp/somewhere").join("p.log")
        );

        let info = info.log_path("/var/log/p.log");
        assert_eq!(info.resolved_log_path(), Path::new("/var/log/p.log"));
    }

    #[test]
    fn build_mode_tracks_debug_flag() {
        assert_eq!(ProjectInfo::new("p").debug(true).build_mode(), "Debug");
        assert_eq!(ProjectInfo::new("p").debug(false).build_mode(), "Release");
    }
}
