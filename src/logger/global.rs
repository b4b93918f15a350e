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

use std::sync::OnceLock;

use crate::error::Error;
use crate::info::ProjectInfo;
use crate::logger::Logger;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger.
///
/// Created on first use with a closed sink; no file is touched until
/// [`init`] (or [`Logger::open`] on the returned reference) is called. The
/// severity shorthand macros and the [`bridge`] all write through this
/// instance.
///
/// [`bridge`]: crate::bridge
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Open the process-wide logger against the log path described by `info`.
///
/// Returns a [`ShutdownGuard`] whose drop closes the sink, footer included.
/// Statics run no destructors in Rust, so binding the guard in `main` is what
/// gives the log file its deterministic teardown:
///
/// ```no_run
/// fn main() {
///     let _guard = chainlog::init(chainlog::ProjectInfo::new("myproject")).unwrap();
///
///     chainlog::logi!("up and running");
///     // the footer is written when `_guard` drops
/// }
/// ```
///
/// # Errors
///
/// Returns an error if the log file cannot be created; the global logger then
/// stays closed and can be retried with another `init`.
pub fn init(info: ProjectInfo) -> Result<ShutdownGuard, Error> {
    global().open(info)?;
    Ok(ShutdownGuard { _priv: () })
}

/// Closes the process-wide logger when dropped.
#[must_use = "dropping the guard closes the global log file"]
#[derive(Debug)]
pub struct ShutdownGuard {
    _priv: (),
}

impl Drop for ShutdownGuard {
    fn drop(&mut self) {
        global().close();
    }
}
