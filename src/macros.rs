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

//! Severity shorthand macros over the process-wide logger.
//!
//! Each shorthand performs one complete atomic event:
//! lock, time, severity, call site, payload, end of line, unlock. All of the
//! severity-tagged shorthands compile to nothing when `debug_assertions` are
//! disabled; [`logn!`] and [`log_chain!`] stay live in every build.
//!
//! [`logn!`]: crate::logn
//! [`log_chain!`]: crate::log_chain

/// Expands to the name of the enclosing function.
///
/// Resolved at the call site through `type_name` of a local item; the logging
/// core itself never introspects its callers.
#[doc(hidden)]
#[macro_export]
macro_rules! __function {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_event {
    ($severity:expr, $($arg:tt)+) => {
        $crate::global()
            .lock()
            .time()
            .severity($severity)
            .callsite($crate::__function!(), line!())
            .log(format_args!($($arg)+))
            .eol()
            .unlock()
    };
}

/// Log one event with no severity label through the process-wide logger.
///
/// Unlike the severity shorthands, this one is never compiled out.
#[macro_export]
macro_rules! logn {
    ($($arg:tt)+) => {
        $crate::__log_event!($crate::Severity::None, $($arg)+)
    };
}

/// Log an `[INFO]` event.
///
/// Performs a complete lock/time/severity/call-site/payload/eol/unlock chain
/// on the process-wide logger, as do all the severity shorthands below.
#[macro_export]
macro_rules! logi {
    ($($arg:tt)+) => {
        if cfg!(debug_assertions) {
            $crate::__log_event!($crate::Severity::Info, $($arg)+);
        }
    };
}

/// Log a `[DEBUG]` event.
#[macro_export]
macro_rules! logd {
    ($($arg:tt)+) => {
        if cfg!(debug_assertions) {
            $crate::__log_event!($crate::Severity::Debug, $($arg)+);
        }
    };
}

/// Log a `[WARNING]` event.
#[macro_export]
macro_rules! logw {
    ($($arg:tt)+) => {
        if cfg!(debug_assertions) {
            $crate::__log_event!($crate::Severity::Warning, $($arg)+);
        }
    };
}

/// Log a `[FAILURE]` event.
#[macro_export]
macro_rules! logf {
    ($($arg:tt)+) => {
        if cfg!(debug_assertions) {
            $crate::__log_event!($crate::Severity::Failed, $($arg)+);
        }
    };
}

/// Log an `[ERROR]` event.
#[macro_export]
macro_rules! loge {
    ($($arg:tt)+) => {
        if cfg!(debug_assertions) {
            $crate::__log_event!($crate::Severity::Error, $($arg)+);
        }
    };
}

/// Log a `[SIGNAL]` event.
#[macro_export]
macro_rules! logs {
    ($($arg:tt)+) => {
        if cfg!(debug_assertions) {
            $crate::__log_event!($crate::Severity::Signal, $($arg)+);
        }
    };
}

/// Log a `[THROW]` event.
#[macro_export]
macro_rules! logx {
    ($($arg:tt)+) => {
        if cfg!(debug_assertions) {
            $crate::__log_event!($crate::Severity::Exception, $($arg)+);
        }
    };
}

/// Log a `[CATCH]` event.
#[macro_export]
macro_rules! logc {
    ($($arg:tt)+) => {
        if cfg!(debug_assertions) {
            $crate::__log_event!($crate::Severity::Catch, $($arg)+);
        }
    };
}

/// Log a `[FATAL]` event.
///
/// `Fatal` is a label, not a control-flow action; this macro returns like any
/// other.
#[macro_export]
macro_rules! loga {
    ($($arg:tt)+) => {
        if cfg!(debug_assertions) {
            $crate::__log_event!($crate::Severity::Fatal, $($arg)+);
        }
    };
}

/// Log an `[ERROR]` event whose payload is a [`Value`] list joined by
/// `delimiter`.
///
/// Compiles to nothing when `debug_assertions` are disabled.
///
/// [`Value`]: crate::Value
#[macro_export]
macro_rules! loge_list {
    ($values:expr, $delimiter:expr) => {
        if cfg!(debug_assertions) {
            $crate::global()
                .lock()
                .time()
                .severity($crate::Severity::Error)
                .callsite($crate::__function!(), line!())
                .log_list($values, $delimiter)
                .eol()
                .unlock();
        }
    };
}

/// Begin a severity-tagged event and leave the chain open.
///
/// Expands to lock/time/severity/call-site and hands back the live
/// [`Chain`]; the caller finishes the line with its own `log`/`eol` calls.
/// The logger stays locked until the returned chain is released (explicitly
/// or by dropping it), so keep the completion close by.
///
/// ```no_run
/// use chainlog::Severity;
///
/// chainlog::log_chain!(Severity::Debug)
///     .log(format_args!("{} retries left", 3))
///     .eol()
///     .unlock();
/// ```
///
/// [`Chain`]: crate::Chain
#[macro_export]
macro_rules! log_chain {
    ($severity:expr) => {
        $crate::global()
            .lock()
            .time()
            .severity($severity)
            .callsite($crate::__function!(), line!())
    };
}
