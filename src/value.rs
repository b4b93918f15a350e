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

/// A primitive value logged as part of a heterogeneous list.
///
/// `Value` is a closed union over the primitive types the logger knows how to
/// render. Strings are borrowed, so the backing storage only needs to outlive
/// the logging call that consumes the value.
///
/// Rendering goes through [`fmt::Display`] and dispatches on the active
/// variant only: integers in decimal, floats with Rust's default conversion,
/// booleans as `true`/`false`.
///
/// # Examples
///
/// ```
/// use chainlog::Value;
///
/// assert_eq!(Value::from(42).to_string(), "42");
/// assert_eq!(Value::from(2.5f64).to_string(), "2.5");
/// assert_eq!(Value::from("ok").to_string(), "ok");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    Uint(u64),
    /// A 32-bit float.
    F32(f32),
    /// A 64-bit float.
    F64(f64),
    /// A boolean, rendered as `true`/`false`.
    Bool(bool),
    /// A borrowed string.
    Str(&'a str),
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Uint(u) => write!(f, "{u}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value<'_> {
    fn from(value: u32) -> Self {
        Value::Uint(u64::from(value))
    }
}

impl From<u64> for Value<'_> {
    fn from(value: u64) -> Self {
        Value::Uint(value)
    }
}

impl From<f32> for Value<'_> {
    fn from(value: f32) -> Self {
        Value::F32(value)
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn render_dispatches_on_active_variant() {
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::Uint(7).to_string(), "7");
        assert_eq!(Value::F32(1.5).to_string(), "1.5");
        assert_eq!(Value::F64(-0.25).to_string(), "-0.25");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Str("hello").to_string(), "hello");
    }

    #[test]
    fn render_is_deterministic() {
        let value = Value::from(42u64);
        assert_eq!(value.to_string(), value.to_string());
    }

    #[test]
    fn conversions_pick_the_expected_variant() {
        assert_eq!(Value::from(-3i32), Value::Int(-3));
        assert_eq!(Value::from(3u32), Value::Uint(3));
        assert_eq!(Value::from(false), Value::Bool(false));
        assert_eq!(Value::from("s"), Value::Str("s"));
    }
}
