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

//! The log crate bridge writes through the same global chain protocol.

use std::fs;

#[test]
fn facade_records_become_chain_events() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bridge.log");
    let info = chainlog::ProjectInfo::new("bridge").log_path(&path);

    let guard = chainlog::init(info).unwrap();
    chainlog::bridge::setup();

    log::info!("via facade {}", 1);
    log::warn!("{} retries left", 2);
    log::error!("gone");
    log::trace!("fine grained");

    drop(guard);

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[INFO]"));
    assert!(contents.contains("via facade 1"));
    assert!(contents.contains("[WARNING]"));
    assert!(contents.contains("2 retries left"));
    assert!(contents.contains("[ERROR]"));
    assert!(contents.contains("gone"));
    // trace has no label of its own and lands on the debug label
    assert!(contents.contains("[DEBUG]"));
    assert!(contents.contains("fine grained"));

    // The record's module path stands in for the function name.
    assert!(contents.contains("(bridge:"));
}
