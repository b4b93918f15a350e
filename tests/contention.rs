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

//! Mutual exclusion under contention: fragments of one chain never interleave
//! with another chain's, no matter how many threads hammer the logger.

use std::fs;
use std::thread;

use chainlog::Logger;
use chainlog::ProjectInfo;

const THREADS: usize = 8;
const CHAINS_PER_THREAD: usize = 50;

#[test]
fn chains_never_interleave() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contention.log");

    let logger = Logger::new();
    logger
        .open(ProjectInfo::new("contention").log_path(&path))
        .unwrap();

    thread::scope(|scope| {
        for tid in 0..THREADS {
            let logger = &logger;
            scope.spawn(move || {
                for seq in 0..CHAINS_PER_THREAD {
                    // Three separate fragment writes per chain; only the lock
                    // keeps them together in the file.
                    logger
                        .lock()
                        .log(format_args!("t{tid}.s{seq}.a "))
                        .log(format_args!("t{tid}.s{seq}.b "))
                        .log(format_args!("t{tid}.s{seq}.c"))
                        .eol()
                        .unlock();
                }
            });
        }
    });

    logger.close();

    let contents = fs::read_to_string(&path).unwrap();
    let event_lines: Vec<&str> = contents
        .lines()
        .filter(|line| line.starts_with('t'))
        .collect();
    assert_eq!(event_lines.len(), THREADS * CHAINS_PER_THREAD);

    let mut last_seq = vec![None::<usize>; THREADS];
    for line in event_lines {
        let fragments: Vec<&str> = line.split(' ').collect();
        assert_eq!(fragments.len(), 3, "unexpected line: {line:?}");

        // All three fragments must come from the same chain.
        let stem = fragments[0].strip_suffix(".a").expect(line);
        assert_eq!(fragments[1], format!("{stem}.b"));
        assert_eq!(fragments[2], format!("{stem}.c"));

        // Per-thread sequence numbers appear in issue order, since each
        // thread only starts its next chain after the previous unlock.
        let (tid, seq) = stem[1..].split_once(".s").expect(line);
        let tid: usize = tid.parse().unwrap();
        let seq: usize = seq.parse().unwrap();
        match last_seq[tid] {
            None => assert_eq!(seq, 0),
            Some(last) => assert_eq!(seq, last + 1),
        }
        last_seq[tid] = Some(seq);
    }

    for last in last_seq {
        assert_eq!(last, Some(CHAINS_PER_THREAD - 1));
    }
}
