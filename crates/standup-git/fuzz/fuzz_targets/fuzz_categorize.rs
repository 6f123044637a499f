#![no_main]

use chrono::Local;
use libfuzzer_sys::fuzz_target;
use standup_git::{CommitRecord, categorize, group, render};

fuzz_target!(|data: &[u8]| {
    let message = String::from_utf8_lossy(data);
    let _ = categorize(&message);

    let commit = CommitRecord::new("0".repeat(40), &message, "fuzz", "fuzz@example.com", Local::now());
    let text = render(&group(vec![commit]));
    assert!(text.is_empty() || text.starts_with('\n'));
});
