use std::{
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

mod config_io_tests;
mod config_validator_tests;

static DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Creates a fresh directory under the system temp dir.
fn unique_temp_dir(prefix: &str) -> PathBuf {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let seq = DIR_SEQ.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!("atok-convert-tests-{prefix}-{ts}-{seq}"));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
