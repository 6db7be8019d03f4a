//! Integration tests for the active-sink registry.
//!
//! The registry lives in process-global state, so every lifecycle
//! transition is exercised inside this single test: nothing installed at
//! startup, first installation wins, re-installation is rejected without
//! replacing the active instance.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use compose::{StatusSink, active_sink, install_sink};

#[derive(Default)]
struct CountingSink {
    calls: AtomicUsize,
}

impl StatusSink for CountingSink {
    fn add_object(&self, _message: Option<&str>, _object: &str) -> io::Result<()> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn write_initial(&self, _message: Option<&str>, _object: &str) -> io::Result<()> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn write(
        &self,
        _message: Option<&str>,
        _object: &str,
        _status: &str,
        _color: &dyn Fn(&str) -> String,
    ) -> io::Result<()> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

#[test]
fn installation_is_init_once_for_the_process() {
    assert!(active_sink().is_none(), "no sink before installation");

    let first = Arc::new(CountingSink::default());
    install_sink(first.clone()).expect("first installation succeeds");

    let looked_up = active_sink().expect("sink is installed");
    looked_up
        .write_initial(Some("Creating"), "web_1")
        .expect("write through the registry");
    assert_eq!(first.calls.load(Ordering::Relaxed), 1);

    let second = Arc::new(CountingSink::default());
    install_sink(second.clone()).expect_err("re-installation is rejected");

    // The original instance stays active.
    let looked_up = active_sink().expect("sink is still installed");
    looked_up
        .add_object(Some("Starting"), "db_1")
        .expect("write through the registry");
    assert_eq!(first.calls.load(Ordering::Relaxed), 2);
    assert_eq!(second.calls.load(Ordering::Relaxed), 0);
}
