//! Process-wide logger registry
//!
//! Loggers are keyed by name, created on first use, and live until process
//! exit. Resolving the same name twice yields the identical `Arc`, so two
//! components asking for one name share a single underlying sink.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::logger::Logger;

static REGISTRY: OnceLock<Mutex<HashMap<String, Arc<Logger>>>> = OnceLock::new();

fn registry() -> &'static Mutex<HashMap<String, Arc<Logger>>> {
    REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Resolve (or create) the logger registered under `name`.
pub fn get_or_create(name: &str) -> Arc<Logger> {
    let mut loggers = registry().lock();
    Arc::clone(
        loggers
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Logger::new(name))),
    )
}

/// Look up a logger without creating one.
pub fn get(name: &str) -> Option<Arc<Logger>> {
    registry().lock().get(name).map(Arc::clone)
}
