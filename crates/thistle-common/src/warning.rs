//! Builder warnings with colored terminal output.
//!
//! Provides deduplication so a selector built in a loop does not repeat the
//! same warning. Used by the selector crate to report input that is accepted
//! verbatim but is probably a mistake (a repeated class, for instance).

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about suspicious input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Selector", "class 'active' repeated; kept verbatim");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[Thistle {component}] ⚠ {message}").yellow());
    }
}

/// Whether `warn_once` has already reported this exact message.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call between unrelated builds)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
