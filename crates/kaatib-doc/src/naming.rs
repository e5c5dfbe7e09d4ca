//! Process-wide naming for untitled documents.

use std::sync::atomic::{AtomicU64, Ordering};

static UNTITLED_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Returns the next auto-generated file name, `Untitle<N>.txt`.
///
/// The counter is process-wide, starts at 1, and only ever increases; it is
/// not reset when documents are dropped. Two documents created in the same
/// process therefore always carry distinct names, even across threads.
pub(crate) fn next_untitled_name() -> String {
    let n = UNTITLED_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("Untitle{n}.txt")
}
