//! Fire-and-forget task spawning for background API calls.
//!
//! Native builds spawn onto the ambient Tokio runtime, so callers on the UI thread must
//! enter a runtime first (see `roster-ui`'s `main`). WASM builds run the future on the
//! JS event loop.

use std::future::Future;

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    drop(tokio::spawn(future));
}

#[cfg(target_arch = "wasm32")]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
