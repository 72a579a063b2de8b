//! Graceful shutdown: persist pane state, then drop every webview.

use super::core::PanegridApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl PanegridApp {
    /// Persist and release every pane, then destroy the surfaces.
    ///
    /// Runs once; later calls are no-ops.
    pub(super) fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.should_exit = true;
        tracing::info!("Initiating graceful shutdown");

        // Panes save before their surfaces go away with the pool.
        if let Some(mut pool) = self.pool.take() {
            pool.shutdown();
        }
        self.fullscreen = None;
        self.empty_state = None;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
