//! Best-score tracking
//!
//! A single scalar persisted to LocalStorage under the key the original page
//! used, stored as a plain integer string. Persistence is best-effort: a
//! failed write never disturbs the in-memory record.

/// LocalStorage key (used only in wasm32)
#[allow(dead_code)]
const STORAGE_KEY: &str = "flappyHighScore";

/// Highest score achieved across all runs
#[derive(Debug, Clone, Copy, Default)]
pub struct BestScore {
    value: u32,
}

impl BestScore {
    pub fn new(value: u32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Fold a finished run into the record. Updates and persists the best
    /// only when the run beat it, and returns the (possibly updated) best
    /// for the presentation layer.
    pub fn finalize(&mut self, run_score: u32) -> u32 {
        if run_score > self.value {
            self.value = run_score;
            log::info!("New best score: {}", self.value);
            self.persist();
        }
        self.value
    }

    /// Load the persisted best (WASM only); 0 when absent or unparsable
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|s| s.get_item(STORAGE_KEY).ok())
            .flatten()
            .and_then(|v| v.trim().parse::<u32>().ok());

        match stored {
            Some(value) => {
                log::info!("Loaded best score: {}", value);
                Self { value }
            }
            None => Self::default(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn persist(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if storage.set_item(STORAGE_KEY, &self.value.to_string()).is_err() {
                log::warn!("Failed to persist best score");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn persist(&self) {
        // No-op for native
    }
}
