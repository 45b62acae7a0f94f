//! Loader configuration.

/// Archive index that holds model records.
pub const DEFAULT_MODEL_INDEX: u8 = 7;

/// Settings for a [`ModelLoader`](crate::ModelLoader).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Index to fetch model records from.
    pub index_id: u8,
}

impl LoaderConfig {
    #[must_use]
    pub const fn with_index_id(mut self, index_id: u8) -> Self {
        self.index_id = index_id;
        self
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            index_id: DEFAULT_MODEL_INDEX,
        }
    }
}
