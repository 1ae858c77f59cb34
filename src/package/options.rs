//! Package assembly options.

use crate::parts::DocumentProperties;

/// Deflate level used when none is configured.
pub const DEFAULT_COMPRESSION_LEVEL: i64 = 6;

/// Lowest Deflate level accepted by the archive writer.
pub const MIN_COMPRESSION_LEVEL: i64 = 1;

/// Highest Deflate level.
pub const MAX_COMPRESSION_LEVEL: i64 = 9;

/// Options for assembling a deck.
#[derive(Debug, Clone)]
pub struct PackageOptions {
    /// Deflate level 1-9 (None = zip library default)
    pub compression_level: Option<i64>,

    /// Read headers and compute placements on the rayon pool
    /// (only with the `parallel` feature)
    pub parallel: bool,

    /// Emit `docProps/core.xml` and `docProps/app.xml`
    pub properties: Option<DocumentProperties>,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            compression_level: Some(DEFAULT_COMPRESSION_LEVEL),
            parallel: true,
            properties: None,
        }
    }
}

impl PackageOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Deflate level, clamped to 1-9.
    pub fn with_compression_level(mut self, level: i64) -> Self {
        self.compression_level = Some(level.clamp(MIN_COMPRESSION_LEVEL, MAX_COMPRESSION_LEVEL));
        self
    }

    /// Use the zip library's default Deflate level.
    pub fn with_default_compression(mut self) -> Self {
        self.compression_level = None;
        self
    }

    /// Enable or disable parallel geometry.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Attach document properties.
    pub fn with_properties(mut self, properties: DocumentProperties) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Set the deck title, creating document properties if needed.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let props = self.properties.take().unwrap_or_default();
        self.properties = Some(props.with_title(title));
        self
    }

    /// Set the deck author, creating document properties if needed.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        let props = self.properties.take().unwrap_or_default();
        self.properties = Some(props.with_creator(creator));
        self
    }
}
