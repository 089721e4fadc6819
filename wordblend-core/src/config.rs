//! Engine and filter configuration

use crate::error::{CoreError, Result};

/// Configuration for the blend engine
#[derive(Debug, Clone)]
pub struct BlendConfig {
    /// Minimum overlap length, in characters (>= 1)
    pub min_depth: usize,
    /// Minimum non-overlapping characters at the start of the first word
    /// and the end of the second word
    pub min_free: usize,
    /// Maximum number of blends to emit (0 = unbounded)
    pub max_blends: usize,
    /// Uppercase the overlapping characters in the output
    /// (ex., "reVENGEance")
    pub uppercase_overlap: bool,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            min_depth: 2,
            min_free: 1,
            max_blends: 0,
            uppercase_overlap: false,
        }
    }
}

impl BlendConfig {
    /// Create a builder
    pub fn builder() -> BlendConfigBuilder {
        BlendConfigBuilder::default()
    }
}

/// Builder for [`BlendConfig`]
#[derive(Debug, Default)]
pub struct BlendConfigBuilder {
    config: BlendConfig,
}

impl BlendConfigBuilder {
    /// Set the minimum overlap depth
    pub fn min_depth(mut self, depth: usize) -> Self {
        self.config.min_depth = depth;
        self
    }

    /// Set the minimum number of free (non-overlapping) characters
    pub fn min_free(mut self, free: usize) -> Self {
        self.config.min_free = free;
        self
    }

    /// Set the blend budget (0 = unbounded)
    pub fn max_blends(mut self, max: usize) -> Self {
        self.config.max_blends = max;
        self
    }

    /// Uppercase the overlap in the output
    pub fn uppercase_overlap(mut self, enable: bool) -> Self {
        self.config.uppercase_overlap = enable;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<BlendConfig> {
        if self.config.min_depth < 1 {
            return Err(CoreError::InvalidConfig(
                "min_depth must be at least 1".to_string(),
            ));
        }
        Ok(self.config)
    }
}

/// Word filter policy applied when turning a word set into a scan sequence
#[derive(Debug, Clone)]
pub struct FilterOptions {
    /// Minimum source word length, in characters
    pub min_length: usize,
    /// Maximum source word length, in characters (0 = unlimited)
    pub max_length: usize,
    /// Also include capitalized words (default: lowercase-only)
    pub include_capitalized: bool,
    /// Also include multi-word phrases (default: single tokens only)
    pub include_phrases: bool,
    /// Shuffle the sequence instead of sorting lexicographically
    pub shuffle: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 0,
            include_capitalized: false,
            include_phrases: false,
            shuffle: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = BlendConfig::default();
        assert_eq!(config.min_depth, 2);
        assert_eq!(config.min_free, 1);
        assert_eq!(config.max_blends, 0);
        assert!(!config.uppercase_overlap);
    }

    #[test]
    fn builder_sets_all_fields() {
        let config = BlendConfig::builder()
            .min_depth(3)
            .min_free(2)
            .max_blends(10)
            .uppercase_overlap(true)
            .build()
            .unwrap();
        assert_eq!(config.min_depth, 3);
        assert_eq!(config.min_free, 2);
        assert_eq!(config.max_blends, 10);
        assert!(config.uppercase_overlap);
    }

    #[test]
    fn zero_min_depth_is_rejected() {
        let result = BlendConfig::builder().min_depth(0).build();
        assert!(matches!(result, Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn zero_min_free_is_allowed() {
        let config = BlendConfig::builder().min_free(0).build().unwrap();
        assert_eq!(config.min_free, 0);
    }
}
