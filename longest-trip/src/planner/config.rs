//! Search configuration for the longest-trip planner.

/// Configuration parameters for the longest-trip search.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Allow a cycle to close over the same connection used to leave the
    /// start, so `0 -> 1 -> 0` counts as a trip of twice the length.
    /// When false, returning to the start needs a different connection.
    /// `true` is the plain rule: any connection back to the start closes a
    /// cycle once the trip has taken at least one step.
    pub allow_retrace: bool,

    /// Sort each station's neighbours by id before searching.
    /// Makes the reported trip independent of input order when several
    /// trips tie for longest.
    pub sort_neighbours: bool,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(allow_retrace: bool, sort_neighbours: bool) -> Self {
        Self {
            allow_retrace,
            sort_neighbours,
        }
    }

    /// Returns this configuration with `allow_retrace` set.
    pub fn with_retrace(mut self, allow: bool) -> Self {
        self.allow_retrace = allow;
        self
    }

    /// Returns this configuration with `sort_neighbours` set.
    pub fn with_sorted_neighbours(mut self, sort: bool) -> Self {
        self.sort_neighbours = sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert!(!config.allow_retrace);
        assert!(!config.sort_neighbours);
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(true, true);

        assert!(config.allow_retrace);
        assert!(config.sort_neighbours);
    }

    #[test]
    fn builder_methods() {
        let config = SearchConfig::default()
            .with_retrace(true)
            .with_sorted_neighbours(false);

        assert!(config.allow_retrace);
        assert!(!config.sort_neighbours);
    }
}
