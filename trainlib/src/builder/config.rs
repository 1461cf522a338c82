//! Graph builder configuration.

/// Name given to a line record without one.
pub const DEFAULT_LINE_NAME: &str = "Unnamed line";

/// Name given to an object-form station record without one.
pub const DEFAULT_STATION_NAME: &str = "Unnamed station";

/// What to do when two stations on one line share a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Log a warning; the later station shadows the earlier one for
    /// name lookups during construction.
    #[default]
    Shadow,
    /// Fail the line's construction.
    Reject,
}

/// Configuration parameters for building lines from records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Name used for line records that omit one.
    pub default_line_name: String,

    /// Name used for station records that omit one.
    pub default_station_name: String,

    /// Handling of repeated station names within a line.
    pub duplicate_policy: DuplicatePolicy,
}

impl BuilderConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        default_line_name: impl Into<String>,
        default_station_name: impl Into<String>,
        duplicate_policy: DuplicatePolicy,
    ) -> Self {
        Self {
            default_line_name: default_line_name.into(),
            default_station_name: default_station_name.into(),
            duplicate_policy,
        }
    }

    /// Set the duplicate station name policy.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            default_line_name: DEFAULT_LINE_NAME.to_string(),
            default_station_name: DEFAULT_STATION_NAME.to_string(),
            duplicate_policy: DuplicatePolicy::Shadow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = BuilderConfig::default();

        assert_eq!(config.default_line_name, "Unnamed line");
        assert_eq!(config.default_station_name, "Unnamed station");
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Shadow);
    }

    #[test]
    fn custom_config() {
        let config = BuilderConfig::new("Line ?", "Stop ?", DuplicatePolicy::Reject);

        assert_eq!(config.default_line_name, "Line ?");
        assert_eq!(config.default_station_name, "Stop ?");
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
    }

    #[test]
    fn with_duplicate_policy() {
        let config = BuilderConfig::default().with_duplicate_policy(DuplicatePolicy::Reject);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
        assert_eq!(config.default_line_name, DEFAULT_LINE_NAME);
    }
}
