use crate::formatter::DEFAULT_PATTERN;

pub(super) fn default_class() -> String {
    "timestamp".to_string()
}

pub(super) fn default_zone() -> String {
    "local".to_string()
}

pub(super) fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}
