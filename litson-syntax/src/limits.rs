//! Security limits for parsing untrusted input

/// Limits that keep a hostile or malformed literal from exhausting the
/// stack or memory.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum container nesting depth (default: 128)
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}
