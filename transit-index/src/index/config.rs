//! Configuration for the connectivity index computation.

/// Toggles for the two shortcuts the computation may take.
///
/// Neither shortcut changes the result; disabling them forces the full
/// per-line sweep, which is useful for checking that they are sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Answer immediately when some station sits on every line.
    /// The line graph is then complete, so no sweep is needed.
    pub hub_shortcut: bool,

    /// Stop sweeping once a line's eccentricity reaches `num_lines - 1`,
    /// the largest value any eccentricity can take.
    pub early_exit: bool,
}

impl IndexConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(hub_shortcut: bool, early_exit: bool) -> Self {
        Self {
            hub_shortcut,
            early_exit,
        }
    }

    /// A configuration that always performs every sweep.
    pub fn exhaustive() -> Self {
        Self::new(false, false)
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            hub_shortcut: true,
            early_exit: true,
        }
    }
}
