/// Immutable grazer parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PatrolConfig {
    /// A light closer than this counts as reached.
    pub threshold: f64,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self { threshold: 30.0 }
    }
}
