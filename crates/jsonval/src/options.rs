/// Rendering and parsing knobs.
#[derive(Debug, Clone)]
pub struct Options {
    /// Escape `/` as `\/` when rendering strings (default: true)
    pub escape_solidus: bool,
    /// Maximum array/object nesting accepted by the parser (default: 128)
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            escape_solidus: true,
            max_depth: 128,
        }
    }
}
