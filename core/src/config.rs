/// Configuration for the collection pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Releases requested per page while walking an artist's browse
    pub page_size: u32,
    /// Keep (source, target) pairs collaborating at least this many times
    pub min_count: u32,
}

impl PipelineConfig {
    pub fn new(page_size: u32, min_count: u32) -> Self {
        Self {
            page_size,
            min_count,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            page_size: 100,
            min_count: 2,
        }
    }
}
