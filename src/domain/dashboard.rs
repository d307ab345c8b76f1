// Dashboard domain model
use super::chart::ChartSpec;

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub title: String,
    pub charts: Vec<ChartSpec>,
}

impl Dashboard {
    pub fn new(title: String, charts: Vec<ChartSpec>) -> Self {
        Self { title, charts }
    }
}
