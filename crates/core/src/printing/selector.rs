//! View kind to strategy dispatch

use calprint_domain::{CalPrintError, Result, ViewKind};

use super::strategy::PartitioningStrategy;

/// Holds the strategies a deployment offers and picks one per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategySelector {
    strategies: Vec<PartitioningStrategy>,
}

impl StrategySelector {
    /// Selector offering every view.
    pub fn new() -> Self {
        Self { strategies: PartitioningStrategy::ALL.to_vec() }
    }

    /// Selector offering only `views`. Duplicates are ignored.
    pub fn for_views(views: &[ViewKind]) -> Self {
        let mut strategies = Vec::with_capacity(views.len());
        for &view in views {
            let strategy = PartitioningStrategy::for_view(view);
            if !strategies.contains(&strategy) {
                strategies.push(strategy);
            }
        }
        Self { strategies }
    }

    /// First strategy whose `supports` accepts `view`.
    ///
    /// # Errors
    ///
    /// [`CalPrintError::UnsupportedViewKind`] when no strategy renders the
    /// view.
    pub fn select(&self, view: ViewKind) -> Result<PartitioningStrategy> {
        self.strategies
            .iter()
            .copied()
            .find(|strategy| strategy.supports(view))
            .ok_or_else(|| CalPrintError::UnsupportedViewKind(view.to_string()))
    }

    /// Like [`select`](Self::select) for a textual view identifier.
    pub fn select_by_name(&self, name: &str) -> Result<PartitioningStrategy> {
        let view = name
            .parse::<ViewKind>()
            .map_err(|_| CalPrintError::UnsupportedViewKind(name.trim().to_string()))?;
        self.select(view)
    }

    pub fn supported_views(&self) -> Vec<ViewKind> {
        self.strategies.iter().map(|strategy| strategy.view_kind()).collect()
    }
}

impl Default for StrategySelector {
    fn default() -> Self {
        Self::new()
    }
}
