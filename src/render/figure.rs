use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

static NEXT_FIGURE_ID: AtomicU64 = AtomicU64::new(1);

fn next_figure_id() -> u64 {
    NEXT_FIGURE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Tracks how many chart figures are currently open.
///
/// Every [`FigureHandle`] holds a slot until it is closed or dropped, so a
/// caller that keeps rendering without releasing charts shows up as a
/// growing [`FigureRegistry::open_count`].
#[derive(Debug, Clone, Default)]
pub struct FigureRegistry {
    open: Arc<AtomicUsize>,
}

impl FigureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) -> FigureHandle {
        let count = self.open.fetch_add(1, Ordering::AcqRel) + 1;
        let id = next_figure_id();
        tracing::debug!(figure = id, open = count, "figure opened");
        FigureHandle {
            id,
            open: Arc::clone(&self.open),
        }
    }

    pub fn open_count(&self) -> usize {
        self.open.load(Ordering::Acquire)
    }
}

/// Scoped ownership of one open figure. Releases its slot on drop.
#[derive(Debug)]
pub struct FigureHandle {
    id: u64,
    open: Arc<AtomicUsize>,
}

impl FigureHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Release the figure now rather than at end of scope.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for FigureHandle {
    fn drop(&mut self) {
        let remaining = self.open.fetch_sub(1, Ordering::AcqRel) - 1;
        tracing::debug!(figure = self.id, open = remaining, "figure closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_release_on_drop_and_close() {
        let registry = FigureRegistry::new();
        let first = registry.open();
        let second = registry.open();
        assert_eq!(registry.open_count(), 2);
        assert_ne!(first.id(), second.id());

        drop(first);
        assert_eq!(registry.open_count(), 1);

        second.close();
        assert_eq!(registry.open_count(), 0);
    }

    #[test]
    fn clones_share_the_same_count() {
        let registry = FigureRegistry::new();
        let shared = registry.clone();
        let _handle = shared.open();
        assert_eq!(registry.open_count(), 1);
    }
}
