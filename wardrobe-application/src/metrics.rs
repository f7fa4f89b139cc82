use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    apply_requests: AtomicU64,
    items_applied: AtomicU64,
    item_errors: AtomicU64,
    captures: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub apply_requests: u64,
    pub items_applied: u64,
    pub item_errors: u64,
    pub captures: u64,
}

impl Metrics {
    pub fn record_apply(&self, applied: usize, errors: usize) {
        self.apply_requests.fetch_add(1, Ordering::Relaxed);
        self.items_applied
            .fetch_add(applied as u64, Ordering::Relaxed);
        self.item_errors.fetch_add(errors as u64, Ordering::Relaxed);
    }

    pub fn record_capture(&self) {
        self.captures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            apply_requests: self.apply_requests.load(Ordering::Relaxed),
            items_applied: self.items_applied.load(Ordering::Relaxed),
            item_errors: self.item_errors.load(Ordering::Relaxed),
            captures: self.captures.load(Ordering::Relaxed),
        }
    }

    pub fn render_prometheus(&self) -> String {
        let snapshot = self.snapshot();

        format!(
            "# TYPE wardrobe_apply_requests_total counter\n\
wardrobe_apply_requests_total {}\n\
# TYPE wardrobe_items_applied_total counter\n\
wardrobe_items_applied_total {}\n\
# TYPE wardrobe_item_errors_total counter\n\
wardrobe_item_errors_total {}\n\
# TYPE wardrobe_captures_total counter\n\
wardrobe_captures_total {}\n",
            snapshot.apply_requests, snapshot.items_applied, snapshot.item_errors, snapshot.captures
        )
    }
}
