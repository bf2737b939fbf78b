//! Change events pushed from the controller to a UI loop over a bounded queue.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use crate::view::{SelectionModel, ViewAdapter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    DataChanged { row_count: usize },
    SelectionChanged { rows: Vec<usize> },
}

impl TableEvent {
    fn name(&self) -> &'static str {
        match self {
            TableEvent::DataChanged { .. } => "data_changed",
            TableEvent::SelectionChanged { .. } => "selection_changed",
        }
    }
}

/// View adapter that owns the selection and forwards every change to a receiver.
///
/// Delivery is best effort: a full queue or a dropped receiver is logged and the
/// controller operation still completes.
pub struct ChannelView {
    selection: SelectionModel,
    row_count: usize,
    events: Sender<TableEvent>,
}

impl ChannelView {
    pub fn new(events: Sender<TableEvent>) -> Self {
        Self {
            selection: SelectionModel::default(),
            row_count: 0,
            events,
        }
    }

    pub fn with_capacity(capacity: usize) -> (Self, Receiver<TableEvent>) {
        let (tx, rx) = bounded(capacity);
        (Self::new(tx), rx)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    fn publish(&self, event: TableEvent) {
        let event_name = event.name();
        match self.events.try_send(event) {
            Ok(()) => tracing::trace!(event = event_name, "queued table event"),
            Err(TrySendError::Full(_)) => {
                tracing::warn!(event = event_name, "table event queue is full; dropping event");
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::debug!(event = event_name, "table event receiver disconnected");
            }
        }
    }

    fn publish_selection(&self) {
        self.publish(TableEvent::SelectionChanged {
            rows: self.selection.rows(),
        });
    }
}

impl ViewAdapter for ChannelView {
    fn notify_data_changed(&mut self, row_count: usize) {
        self.row_count = row_count;
        let dropped = self.selection.retain_below(row_count);
        self.publish(TableEvent::DataChanged { row_count });
        if dropped {
            self.publish_selection();
        }
    }

    fn selected_indices(&self) -> Vec<usize> {
        self.selection.rows()
    }

    fn set_selection(&mut self, row: usize) {
        if row >= self.row_count {
            tracing::warn!(row, row_count = self.row_count, "ignoring out-of-range selection");
            return;
        }
        self.selection.select_only(row);
        self.publish_selection();
    }

    fn set_selection_range(&mut self, rows: &[usize]) {
        let valid: Vec<usize> = rows
            .iter()
            .copied()
            .filter(|row| *row < self.row_count)
            .collect();
        self.selection.select_rows(&valid);
        self.publish_selection();
    }

    fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.selection.clear();
        self.publish_selection();
    }

    fn selected_index(&self) -> Option<usize> {
        self.selection.lead()
    }

    fn selected_count(&self) -> usize {
        self.selection.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_change_that_drops_selection_emits_both_events() {
        let (mut view, rx) = ChannelView::with_capacity(8);
        view.notify_data_changed(3);
        view.set_selection_range(&[0, 2]);
        view.notify_data_changed(2);

        let events: Vec<TableEvent> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                TableEvent::DataChanged { row_count: 3 },
                TableEvent::SelectionChanged { rows: vec![0, 2] },
                TableEvent::DataChanged { row_count: 2 },
                TableEvent::SelectionChanged { rows: vec![0] },
            ]
        );
    }

    #[test]
    fn full_queue_does_not_block_or_panic() {
        let (mut view, rx) = ChannelView::with_capacity(1);
        view.notify_data_changed(4);
        view.set_selection(1);
        view.set_selection(2);
        assert_eq!(view.selected_indices(), vec![2]);
        assert_eq!(rx.try_iter().count(), 1);
    }

    #[test]
    fn dropped_receiver_is_tolerated() {
        let (mut view, rx) = ChannelView::with_capacity(4);
        drop(rx);
        view.notify_data_changed(2);
        view.set_selection(0);
        assert_eq!(view.selected_index(), Some(0));
    }
}
