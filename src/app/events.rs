use crossterm::event::{Event, EventStream};
use futures::StreamExt;

use crate::analysis::ComparisonReport;

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    Input(Event),
    RunSucceeded {
        run_id: u64,
        report: Box<ComparisonReport>,
    },
    RunFailed {
        run_id: u64,
        message: String,
    },
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}
