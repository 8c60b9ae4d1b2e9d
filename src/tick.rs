use std::time::Duration;

use futures::channel::mpsc;

use crate::app::Message;

/// Clock-hand heartbeat. A sleeper thread emits `Message::Tick` every `ms`
/// milliseconds until the receiving subscription is dropped.
pub(crate) fn tick_stream(ms: &u64) -> mpsc::UnboundedReceiver<Message> {
    let ms = *ms;
    let (tx, rx) = mpsc::unbounded();
    std::thread::spawn(move || {
        tracing::debug!(interval_ms = ms, "clock ticker started");
        loop {
            std::thread::sleep(Duration::from_millis(ms));
            if tx.unbounded_send(Message::Tick).is_err() {
                tracing::debug!("clock ticker stopped");
                break;
            }
        }
    });
    rx
}
