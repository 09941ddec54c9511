use crate::input::{RawInputCollector, RawInputEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Spawn a blocking thread that collects terminal input and forwards raw events onto a channel.
///
/// The thread exits when `shutdown` is set, when the receiver is dropped, or on a
/// terminal error.
pub fn spawn_input_thread(
    tx: UnboundedSender<RawInputEvent>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let mut collector = RawInputCollector::with_timeout(poll_interval);
        while !shutdown.load(Ordering::SeqCst) {
            match collector.poll_event() {
                Ok(Some(event)) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Ok(None) => {
                    // No input this tick; continue polling.
                    continue;
                }
                Err(err) => {
                    log::error!("Input thread error: {}", err);
                    break;
                }
            }
        }
    })
}
