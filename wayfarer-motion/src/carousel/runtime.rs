//! Event loop composing host events and timer firings for one carousel.

use tokio::sync::mpsc;

use super::engine::CarouselEngine;
use super::messages::CarouselEvent;
use super::types::CarouselHost;
use crate::timer::{TimerDriver, TimerFired};

/// Run a carousel until the host unmounts or drops its event sender.
///
/// Host events take priority over timer firings that become ready in the
/// same turn, so a drag that starts as a tick is due always wins. The engine
/// is torn down before it is handed back.
pub async fn run_carousel<H, T>(
    mut engine: CarouselEngine<H, T>,
    mut timer_events: mpsc::UnboundedReceiver<TimerFired>,
    mut host_events: mpsc::Receiver<CarouselEvent>,
) -> CarouselEngine<H, T>
where
    H: CarouselHost,
    T: TimerDriver,
{
    loop {
        tokio::select! {
            biased;

            event = host_events.recv() => match event {
                Some(CarouselEvent::Unmount) | None => break,
                Some(event) => engine.apply(event),
            },
            Some(fired) = timer_events.recv() => {
                engine.handle_timer(fired);
            }
        }
    }

    engine.teardown();
    // Drain firings that raced the teardown; every one of them is stale now.
    while let Ok(fired) = timer_events.try_recv() {
        engine.handle_timer(fired);
    }
    engine
}
