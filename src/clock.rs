use crate::config::Timings;
use crate::event::Msg;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Feeds timer messages into the event loop's queue. Nothing here touches
/// pet or session state; every firing is just another queued `Msg`.
#[derive(Clone)]
pub struct Clock {
    tx: mpsc::Sender<Msg>,
}

impl Clock {
    pub fn new(tx: mpsc::Sender<Msg>) -> Self {
        Self { tx }
    }

    /// Starts the decay and animation tickers. Both run until the loop
    /// drops its receiver.
    pub fn start(&self, timings: &Timings) {
        spawn_ticker(self.tx.clone(), timings.decay(), Msg::DecayTick);
        spawn_ticker(self.tx.clone(), timings.anim(), Msg::AnimTick);
    }

    /// Delivers `msg` once, `after` from now.
    pub fn schedule(&self, after: Duration, msg: Msg) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            tx.send(msg).await.ok();
        });
    }
}

fn spawn_ticker(tx: mpsc::Sender<Msg>, every: Duration, msg: Msg) {
    tokio::spawn(async move {
        let mut t = tokio::time::interval(every);
        t.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // interval() yields immediately; the first real tick is one period out
        t.tick().await;
        loop {
            t.tick().await;
            if tx.send(msg.clone()).await.is_err() {
                break;
            }
        }
    });
}
