//! Drives a [`PhaseMachine`] on tokio.
//!
//! The runner owns the machine's single pending timer. Each loop waits for
//! either that timer or an external event and applies whichever comes first.
//! An external event leaves a running timer's deadline alone as long as the
//! machine still reports the same pending timer.

use rand::Rng;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use dojo_core::games::{PendingTimer, PhaseMachine};

use crate::cues::AudioCues;
use crate::error::RunnerError;

const EVENT_BUFFER: usize = 32;

/// Run `state` until the event channel closes, then return the final state.
pub async fn run_machine<M, R, C>(
    mut state: M,
    mut rng: R,
    cues: C,
    mut events: mpsc::Receiver<M::Event>,
    publish: watch::Sender<M>,
) -> M
where
    M: PhaseMachine + Clone,
    R: Rng,
    C: AudioCues,
{
    let mut armed: Option<(Instant, PendingTimer<M::Event>)> = None;
    loop {
        armed = match (armed.take(), state.pending_timer()) {
            (Some((deadline, current)), Some(next)) if current == next => Some((deadline, current)),
            (_, Some(next)) => Some((Instant::now() + next.after, next)),
            (_, None) => None,
        };

        // No borrow of `armed` may live across the await.
        let wake = armed
            .as_ref()
            .map(|(deadline, timer)| (*deadline, timer.fire.clone()));
        let (event, fired) = match wake {
            Some((deadline, fire)) => tokio::select! {
                () = tokio::time::sleep_until(deadline) => (fire, true),
                received = events.recv() => match received {
                    Some(event) => (event, false),
                    None => break,
                },
            },
            None => match events.recv().await {
                Some(event) => (event, false),
                None => break,
            },
        };
        if fired {
            armed = None;
        }

        log::debug!("applying {event:?}");
        let step = state.apply(event, &mut rng);
        state = step.state;
        cues.play_all(&step.cues);
        publish.send_replace(state.clone());
    }
    log::debug!("event channel closed, machine stopped");
    state
}

/// Handle to a machine running on a spawned task.
pub struct MachineHandle<M: PhaseMachine> {
    events: mpsc::Sender<M::Event>,
    state: watch::Receiver<M>,
    task: JoinHandle<M>,
}

/// Spawn `initial` on the current tokio runtime.
pub fn spawn_machine<M, R, C>(initial: M, rng: R, cues: C) -> MachineHandle<M>
where
    M: PhaseMachine + Clone + Send + Sync + 'static,
    M::Event: Send,
    R: Rng + Send + 'static,
    C: AudioCues + 'static,
{
    let (events_tx, events_rx) = mpsc::channel(EVENT_BUFFER);
    let (state_tx, state_rx) = watch::channel(initial.clone());
    let task = tokio::spawn(run_machine(initial, rng, cues, events_rx, state_tx));
    MachineHandle {
        events: events_tx,
        state: state_rx,
        task,
    }
}

impl<M> MachineHandle<M>
where
    M: PhaseMachine + Clone,
{
    /// Feed an external event to the machine.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::Stopped` if the machine task has ended.
    pub async fn send(&self, event: M::Event) -> Result<(), RunnerError> {
        self.events
            .send(event)
            .await
            .map_err(|_| RunnerError::Stopped)
    }

    /// Queue an event without waiting for buffer space.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::Stopped` if the machine task has ended or its
    /// buffer is full.
    pub fn try_send(&self, event: M::Event) -> Result<(), RunnerError> {
        self.events.try_send(event).map_err(|_| RunnerError::Stopped)
    }

    /// A sender that keeps the machine alive while held.
    #[must_use]
    pub fn sender(&self) -> mpsc::Sender<M::Event> {
        self.events.clone()
    }

    /// Latest published state.
    #[must_use]
    pub fn state(&self) -> M {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<M> {
        self.state.clone()
    }

    /// Close the event channel and wait for the final state.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::Join` if the machine task panicked.
    pub async fn stop(self) -> Result<M, RunnerError> {
        drop(self.events);
        Ok(self.task.await?)
    }
}
