use std::rc::Rc;

use dioxus::prelude::*;
use dojo_core::games::PhaseMachine;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::spawn_machine;
use tokio::sync::mpsc;

use crate::context::AppContext;

/// A phase machine running on its own task, mirrored into a signal.
pub struct Machine<M>
where
    M: PhaseMachine + 'static,
    M::Event: 'static,
{
    state: Signal<M>,
    events: Signal<mpsc::Sender<M::Event>>,
}

impl<M> Clone for Machine<M>
where
    M: PhaseMachine + 'static,
    M::Event: 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Machine<M>
where
    M: PhaseMachine + 'static,
    M::Event: 'static,
{
}

impl<M> Machine<M>
where
    M: PhaseMachine + Clone + 'static,
    M::Event: 'static,
{
    /// Latest state; subscribes the calling component.
    #[must_use]
    pub fn state(&self) -> M {
        self.state.read().clone()
    }

    pub fn send(&self, event: M::Event) {
        if let Err(err) = self.events.peek().try_send(event) {
            log::warn!("game event dropped: {err}");
        }
    }
}

/// Start `init` on the runner and keep the component in sync with it.
///
/// The runner stops once the component unmounts and its sender is dropped.
pub fn use_machine<M>(init: impl FnOnce(&mut StdRng) -> M) -> Machine<M>
where
    M: PhaseMachine + Clone + Send + Sync + 'static,
    M::Event: Send + 'static,
{
    let ctx = use_context::<AppContext>();
    let handle = use_hook(move || {
        let mut rng = StdRng::from_os_rng();
        let initial = init(&mut rng);
        Rc::new(spawn_machine(initial, rng, ctx.cues()))
    });

    let mut state = use_signal({
        let handle = Rc::clone(&handle);
        move || handle.state()
    });
    let events = use_signal({
        let handle = Rc::clone(&handle);
        move || handle.sender()
    });

    use_future(move || {
        let mut updates = handle.subscribe();
        async move {
            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().clone();
                state.set(next);
            }
        }
    });

    Machine { state, events }
}
