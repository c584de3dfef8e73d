//! Earnings estimator state holder.
//!
//! Every interaction mutates the state, requests its sound cue and notifies
//! the single subscriber with a fresh snapshot. The claim button's warning
//! label reverts on a timer; a newer activation cancels the pending reversion
//! so only the latest one is ever observed.

pub mod state;
pub mod timer;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use crate::audio::{Preset, SoundCue};
pub use state::{ClaimStatus, PanelId, SimulatorState};
pub use timer::{BrowserTimers, TimerQueue};

pub const CLAIM_RESET_MS: u32 = 3000;

type Subscriber = Rc<dyn Fn(&SimulatorState)>;

struct Inner<T: TimerQueue> {
    state: SimulatorState,
    timers: T,
    sounds: Rc<dyn SoundCue>,
    subscriber: Option<Subscriber>,
    claim_generation: u64,
    pending_reversion: Option<T::Handle>,
}

/// Shared handle; clones refer to the same session state.
pub struct Simulator<T: TimerQueue> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: TimerQueue> Clone for Simulator<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: TimerQueue> PartialEq for Simulator<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: TimerQueue + 'static> Simulator<T> {
    pub fn new(timers: T, sounds: Rc<dyn SoundCue>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: SimulatorState::default(),
                timers,
                sounds,
                subscriber: None,
                claim_generation: 0,
                pending_reversion: None,
            })),
        }
    }

    /// Replaces the current subscriber.
    pub fn subscribe(&self, subscriber: impl Fn(&SimulatorState) + 'static) {
        self.inner.borrow_mut().subscriber = Some(Rc::new(subscriber));
    }

    pub fn unsubscribe(&self) {
        self.inner.borrow_mut().subscriber = None;
    }

    pub fn state(&self) -> SimulatorState {
        self.inner.borrow().state.clone()
    }

    pub fn displayed_income(&self) -> u64 {
        self.inner.borrow().state.displayed_income()
    }

    pub fn set_audience_size(&self, value: u32) {
        self.update(Preset::Tick, |inner| inner.state.set_audience_size(value));
    }

    pub fn toggle_tip_mode(&self) {
        self.update(Preset::Confirm, |inner| inner.state.toggle_tip_mode());
    }

    pub fn toggle_expanded_panel(&self, id: PanelId) {
        self.update(Preset::Expand, |inner| inner.state.toggle_expanded_panel(id));
    }

    pub fn activate_claim(&self) {
        let weak = Rc::downgrade(&self.inner);
        self.update(Preset::Reward, move |inner| {
            inner.state.set_claim(ClaimStatus::ActionRequired);
            inner.claim_generation += 1;
            let generation = inner.claim_generation;

            if let Some(previous) = inner.pending_reversion.take() {
                inner.timers.cancel(previous);
            }
            let handle = inner.timers.schedule(
                CLAIM_RESET_MS,
                Box::new(move || revert_claim(&weak, generation)),
            );
            inner.pending_reversion = Some(handle);
            debug!("Claim activated (generation {})", generation);
        });
    }

    fn update(&self, cue: Preset, mutate: impl FnOnce(&mut Inner<T>)) {
        let sounds = {
            let mut inner = self.inner.borrow_mut();
            mutate(&mut *inner);
            inner.sounds.clone()
        };
        sounds.play(cue);
        notify(&self.inner);
    }
}

fn revert_claim<T: TimerQueue>(weak: &Weak<RefCell<Inner<T>>>, generation: u64) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    {
        let mut guard = inner.borrow_mut();
        if guard.claim_generation != generation {
            return;
        }
        // The fired handle stays parked until the next activation cancels it;
        // releasing it here would free this callback while it runs.
        guard.state.set_claim(ClaimStatus::Idle);
    }
    debug!("Claim label reverted (generation {})", generation);
    notify(&inner);
}

fn notify<T: TimerQueue>(inner: &Rc<RefCell<Inner<T>>>) {
    let (subscriber, snapshot) = {
        let guard = inner.borrow();
        (guard.subscriber.clone(), guard.state.clone())
    };
    if let Some(subscriber) = subscriber {
        subscriber(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::engine::MockSoundCue;
    use mockall::predicate::*;
    use std::cell::Cell;
    use super::timer::ManualTimers;

    fn quiet() -> Rc<dyn SoundCue> {
        let mut cue = MockSoundCue::new();
        cue.expect_play().returning(|_| ());
        Rc::new(cue)
    }

    fn expecting(preset: Preset, times: usize) -> Rc<dyn SoundCue> {
        let mut cue = MockSoundCue::new();
        cue.expect_play().with(eq(preset)).times(times).returning(|_| ());
        Rc::new(cue)
    }

    fn record_labels(sim: &Simulator<ManualTimers>) -> Rc<RefCell<Vec<bool>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        sim.subscribe(move |state| sink.borrow_mut().push(state.claim_active()));
        seen
    }

    #[test]
    fn slider_clamps_and_ticks() {
        let sim = Simulator::new(ManualTimers::default(), expecting(Preset::Tick, 3));
        sim.set_audience_size(1200);
        assert_eq!(sim.displayed_income(), 18_000);
        sim.set_audience_size(20);
        assert_eq!(sim.state().audience_size(), 100);
        sim.set_audience_size(100);
        assert_eq!(sim.state().audience_size(), 100);
    }

    #[test]
    fn tip_toggle_confirms_and_inflates_income() {
        let sim = Simulator::new(ManualTimers::default(), expecting(Preset::Confirm, 2));
        sim.toggle_tip_mode();
        assert_eq!(sim.displayed_income(), 10_000);
        sim.toggle_tip_mode();
        assert!(!sim.state().tip_mode_enabled());
        assert_eq!(sim.displayed_income(), 7_500);
    }

    #[test]
    fn panels_follow_accordion_rules() {
        let sim = Simulator::new(ManualTimers::default(), expecting(Preset::Expand, 3));
        sim.toggle_expanded_panel(PanelId(1));
        sim.toggle_expanded_panel(PanelId(2));
        assert_eq!(sim.state().expanded_panel(), Some(PanelId(2)));
        sim.toggle_expanded_panel(PanelId(2));
        assert_eq!(sim.state().expanded_panel(), None);
    }

    #[test]
    fn subscriber_sees_every_mutation() {
        let sim = Simulator::new(ManualTimers::default(), quiet());
        let calls = Rc::new(Cell::new(0));
        let last = Rc::new(RefCell::new(SimulatorState::default()));
        {
            let calls = calls.clone();
            let last = last.clone();
            sim.subscribe(move |state| {
                calls.set(calls.get() + 1);
                *last.borrow_mut() = state.clone();
            });
        }

        sim.set_audience_size(3000);
        sim.toggle_tip_mode();
        sim.toggle_expanded_panel(PanelId(3));

        assert_eq!(calls.get(), 3);
        assert_eq!(last.borrow().displayed_income(), 60_000);
        assert_eq!(*last.borrow(), sim.state());
    }

    #[test]
    fn unsubscribed_view_hears_nothing() {
        let sim = Simulator::new(ManualTimers::default(), quiet());
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            sim.subscribe(move |_| calls.set(calls.get() + 1));
        }
        sim.toggle_tip_mode();
        sim.unsubscribe();
        sim.toggle_tip_mode();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn subscriber_may_read_the_simulator() {
        let sim = Simulator::new(ManualTimers::default(), quiet());
        let echoed = Rc::new(Cell::new(0));
        {
            let reader = sim.clone();
            let echoed = echoed.clone();
            sim.subscribe(move |_| echoed.set(reader.displayed_income()));
        }
        sim.set_audience_size(700);
        assert_eq!(echoed.get(), 10_500);
    }

    #[test]
    fn claim_warns_then_reverts_after_three_seconds() {
        let timers = ManualTimers::default();
        let sim = Simulator::new(timers.clone(), expecting(Preset::Reward, 1));

        sim.activate_claim();
        let state = sim.state();
        assert!(state.claim_active());
        assert_eq!(state.claim_label(), state::WARNING_CLAIM_LABEL);

        timers.advance(2999);
        assert!(sim.state().claim_active());

        timers.advance(1);
        let state = sim.state();
        assert!(!state.claim_active());
        assert_eq!(state.claim_label(), state::DEFAULT_CLAIM_LABEL);
    }

    #[test]
    fn second_claim_supersedes_the_first_reversion() {
        let timers = ManualTimers::default();
        let sim = Simulator::new(timers.clone(), expecting(Preset::Reward, 2));
        let seen = record_labels(&sim);

        sim.activate_claim();
        timers.advance(1000);
        sim.activate_claim();
        assert_eq!(timers.pending(), 1);

        timers.advance(2000);
        assert!(sim.state().claim_active(), "first timer must not reset at t=3000");

        timers.advance(999);
        assert!(sim.state().claim_active());
        assert_eq!(timers.now_ms(), 3999);

        timers.advance(1);
        assert!(!sim.state().claim_active());
        assert_eq!(timers.now_ms(), 4000);

        timers.advance(10_000);
        assert_eq!(*seen.borrow(), vec![true, true, false]);
    }

    #[test]
    fn other_interactions_leave_a_pending_claim_alone() {
        let timers = ManualTimers::default();
        let sim = Simulator::new(timers.clone(), quiet());

        sim.activate_claim();
        timers.advance(500);
        sim.toggle_tip_mode();
        sim.set_audience_size(2500);
        assert!(sim.state().claim_active());

        timers.advance(2500);
        let state = sim.state();
        assert!(!state.claim_active());
        assert!(state.tip_mode_enabled());
        assert_eq!(state.audience_size(), 2500);
    }

    #[test]
    fn dropped_simulator_ignores_its_pending_reversion() {
        let timers = ManualTimers::default();
        let sim = Simulator::new(timers.clone(), quiet());
        let seen = record_labels(&sim);

        sim.activate_claim();
        drop(sim);
        timers.advance(5000);

        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn clones_share_one_session() {
        let sim = Simulator::new(ManualTimers::default(), quiet());
        let other = sim.clone();
        other.toggle_expanded_panel(PanelId(1));
        assert!(sim.state().is_expanded(PanelId(1)));
        assert!(sim == other);
        assert!(sim != Simulator::new(ManualTimers::default(), quiet()));
    }
}
