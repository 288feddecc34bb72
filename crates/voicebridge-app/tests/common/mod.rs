//! Scripted driver for runtime tests.
//!
//! Runs on a paused tokio clock: waiting a scripted duration costs no real
//! time, and the driver's wall clock is derived from the tokio clock so
//! message timestamps are deterministic.

#![allow(dead_code)]

use std::{
    collections::VecDeque,
    convert::Infallible,
    sync::{Arc, Mutex},
    time::Duration,
};

use tokio::time::Instant;
use voicebridge_app::{App, AppEvent, AppState, Driver, KeyInput};
use voicebridge_core::ViewState;

/// Wall clock at the start of every scripted run.
pub const START_MS: u64 = 1_704_067_200_000;

/// One scripted input.
#[derive(Debug, Clone)]
pub enum Step {
    /// Deliver an event.
    Event(AppEvent),
    /// Let time pass, then deliver a tick.
    Wait(Duration),
}

/// What the driver saw on one render.
#[derive(Debug, Clone)]
pub struct Frame {
    pub shown: ViewState,
    pub state: AppState,
}

/// Driver that replays a script.
#[derive(Debug)]
pub struct SimDriver {
    script: VecDeque<Step>,
    started: Instant,
    wake_at: Option<Instant>,
    frames: Arc<Mutex<Vec<Frame>>>,
    stopped: bool,
}

impl SimDriver {
    pub fn new(script: impl IntoIterator<Item = Step>) -> Self {
        Self {
            script: script.into_iter().collect(),
            started: Instant::now(),
            wake_at: None,
            frames: Arc::new(Mutex::new(Vec::new())),
            stopped: false,
        }
    }

    /// Shared handle on the render log.
    pub fn frames(&self) -> Arc<Mutex<Vec<Frame>>> {
        Arc::clone(&self.frames)
    }
}

impl Driver for SimDriver {
    type Error = Infallible;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        loop {
            if let Some(deadline) = self.wake_at {
                tokio::time::sleep_until(deadline).await;
                self.wake_at = None;
                return Ok(Some(AppEvent::Tick));
            }

            match self.script.pop_front() {
                Some(Step::Event(event)) => return Ok(Some(event)),
                Some(Step::Wait(duration)) => self.wake_at = Some(Instant::now() + duration),
                None => return Ok(None),
            }
        }
    }

    fn now_millis(&self) -> u64 {
        START_MS + self.started.elapsed().as_millis() as u64
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        let frame = Frame { shown: app.shown_view(), state: app.state().clone() };
        if let Ok(mut frames) = self.frames.lock() {
            frames.push(frame);
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

pub fn key(input: KeyInput) -> Step {
    Step::Event(AppEvent::Key(input))
}

pub fn typed(text: &str) -> impl Iterator<Item = Step> + '_ {
    text.chars().map(|c| key(KeyInput::Char(c)))
}

pub fn wait_ms(ms: u64) -> Step {
    Step::Wait(Duration::from_millis(ms))
}
