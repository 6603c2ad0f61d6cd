//! Frame loop: clears the surface and steps every actor once per tick.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use orrery_engine::canvas::Surface;
use orrery_engine::coords::Viewport;

use crate::actor::Actor;

/// Cloneable flag that stops a [`Stage`]. Safe to trigger from any thread.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

/// Outcome of one [`Stage::tick`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Tick {
    /// A frame was drawn; schedule the next one.
    Running,
    /// Nothing was drawn; stop scheduling.
    Stopped,
}

/// Owner of every actor plus the stop flag.
#[derive(Debug, Default)]
pub struct Stage {
    actors: Vec<Actor>,
    stop: StopHandle,
    ticks: u64,
    halted: bool,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_actors(actors: impl IntoIterator<Item = Actor>) -> Self {
        Self { actors: actors.into_iter().collect(), ..Self::default() }
    }

    pub fn add(&mut self, actor: Actor) {
        self.actors.push(actor);
    }

    #[inline]
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// A handle sharing this stage's stop flag.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Number of frames drawn so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Runs one frame: clears the whole viewport, then steps each actor in order.
    ///
    /// Once the stop flag is set this draws nothing and keeps returning
    /// [`Tick::Stopped`].
    pub fn tick(&mut self, surface: &mut impl Surface, viewport: Viewport) -> Tick {
        if self.stop.is_stopped() {
            if !self.halted {
                self.halted = true;
                log::info!("stage stopped after {} tick(s)", self.ticks);
            }
            return Tick::Stopped;
        }

        surface.clear_rect(viewport.bounds());
        for actor in &mut self.actors {
            actor.step(surface);
        }

        self.ticks += 1;
        log::trace!("stage tick {} ({} actor(s))", self.ticks, self.actors.len());
        Tick::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Animation, CircleShape, RectShape};
    use crate::testing::{Call, Recorder};
    use orrery_engine::canvas::Canvas;
    use orrery_engine::coords::{Rect, Vec2};
    use orrery_engine::paint::Color;
    use orrery_engine::scene::DrawCmd;

    const VIEW: Viewport = Viewport::new(800.0, 600.0);

    fn spinner(origin: Vec2) -> Actor {
        Actor::new(
            [RectShape::new(Vec2::zero(), 20.0, 20.0).with_animation(Animation::rotate(2.0))],
            origin,
        )
    }

    // ── ticking ───────────────────────────────────────────────────────────

    #[test]
    fn tick_clears_then_steps_every_actor() {
        let mut stage = Stage::with_actors([spinner(Vec2::new(100.0, 100.0))]);
        stage.add(Actor::new([CircleShape::new(Vec2::zero(), 4.0)], Vec2::new(300.0, 300.0)));

        let mut rec = Recorder::default();
        assert_eq!(stage.tick(&mut rec, VIEW), Tick::Running);

        assert_eq!(rec.calls.first(), Some(&Call::ClearRect(Rect::new(0.0, 0.0, 800.0, 600.0))));
        assert_eq!(rec.count(&Call::Stroke), 2);
        assert_eq!(stage.ticks(), 1);
        assert_eq!(stage.actors()[0].shapes()[0].rotation(), Some(2.0));
    }

    #[test]
    fn each_tick_advances_once() {
        let mut stage = Stage::with_actors([spinner(Vec2::zero())]);
        let mut rec = Recorder::default();
        for _ in 0..10 {
            stage.tick(&mut rec, VIEW);
        }
        assert_eq!(stage.ticks(), 10);
        assert_eq!(stage.actors()[0].shapes()[0].rotation(), Some(20.0));
        assert_eq!(rec.depth(), 0);
    }

    #[test]
    fn canvas_holds_only_the_latest_frame() {
        let mut stage = Stage::with_actors([spinner(Vec2::new(100.0, 100.0))]);
        let mut canvas = Canvas::new(VIEW, Color::WHITE);
        for _ in 0..3 {
            canvas.begin_frame(VIEW);
            stage.tick(&mut canvas, VIEW);
        }
        let [DrawCmd::Stroke(_)] = canvas.draw_list().items() else {
            panic!("expected a single stroke from the last frame");
        };
    }

    // ── stopping ──────────────────────────────────────────────────────────

    #[test]
    fn stopped_stage_draws_nothing() {
        let mut stage = Stage::with_actors([spinner(Vec2::zero())]);
        let handle = stage.stop_handle();
        let mut rec = Recorder::default();

        stage.tick(&mut rec, VIEW);
        handle.stop();
        let calls_before = rec.calls.len();

        assert_eq!(stage.tick(&mut rec, VIEW), Tick::Stopped);
        assert_eq!(stage.tick(&mut rec, VIEW), Tick::Stopped);
        assert_eq!(rec.calls.len(), calls_before);
        assert_eq!(stage.ticks(), 1);
        assert_eq!(stage.actors()[0].shapes()[0].rotation(), Some(2.0));
    }

    #[test]
    fn stop_handle_works_across_threads() {
        let stage = Stage::new();
        let handle = stage.stop_handle();
        std::thread::spawn(move || handle.stop()).join().unwrap();
        assert!(stage.stop_handle().is_stopped());
    }

    #[test]
    fn empty_stage_still_clears() {
        let mut stage = Stage::new();
        let mut rec = Recorder::default();
        assert_eq!(stage.tick(&mut rec, VIEW), Tick::Running);
        assert_eq!(rec.calls, vec![Call::ClearRect(VIEW.bounds())]);
    }
}
