use alloc::collections::VecDeque;
use alloc::format;
use serde::{Deserialize, Serialize};

use crate::*;

/// Physics and layout constants; every value is per tick or in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollerConfig {
    pub width: f32,
    pub height: f32,
    pub bird_x: f32,
    pub bird_start_y: f32,
    pub bird_size: f32,
    pub gravity: f32,
    pub flap_velocity: f32,
    pub pipe_width: f32,
    pub pipe_speed: f32,
    /// A new pipe spawns once the newest one has moved left of this x.
    pub spawn_threshold: f32,
    pub gap_height: f32,
    /// Minimum extent of both the top and the bottom pipe segment.
    pub gap_margin: f32,
}

impl ScrollerConfig {
    pub const CLASSIC: Self = Self {
        width: 400.0,
        height: 400.0,
        bird_x: 50.0,
        bird_start_y: 200.0,
        bird_size: 30.0,
        gravity: 0.5,
        flap_velocity: -8.0,
        pipe_width: 50.0,
        pipe_speed: 2.0,
        spawn_threshold: 250.0,
        gap_height: 150.0,
        gap_margin: 50.0,
    };
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bird {
    pub y: f32,
    pub velocity: f32,
}

/// Pipe pair: solid from the top down to `top_height` and from `bottom_y` down.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pipe {
    pub x: f32,
    pub top_height: f32,
    pub bottom_y: f32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ScrollerPhase {
    /// Start screen, nothing moves.
    #[default]
    Idle,
    Running,
    /// Crashed; the last score stays on screen until the next start.
    Over,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FrameOutcome {
    Idle,
    Running,
    Crashed,
}

impl FrameOutcome {
    /// Whether the shell should request another frame.
    pub const fn wants_next_frame(self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Side-scrolling obstacle dodger with simple per-tick integration.
#[derive(Clone, Debug)]
pub struct SideScroller<R> {
    config: ScrollerConfig,
    bird: Bird,
    pipes: VecDeque<Pipe>,
    phase: ScrollerPhase,
    score: u32,
    rng: R,
}

impl<R: RandomSource> SideScroller<R> {
    pub const BIRD_COLOR: Color = "yellow";
    pub const PIPE_COLOR: Color = "green";
    pub const TEXT_COLOR: Color = "black";

    pub fn new(config: ScrollerConfig, rng: R) -> Self {
        Self {
            config,
            bird: Bird {
                y: config.bird_start_y,
                velocity: 0.0,
            },
            pipes: VecDeque::new(),
            phase: ScrollerPhase::Idle,
            score: 0,
            rng,
        }
    }

    pub fn config(&self) -> &ScrollerConfig {
        &self.config
    }

    pub fn phase(&self) -> ScrollerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == ScrollerPhase::Running
    }

    pub fn bird(&self) -> Bird {
        self.bird
    }

    /// Pipes ordered by increasing x.
    pub fn pipes(&self) -> impl ExactSizeIterator<Item = &Pipe> {
        self.pipes.iter()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Resets and starts a run; ignored while one is already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.bird = Bird {
            y: self.config.bird_start_y,
            velocity: 0.0,
        };
        self.pipes.clear();
        self.score = 0;
        self.phase = ScrollerPhase::Running;
        log::debug!("scroller started");
        true
    }

    pub fn flap(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.bird.velocity = self.config.flap_velocity;
        true
    }

    /// Places an extra pipe, e.g. to set up a known course.
    pub fn push_pipe(&mut self, pipe: Pipe) {
        self.pipes.push_back(pipe);
    }

    pub fn step(&mut self) -> FrameOutcome {
        if !self.is_running() {
            return FrameOutcome::Idle;
        }

        let config = self.config;
        self.bird.velocity += config.gravity;
        self.bird.y += self.bird.velocity;

        for pipe in &mut self.pipes {
            pipe.x -= config.pipe_speed;
        }

        if self.pipes.back().is_none_or(|pipe| pipe.x < config.spawn_threshold) {
            let pipe = self.spawn_pipe();
            self.pipes.push_back(pipe);
        }

        // pipes leave in spawn order, so only the front can be off screen
        while self
            .pipes
            .front()
            .is_some_and(|pipe| pipe.x + config.pipe_width < 0.0)
        {
            self.pipes.pop_front();
            self.score += 1;
        }

        if self.has_crashed() {
            log::debug!("scroller crashed, final score {}", self.score);
            self.phase = ScrollerPhase::Over;
            FrameOutcome::Crashed
        } else {
            FrameOutcome::Running
        }
    }

    pub fn has_crashed(&self) -> bool {
        let config = &self.config;
        let bird = self.bird;
        if bird.y > config.height || bird.y < 0.0 {
            return true;
        }

        self.pipes.iter().any(|pipe| {
            let overlaps_x =
                config.bird_x + config.bird_size > pipe.x && config.bird_x < pipe.x + config.pipe_width;
            let outside_gap = bird.y < pipe.top_height || bird.y + config.bird_size > pipe.bottom_y;
            overlaps_x && outside_gap
        })
    }

    pub fn render(&self, surface: &mut impl Surface) {
        let config = &self.config;
        surface.clear(config.width, config.height);

        if self.phase == ScrollerPhase::Idle {
            surface.fill_text(
                "Click to Start",
                config.width / 2.0 - 50.0,
                config.height / 2.0,
                20,
                Self::TEXT_COLOR,
            );
            return;
        }

        surface.fill_rect(
            config.bird_x,
            self.bird.y,
            config.bird_size,
            config.bird_size,
            Self::BIRD_COLOR,
        );
        for pipe in &self.pipes {
            surface.fill_rect(pipe.x, 0.0, config.pipe_width, pipe.top_height, Self::PIPE_COLOR);
            surface.fill_rect(
                pipe.x,
                pipe.bottom_y,
                config.pipe_width,
                config.height - pipe.bottom_y,
                Self::PIPE_COLOR,
            );
        }
        surface.fill_text(
            &format!("Score: {}", self.score),
            10.0,
            30.0,
            20,
            Self::TEXT_COLOR,
        );

        if self.phase == ScrollerPhase::Over {
            let (center_x, center_y) = (config.width / 2.0, config.height / 2.0);
            surface.fill_text("Game Over!", center_x - 70.0, center_y, 30, Self::TEXT_COLOR);
            surface.fill_text(
                &format!("Final Score: {}", self.score),
                center_x - 60.0,
                center_y + 40.0,
                20,
                Self::TEXT_COLOR,
            );
            surface.fill_text(
                "Click to Restart",
                center_x - 60.0,
                center_y + 80.0,
                20,
                Self::TEXT_COLOR,
            );
        }
    }

    fn spawn_pipe(&mut self) -> Pipe {
        let config = &self.config;
        let span = (config.height - config.gap_height - 2.0 * config.gap_margin).max(0.0);
        let top_height = self.rng.unit() * span + config.gap_margin;
        Pipe {
            x: config.width,
            top_height,
            bottom_y: top_height + config.gap_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroller() -> SideScroller<ScriptedRandom> {
        SideScroller::new(ScrollerConfig::CLASSIC, ScriptedRandom::new([0.5]))
    }

    /// Keeps the bird bobbing around its start height.
    fn hover(scroller: &mut SideScroller<ScriptedRandom>) -> FrameOutcome {
        let outcome = scroller.step();
        if scroller.bird().y > 200.0 {
            scroller.flap();
        }
        outcome
    }

    #[test]
    fn idle_scroller_does_not_move() {
        let mut scroller = scroller();

        assert_eq!(scroller.step(), FrameOutcome::Idle);
        assert_eq!(scroller.bird().y, 200.0);
        assert_eq!(scroller.pipes().len(), 0);
        assert!(!scroller.flap());
    }

    #[test]
    fn gravity_integrates_velocity_then_position() {
        let mut scroller = scroller();
        scroller.start();

        scroller.step();
        scroller.step();

        assert_eq!(scroller.bird(), Bird { y: 201.5, velocity: 1.0 });
    }

    #[test]
    fn flap_sets_upward_impulse() {
        let mut scroller = scroller();
        scroller.start();
        scroller.step();

        assert!(scroller.flap());
        scroller.step();

        assert_eq!(scroller.bird().velocity, -7.5);
    }

    #[test]
    fn spawned_gap_keeps_both_segments_positive() {
        for draw in [0.0, 0.5, 0.75] {
            let mut scroller = SideScroller::new(ScrollerConfig::CLASSIC, ScriptedRandom::new([draw]));
            scroller.start();
            scroller.step();

            let pipe = *scroller.pipes().next().unwrap();
            assert_eq!(pipe.x, 400.0);
            assert!(pipe.top_height >= 50.0);
            assert!(pipe.bottom_y <= 350.0);
            assert_eq!(pipe.bottom_y - pipe.top_height, 150.0);
        }
    }

    #[test]
    fn next_pipe_waits_for_spawn_threshold() {
        let mut scroller = scroller();
        scroller.start();

        for _ in 0..75 {
            assert_eq!(hover(&mut scroller), FrameOutcome::Running);
        }
        assert_eq!(scroller.pipes().len(), 1);
        assert_eq!(scroller.pipes().next().unwrap().x, 252.0);

        hover(&mut scroller);
        assert_eq!(scroller.pipes().len(), 1);

        hover(&mut scroller);
        assert_eq!(scroller.pipes().len(), 2);
    }

    #[test]
    fn passed_pipe_scores_once_and_is_removed() {
        let mut scroller = scroller();
        scroller.start();
        scroller.push_pipe(Pipe {
            x: -49.0,
            top_height: 100.0,
            bottom_y: 250.0,
        });

        assert_eq!(scroller.step(), FrameOutcome::Running);
        assert_eq!(scroller.score(), 1);
        assert_eq!(scroller.pipes().len(), 1);

        scroller.step();
        assert_eq!(scroller.score(), 1);
    }

    #[test]
    fn leaving_the_field_crashes() {
        let mut scroller = scroller();
        scroller.start();
        for _ in 0..3 {
            scroller.flap();
            scroller.step();
        }
        assert!(scroller.is_running());

        let mut ticks = 0;
        while scroller.step() == FrameOutcome::Running {
            scroller.flap();
            ticks += 1;
            assert!(ticks < 100);
        }
        assert!(scroller.bird().y < 0.0);
        assert_eq!(scroller.phase(), ScrollerPhase::Over);
    }

    #[test]
    fn collision_needs_overlap_and_leaving_the_gap() {
        let mut scroller = scroller();
        scroller.start();

        // overlapping horizontally, bird inside the gap
        scroller.push_pipe(Pipe {
            x: 60.0,
            top_height: 150.0,
            bottom_y: 300.0,
        });
        assert!(!scroller.has_crashed());

        // bird's top above the gap
        scroller.pipes.clear();
        scroller.push_pipe(Pipe {
            x: 60.0,
            top_height: 210.0,
            bottom_y: 360.0,
        });
        assert!(scroller.has_crashed());

        // outside the gap but not overlapping horizontally
        scroller.pipes.clear();
        scroller.push_pipe(Pipe {
            x: 80.0,
            top_height: 210.0,
            bottom_y: 360.0,
        });
        assert!(!scroller.has_crashed());
    }

    #[test]
    fn collision_with_lower_pipe_and_trailing_edge() {
        let mut scroller = scroller();
        scroller.start();
        assert_eq!(scroller.bird().y, 200.0);

        // bird's bottom sinks into the lower pipe
        scroller.push_pipe(Pipe {
            x: 60.0,
            top_height: 50.0,
            bottom_y: 210.0,
        });
        assert!(scroller.has_crashed());

        // pipe has moved fully past the bird
        scroller.pipes.clear();
        scroller.push_pipe(Pipe {
            x: 0.0,
            top_height: 210.0,
            bottom_y: 360.0,
        });
        assert!(!scroller.has_crashed());

        // trailing edge still under the bird
        scroller.pipes.clear();
        scroller.push_pipe(Pipe {
            x: 1.0,
            top_height: 210.0,
            bottom_y: 360.0,
        });
        assert!(scroller.has_crashed());
    }

    #[test]
    fn restart_resets_state_but_not_while_running() {
        let mut scroller = scroller();
        assert!(scroller.start());
        assert!(!scroller.start());

        while scroller.step() == FrameOutcome::Running {}
        assert_eq!(scroller.step(), FrameOutcome::Idle);

        assert!(scroller.start());
        assert_eq!(scroller.bird().y, 200.0);
        assert_eq!(scroller.pipes().len(), 0);
        assert_eq!(scroller.score(), 0);
    }

    #[test]
    fn render_shows_each_phase() {
        let mut scroller = scroller();
        let mut log = DrawLog::default();

        scroller.render(&mut log);
        assert_eq!(log.texts().collect::<alloc::vec::Vec<_>>(), ["Click to Start"]);

        scroller.start();
        scroller.step();
        scroller.render(&mut log);
        assert_eq!(log.rects_with(SideScroller::<ScriptedRandom>::BIRD_COLOR).count(), 1);
        assert_eq!(log.rects_with(SideScroller::<ScriptedRandom>::PIPE_COLOR).count(), 2);
        assert!(log.texts().any(|text| text == "Score: 0"));

        while scroller.step() == FrameOutcome::Running {}
        scroller.render(&mut log);
        assert!(log.texts().any(|text| text == "Game Over!"));
        assert!(log.texts().any(|text| text == "Final Score: 0"));
    }
}
