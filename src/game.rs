//! Game session
//!
//! Drives the bullet pool from the Playing phase: spawns on a fixed timer,
//! counts judged bullets, and draws the judgment track and HUD.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use crate::config::GameConfig;
use crate::platform::{Assets, AudioOut, Canvas};
use crate::renderer::colors;
use crate::sim::{BulletHandle, BulletPool, BulletSpawn, HitCallback, HitEvent, UpdateReport};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for start input
    Menu,
    /// Bullets spawning and scrolling
    Playing,
    /// Simulation frozen
    Paused,
    /// Target hit count reached
    GameOver,
}

/// One-shot inputs for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Start from the menu, or restart after game over
    pub start: bool,
    /// Pause toggle
    pub pause: bool,
}

/// What one [`Session::tick`] did
#[derive(Debug, Clone, Copy, Default)]
pub struct TickOutcome {
    pub spawned: Option<BulletHandle>,
    pub report: UpdateReport,
}

/// A play session
pub struct Session {
    config: GameConfig,
    phase: GamePhase,
    pool: BulletPool,
    /// Shared with every live bullet's hit callback
    hits: Rc<Cell<u32>>,
    spawn_timer: f32,
    spawned_total: u64,
}

impl Session {
    pub fn new(config: GameConfig, assets: Assets) -> Self {
        let pool = BulletPool::new(config.pool_config(), assets);
        let phase = if config.start_in_menu {
            GamePhase::Menu
        } else {
            GamePhase::Playing
        };
        Self {
            config,
            phase,
            pool,
            hits: Rc::new(Cell::new(0)),
            spawn_timer: 0.0,
            spawned_total: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn hits(&self) -> u32 {
        self.hits.get()
    }

    pub fn spawned_total(&self) -> u64 {
        self.spawned_total
    }

    pub fn pool(&self) -> &BulletPool {
        &self.pool
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Advance the session by one frame of `dt` seconds
    pub fn tick(&mut self, input: FrameInput, dt: f32, audio: &mut dyn AudioOut) -> TickOutcome {
        match self.phase {
            GamePhase::Menu if input.start => {
                log::info!("Run started");
                self.phase = GamePhase::Playing;
            }
            GamePhase::Playing if input.pause => {
                self.phase = GamePhase::Paused;
                return TickOutcome::default();
            }
            GamePhase::Paused if input.pause => {
                self.phase = GamePhase::Playing;
            }
            GamePhase::GameOver if input.start => self.restart(),
            _ => {}
        }

        if self.phase != GamePhase::Playing {
            return TickOutcome::default();
        }

        let spawned = self.update_spawner(dt);
        let report = self.pool.update(dt, audio);

        let target = self.config.target_hits;
        if target > 0 && self.hits.get() >= target {
            log::info!("Target of {target} hits reached");
            self.phase = GamePhase::GameOver;
        }

        TickOutcome { spawned, report }
    }

    /// Retire every bullet and reset counters, then play again
    pub fn restart(&mut self) {
        self.pool.clear();
        self.hits.set(0);
        self.spawn_timer = 0.0;
        self.phase = GamePhase::Playing;
        log::info!("Run restarted ({})", self.pool.stats());
    }

    fn update_spawner(&mut self, dt: f32) -> Option<BulletHandle> {
        self.spawn_timer += dt.max(0.0);
        if self.spawn_timer < self.config.spawn.interval {
            return None;
        }
        self.spawn_timer = 0.0;

        let spawn = &self.config.spawn;
        let bullet = BulletSpawn {
            pos: self.config.spawn_point(),
            vel: Vec2::new(-spawn.speed, 0.0),
            radius: spawn.radius,
            level: spawn.level,
        };

        let hits = Rc::clone(&self.hits);
        let on_hit: HitCallback = Box::new(move |_event: &HitEvent| hits.set(hits.get() + 1));
        self.spawned_total += 1;
        Some(self.pool.get(bullet, Some(on_hit)))
    }

    /// Draw the whole frame
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.clear(colors::BACKGROUND);
        match self.phase {
            GamePhase::Menu => self.draw_menu(canvas),
            GamePhase::Playing | GamePhase::Paused => self.draw_game(canvas),
            GamePhase::GameOver => self.draw_game_over(canvas),
        }
    }

    fn draw_menu(&self, canvas: &mut dyn Canvas) {
        canvas.draw_text("Split Bullets", Vec2::new(250.0, 150.0), 32.0, colors::WHITE);
        canvas.draw_text("Press Space to Start", Vec2::new(250.0, 250.0), 20.0, colors::GRAY);
        canvas.draw_text("Press Esc to Quit", Vec2::new(250.0, 300.0), 20.0, colors::GRAY);
    }

    fn draw_game(&self, canvas: &mut dyn Canvas) {
        let judgment = &self.config.judgment;
        let field = &self.config.playfield;

        // Track broken around the judgment marker
        canvas.draw_line(
            Vec2::new(field.min.x, judgment.y),
            Vec2::new(judgment.x - judgment.radius, judgment.y),
            colors::JUDGMENT_LINE,
        );
        canvas.draw_line(
            Vec2::new(judgment.x + judgment.radius, judgment.y),
            Vec2::new(field.max.x, judgment.y),
            colors::JUDGMENT_LINE,
        );
        canvas.draw_circle_lines(judgment.marker(), judgment.radius, colors::JUDGMENT_LINE);

        self.pool.draw(canvas);

        let hud = field.min + Vec2::splat(10.0);
        let hits = match self.config.target_hits {
            0 => format!("Hits: {}", self.hits.get()),
            target => format!("Hits: {}/{}", self.hits.get(), target),
        };
        canvas.draw_text(&hits, hud, 20.0, colors::WHITE);
        canvas.draw_text(
            &format!("Active Bullets: {}", self.pool.active_count()),
            hud + Vec2::new(0.0, 30.0),
            16.0,
            colors::GRAY,
        );
        if self.phase == GamePhase::Paused {
            canvas.draw_text("Paused", hud + Vec2::new(0.0, 60.0), 20.0, colors::WHITE);
        }
    }

    fn draw_game_over(&self, canvas: &mut dyn Canvas) {
        canvas.draw_text("Run Complete", Vec2::new(250.0, 150.0), 32.0, colors::WHITE);
        canvas.draw_text(
            &format!("Hits: {}", self.hits.get()),
            Vec2::new(250.0, 250.0),
            20.0,
            colors::WHITE,
        );
        canvas.draw_text("Press Space to Restart", Vec2::new(250.0, 300.0), 20.0, colors::GRAY);
    }
}
