use ggez::event::{EventHandler, ErrorOrigin};
use ggez::graphics::FontData;
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, GameError, GameResult};
use log::{error, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{Difficulty, GameConfig, FONT_NAME, FONT_PATH};
use crate::game::{Command, Direction, GameEvent, Phase, Purchase, Session, TickInput};
use crate::render;
use crate::save::SaveStore;
use crate::sound::{Cue, Sounds};

/// Longest backlog the clock will catch up on, in seconds. Anything beyond
/// (window drag, debugger pause) is dropped.
const MAX_TICK_LAG: f64 = 0.25;

/// Fixed-rate tick scheduler. Keeps the fractional remainder between frames
/// so the tick rate does not snap to a multiple of the display refresh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickClock {
    next_tick: f64,
}

impl TickClock {
    /// First tick one period after `now`.
    pub fn starting_at(now: f64, rate: u32) -> Self {
        let mut clock = TickClock { next_tick: now };
        clock.advance(now, rate);
        clock
    }

    pub fn is_due(&self, now: f64) -> bool {
        now >= self.next_tick
    }

    /// Books the next tick one period after the one just run.
    pub fn advance(&mut self, now: f64, rate: u32) {
        if now - self.next_tick > MAX_TICK_LAG {
            self.next_tick = now;
        }
        self.next_tick += 1.0 / f64::from(rate.max(1));
    }
}

/// Keys that turn into session commands while playing. Shop and toggle keys
/// act once per press, so auto-repeat only ever steers.
pub fn command_for_key(keycode: KeyCode, repeat: bool) -> Option<Command> {
    let command = match keycode {
        KeyCode::Up => Some(Command::Steer(Direction::Up)),
        KeyCode::Down => Some(Command::Steer(Direction::Down)),
        KeyCode::Left => Some(Command::Steer(Direction::Left)),
        KeyCode::Right => Some(Command::Steer(Direction::Right)),
        KeyCode::B => Some(Command::Buy(Purchase::ExtraLife)),
        KeyCode::S => Some(Command::Buy(Purchase::Shield)),
        KeyCode::F => Some(Command::Buy(Purchase::FreezeEnemies)),
        KeyCode::H => Some(Command::ToggleRainbow),
        _ => None,
    }?;
    match command {
        Command::Buy(_) | Command::ToggleRainbow if repeat => None,
        _ => Some(command),
    }
}

pub fn difficulty_for_key(keycode: KeyCode) -> Option<Difficulty> {
    match keycode {
        KeyCode::Key1 => Some(Difficulty::Easy),
        KeyCode::Key2 => Some(Difficulty::Medium),
        KeyCode::Key3 => Some(Difficulty::Hard),
        _ => None,
    }
}

/// The ggez shell: owns the session, the random source and the I/O around it.
pub struct App {
    session: Session,
    rng: ChaCha8Rng,
    store: SaveStore,
    sounds: Sounds,
    pending: Vec<Command>,
    clock: TickClock,
    rainbow_phase: f32,
}

impl App {
    /// Fails if the font cannot be loaded. Missing sounds and save data only
    /// degrade the game.
    pub fn new(ctx: &mut Context, config: GameConfig, store: SaveStore) -> GameResult<Self> {
        let font = FontData::from_path(ctx, FONT_PATH)?;
        ctx.gfx.add_font(FONT_NAME, font);

        let sounds = Sounds::load(ctx);
        let record = store.load();
        let mut rng = ChaCha8Rng::from_entropy();
        let session = Session::new(config, &record, &mut rng);

        Ok(App {
            session,
            rng,
            store,
            sounds,
            pending: Vec::new(),
            clock: TickClock::starting_at(0.0, 1),
            rainbow_phase: 0.0,
        })
    }

    fn persist(&self) {
        match self.store.write(&self.session.to_record()) {
            Ok(()) => info!("Saved progress to {}", self.store.path().display()),
            Err(e) => error!("Failed to save progress: {}", e),
        }
    }

    fn restart_clock(&mut self, ctx: &Context) {
        let now = ctx.time.time_since_start().as_secs_f64();
        self.clock = TickClock::starting_at(now, self.session.frame_rate());
    }

    fn sprint_held(ctx: &Context) -> bool {
        ctx.keyboard.is_key_pressed(KeyCode::LShift) || ctx.keyboard.is_key_pressed(KeyCode::RShift)
    }

    fn react(&mut self, ctx: &mut Context, events: &[GameEvent]) {
        for event in events {
            if let Some(cue) = Cue::for_event(event) {
                self.sounds.play(ctx, cue);
            }
        }
    }
}

impl EventHandler for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        if self.session.phase != Phase::Playing {
            return Ok(());
        }

        let now = ctx.time.time_since_start().as_secs_f64();
        while self.session.phase == Phase::Playing && self.clock.is_due(now) {
            let input = TickInput {
                commands: std::mem::take(&mut self.pending),
                sprint: Self::sprint_held(ctx),
            };
            let events = self.session.tick(&input, &mut self.rng);
            self.clock.advance(now, self.session.frame_rate());
            self.rainbow_phase = render::advance_rainbow(self.rainbow_phase);
            self.react(ctx, &events);
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = render::new_canvas(ctx);
        render::draw_frame(ctx, &mut canvas, &self.session, self.rainbow_phase)?;
        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeat: bool) -> GameResult {
        let Some(keycode) = input.keycode else {
            return Ok(());
        };
        match self.session.phase {
            Phase::SelectingDifficulty => {
                if let Some(difficulty) = difficulty_for_key(keycode) {
                    self.session.select_difficulty(difficulty);
                    self.restart_clock(ctx);
                }
            }
            Phase::Playing => {
                if let Some(command) = command_for_key(keycode, repeat) {
                    self.pending.push(command);
                }
            }
            Phase::GameOver => {
                if keycode == KeyCode::R && self.session.restart(&mut self.rng) {
                    self.pending.clear();
                    self.restart_clock(ctx);
                }
            }
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> GameResult<bool> {
        info!("Window closed");
        self.persist();
        Ok(false)
    }

    fn on_error(&mut self, _ctx: &mut Context, origin: ErrorOrigin, e: GameError) -> bool {
        error!("Error in {:?}: {}", origin, e);
        self.persist();
        true
    }
}
