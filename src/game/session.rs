use log::{debug, info};
use rand::Rng;

use super::achievements::{Achievement, Achievements};
use super::effects::{Effects, Shield, SpeedBoost};
use super::enemy::Enemy;
use super::grid::{Direction, Position};
use super::items::{free_cell, Food, SpecialEffect, SpecialFood};
use super::snake::{MoveFailure, Snake};
use crate::config::{Difficulty, EnemyContact, GameConfig};
use crate::save::SaveRecord;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Phase {
    SelectingDifficulty,
    Playing,
    GameOver,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Purchase {
    ExtraLife,
    Shield,
    FreezeEnemies,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Command {
    Steer(Direction),
    Buy(Purchase),
    ToggleRainbow,
}

/// Everything the player did since the previous tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub commands: Vec<Command>,
    /// Sprint key held while the tick runs.
    pub sprint: bool,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum LifeLoss {
    SelfCollision,
    OutOfBounds,
    Enemy,
}

impl From<MoveFailure> for LifeLoss {
    fn from(failure: MoveFailure) -> Self {
        match failure {
            MoveFailure::SelfCollision => LifeLoss::SelfCollision,
            MoveFailure::OutOfBounds => LifeLoss::OutOfBounds,
        }
    }
}

/// Something worth reacting to (sound, log line) that happened during a tick.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum GameEvent {
    Purchased(Purchase),
    PurchaseRejected(Purchase),
    LifeLost(LifeLoss),
    ShieldAbsorbed,
    GameOver,
    LevelUp { level: u32 },
    AchievementUnlocked(Achievement),
    BoostExpired,
    AteFood,
    AteSpecial(SpecialEffect),
    CoinCollected,
    BombHit,
}

/// The whole simulation. Owns every entity and counter.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    pub phase: Phase,
    pub difficulty: Option<Difficulty>,
    pub snake: Snake,
    pub enemies: Vec<Enemy>,
    pub food: Food,
    pub special_food: Option<SpecialFood>,
    pub coin: Option<Position>,
    pub bomb: Option<Position>,
    pub score: u32,
    pub coins: u32,
    pub lives: u32,
    pub level: u32,
    /// Ticks per second before sprint and boost are applied.
    pub tick_rate: u32,
    pub effects: Effects,
    pub achievements: Achievements,
    pub high_score: u32,
}

impl Session {
    /// A fresh session waiting on the difficulty screen, seeded with the
    /// persisted coins, record and achievements.
    pub fn new(config: GameConfig, record: &SaveRecord, rng: &mut impl Rng) -> Self {
        let snake = Snake::new(&config.board);
        let food = Food::spawn(&config.board, &snake, rng);
        Self {
            phase: Phase::SelectingDifficulty,
            difficulty: None,
            snake,
            enemies: Vec::new(),
            food,
            special_food: None,
            coin: None,
            bomb: None,
            score: 0,
            coins: record.coins,
            lives: config.starting_lives,
            level: 1,
            tick_rate: config.base_tick_rate,
            effects: Effects::default(),
            achievements: record.achievements.clone(),
            high_score: record.high_score,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Snapshot of what survives between runs.
    pub fn to_record(&self) -> SaveRecord {
        SaveRecord::snapshot(self.coins, self.high_score, self.achievements.clone())
    }

    /// Effective ticks per second: base rate scaled by sprint and boost.
    pub fn frame_rate(&self) -> u32 {
        let boost = self.effects.boost.multiplier(self.config.boost_multiplier);
        let rate = self.tick_rate as f32 * self.snake.speed_multiplier * boost;
        (rate.round() as u32).max(1)
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.phase != Phase::SelectingDifficulty {
            return false;
        }
        self.difficulty = Some(difficulty);
        self.tick_rate = difficulty.tick_rate();
        self.phase = Phase::Playing;
        info!(
            "Difficulty {} selected ({} ticks/s)",
            difficulty.label(),
            self.tick_rate
        );
        true
    }

    /// Starts a new round after game over. Coins, high score and
    /// achievements carry over; everything else is reset.
    pub fn restart(&mut self, rng: &mut impl Rng) -> bool {
        if self.phase != Phase::GameOver {
            return false;
        }
        let board = self.config.board;
        self.snake.reset(&board);
        self.food = Food::spawn(&board, &self.snake, rng);
        self.special_food = None;
        self.coin = None;
        self.bomb = None;
        self.enemies.clear();
        self.score = 0;
        self.lives = self.config.starting_lives;
        self.level = 1;
        self.tick_rate = self
            .difficulty
            .map_or(self.config.base_tick_rate, Difficulty::tick_rate);
        self.effects = Effects::default();
        self.phase = Phase::Playing;
        info!("Restarted at {} ticks/s", self.tick_rate);
        true
    }

    /// Spends coins on a shop item. Rejected purchases leave the session
    /// untouched.
    pub fn buy(&mut self, item: Purchase) -> bool {
        let prices = self.config.prices;
        let price = match item {
            Purchase::ExtraLife => prices.extra_life,
            Purchase::Shield => prices.shield,
            Purchase::FreezeEnemies => prices.freeze,
        };
        let allowed = self.coins >= price
            && match item {
                Purchase::ExtraLife => self.lives < self.config.max_lives,
                Purchase::Shield => !self.effects.shield.is_up(),
                Purchase::FreezeEnemies => true,
            };
        if !allowed {
            debug!("Rejected {:?}: {} coins, {} lives", item, self.coins, self.lives);
            return false;
        }

        self.coins -= price;
        match item {
            Purchase::ExtraLife => self.lives += 1,
            Purchase::Shield => self.effects.shield = Shield::Up,
            Purchase::FreezeEnemies => self.enemies.iter_mut().for_each(Enemy::freeze),
        }
        debug!("Bought {:?} for {} coins", item, price);
        true
    }

    /// Advances the simulation by one tick. Does nothing outside `Playing`.
    pub fn tick(&mut self, input: &TickInput, rng: &mut impl Rng) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != Phase::Playing {
            return events;
        }

        self.apply_input(input, &mut events);

        if let Err(failure) = self.snake.advance(&self.config.board) {
            if self.lose_life(failure.into(), &mut events) {
                return events;
            }
        }

        if self.update_enemies(rng, &mut events) {
            return events;
        }

        self.update_level(rng, &mut events);
        self.check_achievements(&mut events);
        self.high_score = self.high_score.max(self.score);

        if self.effects.boost.tick() {
            events.push(GameEvent::BoostExpired);
        }

        self.collect_pickups(rng, &mut events);
        events
    }

    fn apply_input(&mut self, input: &TickInput, events: &mut Vec<GameEvent>) {
        for command in &input.commands {
            match *command {
                Command::Steer(direction) => {
                    self.snake.steer(direction);
                }
                Command::Buy(item) => {
                    if self.buy(item) {
                        events.push(GameEvent::Purchased(item));
                    } else {
                        events.push(GameEvent::PurchaseRejected(item));
                    }
                }
                Command::ToggleRainbow => self.snake.toggle_rainbow(),
            }
        }
        self.snake.speed_multiplier = if input.sprint {
            self.config.sprint_multiplier
        } else {
            1.0
        };
    }

    /// Returns true when the loss ended the game.
    fn lose_life(&mut self, cause: LifeLoss, events: &mut Vec<GameEvent>) -> bool {
        self.lives = self.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost(cause));
        if self.lives == 0 {
            self.phase = Phase::GameOver;
            self.high_score = self.high_score.max(self.score);
            events.push(GameEvent::GameOver);
            info!("Game over: score {}, level {}", self.score, self.level);
            return true;
        }
        self.snake.reset(&self.config.board);
        false
    }

    /// Enemy on the head: the shield takes the hit if it is up.
    fn strike(&mut self, events: &mut Vec<GameEvent>) -> bool {
        if self.effects.shield.absorb() {
            events.push(GameEvent::ShieldAbsorbed);
            return false;
        }
        self.lose_life(LifeLoss::Enemy, events)
    }

    fn update_enemies(&mut self, rng: &mut impl Rng, events: &mut Vec<GameEvent>) -> bool {
        let board = self.config.board;
        let mut struck = vec![false; self.enemies.len()];

        for i in 0..self.enemies.len() {
            if self.enemies[i].position() == self.snake.head() {
                struck[i] = true;
                if self.strike(events) {
                    return true;
                }
            }
            self.enemies[i].advance(&board, rng);
        }

        for i in 0..self.enemies.len() {
            if self.enemies[i].position() != self.snake.head() {
                continue;
            }
            if struck[i] && self.config.enemy_contact == EnemyContact::OncePerTick {
                continue;
            }
            if self.strike(events) {
                return true;
            }
        }
        false
    }

    fn update_level(&mut self, rng: &mut impl Rng, events: &mut Vec<GameEvent>) {
        let reached = self.score / self.config.level_points + 1;
        if reached <= self.level {
            return;
        }
        self.level += 1;
        self.tick_rate += self.config.level_rate_step;
        self.lives = (self.lives + 1).min(self.config.max_lives);

        let quota = self.config.enemy_quota(self.tick_rate);
        while self.enemies.len() < quota {
            self.enemies.push(Enemy::spawn(&self.config.board, rng));
        }
        info!(
            "Level {} reached: {} ticks/s, {} enemies",
            self.level,
            self.tick_rate,
            self.enemies.len()
        );
        events.push(GameEvent::LevelUp { level: self.level });
    }

    fn check_achievements(&mut self, events: &mut Vec<GameEvent>) {
        let earned = [
            (Achievement::FirstCoin, self.coins >= 1),
            (Achievement::CoinCollector, self.coins >= 50),
            (Achievement::SnakeMaster, self.level >= 5),
            (Achievement::Immortal, self.lives >= 5),
        ];
        for (achievement, condition) in earned {
            if condition {
                self.award(achievement, events);
            }
        }
    }

    fn award(&mut self, achievement: Achievement, events: &mut Vec<GameEvent>) {
        if self.achievements.unlock(achievement) {
            info!("Achievement unlocked: {}", achievement.key());
            events.push(GameEvent::AchievementUnlocked(achievement));
        }
    }

    fn collect_pickups(&mut self, rng: &mut impl Rng, events: &mut Vec<GameEvent>) {
        let board = self.config.board;
        let head = self.snake.head();

        if head == self.food.position {
            self.score += self.config.food_score;
            self.coins += self.config.food_coins;
            self.snake.grow();
            self.food = Food::spawn(&board, &self.snake, rng);
            events.push(GameEvent::AteFood);

            if rng.gen_bool(self.config.coin_chance) {
                self.coin = Some(free_cell(&board, &self.snake, rng));
            }
            if rng.gen_bool(self.config.special_chance) {
                self.special_food = Some(SpecialFood::spawn(&board, &self.snake, rng));
            }
            if rng.gen_bool(self.config.bomb_chance) {
                self.bomb = Some(free_cell(&board, &self.snake, rng));
            }
        }

        if let Some(special) = self.special_food.filter(|s| s.position == head) {
            match special.effect {
                SpecialEffect::SpeedBoost => {
                    // a second boost restarts the timer rather than stacking
                    self.effects.boost = SpeedBoost::Active {
                        remaining: self.config.boost_ticks,
                    };
                    self.award(Achievement::SpeedMaster, events);
                }
                SpecialEffect::Shrink => {
                    for _ in 0..self.config.shrink_segments {
                        self.snake.shrink();
                    }
                }
                SpecialEffect::CoinBonus => self.coins += self.config.coin_bonus,
            }
            self.special_food = None;
            events.push(GameEvent::AteSpecial(special.effect));
        }

        if self.coin == Some(head) {
            self.coins += self.config.coin_value;
            self.coin = None;
            events.push(GameEvent::CoinCollected);
        }

        if self.bomb == Some(head) {
            for _ in 0..self.config.bomb_segments {
                self.snake.shrink();
            }
            self.bomb = None;
            events.push(GameEvent::BombHit);
        }
    }
}
