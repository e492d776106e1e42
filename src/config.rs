use crate::game::grid::Board;

pub const RESOURCE_DIR: &str = "./resources";
pub const FONT_PATH: &str = "/fonts/TeletactileRus.ttf";
pub const FONT_NAME: &str = "Teletactile";
pub const SAVE_FILE: &str = "save.json";
pub const LOG_FILE: &str = "arcade-snake.log";

pub const SCREEN_WIDTH: i16 = 800;
pub const SCREEN_HEIGHT: i16 = 600;
pub const GRID_CELL_SIZE: i16 = 20;

/// The three presets offered on the start screen.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Ticks per second before any level-up.
    pub fn tick_rate(self) -> u32 {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Medium => 12,
            Difficulty::Hard => 18,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// How often an enemy sitting on the snake's head is charged within one tick.
///
/// Enemies are checked once before they move and once after every enemy has
/// moved. `OncePerTick` charges each enemy at most once across both passes;
/// `Twice` charges every pass that finds contact.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum EnemyContact {
    OncePerTick,
    Twice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prices {
    pub extra_life: u32,
    pub shield: u32,
    pub freeze: u32,
}

impl Default for Prices {
    fn default() -> Self {
        Self {
            extra_life: 15,
            shield: 30,
            freeze: 50,
        }
    }
}

/// Tunables for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub board: Board,
    pub starting_lives: u32,
    pub max_lives: u32,
    /// Tick rate used before a difficulty has been chosen.
    pub base_tick_rate: u32,
    /// Score needed per level.
    pub level_points: u32,
    /// Tick rate added on each level-up.
    pub level_rate_step: u32,

    pub food_score: u32,
    pub food_coins: u32,
    pub coin_value: u32,
    pub coin_bonus: u32,

    pub coin_chance: f64,
    pub special_chance: f64,
    pub bomb_chance: f64,

    pub boost_ticks: u32,
    pub boost_multiplier: f32,
    pub sprint_multiplier: f32,
    pub shrink_segments: usize,
    pub bomb_segments: usize,

    pub prices: Prices,
    pub enemy_contact: EnemyContact,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: Board::new(SCREEN_WIDTH, SCREEN_HEIGHT, GRID_CELL_SIZE),
            starting_lives: 3,
            max_lives: 5,
            base_tick_rate: 10,
            level_points: 100,
            level_rate_step: 2,
            food_score: 10,
            food_coins: 2,
            coin_value: 5,
            coin_bonus: 15,
            coin_chance: 0.4,
            special_chance: 0.2,
            bomb_chance: 0.1,
            boost_ticks: 150,
            boost_multiplier: 1.5,
            sprint_multiplier: 2.0,
            shrink_segments: 3,
            bomb_segments: 1,
            prices: Prices::default(),
            enemy_contact: EnemyContact::OncePerTick,
        }
    }
}

impl GameConfig {
    /// Enemy roster size for a tick rate reached by levelling up.
    pub fn enemy_quota(&self, tick_rate: u32) -> usize {
        match tick_rate {
            8 => 1,
            12 => 2,
            _ => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_presets() {
        assert_eq!(Difficulty::Easy.tick_rate(), 8);
        assert_eq!(Difficulty::Medium.tick_rate(), 12);
        assert_eq!(Difficulty::Hard.tick_rate(), 18);
    }

    #[test]
    fn test_enemy_quota_table() {
        let config = GameConfig::default();
        assert_eq!(config.enemy_quota(8), 1);
        assert_eq!(config.enemy_quota(12), 2);
        assert_eq!(config.enemy_quota(10), 3);
        assert_eq!(config.enemy_quota(14), 3);
        assert_eq!(config.enemy_quota(20), 3);
    }

    #[test]
    fn test_default_board_is_grid_aligned() {
        let config = GameConfig::default();
        assert_eq!(config.board.width % config.board.cell_size, 0);
        assert_eq!(config.board.height % config.board.cell_size, 0);
        assert_eq!(config.board.columns(), 40);
        assert_eq!(config.board.rows(), 30);
    }
}
