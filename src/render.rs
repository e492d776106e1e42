use ggez::graphics::{self, Canvas, Color, DrawMode, DrawParam, Mesh, Rect, Text};
use ggez::mint::Point2;
use ggez::{Context, GameResult};

use crate::config::{Difficulty, FONT_NAME};
use crate::game::{Phase, Position, Rainbow, Session, Tint};

// Colors
pub const BACKGROUND_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
const PURPLE: Color = Color::new(0.5, 0.0, 0.5, 1.0);
const ORANGE: Color = Color::new(1.0, 0.65, 0.0, 1.0);
const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);
const SNAKE_HEAD_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const SNAKE_BODY_COLOR: Color = Color::new(0.0, 0.78, 0.0, 1.0);
const RAINBOW_COLORS: [Color; 7] = [
    Color::new(1.0, 0.0, 0.0, 1.0),
    Color::new(1.0, 0.65, 0.0, 1.0),
    Color::new(1.0, 1.0, 0.0, 1.0),
    Color::new(0.0, 1.0, 0.0, 1.0),
    Color::new(0.0, 0.0, 1.0, 1.0),
    Color::new(0.29, 0.0, 0.51, 1.0),
    Color::new(0.58, 0.0, 0.83, 1.0),
];

/// How far the rainbow palette shifts per tick.
const RAINBOW_SPEED: f32 = 0.1;

const TEXT_SCALE: f32 = 24.0;
const SMALL_TEXT_SCALE: f32 = 18.0;

pub fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Red => RED,
        Tint::Yellow => YELLOW,
        Tint::Blue => BLUE,
        Tint::Purple => PURPLE,
        Tint::Orange => ORANGE,
    }
}

/// Colour of segment `index` while rainbow mode cycles by `phase`.
pub fn rainbow_color(index: usize, phase: f32) -> Color {
    let slot = (index as f32 + phase) as usize % RAINBOW_COLORS.len();
    RAINBOW_COLORS[slot]
}

/// Next rainbow phase, kept within one pass of the palette.
pub fn advance_rainbow(phase: f32) -> f32 {
    (phase + RAINBOW_SPEED) % RAINBOW_COLORS.len() as f32
}

/// Shop line under the board. A shield that is already up cannot be bought
/// again, so its price is replaced by its state.
pub fn shop_hint(session: &Session) -> String {
    let prices = session.config().prices;
    let shield = if session.effects.shield.is_up() {
        "S: shield up".to_string()
    } else {
        format!("S: shield {}", prices.shield)
    };
    format!(
        "B: life {}  {}  F: freeze {}  H: rainbow",
        prices.extra_life, shield, prices.freeze
    )
}

pub fn draw_frame(ctx: &mut Context, canvas: &mut Canvas, session: &Session, rainbow_phase: f32) -> GameResult {
    match session.phase {
        Phase::SelectingDifficulty => draw_difficulty_menu(canvas, session),
        Phase::Playing => draw_game(ctx, canvas, session, rainbow_phase),
        Phase::GameOver => {
            draw_game(ctx, canvas, session, rainbow_phase)?;
            let width = session.config().board.width as f32;
            let height = session.config().board.height as f32;
            draw_label(
                canvas,
                "Game over! Press R to restart",
                width / 2.0 - 190.0,
                height / 2.0,
                TEXT_SCALE,
                RED,
            );
            Ok(())
        }
    }
}

fn draw_difficulty_menu(canvas: &mut Canvas, session: &Session) -> GameResult {
    let width = session.config().board.width as f32;
    let height = session.config().board.height as f32;

    draw_label(
        canvas,
        "Select difficulty:",
        width / 2.0 - 120.0,
        height / 2.0 - 60.0,
        TEXT_SCALE,
        WHITE,
    );
    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        draw_label(
            canvas,
            &format!("{} - {}", i + 1, difficulty.label()),
            width / 2.0 - 120.0,
            height / 2.0 - 30.0 + i as f32 * 30.0,
            TEXT_SCALE,
            WHITE,
        );
    }
    Ok(())
}

fn draw_game(ctx: &mut Context, canvas: &mut Canvas, session: &Session, rainbow_phase: f32) -> GameResult {
    let cell = session.config().board.cell_size;

    for (i, segment) in session.snake.segments().enumerate() {
        let color = match session.snake.rainbow {
            Rainbow::On => rainbow_color(i, rainbow_phase),
            Rainbow::Off if i == 0 => SNAKE_HEAD_COLOR,
            Rainbow::Off => SNAKE_BODY_COLOR,
        };
        draw_cell(ctx, canvas, *segment, cell, color)?;
    }

    draw_cell(ctx, canvas, session.food.position, cell, tint_color(session.food.tint))?;
    if let Some(special) = session.special_food {
        draw_cell(ctx, canvas, special.position, cell, tint_color(special.effect.tint()))?;
    }
    if let Some(coin) = session.coin {
        draw_cell(ctx, canvas, coin, cell, tint_color(Tint::Yellow))?;
    }
    if let Some(bomb) = session.bomb {
        draw_cell(ctx, canvas, bomb, cell, tint_color(Tint::Purple))?;
    }
    for enemy in &session.enemies {
        draw_cell(ctx, canvas, enemy.position(), cell, CYAN)?;
    }

    draw_hud(canvas, session);
    Ok(())
}

fn draw_hud(canvas: &mut Canvas, session: &Session) {
    let shield = if session.effects.shield.is_up() { "Active" } else { "None" };
    let speed = if session.effects.boost.is_active() { "Boosted" } else { "Normal" };
    let lines = [
        format!("Score: {} Record: {}", session.score, session.high_score),
        format!("Coins: {}", session.coins),
        format!("Lives: {} Level: {}", session.lives, session.level),
        format!("Shield: {}", shield),
        format!("Speed: {}", speed),
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_label(canvas, line, 10.0, 10.0 + i as f32 * 25.0, TEXT_SCALE, WHITE);
    }

    let height = session.config().board.height as f32;
    let width = session.config().board.width as f32;
    draw_label(canvas, &shop_hint(session), 10.0, height - 25.0, SMALL_TEXT_SCALE, WHITE);

    draw_label(canvas, "Achievements:", width - 220.0, height - 150.0, SMALL_TEXT_SCALE, ORANGE);
    for (i, (achievement, unlocked)) in session.achievements.iter().enumerate() {
        let mark = if unlocked { "+" } else { "-" };
        draw_label(
            canvas,
            &format!("{}: {}", achievement.key(), mark),
            width - 220.0,
            height - 125.0 + i as f32 * 20.0,
            SMALL_TEXT_SCALE,
            ORANGE,
        );
    }
}

fn draw_cell(ctx: &mut Context, canvas: &mut Canvas, pos: Position, cell: i16, color: Color) -> GameResult {
    let rect = Rect::new(pos.x as f32, pos.y as f32, (cell - 1) as f32, (cell - 1) as f32);
    canvas.draw(
        &Mesh::new_rectangle(ctx, DrawMode::fill(), rect, color)?,
        DrawParam::default(),
    );
    Ok(())
}

fn draw_label(canvas: &mut Canvas, text: &str, x: f32, y: f32, scale: f32, color: Color) {
    let mut text = Text::new(text);
    text.set_font(FONT_NAME).set_scale(scale);
    canvas.draw(
        &text,
        DrawParam::default()
            .dest(Point2 { x, y })
            .color(color),
    );
}

pub fn new_canvas(ctx: &mut Context) -> Canvas {
    graphics::Canvas::from_frame(ctx, BACKGROUND_COLOR)
}
