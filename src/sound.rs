use ggez::audio::{self, SoundSource};
use ggez::Context;
use log::warn;

use crate::game::GameEvent;

pub const BUY_SOUND: &str = "/sounds/buy_item.flac";
pub const COLLISION_SOUND: &str = "/sounds/collision.wav";
pub const FOOD_SOUND: &str = "/sounds/food_collect.wav";

/// Sound effects. Each one is optional: a sound that fails to load stays
/// silent for the rest of the run.
pub struct Sounds {
    buy: Option<audio::Source>,
    collision: Option<audio::Source>,
    food: Option<audio::Source>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Buy,
    Collision,
    Food,
}

impl Cue {
    pub fn for_event(event: &GameEvent) -> Option<Cue> {
        match event {
            GameEvent::Purchased(_) => Some(Cue::Buy),
            GameEvent::LifeLost(_) => Some(Cue::Collision),
            GameEvent::AteFood => Some(Cue::Food),
            _ => None,
        }
    }
}

impl Sounds {
    pub fn load(ctx: &mut Context) -> Self {
        Sounds {
            buy: Self::load_one(ctx, BUY_SOUND),
            collision: Self::load_one(ctx, COLLISION_SOUND),
            food: Self::load_one(ctx, FOOD_SOUND),
        }
    }

    fn load_one(ctx: &mut Context, path: &str) -> Option<audio::Source> {
        match audio::Source::new(ctx, path) {
            Ok(source) => Some(source),
            Err(e) => {
                warn!("Sound {} disabled: {}", path, e);
                None
            }
        }
    }

    pub fn play(&mut self, ctx: &mut Context, cue: Cue) {
        let source = match cue {
            Cue::Buy => self.buy.as_mut(),
            Cue::Collision => self.collision.as_mut(),
            Cue::Food => self.food.as_mut(),
        };
        if let Some(source) = source {
            if let Err(e) = source.play_detached(ctx) {
                warn!("Failed to play {:?}: {}", cue, e);
            }
        }
    }
}
