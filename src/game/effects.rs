//! Timed and toggled effects, each modelled as its own small state set.

/// Speed boost granted by the blue special food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedBoost {
    #[default]
    Inactive,
    Active { remaining: u32 },
}

impl SpeedBoost {
    pub fn is_active(&self) -> bool {
        matches!(self, SpeedBoost::Active { .. })
    }

    /// Counts one tick down. Returns true on the tick the boost runs out.
    pub fn tick(&mut self) -> bool {
        match *self {
            SpeedBoost::Inactive => false,
            SpeedBoost::Active { remaining } if remaining <= 1 => {
                *self = SpeedBoost::Inactive;
                true
            }
            SpeedBoost::Active { remaining } => {
                *self = SpeedBoost::Active {
                    remaining: remaining - 1,
                };
                false
            }
        }
    }

    pub fn multiplier(&self, boosted: f32) -> f32 {
        if self.is_active() {
            boosted
        } else {
            1.0
        }
    }
}

/// One-hit protection against enemies. Holds at most one charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shield {
    #[default]
    Down,
    Up,
}

impl Shield {
    pub fn is_up(&self) -> bool {
        *self == Shield::Up
    }

    /// Spends the charge if there is one.
    pub fn absorb(&mut self) -> bool {
        let was_up = self.is_up();
        *self = Shield::Down;
        was_up
    }
}

/// Purely visual snake colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rainbow {
    #[default]
    Off,
    On,
}

impl Rainbow {
    pub fn toggled(self) -> Rainbow {
        match self {
            Rainbow::Off => Rainbow::On,
            Rainbow::On => Rainbow::Off,
        }
    }
}

/// Session-level effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Effects {
    pub boost: SpeedBoost,
    pub shield: Shield,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boost_counts_down_and_expires() {
        let mut boost = SpeedBoost::Active { remaining: 3 };
        assert!(!boost.tick());
        assert!(!boost.tick());
        assert_eq!(boost, SpeedBoost::Active { remaining: 1 });
        assert!(boost.tick());
        assert_eq!(boost, SpeedBoost::Inactive);
        assert!(!boost.tick());
    }

    #[test]
    fn test_boost_multiplier() {
        assert_eq!(SpeedBoost::Inactive.multiplier(1.5), 1.0);
        assert_eq!(SpeedBoost::Active { remaining: 10 }.multiplier(1.5), 1.5);
    }

    #[test]
    fn test_shield_absorbs_once() {
        let mut shield = Shield::Up;
        assert!(shield.absorb());
        assert!(!shield.is_up());
        assert!(!shield.absorb());
    }

    #[test]
    fn test_rainbow_toggle() {
        assert_eq!(Rainbow::Off.toggled(), Rainbow::On);
        assert_eq!(Rainbow::On.toggled(), Rainbow::Off);
    }
}
