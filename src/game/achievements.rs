use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Achievement {
    FirstCoin,
    CoinCollector,
    SnakeMaster,
    Immortal,
    SpeedMaster,
}

impl Achievement {
    pub const ALL: [Achievement; 5] = [
        Achievement::FirstCoin,
        Achievement::CoinCollector,
        Achievement::SnakeMaster,
        Achievement::Immortal,
        Achievement::SpeedMaster,
    ];

    /// Name used in the save file.
    pub fn key(self) -> &'static str {
        match self {
            Achievement::FirstCoin => "first_coin",
            Achievement::CoinCollector => "coin_collector",
            Achievement::SnakeMaster => "snake_master",
            Achievement::Immortal => "immortal",
            Achievement::SpeedMaster => "speed_master",
        }
    }
}

/// Named achievement flags. Flags only ever go from false to true.
///
/// Names outside the fixed set survive a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, bool>", into = "BTreeMap<String, bool>")]
pub struct Achievements {
    flags: BTreeMap<String, bool>,
}

impl Default for Achievements {
    fn default() -> Self {
        Self {
            flags: Achievement::ALL
                .iter()
                .map(|a| (a.key().to_string(), false))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, bool>> for Achievements {
    fn from(loaded: BTreeMap<String, bool>) -> Self {
        let mut achievements = Self::default();
        achievements.flags.extend(loaded);
        achievements
    }
}

impl From<Achievements> for BTreeMap<String, bool> {
    fn from(achievements: Achievements) -> Self {
        achievements.flags
    }
}

impl Achievements {
    pub fn is_unlocked(&self, achievement: Achievement) -> bool {
        self.flags.get(achievement.key()).copied().unwrap_or(false)
    }

    /// Returns true only when the flag flips on this call.
    pub fn unlock(&mut self, achievement: Achievement) -> bool {
        let flag = self
            .flags
            .entry(achievement.key().to_string())
            .or_insert(false);
        let newly = !*flag;
        *flag = true;
        newly
    }

    pub fn unlocked_count(&self) -> usize {
        self.flags.values().filter(|v| **v).count()
    }

    /// The fixed set in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Achievement, bool)> + '_ {
        Achievement::ALL
            .iter()
            .map(move |a| (*a, self.is_unlocked(*a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_fixed_set_locked() {
        let achievements = Achievements::default();
        for achievement in Achievement::ALL {
            assert!(!achievements.is_unlocked(achievement));
        }
        assert_eq!(achievements.unlocked_count(), 0);
    }

    #[test]
    fn test_unlock_reports_only_first_time() {
        let mut achievements = Achievements::default();
        assert!(achievements.unlock(Achievement::FirstCoin));
        assert!(!achievements.unlock(Achievement::FirstCoin));
        assert!(achievements.is_unlocked(Achievement::FirstCoin));
        assert_eq!(achievements.unlocked_count(), 1);
    }

    #[test]
    fn test_loading_partial_map_fills_defaults() {
        let json = r#"{"first_coin": true, "legacy_badge": true}"#;
        let achievements: Achievements = serde_json::from_str(json).unwrap();
        assert!(achievements.is_unlocked(Achievement::FirstCoin));
        assert!(!achievements.is_unlocked(Achievement::Immortal));

        let map: BTreeMap<String, bool> = achievements.into();
        assert_eq!(map.get("legacy_badge"), Some(&true));
        assert_eq!(map.get("speed_master"), Some(&false));
        assert_eq!(map.len(), 6);
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let mut achievements = Achievements::default();
        achievements.unlock(Achievement::SnakeMaster);
        let value = serde_json::to_value(&achievements).unwrap();
        assert_eq!(value["snake_master"], serde_json::Value::Bool(true));
        assert_eq!(value["immortal"], serde_json::Value::Bool(false));
    }
}
