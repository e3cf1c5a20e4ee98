use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

/// Smallest grid the starting body fits on with room to move.
pub const MIN_SIDE: u16 = 4;
pub const MAX_SIDE: u16 = 64;

/// What running into your own body does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CollisionPolicy {
    /// Start a fresh game straight away
    #[default]
    Restart,
    /// Stop and show game over until restarted
    Halt,
}

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "snekgrid")]
#[command(version, about = "Snake on a wrap-around grid")]
pub struct Config {
    /// Side length of the square grid, in cells
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u16).range(MIN_SIDE as i64..=MAX_SIDE as i64))]
    pub side: u16,

    /// Simulation ticks per second
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=60))]
    pub fps: u32,

    /// What happens when the snake runs into itself
    #[arg(long, value_enum, default_value_t = CollisionPolicy::Restart)]
    pub on_collision: CollisionPolicy,

    /// Seed for food placement (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where the log is written
    #[arg(long, default_value = "snekgrid.log")]
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            side: 15,
            fps: 10,
            on_collision: CollisionPolicy::Restart,
            seed: None,
            log_file: PathBuf::from("snekgrid.log"),
        }
    }
}

impl Config {
    /// Grid side the game actually uses, forced into `MIN_SIDE..=MAX_SIDE`.
    pub fn grid_side(&self) -> u16 {
        self.side.clamp(MIN_SIDE, MAX_SIDE)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_default() {
        let config = Config::try_parse_from(["snekgrid"]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::try_parse_from([
            "snekgrid",
            "--side",
            "30",
            "--fps",
            "20",
            "--on-collision",
            "halt",
            "--seed",
            "99",
        ])
        .unwrap();

        assert_eq!(config.side, 30);
        assert_eq!(config.tick_rate(), Duration::from_millis(50));
        assert_eq!(config.on_collision, CollisionPolicy::Halt);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_cli_rejects_bad_values() {
        assert!(Config::try_parse_from(["snekgrid", "--side", "3"]).is_err());
        assert!(Config::try_parse_from(["snekgrid", "--side", "65"]).is_err());
        assert!(Config::try_parse_from(["snekgrid", "--fps", "0"]).is_err());
        assert!(Config::try_parse_from(["snekgrid", "--on-collision", "explode"]).is_err());
    }

    #[test]
    fn test_grid_side_clamped() {
        let mut config = Config::default();
        assert_eq!(config.grid_side(), 15);
        config.side = 1;
        assert_eq!(config.grid_side(), MIN_SIDE);
        config.side = u16::MAX;
        assert_eq!(config.grid_side(), MAX_SIDE);
    }

    #[test]
    fn test_max_side_accepted() {
        let side = MAX_SIDE.to_string();
        let config = Config::try_parse_from(["snekgrid", "--side", side.as_str()]).unwrap();
        assert_eq!(config.side, MAX_SIDE);
    }

    #[test]
    fn test_min_side_accepted() {
        let side = MIN_SIDE.to_string();
        let config = Config::try_parse_from(["snekgrid", "--side", side.as_str()]).unwrap();
        assert_eq!(config.side, MIN_SIDE);
    }
}
