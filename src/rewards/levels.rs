//! Level derivation and point rewards
//!
//! Levels are never stored: they are recomputed from total points on every read.

/// Points needed to climb one level
pub const POINTS_PER_LEVEL: u64 = 100;

/// Level for a point total: `floor(points / 100) + 1`
pub fn level_for_points(points: u64) -> u64 {
    points / POINTS_PER_LEVEL + 1
}

/// Progress within the current level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u64,
    /// Points earned since the start of the current level
    pub points_into_level: u64,
    /// Points still missing for the next level
    pub points_to_next: u64,
}

impl LevelProgress {
    pub fn new(points: u64) -> Self {
        let points_into_level = points % POINTS_PER_LEVEL;
        Self {
            level: level_for_points(points),
            points_into_level,
            points_to_next: POINTS_PER_LEVEL - points_into_level,
        }
    }

    /// Progress to the next level (0.0 - 1.0)
    pub fn fraction(&self) -> f32 {
        self.points_into_level as f32 / POINTS_PER_LEVEL as f32
    }
}

/// Fixed point rewards outside of per-round game scoring
pub struct PointRewards;

impl PointRewards {
    /// Awarded by every story completion, together with the counter bump
    pub const STORY_COMPLETED: u64 = 5;

    /// Extra award from the story reader when the last paragraph is reached
    pub const STORY_READING_BONUS: u64 = 15;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_points() {
        assert_eq!(level_for_points(0), 1);
        assert_eq!(level_for_points(99), 1);
        assert_eq!(level_for_points(100), 2);
        assert_eq!(level_for_points(250), 3);
        assert_eq!(level_for_points(10_000), 101);
    }

    #[test]
    fn test_level_progress() {
        let progress = LevelProgress::new(175);
        assert_eq!(progress.level, 2);
        assert_eq!(progress.points_into_level, 75);
        assert_eq!(progress.points_to_next, 25);
        assert!((progress.fraction() - 0.75).abs() < 0.01);

        let fresh = LevelProgress::new(0);
        assert_eq!(fresh.points_to_next, 100);
    }
}
