//! Paragraph-by-paragraph story reader

use tracing::info;

use super::catalog::{find_story, Story};
use crate::error::ContentError;
use crate::rewards::{PointRewards, RewardEvent, RewardsLedger};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingState {
    NotStarted,
    Reading { paragraph: usize },
    Completed,
}

pub struct StoryReader {
    story: &'static Story,
    state: ReadingState,
}

impl StoryReader {
    pub fn open(story_id: u32) -> Result<Self, ContentError> {
        Ok(Self::new(find_story(story_id)?))
    }

    pub fn new(story: &'static Story) -> Self {
        Self {
            story,
            state: ReadingState::NotStarted,
        }
    }

    pub fn story(&self) -> &'static Story {
        self.story
    }

    pub fn state(&self) -> ReadingState {
        self.state
    }

    /// Paragraph currently on screen
    pub fn current_paragraph(&self) -> Option<&'static str> {
        match self.state {
            ReadingState::Reading { paragraph } => self.story.paragraphs.get(paragraph).copied(),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state == ReadingState::Completed
    }

    /// Move to the next paragraph. Going past the last one completes the
    /// story, which is credited to the ledger only the first time.
    pub fn next_paragraph(&mut self, ledger: &mut RewardsLedger) -> Vec<RewardEvent> {
        let next = match self.state {
            ReadingState::NotStarted => 0,
            ReadingState::Reading { paragraph } => paragraph + 1,
            ReadingState::Completed => return Vec::new(),
        };

        if next < self.story.paragraphs.len() {
            self.state = ReadingState::Reading { paragraph: next };
            return Vec::new();
        }

        self.state = ReadingState::Completed;
        info!(story = self.story.id, title = self.story.title, "Story completed");
        let mut events = ledger.increment_stories_read();
        events.extend(ledger.add_points(PointRewards::STORY_READING_BONUS));
        events
    }

    /// Step back one paragraph; no effect before the first or after completion
    pub fn previous_paragraph(&mut self) {
        if let ReadingState::Reading { paragraph } = self.state {
            if paragraph > 0 {
                self.state = ReadingState::Reading {
                    paragraph: paragraph - 1,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewards::BadgeId;

    fn read_to_end(reader: &mut StoryReader, ledger: &mut RewardsLedger) -> Vec<RewardEvent> {
        let mut events = Vec::new();
        while !reader.is_completed() {
            events.extend(reader.next_paragraph(ledger));
        }
        events
    }

    #[test]
    fn test_reading_walks_paragraphs() {
        let mut ledger = RewardsLedger::in_memory();
        let mut reader = StoryReader::open(2).unwrap();
        assert_eq!(reader.current_paragraph(), None);

        reader.next_paragraph(&mut ledger);
        assert_eq!(reader.state(), ReadingState::Reading { paragraph: 0 });
        assert_eq!(reader.current_paragraph(), Some(reader.story().paragraphs[0]));

        reader.next_paragraph(&mut ledger);
        reader.previous_paragraph();
        assert_eq!(reader.state(), ReadingState::Reading { paragraph: 0 });
        reader.previous_paragraph();
        assert_eq!(reader.state(), ReadingState::Reading { paragraph: 0 });
        assert_eq!(ledger.points(), 0);
    }

    #[test]
    fn test_completion_awards_once() {
        let mut ledger = RewardsLedger::in_memory();
        let mut reader = StoryReader::open(1).unwrap();
        let events = read_to_end(&mut reader, &mut ledger);

        assert_eq!(ledger.stories_read(), 1);
        assert_eq!(ledger.points(), 20);
        assert!(events.contains(&RewardEvent::PointsAwarded {
            amount: 15,
            total: 20
        }));
        assert!(ledger.badge(BadgeId::FirstStory).unwrap().earned);

        assert!(reader.next_paragraph(&mut ledger).is_empty());
        assert_eq!(ledger.stories_read(), 1);
        assert_eq!(ledger.points(), 20);
    }

    #[test]
    fn test_missing_story() {
        assert!(StoryReader::open(404).is_err());
    }
}
