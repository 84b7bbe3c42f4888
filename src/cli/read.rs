//! Story reading command

use anyhow::Result;

use playnest::content::{Narrator, ReadingState, SpeechBackend, StoryReader};
use playnest::rewards::Section;
use playnest::Config;

use super::{open_ledger, print_events, Input};

/// Terminal stand-in for a speech engine: prints what would be spoken
struct TranscriptBackend;

impl SpeechBackend for TranscriptBackend {
    fn speak(&mut self, text: &str, lang: &str, rate: f32) {
        println!("  🔊 ({} x{}) {}", lang, rate, text);
    }

    fn cancel(&mut self) {}
}

/// Speak `paragraphs` to completion. Printing a transcript is synchronous, so
/// the utterance is over as soon as `speak` returns.
fn speak_through<B: SpeechBackend>(narrator: &mut Narrator<B>, paragraphs: &[&str]) {
    narrator.stop();
    if narrator.toggle_all(paragraphs) {
        narrator.finished();
    }
}

pub async fn read_command(config: &Config, story_id: u32, narrate: bool) -> Result<()> {
    let mut reader = StoryReader::open(story_id)?;
    let mut ledger = open_ledger(config)?;
    print_events(&ledger.visit_section(Section::Stories));

    let story = reader.story();
    println!("{} {}\n", story.emoji, story.title);
    println!("[enter] next page, [b] back, [s] read aloud, [q] stop reading\n");

    let mut narrator = Narrator::new(
        TranscriptBackend,
        config.narration.lang.as_str(),
        config.narration.rate,
    );
    let mut input = Input::new();

    let events = reader.next_paragraph(&mut ledger);
    print_events(&events);

    while !reader.is_completed() {
        if let ReadingState::Reading { paragraph } = reader.state() {
            println!("({}/{})", paragraph + 1, story.paragraphs.len());
        }
        if let Some(text) = reader.current_paragraph() {
            println!("{}\n", text);
            if narrate {
                speak_through(&mut narrator, &[text]);
            }
        }

        let Some(line) = input.ask("> ").await? else {
            return Ok(());
        };
        match line.as_str() {
            "q" => return Ok(()),
            "b" => reader.previous_paragraph(),
            "s" => speak_through(&mut narrator, story.paragraphs),
            _ => {
                let events = reader.next_paragraph(&mut ledger);
                print_events(&events);
            }
        }
    }

    println!("The End!");
    if let Some(moral) = story.moral {
        println!("💡 {}", moral);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        spoken: Vec<String>,
    }

    impl SpeechBackend for Recorder {
        fn speak(&mut self, text: &str, _lang: &str, _rate: f32) {
            self.spoken.push(text.to_string());
        }

        fn cancel(&mut self) {}
    }

    #[test]
    fn test_whole_story_reads_after_page_narration() {
        let mut narrator = Narrator::new(Recorder::default(), "en-US", 0.8);
        speak_through(&mut narrator, &["Page one."]);
        assert!(!narrator.is_speaking());

        speak_through(&mut narrator, &["Page one.", "Page two."]);
        speak_through(&mut narrator, &["Page one.", "Page two."]);
        assert_eq!(
            narrator.backend().spoken,
            vec!["Page one.", "Page one. Page two.", "Page one. Page two."]
        );
    }
}
