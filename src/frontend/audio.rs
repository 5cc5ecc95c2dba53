use super::assets::Clips;
use macroquad::audio::{PlaySoundParams, Sound, play_sound, stop_sound};
use snake_attack::AudioCue;
use tracing::trace;

/// Plays the clip that belongs to each cue the game raised.
pub struct AudioPlayer {
    clips: Clips,
}

impl AudioPlayer {
    pub fn new(clips: Clips) -> Self {
        Self { clips }
    }

    pub fn play(&self, cues: &[AudioCue]) {
        for &cue in cues {
            trace!(?cue, "audio cue");
            match cue {
                AudioCue::BackgroundStart => self.start(self.clips.background.as_ref(), true),
                AudioCue::BackgroundStop => {
                    if let Some(sound) = &self.clips.background {
                        stop_sound(sound);
                    }
                }
                AudioCue::DirectionChanged => self.start(self.clips.direction_change.as_ref(), false),
                AudioCue::TargetCollected => self.start(self.clips.target_collect.as_ref(), false),
                AudioCue::GameOver => self.start(self.clips.game_over.as_ref(), false),
            }
        }
    }

    fn start(&self, sound: Option<&Sound>, looped: bool) {
        if let Some(sound) = sound {
            play_sound(sound, PlaySoundParams { looped, volume: 1.0 });
        }
    }
}
