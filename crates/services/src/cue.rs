//! Short synthesized tones played after a quiz answer.

use std::f64::consts::PI;
use std::io::Write;

use tour_core::model::QuizOutcome;

use crate::error::CueError;

pub const SAMPLE_RATE: u32 = 44_100;

/// A sine tone described by pitch, length and loudness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency_hz: f64,
    pub duration_ms: u32,
    pub volume: f64,
}

impl Tone {
    pub const CORRECT: Self = Self {
        frequency_hz: 880.0,
        duration_ms: 200,
        volume: 0.7,
    };

    pub const INCORRECT: Self = Self {
        frequency_hz: 440.0,
        duration_ms: 400,
        volume: 0.5,
    };

    #[must_use]
    pub fn for_outcome(outcome: QuizOutcome) -> Self {
        if outcome.is_correct() {
            Self::CORRECT
        } else {
            Self::INCORRECT
        }
    }

    #[must_use]
    pub fn sample_count(&self, sample_rate: u32) -> usize {
        (u64::from(sample_rate) * u64::from(self.duration_ms) / 1000) as usize
    }

    /// Signed 8-bit samples: `sin(i / (rate / f) * 2π) * 127 * volume`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn samples(&self, sample_rate: u32) -> Vec<i8> {
        let period = f64::from(sample_rate) / self.frequency_hz;
        (0..self.sample_count(sample_rate))
            .map(|i| {
                let phase = i as f64 / period * 2.0 * PI;
                (phase.sin() * 127.0 * self.volume).round() as i8
            })
            .collect()
    }

    /// Encode as an 8-bit unsigned mono RIFF/WAVE file.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn to_wav(&self) -> Vec<u8> {
        let data: Vec<u8> = self
            .samples(SAMPLE_RATE)
            .into_iter()
            .map(|sample| (i16::from(sample) + 128) as u8)
            .collect();
        let data_len = data.len() as u32;

        let mut wav = Vec::with_capacity(44 + data.len());
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(36 + data_len).to_le_bytes());
        wav.extend_from_slice(b"WAVE");
        wav.extend_from_slice(b"fmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
        wav.extend_from_slice(&1u16.to_le_bytes()); // mono
        wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
        wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes()); // byte rate
        wav.extend_from_slice(&1u16.to_le_bytes()); // block align
        wav.extend_from_slice(&8u16.to_le_bytes());
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&data_len.to_le_bytes());
        wav.extend_from_slice(&data);
        wav
    }
}

/// Fire-and-forget feedback cues. Implementations never fail the caller.
pub trait SoundCue: Send + Sync {
    fn play_correct(&self);
    fn play_incorrect(&self);

    fn play_outcome(&self, outcome: QuizOutcome) {
        if outcome.is_correct() {
            self.play_correct();
        } else {
            self.play_incorrect();
        }
    }
}

/// Something that can render a `Tone`.
pub trait ToneSink: Send + Sync {
    /// # Errors
    ///
    /// Returns `CueError` if the tone could not be played.
    fn play_tone(&self, tone: &Tone) -> Result<(), CueError>;
}

/// `SoundCue` backed by a `ToneSink`, falling back to the terminal bell.
#[derive(Debug)]
pub struct ToneCue<S> {
    sink: S,
}

impl<S: ToneSink> ToneCue<S> {
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn play(&self, tone: &Tone) {
        if let Err(err) = self.sink.play_tone(tone) {
            tracing::warn!(error = %err, frequency = tone.frequency_hz, "tone failed, ringing bell");
            let mut stderr = std::io::stderr();
            let _ = stderr.write_all(b"\x07");
            let _ = stderr.flush();
        }
    }
}

impl<S: ToneSink> SoundCue for ToneCue<S> {
    fn play_correct(&self) {
        self.play(&Tone::CORRECT);
    }

    fn play_incorrect(&self) {
        self.play(&Tone::INCORRECT);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use tour_core::model::QuizChoice;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        played: Mutex<Vec<Tone>>,
        fail: bool,
    }

    impl ToneSink for RecordingSink {
        fn play_tone(&self, tone: &Tone) -> Result<(), CueError> {
            self.played.lock().unwrap().push(*tone);
            if self.fail {
                Err(CueError::Unavailable)
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn outcome_selects_tone() {
        let cue = ToneCue::new(RecordingSink::default());
        cue.play_outcome(QuizOutcome::Correct);
        cue.play_outcome(QuizOutcome::Incorrect {
            correct: QuizChoice::SECOND,
        });
        let played = cue.sink().played.lock().unwrap().clone();
        assert_eq!(played, vec![Tone::CORRECT, Tone::INCORRECT]);
    }

    #[test]
    fn failing_sink_is_swallowed() {
        let cue = ToneCue::new(RecordingSink {
            fail: true,
            ..RecordingSink::default()
        });
        cue.play_incorrect();
        assert_eq!(cue.sink().played.lock().unwrap().len(), 1);
    }

    #[test]
    fn samples_follow_sine_shape() {
        let samples = Tone::CORRECT.samples(SAMPLE_RATE);
        assert_eq!(samples.len(), 8_820);
        assert_eq!(samples[0], 0);
        let peak = samples.iter().map(|s| i16::from(*s).abs()).max().unwrap();
        assert!(peak <= 89 && peak >= 85, "peak {peak}");
    }

    #[test]
    fn wav_header_describes_unsigned_mono() {
        let wav = Tone::INCORRECT.to_wav();
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 1);
        assert_eq!(u16::from_le_bytes([wav[34], wav[35]]), 8);
        assert_eq!(wav.len(), 44 + 17_640);
        assert_eq!(wav[44], 128);
    }
}
