//! Completion tone

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle};

use crate::config::Tone;
use crate::error::Result;

const VOLUME: f32 = 0.2;

/// Holds the default audio output open for the life of the process.
///
/// The stream stops playing as soon as it is dropped, so the beeper has to
/// outlive every tone it starts.
pub struct Beeper {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Beeper {
    pub fn open() -> Result<Self> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }

    /// Start a sine tone. Returns right away; the tone plays on the audio
    /// thread.
    pub fn play(&self, tone: Tone) -> Result<()> {
        let source = SineWave::new(tone.frequency_hz as f32)
            .take_duration(tone.duration)
            .amplify(VOLUME);
        self.handle.play_raw(source)?;
        Ok(())
    }
}
