// src/capability.rs
//
// Side effects the core hands off: speech playback and clipboard copy.
// Front ends pick the implementation; the rest of the crate only sees the traits.

use std::process::{Child, Command, Stdio};

use crate::config::consts::{PITCH_MIN, SPEECH_BASE_WPM, SPEECH_PROGRAM};
use crate::config::options::VoiceSettings;
use crate::error::{Error, Result};

pub trait Speaker {
    /// Start reading `text` aloud. Any playback already running is stopped.
    fn speak(&mut self, text: &str, voice: VoiceSettings) -> Result<()>;
    fn stop(&mut self);
}

pub trait Clipboard {
    fn copy_text(&mut self, text: &str);
}

/// Silent speaker for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn speak(&mut self, text: &str, voice: VoiceSettings) -> Result<()> {
        logd!("Speech (muted): {} chars at rate {:.2}", text.chars().count(), voice.rate());
        Ok(())
    }
    fn stop(&mut self) {}
}

/// Speaks through an external program taking espeak-style flags
/// (`-s <words per minute> -p <pitch 0-99> <text>`).
#[derive(Debug)]
pub struct CommandSpeaker {
    program: String,
    child: Option<Child>,
}

impl Default for CommandSpeaker {
    fn default() -> Self {
        Self::new(SPEECH_PROGRAM)
    }
}

impl CommandSpeaker {
    pub fn new(program: &str) -> Self {
        Self { program: s!(program), child: None }
    }

    pub fn is_playing(&mut self) -> bool {
        match self.child.as_mut() {
            Some(c) => matches!(c.try_wait(), Ok(None)),
            None => false,
        }
    }
}

/// Flags for a voice: rate scales the base words-per-minute, pitch maps
/// 0.5..=1.5 onto 0..=99.
pub fn speech_args(voice: VoiceSettings) -> [String; 4] {
    let wpm = (SPEECH_BASE_WPM * voice.rate()).round() as u32;
    let pitch = ((voice.pitch() - PITCH_MIN) * 99.0).round().clamp(0.0, 99.0) as u32;
    [s!("-s"), wpm.to_string(), s!("-p"), pitch.to_string()]
}

impl Speaker for CommandSpeaker {
    fn speak(&mut self, text: &str, voice: VoiceSettings) -> Result<()> {
        self.stop();
        if text.trim().is_empty() {
            return Ok(());
        }
        let child = Command::new(&self.program)
            .args(speech_args(voice))
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| Error::Speech { program: self.program.clone(), source })?;
        logf!("Speech: {} ({} chars)", self.program, text.chars().count());
        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if matches!(child.try_wait(), Ok(None)) {
                let _ = child.kill();
                logd!("Speech stopped");
            }
            let _ = child.wait();
        }
    }
}

impl Drop for CommandSpeaker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Keeps copied text in memory (CLI and tests).
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub last: Option<String>,
    pub copies: usize,
}

impl Clipboard for MemoryClipboard {
    fn copy_text(&mut self, text: &str) {
        self.last = Some(s!(text));
        self.copies += 1;
    }
}
