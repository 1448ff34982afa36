//! Voice search.

use common::{ShellError, ShellResult};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

/// How long a voice search waits for speech by default.
pub const DEFAULT_LISTEN_TIMEOUT: Duration = Duration::from_secs(5);

/// Speech-to-text backend.
pub trait SpeechRecognizer {
    /// Block until a phrase is recognized or `timeout` elapses.
    fn listen(&mut self, timeout: Duration) -> ShellResult<String>;
}

/// Recognizer fed with transcripts from another source, e.g. a speech
/// service callback or the console.
pub struct ChannelRecognizer {
    receiver: Receiver<String>,
}

impl ChannelRecognizer {
    /// Create a recognizer and the sender that feeds it.
    pub fn new() -> (Self, Sender<String>) {
        let (sender, receiver) = mpsc::channel();
        (Self { receiver }, sender)
    }
}

impl SpeechRecognizer for ChannelRecognizer {
    fn listen(&mut self, timeout: Duration) -> ShellResult<String> {
        match self.receiver.recv_timeout(timeout) {
            Ok(text) if text.trim().is_empty() => Err(ShellError::speech("could not understand audio")),
            Ok(text) => Ok(text.trim().to_string()),
            Err(RecvTimeoutError::Timeout) => Err(ShellError::timeout("no speech detected")),
            Err(RecvTimeoutError::Disconnected) => Err(ShellError::speech("microphone unavailable")),
        }
    }
}
