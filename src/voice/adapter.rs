use crate::app::action::Action;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoiceState {
    #[default]
    Idle,
    Listening,
    /// No recognizer configured, or the one we had died. Keyboard-only from here on.
    Unavailable,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Streams finalized utterances into `tx` until the source ends or `tx` is closed.
    async fn listen(&self, tx: mpsc::Sender<String>) -> Result<()>;
}

#[cfg_attr(test, mockall::automock)]
pub trait SpeechSynthesizer: Send + Sync {
    /// Queues `text` for playback; must not wait for playback to finish.
    fn speak(&self, text: &str) -> Result<()>;
}

pub struct RecognitionAdapter {
    recognizer: Option<Arc<dyn SpeechRecognizer>>,
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    listening: Arc<AtomicBool>,
    available: Arc<AtomicBool>,
}

impl RecognitionAdapter {
    pub fn new(
        recognizer: Option<Arc<dyn SpeechRecognizer>>,
        synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    ) -> Self {
        let available = recognizer.is_some();
        Self {
            recognizer,
            synthesizer,
            listening: Arc::new(AtomicBool::new(false)),
            available: Arc::new(AtomicBool::new(available)),
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self::new(None, None)
    }

    /// Begins continuous listening in the background. Utterances heard while the
    /// adapter is idle are discarded; the rest reach the UI loop as `Action::Utterance`.
    pub fn start(&self, tx: mpsc::Sender<Action>) {
        let Some(recognizer) = self.recognizer.clone() else {
            info!("no speech recognizer configured, voice commands disabled");
            return;
        };

        let (utterance_tx, mut utterance_rx) = mpsc::channel::<String>(16);

        let available = self.available.clone();
        let failure_tx = tx.clone();
        tokio::spawn(async move {
            let reason = match recognizer.listen(utterance_tx).await {
                Ok(()) => "speech recognizer exited".to_string(),
                Err(e) => format!("{e:#}"),
            };
            warn!("voice commands unavailable: {reason}");
            available.store(false, Ordering::SeqCst);
            let _ = failure_tx.send(Action::VoiceUnavailable(reason)).await;
        });

        let listening = self.listening.clone();
        tokio::spawn(async move {
            while let Some(utterance) = utterance_rx.recv().await {
                if !listening.load(Ordering::SeqCst) {
                    debug!(%utterance, "dropping utterance while idle");
                    continue;
                }
                if tx.send(Action::Utterance(utterance)).await.is_err() {
                    break;
                }
            }
        });
    }

    /// Idle -> Listening. Called when a page mounts.
    pub fn mount(&self) {
        self.set_listening(true);
    }

    /// Listening -> Idle. Called when the page unmounts.
    pub fn unmount(&self) {
        self.set_listening(false);
    }

    pub fn set_listening(&self, listening: bool) {
        let listening = listening && self.available.load(Ordering::SeqCst);
        self.listening.store(listening, Ordering::SeqCst);
    }

    #[must_use]
    pub fn state(&self) -> VoiceState {
        if !self.available.load(Ordering::SeqCst) {
            VoiceState::Unavailable
        } else if self.listening.load(Ordering::SeqCst) {
            VoiceState::Listening
        } else {
            VoiceState::Idle
        }
    }

    /// Best-effort audible feedback. Never fails the caller.
    pub fn speak(&self, text: &str) {
        match &self.synthesizer {
            Some(synthesizer) => {
                if let Err(e) = synthesizer.speak(text) {
                    warn!("speech synthesis failed: {e:#}");
                }
            }
            None => debug!(text, "no speech synthesizer configured"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct ScriptedRecognizer(Vec<&'static str>);

    #[async_trait]
    impl SpeechRecognizer for ScriptedRecognizer {
        async fn listen(&self, tx: mpsc::Sender<String>) -> Result<()> {
            for line in &self.0 {
                tx.send((*line).to_string()).await?;
            }
            std::future::pending::<()>().await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_mounted_adapter_forwards_utterances() {
        let adapter =
            RecognitionAdapter::new(Some(Arc::new(ScriptedRecognizer(vec!["Edit Job"]))), None);
        adapter.mount();
        assert_eq!(adapter.state(), VoiceState::Listening);

        let (tx, mut rx) = mpsc::channel(4);
        adapter.start(tx);

        let action = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(action, Action::Utterance("Edit Job".to_string()));
    }

    #[tokio::test]
    async fn test_idle_adapter_drops_utterances() {
        let adapter =
            RecognitionAdapter::new(Some(Arc::new(ScriptedRecognizer(vec!["yes"]))), None);
        assert_eq!(adapter.state(), VoiceState::Idle);

        let (tx, mut rx) = mpsc::channel(4);
        adapter.start(tx);

        let received = tokio::time::timeout(Duration::from_millis(200), rx.recv()).await;
        assert!(received.is_err(), "expected no action, got {received:?}");
    }

    #[tokio::test]
    async fn test_recognizer_failure_degrades_to_unavailable() {
        let mut mock = MockSpeechRecognizer::new();
        mock.expect_listen()
            .returning(|_| Err(anyhow::anyhow!("microphone permission denied")));

        let adapter = RecognitionAdapter::new(Some(Arc::new(mock)), None);
        adapter.mount();
        let (tx, mut rx) = mpsc::channel(4);
        adapter.start(tx);

        let action = rx.recv().await.unwrap();
        match action {
            Action::VoiceUnavailable(reason) => assert!(reason.contains("permission denied")),
            other => panic!("Expected Action::VoiceUnavailable, got {other:?}"),
        }
        assert_eq!(adapter.state(), VoiceState::Unavailable);

        adapter.mount();
        assert_eq!(adapter.state(), VoiceState::Unavailable);
    }

    #[test]
    fn test_disabled_adapter_never_listens() {
        let adapter = RecognitionAdapter::disabled();
        adapter.mount();
        assert_eq!(adapter.state(), VoiceState::Unavailable);
        // No synthesizer: speaking is a silent no-op.
        adapter.speak("Are you sure?");
    }

    #[test]
    fn test_speak_swallows_synthesizer_errors() {
        let mut mock = MockSpeechSynthesizer::new();
        mock.expect_speak()
            .with(mockall::predicate::eq("Are you sure?"))
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("no audio device")));

        let adapter = RecognitionAdapter::new(None, Some(Arc::new(mock)));
        adapter.speak("Are you sure?");
    }
}
