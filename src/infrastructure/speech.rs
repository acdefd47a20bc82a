use crate::app::config::VoiceConfig;
use crate::voice::adapter::{RecognitionAdapter, SpeechRecognizer, SpeechSynthesizer};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Speech-to-text through an external program that prints one finalized
/// utterance per line on stdout.
#[derive(Debug, Clone)]
pub struct ProcessRecognizer {
    program: String,
    args: Vec<String>,
}

impl ProcessRecognizer {
    #[must_use]
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

#[async_trait]
impl SpeechRecognizer for ProcessRecognizer {
    async fn listen(&self, tx: mpsc::Sender<String>) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to start speech recognizer `{}`", self.program))?;
        info!(program = %self.program, "speech recognizer started");

        let stdout = child
            .stdout
            .take()
            .context("speech recognizer has no stdout")?;
        let mut lines = BufReader::new(stdout).lines();

        while let Some(line) = lines.next_line().await? {
            let utterance = line.trim();
            if utterance.is_empty() {
                continue;
            }
            debug!(%utterance, "utterance recognised");
            if tx.send(utterance.to_string()).await.is_err() {
                return Ok(());
            }
        }

        let status = child.wait().await?;
        if !status.success() {
            bail!("speech recognizer exited with {status}");
        }
        Ok(())
    }
}

/// Text-to-speech through an external program (`espeak`, `say`, ...) that takes
/// the text as its last argument.
#[derive(Debug, Clone)]
pub struct ProcessSynthesizer {
    program: String,
    args: Vec<String>,
}

impl ProcessSynthesizer {
    #[must_use]
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl SpeechSynthesizer for ProcessSynthesizer {
    fn speak(&self, text: &str) -> Result<()> {
        // The runtime reaps the child once it exits; we never wait on playback.
        Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to start speech synthesizer `{}`", self.program))?;
        Ok(())
    }
}

/// Wires the configured backends into an adapter. Either side may be missing.
#[must_use]
pub fn recognition_adapter(config: &VoiceConfig) -> RecognitionAdapter {
    let recognizer = ProcessRecognizer::from_command(&config.recognizer)
        .map(|r| Arc::new(r) as Arc<dyn SpeechRecognizer>);
    let synthesizer = ProcessSynthesizer::from_command(&config.synthesizer)
        .map(|s| Arc::new(s) as Arc<dyn SpeechSynthesizer>);
    RecognitionAdapter::new(recognizer, synthesizer)
}
