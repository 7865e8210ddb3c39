//! In-memory stand-ins for the extractor and model backends, shared by unit tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;

use crate::config::Config;
use crate::errors::PipelineError;
use crate::extraction::TextExtractor;
use crate::llm_client::{ChatBackend, ChatMessage, EmbeddingBackend, LlmError};
use crate::state::AppState;

pub fn test_config() -> Config {
    Config {
        port: 0,
        ollama_url: "http://127.0.0.1:1".to_string(),
        embedding_model: "embed-model".to_string(),
        chat_model: "chat-model".to_string(),
        static_dir: "build".to_string(),
        model_timeout_secs: 5,
        rust_log: "debug".to_string(),
    }
}

pub fn test_state(extractor: StubExtractor, embedder: MockEmbedder, chat: MockChat) -> AppState {
    AppState {
        config: test_config(),
        extractor: Arc::new(extractor),
        embedder: Arc::new(embedder),
        chat: Arc::new(chat),
    }
}

fn unreachable_error() -> LlmError {
    LlmError::Api {
        status: 503,
        message: "connection refused".to_string(),
    }
}

/// Builds a one-page PDF whose only content is `text` drawn in Helvetica.
/// `text` must not contain unbalanced parentheses or backslashes.
pub fn single_page_pdf(text: &str) -> Vec<u8> {
    let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_offset = pdf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{offset:010} 00000 n \n"));
    }
    xref.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.extend_from_slice(xref.as_bytes());
    pdf
}

pub struct StubExtractor {
    text: Option<String>,
}

impl StubExtractor {
    pub fn returning(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { text: None }
    }
}

#[async_trait]
impl TextExtractor for StubExtractor {
    async fn extract(&self, bytes: Vec<u8>) -> Result<String, PipelineError> {
        match &self.text {
            Some(text) if !bytes.is_empty() => Ok(text.clone()),
            _ => Err(PipelineError::Extraction("Failed to parse PDF".to_string())),
        }
    }
}

/// Returns a constant-length vector. Clones share call records.
#[derive(Clone)]
pub struct MockEmbedder {
    dimensions: Option<usize>,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockEmbedder {
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions: Some(dimensions),
            calls: Arc::default(),
            requests: Arc::default(),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            dimensions: None,
            ..Self::with_dimensions(0)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn inputs(&self) -> Vec<String> {
        self.requests.lock().unwrap().iter().map(|(_, i)| i.clone()).collect()
    }

    pub fn models(&self) -> Vec<String> {
        self.requests.lock().unwrap().iter().map(|(m, _)| m.clone()).collect()
    }
}

#[async_trait]
impl EmbeddingBackend for MockEmbedder {
    async fn embed(&self, model: &str, input: &str) -> Result<Vec<f32>, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((model.to_string(), input.to_string()));
        let dimensions = self.dimensions.ok_or_else(unreachable_error)?;
        Ok(vec![0.5; dimensions])
    }
}

/// Replies with a fixed string and records every conversation it receives.
#[derive(Clone)]
pub struct MockChat {
    reply: Option<String>,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<(String, Vec<ChatMessage>)>>>,
}

impl MockChat {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: Arc::default(),
            requests: Arc::default(),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reply: None,
            ..Self::replying("")
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn models(&self) -> Vec<String> {
        self.requests.lock().unwrap().iter().map(|(m, _)| m.clone()).collect()
    }

    pub fn last_messages(&self) -> Option<Vec<ChatMessage>> {
        self.requests.lock().unwrap().last().map(|(_, m)| m.clone())
    }
}

#[async_trait]
impl ChatBackend for MockChat {
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((model.to_string(), messages.to_vec()));
        self.reply.clone().ok_or_else(unreachable_error)
    }
}
