//! Listing description generation.
//!
//! The marketplace asks an external text service for a draft description. The
//! only implementation shipped here is a deterministic template fake; a real
//! client implements [`DescriptionGenerator`] the same way.

use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("name and category are required to generate a description")]
    MissingInput,

    #[error("description service failed: {0}")]
    Service(String),
}

#[async_trait::async_trait]
pub trait DescriptionGenerator: Send + Sync {
    async fn describe(&self, name: &str, category: &str) -> Result<String, GeneratorError>;
}

const TEMPLATES: [&str; 3] = [
    "{name} is a powerful AI agent designed for {category}. It streamlines workflows and delivers professional results with minimal setup required.",
    "Transform your {category} process with {name}. This intelligent agent automates complex tasks and provides actionable insights.",
    "{name} revolutionizes {category} by combining advanced AI capabilities with user-friendly interfaces for maximum productivity.",
];

/// Fake generator: fills canned templates in rotation.
#[derive(Debug, Default)]
pub struct TemplateDescriptionGenerator {
    next: AtomicUsize,
}

impl TemplateDescriptionGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the rotation at a given template (tests pin the output this way).
    pub fn starting_at(index: usize) -> Self {
        Self {
            next: AtomicUsize::new(index),
        }
    }
}

#[async_trait::async_trait]
impl DescriptionGenerator for TemplateDescriptionGenerator {
    async fn describe(&self, name: &str, category: &str) -> Result<String, GeneratorError> {
        let name = name.trim();
        let category = category.trim();
        if name.is_empty() || category.is_empty() {
            return Err(GeneratorError::MissingInput);
        }

        let index = self.next.fetch_add(1, Ordering::Relaxed) % TEMPLATES.len();
        Ok(TEMPLATES[index]
            .replace("{name}", name)
            .replace("{category}", &category.to_lowercase()))
    }
}
