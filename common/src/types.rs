use serde::{Deserialize, Serialize};

/// One prompt for the text-generation backend.
///
/// The system instruction travels on a separate steering channel and is
/// never concatenated into the visible prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub system_instruction: Option<String>,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: None,
        }
    }

    pub fn with_instruction(prompt: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: Some(instruction.into()),
        }
    }
}

/// Marks a slide as carrying a live generation widget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoSpec {
    /// Steering text sent with every run of this widget.
    pub instruction: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideInfo {
    pub title: String,
    pub body: String,
    pub demo: Option<DemoSpec>,
}
