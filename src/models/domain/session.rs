use crate::models::domain::{
    generation::{GenerationConfig, SafetyThresholds},
    role::Role,
};

/// A configured handle to the remote model. Built per invocation and
/// dropped once the reply has been read.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelSession {
    pub model: String,
    pub role: Role,
    pub instructions: Vec<String>,
    pub generation: GenerationConfig,
    pub safety: SafetyThresholds,
}

impl ModelSession {
    pub fn new(model: impl Into<String>, role: Role, instructions: Vec<String>) -> Self {
        Self {
            model: model.into(),
            role,
            instructions,
            generation: GenerationConfig::default(),
            safety: SafetyThresholds::default(),
        }
    }

    /// Returns a copy of the session with any per-call overrides applied.
    pub fn with_overrides(&self, overrides: &InvocationOverrides) -> Self {
        let mut session = self.clone();
        if let Some(generation) = &overrides.generation {
            session.generation = generation.clone();
        }
        if let Some(safety) = &overrides.safety {
            session.safety = safety.clone();
        }
        session
    }

    pub fn system_instruction(&self) -> Option<String> {
        let joined = self
            .instructions
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");

        (!joined.is_empty()).then_some(joined)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvocationOverrides {
    pub generation: Option<GenerationConfig>,
    pub safety: Option<SafetyThresholds>,
}
