//! Completion provider seam.
//!
//! The network client for the hosted generative-language API lives outside
//! this crate; callers implement [`CompletionProvider`] for it and pass it in.

use crate::error::GenerationError;

/// Signals in a provider message that indicate a missing or rejected key.
const CREDENTIAL_SIGNALS: [&str; 3] = ["INVALID_ARGUMENT", "Invalid API key", "API_KEY_INVALID"];

/// Sampling options for one completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GenerationOptions {
    /// Options for the learning situation; `creativity` is clamped to 0.1..=1.0.
    pub fn primary(creativity: f32) -> Self {
        Self {
            temperature: creativity.clamp(0.1, 1.0),
            max_output_tokens: 4000,
        }
    }

    /// Options for the evaluation rubric: lower temperature for a more
    /// regular structure.
    pub fn secondary() -> Self {
        Self {
            temperature: 0.5,
            max_output_tokens: 3000,
        }
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::primary(0.7)
    }
}

/// Turns prompt text into completion text.
pub trait CompletionProvider {
    fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> std::result::Result<String, GenerationError>;
}

impl<F> CompletionProvider for F
where
    F: Fn(&str, &GenerationOptions) -> std::result::Result<String, GenerationError>,
{
    fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> std::result::Result<String, GenerationError> {
        self(prompt, options)
    }
}

impl GenerationError {
    /// Wrap a provider-specific failure message.
    pub fn provider(message: impl Into<String>) -> Self {
        GenerationError::Provider {
            message: message.into(),
        }
    }

    /// Whether the failure points at a missing or invalid API key.
    pub fn is_credential_error(&self) -> bool {
        match self {
            GenerationError::Provider { message } => {
                CREDENTIAL_SIGNALS.iter().any(|signal| message.contains(signal))
            }
            GenerationError::EmptyCompletion => false,
        }
    }

    /// Message shown to the end user.
    pub fn user_message(&self) -> String {
        if self.is_credential_error() {
            return concat!(
                "Necesitas configurar tu clave de Gemini. ",
                "Consigue una clave gratuita en https://aistudio.google.com/apikey, ",
                "guárdala en la variable de entorno GEMINI_API_KEY y vuelve a intentarlo."
            )
            .to_string();
        }

        match self {
            GenerationError::Provider { message } => format!(
                "Algo fue mal: {message}. Revisa que hayas seleccionado todo correctamente \
                 y vuelve a intentarlo."
            ),
            GenerationError::EmptyCompletion => {
                "No se pudo generar el contenido: la respuesta llegó vacía.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_signals() {
        for message in [
            "400 INVALID_ARGUMENT: API key not valid",
            "Invalid API key provided",
            "reason: API_KEY_INVALID",
        ] {
            let err = GenerationError::provider(message);
            assert!(err.is_credential_error(), "{message}");
            assert!(err.user_message().contains("GEMINI_API_KEY"));
        }
    }

    #[test]
    fn test_generic_failure_message() {
        let err = GenerationError::provider("503 UNAVAILABLE");
        assert!(!err.is_credential_error());
        assert!(err.user_message().contains("503 UNAVAILABLE"));
        assert!(!GenerationError::EmptyCompletion.is_credential_error());
    }

    #[test]
    fn test_options() {
        assert_eq!(GenerationOptions::primary(2.0).temperature, 1.0);
        assert_eq!(GenerationOptions::primary(0.0).temperature, 0.1);
        assert_eq!(GenerationOptions::default().max_output_tokens, 4000);
        assert_eq!(GenerationOptions::secondary().temperature, 0.5);
    }

    #[test]
    fn test_closure_provider() {
        let provider = |prompt: &str, options: &GenerationOptions| {
            Ok::<_, GenerationError>(format!("{prompt}:{}", options.max_output_tokens))
        };
        let out = provider
            .generate("hola", &GenerationOptions::secondary())
            .unwrap();
        assert_eq!(out, "hola:3000");
    }
}
