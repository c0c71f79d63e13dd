//! Request-scoped generation flow.
//!
//! A [`GenerationRequest`] carries everything the user chose for one
//! document. A [`Generator`] borrows the long-lived provider and catalog,
//! asks the provider for the learning situation and then for the rubric,
//! and hands back the two texts ready for rendering.

use crate::ast::RenderedDocument;
use crate::catalog::{CatalogData, Level};
use crate::error::{GenerationError, Result};
use crate::metadata::DocumentMetadata;
use crate::provider::{CompletionProvider, GenerationOptions};
use crate::render::{assemble, render_document, PdfConfig};

/// Placeholder in the secondary prompt replaced by an excerpt of the
/// primary completion.
pub const PRIMARY_PLACEHOLDER: &str = "{primary}";

/// Number of characters of the primary completion quoted in the secondary
/// prompt.
pub const EXCERPT_CHARS: usize = 2000;

/// Curriculum choices made in the selection form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub level: Option<Level>,
    pub cycle: String,
    pub module: String,
    pub outcomes: Vec<String>,
    pub criteria: Vec<String>,
    pub methodology: String,
    pub secondary_methodologies: Vec<String>,
    pub professional_competencies: Vec<String>,
    pub personal_competencies: Vec<String>,
    pub social_competencies: Vec<String>,
}

/// One generation request: the selection plus the additional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub selection: Selection,
    pub duration: String,
    pub resources: Vec<String>,
    pub context: String,
    pub final_product: String,
    /// Sampling temperature for the learning situation, 0.1 to 1.0.
    pub creativity: f32,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            selection: Selection::default(),
            duration: String::new(),
            resources: Vec::new(),
            context: String::new(),
            final_product: String::new(),
            creativity: 0.7,
        }
    }
}

impl GenerationRequest {
    /// Metadata for the table under the primary title.
    pub fn metadata(&self) -> DocumentMetadata {
        DocumentMetadata {
            level: self
                .selection
                .level
                .map(|l| l.label().to_string())
                .unwrap_or_default(),
            cycle: self.selection.cycle.clone(),
            module: self.selection.module.clone(),
            methodology: self.selection.methodology.clone(),
            duration: self.duration.clone(),
        }
    }

    pub fn primary_options(&self) -> GenerationOptions {
        GenerationOptions::primary(self.creativity)
    }
}

/// Prompt texts supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prompts {
    pub primary: String,
    /// May contain [`PRIMARY_PLACEHOLDER`]; otherwise the excerpt is appended.
    pub secondary: String,
}

/// The two completions of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTexts {
    pub primary: String,
    pub secondary: String,
    pub metadata: DocumentMetadata,
}

impl GeneratedTexts {
    pub fn assemble(&self) -> RenderedDocument {
        assemble(&self.primary, &self.secondary, &self.metadata)
    }

    pub fn to_pdf(&self, config: &PdfConfig) -> Result<Vec<u8>> {
        render_document(&self.primary, &self.secondary, &self.metadata, config)
    }
}

/// Runs requests against a provider and catalog created once at start-up.
pub struct Generator<'a, P: ?Sized> {
    provider: &'a P,
    catalog: &'a CatalogData,
}

impl<'a, P: CompletionProvider + ?Sized> Generator<'a, P> {
    pub fn new(provider: &'a P, catalog: &'a CatalogData) -> Self {
        Self { provider, catalog }
    }

    /// Validate the selection, then generate the learning situation and the
    /// rubric. Provider failures are returned as they are, without retry.
    pub fn generate(
        &self,
        request: &GenerationRequest,
        prompts: &Prompts,
    ) -> Result<GeneratedTexts> {
        self.catalog.validate(&request.selection)?;

        log::info!(
            "generating learning situation for module {:?}",
            request.selection.module
        );
        let primary = self.complete(&prompts.primary, &request.primary_options())?;

        let secondary_prompt = secondary_prompt(&prompts.secondary, &primary);
        let secondary = self.complete(&secondary_prompt, &GenerationOptions::secondary())?;

        Ok(GeneratedTexts {
            primary,
            secondary,
            metadata: request.metadata(),
        })
    }

    fn complete(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
        let text = self.provider.generate(prompt, options).map_err(|e| {
            log::warn!("completion failed: {e}");
            e
        })?;

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyCompletion.into());
        }

        log::debug!("completion returned {} bytes", text.len());
        Ok(text)
    }
}

/// Build the secondary prompt by quoting the start of the primary text.
pub fn secondary_prompt(template: &str, primary: &str) -> String {
    let quoted = format!("{}...", excerpt(primary, EXCERPT_CHARS));

    if template.contains(PRIMARY_PLACEHOLDER) {
        template.replace(PRIMARY_PLACEHOLDER, &quoted)
    } else {
        format!("{template}\n\n{quoted}")
    }
}

/// The first `max_chars` characters of `text`.
fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, SelectionError};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Answers prompts in order and records what it was asked.
    struct ScriptedProvider {
        answers: RefCell<Vec<std::result::Result<String, GenerationError>>>,
        seen: RefCell<Vec<(String, GenerationOptions)>>,
    }

    impl ScriptedProvider {
        fn new(answers: Vec<std::result::Result<String, GenerationError>>) -> Self {
            Self {
                answers: RefCell::new(answers),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl CompletionProvider for ScriptedProvider {
        fn generate(
            &self,
            prompt: &str,
            options: &GenerationOptions,
        ) -> std::result::Result<String, GenerationError> {
            self.seen.borrow_mut().push((prompt.to_string(), *options));
            self.answers.borrow_mut().remove(0)
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            selection: Selection {
                level: Some(Level::Intermediate),
                cycle: "Cuidados Auxiliares de Enfermería".into(),
                module: "Técnicas básicas de enfermería".into(),
                methodology: "Gamificación".into(),
                ..Default::default()
            },
            duration: "3-5 sesiones (6-10 horas)".into(),
            creativity: 0.9,
            ..Default::default()
        }
    }

    #[test]
    fn test_metadata_from_request() {
        let metadata = request().metadata();
        assert_eq!(
            metadata.cycle_label(),
            "Grado Medio - Cuidados Auxiliares de Enfermería"
        );
        assert_eq!(metadata.methodology, "Gamificación");
        assert_eq!(metadata.duration, "3-5 sesiones (6-10 horas)");
    }

    #[test]
    fn test_generate_runs_both_prompts() {
        let catalog = CatalogData::embedded();
        let provider = ScriptedProvider::new(vec![
            Ok("# SITUACIÓN\n- paso".into()),
            Ok("# RÚBRICA".into()),
        ]);
        let prompts = Prompts {
            primary: "situación".into(),
            secondary: "rúbrica sobre: {primary}".into(),
        };

        let texts = Generator::new(&provider, &catalog)
            .generate(&request(), &prompts)
            .unwrap();

        assert_eq!(texts.primary, "# SITUACIÓN\n- paso");
        assert_eq!(texts.secondary, "# RÚBRICA");

        let seen = provider.seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, "situación");
        assert_eq!(seen[0].1.temperature, 0.9);
        assert_eq!(seen[1].0, "rúbrica sobre: # SITUACIÓN\n- paso...");
        assert_eq!(seen[1].1, GenerationOptions::secondary());
    }

    #[test]
    fn test_generate_rejects_invalid_selection() {
        let catalog = CatalogData::embedded();
        let provider = ScriptedProvider::new(Vec::new());
        let mut req = request();
        req.selection.module = "Inexistente".into();

        let err = Generator::new(&provider, &catalog)
            .generate(&req, &Prompts::default())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Selection(SelectionError::UnknownModule(_))
        ));
        assert!(provider.seen.borrow().is_empty());
    }

    #[test]
    fn test_provider_error_is_not_retried() {
        let catalog = CatalogData::embedded();
        let provider = ScriptedProvider::new(vec![Err(GenerationError::provider(
            "API_KEY_INVALID",
        ))]);

        let err = Generator::new(&provider, &catalog)
            .generate(&request(), &Prompts::default())
            .unwrap_err();

        match err {
            Error::Generation(e) => assert!(e.is_credential_error()),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(provider.seen.borrow().len(), 1);
    }

    #[test]
    fn test_empty_completion() {
        let catalog = CatalogData::embedded();
        let provider = ScriptedProvider::new(vec![Ok("  \n".into())]);

        let err = Generator::new(&provider, &catalog)
            .generate(&request(), &Prompts::default())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Generation(GenerationError::EmptyCompletion)
        ));
    }

    #[test]
    fn test_secondary_prompt_appends_without_placeholder() {
        assert_eq!(secondary_prompt("Rúbrica", "texto"), "Rúbrica\n\ntexto...");
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        let text = "á".repeat(EXCERPT_CHARS + 10);
        let cut = excerpt(&text, EXCERPT_CHARS);
        assert_eq!(cut.chars().count(), EXCERPT_CHARS);
        assert_eq!(excerpt("corto", EXCERPT_CHARS), "corto");
    }

    #[test]
    fn test_generated_texts_assemble() {
        let texts = GeneratedTexts {
            primary: "## Contenidos".into(),
            secondary: String::new(),
            metadata: request().metadata(),
        };
        let doc = texts.assemble();
        assert_eq!(doc.page_breaks(), 1);
        assert_eq!(doc.titles().len(), 2);

        let bytes = texts.to_pdf(&PdfConfig::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
