//! Document metadata shown in the table under the primary title.

use crate::ast::MetadataRow;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Format used for the generation timestamp row.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Key/value pairs describing the generated document.
///
/// Every field is optional; missing values render as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMetadata {
    /// Training level, e.g. "Grado Medio".
    pub level: String,
    /// Training cycle (program) name.
    pub cycle: String,
    pub module: String,
    pub methodology: String,
    pub duration: String,
}

impl DocumentMetadata {
    /// Build metadata from loose key/value pairs.
    ///
    /// Unknown keys are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut metadata = Self::default();
        for (key, value) in pairs {
            let slot = match key {
                "level" => &mut metadata.level,
                "cycle" => &mut metadata.cycle,
                "module" => &mut metadata.module,
                "methodology" => &mut metadata.methodology,
                "duration" => &mut metadata.duration,
                other => {
                    log::debug!("ignoring unknown metadata key {other:?}");
                    continue;
                }
            };
            *slot = value.to_string();
        }
        metadata
    }

    /// "level - cycle", skipping whichever part is blank.
    pub fn cycle_label(&self) -> String {
        [self.level.trim(), self.cycle.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" - ")
    }

    /// Table rows, ending with the generation timestamp.
    pub fn table_rows(&self, generated_at: NaiveDateTime) -> Vec<MetadataRow> {
        vec![
            MetadataRow::new("Ciclo Formativo:", self.cycle_label()),
            MetadataRow::new("Módulo:", self.module.as_str()),
            MetadataRow::new("Metodología:", self.methodology.as_str()),
            MetadataRow::new("Duración:", self.duration.as_str()),
            MetadataRow::new(
                "Fecha de generación:",
                generated_at.format(TIMESTAMP_FORMAT).to_string(),
            ),
        ]
    }
}

/// Current local time, used for generation timestamps and file names.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Suggested file name for a document generated at `at`.
pub fn download_file_name(at: NaiveDateTime) -> String {
    format!("situacion_aprendizaje_{}.pdf", at.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 42)
            .unwrap()
    }

    #[test]
    fn test_missing_keys_render_blank() {
        let metadata = DocumentMetadata::from_pairs([("module", "Anatomía")]);
        let rows = metadata.table_rows(at());

        assert_eq!(rows[0], MetadataRow::new("Ciclo Formativo:", ""));
        assert_eq!(rows[1], MetadataRow::new("Módulo:", "Anatomía"));
        assert_eq!(rows[2].value, "");
        assert_eq!(rows[3].value, "");
    }

    #[test]
    fn test_cycle_label() {
        let mut metadata = DocumentMetadata {
            level: "Grado Medio".into(),
            cycle: "Cuidados Auxiliares de Enfermería".into(),
            ..Default::default()
        };
        assert_eq!(
            metadata.cycle_label(),
            "Grado Medio - Cuidados Auxiliares de Enfermería"
        );

        metadata.level.clear();
        assert_eq!(metadata.cycle_label(), "Cuidados Auxiliares de Enfermería");
    }

    #[test]
    fn test_timestamp_row() {
        let rows = DocumentMetadata::default().table_rows(at());
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4], MetadataRow::new("Fecha de generación:", "07/03/2024 09:05"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let metadata = DocumentMetadata::from_pairs([("color", "rojo"), ("cycle", "SAN01")]);
        assert_eq!(metadata.cycle, "SAN01");
        assert_eq!(metadata.module, "");
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let metadata: DocumentMetadata =
            toml::from_str("module = \"Anatomía por la imagen\"").unwrap();
        assert_eq!(metadata.module, "Anatomía por la imagen");
        assert_eq!(metadata.duration, "");
    }

    #[test]
    fn test_download_file_name() {
        assert_eq!(
            download_file_name(at()),
            "situacion_aprendizaje_20240307_090542.pdf"
        );
    }
}
