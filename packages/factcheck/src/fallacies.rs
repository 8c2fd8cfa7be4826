//! Fallacy taxonomy loading.
//!
//! The taxonomy ships as a two-column CSV (`fine_class`, `definition`) and
//! is flattened into a newline-joined `name: definition` listing that gets
//! interpolated verbatim into the verification and ethics prompts.

use std::path::Path;

use tracing::warn;

use crate::error::Result;

/// Placeholder used when no taxonomy could be loaded.
pub const NO_FALLACY_DATA: &str = "No fallacies data available";

/// One named fallacy with its definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallacyEntry {
    pub name: String,
    pub definition: String,
}

/// The loaded fallacy taxonomy.
#[derive(Debug, Clone, Default)]
pub struct FallacyCatalog {
    entries: Vec<FallacyEntry>,
}

impl FallacyCatalog {
    /// Load the taxonomy from a CSV file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_csv(&text))
    }

    /// Load the taxonomy, degrading to an empty catalog with a warning if
    /// the file cannot be read. Mirrors the non-fatal behavior expected by
    /// the surrounding pipeline: missing data weakens prompts, it never
    /// stops a run.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_csv_path(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not load fallacies");
                Self::default()
            }
        }
    }

    /// Parse CSV text. The header row names the columns; `fine_class` and
    /// `definition` are picked out by name so extra columns are ignored.
    pub fn from_csv(text: &str) -> Self {
        let mut lines = text.lines();
        let Some(header) = lines.next() else {
            return Self::default();
        };

        let columns = split_csv_line(header);
        let name_idx = columns.iter().position(|c| c.trim() == "fine_class");
        let def_idx = columns.iter().position(|c| c.trim() == "definition");
        let (Some(name_idx), Some(def_idx)) = (name_idx, def_idx) else {
            warn!("fallacies CSV missing fine_class/definition columns");
            return Self::default();
        };

        let entries = lines
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| {
                let fields = split_csv_line(line);
                let name = fields.get(name_idx)?.trim();
                let definition = fields.get(def_idx)?.trim();
                if name.is_empty() {
                    return None;
                }
                Some(FallacyEntry {
                    name: name.to_string(),
                    definition: definition.to_string(),
                })
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[FallacyEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `name: definition` listing interpolated into prompts.
    pub fn prompt_list(&self) -> String {
        if self.entries.is_empty() {
            return NO_FALLACY_DATA.to_string();
        }
        self.entries
            .iter()
            .map(|e| format!("{}: {}", e.name, e.definition))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Split one CSV line, honoring double-quoted fields with `""` escapes.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_csv() {
        let csv = "fine_class,definition\n\
                   Ad Hominem,Attacking the person instead of the argument\n\
                   Strawman,Misrepresenting an argument to attack it";
        let catalog = FallacyCatalog::from_csv(csv);
        assert_eq!(catalog.entries().len(), 2);
        assert_eq!(catalog.entries()[0].name, "Ad Hominem");
        assert!(catalog
            .prompt_list()
            .contains("Strawman: Misrepresenting an argument"));
    }

    #[test]
    fn test_quoted_fields_with_commas() {
        let csv = "fine_class,definition\n\
                   \"False Dilemma\",\"Presenting two options, ignoring the rest\"";
        let catalog = FallacyCatalog::from_csv(csv);
        assert_eq!(catalog.entries().len(), 1);
        assert_eq!(
            catalog.entries()[0].definition,
            "Presenting two options, ignoring the rest"
        );
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "id,fine_class,coarse_class,definition\n\
                   1,Slippery Slope,causal,Assuming one step leads to an extreme chain";
        let catalog = FallacyCatalog::from_csv(csv);
        assert_eq!(catalog.entries().len(), 1);
        assert_eq!(catalog.entries()[0].name, "Slippery Slope");
    }

    #[test]
    fn test_empty_catalog_prompt_placeholder() {
        let catalog = FallacyCatalog::default();
        assert_eq!(catalog.prompt_list(), NO_FALLACY_DATA);
    }

    #[test]
    fn test_missing_columns_degrades_to_empty() {
        let catalog = FallacyCatalog::from_csv("a,b\n1,2");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_escaped_quotes() {
        let fields = split_csv_line("\"say \"\"hi\"\"\",rest");
        assert_eq!(fields, vec!["say \"hi\"".to_string(), "rest".to_string()]);
    }
}
