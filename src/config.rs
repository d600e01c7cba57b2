//! Formatter configuration.
//!
//! This module provides the [`FormatterOptions`] struct which selects
//! the formatting passes to run. Options can be loaded from TOML via
//! [`FormatterOptions::from_toml_str`]; file discovery and CLI parsing
//! belong to the embedding tool. Each pass is enabled independently;
//! everything except import reordering defaults to off.

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};

// Serde default functions
fn default_true() -> bool {
    true
}

/// Pass selection for one formatting run.
///
/// External option names are camelCase, matching the embedding tool's
/// configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatterOptions {
    /// Reorder the import run by specifier priority (default: true).
    /// Takes effect only while the import formatter itself is enabled.
    #[serde(default = "default_true")]
    pub reorder_imports: bool,

    /// Collapse multi-line named imports to one line (default: false)
    #[serde(default)]
    pub import_formatter: bool,

    /// Reflow and align decorator arguments (default: false)
    #[serde(default)]
    pub decorator_arguments_formatter: bool,

    /// Reflow constructor parameter lists (default: false)
    #[serde(default)]
    pub constructor_parameter_formatter: bool,

    /// Align arguments of statement-level calls (default: false)
    #[serde(default)]
    pub call_expression_arguments_formatter: bool,
}

/// Partial options for TOML parsing
///
/// All fields are `Option<bool>` so we can distinguish between
/// "explicitly set" and "not specified" when merging.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialFormatterOptions {
    pub reorder_imports: Option<bool>,
    pub import_formatter: Option<bool>,
    pub decorator_arguments_formatter: Option<bool>,
    pub constructor_parameter_formatter: Option<bool>,
    pub call_expression_arguments_formatter: Option<bool>,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        FormatterOptions {
            reorder_imports: true,
            import_formatter: false,
            decorator_arguments_formatter: false,
            constructor_parameter_formatter: false,
            call_expression_arguments_formatter: false,
        }
    }
}

impl FormatterOptions {
    /// Enables every pass; mainly useful for tests and one-shot tools.
    #[must_use]
    pub fn all_enabled() -> Self {
        FormatterOptions {
            reorder_imports: true,
            import_formatter: true,
            decorator_arguments_formatter: true,
            constructor_parameter_formatter: true,
            call_expression_arguments_formatter: true,
        }
    }

    /// Parse options from a TOML document, keeping defaults for any
    /// key the document does not set.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let partial: PartialFormatterOptions = toml::from_str(contents)
            .map_err(|err| FormatError::Construction(format!("options: {err}")))?;
        let mut options = Self::default();
        options.apply_partial(&partial);
        Ok(options)
    }

    /// Apply a partial set, only overriding fields that are explicitly set
    pub fn apply_partial(&mut self, partial: &PartialFormatterOptions) {
        if let Some(v) = partial.reorder_imports {
            self.reorder_imports = v;
        }
        if let Some(v) = partial.import_formatter {
            self.import_formatter = v;
        }
        if let Some(v) = partial.decorator_arguments_formatter {
            self.decorator_arguments_formatter = v;
        }
        if let Some(v) = partial.constructor_parameter_formatter {
            self.constructor_parameter_formatter = v;
        }
        if let Some(v) = partial.call_expression_arguments_formatter {
            self.call_expression_arguments_formatter = v;
        }
    }
}
