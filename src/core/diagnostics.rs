// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Conversion outcome reporting.
//!
//! A conversion always runs to completion (or to the documented early stop
//! for unsupported image formats) and writes whatever it could into the
//! destination. [`Conversion`] tells the caller whether that destination is
//! complete, or which fields were left at their defaults and why.

use std::fmt;

use serde::Serialize;

/// Kind of degradation observed during a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticKind {
    /// Source enum variant has no counterpart in the destination schema.
    /// The destination field keeps its default/unknown variant.
    UnsupportedEnumValue,
    /// A buffer-shaped payload has no recognized encoding. The payload
    /// and every field after it were not converted.
    UnsupportedFormat,
}

impl DiagnosticKind {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::UnsupportedEnumValue => "unsupported enum value",
            DiagnosticKind::UnsupportedFormat => "unsupported format",
        }
    }
}

/// A single degradation recorded while converting one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// What went wrong
    pub kind: DiagnosticKind,
    /// Field holding the offending value (e.g., "image.encoding")
    pub field: &'static str,
    /// The offending value, rendered as text
    pub value: String,
    /// Destination fields left at their defaults because of this
    pub left_default: &'static [&'static str],
}

impl Diagnostic {
    /// Create an unsupported enum value diagnostic.
    pub fn unsupported_enum(
        field: &'static str,
        value: impl fmt::Display,
        left_default: &'static [&'static str],
    ) -> Self {
        Self {
            kind: DiagnosticKind::UnsupportedEnumValue,
            field,
            value: value.to_string(),
            left_default,
        }
    }

    /// Create an unsupported format diagnostic.
    pub fn unsupported_format(
        field: &'static str,
        value: impl fmt::Display,
        left_default: &'static [&'static str],
    ) -> Self {
        Self {
            kind: DiagnosticKind::UnsupportedFormat,
            field,
            value: value.to_string(),
            left_default,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] in {}", self.kind.as_str(), self.value, self.field)?;
        if !self.left_default.is_empty() {
            write!(f, " (left at default: {})", self.left_default.join(", "))?;
        }
        Ok(())
    }
}

/// Outcome of one structural conversion.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Conversion {
    /// Every field was converted.
    #[default]
    Complete,
    /// The destination was written, but some fields are left at defaults.
    Degraded {
        /// Everything that was not converted, in the order it happened
        diagnostics: Vec<Diagnostic>,
    },
}

impl Conversion {
    /// Build an outcome from the diagnostics collected during a conversion.
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        if diagnostics.is_empty() {
            Conversion::Complete
        } else {
            Conversion::Degraded { diagnostics }
        }
    }

    /// Check if every field was converted.
    pub fn is_complete(&self) -> bool {
        matches!(self, Conversion::Complete)
    }

    /// Diagnostics recorded during the conversion (empty when complete).
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Conversion::Complete => &[],
            Conversion::Degraded { diagnostics } => diagnostics,
        }
    }

    /// Check if any diagnostic of the given kind was recorded.
    pub fn has(&self, kind: DiagnosticKind) -> bool {
        self.diagnostics().iter().any(|d| d.kind == kind)
    }
}
