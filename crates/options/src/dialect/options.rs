//! Dialect options with their string-valued companions.
//!
//! The bit-packed switches live in `DialectOptionSet`; the handful of
//! options that name modules or functions are kept alongside it here.
//! Options are supplied as JSON by the driver, or built from
//! `DialectOptions::default()` and set field by field.

use serde::{Deserialize, Serialize};

use crate::common::Result;

use super::kinds::TranslationUnitKind;
use super::set::DialectOptionSet;

/// Dialect switches plus module and builtin names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialectOptions {
    /// Bit-packed dialect switches.
    #[serde(flatten)]
    pub options: DialectOptionSet,

    /// Module being compiled, as given by `-fmodule-name`.
    pub module_name: String,

    /// Module the main source file belongs to.
    ///
    /// Starts as `module_name` and changes as compilation proceeds.
    pub current_module: String,

    /// Functions no longer recognized as builtins (`-fno-builtin-<name>`).
    pub no_builtin_funcs: Vec<String>,

    /// Kind of translation unit being processed.
    pub translation_unit_kind: TranslationUnitKind,
}

impl DialectOptions {
    /// Loads options from JSON.
    ///
    /// Missing fields take their defaults; integer fields are truncated to
    /// their declared widths.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::Config` if `text` is not a valid options
    /// object.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let mut opts: Self = serde_json::from_str(text)?;
        if opts.current_module.is_empty() {
            opts.current_module.clone_from(&opts.module_name);
        }
        tracing::debug!(
            module = %opts.module_name,
            no_builtins = opts.no_builtin_funcs.len(),
            unit = %opts.translation_unit_kind,
            "loaded dialect options"
        );
        Ok(opts)
    }

    /// Are we compiling a module implementation?
    pub fn is_compiling_module_implementation(&self) -> bool {
        !self.options.is_compiling_module() && !self.module_name.is_empty()
    }

    /// Is `name` a library function that `-fno-builtin-<name>` demoted?
    pub fn is_no_builtin_func(&self, name: &str) -> bool {
        self.no_builtin_funcs.iter().any(|func| func == name)
    }
}
