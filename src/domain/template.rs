//! Argv template rendering for base install and run commands
//!
//! Base manifests describe their commands as argv templates with
//! `{placeholder}` markers. The builder fills in the markers it knows
//! about; unknown markers are left untouched so mistakes stay visible
//! in error output.

use std::collections::BTreeMap;
use std::path::Path;

/// Substitution context for base command templates
///
/// Recognized placeholders: `{rootfs}`, `{deps}`, `{app}`, `{manifest}`
/// and `{entrypoint}`. Only the placeholders set on the context are
/// substituted.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    vars: BTreeMap<&'static str, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `{rootfs}` placeholder to the base's rootfs directory
    pub fn rootfs(mut self, path: &Path) -> Self {
        self.vars.insert("rootfs", path_str(path));
        self
    }

    /// Set the `{deps}` placeholder to the dependency layer directory
    pub fn deps(mut self, path: &Path) -> Self {
        self.vars.insert("deps", path_str(path));
        self
    }

    /// Set the `{app}` placeholder to the image's application directory
    pub fn app(mut self, path: &Path) -> Self {
        self.vars.insert("app", path_str(path));
        self
    }

    /// Set the `{manifest}` placeholder to the dependency manifest file
    pub fn manifest(mut self, path: &Path) -> Self {
        self.vars.insert("manifest", path_str(path));
        self
    }

    /// Set the `{entrypoint}` placeholder to the entry-point file name
    pub fn entrypoint(mut self, name: &str) -> Self {
        self.vars.insert("entrypoint", name.to_string());
        self
    }

    fn apply(&self, input: &str) -> String {
        let mut output = input.to_string();
        for (key, value) in &self.vars {
            output = output.replace(&format!("{{{key}}}"), value);
        }
        output
    }

    /// Render an argv template, substituting placeholders in every element
    pub fn render_argv(&self, template: &[String]) -> Vec<String> {
        template.iter().map(|arg| self.apply(arg)).collect()
    }

    /// Render an environment map, substituting placeholders in values
    pub fn render_env(&self, env: &BTreeMap<String, String>) -> BTreeMap<String, String> {
        env.iter()
            .map(|(key, value)| (key.clone(), self.apply(value)))
            .collect()
    }
}

/// Convert a path to a plain string for argv use
///
/// Windows extended-length prefixes (`\\?\`) confuse child programs,
/// so they are stripped first.
fn path_str(path: &Path) -> String {
    dunce::simplified(path).to_string_lossy().to_string()
}
