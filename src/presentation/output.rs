//! Output Rendering
//!
//! Provides a unified interface for rendering command results as text or
//! JSON. Renderers return strings; the commands decide where they go.

use std::path::Path;

use serde_json::{json, Value};

use crate::application::{ConfigurationReport, ModuleReport, RunOutcome};
use crate::domain::entities::{ClasspathSpec, VersionRegistry};
use crate::domain::value_objects::{ModuleName, Version};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    wait: &'static str,
    skip: &'static str,
    arrow: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            wait: "…",
            skip: "○",
            arrow: "→",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            wait: "[WAIT]",
            skip: "[SKIP]",
            arrow: "->",
        }
    }
}

/// Trait for rendering command results
pub trait ResultRenderer {
    /// Configuration report of `keystone check`
    fn report(&self, report: &ConfigurationReport) -> String;

    /// Outcome of driving the executor, plus where the plan went
    fn outcome(&self, outcome: &RunOutcome, plan: &Path) -> String;

    /// Composed classpath of one module
    fn classpath(&self, module: &ModuleName, classpath: &ClasspathSpec) -> String;

    /// Release version and registered dependency versions
    fn versions(&self, version: &Version, registry: &VersionRegistry) -> String;
}

/// Text renderer for command results
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn module_line(&self, icons: &Icons, width: usize, module: &ModuleReport) -> Vec<String> {
        let name = format!("{:width$}", module.module.as_str(), width = width);
        if let Some(error) = &module.error {
            return vec![format!("  {} {}  {}", icons.cross, name, error)];
        }
        let Some(config) = &module.configuration else {
            return vec![format!("  {} {}  {}", icons.wait, name, module.stage)];
        };

        let icon = if module.stage.is_terminal() {
            icons.check
        } else {
            icons.wait
        };
        let conventions: Vec<&str> = config.conventions.iter().map(|c| c.id()).collect();
        let mut lines = vec![format!(
            "  {} {}  {:9}  {}",
            icon,
            name,
            config.role.as_str(),
            conventions.join(", ")
        )];

        if self.verbose > 0 {
            for dep in config.dependencies.test_runtime() {
                lines.push(format!(
                    "      {} {} ({})",
                    icons.arrow,
                    dep.target.notation(),
                    dep.kind
                ));
            }
        }
        lines
    }
}

impl ResultRenderer for TextRenderer {
    fn report(&self, report: &ConfigurationReport) -> String {
        let icons = self.icons();
        let width = report
            .modules
            .iter()
            .map(|m| m.module.as_str().len())
            .max()
            .unwrap_or(0);

        let mut lines = Vec::new();
        if report.is_success() {
            lines.push(format!(
                "{} Configured {} modules at {}",
                icons.check,
                report.modules.len(),
                report.version
            ));
        } else {
            lines.push(format!(
                "{} Configuration failed for {} of {} modules",
                icons.cross,
                report.failed_count(),
                report.modules.len()
            ));
        }
        lines.push(String::new());
        for module in &report.modules {
            lines.extend(self.module_line(&icons, width, module));
        }
        lines.join("\n")
    }

    fn outcome(&self, outcome: &RunOutcome, plan: &Path) -> String {
        let icons = self.icons();
        let mut lines = Vec::new();
        if outcome.is_success() {
            lines.push(format!("{} Plan written", icons.check));
        } else {
            lines.push(format!("{} Plan incomplete", icons.cross));
        }
        lines.push(String::new());
        lines.push(format!("  Plan: {}", plan.display()));
        lines.push(format!("  {} modules planned", outcome.executed.len()));

        if !outcome.failed.is_empty() {
            lines.push(String::new());
            lines.push(format!("  Failed ({}):", outcome.failed.len()));
            for failure in &outcome.failed {
                lines.push(format!(
                    "    {} {}: {}",
                    icons.cross, failure.module, failure.reason
                ));
            }
        }
        if !outcome.skipped.is_empty() {
            lines.push(String::new());
            lines.push(format!("  Skipped ({}):", outcome.skipped.len()));
            for (module, dependency) in &outcome.skipped {
                lines.push(format!(
                    "    {} {} (depends on failed '{}')",
                    icons.skip, module, dependency
                ));
            }
        }
        lines.join("\n")
    }

    fn classpath(&self, _module: &ModuleName, classpath: &ClasspathSpec) -> String {
        classpath
            .entries()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn versions(&self, version: &Version, registry: &VersionRegistry) -> String {
        let mut lines = vec![format!("Release version: {}", version)];
        if registry.is_empty() {
            return lines.join("\n");
        }
        lines.push(String::new());
        let width = registry.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        for (name, pinned) in registry.iter() {
            lines.push(format!("  {:width$}  {}", name, pinned, width = width));
        }
        lines.join("\n")
    }
}

/// JSON renderer for command results
pub struct JsonRenderer;

impl JsonRenderer {
    fn module(module: &ModuleReport) -> Value {
        let mut value = json!({
            "module": module.module,
            "stage": module.stage.as_str(),
        });
        if let Some(config) = &module.configuration {
            value["role"] = json!(config.role);
            value["conventions"] = json!(config.conventions);
            value["produces_artifact"] = json!(config.produces_artifact);
        }
        if let Some(error) = &module.error {
            value["error"] = json!({
                "code": error.code(),
                "message": error.to_string(),
            });
        }
        value
    }

    /// One line, so the result can follow the NDJSON event stream.
    fn line(value: &Value) -> String {
        serde_json::to_string(value).unwrap_or_default()
    }
}

impl ResultRenderer for JsonRenderer {
    fn report(&self, report: &ConfigurationReport) -> String {
        Self::line(&json!({
            "success": report.is_success(),
            "version": report.version,
            "modules": report.modules.iter().map(Self::module).collect::<Vec<_>>(),
        }))
    }

    fn outcome(&self, outcome: &RunOutcome, plan: &Path) -> String {
        Self::line(&json!({
            "success": outcome.is_success(),
            "plan": plan.display().to_string(),
            "executed": outcome.executed,
            "failed": outcome
                .failed
                .iter()
                .map(|f| json!({ "module": f.module, "reason": f.reason }))
                .collect::<Vec<_>>(),
            "skipped": outcome
                .skipped
                .iter()
                .map(|(module, dependency)| json!({ "module": module, "dependency": dependency }))
                .collect::<Vec<_>>(),
        }))
    }

    fn classpath(&self, module: &ModuleName, classpath: &ClasspathSpec) -> String {
        Self::line(&json!({
            "module": module,
            "classpath": classpath,
        }))
    }

    fn versions(&self, version: &Version, registry: &VersionRegistry) -> String {
        let pinned: serde_json::Map<String, Value> = registry
            .iter()
            .map(|(name, v)| (name.to_string(), json!(v)))
            .collect();
        Self::line(&json!({
            "version": version,
            "versions": pinned,
        }))
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, unicode: bool, verbose: u8) -> Box<dyn ResultRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode, verbose }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
