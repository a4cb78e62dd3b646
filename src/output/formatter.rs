use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::discovery::NotebookCase;

#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub total_notebooks: usize,
    pub notebooks: &'a [NotebookCase],
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(cases: &[NotebookCase], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::format_text(cases)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&Self::build_output(cases))?),
        }
    }

    pub fn build_output(cases: &[NotebookCase]) -> JsonOutput<'_> {
        JsonOutput {
            total_notebooks: cases.len(),
            notebooks: cases,
        }
    }

    pub fn format_text(cases: &[NotebookCase]) -> String {
        let mut out = format!("Discovered {} notebooks:\n", cases.len());
        for case in cases {
            out.push_str(&format!("  {} (timeout: {}s)\n", case.path, case.timeout));
        }
        out
    }
}
