//! Plain-text lexing report.
//!
//! One layout serves both the terminal and the saved file: numbered
//! tokens, the symbol table, the constant table, then errors (if any).

use std::fmt;

use mini_lexer::LexOutput;

const RULE_WIDTH: usize = 60;

/// Render the full report for `output`.
pub fn render(output: &LexOutput) -> String {
    Report(output).to_string()
}

/// One-line outcome, e.g. `Lexing finished with 2 error(s)`.
pub fn summary(output: &LexOutput) -> String {
    match output.diagnostics.len() {
        0 => "Lexing completed with no errors".to_string(),
        n => format!("Lexing finished with {n} error(s)"),
    }
}

/// Display adapter over a [`LexOutput`].
pub struct Report<'a>(pub &'a LexOutput);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let output = self.0;

        section(f, "TOKENS")?;
        for (n, token) in output.tokens.iter().enumerate() {
            writeln!(f, "{:4}. {token}", n + 1)?;
        }

        writeln!(f)?;
        section(f, "SYMBOL TABLE (identifiers)")?;
        if output.symbols.is_empty() {
            writeln!(f, "  (empty)")?;
        }
        for entry in &output.symbols {
            writeln!(f, "  {entry}")?;
        }

        writeln!(f)?;
        section(f, "CONSTANT TABLE (literals)")?;
        if output.constants.is_empty() {
            writeln!(f, "  (empty)")?;
        }
        for entry in &output.constants {
            writeln!(f, "  {entry}")?;
        }

        if output.has_errors() {
            writeln!(f)?;
            section(f, &format!("ERRORS ({})", output.diagnostics.len()))?;
            for diagnostic in &output.diagnostics {
                writeln!(f, "  {diagnostic}")?;
            }
        }
        Ok(())
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(f, "{rule}")?;
    writeln!(f, "{title}")?;
    writeln!(f, "{rule}")
}

#[cfg(test)]
mod tests;
