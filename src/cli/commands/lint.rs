//! Lint one document and print the report

use std::path::Path;
use std::process::ExitCode;

use claudemd_lint::config::LintConfig;
use claudemd_lint::output::{OutputMode, not_found_message};
use claudemd_lint::source::{SourceError, SourceFile};

/// Lint `file`, exiting with failure when the report has errors
pub fn lint(file: &str, config: Option<&Path>, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let path = Path::new(file);
    let source = match SourceFile::read(path) {
        Ok(source) => source,
        Err(SourceError::NotFound { .. }) => {
            eprint!("{}", not_found_message(file));
            return Ok(ExitCode::FAILURE);
        },
        Err(err) => return Err(err.into()),
    };

    let config = LintConfig::resolve(config, SourceFile::directory(path))?;
    let report = config.engine().lint(&source.content, &source.label);
    report.render(mode);

    if report.has_errors() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
