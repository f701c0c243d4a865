//! Convert command implementation
//!
//! Builds the per-job configuration, wires the repository locator into the
//! resolution bridge and runs one conversion job.

use console::Style;
use tracing::{debug, info};

use crate::cli::ConvertArgs;
use crate::config::ConverterConfig;
use crate::converter::FeatureToProvisioning;
use crate::error::Result;
use crate::operations::{ConversionJob, ConvertOperation};
use crate::repository::RepositoryLocator;
use crate::resolver::ResolutionBridge;

/// Run convert command
pub fn run(args: ConvertArgs) -> Result<()> {
    let config = ConverterConfig::load(
        args.config.as_deref(),
        args.local_repository,
        args.repositories,
    )?;
    let locator = RepositoryLocator::from_config(&config);
    debug!("Repository search path: {:?}", locator.repositories());

    let operation = ConvertOperation::new(FeatureToProvisioning, ResolutionBridge::new(locator));

    let mut job = ConversionJob::new(args.input, args.output);
    let result = operation.execute(&mut job);
    debug!("Conversion job finished in state {:?}", job.state());
    result?;

    info!(
        "Resolved {} feature reference(s)",
        operation.resolver().resolutions()
    );

    let green = Style::new().green().bold();
    println!(
        "{} {} -> {}",
        green.apply_to("Converted"),
        job.input().display(),
        job.output().display()
    );

    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::FmError;
    use tempfile::TempDir;

    fn args(temp: &TempDir, input: &str) -> ConvertArgs {
        ConvertArgs {
            input: temp.path().join(input),
            output: temp.path().join("target").join("model.txt"),
            repositories: vec![temp.path().join("repo")],
            local_repository: Some(temp.path().join("m2")),
            config: None,
        }
    }

    #[test]
    fn test_run_converts_with_repository_reference() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let base = temp
            .path()
            .join("repo/org/example/base/1.0/base-1.0.slingosgifeature");
        std::fs::create_dir_all(base.parent().expect("parent")).expect("Failed to create repo");
        std::fs::write(&base, r#"{ "id": "org.example:base:1.0", "bundles": ["g:b:1"] }"#)
            .expect("Failed to write base");
        std::fs::write(
            temp.path().join("app.json"),
            r#"{ "id": "org.example:app:1.0", "prototype": { "id": "org.example:base:1.0" } }"#,
        )
        .expect("Failed to write input");

        run(args(&temp, "app.json")).expect("conversion should succeed");

        let text = std::fs::read_to_string(temp.path().join("target/model.txt"))
            .expect("output should exist");
        assert!(text.contains("[feature name=base version=1.0]"));
        assert!(text.contains("[feature name=app version=1.0]"));
    }

    #[test]
    fn test_run_missing_input() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let result = run(args(&temp, "missing.json"));
        assert!(matches!(result, Err(FmError::InputNotFound { .. })));
        assert!(!temp.path().join("target").exists());
    }
}
