use crate::{
    cli::{prompt::confirm, Args},
    config::NormalizerConfig,
    error::Result,
    normalizer::{ExtensionNormalizer, RunSummary},
};

/// Main CLI runner: resolves the configuration, confirms, and normalizes.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Runs the normalizer. Returns `None` when the user declines.
    pub fn execute(self) -> Result<Option<RunSummary>> {
        let skip_prompt = self.args.yes;
        let config = self.args.into_config()?;
        config.validate()?;
        log::debug!("Resolved configuration: {config:?}");

        if !confirm(skip_prompt || config.dry_run, confirmation_prompt(&config))? {
            return Ok(None);
        }

        let normalizer = ExtensionNormalizer::new(config);
        normalizer.normalize().map(Some)
    }
}

fn confirmation_prompt(config: &NormalizerConfig) -> String {
    format!(
        "Rename every file under '{}' to '{}'? This cannot be undone.",
        config.root_directory.display(),
        config.target_extension
    )
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    match Runner::new(args).execute()? {
        Some(summary) if summary.dry_run => {
            println!("Dry run complete: {summary}.");
        }
        Some(summary) => {
            println!("Normalization completed successfully: {summary}.");
        }
        None => println!("Aborted. Nothing was renamed."),
    }
    Ok(())
}
