//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::config_resolver::{init_target, repo_config_files};

const DEFAULT_CONFIG: &str = r"# lookmlint configuration

# Words that must appear upper-case in labels (e.g. `ID`, not `Id`)
acronyms:
  - ID
  - SQL
  - URL

# Words that must be spelled out in labels (e.g. `Quantity`, not `Qty`)
abbreviations:
  - qty
  - amt

# Per-check settings; every check is enabled unless disabled here.
# Run `lookmlint list-checks` for the full list.
checks:
  duplicate-view-labels:
    enabled: true
  # missing-sql-definitions:
  #   enabled: false
";

/// Runs the init command, writing the config into `repo`.
pub fn run(repo: &Path, force: bool) -> Result<()> {
    let target = init_target(repo);

    if !force {
        if let Some(existing) = repo_config_files(repo).next() {
            bail!(
                "Configuration file already exists at {}. Use --force to overwrite.",
                existing.path.display()
            );
        }
    }

    std::fs::write(&target, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!("Created {}", target.display());
    println!("\nNext steps:");
    println!("  1. Edit {} to list your acronyms and abbreviations", target.display());
    println!("  2. Run: lookmlint lint {}", repo.display());

    Ok(())
}
