//! Command implementations

use anyhow::{Context, Result, bail};
use colored::Colorize;
use morphmap_core::{AlignOptions, AlignmentFixture, ConfigLoader, MorphConfig, TextSize};
use morphmap_rules::{Aligner, Coordinate};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::output::{OutputFormatter, QueryReport};
use crate::{ConfigFormat, OutputFormat};

/// Effective engine options: the given or discovered config file, else defaults
fn load_options(config_path: Option<&Path>) -> Result<AlignOptions> {
    let config = ConfigLoader::load(config_path, None)?;
    Ok(config.map(|c| c.align_options()).unwrap_or_default())
}

fn load_fixture(path: &Path) -> Result<AlignmentFixture> {
    AlignmentFixture::load(path).with_context(|| format!("cannot load fixture {}", path.display()))
}

/// Align a fixture and print the result; returns `false` on error diagnostics
pub fn align_command(
    fixture_path: &Path,
    format: OutputFormat,
    config_path: Option<&Path>,
) -> Result<bool> {
    let options = load_options(config_path)?;
    debug!("Aligning {} with {:?}", fixture_path.display(), options);

    let fixture = load_fixture(fixture_path)?;
    let result = Aligner::new(options).align_fixture(&fixture);

    OutputFormatter::new(format).print_alignment(&fixture, &result)?;
    Ok(!result.has_errors())
}

pub fn query_command(
    fixture_path: &Path,
    offset: u32,
    side: Coordinate,
    format: OutputFormat,
    config_path: Option<&Path>,
) -> Result<()> {
    let options = load_options(config_path)?;
    let fixture = load_fixture(fixture_path)?;
    let text = match side {
        Coordinate::Source => &fixture.source,
        Coordinate::Output => &fixture.output,
    };
    let offset = TextSize::from(offset);
    if usize::from(offset) > text.len() {
        bail!(
            "offset {} is past the end of the {:?} text ({} bytes)",
            u32::from(offset),
            side,
            text.len()
        );
    }

    let result = Aligner::new(options).align_fixture(&fixture);
    let report = QueryReport {
        side,
        offset,
        ranges: result.ranges.containing(side, offset),
        counterpart: result.ranges.counterpart(side, offset),
        class: match side {
            Coordinate::Output => result.classes.output_class(offset),
            Coordinate::Source => result
                .classes
                .is_removed(offset)
                .then_some(morphmap_rules::CharClass::Removed),
        },
    };
    OutputFormatter::new(format).print_query(&report)
}

pub fn config_init_command(format: ConfigFormat, force: bool) -> Result<()> {
    let filename = match format {
        ConfigFormat::Json => ".morphmaprc.json",
        ConfigFormat::Toml => ".morphmaprc.toml",
    };
    let config_path = PathBuf::from(filename);
    debug!("Initializing configuration file {}", filename);

    if config_path.exists() && !force {
        bail!("Configuration file '{filename}' already exists. Use --force to overwrite.");
    }

    let config = MorphConfig::starter();
    let content = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(&config)?,
        ConfigFormat::Toml => toml::to_string_pretty(&config)?,
    };
    std::fs::write(&config_path, content)
        .with_context(|| format!("cannot write {}", config_path.display()))?;

    println!("{} Created configuration file: {filename}", "✅".green());
    Ok(())
}

pub fn config_show_command(config_path: Option<&Path>) -> Result<()> {
    let config = ConfigLoader::load(config_path, None)?;
    let from_file = config.is_some();
    let options = config.unwrap_or_default().align_options();

    println!("{}", "Configuration:".bold());
    if !from_file {
        println!("  (no configuration file found, using defaults)");
    }
    println!("  identityLeaves:     {}", options.identity_leaves);
    println!("  parentheses:        {}", options.parentheses);
    println!(
        "  unsupportedPairing: {}",
        serde_json::to_string(&options.unsupported_pairing)?.trim_matches('"')
    );
    println!(
        "  ambiguousStructure: {}",
        serde_json::to_string(&options.ambiguous_structure)?.trim_matches('"')
    );
    Ok(())
}

pub fn config_schema_command() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&MorphConfig::json_schema())?);
    Ok(())
}
