//! # CLI
//!
//! Command definitions and their implementations. Every `cmd_*` function
//! writes to the given writer so it can be exercised from tests.

use crate::config::ChemspiConfig;
use crate::record_dir::RecordDir;
use chemspi_core::{Compound, Error, FIELD_NAMES, Result, preview_data_uri};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Compound backed by a record directory.
pub type DirCompound = Compound<RecordDir>;

#[derive(Debug, Parser)]
#[command(name = "chemspi", version, about = "Inspect saved ChemSpider compound records")]
pub struct Cli {
    /// Root directory of saved records.
    #[arg(long, env = "CHEMSPI_RECORDS", global = true)]
    pub records: Option<PathBuf>,

    /// Host used when printing image URLs.
    #[arg(long, env = "CHEMSPI_IMAGE_HOST", global = true)]
    pub image_host: Option<String>,

    /// JSON configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the ID, image URL and every available field.
    Show { csid: String },
    /// Print a single field.
    Field { csid: String, name: String },
    /// List field names accepted by `field`.
    Fields,
    /// Print a MOL file (2D unless --three-d).
    Mol {
        csid: String,
        #[arg(long)]
        three_d: bool,
    },
    /// Write the 2D depiction.
    Image {
        csid: String,
        /// Write PNG bytes to this file instead of stdout.
        #[arg(long, conflicts_with = "data_uri")]
        out: Option<PathBuf>,
        /// Print a base64 `data:` URI.
        #[arg(long)]
        data_uri: bool,
    },
}

/// Resolve configuration from file, args and environment.
pub fn resolve_config(cli: &Cli) -> Result<ChemspiConfig> {
    let base = match &cli.config {
        Some(path) => ChemspiConfig::load(path)?,
        None => ChemspiConfig::default(),
    };
    Ok(base.merged(cli.records.clone(), cli.image_host.clone()))
}

/// Open a compound from the configured record directory.
pub fn open_compound(config: &ChemspiConfig, csid: &str) -> Result<DirCompound> {
    let client = RecordDir::new(&config.records_dir).with_image_host(config.image_host.clone());
    Compound::new(Arc::new(client), csid)
}

/// Dispatch a parsed command line.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let config = resolve_config(cli)?;
    debug!(records = %config.records_dir.display(), "using record directory");

    match &cli.command {
        Command::Show { csid } => cmd_show(&open_compound(&config, csid)?, out),
        Command::Field { csid, name } => cmd_field(&open_compound(&config, csid)?, name, out),
        Command::Fields => cmd_fields(out),
        Command::Mol { csid, three_d } => cmd_mol(&open_compound(&config, csid)?, *three_d, out),
        Command::Image {
            csid,
            out: path,
            data_uri,
        } => cmd_image(&open_compound(&config, csid)?, path.as_deref(), *data_uri, out),
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Print every field the record carries; absent fields are skipped.
pub fn cmd_show(compound: &DirCompound, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "csid: {}", compound.csid())?;
    writeln!(out, "image_url: {}", compound.image_url())?;
    for name in FIELD_NAMES {
        match compound.field(name) {
            Ok(value) => writeln!(out, "{}: {}", name, value)?,
            Err(Error::MissingField(_)) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

pub fn cmd_field(compound: &DirCompound, name: &str, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", compound.field(name)?)?;
    Ok(())
}

pub fn cmd_fields(out: &mut dyn Write) -> Result<()> {
    for name in FIELD_NAMES {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

pub fn cmd_mol(compound: &DirCompound, three_d: bool, out: &mut dyn Write) -> Result<()> {
    let mol = if three_d {
        compound.mol_3d()?
    } else {
        compound.mol_2d()?
    };
    out.write_all(mol.as_bytes())?;
    Ok(())
}

/// Emit the thumbnail as a file, a data URI, or raw bytes on `out`.
pub fn cmd_image(
    compound: &DirCompound,
    path: Option<&Path>,
    data_uri: bool,
    out: &mut dyn Write,
) -> Result<()> {
    if data_uri {
        writeln!(out, "{}", preview_data_uri(compound)?)?;
    } else if let Some(path) = path {
        std::fs::write(path, compound.image()?)?;
        info!(path = %path.display(), csid = %compound.csid(), "wrote thumbnail");
    } else {
        out.write_all(compound.image()?)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_show() {
        let cli = Cli::try_parse_from(["chemspi", "--records", "/r", "show", "682"]).unwrap();
        assert_eq!(cli.records, Some(PathBuf::from("/r")));
        assert!(matches!(cli.command, Command::Show { ref csid } if csid == "682"));
    }

    #[test]
    fn parses_mol_three_d() {
        let cli = Cli::try_parse_from(["chemspi", "mol", "682", "--three-d"]).unwrap();
        assert!(matches!(cli.command, Command::Mol { three_d: true, .. }));
    }

    #[test]
    fn image_out_conflicts_with_data_uri() {
        let parsed =
            Cli::try_parse_from(["chemspi", "image", "1", "--out", "a.png", "--data-uri"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn bad_csid_fails_before_any_read() {
        let config = ChemspiConfig::default();
        assert!(matches!(
            open_compound(&config, "ethanol"),
            Err(Error::InvalidCsid(_))
        ));
    }
}
