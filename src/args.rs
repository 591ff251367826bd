use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::color::PrimaryColor;

pub const USAGE: &str = "Usage: pp-gen <outputFile> <color (R or G or B)>";

/// Generate a mirrored 128x128 block pattern and save it as a PNG
#[derive(Parser, Debug)]
#[command(name = "pp-gen")]
#[command(version)]
#[command(override_usage = "pp-gen <outputFile> <color (R or G or B)>")]
pub struct Cli {
    /// Output file, must end in .png
    #[arg(value_name = "outputFile")]
    pub output: Option<PathBuf>,

    /// Block color: R, G or B (not case sensitive)
    #[arg(value_name = "color")]
    pub color: Option<OsString>,

    /// Anything after the color is ignored.
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<OsString>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("Insufficient arguments given")]
    InsufficientArguments,
    #[error("Output argument must be specified")]
    MissingOutput,
    #[error("Output file must be .png file")]
    NotPng,
    #[error("Colour must be specified")]
    MissingColor,
    #[error("Color must be 'R' 'G' or 'B' (not case sensitive)")]
    InvalidColor,
}

/// Validated arguments handed to the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output: PathBuf,
    pub color: PrimaryColor,
}

impl Cli {
    /// Check both positionals, output first.
    pub fn validate(self) -> Result<Settings, UsageError> {
        let (output, color) = match (self.output, self.color) {
            (Some(output), Some(color)) => (output, color),
            _ => return Err(UsageError::InsufficientArguments),
        };

        if output.as_os_str().is_empty() {
            return Err(UsageError::MissingOutput);
        }
        if !output.as_os_str().as_encoded_bytes().ends_with(b".png") {
            return Err(UsageError::NotPng);
        }

        if color.is_empty() {
            return Err(UsageError::MissingColor);
        }
        let color = color
            .to_str()
            .and_then(PrimaryColor::from_code)
            .ok_or(UsageError::InvalidColor)?;

        Ok(Settings { output, color })
    }
}
