pub mod args;
pub mod color;
pub mod error;
pub mod output;
pub mod pattern;

use log::info;

use args::Settings;
use error::PatternError;
use pattern::BitSource;

/// Generate a pattern with `bits`, encode it and write it to `settings.output`.
pub fn run<S: BitSource + ?Sized>(settings: &Settings, bits: &mut S) -> Result<(), PatternError> {
    info!("Generating {} block pattern...", settings.color);
    let (_grid, canvas) = pattern::generate_pattern(bits, settings.color)?;

    let bytes = output::encode_png(&canvas)?;

    info!("Saving image to {}", settings.output.display());
    output::write_file(&settings.output, &bytes)?;
    Ok(())
}
