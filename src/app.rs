use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::config::ConvertOptions;
use crate::data::loader::{LoadError, load_fits};
use crate::data::writer::write_csv;

/// Printed once when the interactive converter starts.
pub const BANNER: &str = "\
This tool converts .fits lightcurve data into .csv data (flux,julian_date)
for the downstream transit search. It is meant for TESS satellite lightcurve
files; data from other sources is not guaranteed to work.

Sample file (lightcurve of the star WASP-126) from the MAST archive:
https://archive.stsci.edu/missions/tess/tid/s0001/0000/0000/2515/5310/tess2018206045859-s0001-0000000025155310-0120-s_lc.fits

Other stars can be found with the MAST portal's post-search filter:
https://outerspace.stsci.edu/display/TESS/6.1.6+-+Searching+For+And+Retrieving+TESS+Mission+Products";

const FILENAME_PROMPT: &str =
    "Please input the .fits data's filename or path (file extension needs to be included): ";
const NORMALIZED_PROMPT: &str =
    "Is the data normalized (where 1 = average flux, 0 = no light)? (y/n): ";

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// What a successful conversion did.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Samples read from the input table.
    pub loaded: usize,
    /// Samples left after NaN removal (and written).
    pub retained: usize,
    /// Whether fluxes were rescaled by their mean.
    pub normalized: bool,
    pub output: PathBuf,
}

/// Load, clean, normalize and write in one pass.
///
/// Every failure is fatal here, including a missing input file. The output
/// file is only touched after the whole lightcurve has been processed.
pub fn convert(options: &ConvertOptions) -> Result<Summary> {
    let raw = load_fits(options)?;
    let loaded = raw.len();

    let cleaned = raw.remove_nan().context("removing NaN fluxes")?;
    let lightcurve = if options.already_normalized {
        cleaned
    } else {
        cleaned.normalized().context("normalizing flux")?
    };

    write_csv(&options.output, &lightcurve)?;

    let summary = Summary {
        loaded,
        retained: lightcurve.len(),
        normalized: !options.already_normalized,
        output: options.output.clone(),
    };
    log::info!(
        "Converted {} -> {} ({} of {} samples kept, normalized: {})",
        options.input.display(),
        summary.output.display(),
        summary.retained,
        summary.loaded,
        summary.normalized
    );
    Ok(summary)
}

// ---------------------------------------------------------------------------
// Interactive driver
// ---------------------------------------------------------------------------

/// Prompt for the input file and normalization flag, then [`convert`].
///
/// A missing input file re-prompts for the filename; the normalization
/// answer is kept. Every other error ends the run.
pub fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    base: ConvertOptions,
) -> Result<Summary> {
    let filename = prompt(&mut input, &mut output, FILENAME_PROMPT)?;
    let normalized = prompt(&mut input, &mut output, NORMALIZED_PROMPT)?;

    let mut options = base
        .with_input(filename)
        .with_already_normalized(is_yes(&normalized));

    loop {
        match convert(&options) {
            Ok(summary) => {
                writeln!(
                    output,
                    "Task successfully completed. Data output is in {}",
                    summary.output.display()
                )?;
                return Ok(summary);
            }
            Err(e) if is_not_found(&e) => {
                log::warn!("{e}");
                writeln!(output, "Could not find {}. Please try again.", options.input.display())?;
                let filename = prompt(&mut input, &mut output, FILENAME_PROMPT)?;
                options = options.with_input(filename);
            }
            Err(e) => return Err(e),
        }
    }
}

/// `y` or `yes`, any case.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn is_not_found(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<LoadError>(), Some(LoadError::NotFound(_)))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<String> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).context("reading answer")? == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_is_yes() {
        for answer in ["y", "Y", "yes", "YES", " Yes \n"] {
            assert!(is_yes(answer), "{answer:?}");
        }
        for answer in ["n", "no", "", "yep", "1"] {
            assert!(!is_yes(answer), "{answer:?}");
        }
    }

    #[test]
    fn test_prompt_trims_answer() {
        let mut input = Cursor::new("  star.fits \r\n");
        let mut output = Vec::new();

        let answer = prompt(&mut input, &mut output, "file? ").unwrap();

        assert_eq!(answer, "star.fits");
        assert_eq!(output, b"file? ");
    }

    #[test]
    fn test_prompt_end_of_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let err = prompt(&mut input, &mut output, "file? ").unwrap_err();
        assert!(err.to_string().contains("unexpected end of input"));
    }

    #[test]
    fn test_not_found_is_recognised() {
        let err = anyhow::Error::from(LoadError::NotFound(PathBuf::from("x.fits")));
        assert!(is_not_found(&err));

        let err = anyhow::anyhow!("something else");
        assert!(!is_not_found(&err));
    }
}
