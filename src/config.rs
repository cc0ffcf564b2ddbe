use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Conversion options
// ---------------------------------------------------------------------------

/// Where to read from, where to write to, and how to treat the flux column.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Input FITS file.
    pub input: PathBuf,
    /// Output CSV file.
    pub output: PathBuf,
    /// HDU holding the lightcurve table. TESS files use the first extension.
    pub hdu: usize,
    pub time_column: String,
    pub flux_column: String,
    /// Skip normalization when the fluxes are already relative to 1.0.
    pub already_normalized: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::from("data.csv"),
            hdu: 1,
            time_column: "TIME".to_string(),
            flux_column: "PDCSAP_FLUX".to_string(),
            already_normalized: false,
        }
    }
}

impl ConvertOptions {
    pub fn with_input(mut self, input: impl AsRef<Path>) -> Self {
        self.input = input.as_ref().to_path_buf();
        self
    }

    pub fn with_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = output.as_ref().to_path_buf();
        self
    }

    pub fn with_already_normalized(mut self, already_normalized: bool) -> Self {
        self.already_normalized = already_normalized;
        self
    }
}
