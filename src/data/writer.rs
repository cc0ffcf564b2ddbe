use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Serialize, Serializer};

use super::model::{FluxPrecision, Lightcurve, Sample};

/// One output row. Field order and names define the CSV header.
#[derive(Debug, Serialize)]
struct Row {
    flux: Flux,
    #[serde(serialize_with = "lowercase_nan")]
    julian_date: f64,
}

/// A flux printed at the width it was stored with, so a Float32 column
/// keeps its short form (`0.9987654`, not `0.9987654089927673`).
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Flux {
    Single(f32),
    Double(f64),
}

impl Row {
    fn new(sample: Sample, precision: FluxPrecision) -> Self {
        let flux = match precision {
            FluxPrecision::Single => Flux::Single(sample.flux as f32),
            FluxPrecision::Double => Flux::Double(sample.flux),
        };
        Row {
            flux,
            julian_date: sample.timestamp,
        }
    }
}

/// NaN is written as `nan`, the spelling the downstream tools expect.
fn lowercase_nan<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_str("nan")
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Serialize `lc` as `flux,julian_date` rows into any writer.
pub fn write_to<W: Write>(writer: W, lc: &Lightcurve) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for sample in lc.samples() {
        wtr.serialize(Row::new(sample, lc.precision()))?;
    }

    // serde only emits the header alongside the first row
    if lc.is_empty() {
        wtr.write_record(["flux", "julian_date"])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write `lc` to `path`.
///
/// Rows go to a `.tmp` sibling first, which replaces `path` only once every
/// row has been flushed. A failed write leaves any existing `path` alone.
pub fn write_csv(path: &Path, lc: &Lightcurve) -> Result<()> {
    let tmp = tmp_path(path);

    let result = File::create(&tmp)
        .with_context(|| format!("failed to create {}", tmp.display()))
        .and_then(|file| {
            write_to(file, lc).with_context(|| format!("failed to write {}", tmp.display()))
        })
        .and_then(|()| {
            fs::rename(&tmp, path).with_context(|| {
                format!("failed to move {} to {}", tmp.display(), path.display())
            })
        });

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result?;

    log::info!("Wrote {} rows to {}", lc.len(), path.display());
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn render(lc: &Lightcurve) -> String {
        let mut buf = Vec::new();
        write_to(&mut buf, lc).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_flux_first_then_date() {
        let lc = Lightcurve::new(vec![1.0, 3.0, 4.0], vec![0.5, 1.0, 1.5]).unwrap();
        assert_eq!(
            render(&lc),
            "flux,julian_date\n0.5,1.0\n1.0,3.0\n1.5,4.0\n"
        );
    }

    #[test]
    fn test_tess_precision_survives() {
        let lc = Lightcurve::new(vec![1325.29323665], vec![0.9987654]).unwrap();
        assert_eq!(render(&lc), "flux,julian_date\n0.9987654,1325.29323665\n");
    }

    #[test]
    fn test_single_precision_flux() {
        let lc = Lightcurve::new(vec![1325.5, 1326.0], vec![0.9987654f32 as f64, 1.1f32 as f64])
            .unwrap()
            .with_precision(FluxPrecision::Single);
        assert_eq!(
            render(&lc),
            "flux,julian_date\n0.9987654,1325.5\n1.1,1326.0\n"
        );
    }

    #[test]
    fn test_nan_timestamp_lowercase() {
        let lc = Lightcurve::new(vec![f64::NAN, 2.0], vec![1.0, 1.0]).unwrap();
        assert_eq!(render(&lc), "flux,julian_date\n1.0,nan\n1.0,2.0\n");
    }

    #[test]
    fn test_empty_has_header() {
        let lc = Lightcurve::new(Vec::new(), Vec::new()).unwrap();
        assert_eq!(render(&lc), "flux,julian_date\n");
    }

    #[test]
    fn test_write_csv_replaces_target() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "stale").unwrap();

        let lc = Lightcurve::new(vec![2.0], vec![1.0]).unwrap();
        write_csv(&path, &lc).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "flux,julian_date\n1.0,2.0\n");
        assert!(!dir.path().join("data.csv.tmp").exists());
    }

    #[test]
    fn test_write_csv_bad_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("data.csv");

        let lc = Lightcurve::new(vec![2.0], vec![1.0]).unwrap();
        let err = write_csv(&path, &lc).unwrap_err();
        assert!(format!("{err:#}").contains("failed to create"));
        assert!(!path.exists());
    }

    #[test]
    fn test_tmp_path() {
        assert_eq!(tmp_path(Path::new("out/data.csv")), PathBuf::from("out/data.csv.tmp"));
    }
}
