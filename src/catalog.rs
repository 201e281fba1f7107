//! Fixed-column Hipparcos catalog (CDS I/239) reader.
//!
//! Reads `hip_main.dat`, plain or gzip-compressed, as published at
//! <ftp://cdsarc.u-strasbg.fr/cats/I/239/hip_main.dat.gz>. Byte offsets below
//! reproduce the I/239 `ReadMe` column specification verbatim; they are a
//! format contract, not derivable from the data. Malformed fields are hard
//! errors carrying the offending line — the catalog is assumed well formed
//! and no defensive recovery is attempted.

use std::io::{BufRead, Lines};
use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use tracing::debug;

use crate::angle::Angle;
use crate::star::{Designation, Star};
use crate::stream::open_lines;

/// Julian date of the catalog reference epoch, J1991.25.
const CATALOG_EPOCH_JD: f64 = 2448349.0625;
/// Julian date of J2000.0, the target epoch for corrected positions.
const J2000_JD: f64 = 2451545.0;
/// Days of proper motion applied to shift positions to J2000.0.
pub const EPOCH_OFFSET_DAYS: f64 = J2000_JD - CATALOG_EPOCH_JD;

/// Largest identifier that fits the catalog's 6-character HIP field.
const MAX_HIP_NUMBER: u32 = 999_999;

// I/239 column offsets, 0-indexed half-open byte ranges.
const HIP_NUMBER: Range<usize> = 8..14;
const RA_DEGREES: Range<usize> = 51..63;
const DEC_DEGREES: Range<usize> = 64..76;
const PARALLAX_MAS: Range<usize> = 79..86;
const PM_RA_MAS_PER_YEAR: Range<usize> = 87..95;
const PM_DEC_MAS_PER_YEAR: Range<usize> = 96..104;

/// A Hipparcos catalog file on disk.
///
/// Holds only the validated path. Every lookup opens, scans, and closes its
/// own stream, so a `Hipparcos` value is cheap and carries no open handle.
#[derive(Debug, Clone)]
pub struct Hipparcos {
    path: PathBuf,
}

impl Hipparcos {
    /// Open a catalog file, verifying that the path exists.
    ///
    /// The file may be gzip-compressed; detection happens per scan from the
    /// leading magic bytes, not from the file name.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        ensure!(path.is_file(), "{} does not exist", path.display());
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// The catalog file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a single star by HIP number.
    ///
    /// Absence is a normal outcome: an identifier with no matching record
    /// returns `Ok(None)`. Identifiers wider than the catalog's 6-character
    /// field are rejected rather than truncated.
    pub fn get(&self, number: u32) -> Result<Option<Star>> {
        ensure!(
            number <= MAX_HIP_NUMBER,
            "HIP {} does not fit the catalog's 6-character identifier field",
            number
        );
        // Records lead with the record-type marker, a separator, and the
        // identifier right-justified in 6 characters: `H|      %6s`.
        let pattern = format!("H|      {:>6}", number);
        let mut records = self.stars_matching(move |line| line.starts_with(pattern.as_str()))?;
        records.next().transpose()
    }

    /// Look up several stars, one full catalog pass per identifier.
    ///
    /// Results come back in input order, each exactly what [`get`](Self::get)
    /// would return for that identifier.
    pub fn get_many(&self, numbers: &[u32]) -> Result<Vec<Option<Star>>> {
        numbers.iter().map(|&number| self.get(number)).collect()
    }

    /// Scan the catalog lazily, yielding a parsed [`Star`] for every line
    /// the predicate accepts, in catalog order.
    ///
    /// Each call re-opens the underlying stream, so the scan is restartable
    /// per call but not resumable mid-stream. The returned iterator owns the
    /// file handle and releases it on drop.
    pub fn stars_matching<F>(&self, matches: F) -> Result<StarRecords<F>>
    where
        F: FnMut(&str) -> bool,
    {
        debug!("scanning {} for matching records", self.path.display());
        let reader = open_lines(&self.path)
            .with_context(|| format!("failed to open catalog {}", self.path.display()))?;
        Ok(StarRecords {
            lines: reader.lines(),
            matches,
        })
    }
}

/// Lazy iterator over predicate-matched catalog records.
///
/// Yields `Err` for I/O failures and for lines whose designated fields do
/// not convert; iteration can continue past a bad record, but callers that
/// collect will see the first error.
pub struct StarRecords<F> {
    lines: Lines<Box<dyn BufRead>>,
    matches: F,
}

impl<F> Iterator for StarRecords<F>
where
    F: FnMut(&str) -> bool,
{
    type Item = Result<Star>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Err(e) => return Some(Err(e.into())),
                Ok(line) => {
                    if (self.matches)(&line) {
                        return Some(parse_record(&line));
                    }
                }
            }
        }
    }
}

/// Parse one catalog line into an epoch-corrected [`Star`].
///
/// Slices the contractual byte ranges, builds a provisional star at the
/// catalog epoch, then shifts its position by [`EPOCH_OFFSET_DAYS`] of
/// proper motion and re-derives RA (hour-angle convention) and Dec from the
/// corrected vector.
pub fn parse_record(line: &str) -> Result<Star> {
    let number = int_field(line, HIP_NUMBER, "HIP number")?;
    let mut star = Star::new(
        Angle::from_degrees(float_field(line, RA_DEGREES, "right ascension")?),
        Angle::from_degrees(float_field(line, DEC_DEGREES, "declination")?),
        float_field(line, PM_RA_MAS_PER_YEAR, "proper motion in RA")?,
        float_field(line, PM_DEC_MAS_PER_YEAR, "proper motion in Dec")?,
        float_field(line, PARALLAX_MAS, "parallax")?,
        0.0,
        vec![Designation::new("HIP", number)],
    );
    star.shift_epoch(EPOCH_OFFSET_DAYS);
    Ok(star)
}

fn field<'a>(line: &'a str, range: Range<usize>, name: &str) -> Result<&'a str> {
    line.get(range)
        .with_context(|| format!("record too short for {name} field: {line:?}"))
}

fn float_field(line: &str, range: Range<usize>, name: &str) -> Result<f64> {
    let raw = field(line, range, name)?;
    raw.trim()
        .parse()
        .with_context(|| format!("bad {name} value {raw:?} in record {line:?}"))
}

fn int_field(line: &str, range: Range<usize>, name: &str) -> Result<u32> {
    let raw = field(line, range, name)?;
    raw.trim()
        .parse()
        .with_context(|| format!("bad {name} value {raw:?} in record {line:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Place a value at an exact byte range of a blank record.
    fn splice(record: &mut [u8], range: Range<usize>, value: &str) {
        assert!(value.len() <= range.len(), "{value:?} overflows {range:?}");
        let at = range.end - value.len();
        record[at..range.end].copy_from_slice(value.as_bytes());
    }

    /// A synthetic record with known values at the contractual offsets.
    fn sample_record() -> String {
        let mut record = vec![b' '; 110];
        record[0..2].copy_from_slice(b"H|");
        splice(&mut record, HIP_NUMBER, "000054");
        splice(&mut record, RA_DEGREES, "10.000000");
        splice(&mut record, DEC_DEGREES, "20.000000");
        splice(&mut record, PARALLAX_MAS, "10.00");
        splice(&mut record, PM_RA_MAS_PER_YEAR, "5.00");
        splice(&mut record, PM_DEC_MAS_PER_YEAR, "-5.00");
        String::from_utf8(record).unwrap()
    }

    #[test]
    fn epoch_offset_is_fixed() {
        assert_eq!(EPOCH_OFFSET_DAYS, 3195.9375);
    }

    #[test]
    fn byte_range_contract_recovers_known_values() {
        let star = parse_record(&sample_record()).unwrap();

        assert_eq!(star.names(), &[Designation::new("HIP", 54)]);
        assert_eq!(star.parallax_mas(), 10.0);
        assert_eq!(star.ra_mas_per_year(), 5.0);
        assert_eq!(star.dec_mas_per_year(), -5.0);

        // 8.75 years of 5 mas/yr moves the position well under an arcsecond,
        // so the corrected angles stay within a few hundredths of a degree.
        assert!((star.ra().degrees() - 10.0).abs() < 1e-3);
        assert!((star.dec().degrees() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn corrected_ra_uses_hour_angle_convention() {
        let star = parse_record(&sample_record()).unwrap();
        assert_eq!(star.ra().preference(), crate::Preference::Hours);
        assert_eq!(star.dec().preference(), crate::Preference::Degrees);
        assert!((star.ra().hours() - 10.0 / 15.0).abs() < 1e-4);
    }

    #[test]
    fn parsing_is_deterministic() {
        let record = sample_record();
        let first = parse_record(&record).unwrap();
        let second = parse_record(&record).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn non_numeric_field_is_an_error() {
        let mut record = sample_record().into_bytes();
        splice(&mut record, RA_DEGREES, "not-a-num");
        let err = parse_record(&String::from_utf8(record).unwrap()).unwrap_err();
        assert!(err.to_string().contains("right ascension"), "{err}");
    }

    #[test]
    fn truncated_record_is_an_error() {
        let record = sample_record();
        let err = parse_record(&record[..90]).unwrap_err();
        assert!(err.to_string().contains("too short"), "{err}");
    }

    #[test]
    fn missing_catalog_file_is_an_existence_error() {
        let err = Hipparcos::open("/no/such/hip_main.dat").unwrap_err();
        assert!(err.to_string().contains("does not exist"), "{err}");
    }

    #[test]
    fn oversized_identifier_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hip_main.dat");
        std::fs::write(&path, sample_record()).unwrap();

        let catalog = Hipparcos::open(&path).unwrap();
        let err = catalog.get(1_000_000).unwrap_err();
        assert!(err.to_string().contains("6-character"), "{err}");
    }
}
