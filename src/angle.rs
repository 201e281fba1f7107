//! An angle value type with a display-convention flag.
//!
//! Catalog right ascensions and declinations are both plain angles, but
//! convention prints RA in time units (hours, minutes, seconds) and Dec in
//! degrees. `Angle` stores radians and carries a [`Preference`] that only
//! affects formatting, never the stored value.

use std::fmt;

/// Display convention for an [`Angle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preference {
    /// Degree-based sexagesimal display, e.g. `+20° 15' 30.0"`.
    #[default]
    Degrees,
    /// Hour-angle sexagesimal display, e.g. `10h 30m 00.00s`.
    Hours,
}

/// An angle, stored in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    radians: f64,
    preference: Preference,
}

impl Angle {
    /// Build an angle from degrees (degree display preference).
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
            preference: Preference::Degrees,
        }
    }

    /// Build an angle from radians (degree display preference).
    pub fn from_radians(radians: f64) -> Self {
        Self {
            radians,
            preference: Preference::Degrees,
        }
    }

    /// Build an angle from hours of right ascension (hour display preference).
    pub fn from_hours(hours: f64) -> Self {
        Self {
            radians: (hours * 15.0).to_radians(),
            preference: Preference::Hours,
        }
    }

    /// Replace the display preference, keeping the value.
    pub fn with_preference(self, preference: Preference) -> Self {
        Self { preference, ..self }
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    /// The angle in hours of right ascension (15° per hour).
    pub fn hours(&self) -> f64 {
        self.radians.to_degrees() / 15.0
    }

    pub fn preference(&self) -> Preference {
        self.preference
    }
}

/// Split a value into sign, whole units, minutes, and seconds of sixty.
fn sexagesimal(value: f64) -> (char, u64, u64, f64) {
    let sign = if value < 0.0 { '-' } else { '+' };
    let value = value.abs();
    let whole = value.trunc();
    let minutes = ((value - whole) * 60.0).trunc();
    let seconds = ((value - whole) * 60.0 - minutes) * 60.0;
    (sign, whole as u64, minutes as u64, seconds)
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.preference {
            Preference::Hours => {
                let (sign, h, m, s) = sexagesimal(self.hours());
                if sign == '-' {
                    write!(f, "-")?;
                }
                write!(f, "{h:02}h {m:02}m {s:05.2}s")
            }
            Preference::Degrees => {
                let (sign, d, m, s) = sexagesimal(self.degrees());
                write!(f, "{sign}{d:02}\u{00b0} {m:02}' {s:04.1}\"")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_conversions_agree() {
        let a = Angle::from_degrees(180.0);
        assert!((a.radians() - std::f64::consts::PI).abs() < 1e-15);
        assert!((a.hours() - 12.0).abs() < 1e-12);

        let b = Angle::from_hours(6.0);
        assert!((b.degrees() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn preference_changes_display_not_value() {
        let a = Angle::from_degrees(157.5);
        let b = a.with_preference(Preference::Hours);
        assert_eq!(a.radians(), b.radians());
        assert_eq!(format!("{b}"), "10h 30m 00.00s");
        assert_eq!(format!("{a}"), "+157° 30' 00.0\"");
    }

    #[test]
    fn negative_declination_formats_with_sign() {
        let a = Angle::from_degrees(-20.2583);
        let shown = format!("{a}");
        assert!(shown.starts_with("-20° 15'"), "got {shown}");
    }
}
