//! The star entity: catalog quantities plus derived space vectors.
//!
//! A [`Star`] owns a 3D position (au) and velocity (au/day) in the equatorial
//! frame, derived once from its angular fields at construction. The vectors
//! exist so that proper motion can be applied as straight-line motion:
//! [`Star::shift_epoch`] slides the position along the velocity and then
//! re-derives RA/Dec, keeping the angular fields and the vector consistent.
//! The angular fields are private for exactly that reason.

use std::fmt;

use crate::angle::{Angle, Preference};
use crate::Vector3;

/// Arcseconds to radians.
const ASEC2RAD: f64 = 4.848136811095359e-6;
/// One astronomical unit in kilometers (IAU 2012).
const AU_KM: f64 = 1.495978707e8;
/// Seconds per day.
const DAY_S: f64 = 86400.0;
/// Speed of light in m/s.
const C: f64 = 299_792_458.0;

/// A catalog designation: namespace label plus integer identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Designation {
    pub catalog: String,
    pub number: u32,
}

impl Designation {
    pub fn new(catalog: &str, number: u32) -> Self {
        Self {
            catalog: catalog.to_string(),
            number,
        }
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.catalog, self.number)
    }
}

/// A star with corrected celestial coordinates.
///
/// RA and Dec always describe the same direction as the internal position
/// vector. They cannot be set independently; the one sanctioned mutation is
/// [`shift_epoch`](Star::shift_epoch), which updates both together.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    ra: Angle,
    dec: Angle,
    ra_mas_per_year: f64,
    dec_mas_per_year: f64,
    parallax_mas: f64,
    radial_km_per_s: f64,
    names: Vec<Designation>,
    position_au: Vector3,
    velocity_au_per_day: Vector3,
}

impl Star {
    /// Build a star from catalog quantities, deriving its space vectors.
    ///
    /// `ra_mas_per_year` is the proper motion in right ascension times
    /// cos(declination), as the Hipparcos catalog tabulates it. A
    /// non-positive parallax is floored at 1e-6 mas, which places the star
    /// at roughly a gigaparsec instead of dividing by zero.
    pub fn new(
        ra: Angle,
        dec: Angle,
        ra_mas_per_year: f64,
        dec_mas_per_year: f64,
        parallax_mas: f64,
        radial_km_per_s: f64,
        names: Vec<Designation>,
    ) -> Self {
        let parallax = if parallax_mas <= 0.0 {
            1.0e-6
        } else {
            parallax_mas
        };

        let distance_au = 1.0 / (parallax * 1.0e-3 * ASEC2RAD).sin();
        let (sin_ra, cos_ra) = ra.radians().sin_cos();
        let (sin_dec, cos_dec) = dec.radians().sin_cos();

        let position_au = Vector3::new(
            distance_au * cos_dec * cos_ra,
            distance_au * cos_dec * sin_ra,
            distance_au * sin_dec,
        );

        // Doppler factor: change in light travel time as the star recedes.
        let k = 1.0 / (1.0 - radial_km_per_s * 1000.0 / C);

        // Proper motion and radial velocity as orthogonal motion components
        // in au/day. Transverse rate is distance × angular rate; the
        // small-angle sine cancels against the parallax conversion, leaving
        // pm / (parallax × days-per-year).
        let pmr = ra_mas_per_year / (parallax * 365.25) * k;
        let pmd = dec_mas_per_year / (parallax * 365.25) * k;
        let rvl = radial_km_per_s * DAY_S / AU_KM * k;

        let velocity_au_per_day = Vector3::new(
            -pmr * sin_ra - pmd * sin_dec * cos_ra + rvl * cos_dec * cos_ra,
            pmr * cos_ra - pmd * sin_dec * sin_ra + rvl * cos_dec * sin_ra,
            pmd * cos_dec + rvl * sin_dec,
        );

        Self {
            ra,
            dec,
            ra_mas_per_year,
            dec_mas_per_year,
            parallax_mas,
            radial_km_per_s,
            names,
            position_au,
            velocity_au_per_day,
        }
    }

    /// Right ascension, consistent with the position vector.
    pub fn ra(&self) -> Angle {
        self.ra
    }

    /// Declination, consistent with the position vector.
    pub fn dec(&self) -> Angle {
        self.dec
    }

    /// Proper motion in RA × cos(Dec), mas/year.
    pub fn ra_mas_per_year(&self) -> f64 {
        self.ra_mas_per_year
    }

    /// Proper motion in Dec, mas/year.
    pub fn dec_mas_per_year(&self) -> f64 {
        self.dec_mas_per_year
    }

    /// Parallax, mas.
    pub fn parallax_mas(&self) -> f64 {
        self.parallax_mas
    }

    /// Radial velocity, km/s.
    pub fn radial_km_per_s(&self) -> f64 {
        self.radial_km_per_s
    }

    /// Catalog designations, in the order they were attached.
    pub fn names(&self) -> &[Designation] {
        &self.names
    }

    /// Equatorial position vector, au.
    pub fn position_au(&self) -> &Vector3 {
        &self.position_au
    }

    /// Equatorial velocity vector, au/day.
    pub fn velocity_au_per_day(&self) -> &Vector3 {
        &self.velocity_au_per_day
    }

    /// Slide the position `days` along the velocity vector and overwrite
    /// RA/Dec from the shifted position.
    ///
    /// This is the epoch correction: a positive `days` moves the star from
    /// the catalog's reference date toward a later target date. The
    /// corrected RA takes the hour-angle display convention; Dec stays in
    /// degrees.
    pub fn shift_epoch(&mut self, days: f64) {
        self.position_au += self.velocity_au_per_day * days;
        let (_, dec_rad, ra_rad) = to_polar(&self.position_au);
        self.ra = Angle::from_radians(ra_rad).with_preference(Preference::Hours);
        self.dec = Angle::from_radians(dec_rad);
    }
}

/// Convert an equatorial vector to `(distance, dec_rad, ra_rad)`.
///
/// RA is wrapped to `[0, 2π)`.
pub fn to_polar(v: &Vector3) -> (f64, f64, f64) {
    let distance = v.norm();
    let dec = (v.z / distance).asin();
    let ra = v.y.atan2(v.x).rem_euclid(std::f64::consts::TAU);
    (distance, dec, ra)
}
