//! # hipcat
//!
//! A reader for the ESA **Hipparcos** star catalog (CDS I/239,
//! `hip_main.dat`), plain or gzip-compressed.
//!
//! Given a catalog file, `hipcat` slices the fixed-column records into typed
//! astronomical quantities and applies a proper-motion correction that shifts
//! each star's recorded position from the catalog's reference epoch
//! (J1991.25) to J2000.0. Lookups are line-oriented and single-pass: each
//! call opens the file, scans for matching records, and closes it again — no
//! caching, no index.
//!
//! ## Features
//!
//! - **Transparent gzip** — the file's leading magic bytes decide whether it
//!   is decompressed, not its name
//! - **Fixed-column parsing** — byte offsets follow the published I/239
//!   column specification
//! - **Epoch correction** — positions are propagated along the star's space
//!   velocity and re-expressed as corrected RA (hour-angle convention) and
//!   Dec (degrees)
//! - **Lazy scans** — a predicate over raw lines yields stars one at a time,
//!   in catalog order
//!
//! ## Example
//!
//! ```no_run
//! use hipcat::Hipparcos;
//!
//! let catalog = Hipparcos::open("data/hip_main.dat.gz")?;
//!
//! // Single lookup: absence is Ok(None), not an error.
//! if let Some(star) = catalog.get(54061)? {
//!     println!("Dubhe: RA {} Dec {}", star.ra(), star.dec());
//! }
//!
//! // Batch lookup preserves input order.
//! let stars = catalog.get_many(&[54061, 53910])?;
//! assert_eq!(stars.len(), 2);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod angle;
pub mod catalog;
pub mod star;
pub mod stream;

pub use angle::{Angle, Preference};
pub use catalog::{parse_record, Hipparcos, StarRecords};
pub use star::{to_polar, Designation, Star};

// Commonly used types
// Note: positions are measured in au, where a 1 mas parallax already puts a
// star at ~2e8 au. 32-bit floats would swallow the proper-motion correction
// at that scale, so all vector math is 64-bit.
pub type Vector3 = nalgebra::Vector3<f64>;
