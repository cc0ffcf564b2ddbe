//! Data layer: lightcurve type, loading, cleaning, normalizing and writing.
//!
//! Architecture:
//! ```text
//!   TESS .fits (HDU 1: TIME, PDCSAP_FLUX)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  read columns → Lightcurve (lengths checked)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  drop NaN fluxes, keep time/flux pairs aligned
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ normalize │  flux / mean(flux)   (skipped if already normalized)
//!   └───────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  writer   │  flux,julian_date → data.csv
//!   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod writer;
