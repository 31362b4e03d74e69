//! Section generators.
//!
//! One pure function per report section. Each reads its slice of the [`ClinicalInput`] and the
//! report's [`PronounProfile`] and returns finished prose, or a fixed fallback sentence when
//! the data for that section was not provided. Invalid entries (a non-numeric IQ score) are
//! reported as a sentence in place of the paragraph; generation never fails.
//!
//! [`ClinicalInput`]: crate::input::ClinicalInput
//! [`PronounProfile`]: crate::pronouns::PronounProfile

pub mod cognitive;
pub mod personality;
pub mod summary;

pub use cognitive::{
    iq_range, iq_section, lns_section, self_report_section, trail_making_section, wasi_section,
};
pub use personality::pai_section;
pub use summary::{diagnostic_impression, summary_section};

use crate::constants::RELATIVE_TO_IQ;

/// `" relative to IQ"` when flagged, otherwise nothing.
fn relative_suffix(relative_to_iq: bool) -> &'static str {
    if relative_to_iq {
        RELATIVE_TO_IQ
    } else {
        ""
    }
}
