//! Objective personality testing (PAI) paragraphs.

use crate::constants::SUBSCALE_SENTINEL;
use crate::input::{PaiInput, Validity};
use crate::library::{scale_domain, ClinicalParagraphLibrary, PAI_SCALE_STRUCTURE};
use crate::pronouns::PronounProfile;

const VALIDITY_NOT_SPECIFIED: &str = "Validity status not specified.";

const NO_PSYCHOPATHOLOGY: &str = "All of the clinical scales (Full-Scale Profile, Subscale Profile, \
     and Supplemental Indices) are subclinical. As such, there is no diagnosable psychopathology.";

fn validity_paragraph(validity: Validity, profile: &PronounProfile) -> String {
    let name = profile.honorific_surname();
    let reflexive = profile.reflexive();

    match validity {
        Validity::Valid => format!(
            "Results of the PAI are valid. {name} responded consistently and there is no indication \
             that {} attempted to portray {reflexive} in a more positive or more negative manner than \
             may actually be the case.",
            profile.subject()
        ),
        Validity::Infrequency => format!(
            "{name} did not attend appropriately to item content in responding to the PAI items."
        ),
        Validity::NegativeImpression => format!(
            "{name} presented an extremely negative evaluation of {reflexive} and {} life. {} also \
             may be making a “cry for help.” Some deliberate distortion of the clinical picture may \
             also be present.",
            profile.possessive(),
            profile.subject_capitalized()
        ),
        Validity::PositiveImpression => format!(
            "{name} attempted to portray {reflexive} as exceptionally free of the common \
             shortcomings to which most individuals will admit."
        ),
        Validity::Unspecified => VALIDITY_NOT_SPECIFIED.to_string(),
    }
}

/// Checked keys for a domain, with the sentinel filled in for subscale-less domains.
fn checked_keys<'a>(domain_has_subscales: bool, labels: &'a [String]) -> Vec<&'a str> {
    let keys: Vec<&str> = labels
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();
    if keys.is_empty() && !domain_has_subscales {
        vec![SUBSCALE_SENTINEL]
    } else {
        keys
    }
}

/// PAI paragraphs, in document order.
///
/// Empty when no PAI form was administered. With no diagnosable psychopathology the section
/// ends with the fixed subclinical sentence and checked subscales are ignored.
pub fn pai_section(
    pai: &PaiInput,
    profile: &PronounProfile,
    library: &ClinicalParagraphLibrary,
) -> Vec<String> {
    let Some(form) = pai.form else {
        return Vec::new();
    };

    let mut paragraphs = vec![
        format!("{}.", form.label()),
        validity_paragraph(pai.validity, profile),
    ];

    if !pai.psychopathology {
        paragraphs.push(NO_PSYCHOPATHOLOGY.to_string());
        return paragraphs;
    }

    for domain in pai.scales.keys() {
        if scale_domain(domain).is_none() {
            tracing::warn!("unrecognised PAI domain '{domain}', skipping");
        }
    }

    let replacements = profile.replacements();
    for domain in PAI_SCALE_STRUCTURE {
        let Some(labels) = pai.scales.get(domain.name) else {
            continue;
        };
        let keys = checked_keys(!domain.subscales.is_empty(), labels);
        if let Some(text) = library.compose(domain.name, &keys, &replacements) {
            paragraphs.push(text);
        }
    }

    paragraphs
}
