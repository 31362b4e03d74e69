//! Clinical paragraph library.
//!
//! Canned PAI interpretation paragraphs keyed by domain and subscale, plus the checkbox
//! catalogue the clinician selects from. Templates are written for a female patient with the
//! `[Mr./Ms. Patient last name]` placeholder; [`crate::substitution`] rewrites them per
//! [`crate::pronouns::PronounProfile`].

use crate::constants::SUBSCALE_SENTINEL;
use crate::substitution::{apply_replacements, Replacement};

/// One library domain and its `(subkey, template)` pairs.
#[derive(Debug, Clone, Copy)]
pub struct LibraryDomain {
    pub name: &'static str,
    pub paragraphs: &'static [(&'static str, &'static str)],
}

/// One domain in the PAI checkbox catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleDomain {
    pub name: &'static str,
    pub subscales: &'static [&'static str],
}

impl ScaleDomain {
    /// Keys a clinician can check for this domain; subscale-less domains offer the sentinel.
    pub fn checkbox_keys(&self) -> Vec<&'static str> {
        if self.subscales.is_empty() {
            vec![SUBSCALE_SENTINEL]
        } else {
            self.subscales.to_vec()
        }
    }
}

/// PAI domains and subscales in presentation order.
pub const PAI_SCALE_STRUCTURE: [ScaleDomain; 13] = [
    ScaleDomain {
        name: "Somatic",
        subscales: &[],
    },
    ScaleDomain {
        name: "Anxiety",
        subscales: &["Cognitive", "Affective", "Physiological"],
    },
    ScaleDomain {
        name: "Anxiety Related Disorders",
        subscales: &["Obsessive-Compulsive", "Phobias", "Traumatic Stress"],
    },
    ScaleDomain {
        name: "Depression",
        subscales: &["Scores > 95T", "Cognitive", "Affective", "Physiological"],
    },
    ScaleDomain {
        name: "Suicidal Ideation",
        subscales: &[],
    },
    ScaleDomain {
        name: "Aggression",
        subscales: &[
            "Aggressive Attitude",
            "Verbal Aggression",
            "Physical Aggression",
        ],
    },
    ScaleDomain {
        name: "Paranoia",
        subscales: &["Hypervigilance", "Persecution", "Resentment"],
    },
    ScaleDomain {
        name: "Schizophrenia",
        subscales: &[
            "Schizophrenia",
            "Psychotic Experiences > 85T",
            "Social Detachment",
            "Thought Disorder",
        ],
    },
    ScaleDomain {
        name: "Bipolar",
        subscales: &["Activity Level", "Grandiosity", "Irritability"],
    },
    ScaleDomain {
        name: "Borderline",
        subscales: &[
            "Affective Instability",
            "Identity",
            "Negative Relationships",
            "Self-Harm",
        ],
    },
    ScaleDomain {
        name: "Antisocial",
        subscales: &[
            "Scores > 82T",
            "Antisocial Behaviors",
            "Egocentricity",
            "Stimulus-Seeking",
        ],
    },
    ScaleDomain {
        name: "Nonsupport",
        subscales: &["Nonsupport", "Scores > 88T"],
    },
    ScaleDomain {
        name: "Alcohol/Drug",
        subscales: &["Alcohol/Drug", "Scores > 84T"],
    },
];

/// Looks up a domain in the checkbox catalogue.
pub fn scale_domain(name: &str) -> Option<&'static ScaleDomain> {
    PAI_SCALE_STRUCTURE.iter().find(|d| d.name == name)
}

static PAI_PARAGRAPHS: &[LibraryDomain] = &[
    LibraryDomain {
        name: "Somatic",
        paragraphs: &[
            (
                "_",
                "[Mr./Ms. Patient last name] has significant concerns about somatic functioning and probable impairment arising from somatic symptoms. She may feel she is in poor health, with the health problems perceived as complex and difficult to treat.",
            ),
        ],
    },
    LibraryDomain {
        name: "Anxiety",
        paragraphs: &[
            (
                "Cognitive",
                "[Mr./Ms. Patient last name] has significant anxiety. She is probably tense much of the time. She may engage in ruminative worry and is vigilant to potential danger. She is concerned about current (often uncontrollable) issues that compromise her ability to concentrate and attend.",
            ),
            (
                "Affective",
                "Anxiety tends to be persistent and reflects a dispositionally low threshold for the experience of events as dangerous or threatening. [Mr./Ms. Patient last name] may have difficulty relaxing and tends to be easily fatigued as a result of stress.",
            ),
            (
                "Physiological",
                "[Mr./Ms. Patient last name] may experience somatic expression of anxiety, particularly autonomic nervous system features such as racing heart, sweaty palms, rapid breathing, and dizziness.",
            ),
        ],
    },
    LibraryDomain {
        name: "Anxiety Related Disorders",
        paragraphs: &[
            (
                "Obsessive-Compulsive",
                "[Mr./Ms. Patient last name] is a fairly rigid individual who has difficulty tolerating changes in routine or unexpected events, and will be wary of situations with strong affective demands. Obsessional defenses may be failing to control marked anxiety and intrusive thoughts are likely to be present. [Mr./Ms. Patient last name] may fear her own impulses and may doubt her ability to control them.",
            ),
            (
                "Phobias",
                "[Mr./Ms. Patient last name] may experience impairing phobic behaviors, with avoidance of a feared object(s) or situation(s).",
            ),
            (
                "Traumatic Stress",
                "There is past experience of a disturbing traumatic event that continues to be a source of distress and continues to produce recurrent episodes of anxiety.",
            ),
            (
                "Scores > 90T",
                "Past trauma (single or multiple) is an overriding focus of [Mr./Ms. Patient last name]’s life and she views herself as having been severely damaged, perhaps irreparably, by having experienced it.",
            ),
        ],
    },
    LibraryDomain {
        name: "Depression",
        paragraphs: &[
            (
                "_",
                "[Mr./Ms. Patient last name] has prominent unhappiness and dysphoria. She is probably despondent much of the time and withdraws from activities that had been previously enjoyed.",
            ),
            (
                "Scores > 95T",
                "A major depressive episode is indicated. [Mr./Ms. Patient last name] may feel hopeless, discouraged, and useless. She is socially withdrawn and feels misunderstood by, and unimportant to, others. Typically, she has little energy to pursue social role responsibilities, let alone outside interests, and little motivation with which to do either.",
            ),
            (
                "Cognitive",
                "[Mr./Ms. Patient last name] is likely to report feeling hopeless and as having failed at important life tasks. She feels helpless and powerless to bring about positive changes in her life. Concentration problems and indecisiveness also are likely to be present.",
            ),
            (
                "Affective",
                "[Mr./Ms. Patient last name] is experiencing distressed, unhappy, and has lost interest in normal activities and pleasure in things that were previously enjoyed.",
            ),
            (
                "Physiological",
                "Test items reflect the vegetative signs of depression (e.g., sleep problems, appetite problems, lack of energy or drive).",
            ),
        ],
    },
    LibraryDomain {
        name: "Suicidal Ideation",
        paragraphs: &[
            (
                "_",
                "[Mr./Ms. Patient last name] reports significant suicidal ideation (past or present). She has or has been typically anxious and depressed, seen the people around her as unsupportive, had imminent plans for self-harm. She has or has had little hope for the future, been in despair, felt useless to others, and unable to help herself. [Mr./Ms. Patient last name] may have felt rejected by the people around her and been bitter about the way others have treated her.",
            ),
        ],
    },
    LibraryDomain {
        name: "Aggression",
        paragraphs: &[
            (
                "Aggressive Attitude",
                "[Mr./Ms. Patient last name] is very prone to anger, often losing her temper with little provocation. She may use anger to intimidate or control others.",
            ),
            (
                "Verbal Aggression",
                "Verbal outbursts are likely to be abusive. She is generally not well liked, being viewed as hostile. It is likely that others perceive her as being considerably more hostile than she acknowledges.",
            ),
            (
                "Physical Aggression",
                "[Mr./Ms. Patient last name]’s control often lapses, resulting in more extreme displays of anger including damage to property and threats to assault others. Some of these displays may be sudden and unexpected, as she may not display her anger readily when it is experienced. It is likely that others around her are intimidated by her temper and the potential for physical violence, and go to great lengths to avoid provoking her.",
            ),
        ],
    },
    LibraryDomain {
        name: "Paranoia",
        paragraphs: &[
            (
                "Hypervigilance",
                "[Mr./Ms. Patient last name] is a hypersensitive person who spends a great deal of time monitoring the environment for evidence that others are not trustworthy and may be trying to harm or discredit her in some way. She will question and mistrust the motives of those around her as a matter of course, despite the nature or history of the relationships. As a result, relationships with others are likely to be strained.",
            ),
            (
                "Persecution",
                "[Mr./Ms. Patient last name] may be quick to feel that she is being treated inequitably and believes that there is a concerted effort among others to undermine her best interests.",
            ),
            (
                "Resentment",
                "[Mr./Ms. Patient last name] may attribute any misfortune to the neglect of others and discredit the successes of others as being the result of luck or favoritism. She is envious of others and disinclined to assist them.",
            ),
        ],
    },
    LibraryDomain {
        name: "Schizophrenia",
        paragraphs: &[
            (
                "Schizophrenia",
                "[Mr./Ms. Patient last name] may be experiencing unusual perceptual or sensory events and/or unusual ideas that may involve delusional beliefs.",
            ),
            (
                "Psychotic Experiences > 85T",
                "[Mr./Ms. Patient last name] may be experiencing an active psychotic episode, with poor judgment and breakdown in reality testing as hallmark features; full-blown hallucinations or delusions are probable.",
            ),
            (
                "Social Detachment",
                "[Mr./Ms. Patient last name] neither desires nor enjoys close relationships; social isolation and detachment may serve to decrease the sense of discomfort that interpersonal contact fosters. The lack of interest in others is mirrored in a lack of self-interest. She is particularly disconcerted by strong emotions, which she tends not to experience and does not understand in others.",
            ),
            (
                "Thought Disorder",
                "[Mr./Ms. Patient last name] may have a loosening of associations and increased difficulties in self-expression and communication.",
            ),
        ],
    },
    LibraryDomain {
        name: "Bipolar",
        paragraphs: &[
            (
                "Activity Level",
                "[Mr./Ms. Patient last name] may take on more than she can handle and react with frustration and anger to suggestions of reducing activity levels. She is typically impulsive and has little capacity to delay gratification; her lack of judgment in such situations likely leads to significant impairment in role functioning. She may experience flight of ideas, and her grandiosity may be delusional in proportion. Interactions with others are likely to be problematic because her self-importance, hostility, and narcissism impede her ability to be empathetic in relationships.",
            ),
            (
                "Grandiosity",
                "[Mr./Ms. Patient last name] may have little capacity to recognize personal limitations, to the point where she is not able to think clearly about her capabilities. These beliefs may border on delusional in terms of having special and unique talents that will lead her to fame and fortune. Others may view her as self-centered and narcissistic.",
            ),
            (
                "Irritability",
                "[Mr./Ms. Patient last name] is very volatile in response to frustration and her judgment in such situations may be poor. The quality of mood state can change very rapidly and she is prone to lash out at others who she views as the source of her frustration.",
            ),
        ],
    },
    LibraryDomain {
        name: "Borderline",
        paragraphs: &[
            (
                "Affective Instability",
                "[Mr./Ms. Patient last name] may have a propensity to alternate rapidly between various negative affects (e.g., become anxious, angry, depressed, and then irritable in rapid succession). She is highly responsive emotionally, typically manifesting rapid and extreme mood swings.",
            ),
            (
                "Identity",
                "[Mr./Ms. Patient last name] has significant identity issues beyond what is expected during adulthood. This may involve sudden and unpredictable reversals in life plans and directions. She likely will have feelings of emptiness, lack of fulfillment, and boredom.",
            ),
            (
                "Negative Relationships",
                "[Mr./Ms. Patient last name] has a tendency to become involved in relationships that are very intense and chaotic. She believes that important others have not met her needs, and she feels betrayed and exploited as a result. She will experience distrust and pessimism surrounding current and future relationships. There is likely a history of numerous problems and failures in past attachment relationships.",
            ),
            (
                "Self-Harm",
                "[Mr./Ms. Patient last name] will tend to act impulsively without much attention paid to the consequences of the acts. These acts will be viewed by others as self-damaging or self-destructive.",
            ),
        ],
    },
    LibraryDomain {
        name: "Antisocial",
        paragraphs: &[
            (
                "_",
                "[Mr./Ms. Patient last name] is likely to be impulsive, perhaps with a history of reckless and/or antisocial acts. Others may see her as callous in her relationships, and long-lasting friendships tend to be the exception rather than the rule.",
            ),
            (
                "Scores > 82T",
                "[Mr./Ms. Patient last name] is likely to be unreliable and irresponsible, and she probably has had little sustained success in either social or occupational realms. She tends to have a coldly pragmatic approach to relationships and will exploit such interactions to suit her own needs. She tends to be impulsive in her approach to life and has a history of conflicts with authority figures.",
            ),
            (
                "Antisocial Behaviors",
                "[Mr./Ms. Patient last name] has a history of difficulties with authority and with social convention. A pattern of antisocial behavior was probably first evident in adolescence.",
            ),
            (
                "Egocentricity",
                "[Mr./Ms. Patient last name] will tend to be seen as egocentric, with little regard for others or the opinions of the society around her. In her desire to satisfy her own goals and impulses, she may take advantage of others, even those who are closest to her.",
            ),
            (
                "Stimulus-Seeking",
                "[Mr./Ms. Patient last name] is likely to manifest behavior that is reckless and potentially dangerous to herself and/or those around her. She craves novelty and stimulation, is easily bored by routine and convention, and may act impulsively in an effort to stir up excitement.",
            ),
        ],
    },
    LibraryDomain {
        name: "Nonsupport",
        paragraphs: &[
            (
                "Nonsupport",
                "[Mr./Ms. Patient last name] perceives others as offering little support; family relationships may be distant, whereas friends are generally seen as unavailable or not helpful when needed.",
            ),
            (
                "Scores > 88T",
                "[Mr./Ms. Patient last name] perceives that she has little or no social support system to help her through significant life events. She tends to be highly critical of herself as well as of other people, whom she perceives as uncaring and rejecting. She has few emotional resources for dealing with crises and is particularly prone to severe reactions to stress.",
            ),
        ],
    },
    LibraryDomain {
        name: "Alcohol/Drug",
        paragraphs: &[
            (
                "Alcohol/Drug",
                "[Mr./Ms. Patient last name] is likely to have experienced problems indicative of alcohol or drug abuse at some point in her life, such as difficulties in interpersonal relationships or work performance.",
            ),
            (
                "Scores > 84T",
                "[Mr./Ms. Patient last name] may have experienced numerous alcohol or drug-related problems, including difficulties in interpersonal relationships, difficulties on the job, and possible health complications. She may have been unable to cut down on her substance use despite repeated attempts at sobriety.",
            ),
        ],
    },
];

/// Result of a `(domain, subkey)` lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryLookup {
    Found(&'static str),
    MissingDomain,
    MissingSubscale,
}

/// Fixed domain -> subkey -> template mapping.
#[derive(Debug, Clone, Copy)]
pub struct ClinicalParagraphLibrary {
    domains: &'static [LibraryDomain],
}

impl Default for ClinicalParagraphLibrary {
    fn default() -> Self {
        Self::pai()
    }
}

impl ClinicalParagraphLibrary {
    /// The PAI interpretation paragraphs.
    pub fn pai() -> Self {
        Self {
            domains: PAI_PARAGRAPHS,
        }
    }

    pub fn domains(&self) -> &'static [LibraryDomain] {
        self.domains
    }

    pub fn lookup(&self, domain: &str, subkey: &str) -> LibraryLookup {
        let Some(entry) = self.domains.iter().find(|d| d.name == domain) else {
            return LibraryLookup::MissingDomain;
        };
        entry
            .paragraphs
            .iter()
            .find(|(key, _)| *key == subkey)
            .map_or(LibraryLookup::MissingSubscale, |(_, text)| {
                LibraryLookup::Found(text)
            })
    }

    /// Builds one paragraph for a domain from its checked subkeys.
    ///
    /// Each template found is rewritten with `replacements` and trimmed; the results are joined
    /// with single spaces in the order given. Missing entries are logged and skipped. Returns
    /// `None` when nothing was found.
    pub fn compose(
        &self,
        domain: &str,
        checked: &[&str],
        replacements: &[Replacement],
    ) -> Option<String> {
        let mut texts = Vec::with_capacity(checked.len());

        for subkey in checked {
            match self.lookup(domain, subkey) {
                LibraryLookup::Found(template) => {
                    let text = apply_replacements(template, replacements);
                    texts.push(text.trim().to_string());
                }
                LibraryLookup::MissingDomain => {
                    tracing::warn!("missing paragraph for domain '{domain}', subkey '{subkey}': unknown domain");
                }
                LibraryLookup::MissingSubscale => {
                    tracing::warn!("missing paragraph for domain '{domain}', subkey '{subkey}'");
                }
            }
        }

        if texts.is_empty() {
            None
        } else {
            Some(texts.join(" "))
        }
    }
}
