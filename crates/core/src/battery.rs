//! Test battery catalogue.

/// An instrument that can be listed under "Tests Administered:".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestInstrument {
    pub name: &'static str,
    pub default_selected: bool,
}

const fn instrument(name: &'static str, default_selected: bool) -> TestInstrument {
    TestInstrument {
        name,
        default_selected,
    }
}

pub const TEST_BATTERY: [TestInstrument; 16] = [
    instrument("Wechsler Abbreviated Scale of Intelligence-II (WASI-II)", true),
    instrument("Portion of Wechsler Adult Intelligence Scale - Revised (WAIS-R)", true),
    instrument("Portion of Wechsler Intelligence Scale for Children (WISC)", false),
    instrument("Trail Making Test (Part B)", true),
    instrument("Letter-Number Sequencing", true),
    instrument("BAARS-IV", true),
    instrument("Personality Assessment Inventory (PAI)", true),
    instrument("Personality Assessment Inventory-Adolescent (PAI-A)", false),
    instrument("Millon Clinical Multiaxial Inventory-III (MCMI-III)", false),
    instrument("Millon Adolescent Clinical Inventory (MACI)", false),
    instrument("Millon Pre-Adolescent Clinical Inventory (M-PACI)", false),
    instrument("Minnesota Multiphasic Personality Inventory-2-RF (MMPI-2-RF)", false),
    instrument("Minnesota Multiphasic Personality Inventory-Adolescent-RF (MMPI-A-RF)", false),
    instrument("Rorschach Inkblot Test", false),
    instrument("Thematic Apperception Test (TAT)", false),
    instrument("Figure Drawing", false),
];

/// Names of the instruments selected by default, in catalogue order.
pub fn default_tests() -> Vec<String> {
    TEST_BATTERY
        .iter()
        .filter(|t| t.default_selected)
        .map(|t| t.name.to_string())
        .collect()
}

pub fn is_catalogued(name: &str) -> bool {
    TEST_BATTERY.iter().any(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_standard_adhd_battery() {
        assert_eq!(
            default_tests(),
            vec![
                "Wechsler Abbreviated Scale of Intelligence-II (WASI-II)",
                "Portion of Wechsler Adult Intelligence Scale - Revised (WAIS-R)",
                "Trail Making Test (Part B)",
                "Letter-Number Sequencing",
                "BAARS-IV",
                "Personality Assessment Inventory (PAI)",
            ]
        );
    }

    #[test]
    fn catalogue_lookup() {
        assert!(is_catalogued("Figure Drawing"));
        assert!(!is_catalogued("figure drawing"));
    }
}
