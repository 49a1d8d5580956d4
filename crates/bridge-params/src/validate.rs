use crate::errors::{ParamError, ValidationReport};
use crate::map::ParameterMap;

/// A range rule applied to one named parameter.
struct RangeRule {
    name: &'static str,
    check: fn(f64) -> bool,
    reason: &'static str,
}

fn positive(v: f64) -> bool {
    v > 0.0
}

fn within_skew_limit(v: f64) -> bool {
    (-45.0..=45.0).contains(&v)
}

fn at_least_one(v: f64) -> bool {
    v >= 1.0 && v.fract() == 0.0
}

fn at_least_two(v: f64) -> bool {
    v >= 2.0 && v.fract() == 0.0
}

const RULES: &[RangeRule] = &[
    RangeRule {
        name: "scale1",
        check: positive,
        reason: "must be positive",
    },
    RangeRule {
        name: "scale2",
        check: positive,
        reason: "must be positive",
    },
    RangeRule {
        name: "skew",
        check: within_skew_limit,
        reason: "must lie between -45 and 45 degrees",
    },
    RangeRule {
        name: "nspan",
        check: at_least_one,
        reason: "must be a whole number of at least 1",
    },
    RangeRule {
        name: "noch",
        check: at_least_two,
        reason: "must be a whole number of at least 2",
    },
    RangeRule {
        name: "lbridge",
        check: positive,
        reason: "must be positive",
    },
    RangeRule {
        name: "ccbr",
        check: positive,
        reason: "must be positive",
    },
];

/// Check value ranges of the parameters that are present.
///
/// Absent names are not reported here; presence is the loader's job.
pub fn validate_ranges(map: &ParameterMap) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::new();
    for rule in RULES {
        let Some(value) = map.get(rule.name) else {
            continue;
        };
        if !value.is_finite() {
            report.push(ParamError::NonNumericValue {
                name: rule.name.to_string(),
                value: value.to_string(),
            });
        } else if !(rule.check)(value) {
            report.push(ParamError::InvalidValue {
                name: rule.name.to_string(),
                value,
                reason: rule.reason.to_string(),
            });
        }
    }
    report.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reasonable_values() {
        let map = ParameterMap::from_pairs([
            ("scale1", 100.0),
            ("scale2", 50.0),
            ("skew", 15.0),
            ("nspan", 3.0),
            ("noch", 2.0),
            ("lbridge", 90.0),
            ("ccbr", 7.5),
        ]);
        assert!(validate_ranges(&map).is_ok());
    }

    #[test]
    fn reports_every_violation() {
        let map = ParameterMap::from_pairs([
            ("scale2", 0.0),
            ("skew", 60.0),
            ("nspan", 1.5),
            ("noch", 1.0),
        ]);
        let report = validate_ranges(&map).unwrap_err();
        let names: Vec<&str> = report.errors.iter().filter_map(|e| e.parameter()).collect();
        assert_eq!(names, vec!["scale2", "skew", "nspan", "noch"]);
    }

    #[test]
    fn absent_names_are_skipped() {
        assert!(validate_ranges(&ParameterMap::new()).is_ok());
    }
}
