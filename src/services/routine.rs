use crate::{
    error::{EngineError, EngineResult},
    models::Routine,
};

/// Steps a routine can be built from
pub const ROUTINE_STEPS: [&str; 6] = [
    "Cleanser",
    "Toner",
    "Serum",
    "Moisturizer",
    "Sunscreen (AM)",
    "Treatment (PM)",
];

/// Selection used when the user picks nothing
pub const DEFAULT_ROUTINE: [&str; 3] = ["Cleanser", "Moisturizer", "Sunscreen (AM)"];

/// Splits selected steps into morning and evening checklists
///
/// Sunscreen steps go to the morning; every other step goes to the evening
/// with its "(AM)" marker switched to "(PM)". Selection order is kept and
/// repeated steps are listed once.
pub fn plan_routine<S: AsRef<str>>(steps: &[S]) -> EngineResult<Routine> {
    let mut seen: Vec<&str> = Vec::with_capacity(steps.len());

    for step in steps {
        let step = step.as_ref();
        if !ROUTINE_STEPS.contains(&step) {
            return Err(EngineError::InvalidCriteria(format!(
                "unknown routine step '{}'",
                step
            )));
        }
        if !seen.contains(&step) {
            seen.push(step);
        }
    }

    let (morning, evening): (Vec<&str>, Vec<&str>) =
        seen.into_iter().partition(|step| step.contains("Sunscreen"));

    Ok(Routine {
        morning: morning.into_iter().map(str::to_string).collect(),
        evening: evening
            .into_iter()
            .map(|step| step.replace("(AM)", "(PM)"))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routine() {
        let routine = plan_routine(&DEFAULT_ROUTINE).unwrap();
        assert_eq!(routine.morning, vec!["Sunscreen (AM)"]);
        assert_eq!(routine.evening, vec!["Cleanser", "Moisturizer"]);
    }

    #[test]
    fn test_full_routine_keeps_order() {
        let routine = plan_routine(&ROUTINE_STEPS).unwrap();
        assert_eq!(routine.morning, vec!["Sunscreen (AM)"]);
        assert_eq!(
            routine.evening,
            vec!["Cleanser", "Toner", "Serum", "Moisturizer", "Treatment (PM)"]
        );
    }

    #[test]
    fn test_duplicates_listed_once() {
        let routine = plan_routine(&["Toner", "Toner", "Serum"]).unwrap();
        assert_eq!(routine.evening, vec!["Toner", "Serum"]);
        assert!(routine.morning.is_empty());
    }

    #[test]
    fn test_empty_selection() {
        let steps: [&str; 0] = [];
        let routine = plan_routine(&steps).unwrap();
        assert!(routine.morning.is_empty());
        assert!(routine.evening.is_empty());
    }

    #[test]
    fn test_rejects_unknown_step() {
        let err = plan_routine(&["Cleanser".to_string(), "Face Oil".to_string()]).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidCriteria("unknown routine step 'Face Oil'".to_string())
        );
    }
}
