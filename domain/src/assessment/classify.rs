//! Local scoring rule.
//!
//! This is also the contract the remote scoring service is expected to
//! replicate, so the fallback path and the remote path agree.

use super::response::Response;
use super::result::AssessmentResult;
use super::severity::Severity;

/// Count the "yes" answers. "unsure" counts as neither yes nor no.
pub fn yes_count(responses: &[Response]) -> usize {
    responses.iter().filter(|r| r.is_yes()).count()
}

/// Classify a set of responses.
///
/// Severity depends only on the number of "yes" answers.
pub fn classify(responses: &[Response]) -> AssessmentResult {
    AssessmentResult::for_severity(Severity::from_yes_count(yes_count(responses)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Response::{No, Unsure, Yes};

    /// Every combination of the three options over five questions
    fn all_combinations() -> Vec<[Response; 5]> {
        let mut out = Vec::with_capacity(243);
        for n in 0..243usize {
            let mut rest = n;
            let mut combo = [No; 5];
            for slot in combo.iter_mut() {
                *slot = Response::ALL[rest % 3];
                rest /= 3;
            }
            out.push(combo);
        }
        out
    }

    #[test]
    fn test_high_when_three_or_more_yes() {
        for combo in all_combinations().iter().filter(|c| yes_count(*c) >= 3) {
            assert_eq!(classify(combo).severity, Severity::High, "{combo:?}");
        }
    }

    #[test]
    fn test_medium_when_one_or_two_yes() {
        for combo in all_combinations()
            .iter()
            .filter(|c| (1..=2).contains(&yes_count(*c)))
        {
            assert_eq!(classify(combo).severity, Severity::Medium, "{combo:?}");
        }
    }

    #[test]
    fn test_low_when_no_yes() {
        for combo in all_combinations().iter().filter(|c| yes_count(*c) == 0) {
            assert_eq!(classify(combo).severity, Severity::Low, "{combo:?}");
        }
    }

    #[test]
    fn test_unsure_does_not_count() {
        assert_eq!(yes_count(&[Unsure; 5]), 0);
        assert_eq!(classify(&[Unsure; 5]).severity, Severity::Low);
    }

    #[test]
    fn test_example_high() {
        let result = classify(&[Yes, Yes, Yes, No, Unsure]);
        assert_eq!(result.severity, Severity::High);
        assert_eq!(result.message, "You may benefit from professional support.");
        assert_eq!(result.remedies.len(), 5);
    }

    #[test]
    fn test_example_low() {
        let result = classify(&[No; 5]);
        assert_eq!(result.severity, Severity::Low);
        assert_eq!(result.message, "You're doing well. Keep it up!");
    }
}
