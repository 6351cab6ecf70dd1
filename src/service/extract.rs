//! Score extraction strategies
//!
//! Two deliberately distinct strategies. The claim endpoint passes the
//! model reply through untouched and leaves interpretation to the caller;
//! the document path digs a numeric score out of free text. Callers depend
//! on the difference, so the two must stay separate.

use crate::model::ScoreResult;

/// Strict strategy: the whole reply is the analysis
pub fn passthrough_analysis(reply: &str) -> String {
    reply.to_string()
}

/// Lenient strategy: first run of digits is the score, later lines are prose
///
/// A reply without digits falls back to a zero score with `score_found`
/// cleared. Parsed scores above 100 clamp to the top of the scale.
pub fn extract_score(reply: &str) -> ScoreResult {
    let digits: String = reply
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    let (score, score_found) = match digits.parse::<f64>() {
        Ok(n) => (n.min(100.0), true),
        Err(_) => (0.0, false),
    };

    let explanation = reply
        .split_once('\n')
        .map(|(_, rest)| rest.trim())
        .filter(|rest| !rest.is_empty())
        .map(str::to_string);

    ScoreResult {
        score,
        explanation,
        score_found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_is_verbatim() {
        assert_eq!(passthrough_analysis("72\n"), "72\n");
        assert_eq!(passthrough_analysis("  85 "), "  85 ");
    }

    #[test]
    fn lenient_splits_score_and_explanation() {
        let result = extract_score("72\nSome indicators found.");
        assert_eq!(result.score, 72.0);
        assert_eq!(result.explanation.as_deref(), Some("Some indicators found."));
        assert!(result.score_found);
    }

    #[test]
    fn lenient_finds_digits_mid_text() {
        let result = extract_score("Fraud score: 85");
        assert_eq!(result.score, 85.0);
        assert_eq!(result.explanation, None);
        assert!(result.score_found);
    }

    #[test]
    fn lenient_defaults_to_zero_without_digits() {
        let result = extract_score("Unable to determine a score.");
        assert_eq!(result.score, 0.0);
        assert!(!result.score_found);
    }

    #[test]
    fn lenient_keeps_multiline_explanation() {
        let result = extract_score("10\nFirst pattern.\nSecond pattern.");
        assert_eq!(result.score, 10.0);
        assert_eq!(
            result.explanation.as_deref(),
            Some("First pattern.\nSecond pattern.")
        );
    }

    #[test]
    fn lenient_clamps_out_of_range_scores() {
        let result = extract_score("150\nway beyond the scale");
        assert_eq!(result.score, 100.0);
        assert!(result.score_found);
    }

    #[test]
    fn lenient_drops_blank_explanation() {
        let result = extract_score("42\n   ");
        assert_eq!(result.score, 42.0);
        assert_eq!(result.explanation, None);
    }
}
