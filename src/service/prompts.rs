//! Prompts for claim and document scoring
//!
//! The rubric and band definitions are constant across calls; only the
//! claim text varies.

/// Fraud-indicator rubric for motor insurance claims
const CLAIM_RUBRIC: &str = "Analyze the following motor insurance claim to detect potential fraud. \
Consider the following factors: pre-existing vehicle damage, fraudulent documentation (bills, \
receipts, police reports, identity documents), false information (location, timing, vehicle \
details), staged accident, multiple claims in a short span, exaggerated damages, invalid \
driver's license, medical fraud (inflated or fake injuries), involvement of suspicious third \
parties (lawyers, medical professionals), delayed reporting, witness tampering or absence of \
independent witnesses, inconsistent statements between claimant and reports, vehicle use beyond \
policy terms, telematics data inconsistencies, unreported vehicle modifications, involvement in \
fraud rings, excessive or unnecessary repairs, involvement of professionals linked to previous \
fraud cases, no police report filed, inconsistent accident timing, and unreasonable driver \
behavior (e.g., sudden braking, intentional swerves).";

/// Scoring band definitions shared by every claim prompt
const SCORING_BANDS: &str = "\
* 0-25: Low risk of fraud (minimal or no indicators)
* 26-50: Moderate risk (one or a few suspicious factors)
* 51-75: High risk (several strong fraud indicators)
* 76-100: Very high risk (multiple or severe fraud indicators, likely fraudulent)";

/// Build the scoring prompt for a single claim
///
/// The model is told to return only the numeric score; the claim text is
/// appended verbatim at the end.
pub fn build_claim_prompt(claim: &str) -> String {
    format!(
        "{CLAIM_RUBRIC}\n\
        For each factor, determine its presence and severity, then generate a fraud score \
        between 0 and 100 based on the following considerations:\n\
        {SCORING_BANDS}\n\
        Only return the fraud score. Don't return along with a breakdown of which factors \
        contributed to the score and why.\n\n\
        Claim details:\n\
        {claim}"
    )
}

/// Build the scoring prompt for extracted document text
///
/// Unlike the claim prompt, this one asks for the score plus the key
/// patterns behind it, so the reply carries prose for lenient extraction.
pub fn build_document_prompt(text: &str) -> String {
    format!(
        "Analyze the following litigation text from the insurance sector and determine if the \
        content exhibits fraudulent patterns related to insurance claims. Provide a fraud score \
        between 0 and 100, where 0 means no fraud and 100 means highly fraudulent. Also, \
        highlight key patterns or reasons for assigning the fraud score:\n\n\
        \"{text}\""
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_prompt_embeds_claim_text() {
        let claim = "Rear-end collision, no police report, three claims this year.";
        let prompt = build_claim_prompt(claim);
        assert!(prompt.contains(claim));
        assert!(prompt.ends_with(claim));
    }

    #[test]
    fn claim_prompt_contains_all_scoring_bands() {
        let prompt = build_claim_prompt("some claim");
        assert!(prompt.contains("0-25: Low risk of fraud (minimal or no indicators)"));
        assert!(prompt.contains("26-50: Moderate risk (one or a few suspicious factors)"));
        assert!(prompt.contains("51-75: High risk (several strong fraud indicators)"));
        assert!(prompt
            .contains("76-100: Very high risk (multiple or severe fraud indicators, likely fraudulent)"));
    }

    #[test]
    fn claim_prompt_rubric_is_stable_across_claims() {
        let a = build_claim_prompt("claim a");
        let b = build_claim_prompt("claim b");
        let rubric_a = a.strip_suffix("claim a").unwrap();
        let rubric_b = b.strip_suffix("claim b").unwrap();
        assert_eq!(rubric_a, rubric_b);
    }

    #[test]
    fn document_prompt_embeds_document_text() {
        let text = "Plaintiff alleges staged collision with prior damage.";
        let prompt = build_document_prompt(text);
        assert!(prompt.contains(text));
    }
}
