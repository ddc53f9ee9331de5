//! Prompt construction for the feedback narrator.
//!
//! The system prompt embeds the empirical parameters so the tutor knows the
//! answer, but it explicitly forbids repeating the numbers: the learner should
//! be steered ("too narrow", "shifted right"), not told. The user message
//! contains only the learner's own inputs.

use crate::domain::{EmpiricalParams, FitScore, UserEstimate};

/// Build the `(system, user)` prompt pair for one failed check.
pub fn build_messages(
    estimate: UserEstimate,
    empirical: EmpiricalParams,
    score: &FitScore,
) -> (String, String) {
    (
        system_prompt(estimate, empirical, score),
        user_prompt(estimate),
    )
}

fn system_prompt(estimate: UserEstimate, empirical: EmpiricalParams, score: &FitScore) -> String {
    let mut out = String::new();
    out.push_str(
        "You are a friendly statistics tutor. The learner adjusted the mean and \
         standard deviation of a normal curve to match a histogram of data. ",
    );
    out.push_str(&format!(
        "The data's actual mean is {:.2} and its actual standard deviation is {:.2}. \
         Never state these numbers or any close approximation of them; the learner \
         must keep guessing. ",
        empirical.center, empirical.spread
    ));
    out.push_str(&format!(
        "The tolerance for each parameter is {:.0}% error. ",
        score.threshold_pct
    ));
    out.push_str(&breach_description(estimate, empirical, score));
    out.push_str(
        " Explain, in plain language and at most three sentences, what the learner \
         should change about the curve and why the histogram disagrees with it. \
         Encourage them to try again.",
    );
    out
}

fn user_prompt(estimate: UserEstimate) -> String {
    format!(
        "I set the mean to {:.2} and the standard deviation to {:.2}. How close am I?",
        estimate.center, estimate.spread
    )
}

/// Coarse description of which error(s) breached and in which direction.
///
/// The narrator should talk about the breached parameter(s) only; a passing
/// parameter is named as already fine so the model does not invent problems.
fn breach_description(
    estimate: UserEstimate,
    empirical: EmpiricalParams,
    score: &FitScore,
) -> String {
    let center = if score.verdict.center_ok() {
        "The learner's mean is within tolerance; do not suggest moving it.".to_string()
    } else if estimate.center < empirical.center {
        "The learner's mean is too low: the curve sits left of the histogram.".to_string()
    } else {
        "The learner's mean is too high: the curve sits right of the histogram.".to_string()
    };

    let spread = if score.verdict.spread_ok() {
        "The learner's standard deviation is within tolerance; do not suggest changing it."
            .to_string()
    } else if estimate.spread < empirical.spread {
        "The learner's standard deviation is too small: the curve is too narrow and too tall."
            .to_string()
    } else {
        "The learner's standard deviation is too large: the curve is too wide and too flat."
            .to_string()
    };

    format!("{center} {spread}")
}
