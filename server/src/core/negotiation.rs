//! Offer negotiation rule
//!
//! One-step evaluation of a carrier's offer against our last quoted rate.
//! Stateless and total; the caller tracks `offer_attempt` across a session.

use shared::OfferResult;

/// Decision produced by a single evaluation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OfferDecision {
    pub result: OfferResult,
    pub new_offer: i64,
    pub message: String,
}

/// Evaluate a carrier's offer against our last offer.
///
/// Meeting or beating our number accepts at the carrier's figure. Anything
/// lower draws a counter at the floored midpoint. The sum is taken in
/// `i128` so offers near the `i64` bounds cannot overflow; `div_euclid`
/// keeps the floor when a degenerate negotiation pushes the sum negative,
/// where plain `/` would round toward zero instead.
///
/// `offer_attempt` only selects the wording: attempt 1 invites another
/// round, every other value (including 0 or anything past 2) gets the
/// final-counter phrasing.
pub fn evaluate_offer(carrier_offer: i64, our_last_offer: i64, offer_attempt: i64) -> OfferDecision {
    if carrier_offer >= our_last_offer {
        return OfferDecision {
            result: OfferResult::Accept,
            new_offer: carrier_offer,
            message: "Offer accepted.".to_string(),
        };
    }

    // The floored midpoint of two i64 values always fits back in i64.
    let new_offer = (our_last_offer as i128 + carrier_offer as i128).div_euclid(2) as i64;
    let message = if offer_attempt == 1 {
        format!("We can go as low as {new_offer} on this load.")
    } else {
        format!("This is our final counter at {new_offer}.")
    };

    OfferDecision {
        result: OfferResult::Counter,
        new_offer,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_offer_is_accepted() {
        let decision = evaluate_offer(800, 700, 1);
        assert_eq!(decision.result, OfferResult::Accept);
        assert_eq!(decision.new_offer, 800);
        assert_eq!(decision.message, "Offer accepted.");
    }

    #[test]
    fn test_equal_offer_is_accepted() {
        let decision = evaluate_offer(700, 700, 1);
        assert_eq!(decision.result, OfferResult::Accept);
        assert_eq!(decision.new_offer, 700);
    }

    #[test]
    fn test_first_counter_at_midpoint() {
        let decision = evaluate_offer(600, 700, 1);
        assert_eq!(decision.result, OfferResult::Counter);
        assert_eq!(decision.new_offer, 650);
        assert_eq!(decision.message, "We can go as low as 650 on this load.");
    }

    #[test]
    fn test_second_counter_is_final() {
        let decision = evaluate_offer(600, 700, 2);
        assert_eq!(decision.result, OfferResult::Counter);
        assert_eq!(decision.new_offer, 650);
        assert_eq!(decision.message, "This is our final counter at 650.");
    }

    #[test]
    fn test_odd_sum_midpoint_floors() {
        let decision = evaluate_offer(600, 701, 1);
        assert_eq!(decision.new_offer, 650);
    }

    #[test]
    fn test_negative_sum_midpoint_still_floors() {
        // floor(-7 / 2) is -4, truncation would give -3
        let decision = evaluate_offer(-5, -2, 1);
        assert_eq!(decision.result, OfferResult::Counter);
        assert_eq!(decision.new_offer, -4);
    }

    #[test]
    fn test_midpoint_is_exact_for_offers_at_the_type_bounds() {
        // The widened sum keeps pairs whose total exceeds i64 from wrapping.
        let decision = evaluate_offer(i64::MAX - 1, i64::MAX, 1);
        assert_eq!(decision.result, OfferResult::Counter);
        assert_eq!(decision.new_offer, i64::MAX - 1);

        let decision = evaluate_offer(i64::MIN, i64::MIN + 1, 1);
        assert_eq!(decision.result, OfferResult::Counter);
        assert_eq!(decision.new_offer, i64::MIN);

        let decision = evaluate_offer(i64::MIN, i64::MAX, 1);
        assert_eq!(decision.new_offer, -1);
    }

    #[test]
    fn test_unusual_attempt_values_use_final_wording() {
        for attempt in [0, 3, 5, -1] {
            let decision = evaluate_offer(600, 700, attempt);
            assert_eq!(decision.new_offer, 650);
            assert_eq!(
                decision.message, "This is our final counter at 650.",
                "attempt {attempt}"
            );
        }
    }

    #[test]
    fn test_counter_always_lands_between_offers() {
        let pairs = [(600, 700), (0, 1), (99, 1000), (-300, 500), (868, 869)];
        for (carrier, ours) in pairs {
            let decision = evaluate_offer(carrier, ours, 1);
            assert_eq!(decision.result, OfferResult::Counter);
            assert!(
                decision.new_offer >= carrier && decision.new_offer < ours,
                "midpoint {} out of range for ({carrier}, {ours})",
                decision.new_offer
            );
        }
    }
}
