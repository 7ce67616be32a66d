use chrono::NaiveDate;
use tracing::{info, warn};

use crate::catalog::{Coupon, find_coupon};

/// Why a discount code was rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CouponError {
    #[error("only one discount code can be active at a time")]
    AlreadyActive,
    #[error("coupon {0} does not exist")]
    Unknown(String),
    #[error("coupon {0} has no uses remaining")]
    Exhausted(String),
    #[error("coupon {0} is expired")]
    Expired(String),
}

/// Validates a discount code against the coupon collection.
///
/// `active` is the code already applied to the session, if any; only one
/// code may be active at a time. `today` drives the expiry check
/// (a coupon is expired when `valid_till` is strictly before it).
pub fn check_coupon<'a>(
    coupons: &'a [Coupon],
    code: &str,
    active: Option<&str>,
    today: NaiveDate,
) -> Result<&'a Coupon, CouponError> {
    if active.is_some() {
        warn!(code, "attempt to apply a second discount code");
        return Err(CouponError::AlreadyActive);
    }

    let coupon = find_coupon(coupons, code).ok_or_else(|| {
        warn!(code, "unknown discount code");
        CouponError::Unknown(code.to_string())
    })?;

    if coupon.is_exhausted() {
        warn!(code, "discount code has no uses remaining");
        return Err(CouponError::Exhausted(code.to_string()));
    }
    if coupon.is_expired(today) {
        warn!(code, "discount code is expired");
        return Err(CouponError::Expired(code.to_string()));
    }

    info!(code, "discount code accepted");
    Ok(coupon)
}

/// What the collection store should do with a coupon after checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponOutcome {
    /// Delete the coupon: it expired, or its last use was just spent.
    Remove,
    /// Keep the coupon with its updated remaining-use count.
    Keep { uses_remaining: Option<i64> },
}

/// Settles a redeemed coupon at checkout time.
pub fn redeem_coupon(coupon: &Coupon, today: NaiveDate) -> CouponOutcome {
    if coupon.is_expired(today) {
        info!(code = %coupon.id, "removing expired coupon at checkout");
        return CouponOutcome::Remove;
    }
    match coupon.uses_remaining {
        Some(left) if left <= 1 => {
            info!(code = %coupon.id, "removing spent coupon at checkout");
            CouponOutcome::Remove
        }
        Some(left) => {
            info!(code = %coupon.id, remaining = left - 1, "coupon use recorded");
            CouponOutcome::Keep {
                uses_remaining: Some(left - 1),
            }
        }
        None => CouponOutcome::Keep { uses_remaining: None },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DiscountKind;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn coupon(id: &str, uses: Option<i64>, valid_till: Option<&str>) -> Coupon {
        Coupon {
            id: id.to_string(),
            kind: DiscountKind::Percent,
            value: 10.0,
            uses_remaining: uses,
            valid_till: valid_till.map(date),
        }
    }

    #[test]
    fn valid_code_is_accepted() {
        let coupons = vec![coupon("SOMMER10", Some(5), Some("2026-09-30"))];
        let found = check_coupon(&coupons, "SOMMER10", None, date("2026-08-04")).unwrap();
        assert_eq!(found.id, "SOMMER10");
    }

    #[test]
    fn second_code_is_rejected_before_lookup() {
        let coupons = vec![coupon("SOMMER10", None, None)];
        assert_eq!(
            check_coupon(&coupons, "SOMMER10", Some("OTHER"), date("2026-08-04")),
            Err(CouponError::AlreadyActive)
        );
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(
            check_coupon(&[], "NOPE", None, date("2026-08-04")),
            Err(CouponError::Unknown("NOPE".to_string()))
        );
    }

    #[test]
    fn exhausted_code_is_rejected() {
        let coupons = vec![coupon("ONCE", Some(0), None)];
        assert_eq!(
            check_coupon(&coupons, "ONCE", None, date("2026-08-04")),
            Err(CouponError::Exhausted("ONCE".to_string()))
        );
    }

    #[test]
    fn code_expires_the_day_after_valid_till() {
        let coupons = vec![coupon("AUGUST", None, Some("2026-08-04"))];
        assert!(check_coupon(&coupons, "AUGUST", None, date("2026-08-04")).is_ok());
        assert_eq!(
            check_coupon(&coupons, "AUGUST", None, date("2026-08-05")),
            Err(CouponError::Expired("AUGUST".to_string()))
        );
    }

    #[test]
    fn redeeming_counts_down_and_removes_at_zero() {
        let today = date("2026-08-04");
        assert_eq!(
            redeem_coupon(&coupon("C", Some(3), None), today),
            CouponOutcome::Keep {
                uses_remaining: Some(2)
            }
        );
        assert_eq!(
            redeem_coupon(&coupon("C", Some(1), None), today),
            CouponOutcome::Remove
        );
    }

    #[test]
    fn redeeming_unlimited_coupon_keeps_it() {
        assert_eq!(
            redeem_coupon(&coupon("C", None, None), date("2026-08-04")),
            CouponOutcome::Keep {
                uses_remaining: None
            }
        );
    }

    #[test]
    fn redeeming_expired_coupon_removes_it() {
        assert_eq!(
            redeem_coupon(&coupon("C", Some(5), Some("2026-01-01")), date("2026-08-04")),
            CouponOutcome::Remove
        );
    }
}
