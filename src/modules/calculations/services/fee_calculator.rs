use rust_decimal::Decimal;
use tracing::debug;

use crate::modules::applicants::models::{ApplicantComposition, ApplicantGroup};
use crate::modules::calculations::models::{
    FeeBreakdown, LodgementMode, SubsequentFees, UnroundedAmounts,
};
use crate::modules::payments::models::PaymentMethod;
use crate::modules::schedules::models::FeeScheduleRecord;

/// Visa application fee calculator.
///
/// Pure: the breakdown depends only on the arguments, and the calculation
/// cannot fail. Missing records and unrecognised selections drop charges; they
/// never add one.
pub struct FeeCalculator;

impl FeeCalculator {
    /// Compute the itemised cost of an application.
    ///
    /// # Arguments
    /// * `record` - Fee schedule for the chosen subclass; `None` yields an all-zero breakdown
    /// * `composition` - Applicant groups with headcounts and onshore status
    /// * `lodgement` - Online or paper lodgement
    /// * `payment` - Payment method, which selects the surcharge rate
    ///
    /// Amounts accumulate unrounded and are rounded to two decimal places once,
    /// when the breakdown is built.
    pub fn compute_breakdown(
        record: Option<&FeeScheduleRecord>,
        composition: &ApplicantComposition,
        lodgement: LodgementMode,
        payment: PaymentMethod,
    ) -> FeeBreakdown {
        let Some(record) = record else {
            debug!("No fee schedule record selected, returning zero breakdown");
            return FeeBreakdown::zero();
        };

        let base = Decimal::from(record.base_fee);

        let non_internet = if lodgement == LodgementMode::Offline && record.non_internet_fee > 0 {
            Decimal::from(record.non_internet_fee)
        } else {
            Decimal::ZERO
        };

        let subsequent = SubsequentFees {
            primary: Self::subsequent_fee(record, composition.primary()),
            secondary: Self::subsequent_fee(record, composition.secondary()),
            dependent: Self::subsequent_fee(record, composition.dependent()),
        };

        let additional_adult = Self::per_applicant(
            record.additional_adult_fee,
            composition.secondary().count(),
        );
        let additional_child = Self::per_applicant(
            record.additional_child_fee,
            composition.dependent().count(),
        );

        let subtotal = [
            base,
            non_internet,
            subsequent.primary,
            subsequent.secondary,
            subsequent.dependent,
            additional_adult,
            additional_child,
        ]
        .into_iter()
        .fold(Decimal::ZERO, |sum, amount| sum.saturating_add(amount));

        let surcharge_rate = payment.surcharge_rate();
        let surcharge = Self::surcharge(subtotal, surcharge_rate);
        let total = subtotal.saturating_add(surcharge);

        debug!(
            subclass_code = %record.subclass_code,
            applicants = composition.total_applicants(),
            lodgement = %lodgement,
            payment = ?payment,
            subtotal = %subtotal,
            surcharge = %surcharge,
            total = %total,
            "Computed fee breakdown"
        );

        FeeBreakdown::from_unrounded(UnroundedAmounts {
            base,
            non_internet,
            subsequent,
            additional_adult,
            additional_child,
            subtotal,
            surcharge_rate,
            surcharge,
            total,
        })
    }

    /// Subsequent charge for one group: applies per head when the group is
    /// onshore on a qualifying prior visa. The primary group always counts one.
    fn subsequent_fee(record: &FeeScheduleRecord, group: &ApplicantGroup) -> Decimal {
        if record.subsequent_fee == 0 || !group.has_qualifying_prior_visa() {
            return Decimal::ZERO;
        }
        Self::per_applicant(record.subsequent_fee, group.count())
    }

    fn per_applicant(fee: u64, count: u32) -> Decimal {
        Decimal::from(fee).saturating_mul(Decimal::from(count))
    }

    /// Surcharge on `subtotal` at `rate` percent, unrounded
    pub fn surcharge(subtotal: Decimal, rate: Decimal) -> Decimal {
        subtotal.saturating_mul(rate) / Decimal::ONE_HUNDRED
    }
}
