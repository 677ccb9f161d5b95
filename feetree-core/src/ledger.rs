use thiserror::Error;

use crate::{
    debugger::Debugger,
    error::Result,
    fee::{ClearanceEntry, Fee, FeeId, Payment, PaymentStatus},
    index::OrderedIndex,
};

/// The options for configuring a fee ledger.
#[derive(Debug, Clone)]
pub struct Options {
    pub(crate) reject_duplicates: bool,
    pub(crate) clearance_tolerance: f64,
}

impl Options {
    /// Creates a new Options instance with default values.
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// Decide whether recording a fee with an id that is already present is an error.
    ///
    /// If it is false, the duplicate is silently ignored and the first recorded fee is kept.
    /// If it is true, [`FeeLedger::record`] fails with [`ErrorCode::DuplicateKey`].
    ///
    /// By default, it is false.
    ///
    /// [`ErrorCode::DuplicateKey`]: crate::ErrorCode::DuplicateKey
    #[inline]
    pub fn reject_duplicates(&mut self, flag: bool) -> &mut Self {
        self.reject_duplicates = flag;
        self
    }

    /// Set the largest outstanding balance that still counts as cleared.
    ///
    /// A negative or non-finite tolerance falls back to 0. By default, it is 0.
    #[inline]
    pub fn clearance_tolerance(&mut self, tolerance: f64) -> &mut Self {
        self.clearance_tolerance = if tolerance.is_finite() && tolerance >= 0.0 {
            tolerance
        } else {
            0.0
        };
        self
    }

    /// Create an empty fee ledger with the current options.
    #[inline]
    pub fn build(&self) -> FeeLedger {
        FeeLedger::with_options(self.clone())
    }
}

impl Default for Options {
    #[inline]
    fn default() -> Self {
        Self {
            reject_duplicates: false,
            clearance_tolerance: 0.0,
        }
    }
}

#[derive(Error, Debug)]
pub(crate) enum InputInvalid {
    #[error("the fee amount must be finite and non-negative, got {0}")]
    Amount(f64),
    #[error("the paid amount must be finite and non-negative, got {0}")]
    Paid(f64),
}

#[derive(Error, Debug)]
#[error("a fee with id {0} is already recorded")]
pub(crate) struct DuplicateFee(FeeId);

#[derive(Error, Debug)]
#[error("no fee is recorded with id {0}")]
pub(crate) struct FeeNotFound(FeeId);

/// Tracks fees and their payments, indexed by fee id.
pub struct FeeLedger {
    options: Options,
    index: OrderedIndex<FeeId, Payment>,
}

impl FeeLedger {
    /// Create an empty fee ledger with default options.
    #[inline]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Create an empty fee ledger with the provided options.
    #[inline]
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            index: OrderedIndex::new(),
        }
    }

    /// Options used to configure the ledger.
    #[inline]
    pub fn options(&self) -> Options {
        self.options.clone()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Record a new fee with nothing paid yet.
    ///
    /// Returns whether the fee was recorded. A fee whose id is already present is ignored,
    /// unless the ledger was configured to reject duplicates.
    #[inline]
    pub fn record(&mut self, fee: Fee) -> Result<bool> {
        self.record_with_payment(fee, 0.0)
    }

    /// Record a new fee of which `paid` has already been paid.
    ///
    /// Duplicates are handled as in [`Self::record`].
    pub fn record_with_payment(&mut self, fee: Fee, paid: f64) -> Result<bool> {
        if !Self::is_valid_amount(fee.amount) {
            return Err(InputInvalid::Amount(fee.amount).into());
        }
        if !Self::is_valid_amount(paid) {
            return Err(InputInvalid::Paid(paid).into());
        }

        let mut payment = Payment::new(fee);
        payment.paid = paid;

        let Err((id, _)) = self.index.try_insert(fee.id, payment) else {
            tracing::debug!(
                target: "feetree::ledger",
                id = fee.id,
                student_id = fee.student_id,
                amount = fee.amount,
                paid,
                "recorded fee"
            );
            return Ok(true);
        };

        if self.options.reject_duplicates {
            return Err(DuplicateFee(id).into());
        }
        tracing::debug!(target: "feetree::ledger", id, "ignored duplicate fee");
        Ok(false)
    }

    /// Check if the ledger contains a fee with the given id.
    #[inline]
    pub fn contains(&self, id: FeeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the payment state of the fee with the given id.
    #[inline]
    pub fn get(&self, id: FeeId) -> Option<&Payment> {
        self.index.get(&id)
    }

    /// Get the clearance state of the fee with the given id, judged with the ledger's
    /// clearance tolerance.
    #[inline]
    pub fn entry(&self, id: FeeId) -> Option<ClearanceEntry> {
        let tolerance = self.options.clearance_tolerance;
        self.get(id).map(|payment| ClearanceEntry::new(payment, tolerance))
    }

    /// Get the payment status of the fee with the given id.
    #[inline]
    pub fn status(&self, id: FeeId) -> Option<PaymentStatus> {
        self.entry(id).map(|entry| entry.status)
    }

    /// Set how much has been paid towards the fee with the given id.
    pub fn update_payment(&mut self, id: FeeId, paid: f64) -> Result<()> {
        if !Self::is_valid_amount(paid) {
            return Err(InputInvalid::Paid(paid).into());
        }
        let payment = self.index.get_mut(&id).ok_or(FeeNotFound(id))?;
        payment.paid = paid;

        tracing::debug!(
            target: "feetree::ledger",
            id,
            paid,
            balance = payment.balance(),
            "updated payment"
        );
        Ok(())
    }

    /// Iterates over the recorded fees in ascending id order.
    #[inline]
    pub fn fees(&self) -> impl Iterator<Item = &Fee> + '_ {
        self.index.values().map(Payment::fee)
    }

    /// Iterates over the payment states in ascending fee id order.
    #[inline]
    pub fn payments(&self) -> impl Iterator<Item = &Payment> + '_ {
        self.index.values()
    }

    /// Builds a clearance report of every recorded fee, in ascending fee id order.
    pub fn clearance_report(&self) -> Vec<ClearanceEntry> {
        let tolerance = self.options.clearance_tolerance;
        self.payments()
            .map(|payment| ClearanceEntry::new(payment, tolerance))
            .collect()
    }

    /// Get a debugger for the index behind the ledger.
    #[inline]
    pub fn debugger(&self) -> Debugger<'_, FeeId, Payment> {
        self.index.debugger()
    }

    #[inline]
    fn is_valid_amount(amount: f64) -> bool {
        amount.is_finite() && amount >= 0.0
    }
}

impl Default for FeeLedger {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
