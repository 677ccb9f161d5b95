use std::fmt::{Display, Formatter};

/// The unique identifier of a fee, the key of the ledger's index.
pub type FeeId = u32;

/// The identifier of the student a fee is charged to.
pub type StudentId = u32;

/// A fee charged to a student.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fee {
    pub id: FeeId,
    pub student_id: StudentId,
    pub amount: f64,
}

impl Fee {
    #[inline]
    pub fn new(id: FeeId, student_id: StudentId, amount: f64) -> Self {
        Self {
            id,
            student_id,
            amount,
        }
    }
}

impl Display for Fee {
    /// Formats as `id student_id amount`, e.g. `1 101 500`.
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.id, self.student_id, self.amount)
    }
}

/// Whether the outstanding balance of a fee has been settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Cleared,
    Pending,
}

impl Display for PaymentStatus {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Cleared => "Cleared",
            Self::Pending => "Pending",
        })
    }
}

/// A recorded fee together with how much of it has been paid.
///
/// The fee itself never changes after it is recorded, only the paid amount does.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    fee: Fee,
    pub(crate) paid: f64,
}

impl Payment {
    #[inline]
    pub(crate) fn new(fee: Fee) -> Self {
        Self { fee, paid: 0.0 }
    }

    #[inline]
    pub fn fee(&self) -> &Fee {
        &self.fee
    }

    #[inline]
    pub fn paid(&self) -> f64 {
        self.paid
    }

    /// `amount - paid`, negative when overpaid.
    #[inline]
    pub fn balance(&self) -> f64 {
        self.fee.amount - self.paid
    }

    /// `Cleared` once the balance is at or below `tolerance`.
    #[inline]
    pub fn status(&self, tolerance: f64) -> PaymentStatus {
        if self.balance() <= tolerance {
            PaymentStatus::Cleared
        } else {
            PaymentStatus::Pending
        }
    }
}

/// One line of a fee clearance report.
#[derive(Debug, Clone, PartialEq)]
pub struct ClearanceEntry {
    pub id: FeeId,
    pub student_id: StudentId,
    pub amount: f64,
    pub paid: f64,
    pub balance: f64,
    pub status: PaymentStatus,
}

impl ClearanceEntry {
    #[inline]
    pub(crate) fn new(payment: &Payment, tolerance: f64) -> Self {
        let fee = payment.fee();
        Self {
            id: fee.id,
            student_id: fee.student_id,
            amount: fee.amount,
            paid: payment.paid(),
            balance: payment.balance(),
            status: payment.status(tolerance),
        }
    }
}

impl Display for ClearanceEntry {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Student: {}, Paid: {}, Total: {}, Balance: {}, Status: {}",
            self.id, self.student_id, self.paid, self.amount, self.balance, self.status
        )
    }
}
