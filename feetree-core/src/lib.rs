//! A height-balanced ordered index, with a small fee-tracking ledger built on top of it.
//!
//! `feetree` keeps its entries in an AVL tree: after every insertion the heights of the two
//! subtrees of any node differ by at most one, so the tree height stays logarithmic in the
//! number of entries even when keys arrive in sorted order.
//!
//! # Ordered Index
//!
//! [`OrderedIndex`] is a generic map from a totally ordered key to a value. Keys are unique,
//! and inserting a key that is already present keeps the first inserted value.
//!
//! ```
//! use feetree::OrderedIndex;
//!
//! let mut index = OrderedIndex::new();
//!
//! // Insert new key-value pairs into the index.
//! assert!(index.insert(3, "c"));
//! assert!(index.insert(1, "a"));
//! assert!(index.insert(2, "b"));
//!
//! // A duplicate key is ignored, the first value is kept.
//! assert!(!index.insert(2, "B"));
//! assert_eq!(index.get(&2), Some(&"b"));
//!
//! // Check if the index contains a given key.
//! assert!(index.contains_key(&1));
//! assert!(!index.contains_key(&4));
//!
//! // Traverse the entries in ascending key order.
//! let keys = index.keys().copied().collect::<Vec<_>>();
//! assert_eq!(keys, vec![1, 2, 3]);
//! ```
//!
//! Entries are never removed, the whole index is released when it goes out of scope.
//!
//! # Fee Ledger
//!
//! [`FeeLedger`] indexes [`Fee`] records by id and tracks how much of each fee has been paid.
//!
//! ```
//! use feetree::{Fee, FeeLedger, Options, PaymentStatus, Result};
//! # fn try_main() -> Result<()> {
//!
//! // The simplest way to create a ledger with default `Options`:
//! let mut ledger = FeeLedger::new();
//!
//! // Create with `Options`:
//! let mut strict = Options::new()
//!     .reject_duplicates(true)
//!     .clearance_tolerance(0.5)
//!     .build();
//!
//! ledger.record(Fee::new(1, 101, 500.0))?;
//! ledger.record(Fee::new(2, 102, 250.0))?;
//!
//! // Update how much a student has paid.
//! ledger.update_payment(2, 250.0)?;
//!
//! let report = ledger.clearance_report();
//! assert_eq!(report[0].status, PaymentStatus::Pending);
//! assert_eq!(report[1].status, PaymentStatus::Cleared);
//!
//! // A strict ledger refuses a second fee with the same id.
//! strict.record(Fee::new(1, 101, 500.0))?;
//! assert!(strict.record(Fee::new(1, 103, 400.0)).is_err());
//! # Ok(())
//! # }
//!
//! # fn main() { try_main().unwrap(); }
//! ```
//!
//! # Debugger
//!
//! Both the index and the ledger hand out a [`Debugger`], which reports the tree height and
//! the rotations performed so far, validates the balancing invariants, and dumps the shape
//! of the tree through its `Debug` implementation.
//!
//! ```
//! # use feetree::{OrderedIndex, Result};
//! # fn try_main() -> Result<()> {
//! let index = (1..=7).map(|k| (k, ())).collect::<OrderedIndex<_, _>>();
//!
//! let debugger = index.debugger();
//! debugger.validate()?;
//! assert_eq!(debugger.height(), 3);
//! println!("{:?}", debugger);
//! # Ok(())
//! # }
//! # fn main() { try_main().unwrap(); }
//! ```
//!
//! ## Attention
//!
//! ❗️ The index has no internal locking. Mutation needs `&mut`, so sharing an index between
//! threads requires wrapping it in a lock of your choice.
//!

mod avl;
mod debugger;
mod error;
mod fee;
mod index;
mod ledger;

pub use crate::{
    avl::{IntoIter, Iter, Rotations},
    debugger::Debugger,
    error::{Error, ErrorCode, Result},
    fee::{ClearanceEntry, Fee, FeeId, Payment, PaymentStatus, StudentId},
    index::OrderedIndex,
    ledger::{FeeLedger, Options},
};
