//! Fixture loading for the bank transfer behaviour suites.
//!
//! This crate reads the two JSON fixture formats used to drive transfer
//! scenarios and to pick the acting role. It is deliberately independent of
//! backend domain types so the backend can depend on it without cycles.
//!
//! # Overview
//!
//! - [`UserFixtures`] maps fixture keys (such as `admin`) to users carrying a
//!   role, and resolves role aliases the way the test harness does.
//! - [`TransferFixtures`] maps fixture keys (such as `validInstant`) to raw
//!   transfer form values.
//! - [`date_from_today`] renders relative calendar dates as `YYYY-MM-DD`.
//!
//! # Example
//!
//! ```
//! use transfer_fixtures::{TransferFixtures, UserFixtures};
//!
//! let users = UserFixtures::from_json(r#"{"admin": {"role": "Administrator"}}"#)
//!     .expect("valid users fixture");
//! assert_eq!(users.resolve_role("admin"), "Administrator");
//!
//! let transfers = TransferFixtures::from_json(
//!     r#"{"validInstant": {"beneficiary": "Alice GmbH", "iban": "DE89370400440532013000",
//!         "label": "Invoice", "amount": "50.00"}}"#,
//! )
//! .expect("valid transfer fixture");
//! assert_eq!(transfers.get("validInstant").expect("known key").amount, "50.00");
//! ```

mod dates;
mod error;
mod transfers;
mod users;

pub use dates::{ISO_DATE_FORMAT, date_from_today};
pub use error::FixtureError;
pub use transfers::{TransferFixture, TransferFixtures};
pub use users::{UserFixture, UserFixtures};
