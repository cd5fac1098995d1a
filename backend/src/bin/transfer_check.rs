//! Resolve one transfer submission from the command line.
//!
//! ```text
//! transfer-check --beneficiary "Alice GmbH" --iban DE89370400440532013000 \
//!     --label Invoice --amount 50.00 --role admin --users fixtures/users.json
//! ```
//!
//! Prints the outcome message and exits non-zero unless the transfer would be
//! created.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use bank_transfer::domain::ports::{PassthroughRoleDirectory, RoleDirectory, TransferSubmission};
use bank_transfer::domain::{TransferCandidate, TransferDesk, TransferMode};
use bank_transfer::outbound::role_fixtures::FixtureRoleDirectory;
use clap::Parser;
use mockable::DefaultClock;
use transfer_fixtures::UserFixtures;

/// `transfer-check` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "transfer-check",
    about = "Validate and authorize a bank transfer without submitting it",
    version
)]
struct CliArgs {
    /// Payee display name.
    #[arg(long, default_value = "")]
    beneficiary: String,
    /// Account number, 14 to 34 characters.
    #[arg(long, default_value = "")]
    iban: String,
    /// Free-text reference, at most 255 characters.
    #[arg(long, default_value = "")]
    label: String,
    /// Amount as typed, between 0.01 and 100000.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    amount: String,
    /// `instant` or `scheduled`.
    #[arg(long, default_value_t = TransferMode::Instant)]
    mode: TransferMode,
    /// Execution date (`YYYY-MM-DD`) for scheduled transfers.
    #[arg(long, value_name = "date")]
    date: Option<String>,
    /// Acting role or alias.
    #[arg(long, default_value = "Guest")]
    role: String,
    /// Users fixture used to resolve role aliases.
    #[arg(long = "users", value_name = "path")]
    users_fixture: Option<PathBuf>,
}

fn role_directory(path: Option<PathBuf>) -> io::Result<Box<dyn RoleDirectory>> {
    match path {
        Some(path) => {
            let users = UserFixtures::from_file(&path).map_err(|error| {
                io::Error::other(format!("load users fixture {}: {error}", path.display()))
            })?;
            Ok(Box::new(FixtureRoleDirectory::new(users)))
        }
        None => Ok(Box::new(PassthroughRoleDirectory)),
    }
}

fn main() -> io::Result<ExitCode> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let role = role_directory(args.users_fixture)?.resolve(&args.role);

    let candidate = TransferCandidate {
        beneficiary: args.beneficiary.trim().to_owned(),
        iban: args.iban.trim().to_owned(),
        label: args.label.trim().to_owned(),
        amount: args.amount,
        mode: args.mode,
        date: args.date,
    };

    let desk = TransferDesk::new(Arc::new(DefaultClock));
    let outcome = desk.submit(&candidate, &role);
    println!("{}", outcome.message());

    if outcome.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
