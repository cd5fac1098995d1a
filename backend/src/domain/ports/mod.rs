//! Domain ports and supporting types for the hexagonal boundary.

mod role_directory;
mod transfer_submission;

#[cfg(test)]
pub use role_directory::MockRoleDirectory;
pub use role_directory::{PassthroughRoleDirectory, RoleDirectory};
#[cfg(test)]
pub use transfer_submission::MockTransferSubmission;
pub use transfer_submission::TransferSubmission;
