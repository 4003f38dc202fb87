pub mod ledger;
pub mod repository;
pub mod vendor;

pub use ledger::{LedgerError, LedgerService};
pub use repository::VendorRepository;
pub use vendor::{Vendor, VendorProfile};
