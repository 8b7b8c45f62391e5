//! Policy Record Domain
//!
//! This crate assembles complete fictitious car-insurance records from the
//! field generators of the owner and vehicle domains plus its own policy
//! number and insurance term generators.
//!
//! # Record Shape
//!
//! ```text
//! InsuranceRecord
//! ├── policy_number   PL123456789AB
//! ├── owner           first_name, last_name, birth_date, address, phone
//! ├── car             vin
//! └── insurance       start_date, end_date (start + 365 days)
//! ```
//!
//! # Example
//!
//! ```rust
//! use core_kernel::FakeSource;
//! use domain_policy::RecordGenerator;
//! use std::sync::Arc;
//!
//! let generator = RecordGenerator::new(Arc::new(FakeSource::seeded(1)));
//! let record = generator.generate().unwrap();
//! assert_eq!(record.policy_number.as_str().len(), 13);
//! ```

pub mod policy_number;
pub mod insurance;
pub mod record;
pub mod error;

pub use policy_number::generate_policy_number;
pub use insurance::{generate_end_date, generate_start_date, InsuranceTerm, POLICY_TERM_DAYS};
pub use record::{InsuranceRecord, RecordGenerator};
pub use error::PolicyError;
