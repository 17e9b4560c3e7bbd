//! # onboard-form: Onboarding Form Layer
//!
//! Everything around the consent engine that a multi-step onboarding
//! wizard needs, without any rendering:
//!
//! - **Fields** (`fields.rs`): which fields exist, which step they sit on,
//!   and whether they are required.
//! - **Wizard** (`wizard.rs`): current step and how far the user got.
//! - **Form** (`form.rs`): the answers, including consent-parameter rows
//!   edited through `onboard-consent`.
//! - **Review** (`review.rs`): advisory findings before export.
//! - **Export** (`export.rs`): the form as indented JSON on disk.

pub mod error;
pub mod export;
pub mod fields;
pub mod form;
pub mod review;
pub mod wizard;

pub use error::{FormError, FormResult};
pub use export::{default_export_file_name, to_export_json, write_export, write_export_to_dir};
pub use fields::{FieldCatalog, FieldDescriptor};
pub use form::{OnboardingForm, Section};
pub use review::{review_consent_param, review_form, review_required_fields, ReviewReport};
pub use wizard::Wizard;
