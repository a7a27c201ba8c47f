//! # kisan-core
//!
//! Everything the KisanEdge site does that is not markup: the package
//! catalog, testimonials, lead form state and validation, and the gateway
//! that posts leads to the backend.
//!
//! ## Lead flow
//!
//! ```text
//! ┌──────────────┐   validate    ┌──────────────┐   one POST   ┌──────────────┐
//! │  Form state  │──────────────▶│  Submission  │─────────────▶│ LeadGateway  │
//! │ (per page)   │               │ JSON / multi │              │ HTTP or mock │
//! └──────────────┘               └──────────────┘              └──────────────┘
//! ```
//!
//! The frontend crate owns the signals; this crate owns the rules, so they
//! can be tested without a browser.

pub mod catalog;
pub mod config;
pub mod error;
pub mod forms;
pub mod gateway;
pub mod submit;
pub mod testimonials;
pub mod validate;

pub use catalog::{Package, PackageKey, PackageTabs};
pub use config::ApiConfig;
pub use error::{Result, SiteError};
pub use forms::{Attachment, CallbackForm, EnrollDialogForm, EnrollForm, EnrollSubmission};
pub use gateway::{HttpLeadGateway, LeadGateway, MockLeadGateway, ServerReply};
pub use submit::{send_callback, send_enrollment, CallbackReceipt, ENROLL_SUCCESS_MESSAGE};
pub use testimonials::{Carousel, Testimonial, TESTIMONIALS};
