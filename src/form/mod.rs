//! Form controller: wires two quality sliders, the preference engine, and the
//! submission record for one assessment form.
//!
//! Each form owns a [`FormContext`] (id + configuration) from
//! [`AssessmentForm::new`] until [`AssessmentForm::teardown`]; no state is
//! shared between forms except what the caller explicitly passes in.

pub mod action;
pub mod context;
pub mod controller;
pub mod validation;
pub mod view;


pub use action::FormAction;
pub use context::FormContext;
pub use controller::AssessmentForm;
pub use validation::{SubmissionError, SubmissionValidator};
pub use view::{FormView, SliderView};
