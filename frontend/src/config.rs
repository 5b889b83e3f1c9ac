use std::rc::Rc;

use crate::forms::service::SubmissionService;

/// How long simulated form submissions take.
pub const SUBMIT_DELAY_MS: u32 = 2000;

pub const COOKIE_PREFERENCES_KEY: &str = "cookie-preferences";

#[cfg(debug_assertions)]
#[cfg_attr(not(feature = "live-forms"), allow(dead_code))]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
#[cfg_attr(not(feature = "live-forms"), allow(dead_code))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

#[cfg(feature = "live-forms")]
pub fn submission_service() -> Rc<dyn SubmissionService> {
    Rc::new(crate::forms::service::HttpSubmission::new(get_backend_url()))
}

#[cfg(not(feature = "live-forms"))]
pub fn submission_service() -> Rc<dyn SubmissionService> {
    Rc::new(crate::forms::service::SimulatedSubmission::new(SUBMIT_DELAY_MS))
}
