//! Page Components

mod callback;
mod enroll;
mod home;
mod plans;

pub use callback::CallbackPage;
pub use enroll::EnrollPage;
pub use home::HomePage;
pub use plans::PlansPage;
