pub mod classes;

pub mod departments;

pub mod enrollments;

pub mod subjects;

pub mod system;

pub mod users;

pub use classes::configure_classes_routes;
pub use departments::configure_department_routes;
pub use enrollments::configure_enrollment_routes;
pub use subjects::configure_subject_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;
