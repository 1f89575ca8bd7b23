//! Page Components

pub mod dashboard;
pub mod home;
pub mod login;
pub mod signup;
pub mod video_review;
pub mod workspace;

pub use dashboard::Dashboard;
pub use home::Home;
pub use login::LoginPage;
pub use signup::SignupPage;
pub use video_review::{ReviewPage, ViewerRole};
pub use workspace::WorkspacePage;
