//! UI Components

pub mod comment_panel;
pub mod create_workspace_modal;
pub mod footer;
pub mod navbar;
pub mod spinner;
pub mod upload_video_modal;
pub mod workspace_sidebar;

pub use comment_panel::CommentPanel;
pub use create_workspace_modal::CreateWorkspaceModal;
pub use footer::Footer;
pub use navbar::Navbar;
pub use spinner::Spinner;
pub use upload_video_modal::UploadVideoModal;
pub use workspace_sidebar::WorkspaceSidebar;
