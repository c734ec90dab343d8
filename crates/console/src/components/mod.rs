mod layout;
mod resource_manager;
mod shared;

pub use layout::Layout;
pub use resource_manager::{ResourceForm, ResourceManager, ResourceTable};
pub use shared::{EmptyState, ErrorBanner, FilePreview, Modal, StatusBadge};
