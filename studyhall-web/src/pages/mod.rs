mod class_detail;
mod dashboard;
mod layout;
mod material_detail;

pub use class_detail::ClassDetail;
pub use dashboard::StudentDashboard;
pub use layout::AppLayout;
pub use material_detail::MaterialDetail;
