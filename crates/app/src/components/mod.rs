pub mod banner;
pub mod header;
pub mod pagination;

pub use banner::NoticeBanners;
pub use header::DashboardHeader;
pub use pagination::Pagination;
