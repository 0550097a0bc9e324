pub mod basic_info;
pub mod sales_info;
pub mod shipping;
pub mod variations;

pub use basic_info::BasicInfoSection;
pub use sales_info::SalesInfoSection;
pub use shipping::ShippingSection;
pub use variations::VariationsSection;
