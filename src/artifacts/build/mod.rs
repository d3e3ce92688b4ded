pub mod plan;
pub mod settings;
pub mod version_info;
