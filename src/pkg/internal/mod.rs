pub mod adaptors;
pub mod structured_data;
