pub mod models;
pub mod utils;

// Locale primitives shared by the toolkit crate: style enums in `models`,
// digit and word rendering in `utils::persian_format`.
