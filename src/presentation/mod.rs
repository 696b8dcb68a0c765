pub mod wasm_api;

pub use wasm_api::{mount_projection_chart, projection_snapshot};
