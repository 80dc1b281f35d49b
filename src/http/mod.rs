//! HTTP protocol layer module
//!
//! Content-type detection and response builders, decoupled from dispatch logic.

pub mod mime;
pub mod response;

// Re-export commonly used items
pub use mime::content_type_for;
pub use response::{
    build_404_response, build_405_response, build_500_response, build_ok_response,
    build_redirect_response,
};
