pub mod analysis;
pub mod analyze_request;
pub mod analyze_response;
pub mod speak_request;
