pub mod info_request;
pub mod model;
