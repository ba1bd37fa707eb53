pub(crate) mod http_client;
pub(crate) mod http_handler_common;
pub(crate) mod http_request;
pub(crate) mod http_response;
