mod http_transport;

pub use http_transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TEXT_PLAIN};
