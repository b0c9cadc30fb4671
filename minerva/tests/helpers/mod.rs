use httpmock::MockServer;
use minerva::types::BaseUrl;
use minerva::MinervaClient;

pub type AnyResult = Result<(), Box<dyn std::error::Error>>;

/// Path of the API root on the mock server.
pub const API: &str = "/minerva/api/";

/// A client which is not logged in, talking to the mock server.
pub fn client_for(server: &MockServer) -> MinervaClient {
    let url = BaseUrl::try_from(server.url(API)).unwrap();
    MinervaClient::new(url).unwrap()
}

/// Path of an endpoint on the mock server.
pub fn api(path: &str) -> String {
    format!("{}{}", API, path)
}
