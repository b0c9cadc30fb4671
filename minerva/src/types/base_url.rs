//! NewType for the address of a MINERVA API, given once when the client is configured.

use crate::errors::InvalidBaseUrl;
use aliri_braid::braid;

/// A [BaseUrl] is the API root of a MINERVA instance, e.g.
/// `https://minerva-dev.lcsb.uni.lu/minerva/api/`
#[braid(validator, serde)]
pub struct BaseUrl(String);

impl aliri_braid::Validator for BaseUrl {
    type Error = InvalidBaseUrl;

    fn validate(s: &str) -> Result<(), Self::Error> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(())
        } else {
            Err(InvalidBaseUrl::Protocol(s.to_string()))
        }
    }
}
