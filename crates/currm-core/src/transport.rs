//! Network seam between the core logic and the HTTP client.
//!
//! The pull and check flows only depend on this trait; the curl-backed
//! implementation is what the CLI uses.

use crate::download;
use crate::error::TransportError;
use crate::fetch_head::{self, HeadResult};

/// Blocking HTTP operations needed by `pull` and `check`.
pub trait Transport {
    /// GET `url` and return the body.
    fn get(&self, url: &str) -> Result<Vec<u8>, TransportError>;
    /// HEAD `url` and return the metadata headers.
    fn head(&self, url: &str) -> Result<HeadResult, TransportError>;
}

/// libcurl-backed transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlTransport;

impl Transport for CurlTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        download::fetch_body(url)
    }

    fn head(&self, url: &str) -> Result<HeadResult, TransportError> {
        fetch_head::probe(url)
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory transport with per-method call counters.

    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Debug, Clone)]
    pub enum FakeResponse {
        Ok {
            body: Vec<u8>,
            last_modified: Option<String>,
        },
        Status(u32),
    }

    #[derive(Debug, Default)]
    pub struct FakeTransport {
        responses: HashMap<String, FakeResponse>,
        pub gets: Cell<usize>,
        pub heads: Cell<usize>,
        pub requested: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn serve(mut self, url: &str, body: &[u8], last_modified: Option<&str>) -> Self {
            self.responses.insert(
                url.to_string(),
                FakeResponse::Ok {
                    body: body.to_vec(),
                    last_modified: last_modified.map(str::to_string),
                },
            );
            self
        }

        pub fn fail(mut self, url: &str, status: u32) -> Self {
            self.responses
                .insert(url.to_string(), FakeResponse::Status(status));
            self
        }

        fn lookup(&self, url: &str) -> Result<FakeResponse, TransportError> {
            self.requested.borrow_mut().push(url.to_string());
            match self.responses.get(url) {
                Some(FakeResponse::Status(code)) => Err(TransportError::Http(*code)),
                Some(ok) => Ok(ok.clone()),
                None => Err(TransportError::Http(404)),
            }
        }
    }

    impl Transport for FakeTransport {
        fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
            self.gets.set(self.gets.get() + 1);
            match self.lookup(url)? {
                FakeResponse::Ok { body, .. } => Ok(body),
                FakeResponse::Status(code) => Err(TransportError::Http(code)),
            }
        }

        fn head(&self, url: &str) -> Result<HeadResult, TransportError> {
            self.heads.set(self.heads.get() + 1);
            match self.lookup(url)? {
                FakeResponse::Ok { last_modified, .. } => Ok(HeadResult { last_modified }),
                FakeResponse::Status(code) => Err(TransportError::Http(code)),
            }
        }
    }
}
