//! Core library for currm.
//!
//! Rule entries from `currm.yaml` are resolved to a fetch URL and a local
//! filename ([`url_model`]), then either downloaded into the rule store
//! ([`pull`]) or compared against their remote origin ([`check`]).

pub mod check;
pub mod config;
pub mod download;
pub mod error;
pub mod fetch_head;
pub mod format;
pub mod logging;
pub mod pull;
pub mod revision;
pub mod storage;
pub mod transport;
pub mod url_model;

pub use check::{check_all, check_rule, RuleStatus};
pub use config::{RuleEntry, RulesConfig};
pub use error::{Error, ErrorKind, Result, TransportError};
pub use pull::{fetch_rule, pull_all, PullOutcome, PullReport};
pub use revision::Revision;
pub use transport::{CurlTransport, Transport};
pub use url_model::{resolve_filename, resolve_fetch_url, ResolvedRule, UrlShape};
