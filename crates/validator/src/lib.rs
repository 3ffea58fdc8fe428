//! # satchel-validator
//!
//! Pure format and grammar validators for strings.
//!
//! Every validator is a free function `&str -> bool`: input is trimmed of
//! leading/trailing whitespace before testing, empty input classifies as
//! `false`, and malformed input is never an error — just `false`. All
//! validators are stateless and safe to call from any thread.
//!
//! ## Quick Start
//!
//! ```rust
//! use satchel_validator::{is_email, is_fqdn, is_url, is_uuid};
//!
//! assert!(is_email("Jane Doe <jane@example.com>"));
//! assert!(is_fqdn("example.com."));
//! assert!(is_url("https://example.com:8080/path"));
//! assert!(!is_uuid("not-a-uuid"));
//! ```
//!
//! ## Validators
//!
//! - **Network**: [`is_ip`], [`is_ipv4`], [`is_ipv6`], [`is_mac`]
//! - **Names**: [`is_fqdn`], [`is_hostname`], [`is_email`], [`is_url`]
//! - **Identifiers**: [`is_uuid`], [`is_credit_card`], [`is_phone`]
//! - **Text**: [`is_alphanumeric`], [`is_hex_color`], [`is_base64`]

mod card;
mod email;
mod encoding;
mod hostname;
mod net;
mod phone;
mod text;
mod uuid;
mod web;

pub use card::is_credit_card;
pub use email::is_email;
pub use encoding::is_base64;
pub use hostname::{is_fqdn, is_hostname};
pub use net::{is_ip, is_ipv4, is_ipv6, is_mac};
pub use phone::is_phone;
pub use text::{is_alphanumeric, is_hex_color};
pub use uuid::is_uuid;
pub use web::is_url;
