#![doc = include_str!("../README.md")]

pub mod client;
pub mod crypto;
pub mod device;
pub mod pb;
pub mod profile;

use thiserror::Error;

pub use client::{ClientOptions, GooglePlayClient};
pub use crypto::encrypt_password;
pub use device::DeviceBuilder;
pub use profile::{DeviceProfile, ProfileStore};

/// Error type for every fallible operation in the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GpapiError {
    #[error("http transport failed")]
    Reqwest(#[from] reqwest::Error),
    #[error("value not representable as a header")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("malformed protobuf response")]
    ProtoDecode(#[from] prost::DecodeError),
    #[error("profile store parse failed")]
    ProfileParse(#[from] toml::de::Error),
    #[error("profile store io failed")]
    Io(#[from] std::io::Error),
    #[error("base64 decode failed")]
    Base64(#[from] base64::DecodeError),
    #[error("password encryption failed")]
    Rsa(#[from] rsa::Error),
    #[error("login public key is malformed")]
    MalformedKey,
    #[error("no device profile named `{0}`")]
    UnknownDevice(String),
    #[error("profile value for `{0}` is invalid")]
    InvalidProfileValue(&'static str),
    #[error("locale `{0}` is not of the form en_US")]
    InvalidLocale(String),
    #[error("no timezone given and the profile carries none")]
    InvalidTimezone,
    #[error("login failed: {0}")]
    Login(String),
    #[error("server says: {0}")]
    DisplayError(String),
    #[error("unexpected response from server")]
    UnexpectedResponse,
}
