//! Play backend protocol client.
//!
//! Owns the session state accumulated across the handshake (device id,
//! tokens, cookie) and sequences the calls against the fixed endpoints:
//! checkin, the two-round token exchange, the device-config upload, and the
//! catalog surface. Calls are order-dependent; checkin must precede
//! authentication and authentication must precede any catalog call.

use std::collections::HashMap;
use std::time::Duration;

use log::debug;
use prost::Message;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::device::DeviceBuilder;
use crate::pb;
use crate::GpapiError;

const AUTH_URL: &str = "https://android.clients.google.com/auth";
const CHECKIN_URL: &str = "https://android.clients.google.com/checkin";
const FDFE_URL: &str = "https://android.clients.google.com/fdfe";

const CONTENT_TYPE_PROTO: &str = "application/x-protobuf";
const CONTENT_TYPE_URLENC: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// The device-config upload is the one call with its own deadline.
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

fn fdfe(suffix: &str) -> String {
    format!("{FDFE_URL}/{suffix}")
}

/// Transport settings, fixed at construction.
#[derive(Clone, Debug)]
pub struct ClientOptions {
    /// Verify the server certificate. Disable only to inspect traffic.
    pub verify_tls: bool,
    /// Proxy url routed through for every call, e.g. `http://127.0.0.1:8080`
    pub proxy: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            verify_tls: true,
            proxy: None,
        }
    }
}

/// Client for one logical session against the Play backend.
///
/// Session state lives for the lifetime of the instance and is never
/// persisted. The handshake methods take `&mut self`; there is no safe
/// concurrent use of one client.
pub struct GooglePlayClient {
    http: reqwest::Client,
    device: DeviceBuilder,
    gsf_id: Option<u64>,
    auth_sub_token: Option<String>,
    device_config_token: Option<String>,
    checkin_consistency_token: Option<String>,
    // reserved; the backend sets it on some catalog flows not covered here
    dfe_cookie: Option<String>,
}

impl GooglePlayClient {
    /// Creates a client around a device identity.
    ///
    /// # Errors
    /// Returns `GpapiError` if the transport cannot be built (bad proxy url,
    /// TLS backend failure).
    pub fn new(device: DeviceBuilder, options: ClientOptions) -> Result<Self, GpapiError> {
        let mut builder = reqwest::Client::builder();
        if !options.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(proxy) = &options.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }
        Ok(Self {
            http: builder.build()?,
            device,
            gsf_id: None,
            auth_sub_token: None,
            device_config_token: None,
            checkin_consistency_token: None,
            dfe_cookie: None,
        })
    }

    /// The device id assigned by checkin, once one is known.
    pub fn gsf_id(&self) -> Option<u64> {
        self.gsf_id
    }

    /// The catalog authorization token, once authentication has completed.
    pub fn auth_sub_token(&self) -> Option<&str> {
        self.auth_sub_token.as_deref()
    }

    /// Restores a previously established session so the handshake does not
    /// have to be repeated.
    pub fn restore_session(&mut self, gsf_id: u64, auth_sub_token: String) {
        self.gsf_id = Some(gsf_id);
        self.auth_sub_token = Some(auth_sub_token);
    }

    /// Header set for the current session state. Optional fields are
    /// included iff set; nothing is ever sent empty.
    pub fn headers(&self, upload: bool) -> Result<HeaderMap, GpapiError> {
        let mut headers = if upload {
            self.device.upload_headers()?
        } else {
            self.device.base_headers()?
        };
        if let Some(gsf_id) = self.gsf_id {
            headers.insert(
                HeaderName::from_static("x-dfe-device-id"),
                HeaderValue::from_str(&format!("{gsf_id:x}"))?,
            );
        }
        if let Some(token) = &self.auth_sub_token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("GoogleLogin auth={token}"))?,
            );
        }
        if let Some(token) = &self.device_config_token {
            headers.insert(
                HeaderName::from_static("x-dfe-device-config-token"),
                HeaderValue::from_str(token)?,
            );
        }
        if let Some(token) = &self.checkin_consistency_token {
            headers.insert(
                HeaderName::from_static("x-dfe-device-checkin-consistency-token"),
                HeaderValue::from_str(token)?,
            );
        }
        if let Some(cookie) = &self.dfe_cookie {
            headers.insert(
                HeaderName::from_static("x-dfe-cookie"),
                HeaderValue::from_str(cookie)?,
            );
        }
        Ok(headers)
    }

    /// Registers the device identity with the backend.
    ///
    /// Two sequential posts: the first obtains the assigned device id,
    /// security token and consistency token; the second resubmits the same
    /// message with the id and token filled in plus two account cookies,
    /// binding the new id to the account. Stores the id and consistency
    /// token and returns the id.
    pub async fn checkin(&mut self, email: &str, ac2dm_token: &str) -> Result<u64, GpapiError> {
        let mut request = self.device.checkin_request();
        let response = self.send_checkin(&request).await?;

        let gsf_id = response.android_id.ok_or(GpapiError::UnexpectedResponse)?;
        self.checkin_consistency_token = response.device_checkin_consistency_token;

        request.id = Some(gsf_id as i64);
        request.security_token = response.security_token;
        request.account_cookie.push(format!("[{email}]"));
        request.account_cookie.push(ac2dm_token.to_string());
        // only the first round's assigned id matters to the caller
        self.send_checkin(&request).await?;

        self.gsf_id = Some(gsf_id);
        Ok(gsf_id)
    }

    async fn send_checkin(
        &self,
        request: &pb::AndroidCheckinRequest,
    ) -> Result<pb::AndroidCheckinResponse, GpapiError> {
        let mut headers = self.headers(false)?;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_PROTO));
        let res = self
            .http
            .post(CHECKIN_URL)
            .headers(headers)
            .body(request.encode_to_vec())
            .send()
            .await?;
        debug!("checkin responded {}", res.status());
        let body = res.bytes().await?;
        Ok(pb::AndroidCheckinResponse::decode(body.as_ref())?)
    }

    /// Runs the two-round token exchange and stores the resulting
    /// authorization token.
    ///
    /// The password must already be encrypted with
    /// [`encrypt_password`](crate::crypto::encrypt_password).
    ///
    /// # Errors
    /// `Login` with the server's message when the response carries an
    /// `Error` field, or with a fixed message when the expected token is
    /// absent. Never retried internally.
    pub async fn authenticate(
        &mut self,
        email: &str,
        encrypted_password: &str,
    ) -> Result<(), GpapiError> {
        let mut params = self.device.login_params(email, encrypted_password);
        params.push(("service", "androidmarket".to_string()));
        params.push(("app", "com.android.vending".to_string()));

        let fields = self.send_auth(&params).await?;
        let master_token = token_from_fields(&fields, "token")?;

        let params = second_round_params(params, self.gsf_id, &master_token);
        let fields = self.send_auth(&params).await?;
        self.auth_sub_token = Some(token_from_fields(&fields, "auth")?);
        Ok(())
    }

    async fn send_auth(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<HashMap<String, String>, GpapiError> {
        let mut headers = self.device.auth_headers(self.gsf_id)?;
        headers.insert(
            HeaderName::from_static("app"),
            HeaderValue::from_static("com.android.vending"),
        );
        let res = self
            .http
            .post(AUTH_URL)
            .headers(headers)
            .header(CONTENT_TYPE, CONTENT_TYPE_URLENC)
            .form(&params)
            .send()
            .await?;
        debug!("auth endpoint responded {}", res.status());
        Ok(parse_auth_response(&res.text().await?))
    }

    /// Uploads the device capability profile. A token in the response is
    /// stored for later requests; its absence is benign and leaves the
    /// session untouched.
    pub async fn upload_device_config(&mut self) -> Result<(), GpapiError> {
        let request = pb::UploadDeviceConfigRequest {
            device_configuration: Some(self.device.device_config()),
            ..Default::default()
        };
        let mut headers = self.headers(true)?;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_PROTO));
        let res = self
            .http
            .post(fdfe("uploadDeviceConfig"))
            .headers(headers)
            .timeout(UPLOAD_TIMEOUT)
            .body(request.encode_to_vec())
            .send()
            .await?;
        debug!("uploadDeviceConfig responded {}", res.status());
        let body = res.bytes().await?;
        let wrapper = pb::ResponseWrapper::decode(body.as_ref())?;
        self.apply_upload_response(&wrapper);
        Ok(())
    }

    fn apply_upload_response(&mut self, wrapper: &pb::ResponseWrapper) {
        if let Some(token) = wrapper
            .payload
            .as_ref()
            .and_then(|p| p.upload_device_config_response.as_ref())
            .and_then(|r| r.upload_device_config_token.clone())
        {
            self.device_config_token = Some(token);
        }
    }

    /// Searches the catalog.
    pub async fn search(&self, query: &str) -> Result<pb::SearchResponse, GpapiError> {
        let params = [("c", "3".to_string()), ("q", query.to_string())];
        let payload = self.execute_get(&fdfe("search"), &params).await?;
        payload
            .search_response
            .ok_or(GpapiError::UnexpectedResponse)
    }

    /// Fetches the store entry for one package.
    pub async fn details(&self, package: &str) -> Result<pb::DetailsResponse, GpapiError> {
        let params = [("doc", package.to_string())];
        let payload = self.execute_get(&fdfe("details"), &params).await?;
        payload
            .details_response
            .ok_or(GpapiError::UnexpectedResponse)
    }

    /// Fetches store entries for many packages in one call.
    pub async fn bulk_details(
        &self,
        packages: &[&str],
    ) -> Result<pb::BulkDetailsResponse, GpapiError> {
        let request = pb::BulkDetailsRequest {
            docid: packages.iter().map(|p| p.to_string()).collect(),
            include_child_docs: Some(false),
        };
        let mut headers = self.headers(false)?;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_PROTO));
        let res = self
            .http
            .post(fdfe("bulkDetails"))
            .headers(headers)
            .body(request.encode_to_vec())
            .send()
            .await?;
        debug!("bulkDetails responded {}", res.status());
        let body = res.bytes().await?;
        let payload = unwrap_payload(pb::ResponseWrapper::decode(body.as_ref())?)?;
        payload
            .bulk_details_response
            .ok_or(GpapiError::UnexpectedResponse)
    }

    /// Lists the browse categories, optionally scoped to one.
    pub async fn browse(
        &self,
        cat: Option<&str>,
        ctr: Option<&str>,
    ) -> Result<pb::BrowseResponse, GpapiError> {
        let mut params = vec![("c", "3".to_string())];
        if let Some(cat) = cat {
            params.push(("cat", cat.to_string()));
        }
        if let Some(ctr) = ctr {
            params.push(("ctr", ctr.to_string()));
        }
        let payload = self.execute_get(&fdfe("browse"), &params).await?;
        payload
            .browse_response
            .ok_or(GpapiError::UnexpectedResponse)
    }

    /// Lists the apps of a category, optionally restricted to a subcategory.
    pub async fn list(
        &self,
        cat: &str,
        ctr: Option<&str>,
    ) -> Result<pb::ListResponse, GpapiError> {
        let mut params = vec![("c", "3".to_string()), ("cat", cat.to_string())];
        if let Some(ctr) = ctr {
            params.push(("ctr", ctr.to_string()));
        }
        let payload = self.execute_get(&fdfe("list"), &params).await?;
        payload.list_response.ok_or(GpapiError::UnexpectedResponse)
    }

    /// Fetches a page of reviews for a package.
    pub async fn reviews(
        &self,
        package: &str,
        sort: u32,
        number: u32,
        offset: u32,
    ) -> Result<pb::ReviewResponse, GpapiError> {
        let params = [
            ("doc", package.to_string()),
            ("sort", sort.to_string()),
            ("n", number.to_string()),
            ("o", offset.to_string()),
        ];
        let payload = self.execute_get(&fdfe("rev"), &params).await?;
        payload
            .review_response
            .ok_or(GpapiError::UnexpectedResponse)
    }

    /// Fetches the store front page.
    pub async fn home(&self) -> Result<pb::ListResponse, GpapiError> {
        let params = [("c", "3".to_string()), ("nocache_isui", "true".to_string())];
        let payload = self.execute_get(&fdfe("homeV2"), &params).await?;
        payload.list_response.ok_or(GpapiError::UnexpectedResponse)
    }

    /// Registers a (free) purchase of a package version for this account and
    /// returns the response carrying the delivery token.
    pub async fn purchase(
        &self,
        package: &str,
        version_code: i32,
    ) -> Result<pb::BuyResponse, GpapiError> {
        let params = [
            ("ot", "1".to_string()),
            ("doc", package.to_string()),
            ("vc", version_code.to_string()),
        ];
        let headers = self.headers(false)?;
        let res = self
            .http
            .post(fdfe("purchase"))
            .headers(headers)
            .header(CONTENT_TYPE, CONTENT_TYPE_URLENC)
            .form(&params)
            .send()
            .await?;
        debug!("purchase responded {}", res.status());
        let body = res.bytes().await?;
        let payload = unwrap_payload(pb::ResponseWrapper::decode(body.as_ref())?)?;
        payload.buy_response.ok_or(GpapiError::UnexpectedResponse)
    }

    /// Resolves the download data for a purchased package version.
    pub async fn delivery(
        &self,
        package: &str,
        version_code: i32,
        download_token: Option<&str>,
    ) -> Result<pb::DeliveryResponse, GpapiError> {
        let mut params = vec![
            ("ot", "1".to_string()),
            ("doc", package.to_string()),
            ("vc", version_code.to_string()),
        ];
        if let Some(token) = download_token {
            params.push(("dtok", token.to_string()));
        }
        let payload = self.execute_get(&fdfe("delivery"), &params).await?;
        payload
            .delivery_response
            .ok_or(GpapiError::UnexpectedResponse)
    }

    async fn execute_get(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<pb::Payload, GpapiError> {
        let headers = self.headers(false)?;
        let res = self
            .http
            .get(url)
            .headers(headers)
            .query(params)
            .send()
            .await?;
        debug!("{url} responded {}", res.status());
        let body = res.bytes().await?;
        unwrap_payload(pb::ResponseWrapper::decode(body.as_ref())?)
    }
}

/// Auth responses are whitespace-delimited `key=value` tokens; keys are
/// lowercased and values split on the first `=` only.
fn parse_auth_response(body: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for token in body.split_whitespace() {
        if let Some((key, value)) = token.split_once('=') {
            fields.insert(key.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }
    fields
}

/// Pulls `key` from a parsed auth response, mapping its absence to the
/// protocol's failure modes.
fn token_from_fields(
    fields: &HashMap<String, String>,
    key: &str,
) -> Result<String, GpapiError> {
    if let Some(token) = fields.get(key) {
        return Ok(token.clone());
    }
    match fields.get("error") {
        Some(error) => Err(GpapiError::Login(format!("server says: {error}"))),
        None => Err(GpapiError::Login("auth token not found".to_string())),
    }
}

/// Derives the second-round parameters from the first round's: credentials
/// are dropped, the master token and the fixed protocol flags are added.
fn second_round_params(
    params: Vec<(&'static str, String)>,
    gsf_id: Option<u64>,
    master_token: &str,
) -> Vec<(&'static str, String)> {
    let mut params: Vec<(&'static str, String)> = params
        .into_iter()
        .filter(|(key, _)| *key != "Email" && *key != "EncryptedPasswd")
        .collect();
    if let Some(gsf_id) = gsf_id {
        params.push(("androidId", format!("{gsf_id:x}")));
    }
    params.push(("Token", master_token.to_string()));
    params.push(("check_email", "1".to_string()));
    params.push(("token_request_options", "CAA4AQ==".to_string()));
    params.push(("system_partition", "1".to_string()));
    params.push(("_opt_is_called_from_account_manager", "1".to_string()));
    params
}

fn unwrap_payload(wrapper: pb::ResponseWrapper) -> Result<pb::Payload, GpapiError> {
    if let Some(message) = wrapper
        .commands
        .as_ref()
        .and_then(|c| c.display_error_message.as_ref())
    {
        if !message.is_empty() {
            return Err(GpapiError::DisplayError(message.clone()));
        }
    }
    wrapper.payload.ok_or(GpapiError::UnexpectedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileStore;

    fn client() -> GooglePlayClient {
        let profile = ProfileStore::load_default()
            .unwrap()
            .get("bacon")
            .unwrap();
        let device = DeviceBuilder::new(profile, "en_US", None).unwrap();
        GooglePlayClient::new(device, ClientOptions::default()).unwrap()
    }

    #[test]
    fn auth_response_parsing() {
        let fields = parse_auth_response("SID=abc\nLSID=def\nToken=t0ken=extra\nignored");
        assert_eq!(fields.get("sid").map(String::as_str), Some("abc"));
        assert_eq!(fields.get("lsid").map(String::as_str), Some("def"));
        // split on the first `=` only
        assert_eq!(fields.get("token").map(String::as_str), Some("t0ken=extra"));
        assert!(!fields.contains_key("ignored"));
    }

    #[test]
    fn server_error_becomes_login_error() {
        let fields = parse_auth_response("Error=BadAuthentication");
        match token_from_fields(&fields, "token") {
            Err(GpapiError::Login(message)) => assert!(message.contains("BadAuthentication")),
            other => panic!("expected a login error, got {other:?}"),
        }
    }

    #[test]
    fn missing_token_becomes_not_found() {
        let fields = parse_auth_response("SID=abc");
        match token_from_fields(&fields, "token") {
            Err(GpapiError::Login(message)) => assert_eq!(message, "auth token not found"),
            other => panic!("expected a login error, got {other:?}"),
        }
    }

    #[test]
    fn second_round_strips_credentials_and_adds_flags() {
        let first = vec![
            ("Email", "user@example.com".to_string()),
            ("EncryptedPasswd", "cipher".to_string()),
            ("lang", "en_US".to_string()),
        ];
        let second = second_round_params(first, Some(0xab), "master");
        let get = |key: &str| {
            second
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("Email"), None);
        assert_eq!(get("EncryptedPasswd"), None);
        assert_eq!(get("lang"), Some("en_US"));
        assert_eq!(get("androidId"), Some("ab"));
        assert_eq!(get("Token"), Some("master"));
        assert_eq!(get("check_email"), Some("1"));
        assert_eq!(get("token_request_options"), Some("CAA4AQ=="));
        assert_eq!(get("system_partition"), Some("1"));
        assert_eq!(get("_opt_is_called_from_account_manager"), Some("1"));
    }

    #[test]
    fn second_round_omits_device_id_when_unknown() {
        let second = second_round_params(Vec::new(), None, "master");
        assert!(!second.iter().any(|(k, _)| *k == "androidId"));
    }

    #[test]
    fn device_id_header_is_lowercase_hex() {
        let mut client = client();
        let headers = client.headers(false).unwrap();
        assert!(headers.get("X-DFE-Device-Id").is_none());

        client.gsf_id = Some(4660);
        let headers = client.headers(false).unwrap();
        assert_eq!(headers.get("X-DFE-Device-Id").unwrap(), "1234");

        client.gsf_id = Some(1001);
        let headers = client.headers(false).unwrap();
        assert_eq!(headers.get("X-DFE-Device-Id").unwrap(), "3e9");
    }

    #[test]
    fn headers_track_session_state() {
        let mut client = client();
        let headers = client.headers(false).unwrap();
        assert!(headers.get("Authorization").is_none());
        assert!(headers.get("X-DFE-Device-Config-Token").is_none());
        assert!(headers.get("X-DFE-Device-Checkin-Consistency-Token").is_none());
        assert!(headers.get("X-DFE-Cookie").is_none());

        client.auth_sub_token = Some("tok".to_string());
        client.device_config_token = Some("cfg".to_string());
        client.checkin_consistency_token = Some("con".to_string());
        let headers = client.headers(false).unwrap();
        assert_eq!(
            headers.get("Authorization").unwrap(),
            "GoogleLogin auth=tok"
        );
        assert_eq!(headers.get("X-DFE-Device-Config-Token").unwrap(), "cfg");
        assert_eq!(
            headers.get("X-DFE-Device-Checkin-Consistency-Token").unwrap(),
            "con"
        );
    }

    #[test]
    fn upload_response_without_token_is_benign() {
        let mut client = client();
        let wrapper = pb::ResponseWrapper::default();
        client.apply_upload_response(&wrapper);
        assert!(client.device_config_token.is_none());
        // applying the same empty response again changes nothing
        client.apply_upload_response(&wrapper);
        assert!(client.device_config_token.is_none());

        let wrapper = pb::ResponseWrapper {
            payload: Some(pb::Payload {
                upload_device_config_response: Some(pb::UploadDeviceConfigResponse {
                    upload_device_config_token: Some("cfg".to_string()),
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        client.apply_upload_response(&wrapper);
        assert_eq!(client.device_config_token.as_deref(), Some("cfg"));
    }

    #[test]
    fn display_error_message_surfaces_as_error() {
        let wrapper = pb::ResponseWrapper {
            payload: Some(pb::Payload::default()),
            commands: Some(pb::ServerCommands {
                display_error_message: Some("Item not found.".to_string()),
                ..Default::default()
            }),
        };
        assert!(matches!(
            unwrap_payload(wrapper),
            Err(GpapiError::DisplayError(message)) if message == "Item not found."
        ));
    }

    #[test]
    fn missing_payload_is_unexpected() {
        assert!(matches!(
            unwrap_payload(pb::ResponseWrapper::default()),
            Err(GpapiError::UnexpectedResponse)
        ));
    }
}
