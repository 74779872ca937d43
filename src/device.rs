//! Device Profile Builder
//!
//! Translates a device profile plus locale and timezone into the artifacts
//! the protocol needs: header sets, user agent strings, login parameters and
//! the checkin/device-configuration messages. The server tolerates no
//! variation in the constant strings below; they are sent byte for byte.

use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};

use crate::pb;
use crate::profile::DeviceProfile;
use crate::GpapiError;

/// Opaque capability-targeting token sent on every request.
const DFE_TARGETS: &str = "CAEScFfqlIEG6gUYogFWrAISK1WDAg+hAZoCDgIU1gYEOIACFkLMAeQBnASLATlASUuyAyqCAjY5igOMBQzfA/IClwFbApUC4ANbtgKVAS7OAX8YswHFBhgDwAOPAmGEBt4OfKkB5weSB5AFASkiN68akgMaxAMSAQEBA9kBO7UBFE1KVwIDBGs3go6BBgEBAgMECQgJAQIEAQMEAQMBBQEBBAUEFQYCBgUEAwMBDwIBAgOrARwBEwMEAg0mrwESfTEcAQEKG4EBMxghChMBDwYGASI3hAEODEwXCVh/EREZA4sBYwEdFAgIIwkQcGQRDzQ2fTC2AjfVAQIBAYoBGRg2FhYFBwEqNzACJShzFFblAo0CFxpFNBzaAd0DHjIRI4sBJZcBPdwBCQGhAUd2A7kBLBVPngEECHl0UEUMtQETigHMAgUFCc0BBUUlTywdHDgBiAJ+vgKhAU0uAcYCAWQ/5ALUAw1UwQHUBpIBCdQDhgL4AY4CBQICjARbGFBGWzA1CAEMOQH+BRAOCAZywAIDyQZ2MgM3BxsoAgUEBwcHFia3AgcGTBwHBYwBAlcBggFxSGgIrAEEBw4QEqUCASsWadsHCgUCBQMD7QICA3tXCUw7ugJZAwGyAUwpIwM5AwkDBQMJA5sBCw8BNxBVVBwVKhebARkBAwsQEAgEAhESAgQJEBCZATMdzgEBBwG8AQQYKSMUkAEDAwY/CTs4/wEaAUt1AwEDAQUBAgIEAwYEDx1dB2wGeBFgTQ";

const ACCOUNT_TYPE: &str = "HOSTED_OR_GOOGLE";
const CLIENT_SIG: &str = "38918a453d07199354f8b19af05ec6562ced5788";
const DEFAULT_VENDING_VERSION_STRING: &str = "8.4.19.V-all [0] [FP] 175058788";

const ENABLED_EXPERIMENTS: &str = "cl:billing.select_add_instrument_by_default";
const UNSUPPORTED_EXPERIMENTS: &str = "nocache:billing.use_charging_poller,\
market_emails,buyer_currency,prod_baseline,checkin.set_asset_paid_app_field,\
shekel_test,content_ratings,buyer_currency_in_app,nocache:encrypted_apk,recent_changes";

/// Checkin protocol version, fixed.
const CHECKIN_VERSION: i32 = 3;

/// Builds protocol artifacts for one device identity.
pub struct DeviceBuilder {
    profile: DeviceProfile,
    locale: String,
    timezone: String,
}

impl DeviceBuilder {
    /// Creates a builder for `profile`.
    ///
    /// # Arguments
    /// * `locale` - must match the `en_US` shape exactly
    /// * `timezone` - explicit value, or `None` to use the profile's own
    ///
    /// # Errors
    /// `InvalidLocale` on a malformed locale; `InvalidTimezone` when neither
    /// the argument nor the profile yields a timezone.
    pub fn new(
        profile: DeviceProfile,
        locale: &str,
        timezone: Option<&str>,
    ) -> Result<Self, GpapiError> {
        let mut builder = Self {
            profile,
            locale: String::new(),
            timezone: String::new(),
        };
        builder.set_locale(locale)?;
        builder.set_timezone(timezone)?;
        Ok(builder)
    }

    /// Replaces the builder's locale after validating it.
    pub fn set_locale(&mut self, locale: &str) -> Result<(), GpapiError> {
        if !locale_is_valid(locale) {
            return Err(GpapiError::InvalidLocale(locale.to_string()));
        }
        self.locale = locale.to_string();
        Ok(())
    }

    /// Replaces the builder's timezone, falling back to the profile's value.
    pub fn set_timezone(&mut self, timezone: Option<&str>) -> Result<(), GpapiError> {
        let timezone = match timezone {
            Some(tz) => tz,
            None => self
                .profile
                .timezone
                .as_deref()
                .ok_or(GpapiError::InvalidTimezone)?,
        };
        self.timezone = timezone.to_string();
        Ok(())
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    /// Header set sent on every catalog request.
    pub fn base_headers(&self) -> Result<HeaderMap, GpapiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&self.locale.replace('_', "-"))?,
        );
        headers.insert(
            HeaderName::from_static("x-dfe-encoded-targets"),
            HeaderValue::from_static(DFE_TARGETS),
        );
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent())?);
        headers.insert(
            HeaderName::from_static("x-dfe-client-id"),
            HeaderValue::from_static("am-android-google"),
        );
        headers.insert(
            HeaderName::from_static("x-dfe-mccmnc"),
            HeaderValue::from_str(&self.profile.cell_operator)?,
        );
        headers.insert(
            HeaderName::from_static("x-dfe-network-type"),
            HeaderValue::from_static("4"),
        );
        headers.insert(
            HeaderName::from_static("x-dfe-content-filters"),
            HeaderValue::from_static(""),
        );
        headers.insert(
            HeaderName::from_static("x-dfe-request-params"),
            HeaderValue::from_static("timeoutMs=4000"),
        );
        Ok(headers)
    }

    /// Base headers extended with the experiment and screen hints the
    /// device-config upload expects.
    pub fn upload_headers(&self) -> Result<HeaderMap, GpapiError> {
        let mut headers = self.base_headers()?;
        headers.insert(
            HeaderName::from_static("x-dfe-enabled-experiments"),
            HeaderValue::from_static(ENABLED_EXPERIMENTS),
        );
        headers.insert(
            HeaderName::from_static("x-dfe-unsupported-experiments"),
            HeaderValue::from_static(UNSUPPORTED_EXPERIMENTS),
        );
        headers.insert(
            HeaderName::from_static("x-dfe-smallestscreenwidthdp"),
            HeaderValue::from_static("320"),
        );
        headers.insert(
            HeaderName::from_static("x-dfe-filter-level"),
            HeaderValue::from_static("3"),
        );
        Ok(headers)
    }

    /// Header set for the token-exchange calls. A known device id is sent as
    /// lowercase hex in the `device` header.
    pub fn auth_headers(&self, gsf_id: Option<u64>) -> Result<HeaderMap, GpapiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!(
                "GoogleAuth/1.4 ({} {})",
                self.profile.build_device, self.profile.build_id
            ))?,
        );
        if let Some(gsf_id) = gsf_id {
            headers.insert(
                HeaderName::from_static("device"),
                HeaderValue::from_str(&format!("{gsf_id:x}"))?,
            );
        }
        Ok(headers)
    }

    /// Synthesizes the Finsky user agent for this device.
    pub fn user_agent(&self) -> String {
        let version_string = self
            .profile
            .vending_version_string
            .as_deref()
            .unwrap_or(DEFAULT_VENDING_VERSION_STRING);
        format!(
            "Android-Finsky/{version_string} (api=3\
,versionCode={version_code}\
,sdk={sdk}\
,device={device}\
,hardware={hardware}\
,product={product}\
,platformVersionRelease={platform}\
,model={model}\
,buildId={build_id}\
,isWideScreen=0\
,supportedAbis={abis})",
            version_code = self.profile.vending_version,
            sdk = self.profile.build_sdk_version,
            device = self.profile.build_device,
            hardware = self.profile.build_hardware,
            product = self.profile.build_product,
            platform = self.profile.build_version_release,
            model = self.profile.build_model,
            build_id = self.profile.build_id,
            abis = self.profile.platforms.join(";"),
        )
    }

    /// Form parameters for the first round of the token exchange.
    pub fn login_params(
        &self,
        email: &str,
        encrypted_password: &str,
    ) -> Vec<(&'static str, String)> {
        vec![
            ("Email", email.to_string()),
            ("EncryptedPasswd", encrypted_password.to_string()),
            ("add_account", "1".to_string()),
            ("accountType", ACCOUNT_TYPE.to_string()),
            (
                "google_play_services_version",
                self.profile.gsf_version.to_string(),
            ),
            ("has_permission", "1".to_string()),
            ("source", "android".to_string()),
            ("device_country", self.locale[0..2].to_string()),
            ("lang", self.locale.clone()),
            ("client_sig", CLIENT_SIG.to_string()),
            ("callerSig", CLIENT_SIG.to_string()),
            ("droidguard_results", "dummy123".to_string()),
        ]
    }

    /// Assembles a fresh checkin request (id 0, no security token).
    pub fn checkin_request(&self) -> pb::AndroidCheckinRequest {
        pb::AndroidCheckinRequest {
            id: Some(0),
            checkin: Some(self.android_checkin()),
            locale: Some(self.locale.clone()),
            time_zone: Some(self.timezone.clone()),
            version: Some(CHECKIN_VERSION),
            device_configuration: Some(self.device_config()),
            fragment: Some(0),
            ..Default::default()
        }
    }

    /// Maps the profile into the device-configuration message. List fields
    /// keep the profile's order.
    pub fn device_config(&self) -> pb::DeviceConfigurationProto {
        let p = &self.profile;
        pb::DeviceConfigurationProto {
            touch_screen: Some(p.touch_screen),
            keyboard: Some(p.keyboard),
            navigation: Some(p.navigation),
            screen_layout: Some(p.screen_layout),
            has_hard_keyboard: Some(p.has_hard_keyboard),
            has_five_way_navigation: Some(p.has_five_way_navigation),
            screen_density: Some(p.screen_density),
            gl_es_version: Some(p.gl_es_version),
            system_shared_library: p.shared_libraries.clone(),
            system_available_feature: p.features.clone(),
            native_platform: p.platforms.clone(),
            screen_width: Some(p.screen_width),
            screen_height: Some(p.screen_height),
            system_supported_locale: p.locales.clone(),
            gl_extension: p.gl_extensions.clone(),
        }
    }

    /// Maps the profile's build identity into the build-info message. The
    /// timestamp is seconds since the epoch, captured at call time.
    pub fn android_build(&self) -> pb::AndroidBuildProto {
        let p = &self.profile;
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();
        pb::AndroidBuildProto {
            id: Some(p.build_fingerprint.clone()),
            product: Some(p.build_hardware.clone()),
            carrier: Some(p.build_brand.clone()),
            radio: Some(p.build_radio.clone()),
            bootloader: Some(p.build_bootloader.clone()),
            device: Some(p.build_device.clone()),
            sdk_version: Some(p.build_sdk_version),
            model: Some(p.build_model.clone()),
            manufacturer: Some(p.build_manufacturer.clone()),
            build_product: Some(p.build_product.clone()),
            client: Some(p.client.clone()),
            ota_installed: Some(false),
            timestamp: Some(timestamp),
            google_services: Some(p.gsf_version),
        }
    }

    fn android_checkin(&self) -> pb::AndroidCheckinProto {
        let p = &self.profile;
        pb::AndroidCheckinProto {
            build: Some(self.android_build()),
            last_checkin_msec: Some(0),
            cell_operator: Some(p.cell_operator.clone()),
            sim_operator: Some(p.sim_operator.clone()),
            roaming: Some(p.roaming.clone()),
            user_number: Some(0),
        }
    }
}

/// `en_US` shape: two lowercase letters, underscore, two uppercase letters.
fn locale_is_valid(locale: &str) -> bool {
    let b = locale.as_bytes();
    b.len() == 5
        && b[0].is_ascii_lowercase()
        && b[1].is_ascii_lowercase()
        && b[2] == b'_'
        && b[3].is_ascii_uppercase()
        && b[4].is_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileStore;

    fn bacon() -> DeviceProfile {
        ProfileStore::load_default()
            .unwrap()
            .get("bacon")
            .unwrap()
    }

    fn builder() -> DeviceBuilder {
        DeviceBuilder::new(bacon(), "en_US", None).unwrap()
    }

    #[test]
    fn locale_validation() {
        for good in ["en_US", "fr_FR", "zh_TW"] {
            assert!(locale_is_valid(good), "{good} should be accepted");
        }
        for bad in ["", "en", "en-US", "EN_US", "en_us", "e_US", "en_USA", "en _U"] {
            assert!(!locale_is_valid(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn set_locale_rejects_malformed_input() {
        let mut b = builder();
        assert!(matches!(
            b.set_locale("en-US"),
            Err(GpapiError::InvalidLocale(_))
        ));
        // the previous locale survives a failed set
        assert_eq!(b.locale(), "en_US");
    }

    #[test]
    fn accept_language_uses_hyphen() {
        let headers = builder().base_headers().unwrap();
        assert_eq!(headers.get("Accept-Language").unwrap(), "en-US");
        assert_eq!(headers.get("X-DFE-Client-Id").unwrap(), "am-android-google");
        assert_eq!(headers.get("X-DFE-Network-Type").unwrap(), "4");
        assert_eq!(headers.get("X-DFE-Content-Filters").unwrap(), "");
        assert_eq!(
            headers.get("X-DFE-Request-Params").unwrap(),
            "timeoutMs=4000"
        );
    }

    #[test]
    fn upload_headers_extend_base() {
        let headers = builder().upload_headers().unwrap();
        assert_eq!(headers.get("X-DFE-SmallestScreenWidthDp").unwrap(), "320");
        assert_eq!(headers.get("X-DFE-Filter-Level").unwrap(), "3");
        assert!(headers.contains_key("X-DFE-Enabled-Experiments"));
        assert!(headers.contains_key("Accept-Language"));
    }

    #[test]
    fn timezone_falls_back_to_profile() {
        let b = DeviceBuilder::new(bacon(), "en_US", None).unwrap();
        assert_eq!(b.timezone(), "America/Chicago");

        let b = DeviceBuilder::new(bacon(), "en_US", Some("Europe/Paris")).unwrap();
        assert_eq!(b.timezone(), "Europe/Paris");
    }

    #[test]
    fn missing_timezone_everywhere_is_an_error() {
        let mut profile = bacon();
        profile.timezone = None;
        assert!(matches!(
            DeviceBuilder::new(profile, "en_US", None),
            Err(GpapiError::InvalidTimezone)
        ));
    }

    #[test]
    fn user_agent_embeds_profile_fields() {
        let ua = builder().user_agent();
        assert!(ua.starts_with("Android-Finsky/8.4.19.V-all [0] [FP] 175058788 (api=3"));
        assert!(ua.contains(",versionCode=80841900"));
        assert!(ua.contains(",device=A0001"));
        assert!(ua.contains(",buildId=NMF26X"));
        assert!(ua.contains(",supportedAbis=armeabi-v7a;armeabi)"));
    }

    #[test]
    fn user_agent_falls_back_to_default_version_string() {
        let mut profile = bacon();
        profile.vending_version_string = None;
        let b = DeviceBuilder::new(profile, "en_US", None).unwrap();
        assert!(b
            .user_agent()
            .starts_with("Android-Finsky/8.4.19.V-all [0] [FP] 175058788"));
    }

    #[test]
    fn auth_headers_carry_hex_device_id_when_known() {
        let b = builder();
        let headers = b.auth_headers(None).unwrap();
        assert!(headers.get("device").is_none());
        assert_eq!(
            headers.get("User-Agent").unwrap(),
            "GoogleAuth/1.4 (A0001 NMF26X)"
        );

        let headers = b.auth_headers(Some(0x1234)).unwrap();
        assert_eq!(headers.get("device").unwrap(), "1234");
    }

    #[test]
    fn login_params_derive_country_and_lang() {
        let params = builder().login_params("user@example.com", "cipher");
        let get = |key| {
            params
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("Email"), Some("user@example.com"));
        assert_eq!(get("EncryptedPasswd"), Some("cipher"));
        assert_eq!(get("accountType"), Some("HOSTED_OR_GOOGLE"));
        assert_eq!(get("device_country"), Some("en"));
        assert_eq!(get("lang"), Some("en_US"));
        assert_eq!(get("client_sig"), get("callerSig"));
    }

    #[test]
    fn checkin_request_is_fresh() {
        let request = builder().checkin_request();
        assert_eq!(request.id, Some(0));
        assert_eq!(request.version, Some(3));
        assert_eq!(request.fragment, Some(0));
        assert_eq!(request.security_token, None);
        assert!(request.account_cookie.is_empty());
        assert_eq!(request.locale.as_deref(), Some("en_US"));
        assert_eq!(request.time_zone.as_deref(), Some("America/Chicago"));
        let build = request.checkin.unwrap().build.unwrap();
        assert_eq!(build.ota_installed, Some(false));
        // seconds since the epoch, not milliseconds
        let ts = build.timestamp.unwrap();
        assert!(ts > 1_600_000_000 && ts < 100_000_000_000);
    }

    #[test]
    fn device_config_preserves_platform_order() {
        let mut profile = bacon();
        profile.platforms = vec!["arm".to_string(), "arm64".to_string()];
        let b = DeviceBuilder::new(profile, "en_US", None).unwrap();
        let config = b.device_config();
        assert_eq!(config.native_platform, vec!["arm", "arm64"]);
        assert_eq!(config.touch_screen, Some(3));
        assert_eq!(config.screen_density, Some(480));
        assert_eq!(config.has_five_way_navigation, Some(false));
    }
}
