//! Device Profile Store
//!
//! Provides functionality for loading named device profiles, the hardware and
//! build identities the client impersonates. Profiles are stored as
//! string-valued TOML tables (one table per device codename) and validated
//! into typed records at load time so that a missing or malformed key fails
//! the load, not the first request that needs it.

use std::collections::BTreeMap;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::GpapiError;

/// Profile document bundled with the crate.
const DEFAULT_PROFILES: &str = include_str!("../profiles/devices.toml");

/// A validated device identity.
///
/// Immutable once loaded. List-valued fields keep the comma-split order of
/// the underlying store.
#[derive(Clone, Debug)]
pub struct DeviceProfile {
    /// Human readable device name, when the store provides one
    pub user_readable_name: Option<String>,
    /// Full build fingerprint, sent as the build id on checkin
    pub build_fingerprint: String,
    pub build_hardware: String,
    pub build_brand: String,
    pub build_radio: String,
    pub build_bootloader: String,
    pub build_device: String,
    pub build_model: String,
    pub build_manufacturer: String,
    pub build_product: String,
    /// Short build id (e.g. "NMF26X"), embedded in user agents
    pub build_id: String,
    /// Platform release string (e.g. "7.1.1")
    pub build_version_release: String,
    pub build_sdk_version: i32,
    /// Checkin client identifier
    pub client: String,
    pub touch_screen: i32,
    pub keyboard: i32,
    pub navigation: i32,
    pub screen_layout: i32,
    pub has_hard_keyboard: bool,
    pub has_five_way_navigation: bool,
    pub screen_density: i32,
    pub screen_width: i32,
    pub screen_height: i32,
    pub gl_es_version: i32,
    pub gl_extensions: Vec<String>,
    pub shared_libraries: Vec<String>,
    pub features: Vec<String>,
    pub locales: Vec<String>,
    /// Supported ABIs, most preferred first
    pub platforms: Vec<String>,
    pub cell_operator: String,
    pub sim_operator: String,
    pub roaming: String,
    pub gsf_version: i32,
    pub vending_version: i32,
    pub vending_version_string: Option<String>,
    /// Default timezone for the device, used when none is given explicitly
    pub timezone: Option<String>,
}

/// Raw store representation of a profile. Every value is a string, matching
/// the properties-file heritage of the format.
#[derive(Deserialize, Debug, Clone)]
struct RawDeviceProfile {
    #[serde(rename = "userreadablename")]
    user_readable_name: Option<String>,
    #[serde(rename = "build.fingerprint")]
    build_fingerprint: String,
    #[serde(rename = "build.hardware")]
    build_hardware: String,
    #[serde(rename = "build.brand")]
    build_brand: String,
    #[serde(rename = "build.radio")]
    build_radio: String,
    #[serde(rename = "build.bootloader")]
    build_bootloader: String,
    #[serde(rename = "build.device")]
    build_device: String,
    #[serde(rename = "build.model")]
    build_model: String,
    #[serde(rename = "build.manufacturer")]
    build_manufacturer: String,
    #[serde(rename = "build.product")]
    build_product: String,
    #[serde(rename = "build.id")]
    build_id: String,
    #[serde(rename = "build.version.release")]
    build_version_release: String,
    #[serde(rename = "build.version.sdk_int")]
    build_version_sdk_int: String,
    client: String,
    touchscreen: String,
    keyboard: String,
    navigation: String,
    screenlayout: String,
    hashardkeyboard: String,
    hasfivewaynavigation: String,
    #[serde(rename = "screen.density")]
    screen_density: String,
    #[serde(rename = "screen.width")]
    screen_width: String,
    #[serde(rename = "screen.height")]
    screen_height: String,
    #[serde(rename = "gl.version")]
    gl_version: String,
    #[serde(rename = "gl.extensions")]
    gl_extensions: String,
    sharedlibraries: String,
    features: String,
    locales: String,
    platforms: String,
    celloperator: String,
    simoperator: String,
    roaming: String,
    #[serde(rename = "gsf.version")]
    gsf_version: String,
    #[serde(rename = "vending.version")]
    vending_version: String,
    #[serde(rename = "vending.versionstring")]
    vending_version_string: Option<String>,
    timezone: Option<String>,
}

/// Collection of device profiles keyed by codename.
#[derive(Clone, Debug)]
pub struct ProfileStore {
    devices: BTreeMap<String, DeviceProfile>,
}

impl ProfileStore {
    /// Loads the profile document bundled with the crate.
    pub fn load_default() -> Result<Self, GpapiError> {
        Self::from_toml(DEFAULT_PROFILES)
    }

    /// Reads a profile document from disk.
    ///
    /// # Errors
    /// Returns `GpapiError` if the file cannot be read, is not valid TOML, or
    /// any section is missing a required key or holds a malformed value.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self, GpapiError> {
        let s = std::fs::read_to_string(path)?;
        Self::from_toml(&s)
    }

    /// Parses a profile document. Every section is validated here; lookups
    /// through [`ProfileStore::get`] cannot fail on content afterwards.
    pub fn from_toml(document: &str) -> Result<Self, GpapiError> {
        let raw: BTreeMap<String, RawDeviceProfile> = toml::from_str(document)?;
        let mut devices = BTreeMap::new();
        for (codename, profile) in raw {
            let profile = match profile.try_into() {
                Ok(p) => p,
                Err(e) => {
                    warn!("Profile section `{codename}` is malformed: {e:?}");
                    return Err(e);
                }
            };
            devices.insert(codename, profile);
        }
        Ok(Self { devices })
    }

    /// Returns the profile registered under `codename`.
    pub fn get(&self, codename: &str) -> Result<DeviceProfile, GpapiError> {
        self.devices
            .get(codename)
            .cloned()
            .ok_or_else(|| GpapiError::UnknownDevice(codename.to_string()))
    }

    /// All codenames in the store, in lexical order.
    pub fn codenames(&self) -> impl Iterator<Item = &str> {
        self.devices.keys().map(String::as_str)
    }
}

fn parse_int(key: &'static str, value: &str) -> Result<i32, GpapiError> {
    value
        .parse()
        .map_err(|_| GpapiError::InvalidProfileValue(key))
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, GpapiError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(GpapiError::InvalidProfileValue(key)),
    }
}

/// Comma-split, preserving the store's element order.
fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(str::to_string).collect()
}

impl TryFrom<RawDeviceProfile> for DeviceProfile {
    type Error = GpapiError;

    fn try_from(raw: RawDeviceProfile) -> Result<Self, Self::Error> {
        Ok(Self {
            user_readable_name: raw.user_readable_name,
            build_fingerprint: raw.build_fingerprint,
            build_hardware: raw.build_hardware,
            build_brand: raw.build_brand,
            build_radio: raw.build_radio,
            build_bootloader: raw.build_bootloader,
            build_device: raw.build_device,
            build_model: raw.build_model,
            build_manufacturer: raw.build_manufacturer,
            build_product: raw.build_product,
            build_id: raw.build_id,
            build_version_release: raw.build_version_release,
            build_sdk_version: parse_int("build.version.sdk_int", &raw.build_version_sdk_int)?,
            client: raw.client,
            touch_screen: parse_int("touchscreen", &raw.touchscreen)?,
            keyboard: parse_int("keyboard", &raw.keyboard)?,
            navigation: parse_int("navigation", &raw.navigation)?,
            screen_layout: parse_int("screenlayout", &raw.screenlayout)?,
            has_hard_keyboard: parse_bool("hashardkeyboard", &raw.hashardkeyboard)?,
            has_five_way_navigation: parse_bool("hasfivewaynavigation", &raw.hasfivewaynavigation)?,
            screen_density: parse_int("screen.density", &raw.screen_density)?,
            screen_width: parse_int("screen.width", &raw.screen_width)?,
            screen_height: parse_int("screen.height", &raw.screen_height)?,
            gl_es_version: parse_int("gl.version", &raw.gl_version)?,
            gl_extensions: split_list(&raw.gl_extensions),
            shared_libraries: split_list(&raw.sharedlibraries),
            features: split_list(&raw.features),
            locales: split_list(&raw.locales),
            platforms: split_list(&raw.platforms),
            cell_operator: raw.celloperator,
            sim_operator: raw.simoperator,
            roaming: raw.roaming,
            gsf_version: parse_int("gsf.version", &raw.gsf_version)?,
            vending_version: parse_int("vending.version", &raw.vending_version)?,
            vending_version_string: raw.vending_version_string,
            timezone: raw.timezone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_parses() {
        let store = ProfileStore::load_default().unwrap();
        let codenames: Vec<&str> = store.codenames().collect();
        assert!(codenames.contains(&"bacon"));

        let profile = store.get("bacon").unwrap();
        assert_eq!(profile.build_device, "A0001");
        assert_eq!(profile.touch_screen, 3);
        assert!(!profile.has_hard_keyboard);
        assert!(profile.timezone.is_some());
    }

    #[test]
    fn unknown_codename_is_an_error() {
        let store = ProfileStore::load_default().unwrap();
        assert!(matches!(
            store.get("nonexistent"),
            Err(GpapiError::UnknownDevice(_))
        ));
    }

    #[test]
    fn missing_key_fails_at_load() {
        // No build.fingerprint, otherwise plausible
        let doc = r#"
[ghost]
"build.hardware" = "ghost"
"#;
        assert!(matches!(
            ProfileStore::from_toml(doc),
            Err(GpapiError::ProfileParse(_))
        ));
    }

    #[test]
    fn malformed_int_fails_at_load() {
        let mut doc = String::from("[weird]\n");
        for (k, v) in [
            ("build.fingerprint", "a/b/c:1.0/X/1:user/release-keys"),
            ("build.hardware", "weird"),
            ("build.brand", "weird"),
            ("build.radio", "unknown"),
            ("build.bootloader", "unknown"),
            ("build.device", "weird"),
            ("build.model", "Weird"),
            ("build.manufacturer", "Weird"),
            ("build.product", "weird"),
            ("build.id", "X"),
            ("build.version.release", "1.0"),
            ("build.version.sdk_int", "not-a-number"),
            ("client", "android-google"),
            ("touchscreen", "3"),
            ("keyboard", "1"),
            ("navigation", "1"),
            ("screenlayout", "2"),
            ("hashardkeyboard", "false"),
            ("hasfivewaynavigation", "false"),
            ("screen.density", "480"),
            ("screen.width", "1080"),
            ("screen.height", "1920"),
            ("gl.version", "196608"),
            ("gl.extensions", "GL_EXT_debug_marker"),
            ("sharedlibraries", "android.test.runner"),
            ("features", "android.hardware.wifi"),
            ("locales", "en,en_US"),
            ("platforms", "armeabi-v7a"),
            ("celloperator", "310260"),
            ("simoperator", "310260"),
            ("roaming", "mobile-notroaming"),
            ("gsf.version", "203615037"),
            ("vending.version", "80841900"),
        ] {
            doc.push_str(&format!("\"{k}\" = \"{v}\"\n"));
        }
        assert!(matches!(
            ProfileStore::from_toml(&doc),
            Err(GpapiError::InvalidProfileValue("build.version.sdk_int"))
        ));
    }

    #[test]
    fn list_order_is_preserved() {
        let store = ProfileStore::load_default().unwrap();
        let profile = store.get("bacon").unwrap();
        assert_eq!(profile.platforms, vec!["armeabi-v7a", "armeabi"]);
    }
}
