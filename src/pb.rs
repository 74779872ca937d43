//! Wire message bindings for the Play protocol.
//!
//! Generated by `prost-build` from `proto/googleplay.proto` and checked in so
//! the crate builds without `protoc`. Regenerate after editing the schema.

// This file is @generated by prost-build.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AndroidBuildProto {
    #[prost(string, optional, tag = "1")]
    pub id: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "2")]
    pub product: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "3")]
    pub carrier: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "4")]
    pub radio: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "5")]
    pub bootloader: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "6")]
    pub client: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int64, optional, tag = "7")]
    pub timestamp: ::core::option::Option<i64>,
    #[prost(int32, optional, tag = "8")]
    pub google_services: ::core::option::Option<i32>,
    #[prost(string, optional, tag = "9")]
    pub device: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int32, optional, tag = "10")]
    pub sdk_version: ::core::option::Option<i32>,
    #[prost(string, optional, tag = "11")]
    pub model: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "12")]
    pub manufacturer: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "13")]
    pub build_product: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(bool, optional, tag = "14")]
    pub ota_installed: ::core::option::Option<bool>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AndroidCheckinProto {
    #[prost(message, optional, tag = "1")]
    pub build: ::core::option::Option<AndroidBuildProto>,
    #[prost(int64, optional, tag = "2")]
    pub last_checkin_msec: ::core::option::Option<i64>,
    #[prost(string, optional, tag = "6")]
    pub cell_operator: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "7")]
    pub sim_operator: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "8")]
    pub roaming: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int32, optional, tag = "9")]
    pub user_number: ::core::option::Option<i32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceConfigurationProto {
    #[prost(int32, optional, tag = "1")]
    pub touch_screen: ::core::option::Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub keyboard: ::core::option::Option<i32>,
    #[prost(int32, optional, tag = "3")]
    pub navigation: ::core::option::Option<i32>,
    #[prost(int32, optional, tag = "4")]
    pub screen_layout: ::core::option::Option<i32>,
    #[prost(bool, optional, tag = "5")]
    pub has_hard_keyboard: ::core::option::Option<bool>,
    #[prost(bool, optional, tag = "6")]
    pub has_five_way_navigation: ::core::option::Option<bool>,
    #[prost(int32, optional, tag = "7")]
    pub screen_density: ::core::option::Option<i32>,
    #[prost(int32, optional, tag = "8")]
    pub gl_es_version: ::core::option::Option<i32>,
    #[prost(string, repeated, tag = "9")]
    pub system_shared_library: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "10")]
    pub system_available_feature: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "11")]
    pub native_platform: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int32, optional, tag = "12")]
    pub screen_width: ::core::option::Option<i32>,
    #[prost(int32, optional, tag = "13")]
    pub screen_height: ::core::option::Option<i32>,
    #[prost(string, repeated, tag = "14")]
    pub system_supported_locale: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "15")]
    pub gl_extension: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AndroidCheckinRequest {
    #[prost(string, optional, tag = "1")]
    pub imei: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int64, optional, tag = "2")]
    pub id: ::core::option::Option<i64>,
    #[prost(string, optional, tag = "3")]
    pub digest: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "4")]
    pub checkin: ::core::option::Option<AndroidCheckinProto>,
    #[prost(string, optional, tag = "5")]
    pub desired_build: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "6")]
    pub locale: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int64, optional, tag = "7")]
    pub logging_id: ::core::option::Option<i64>,
    #[prost(string, optional, tag = "8")]
    pub market_checkin: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "9")]
    pub mac_addr: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "10")]
    pub meid: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "11")]
    pub account_cookie: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "12")]
    pub time_zone: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(fixed64, optional, tag = "13")]
    pub security_token: ::core::option::Option<u64>,
    #[prost(int32, optional, tag = "14")]
    pub version: ::core::option::Option<i32>,
    #[prost(string, repeated, tag = "15")]
    pub ota_cert: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "16")]
    pub serial_number: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "17")]
    pub esn: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "18")]
    pub device_configuration: ::core::option::Option<DeviceConfigurationProto>,
    #[prost(string, repeated, tag = "19")]
    pub mac_addr_type: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int32, optional, tag = "20")]
    pub fragment: ::core::option::Option<i32>,
    #[prost(string, optional, tag = "21")]
    pub user_name: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int32, optional, tag = "22")]
    pub user_serial_number: ::core::option::Option<i32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GservicesSetting {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub name: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub value: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AndroidCheckinResponse {
    #[prost(bool, optional, tag = "1")]
    pub stats_ok: ::core::option::Option<bool>,
    #[prost(int64, optional, tag = "3")]
    pub time_msec: ::core::option::Option<i64>,
    #[prost(string, optional, tag = "4")]
    pub digest: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, repeated, tag = "5")]
    pub setting: ::prost::alloc::vec::Vec<GservicesSetting>,
    #[prost(bool, optional, tag = "6")]
    pub market_ok: ::core::option::Option<bool>,
    #[prost(fixed64, optional, tag = "7")]
    pub android_id: ::core::option::Option<u64>,
    #[prost(fixed64, optional, tag = "8")]
    pub security_token: ::core::option::Option<u64>,
    #[prost(bool, optional, tag = "9")]
    pub settings_diff: ::core::option::Option<bool>,
    #[prost(string, repeated, tag = "10")]
    pub delete_setting: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "12")]
    pub device_checkin_consistency_token: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UploadDeviceConfigRequest {
    #[prost(message, optional, tag = "1")]
    pub device_configuration: ::core::option::Option<DeviceConfigurationProto>,
    #[prost(string, optional, tag = "2")]
    pub manufacturer: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "3")]
    pub gcm_registration_id: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UploadDeviceConfigResponse {
    #[prost(string, optional, tag = "1")]
    pub upload_device_config_token: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Offer {
    #[prost(int64, optional, tag = "1")]
    pub micros: ::core::option::Option<i64>,
    #[prost(string, optional, tag = "2")]
    pub currency_code: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "3")]
    pub formatted_amount: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(bool, optional, tag = "4")]
    pub checkout_flow_required: ::core::option::Option<bool>,
    #[prost(int32, optional, tag = "8")]
    pub offer_type: ::core::option::Option<i32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AggregateRating {
    #[prost(int32, optional, tag = "1")]
    pub r#type: ::core::option::Option<i32>,
    #[prost(float, optional, tag = "2")]
    pub star_rating: ::core::option::Option<f32>,
    #[prost(uint64, optional, tag = "3")]
    pub ratings_count: ::core::option::Option<u64>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AppDetails {
    #[prost(string, optional, tag = "1")]
    pub developer_name: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int32, optional, tag = "3")]
    pub version_code: ::core::option::Option<i32>,
    #[prost(string, optional, tag = "4")]
    pub version_string: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int64, optional, tag = "9")]
    pub installation_size: ::core::option::Option<i64>,
    #[prost(string, optional, tag = "16")]
    pub upload_date: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DocumentDetails {
    #[prost(message, optional, tag = "1")]
    pub app_details: ::core::option::Option<AppDetails>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DocV2 {
    #[prost(string, optional, tag = "1")]
    pub docid: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "2")]
    pub backend_docid: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int32, optional, tag = "3")]
    pub doc_type: ::core::option::Option<i32>,
    #[prost(int32, optional, tag = "4")]
    pub backend_id: ::core::option::Option<i32>,
    #[prost(string, optional, tag = "5")]
    pub title: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "6")]
    pub creator: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "7")]
    pub description_html: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, repeated, tag = "8")]
    pub offer: ::prost::alloc::vec::Vec<Offer>,
    #[prost(message, repeated, tag = "11")]
    pub child: ::prost::alloc::vec::Vec<DocV2>,
    #[prost(message, optional, tag = "13")]
    pub details: ::core::option::Option<DocumentDetails>,
    #[prost(message, optional, tag = "14")]
    pub aggregate_rating: ::core::option::Option<AggregateRating>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchResponse {
    #[prost(string, optional, tag = "1")]
    pub original_query: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "2")]
    pub suggested_query: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(bool, optional, tag = "3")]
    pub aggregate_query: ::core::option::Option<bool>,
    #[prost(message, repeated, tag = "5")]
    pub doc: ::prost::alloc::vec::Vec<DocV2>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListResponse {
    #[prost(message, repeated, tag = "2")]
    pub doc: ::prost::alloc::vec::Vec<DocV2>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DetailsResponse {
    #[prost(message, optional, tag = "4")]
    pub doc_v2: ::core::option::Option<DocV2>,
    #[prost(string, optional, tag = "5")]
    pub footer_html: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BulkDetailsRequest {
    #[prost(string, repeated, tag = "1")]
    pub docid: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(bool, optional, tag = "2")]
    pub include_child_docs: ::core::option::Option<bool>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BulkDetailsEntry {
    #[prost(message, optional, tag = "1")]
    pub doc: ::core::option::Option<DocV2>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BulkDetailsResponse {
    #[prost(message, repeated, tag = "1")]
    pub entry: ::prost::alloc::vec::Vec<BulkDetailsEntry>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BrowseLink {
    #[prost(string, optional, tag = "1")]
    pub name: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "3")]
    pub data_url: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BrowseResponse {
    #[prost(string, optional, tag = "1")]
    pub contents_url: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "2")]
    pub promo_url: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, repeated, tag = "3")]
    pub category: ::prost::alloc::vec::Vec<BrowseLink>,
    #[prost(message, repeated, tag = "4")]
    pub breadcrumb: ::prost::alloc::vec::Vec<BrowseLink>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Review {
    #[prost(int64, optional, tag = "3")]
    pub timestamp_msec: ::core::option::Option<i64>,
    #[prost(int32, optional, tag = "4")]
    pub star_rating: ::core::option::Option<i32>,
    #[prost(string, optional, tag = "5")]
    pub title: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "6")]
    pub comment: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "7")]
    pub comment_id: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetReviewsResponse {
    #[prost(message, repeated, tag = "1")]
    pub review: ::prost::alloc::vec::Vec<Review>,
    #[prost(int64, optional, tag = "2")]
    pub matching_count: ::core::option::Option<i64>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReviewResponse {
    #[prost(message, optional, tag = "1")]
    pub get_response: ::core::option::Option<GetReviewsResponse>,
    #[prost(string, optional, tag = "2")]
    pub next_page_url: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpCookie {
    #[prost(string, optional, tag = "1")]
    pub name: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "2")]
    pub value: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AppFileMetadata {
    #[prost(int32, optional, tag = "1")]
    pub file_type: ::core::option::Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub version_code: ::core::option::Option<i32>,
    #[prost(int64, optional, tag = "3")]
    pub size: ::core::option::Option<i64>,
    #[prost(string, optional, tag = "4")]
    pub download_url: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AndroidAppDeliveryData {
    #[prost(int64, optional, tag = "1")]
    pub download_size: ::core::option::Option<i64>,
    #[prost(string, optional, tag = "2")]
    pub sha1: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "3")]
    pub download_url: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, repeated, tag = "4")]
    pub additional_file: ::prost::alloc::vec::Vec<AppFileMetadata>,
    #[prost(message, repeated, tag = "5")]
    pub download_auth_cookie: ::prost::alloc::vec::Vec<HttpCookie>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeliveryResponse {
    #[prost(int32, optional, tag = "1")]
    pub status: ::core::option::Option<i32>,
    #[prost(message, optional, tag = "2")]
    pub app_delivery_data: ::core::option::Option<AndroidAppDeliveryData>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BuyResponse {
    #[prost(string, optional, tag = "55")]
    pub download_token: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServerCommands {
    #[prost(bool, optional, tag = "1")]
    pub clear_cache: ::core::option::Option<bool>,
    #[prost(string, optional, tag = "2")]
    pub display_error_message: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "3")]
    pub log_error_stacktrace: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Payload {
    #[prost(message, optional, tag = "1")]
    pub list_response: ::core::option::Option<ListResponse>,
    #[prost(message, optional, tag = "2")]
    pub details_response: ::core::option::Option<DetailsResponse>,
    #[prost(message, optional, tag = "3")]
    pub review_response: ::core::option::Option<ReviewResponse>,
    #[prost(message, optional, tag = "4")]
    pub buy_response: ::core::option::Option<BuyResponse>,
    #[prost(message, optional, tag = "5")]
    pub search_response: ::core::option::Option<SearchResponse>,
    #[prost(message, optional, tag = "7")]
    pub browse_response: ::core::option::Option<BrowseResponse>,
    #[prost(message, optional, tag = "19")]
    pub bulk_details_response: ::core::option::Option<BulkDetailsResponse>,
    #[prost(message, optional, tag = "21")]
    pub delivery_response: ::core::option::Option<DeliveryResponse>,
    #[prost(message, optional, tag = "28")]
    pub upload_device_config_response: ::core::option::Option<UploadDeviceConfigResponse>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResponseWrapper {
    #[prost(message, optional, tag = "1")]
    pub payload: ::core::option::Option<Payload>,
    #[prost(message, optional, tag = "2")]
    pub commands: ::core::option::Option<ServerCommands>,
}
