// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2022 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Signature V2 and Signature V4 for S3 API

use crate::s3::config::SignatureMethod;
use crate::s3::creds::Credentials;
use crate::s3::header_constants::*;
use crate::s3::string_map::{StringMap, StringMapExt};
use crate::s3::types::S3Request;
use crate::s3::utils::{
    EMPTY_SHA256, UNSIGNED_PAYLOAD, UtcTime, b64encode, hex_encode, hmac_sha1, hmac_sha256,
    sha256_hash, to_amz_date, to_http_header_value, to_signer_date, urlencode,
};
use http::Method;
use std::fmt;

const SERVICE_NAME: &str = "s3";
const V4_ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Computes request signatures for one signing scheme
pub trait Signer: fmt::Debug + Send + Sync {
    fn method(&self) -> SignatureMethod;

    /// Adds the headers the signature covers to the request
    fn pre_process_headers(&self, request: &mut S3Request);

    /// Returns the `Authorization` header value for the request
    fn authorization_header(&self, request: &S3Request) -> String;

    /// Returns a presigned URL valid for `lifetime` seconds from the request date
    fn authenticated_url(&self, request: &S3Request, lifetime: u64, force_https: bool) -> String;
}

fn scheme(request: &S3Request, force_https: bool) -> &'static str {
    if force_https || request.https() {
        "https"
    } else {
        "http"
    }
}

// ---------------------------------------------------------------------------
// Signature V2
// ---------------------------------------------------------------------------

/// Returns the V2 string to sign
pub fn get_string_to_sign_v2(
    method: &Method,
    content_md5: &str,
    content_type: &str,
    date_or_expires: &str,
    canonical_amz_headers: &str,
    resource: &str,
) -> String {
    format!(
        "{method}\n{content_md5}\n{content_type}\n{date_or_expires}\n{canonical_amz_headers}{resource}"
    )
}

/// Returns base64 encoded HMAC-SHA1 signature
pub fn get_signature_v2(secret_key: &str, string_to_sign: &str) -> String {
    b64encode(hmac_sha1(secret_key.as_bytes(), string_to_sign.as_bytes()))
}

/// Legacy HMAC-SHA1 signer
#[derive(Clone, Debug)]
pub struct SignerV2 {
    credentials: Credentials,
}

impl SignerV2 {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl Signer for SignerV2 {
    fn method(&self) -> SignatureMethod {
        SignatureMethod::V2
    }

    fn pre_process_headers(&self, request: &mut S3Request) {
        let date = to_http_header_value(request.date());
        request.headers_mut().set_ignore_case(DATE, date);
        if let Some(token) = &self.credentials.session_token {
            request
                .amz_headers_mut()
                .add(X_AMZ_SECURITY_TOKEN, token.as_str());
        }
    }

    fn authorization_header(&self, request: &S3Request) -> String {
        let headers = request.headers();
        let string_to_sign = get_string_to_sign_v2(
            request.method(),
            headers.get_ignore_case(CONTENT_MD5).unwrap_or_default(),
            headers.get_ignore_case(CONTENT_TYPE).unwrap_or_default(),
            headers.get_ignore_case(DATE).unwrap_or_default(),
            &request.amz_headers().get_canonical_amz_headers(),
            &request.resource(),
        );
        let signature = get_signature_v2(&self.credentials.secret_key, &string_to_sign);
        format!("AWS {}:{}", self.credentials.access_key, signature)
    }

    fn authenticated_url(&self, request: &S3Request, lifetime: u64, force_https: bool) -> String {
        let lifetime = i64::try_from(lifetime).unwrap_or(i64::MAX);
        let expires = request.date().timestamp().saturating_add(lifetime).to_string();

        let mut amz_headers = StringMap::new();
        if let Some(token) = &self.credentials.session_token {
            amz_headers.add(X_AMZ_SECURITY_TOKEN, token.as_str());
        }

        let string_to_sign = get_string_to_sign_v2(
            request.method(),
            "",
            "",
            &expires,
            &amz_headers.get_canonical_amz_headers(),
            &request.resource(),
        );
        let signature = get_signature_v2(&self.credentials.secret_key, &string_to_sign);

        let uri = request.uri();
        let mut url = format!("{}://{}{}", scheme(request, force_https), request.host(), uri);
        url.push(if uri.contains('?') { '&' } else { '?' });
        url.push_str(&format!(
            "{AWS_ACCESS_KEY_ID}={}&{EXPIRES_PARAM}={expires}&{SIGNATURE}={}",
            urlencode(&self.credentials.access_key),
            urlencode(&signature)
        ));
        for (key, value) in &amz_headers {
            url.push_str(&format!("&{key}={}", urlencode(value)));
        }
        url
    }
}

// ---------------------------------------------------------------------------
// Signature V4
// ---------------------------------------------------------------------------

/// Returns scope value of given date, region and service name
pub fn get_scope(date: UtcTime, region: &str, service_name: &str) -> String {
    format!(
        "{}/{}/{}/aws4_request",
        to_signer_date(date),
        region,
        service_name
    )
}

/// Returns hex encoded SHA256 hash of canonical request
pub fn get_canonical_request_hash(
    method: &Method,
    uri: &str,
    query_string: &str,
    headers: &str,
    signed_headers: &str,
    content_sha256: &str,
) -> String {
    // CanonicalRequest =
    //   HTTPRequestMethod + '\n' +
    //   CanonicalURI + '\n' +
    //   CanonicalQueryString + '\n' +
    //   CanonicalHeaders + '\n\n' +
    //   SignedHeaders + '\n' +
    //   HexEncode(Hash(RequestPayload))
    let canonical_request = format!(
        "{method}\n{uri}\n{query_string}\n{headers}\n\n{signed_headers}\n{content_sha256}"
    );
    sha256_hash(canonical_request.as_bytes())
}

/// Returns string-to-sign value of given date, scope and canonical request hash
pub fn get_string_to_sign(date: UtcTime, scope: &str, canonical_request_hash: &str) -> String {
    format!(
        "{V4_ALGORITHM}\n{}\n{scope}\n{canonical_request_hash}",
        to_amz_date(date)
    )
}

/// Returns signing key of given secret key, date, region and service name
pub fn get_signing_key(
    secret_key: &str,
    date: UtcTime,
    region: &str,
    service_name: &str,
) -> Vec<u8> {
    let mut key: Vec<u8> = b"AWS4".to_vec();
    key.extend(secret_key.as_bytes());

    let date_key = hmac_sha256(key.as_slice(), to_signer_date(date).as_bytes());
    let date_region_key = hmac_sha256(date_key.as_slice(), region.as_bytes());
    let date_region_service_key = hmac_sha256(date_region_key.as_slice(), service_name.as_bytes());
    hmac_sha256(date_region_service_key.as_slice(), b"aws4_request")
}

/// Returns signature value for given signing key and string-to-sign
pub fn get_signature(signing_key: &[u8], string_to_sign: &[u8]) -> String {
    hex_encode(&hmac_sha256(signing_key, string_to_sign))
}

/// Returns authorization value for given access key, scope, signed headers and signature
pub fn get_authorization(
    access_key: &str,
    scope: &str,
    signed_headers: &str,
    signature: &str,
) -> String {
    format!(
        "{V4_ALGORITHM} Credential={access_key}/{scope}, SignedHeaders={signed_headers}, Signature={signature}"
    )
}

/// Derived-key HMAC-SHA256 signer
#[derive(Clone, Debug)]
pub struct SignerV4 {
    credentials: Credentials,
    region: String,
}

impl SignerV4 {
    pub fn new(credentials: Credentials, region: String) -> Self {
        Self {
            credentials,
            region,
        }
    }

    fn signature(
        &self,
        request: &S3Request,
        canonical_query_string: &str,
        canonical_headers: &str,
        signed_headers: &str,
        content_sha256: &str,
    ) -> (String, String) {
        let date = request.date();
        let scope = get_scope(date, &self.region, SERVICE_NAME);
        let canonical_request_hash = get_canonical_request_hash(
            request.method(),
            request.path(),
            canonical_query_string,
            canonical_headers,
            signed_headers,
            content_sha256,
        );
        let string_to_sign = get_string_to_sign(date, &scope, &canonical_request_hash);
        let signing_key =
            get_signing_key(&self.credentials.secret_key, date, &self.region, SERVICE_NAME);
        (
            scope,
            get_signature(signing_key.as_slice(), string_to_sign.as_bytes()),
        )
    }
}

impl Signer for SignerV4 {
    fn method(&self) -> SignatureMethod {
        SignatureMethod::V4
    }

    fn pre_process_headers(&self, request: &mut S3Request) {
        let date = to_amz_date(request.date());
        let content_sha256 = match request.body() {
            Some(body) => sha256_hash(body),
            None => EMPTY_SHA256.to_string(),
        };

        let amz_headers = request.amz_headers_mut();
        amz_headers.add(X_AMZ_DATE, date);
        amz_headers.add(X_AMZ_CONTENT_SHA256, content_sha256);
        if let Some(token) = &self.credentials.session_token {
            amz_headers.add(X_AMZ_SECURITY_TOKEN, token.as_str());
        }
    }

    fn authorization_header(&self, request: &S3Request) -> String {
        let mut headers = request.headers().clone();
        headers.add_map(request.amz_headers().clone());
        let (signed_headers, canonical_headers) = headers.get_canonical_headers();
        let content_sha256 = request
            .amz_headers()
            .get(X_AMZ_CONTENT_SHA256)
            .map(String::as_str)
            .unwrap_or(EMPTY_SHA256);

        let (scope, signature) = self.signature(
            request,
            &request.query().get_canonical_query_string(),
            &canonical_headers,
            &signed_headers,
            content_sha256,
        );
        get_authorization(
            &self.credentials.access_key,
            &scope,
            &signed_headers,
            &signature,
        )
    }

    fn authenticated_url(&self, request: &S3Request, lifetime: u64, force_https: bool) -> String {
        let date = request.date();
        let scope = get_scope(date, &self.region, SERVICE_NAME);
        let canonical_headers = format!("host:{}", request.host());
        let signed_headers = "host";

        let mut query = request.query().clone();
        query.add(X_AMZ_ALGORITHM_PARAM, V4_ALGORITHM);
        query.add(
            X_AMZ_CREDENTIAL_PARAM,
            format!("{}/{scope}", self.credentials.access_key),
        );
        query.add(X_AMZ_DATE_PARAM, to_amz_date(date));
        query.add(X_AMZ_EXPIRES_PARAM, lifetime.to_string());
        query.add(X_AMZ_SIGNED_HEADERS_PARAM, signed_headers);
        if let Some(token) = &self.credentials.session_token {
            query.add(X_AMZ_SECURITY_TOKEN_PARAM, token.as_str());
        }

        let canonical_query_string = query.get_canonical_query_string();
        let (_, signature) = self.signature(
            request,
            &canonical_query_string,
            &canonical_headers,
            signed_headers,
            UNSIGNED_PAYLOAD,
        );

        format!(
            "{}://{}{}?{canonical_query_string}&{X_AMZ_SIGNATURE_PARAM}={signature}",
            scheme(request, force_https),
            request.host(),
            request.path(),
        )
    }
}
