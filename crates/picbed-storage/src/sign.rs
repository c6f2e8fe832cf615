//! HMAC-SHA1 request signing shared by the COS and OSS adapters.
//!
//! Both providers authenticate PUT requests with an HMAC-SHA1 signature over
//! a canonical string; the chains differ (COS signs a hashed HttpString with
//! a derived SignKey, OSS signs the string directly and base64-encodes).

use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::{Digest, Sha1};

type HmacSha1 = Hmac<Sha1>;

fn hmac_sha1(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC accepts any key size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn sha1_hex(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// RFC 1123 GMT date used by the OSS `Date` header and signature.
pub(crate) fn gmt_date(now: DateTime<Utc>) -> String {
    now.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// COS v5 Authorization header for a single request.
///
/// Chain: SignKey = hmac(secret_key, key_time); StringToSign =
/// `sha1\n{key_time}\n{sha1(HttpString)}\n`; signature = hmac(SignKey,
/// StringToSign), hex-encoded. Headers and URL params are left out of the
/// signature, which COS permits when the corresponding lists are empty.
pub(crate) fn cos_authorization(
    secret_id: &str,
    secret_key: &str,
    method: &str,
    url_path: &str,
    now: DateTime<Utc>,
    valid_for_secs: i64,
) -> String {
    let start = now.timestamp();
    let key_time = format!("{};{}", start, start + valid_for_secs);

    let sign_key = hex::encode(hmac_sha1(secret_key.as_bytes(), key_time.as_bytes()));

    let http_string = format!("{}\n{}\n\n\n", method.to_lowercase(), url_path);
    let string_to_sign = format!("sha1\n{}\n{}\n", key_time, sha1_hex(http_string.as_bytes()));

    let signature = hex::encode(hmac_sha1(sign_key.as_bytes(), string_to_sign.as_bytes()));

    format!(
        "q-sign-algorithm=sha1&q-ak={}&q-sign-time={}&q-key-time={}&q-header-list=&q-url-param-list=&q-signature={}",
        secret_id, key_time, key_time, signature
    )
}

/// OSS Authorization header value: `OSS {access_key_id}:{signature}` where
/// signature = base64(hmac-sha1(secret, `VERB\n\nContent-Type\nDate\n/bucket/key`)).
pub(crate) fn oss_authorization(
    access_key_id: &str,
    access_key_secret: &str,
    verb: &str,
    content_type: &str,
    date: &str,
    bucket: &str,
    key: &str,
) -> String {
    let string_to_sign = format!(
        "{}\n\n{}\n{}\n/{}/{}",
        verb, content_type, date, bucket, key
    );
    let signature =
        general_purpose::STANDARD.encode(hmac_sha1(access_key_secret.as_bytes(), string_to_sign.as_bytes()));
    format!("OSS {}:{}", access_key_id, signature)
}
