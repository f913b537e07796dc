/// Public URL of an object stored in `bucket` under `key`.
///
/// Pattern: `https://<bucket>.s3.amazonaws.com/<key>`. The key is inserted
/// verbatim, so the same filename always yields the same URL.
pub fn public_url(bucket: &str, key: &str) -> String {
    format!("https://{bucket}.s3.amazonaws.com/{key}")
}
