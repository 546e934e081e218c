use sha1::{Digest, Sha1};

/// Seconds since the Unix epoch, as Cloudinary expects in signed calls.
pub fn unix_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Signature for an `image/destroy` call.
///
/// Cloudinary signs the alphabetically sorted parameter string with the API
/// secret appended, hashed with SHA-1 and hex encoded.
pub fn sign_destroy(public_id: &str, timestamp: i64, api_secret: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(format!("public_id={public_id}&timestamp={timestamp}").as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_digest() {
        assert_eq!(
            sign_destroy("sample", 1315060510, "abcd"),
            "c3470533147774275dd37996cc4d0e68fd03cd4f"
        );
        assert_eq!(
            sign_destroy("photo_1", 1700000000, "secret"),
            "b332fc314f0d20cae0dd01b92a89ba54b81ea89d"
        );
    }

    #[test]
    fn depends_on_every_input() {
        let base = sign_destroy("photo_1", 1700000000, "secret");

        assert_eq!(base, sign_destroy("photo_1", 1700000000, "secret"));
        assert_ne!(base, sign_destroy("photo_2", 1700000000, "secret"));
        assert_ne!(base, sign_destroy("photo_1", 1700000001, "secret"));
        assert_ne!(base, sign_destroy("photo_1", 1700000000, "other"));
    }

    #[test]
    fn timestamp_is_whole_seconds() {
        let now = unix_timestamp();
        // Millisecond values would be above 1e12 for any date after 2001.
        assert!(now > 1_600_000_000 && now < 100_000_000_000);
    }
}
