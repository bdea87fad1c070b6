use super::*;

const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";
const WEBP: &[u8] = b"RIFF\x24\x00\x00\x00WEBPVP8 ";

#[test]
fn sniff_recognizes_supported_formats() {
    assert_eq!(sniff_content_type(JPEG), Some("image/jpeg"));
    assert_eq!(sniff_content_type(PNG), Some("image/png"));
    assert_eq!(sniff_content_type(WEBP), Some("image/webp"));
}

#[test]
fn sniff_rejects_other_formats() {
    assert_eq!(sniff_content_type(b"GIF89a"), None);
    assert_eq!(sniff_content_type(b"<svg xmlns"), None);
    assert_eq!(sniff_content_type(b"RIFF\x00\x00\x00\x00WAVE"), None);
    assert_eq!(sniff_content_type(b"RIFF"), None);
}

#[test]
fn validate_rejects_empty_and_oversized() {
    assert!(matches!(validate_avatar(&[]), Err(AvatarError::Empty)));

    let mut big = JPEG.to_vec();
    big.resize(MAX_AVATAR_BYTES + 1, 0);
    assert!(matches!(validate_avatar(&big), Err(AvatarError::TooLarge)));
}

#[test]
fn validate_accepts_exactly_the_limit() {
    let mut max = JPEG.to_vec();
    max.resize(MAX_AVATAR_BYTES, 0);
    assert_eq!(validate_avatar(&max).unwrap(), "image/jpeg");
}

#[test]
fn validate_rejects_unknown_bytes() {
    assert!(matches!(validate_avatar(b"hello world"), Err(AvatarError::UnsupportedType)));
}

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn avatar_upsert_replaces_previous_image() {
    use crate::services::accounts::tests_support::{integration_pool, seed_user};

    let pool = integration_pool().await;
    let user_id = seed_user(&pool, "avatar@universe.tn").await;
    assert!(get_avatar(&pool, user_id).await.unwrap().is_none());

    put_avatar(&pool, user_id, JPEG).await.unwrap();
    put_avatar(&pool, user_id, PNG).await.unwrap();
    let stored = get_avatar(&pool, user_id).await.unwrap().expect("avatar stored");
    assert_eq!(stored.content_type, "image/png");
    assert_eq!(stored.bytes, PNG);
}
