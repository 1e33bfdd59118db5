use server::config::ImagePersistence;

use crate::common::{DEFAULT_IMAGE_BYTES, TestApp};

const SHOES_HASH: &str = "ab8c0473395ba00807e93ce474c7fa875f27b8a63020c446f787dbe9ef0db3e2";

#[tokio::test]
async fn uploaded_image_is_served_by_its_address() {
    let app = TestApp::spawn().await;
    app.post_item("shoes", "fashion", "shoes.jpg", b"the shoes jpeg").await;

    let res = app.get(&format!("/image/{SHOES_HASH}.jpg")).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.bytes, b"the shoes jpeg");
}

#[tokio::test]
async fn missing_image_falls_back_to_default() {
    let app = TestApp::spawn().await;

    let res = app.get("/image/nope.jpg").await;
    assert_eq!(res.status, 200);
    assert_eq!(res.bytes, DEFAULT_IMAGE_BYTES);
}

#[tokio::test]
async fn non_jpg_name_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app.get("/image/photo.png").await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
    assert_eq!(res.body["message"], "Image path does not end with .jpg");
}

#[tokio::test]
async fn strict_mode_reports_oversized_image_as_server_error() {
    let app = TestApp::spawn_images(ImagePersistence::Strict, 16).await;

    let res = app
        .post_item("shoes", "fashion", "shoes.jpg", &[0u8; 100])
        .await;
    assert_eq!(res.status, 500);
    assert_eq!(res.body["code"], "INTERNAL_ERROR");

    // Metadata is written before the image, so the row survives the failure.
    let list = app.get("/items").await;
    assert_eq!(list.body["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn best_effort_mode_swallows_oversized_image() {
    let app = TestApp::spawn_images(ImagePersistence::BestEffort, 16).await;

    let res = app
        .post_item("shoes", "fashion", "shoes.jpg", &[0u8; 100])
        .await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["message"], "item received: shoes");

    // The blob never landed; fetching its address serves the default image.
    let image = app.get(&format!("/image/{SHOES_HASH}.jpg")).await;
    assert_eq!(image.status, 200);
    assert_eq!(image.bytes, DEFAULT_IMAGE_BYTES);
}

#[tokio::test]
async fn shoes_scenario_end_to_end() {
    let app = TestApp::spawn().await;

    let added = app.post_item("shoes", "fashion", "shoes.jpg", b"uploaded bytes").await;
    assert_eq!(added.body["message"], "item received: shoes");

    let list = app.get("/items").await;
    let items = list.body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["imageFileName"], format!("{SHOES_HASH}.jpg"));

    let image = app.get(&format!("/image/{SHOES_HASH}.jpg")).await;
    assert_eq!(image.bytes, b"uploaded bytes");

    let fallback = app.get("/image/nope.jpg").await;
    assert_eq!(fallback.bytes, DEFAULT_IMAGE_BYTES);
}
