use crate::common::TestApp;

const SHOES_HASH: &str = "ab8c0473395ba00807e93ce474c7fa875f27b8a63020c446f787dbe9ef0db3e2";

#[tokio::test]
async fn root_says_hello() {
    let app = TestApp::spawn().await;

    let res = app.get("/").await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["message"], "Hello, world!");
}

#[tokio::test]
async fn add_item_returns_received_message() {
    let app = TestApp::spawn().await;

    let res = app.post_item("shoes", "fashion", "shoes.jpg", b"jpeg bytes").await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["message"], "item received: shoes");
}

#[tokio::test]
async fn add_then_list_shows_addressed_image_name() {
    let app = TestApp::spawn().await;
    app.post_item("shoes", "fashion", "shoes.jpg", b"jpeg bytes").await;

    let res = app.get("/items").await;
    assert_eq!(res.status, 200);

    let items = res.body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "shoes");
    assert_eq!(items[0]["category"], "fashion");
    assert_eq!(items[0]["imageFileName"], format!("{SHOES_HASH}.jpg"));
}

#[tokio::test]
async fn add_rejects_non_jpg_extension() {
    let app = TestApp::spawn().await;

    let res = app.post_item("shoes", "fashion", "shoes.png", b"png bytes").await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");

    // Catalog is unchanged.
    let list = app.get("/items").await;
    assert_eq!(list.body["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn add_rejects_missing_image_field() {
    let app = TestApp::spawn().await;

    let form = reqwest::multipart::Form::new()
        .text("name", "shoes")
        .text("category", "fashion");
    let res = app
        .client
        .post(format!("http://{}/items", app.addr))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 400);
}

#[tokio::test]
async fn get_item_by_primary_key() {
    let app = TestApp::spawn().await;
    app.post_item("shoes", "fashion", "shoes.jpg", b"jpeg bytes").await;
    app.post_item("hat", "fashion", "hat.jpg", b"jpeg bytes").await;

    // SQLite ids start at 1.
    let res = app.get("/items/2").await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["name"], "hat");
    assert_eq!(res.body["id"], 2);
}

#[tokio::test]
async fn get_unknown_item_is_404() {
    let app = TestApp::spawn().await;

    let res = app.get("/items/42").await;
    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn flat_file_backend_uses_positional_ids() {
    let app = TestApp::spawn_flat_file().await;
    app.post_item("shoes", "fashion", "shoes.jpg", b"jpeg bytes").await;
    app.post_item("hat", "fashion", "hat.jpg", b"jpeg bytes").await;

    let res = app.get("/items/0").await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["name"], "shoes");

    let list = app.get("/items").await;
    let items = list.body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 0);
    assert_eq!(items[1]["id"], 1);
}

#[tokio::test]
async fn flat_file_empty_catalog_lists_empty() {
    let app = TestApp::spawn_flat_file().await;

    let res = app.get("/items").await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["items"].as_array().unwrap().len(), 0);
}
