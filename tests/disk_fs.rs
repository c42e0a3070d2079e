//! Disk-backed resolution tests against a temporary directory.

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::Response;

use spa_server::handler::{RequestContext, SpaHandler};
use spa_server::vfs::{DiskFs, FileHandle, FileSystem, FsError};

fn ctx(path: &str) -> RequestContext<'_> {
    RequestContext {
        path,
        query: None,
        fragment: None,
        is_head: false,
        if_none_match: None,
        if_modified_since: None,
        range_header: None,
    }
}

async fn body_of(response: Response<Full<Bytes>>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn test_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("site");
    std::fs::create_dir_all(root.join("assets")).unwrap();
    std::fs::write(root.join("index.html"), b"<html>entry</html>").unwrap();
    std::fs::write(root.join("assets/app.js"), b"console.log(1);").unwrap();
    // Bait file next to the root; lookups must never reach it
    std::fs::write(dir.path().join("outside.txt"), b"leaked").unwrap();
    dir
}

#[tokio::test]
async fn open_and_stat_regular_file() {
    let dir = test_tree();
    let fs = DiskFs::new(dir.path().join("site"));

    let mut file = fs.open("/assets/app.js").await.unwrap();
    let meta = file.stat().await.unwrap();
    assert!(meta.is_regular);
    assert_eq!(meta.name, "app.js");
    assert_eq!(meta.len, 15);
    assert!(meta.modified.is_some());
    assert_eq!(file.read_all().await.unwrap(), b"console.log(1);");
}

#[tokio::test]
async fn directories_are_not_regular() {
    let dir = test_tree();
    let fs = DiskFs::new(dir.path().join("site"));

    let file = fs.open("/assets").await.unwrap();
    let meta = file.stat().await.unwrap();
    assert!(!meta.is_regular);
}

#[tokio::test]
async fn missing_files_report_not_found() {
    let dir = test_tree();
    let fs = DiskFs::new(dir.path().join("site"));

    assert!(matches!(fs.open("/nope.css").await, Err(FsError::NotFound)));
}

#[tokio::test]
async fn traversal_cannot_escape_the_root() {
    let dir = test_tree();
    let fs = DiskFs::new(dir.path().join("site"));

    // Cleans to /outside.txt under the root, which does not exist; the
    // sibling file outside the root must stay unreachable.
    assert!(matches!(
        fs.open("/../outside.txt").await,
        Err(FsError::NotFound)
    ));
    assert!(matches!(
        fs.open("/assets/../../outside.txt").await,
        Err(FsError::NotFound)
    ));
}

#[tokio::test]
async fn serves_files_and_fallback_from_disk() {
    let dir = test_tree();
    let handler = SpaHandler::new(DiskFs::new(dir.path().join("site")));

    let resp = handler.handle(&ctx("/assets/app.js")).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(body_of(resp).await, "console.log(1);");

    let resp = handler.handle(&ctx("/deep/client/route")).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(body_of(resp).await, "<html>entry</html>");
}
