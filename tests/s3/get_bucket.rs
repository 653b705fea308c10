// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
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

use s3_connector::s3::error::OperationKind;
use s3_connector_common::mock_transport::xml_response;
use s3_connector_common::test_context::TestContext;

fn list_page(keys: &[&str], prefixes: &[&str], truncated: bool, next_marker: Option<&str>) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <ListBucketResult xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
         <Name>bucket</Name><Prefix></Prefix><MaxKeys>1000</MaxKeys>",
    );
    xml.push_str(&format!("<IsTruncated>{truncated}</IsTruncated>"));
    if let Some(marker) = next_marker {
        xml.push_str(&format!("<NextMarker>{marker}</NextMarker>"));
    }
    for key in keys {
        xml.push_str(&format!(
            "<Contents><Key>{key}</Key><LastModified>2009-10-12T17:50:30.000Z</LastModified>\
             <ETag>&quot;fba9dede5f27731c9771645a39863328&quot;</ETag><Size>434234</Size>\
             <StorageClass>STANDARD</StorageClass></Contents>"
        ));
    }
    for prefix in prefixes {
        xml.push_str(&format!("<CommonPrefixes><Prefix>{prefix}</Prefix></CommonPrefixes>"));
    }
    xml.push_str("</ListBucketResult>");
    xml
}

fn query_of(url: &str) -> &str {
    url.split_once('?').map(|(_, q)| q).unwrap_or("")
}

#[tokio::test]
async fn listing_follows_markers_across_pages() {
    let ctx = TestContext::new();
    ctx.respond(xml_response(200, &list_page(&["a", "b"], &[], true, None)))
        .respond(xml_response(200, &list_page(&["c", "d"], &[], true, Some("d"))))
        .respond(xml_response(200, &list_page(&["e"], &[], false, None)));

    let resp = ctx.connector.get_bucket("bucket").send().await.unwrap();
    assert_eq!(resp.pages, 3);
    assert!(!resp.is_truncated);
    let names: Vec<&str> = resp.entries.keys().map(String::as_str).collect();
    assert_eq!(names, ["a", "b", "c", "d", "e"]);

    let entry = &resp.entries["a"];
    assert_eq!(entry.size, Some(434_234));
    assert_eq!(entry.hash.as_deref(), Some("fba9dede5f27731c9771645a39863328"));
    assert_eq!(entry.storage_class.as_deref(), Some("STANDARD"));
    assert!(!entry.is_prefix);

    let requests = ctx.transport.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].url, "https://bucket.s3.us-east-1.amazonaws.com/");
    assert_eq!(query_of(&requests[1].url), "marker=b");
    assert_eq!(query_of(&requests[2].url), "marker=d");
}

#[tokio::test]
async fn listing_overlapping_pages_keeps_keys_unique() {
    let ctx = TestContext::new();
    ctx.respond(xml_response(200, &list_page(&["a", "b"], &[], true, None)))
        .respond(xml_response(200, &list_page(&["b", "c", "d"], &[], true, Some("d"))))
        .respond(xml_response(200, &list_page(&["d", "e"], &[], false, None)));

    let resp = ctx.connector.get_bucket("bucket").send().await.unwrap();
    assert_eq!(resp.pages, 3);
    let names: Vec<&str> = resp.entries.keys().map(String::as_str).collect();
    assert_eq!(names, ["a", "b", "c", "d", "e"]);

    let requests = ctx.transport.requests();
    assert_eq!(query_of(&requests[1].url), "marker=b");
    assert_eq!(query_of(&requests[2].url), "marker=d");
}

#[tokio::test]
async fn listing_stops_at_max_keys() {
    let ctx = TestContext::new();
    ctx.respond(xml_response(200, &list_page(&["a", "b"], &[], true, None)))
        .respond(xml_response(200, &list_page(&["c", "d", "e"], &[], true, None)))
        .respond(xml_response(200, &list_page(&["f"], &[], false, None)));

    let resp = ctx
        .connector
        .get_bucket("bucket")
        .prefix(Some("logs/".into()))
        .max_keys(Some(3))
        .send()
        .await
        .unwrap();
    let names: Vec<&str> = resp.entries.keys().map(String::as_str).collect();
    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!(resp.pages, 2);
    assert!(resp.is_truncated);

    let requests = ctx.transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(query_of(&requests[0].url), "max-keys=3&prefix=logs%2F");
    assert_eq!(query_of(&requests[1].url), "marker=b&max-keys=1&prefix=logs%2F");
    assert_eq!(ctx.transport.remaining(), 1);
}

#[tokio::test]
async fn listing_keeps_partial_result_when_continuation_fails() {
    let ctx = TestContext::new();
    ctx.respond(xml_response(200, &list_page(&["a", "b"], &[], true, None)))
        .respond(xml_response(
            503,
            "<Error><Code>SlowDown</Code><Message>Please reduce your request rate.</Message></Error>",
        ));

    let resp = ctx.connector.get_bucket("bucket").send().await.unwrap();
    assert_eq!(resp.entries.len(), 2);
    assert_eq!(resp.pages, 1);
    assert!(resp.is_truncated);
}

#[tokio::test]
async fn listing_fails_when_first_page_fails() {
    let ctx = TestContext::new();
    ctx.respond(xml_response(
        404,
        "<Error><Code>NoSuchBucket</Code><Message>The specified bucket does not exist</Message>\
         <BucketName>bucket</BucketName></Error>",
    ));

    let err = ctx.connector.get_bucket("bucket").send().await.unwrap_err();
    let op = err.as_operation().unwrap();
    assert_eq!(op.kind(), OperationKind::ListBucket);
    assert_eq!(op.code(), Some("NoSuchBucket"));
    assert_eq!(
        op.service_error().unwrap().bucket_name.as_deref(),
        Some("bucket")
    );
}

#[tokio::test]
async fn listing_with_common_prefixes() {
    let ctx = TestContext::new();
    ctx.respond(xml_response(
        200,
        &list_page(&["readme.txt"], &["photos/", "videos/"], false, None),
    ));

    let resp = ctx
        .connector
        .get_bucket("bucket")
        .delimiter(Some("/".into()))
        .include_common_prefixes(true)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.entries.len(), 3);
    assert!(resp.entries["photos/"].is_prefix);
    assert!(resp.entries["videos/"].size.is_none());
    assert!(!resp.entries["readme.txt"].is_prefix);
    assert_eq!(
        query_of(&ctx.transport.requests()[0].url),
        "delimiter=%2F"
    );
}

#[tokio::test]
async fn listing_without_prefixes_skips_them() {
    let ctx = TestContext::new();
    ctx.respond(xml_response(
        200,
        &list_page(&["readme.txt"], &["photos/"], false, None),
    ));
    let resp = ctx.connector.get_bucket("bucket").send().await.unwrap();
    assert_eq!(resp.entries.len(), 1);
}
