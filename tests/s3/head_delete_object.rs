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
use s3_connector_common::mock_transport::{response, xml_response};
use s3_connector_common::test_context::TestContext;

#[tokio::test]
async fn head_object_metadata() {
    let ctx = TestContext::new();
    ctx.respond(response(
        200,
        &[
            ("content-length", "1024"),
            ("content-type", "image/png"),
            ("etag", "\"d41d8cd98f00b204e9800998ecf8427e\""),
            ("last-modified", "Fri, 24 May 2013 00:00:00 GMT"),
            ("x-amz-meta-color", "red"),
            ("x-amz-meta-width", "640"),
        ],
        "",
    ));

    let resp = ctx
        .connector
        .head_object("bucket", "image.png")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.size, Some(1024));
    assert_eq!(resp.content_type.as_deref(), Some("image/png"));
    assert_eq!(resp.etag.as_deref(), Some("d41d8cd98f00b204e9800998ecf8427e"));
    assert_eq!(resp.timestamps.get("last-modified"), Some(&1_369_353_600));
    assert_eq!(resp.user_metadata.get("color").map(String::as_str), Some("red"));
    assert_eq!(resp.user_metadata.get("width").map(String::as_str), Some("640"));

    let req = &ctx.transport.requests()[0];
    assert_eq!(req.method, http::Method::HEAD);
    assert!(req.discard_body);
}

#[tokio::test]
async fn delete_object_accepts_204_and_200() {
    let ctx = TestContext::new();
    ctx.respond(response(204, &[], "")).respond(response(200, &[], ""));

    let first = ctx.connector.delete_object("bucket", "k").send().await.unwrap();
    assert_eq!(first.status, 204);
    let second = ctx.connector.delete_object("bucket", "k").send().await.unwrap();
    assert_eq!(second.status, 200);

    let requests = ctx.transport.requests();
    assert!(requests.iter().all(|r| r.method == http::Method::DELETE));
}

#[tokio::test]
async fn delete_object_failure() {
    let ctx = TestContext::new();
    ctx.respond(xml_response(
        403,
        "<Error><Code>AccessDenied</Code><Message>Access Denied</Message></Error>",
    ));

    let err = ctx
        .connector
        .delete_object("bucket", "k")
        .send()
        .await
        .unwrap_err();
    let op = err.as_operation().unwrap();
    assert_eq!(op.kind(), OperationKind::Delete);
    assert_eq!(op.code(), Some("AccessDenied"));
    assert_eq!(op.message(), Some("Access Denied"));
}

#[tokio::test]
async fn delete_object_unexpected_status_without_body() {
    let ctx = TestContext::new();
    ctx.respond(response(301, &[], ""));

    let err = ctx
        .connector
        .delete_object("bucket", "k")
        .send()
        .await
        .unwrap_err();
    let op = err.as_operation().unwrap();
    assert_eq!(op.status(), 301);
    assert!(op.service_error().is_none());
    assert!(err.to_string().contains("unexpected HTTP status 301"));
}
