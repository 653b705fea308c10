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

use s3_connector::s3::error::{Error, OperationKind, ValidationErr};
use s3_connector::s3::types::{MIN_PART_SIZE, MultipartSession};
use s3_connector_common::mock_transport::{response, xml_response};
use s3_connector_common::rand_src::rand_bytes;
use s3_connector_common::test_context::TestContext;
use s3_connector_common::utils::{header, temp_path};

const TOTAL: usize = 12_000_000;

const LENGTH_QUIRK: &str = "<Error><Code>IncompleteBody</Code>\
    <Message>You did not provide the number of bytes specified by the Content-Length HTTP header</Message>\
    <ArgumentName>Content-Length</ArgumentName><ArgumentValue>5242880, 5242880</ArgumentValue></Error>";

#[tokio::test]
async fn start_multipart_returns_upload_id() {
    let ctx = TestContext::new();
    ctx.respond(xml_response(
        200,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <InitiateMultipartUploadResult xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
         <Bucket>bucket</Bucket><Key>large.bin</Key>\
         <UploadId>VXBsb2FkIElEIGZvciA2aWWpbmcncyBteS1tb3ZpZS5tMnRzIHVwbG9hZA</UploadId>\
         </InitiateMultipartUploadResult>",
    ));

    let resp = ctx
        .connector
        .start_multipart("bucket", "large.bin")
        .content_type("application/x-binary")
        .send()
        .await
        .unwrap();
    assert_eq!(
        resp.upload_id,
        "VXBsb2FkIElEIGZvciA2aWWpbmcncyBteS1tb3ZpZS5tMnRzIHVwbG9hZA"
    );

    let req = &ctx.transport.requests()[0];
    assert_eq!(req.method, http::Method::POST);
    assert_eq!(req.url, "https://bucket.s3.us-east-1.amazonaws.com/large.bin?uploads");
    assert_eq!(header(&req.headers, "content-type"), Some("application/x-binary"));
}

#[tokio::test]
async fn start_multipart_without_upload_id() {
    let ctx = TestContext::new();
    ctx.respond(xml_response(
        200,
        "<InitiateMultipartUploadResult><Bucket>bucket</Bucket></InitiateMultipartUploadResult>",
    ));
    let err = ctx
        .connector
        .start_multipart("bucket", "k")
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidResponse(_))
    ));
}

#[tokio::test]
async fn upload_part_windows() {
    let ctx = TestContext::new();
    let data = rand_bytes(TOTAL, 42);
    ctx.respond(response(200, &[("etag", "\"p1\"")], ""))
        .respond(response(200, &[("etag", "\"p3\"")], ""));

    let first = ctx
        .connector
        .upload_multipart("bucket", "large.bin", "xyz", data.clone())
        .part_number(1)
        .chunk_size(MIN_PART_SIZE)
        .send()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.part_number, 1);
    assert_eq!(first.etag, "p1");
    assert_eq!(first.size, 5_242_880);

    let last = ctx
        .connector
        .upload_multipart("bucket", "large.bin", "xyz", data.clone())
        .part_number(3)
        .chunk_size(MIN_PART_SIZE)
        .send()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(last.part_number, 3);
    assert_eq!(last.size, 1_514_240);

    let requests = ctx.transport.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[1].url.ends_with("/large.bin?partNumber=3&uploadId=xyz"));
    assert_eq!(
        requests[1].body.as_deref(),
        Some(&data[10_485_760..])
    );
    assert_eq!(header(&requests[1].headers, "content-length"), Some("1514240"));
}

#[tokio::test]
async fn upload_part_past_the_end() {
    let ctx = TestContext::new();
    let resp = ctx
        .connector
        .upload_multipart("bucket", "large.bin", "xyz", rand_bytes(TOTAL, 1))
        .part_number(4)
        .chunk_size(MIN_PART_SIZE)
        .send()
        .await
        .unwrap();
    assert!(resp.is_none());
    assert!(ctx.transport.requests().is_empty());
}

#[tokio::test]
async fn upload_part_from_file() {
    let ctx = TestContext::new();
    let data = rand_bytes(TOTAL, 7);
    let path = temp_path("s3-connector-part");
    tokio::fs::write(&path, &data).await.unwrap();
    ctx.respond(response(200, &[("etag", "\"p2\"")], ""));

    let part = ctx
        .connector
        .upload_multipart("bucket", "large.bin", "xyz", path.as_path())
        .part_number(2)
        .chunk_size(MIN_PART_SIZE)
        .send()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(part.part_number, 2);
    assert_eq!(part.etag, "p2");
    assert_eq!(part.size, 5_242_880);

    let req = &ctx.transport.requests()[0];
    assert!(req.url.ends_with("/large.bin?partNumber=2&uploadId=xyz"));
    assert_eq!(req.body.as_deref(), Some(&data[5_242_880..10_485_760]));
    assert_eq!(header(&req.headers, "content-length"), Some("5242880"));
    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn upload_part_retries_comma_joined_content_length_once() {
    let ctx = TestContext::new();
    let data = rand_bytes(TOTAL, 3);
    ctx.respond(xml_response(400, LENGTH_QUIRK))
        .respond(response(200, &[("etag", "\"p1\"")], ""));

    let part = ctx
        .connector
        .upload_multipart("bucket", "large.bin", "xyz", data)
        .send()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(part.etag, "p1");

    let requests = ctx.transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(header(&requests[0].headers, "x-content-length-retry"), None);
    assert_eq!(header(&requests[1].headers, "x-content-length-retry"), Some("1"));
    assert_eq!(requests[1].url, requests[0].url);
    assert_eq!(requests[1].body, requests[0].body);
}

#[tokio::test]
async fn upload_part_gives_up_after_one_retry() {
    let ctx = TestContext::new();
    ctx.respond(xml_response(400, LENGTH_QUIRK))
        .respond(xml_response(400, LENGTH_QUIRK))
        .respond(response(200, &[("etag", "\"p1\"")], ""));

    let err = ctx
        .connector
        .upload_multipart("bucket", "large.bin", "xyz", rand_bytes(TOTAL, 3))
        .send()
        .await
        .unwrap_err();
    let op = err.as_operation().unwrap();
    assert_eq!(op.kind(), OperationKind::Put);
    assert_eq!(op.code(), Some("IncompleteBody"));
    assert_eq!(ctx.transport.requests().len(), 2);
    assert_eq!(ctx.transport.remaining(), 1);
}

#[tokio::test]
async fn upload_part_validation() {
    let ctx = TestContext::new();
    let err = ctx
        .connector
        .upload_multipart("bucket", "k", "xyz", rand_bytes(1024, 1))
        .chunk_size(1024)
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidPartSize(1024))
    ));

    let err = ctx
        .connector
        .upload_multipart("bucket", "k", "", rand_bytes(1024, 1))
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationErr::MissingUploadId)));
    assert!(ctx.transport.requests().is_empty());
}

#[tokio::test]
async fn finalize_sends_ordered_quoted_parts() {
    let ctx = TestContext::new();
    ctx.respond(xml_response(
        200,
        "<CompleteMultipartUploadResult>\
         <Location>https://bucket.s3.amazonaws.com/large.bin</Location>\
         <Bucket>bucket</Bucket><Key>large.bin</Key>\
         <ETag>\"3858f62230ac3c915f300c664312c11f-3\"</ETag>\
         </CompleteMultipartUploadResult>",
    ));

    let mut session = MultipartSession::new("xyz", MIN_PART_SIZE, TOTAL as u64).unwrap();
    session.record(3, "e3").unwrap();
    session.record(1, "\"e1\"").unwrap();
    session.record(2, "e2").unwrap();
    assert!(session.is_complete());
    let etags = session.parts().unwrap().into_iter().map(|p| p.etag).collect();

    let resp = ctx
        .connector
        .finalize_multipart("bucket", "large.bin", session.upload_id.as_str(), etags)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.etag.as_deref(), Some("3858f62230ac3c915f300c664312c11f-3"));
    assert_eq!(
        resp.location.as_deref(),
        Some("https://bucket.s3.amazonaws.com/large.bin")
    );

    let req = &ctx.transport.requests()[0];
    assert_eq!(req.method, http::Method::POST);
    assert!(req.url.ends_with("/large.bin?uploadId=xyz"));
    assert_eq!(header(&req.headers, "content-type"), Some("application/xml"));
    let body = String::from_utf8(req.body.clone().unwrap().to_vec()).unwrap();
    assert_eq!(
        body,
        "<CompleteMultipartUpload>\
         <Part><PartNumber>1</PartNumber><ETag>\"e1\"</ETag></Part>\
         <Part><PartNumber>2</PartNumber><ETag>\"e2\"</ETag></Part>\
         <Part><PartNumber>3</PartNumber><ETag>\"e3\"</ETag></Part>\
         </CompleteMultipartUpload>"
    );
}

#[tokio::test]
async fn finalize_error_inside_200() {
    let ctx = TestContext::new();
    ctx.respond(xml_response(
        200,
        "<Error><Code>InvalidPart</Code><Message>One or more of the specified parts could not be found.</Message></Error>",
    ));
    let err = ctx
        .connector
        .finalize_multipart("bucket", "k", "xyz", vec!["e1".into()])
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.as_operation().unwrap().code(), Some("InvalidPart"));
}

#[tokio::test]
async fn finalize_requires_parts() {
    let ctx = TestContext::new();
    let err = ctx
        .connector
        .finalize_multipart("bucket", "k", "xyz", vec![])
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationErr::EmptyParts(_))));
    assert!(ctx.transport.requests().is_empty());
}

#[tokio::test]
async fn abort_multipart() {
    let ctx = TestContext::new();
    ctx.respond(response(204, &[], ""));
    let resp = ctx
        .connector
        .abort_multipart("bucket", "large.bin", "xyz")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.upload_id, "xyz");

    let req = &ctx.transport.requests()[0];
    assert_eq!(req.method, http::Method::DELETE);
    assert!(req.url.ends_with("/large.bin?uploadId=xyz"));
}
