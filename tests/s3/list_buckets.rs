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

use s3_connector::s3::Configuration;
use s3_connector::s3::error::OperationKind;
use s3_connector_common::mock_transport::xml_response;
use s3_connector_common::test_context::{ACCESS_KEY, SECRET_KEY, TestContext};
use s3_connector_common::utils::header;

const LIST_ALL_MY_BUCKETS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListAllMyBucketsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Owner>
    <ID>bcaf1ffd86f461ca5fb16fd081034f</ID>
    <DisplayName>webfile</DisplayName>
  </Owner>
  <Buckets>
    <Bucket>
      <Name>quotes</Name>
      <CreationDate>2006-02-03T16:45:09.000Z</CreationDate>
    </Bucket>
    <Bucket>
      <Name>samples</Name>
      <CreationDate>2006-02-03T16:41:58.000Z</CreationDate>
    </Bucket>
  </Buckets>
</ListAllMyBucketsResult>"#;

#[tokio::test]
async fn list_buckets() {
    let mut config = Configuration::new(ACCESS_KEY, SECRET_KEY).unwrap();
    config.set_region("ap-northeast-1").unwrap();
    let ctx = TestContext::with_config(config);
    ctx.respond(xml_response(200, LIST_ALL_MY_BUCKETS));

    let resp = ctx.connector.list_buckets().send().await.unwrap();
    assert_eq!(resp.owner.id, "bcaf1ffd86f461ca5fb16fd081034f");
    assert_eq!(resp.owner.display_name, "webfile");
    let names: Vec<&str> = resp.buckets.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["quotes", "samples"]);
    assert_eq!(
        resp.buckets[0].creation_date.map(|d| d.timestamp()),
        Some(1_138_985_109)
    );

    let req = &ctx.transport.requests()[0];
    assert_eq!(req.url, "https://s3.amazonaws.com/");
    let auth = header(&req.headers, "authorization").unwrap();
    assert!(auth.contains("/us-east-1/s3/aws4_request"), "{auth}");
}

#[tokio::test]
async fn list_buckets_denied() {
    let ctx = TestContext::new();
    ctx.respond(xml_response(
        403,
        "<Error><Code>InvalidAccessKeyId</Code>\
         <Message>The AWS Access Key Id you provided does not exist in our records.</Message></Error>",
    ));
    let err = ctx.connector.list_buckets().send().await.unwrap_err();
    let op = err.as_operation().unwrap();
    assert_eq!(op.kind(), OperationKind::ListBuckets);
    assert_eq!(op.code(), Some("InvalidAccessKeyId"));
}
