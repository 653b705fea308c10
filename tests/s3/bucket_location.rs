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
use s3_connector_common::mock_transport::{response, xml_response};
use s3_connector_common::test_context::{ACCESS_KEY, SECRET_KEY, TestContext};
use s3_connector_common::utils::header;

#[tokio::test]
async fn location_is_signed_for_default_region() {
    let mut config = Configuration::new(ACCESS_KEY, SECRET_KEY).unwrap();
    config.set_region("eu-central-1").unwrap();
    let ctx = TestContext::with_config(config);
    ctx.respond(xml_response(
        200,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <LocationConstraint xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">EU</LocationConstraint>",
    ));

    let resp = ctx
        .connector
        .get_bucket_location("bucket")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.region, "eu-west-1");
    assert_eq!(resp.bucket, "bucket");

    let req = &ctx.transport.requests()[0];
    assert_eq!(req.url, "https://bucket.s3.us-east-1.amazonaws.com/?location");
    assert!(
        header(&req.headers, "authorization")
            .unwrap()
            .contains("/us-east-1/s3/aws4_request")
    );
    assert_eq!(ctx.connector.config().region(), "eu-central-1");
}

#[tokio::test]
async fn location_empty_constraint() {
    let ctx = TestContext::new();
    ctx.respond(xml_response(
        200,
        "<LocationConstraint xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\"/>",
    ))
    .respond(response(200, &[], ""));

    let resp = ctx.connector.get_bucket_location("b1").send().await.unwrap();
    assert_eq!(resp.region, "us-east-1");
    let resp = ctx.connector.get_bucket_location("b2").send().await.unwrap();
    assert_eq!(resp.region, "us-east-1");
}

#[tokio::test]
async fn location_passes_other_regions_through() {
    let ctx = TestContext::new();
    ctx.respond(xml_response(
        200,
        "<LocationConstraint>ap-southeast-2</LocationConstraint>",
    ));
    let resp = ctx.connector.get_bucket_location("b").send().await.unwrap();
    assert_eq!(resp.region, "ap-southeast-2");
}
