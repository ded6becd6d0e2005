//! Scenario-mode routing tests (no sockets involved).

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use imdsmock_core::reply::TOKEN_TTL_HEADER;
use imdsmock_core::{ImdsError, Method, Reply, ScenarioResponder};

fn responder(nic_count: usize) -> ScenarioResponder {
    ScenarioResponder::new("scenarios", "basic-boot", nic_count)
}

fn body_str(reply: &Reply) -> &str {
    std::str::from_utf8(&reply.body).unwrap()
}

#[test]
fn token_put_is_fixed() {
    let r = responder(1);
    let reply = r.respond(Method::Put, "/latest/api/token").unwrap();
    assert_eq!(reply.status, 200);
    assert_eq!(reply.content_type, "text/plain");
    assert_eq!(body_str(&reply), "mock-imds-token-12345");
    assert_eq!(reply.content_length(), reply.body.len());

    let (name, ttl) = &reply.extra_headers[0];
    assert_eq!(*name, TOKEN_TTL_HEADER);
    assert!(ttl.parse::<u32>().unwrap() > 0);
}

#[test]
fn put_anywhere_else_is_not_found() {
    let r = responder(1);
    let err = r.respond(Method::Put, "/latest/meta-data/instance-id").unwrap_err();
    assert!(matches!(err, ImdsError::NotFound));
}

#[test]
fn static_metadata_values() {
    let r = responder(1);
    for (key, want) in [
        ("instance-id", "i-test12345"),
        ("local-hostname", "test-host"),
        ("ami-id", "ami-test12345"),
        ("instance-type", "t3.micro"),
        ("placement/availability-zone", "us-east-1a"),
        ("placement/region", "us-east-1"),
    ] {
        let reply = r
            .respond(Method::Get, &format!("/latest/meta-data/{key}"))
            .unwrap();
        assert_eq!(body_str(&reply), want, "key {key}");
        assert_eq!(reply.content_type, "text/plain");
    }
}

#[test]
fn unknown_static_key_is_not_found() {
    let r = responder(1);
    let err = r.respond(Method::Get, "/latest/meta-data/no-such-key").unwrap_err();
    assert!(matches!(err, ImdsError::NotFound));
}

#[test]
fn paths_outside_meta_data_are_not_found() {
    let r = responder(1);
    for path in ["/", "/latest", "/latest/api/token", "/latest/dynamic/instance-identity"] {
        assert!(r.respond(Method::Get, path).is_err(), "path {path}");
    }
}

#[test]
fn mac_listing_shape_for_all_counts() {
    for n in 1..=4 {
        let r = responder(n);
        let reply = r
            .respond(Method::Get, "/latest/meta-data/network/interfaces/macs/")
            .unwrap();
        let body = body_str(&reply);
        assert!(!body.ends_with('\n'));

        let entries: Vec<&str> = body.split('\n').collect();
        assert_eq!(entries.len(), n);
        for (i, entry) in entries.iter().enumerate() {
            let mac = entry.strip_suffix('/').expect("entry must end with /");
            let dev = r
                .respond(Method::Get, &format!("/latest/meta-data/network/interfaces/macs/{mac}/device-number"))
                .unwrap();
            assert_eq!(body_str(&dev), i.to_string());
        }
    }
}

#[test]
fn mac_listing_accepts_missing_trailing_slash() {
    let r = responder(2);
    let with = r
        .respond(Method::Get, "/latest/meta-data/network/interfaces/macs/")
        .unwrap();
    let without = r
        .respond(Method::Get, "/latest/meta-data/network/interfaces/macs")
        .unwrap();
    assert_eq!(with.body, without.body);
}

#[test]
fn interface_attributes_follow_device_number() {
    let r = responder(3);
    for (i, mac) in r.macs().to_vec().iter().enumerate() {
        let base = format!("/latest/meta-data/network/interfaces/macs/{mac}");
        let get = |attr: &str| {
            let reply = r.respond(Method::Get, &format!("{base}/{attr}")).unwrap();
            body_str(&reply).to_owned()
        };
        assert_eq!(get("device-number"), i.to_string());
        assert_eq!(get("local-ipv4s"), format!("10.0.2.{}", 15 + i));
        assert_eq!(get("subnet-id"), format!("subnet-test{i}"));
        assert_eq!(get("vpc-id"), "vpc-test123");
    }
}

#[test]
fn second_nic_end_to_end_example() {
    let r = responder(2);
    assert_eq!(r.macs(), ["52:54:00:12:34:86", "52:54:00:12:34:87"]);
    let reply = r
        .respond(
            Method::Get,
            "/latest/meta-data/network/interfaces/macs/52:54:00:12:34:87/device-number",
        )
        .unwrap();
    assert_eq!(body_str(&reply), "1");
}

#[test]
fn unknown_mac_is_not_found_for_any_attr() {
    let r = responder(2);
    for attr in ["device-number", "local-ipv4s", "subnet-id", "vpc-id", "bogus"] {
        let err = r
            .respond(
                Method::Get,
                &format!("/latest/meta-data/network/interfaces/macs/aa:bb:cc:dd:ee:ff/{attr}"),
            )
            .unwrap_err();
        assert!(matches!(err, ImdsError::NotFound), "attr {attr}");
    }
}

#[test]
fn malformed_mac_paths_fall_through_to_not_found() {
    let r = responder(1);
    let mac = &r.macs()[0];
    for path in [
        format!("/latest/meta-data/network/interfaces/macs/{mac}"),
        format!("/latest/meta-data/network/interfaces/macs/{mac}/"),
        format!("/latest/meta-data/network/interfaces/macs/{mac}/nope"),
        format!("/latest/meta-data/network/interfaces/macs/{mac}/device-number/extra"),
        "/latest/meta-data/network/interfaces/macsX".to_owned(),
    ] {
        assert!(r.respond(Method::Get, &path).is_err(), "path {path}");
    }
}

#[test]
fn iam_role_listing_and_credentials() {
    let r = responder(1);

    for path in [
        "/latest/meta-data/iam/security-credentials",
        "/latest/meta-data/iam/security-credentials/",
    ] {
        let reply = r.respond(Method::Get, path).unwrap();
        assert_eq!(body_str(&reply), "test-instance-role");
        assert_eq!(reply.content_type, "text/plain");
    }

    let reply = r
        .respond(Method::Get, "/latest/meta-data/iam/security-credentials/test-instance-role")
        .unwrap();
    assert_eq!(reply.content_type, "application/json");

    let parsed: serde_json::Value = serde_json::from_slice(&reply.body).unwrap();
    let obj = parsed.as_object().unwrap();
    for field in [
        "Code",
        "LastUpdated",
        "Type",
        "AccessKeyId",
        "SecretAccessKey",
        "Token",
        "Expiration",
    ] {
        assert!(obj[field].is_string(), "field {field}");
    }
    assert_eq!(obj.len(), 7);
    assert_eq!(obj["Code"], "Success");
}

#[test]
fn unknown_role_is_not_found() {
    let r = responder(1);
    let err = r
        .respond(Method::Get, "/latest/meta-data/iam/security-credentials/other-role")
        .unwrap_err();
    assert!(matches!(err, ImdsError::NotFound));
}

#[test]
fn user_data_round_trips_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let scenario_dir = dir.path().join("multi-nic");
    fs::create_dir_all(&scenario_dir).unwrap();
    let content = b"#cloud-config\nhostname: test-host\n# \xf0\x9f\x90\x9a\n";
    fs::write(scenario_dir.join("user-data.yaml"), content).unwrap();

    let r = ScenarioResponder::new(dir.path(), "multi-nic", 1);
    let reply = r.respond(Method::Get, "/latest/user-data").unwrap();
    assert_eq!(&reply.body[..], content);
    assert_eq!(reply.content_type, "text/plain");
}

#[test]
fn user_data_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("empty-scenario")).unwrap();

    let r = ScenarioResponder::new(dir.path(), "empty-scenario", 1);
    let err = r.respond(Method::Get, "/latest/user-data").unwrap_err();
    assert!(matches!(err, ImdsError::NotFound));
}
