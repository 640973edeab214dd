use std::io::Read;

use gix_bundle::{bstr::BString, Capability, Error, ErrorKind, Header, ObjectId, Prerequisite, Reference, Version};

const V2: &str = "# v2 git bundle
-abcdef0123456789abcdef0123456789abcdef01 comment
0123456789abcdef0123456789abcdef01234567 refs/heads/master
abcdef0123456789abcdef0123456789abcdef01 refs/heads/develop

";

const V3: &str = "# v3 git bundle
@simple
@complex=value
-abcdef0123456789abcdef0123456789abcdef01 comment
0123456789abcdef0123456789abcdef01234567 refs/heads/master
abcdef0123456789abcdef0123456789abcdef01 refs/heads/develop

";

fn sections(header: Header) -> Header {
    header
        .with_prerequisite(Prerequisite::new("abcdef0123456789abcdef0123456789abcdef01", "comment"))
        .with_reference(Reference::new(
            "0123456789abcdef0123456789abcdef01234567",
            "refs/heads/master",
        ))
        .with_reference(Reference::new(
            "abcdef0123456789abcdef0123456789abcdef01",
            "refs/heads/develop",
        ))
}

fn parse(input: &str) -> Result<Header, Error> {
    Header::from_bufread(input.as_bytes())
}

mod parse {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn v2() -> anyhow::Result<()> {
        let header = parse(V2)?;
        assert_eq!(header, sections(Header::new(Version::V2)));
        assert_eq!(header.to_string(), V2);
        Ok(())
    }

    #[test]
    fn v3() -> anyhow::Result<()> {
        let header = parse(V3)?;
        let expected = sections(
            Header::new(Version::V3)
                .with_capability(Capability::new("simple"))
                .with_capability(Capability::with_value("complex", "value")),
        );
        assert_eq!(header, expected);
        assert_eq!(header.to_string(), V3);
        assert_eq!(header.capabilities.get("complex"), Some(Some("value".into())));
        assert!(header.capabilities.has("simple"));
        Ok(())
    }

    #[test]
    fn empty() {
        let err = parse("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn not_a_bundle() {
        let err = parse("not a bundle\n").unwrap_err();
        assert_eq!(err.to_string(), r#"invalid bundle version: "not a bundle\n""#);
        assert_eq!(err.kind(), ErrorKind::Version);
    }

    #[test]
    fn unsupported_version() {
        let err = parse("# v1337 git bundle\n").unwrap_err();
        assert_eq!(err.to_string(), r#"unsupported bundle version: "1337""#);
        assert!(matches!(err, Error::UnsupportedVersion { .. }));
    }

    #[test]
    fn capability_after_prerequisite() {
        let input = "# v3 git bundle\n-abcdef0123456789abcdef0123456789abcdef01 comment\n@simple\n\n";
        let err = parse(input).unwrap_err();
        assert!(matches!(err, Error::CapabilitiesMustComeFirst));
        assert_eq!(err.to_string(), "capabilities must come first");
    }

    #[test]
    fn capability_in_v2() {
        let err = parse("# v2 git bundle\n@simple\n\n").unwrap_err();
        assert!(matches!(err, Error::CapabilitiesUnsupportedInV2));
    }

    #[test]
    fn prerequisite_after_reference() {
        let input = "# v2 git bundle\n0123456789abcdef0123456789abcdef01234567 refs/heads/master\n-abcdef0123456789abcdef0123456789abcdef01 comment\n\n";
        let err = parse(input).unwrap_err();
        assert!(matches!(err, Error::PrerequisitesMustComeFirst));
        assert_eq!(err.kind(), ErrorKind::Order);
    }

    #[test]
    fn duplicates_are_kept() -> anyhow::Result<()> {
        let input = "# v3 git bundle
@key=first
@key=second
0123456789abcdef0123456789abcdef01234567 refs/heads/main
abcdef0123456789abcdef0123456789abcdef01 refs/heads/main

";
        let header = parse(input)?;
        assert_eq!(header.capabilities.len(), 2);
        assert_eq!(header.capabilities.get("key"), Some(Some("first".into())));
        assert_eq!(header.references.len(), 2);
        assert_eq!(
            header.references.to_map()[&BString::from("refs/heads/main")],
            ObjectId::from("abcdef0123456789abcdef0123456789abcdef01")
        );
        assert_eq!(header.to_string(), input);
        Ok(())
    }

    #[test]
    fn non_utf8_bytes_survive() -> anyhow::Result<()> {
        let input = b"# v3 git bundle\n@blob=\x01\xff\n-abc \xc3\x28\nabc refs/heads/\xfe\n\n";
        let (header, pack) = Header::from_bytes(input)?;
        assert!(pack.is_empty());
        assert_eq!(header.to_bytes(), input);
        Ok(())
    }
}

mod fixtures {
    use pretty_assertions::assert_eq;

    use super::*;

    fn assert_round_trip(data: &[u8]) -> anyhow::Result<Header> {
        let mut read = data;
        let header = Header::from_bufread(&mut read)?;
        assert_eq!(header.header_len(), data.len() - read.len());
        assert_eq!(header.to_bytes(), &data[..header.header_len()]);

        let mut pack = Vec::new();
        read.read_to_end(&mut pack)?;
        assert!(pack.starts_with(b"PACK"), "the reader is positioned at the pack");
        Ok(header)
    }

    #[test]
    fn full_v2_created_by_git() -> anyhow::Result<()> {
        let header = assert_round_trip(include_bytes!("fixtures/full-v2.bundle"))?;
        assert_eq!(header.version, Version::V2);
        assert!(header.capabilities.is_empty());
        assert!(header.prerequisites.is_empty());

        let names: Vec<_> = header.references.iter().map(|r| r.name.to_string()).collect();
        assert_eq!(names, ["refs/heads/develop", "refs/heads/main", "refs/tags/v1", "HEAD"]);
        assert!(header
            .references
            .iter()
            .all(|r| r.object_id.is_valid() && r.object_id.to_object_id().is_some()));
        Ok(())
    }

    #[test]
    fn incremental_v3_created_by_git() -> anyhow::Result<()> {
        let header = assert_round_trip(include_bytes!("fixtures/incremental-v3.bundle"))?;
        assert_eq!(header.version, Version::V3);
        assert_eq!(header.capabilities.get("object-format"), Some(Some("sha1".into())));
        assert_eq!(
            header.prerequisites.as_slice(),
            [Prerequisite::new(
                "b4b3b98a2e66b636ae691f439350baf2c5e2f507",
                "first commit"
            )]
        );
        assert_eq!(
            header.references.as_slice(),
            [Reference::new(
                "b16ab8ddf233192fb30fc4061c6788840bc2ad66",
                "refs/heads/develop"
            )]
        );
        Ok(())
    }

    #[test]
    fn truncated_headers_fail_with_io_errors() {
        let data = include_bytes!("fixtures/incremental-v3.bundle");
        let header_len = Header::from_bytes(data).expect("valid").0.header_len();
        for len in 0..header_len {
            let err = Header::from_bytes(&data[..len]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Io, "truncated at {len}");
        }
    }
}

#[cfg(feature = "serde")]
mod serialization {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn header_survives_json() -> anyhow::Result<()> {
        let (header, _pack) = Header::from_bytes(include_bytes!("fixtures/incremental-v3.bundle"))?;
        let json = serde_json::to_string(&header)?;
        let back: Header = serde_json::from_str(&json)?;
        assert_eq!(back, header);
        assert_eq!(back.to_bytes(), header.to_bytes());
        Ok(())
    }

    #[test]
    fn non_utf8_fields_survive_json() -> anyhow::Result<()> {
        let input = b"# v3 git bundle\n@blob=\x01\xff\n@bare\n-abc \xc3\x28\nabc refs/heads/\xfe\n\n";
        let (header, _pack) = Header::from_bytes(input)?;
        let back: Header = serde_json::from_slice(&serde_json::to_vec(&header)?)?;
        assert_eq!(back.capabilities.get("bare"), Some(None));
        assert_eq!(back.to_bytes(), input);
        Ok(())
    }
}
