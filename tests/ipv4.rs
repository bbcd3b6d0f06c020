use core::net;

use ipv6_pres::ParseError;
use ipv6_pres::v4;

#[test]
fn should_parse_embedded_ipv4() {
    let inputs = [
        ("127.0.0.1", [127, 0, 0, 1]),
        ("0.0.0.0", [0, 0, 0, 0]),
        ("255.255.255.255", [255, 255, 255, 255]),
        ("192.0.2.1", [192, 0, 2, 1]),
    ];

    for (prefix, (text, expected)) in inputs.iter().enumerate() {
        let prefix = prefix as u8 + 96;
        println!("Parse '{text}'");
        let (octets, bits) = match v4::parse_embedded(text.as_bytes()) {
            Ok(result) => result,
            Err(error) => panic!("Should parse '{text}' but got error={error}"),
        };
        assert_eq!(octets, *expected);
        assert_eq!(bits, 128);

        let with_cidr = format!("{text}/{prefix}");
        println!("Parse '{with_cidr}'");
        let (octets, bits) = match v4::parse_embedded(with_cidr.as_bytes()) {
            Ok(result) => result,
            Err(error) => panic!("Should parse '{with_cidr}' but got error={error}"),
        };
        assert_eq!(octets, *expected);
        assert_eq!(bits, prefix);
    }
}

#[test]
fn should_parse_truncated_ipv4_with_prefix() {
    let inputs = [
        ("192.0.2/120", [192, 0, 2, 0], 120),
        ("192.0/112", [192, 0, 0, 0], 112),
        ("1.2.3.4/100", [1, 2, 3, 4], 100),
    ];

    for (text, expected, expected_bits) in inputs {
        println!("Parse '{text}'");
        let (octets, bits) = v4::parse_embedded(text.as_bytes()).expect("to parse");
        assert_eq!(octets, expected);
        assert_eq!(bits, expected_bits);
    }
}

#[test]
fn should_not_parse_embedded_ipv4() {
    let inputs = [
        ("", ParseError::Ipv4EmptyComponent),
        ("0.0.0", ParseError::Ipv4InvalidComponentSize(3)),
        ("127.0.0.1.5", ParseError::Ipv4InvalidComponentSize(5)),
        ("1..", ParseError::Ipv4EmptyComponent),
        (".1.1.1", ParseError::Ipv4EmptyComponent),
        ("1.1.1.", ParseError::Ipv4EmptyComponent),
        ("256.0.0.1", ParseError::Ipv4ComponentOverflow(256)),
        ("127.1.0.900", ParseError::Ipv4ComponentOverflow(900)),
        ("1", ParseError::Ipv4InvalidComponentSize(1)),
        ("1/96", ParseError::Ipv4InvalidComponentSize(1)),
        ("1.f.1.1", ParseError::Ipv4UnexpectedCharacter('f')),
        ("1.1.1.1:", ParseError::Ipv4UnexpectedCharacter(':')),
        ("01.1.1.1", ParseError::Ipv4LeadingZero),
        ("1.1.1.00", ParseError::Ipv4LeadingZero),
        ("1.1.1.1/129", ParseError::CidrPrefixOutOfRange(129)),
        ("1.1.1.1/", ParseError::InvalidCidr),
    ];

    for (text, expected_error) in inputs {
        println!("Parse '{text}'");
        let error = v4::parse_embedded(text.as_bytes()).expect_err("should fail");
        assert_eq!(error, expected_error);
    }
}

#[test]
fn should_parse_ipv6_with_embedded_ipv4() {
    let inputs = [
        ("::ffff:192.0.2.1", net::Ipv4Addr::new(192, 0, 2, 1).to_ipv6_mapped(), 128),
        ("::FFFF:192.0.2.1", net::Ipv4Addr::new(192, 0, 2, 1).to_ipv6_mapped(), 128),
        ("::192.0.2.1", net::Ipv4Addr::new(192, 0, 2, 1).to_ipv6_compatible(), 128),
        ("::0.0.0.2", net::Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 2), 128),
        ("::ffff:192.0.2/120", net::Ipv4Addr::new(192, 0, 2, 0).to_ipv6_mapped(), 120),
        ("::ffff:192.0/112", net::Ipv4Addr::new(192, 0, 0, 0).to_ipv6_mapped(), 112),
        ("::ffff:192.0.2.255/124", net::Ipv4Addr::new(192, 0, 2, 240).to_ipv6_mapped(), 124),
        ("64:ff9b::192.0.2.33", net::Ipv6Addr::new(0x64, 0xff9b, 0, 0, 0, 0, 0xc000, 0x0221), 128),
        ("1:2:3:4:5:6:1.2.3.4", net::Ipv6Addr::new(1, 2, 3, 4, 5, 6, 0x0102, 0x0304), 128),
    ];

    for (text, expected_addr, expected_bits) in inputs {
        println!("Parse '{text}'");
        let (addr, bits) = match ipv6_pres::parse(text.as_bytes()) {
            Ok(result) => result,
            Err(error) => panic!("Should parse '{text}' but got error={error}"),
        };
        assert_eq!(addr, expected_addr.octets());
        assert_eq!(bits, expected_bits);
    }
}

#[test]
fn should_not_parse_ipv6_with_invalid_ipv4() {
    let inputs = [
        ("::ffff:1.2.3.256", ParseError::Ipv4ComponentOverflow(256)),
        ("::01.2.3.4", ParseError::Ipv4LeadingZero),
        ("::1.2.3", ParseError::Ipv4InvalidComponentSize(3)),
        ("::1.2.3.4.5", ParseError::Ipv4InvalidComponentSize(5)),
        ("::1.a.3.4", ParseError::Ipv4UnexpectedCharacter('a')),
        ("::ffff:.1.2.3", ParseError::Ipv4EmptyComponent),
        ("1:2:3:4:5:6:7:1.2.3.4", ParseError::TooManyHextets),
    ];

    for (text, expected_error) in inputs {
        println!("Parse '{text}'");
        let error = ipv6_pres::parse(text.as_bytes()).expect_err("should fail");
        assert_eq!(error, expected_error);

        let mut dst = [0x55u8; 16];
        assert_eq!(ipv6_pres::pton(text.as_bytes(), &mut dst), 0);
        assert_eq!(dst, [0x55u8; 16]);
    }
}
