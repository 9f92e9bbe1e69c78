use super::{Interface, NetinfoError};

/// Parses the output of `ip addr` into interface records.
///
/// A line whose first token is `<digits>:` opens a new record; the token
/// after it is the interface name (trailing colon stripped). Every following
/// line until the next header belongs to that record and is scanned for
/// `link/<kind> <hwaddr>`, `inet <addr>` and `inet6 <addr>` token pairs.
/// Unrecognized tokens are ignored so unknown fields in newer tool versions
/// pass through harmlessly. Address tokens are stored verbatim, prefix
/// length included.
///
/// A continuation line before any header is an error rather than a record to
/// guess at.
pub fn parse_ip_output(text: &str) -> Result<Vec<Interface>, NetinfoError> {
    let mut interfaces: Vec<Interface> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            continue;
        };

        if is_header_token(first) {
            let name = tokens
                .next()
                .map(|t| t.trim_end_matches(':'))
                .filter(|n| !n.is_empty())
                .ok_or_else(|| NetinfoError::Parse {
                    line: idx + 1,
                    text: line.trim().to_string(),
                })?;
            interfaces.push(Interface::new(name));
            continue;
        }

        let Some(current) = interfaces.last_mut() else {
            return Err(NetinfoError::Parse {
                line: idx + 1,
                text: line.trim().to_string(),
            });
        };

        let mut token = Some(first);
        while let Some(t) = token {
            if let Some(kind) = t.strip_prefix("link/") {
                current.kind = kind.to_string();
                if let Some(hw) = tokens.next() {
                    current.hardware_address = hw.to_string();
                }
            } else if t == "inet" {
                if let Some(addr) = tokens.next() {
                    current.ipv4_addresses.push(addr.to_string());
                }
            } else if t == "inet6" {
                if let Some(addr) = tokens.next() {
                    current.ipv6_addresses.push(addr.to_string());
                }
            }
            token = tokens.next();
        }
    }

    Ok(interfaces)
}

fn is_header_token(token: &str) -> bool {
    match token.strip_suffix(':') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
1: lo: <LOOPBACK,UP,LOWER_UP> mtu 65536 qdisc noqueue state UNKNOWN
    link/loopback 00:00:00:00:00:00 brd 00:00:00:00:00:00
    inet 127.0.0.1/8 scope host lo
    inet6 ::1/128 scope host
2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP
    link/ether aa:bb:cc:dd:ee:ff brd ff:ff:ff:ff:ff:ff
    inet 10.0.0.5/24 brd 10.0.0.255 scope global dynamic eth0
    inet6 fe80::1/64 scope link
";

    #[test]
    fn one_interface_per_header_line_in_order() {
        let ifaces = parse_ip_output(SAMPLE).unwrap();
        assert_eq!(ifaces.len(), 2);
        assert_eq!(ifaces[0].name, "lo");
        assert_eq!(ifaces[1].name, "eth0");
    }

    #[test]
    fn fields_are_paired_with_their_keywords() {
        let ifaces = parse_ip_output(SAMPLE).unwrap();

        assert_eq!(ifaces[0].kind, "loopback");
        assert_eq!(ifaces[0].hardware_address, "00:00:00:00:00:00");
        assert_eq!(ifaces[0].ipv4_addresses, vec!["127.0.0.1/8"]);
        assert_eq!(ifaces[0].ipv6_addresses, vec!["::1/128"]);

        assert_eq!(ifaces[1].kind, "ether");
        assert_eq!(ifaces[1].hardware_address, "aa:bb:cc:dd:ee:ff");
        assert_eq!(ifaces[1].ipv4_addresses, vec!["10.0.0.5/24"]);
        assert_eq!(ifaces[1].ipv6_addresses, vec!["fe80::1/64"]);
    }

    #[test]
    fn addresses_keep_source_order() {
        let text = "\
3: br0: <UP> mtu 1500
    link/ether 11:22:33:44:55:66 brd ff:ff:ff:ff:ff:ff
    inet 192.168.0.1/24 scope global br0
    inet 10.8.0.1/16 scope global br0
    inet6 fd00::1/64 scope global
";
        let ifaces = parse_ip_output(text).unwrap();
        assert_eq!(
            ifaces[0].ipv4_addresses,
            vec!["192.168.0.1/24", "10.8.0.1/16"]
        );
        assert_eq!(ifaces[0].ipv6_addresses, vec!["fd00::1/64"]);
    }

    #[test]
    fn interface_index_beyond_nine_still_opens_a_record() {
        let text = "12: veth3a: <UP> mtu 1500\n    link/ether 00:11:22:33:44:55 brd ff:ff:ff:ff:ff:ff\n";
        let ifaces = parse_ip_output(text).unwrap();
        assert_eq!(ifaces[0].name, "veth3a");
        assert_eq!(ifaces[0].kind, "ether");
    }

    #[test]
    fn unrecognized_tokens_are_ignored() {
        let text = "\
1: lo: <LOOPBACK>
    link/loopback 00:00:00:00:00:00 brd 00:00:00:00:00:00 promiscuity 0
    altname enp0s31f6
";
        let ifaces = parse_ip_output(text).unwrap();
        assert_eq!(ifaces.len(), 1);
        assert_eq!(ifaces[0].kind, "loopback");
        assert!(ifaces[0].ipv4_addresses.is_empty());
    }

    #[test]
    fn empty_input_yields_no_interfaces() {
        assert!(parse_ip_output("").unwrap().is_empty());
        assert!(parse_ip_output("\n\n  \n").unwrap().is_empty());
    }

    #[test]
    fn continuation_before_any_header_is_a_parse_error() {
        let err = parse_ip_output("    inet 10.0.0.5/24 scope global\n").unwrap_err();
        match err {
            NetinfoError::Parse { line, .. } => assert_eq!(line, 1),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn header_without_a_name_is_a_parse_error() {
        assert!(matches!(
            parse_ip_output("1:\n").unwrap_err(),
            NetinfoError::Parse { line: 1, .. }
        ));
    }

    #[test]
    fn keyword_at_end_of_line_leaves_field_untouched() {
        let text = "1: lo: <LOOPBACK>\n    inet\n";
        let ifaces = parse_ip_output(text).unwrap();
        assert!(ifaces[0].ipv4_addresses.is_empty());
    }

    #[test]
    fn non_header_numeric_tokens_do_not_open_records() {
        let text = "1: lo: <LOOPBACK> mtu 65536\n    link/loopback 00:00:00:00:00:00 brd 00:00:00:00:00:00\n";
        let ifaces = parse_ip_output(text).unwrap();
        // "65536" carries no colon, "00:00:..." is not all digits.
        assert_eq!(ifaces.len(), 1);
    }
}
