use super::types::CommitRecord;

/// Parse raw git log output into a Vec<CommitRecord>.
///
/// Expected format uses NUL (\x00) delimited fields and a record separator
/// (\x1e) between records:
///   `%H%x00%P%x00%an%x00%ae%x00%ad%x00%at%x00%s%x00%d%x1e`
///
/// Fields in order:
///   0: %H  - full commit hash
///   1: %P  - parent hashes (space-separated)
///   2: %an - author name
///   3: %ae - author email
///   4: %ad - author date (display-formatted)
///   5: %at - author date (unix epoch)
///   6: %s  - subject
///   7: %d  - ref decoration (may be absent on old format strings)
///
/// Records with fewer than 7 fields or an empty hash are dropped rather than
/// forwarded as partially populated commits; the layout engine assumes every
/// record it sees is fully valid.
pub fn parse_log(raw: &[u8]) -> Vec<CommitRecord> {
    let input = match std::str::from_utf8(raw) {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    let mut records = Vec::new();

    for record in input.split('\x1e') {
        let record = record.trim();
        if record.is_empty() {
            continue;
        }

        let fields: Vec<&str> = record.split('\x00').collect();
        if fields.len() < 7 {
            // Malformed record (corrupt format string or truncated output)
            continue;
        }

        let hash = fields[0].trim().to_string();
        if hash.is_empty() {
            continue;
        }

        let parent_hashes: Vec<String> = fields[1]
            .split_whitespace()
            .map(|s| s.to_string())
            .collect();

        let timestamp: u64 = fields[5].trim().parse().unwrap_or(0);

        let ref_names = if fields.len() > 7 {
            fields[7].trim().to_string()
        } else {
            String::new()
        };

        records.push(CommitRecord {
            hash,
            parent_hashes,
            author: fields[2].to_string(),
            email: fields[3].to_string(),
            date: fields[4].to_string(),
            timestamp,
            message: fields[6].to_string(),
            ref_names,
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_empty() {
        assert!(parse_log(b"").is_empty());
    }

    #[test]
    fn test_parse_log_single_record() {
        let raw = b"abc123\x00def456 ghi789\x00Alice\x00alice@example.com\x00Tue Nov 14 2023\x001700000000\x00Merge branch 'dev'\x00 (HEAD -> main)\x1e";
        let records = parse_log(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].hash, "abc123");
        assert_eq!(records[0].parent_hashes, vec!["def456", "ghi789"]);
        assert_eq!(records[0].author, "Alice");
        assert_eq!(records[0].email, "alice@example.com");
        assert_eq!(records[0].timestamp, 1700000000);
        assert_eq!(records[0].message, "Merge branch 'dev'");
        assert_eq!(records[0].ref_names, "(HEAD -> main)");
    }

    #[test]
    fn test_parse_log_root_commit_has_no_parents() {
        let raw = b"abc123\x00\x00Alice\x00a@e.com\x00date\x001700000000\x00Initial commit\x00\x1e";
        let records = parse_log(raw);
        assert_eq!(records.len(), 1);
        assert!(records[0].parent_hashes.is_empty());
    }

    #[test]
    fn test_parse_log_drops_malformed_records() {
        // Second record is truncated to 3 fields, third has an empty hash.
        let raw = b"abc\x00\x00Alice\x00a@e.com\x00date\x001\x00First\x00\x1ebroken\x00x\x00y\x1e\x00\x00Bob\x00b@e.com\x00date\x002\x00Ghost\x00\x1e";
        let records = parse_log(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].hash, "abc");
    }

    #[test]
    fn test_parse_log_missing_decoration_field() {
        // Only 7 fields: format string without %d.
        let raw = b"abc\x00\x00Alice\x00a@e.com\x00date\x001\x00Subject\x1e";
        let records = parse_log(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ref_names, "");
    }

    #[test]
    fn test_parse_log_invalid_utf8() {
        assert!(parse_log(&[0xff, 0xfe, 0x00]).is_empty());
    }
}
