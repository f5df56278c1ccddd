//! Unsolved puzzle-wallet directory fetched from the public export.

use anyhow::{anyhow, Result};

/// CSV export of the currently unsolved puzzle transactions.
pub const PUZZLE_SOURCE: &str =
    "https://privatekeys.pw/puzzles/bitcoin-puzzle-tx/export?status=unsolved";

/// One unsolved puzzle wallet, fields kept verbatim from the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Key size in bits, which is also the wallet number
    pub bits: String,
    /// Lower bound of the key range, hex
    pub range_min: String,
    /// Upper bound of the key range, hex
    pub range_max: String,
    /// Funded P2PKH address
    pub address: String,
    /// Current balance in BTC
    pub btc_value: String,
    /// hash160 of the compressed public key, when known
    pub hash160: String,
}

/// Download and parse the unsolved puzzle list.
pub async fn fetch() -> Result<Vec<Puzzle>> {
    let body = reqwest::get(PUZZLE_SOURCE)
        .await?
        .error_for_status()?
        .text()
        .await?;

    parse_export(&body)
}

/// Synchronous wrapper around [`fetch`] for CLI use.
pub fn fetch_blocking() -> Result<Vec<Puzzle>> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(fetch())
}

/// Parse the CSV export. Columns are located by header name, so their
/// order in the file does not matter.
pub fn parse_export(body: &str) -> Result<Vec<Puzzle>> {
    let mut lines = body.lines();
    let header = lines.next().ok_or_else(|| anyhow!("empty puzzle export"))?;
    let columns: Vec<&str> = header.split(',').map(clean_field).collect();

    let bits = column_index(&columns, "bits")?;
    let range_min = column_index(&columns, "range_min")?;
    let range_max = column_index(&columns, "range_max")?;
    let address = column_index(&columns, "address")?;
    let btc_value = column_index(&columns, "btc_value")?;
    let hash160 = column_index(&columns, "hash160_compressed")?;

    let needed = 1 + [bits, range_min, range_max, address, btc_value, hash160]
        .into_iter()
        .max()
        .unwrap_or(0);

    let mut puzzles = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(clean_field).collect();
        if fields.len() < needed {
            return Err(anyhow!("malformed puzzle row: {}", line));
        }

        puzzles.push(Puzzle {
            bits: fields[bits].to_string(),
            range_min: fields[range_min].to_string(),
            range_max: fields[range_max].to_string(),
            address: fields[address].to_string(),
            btc_value: fields[btc_value].to_string(),
            hash160: fields[hash160].to_string(),
        });
    }

    Ok(puzzles)
}

fn clean_field(field: &str) -> &str {
    field.trim().trim_matches('"')
}

fn column_index(columns: &[&str], name: &str) -> Result<usize> {
    columns
        .iter()
        .position(|c| *c == name)
        .ok_or_else(|| anyhow!("puzzle export is missing the {} column", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
bits,range_min,range_max,address,btc_value,hash160_compressed
66,20000000000000000,3ffffffffffffffff,13zb1hQbWVsc2S7ZTZnP2G4undNNpdh5so,6.60018158,20d45a6a762535700ce9e0b216e31994335db8a5
71,400000000000000000,7fffffffffffffffff,1PWo3JeB9jrGwfHDNpdGK54CRas7fsVzXU,7.10006007,f6f5431d25bbf7b12e8add9af5e3475c44a0a5b8
";

    #[test]
    fn test_parse_export() {
        let puzzles = parse_export(SAMPLE).unwrap();

        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles[0].bits, "66");
        assert_eq!(puzzles[0].range_min, "20000000000000000");
        assert_eq!(puzzles[0].address, "13zb1hQbWVsc2S7ZTZnP2G4undNNpdh5so");
        assert_eq!(puzzles[1].btc_value, "7.10006007");
        assert_eq!(
            puzzles[1].hash160,
            "f6f5431d25bbf7b12e8add9af5e3475c44a0a5b8"
        );
    }

    #[test]
    fn test_parse_export_reordered_columns() {
        let body = "\
address,bits,hash160_compressed,range_min,range_max,btc_value
13zb1hQbWVsc2S7ZTZnP2G4undNNpdh5so,66,20d45a6a762535700ce9e0b216e31994335db8a5,20000000000000000,3ffffffffffffffff,6.60018158
";
        let puzzles = parse_export(body).unwrap();

        assert_eq!(puzzles.len(), 1);
        assert_eq!(puzzles[0].bits, "66");
        assert_eq!(puzzles[0].range_max, "3ffffffffffffffff");
    }

    #[test]
    fn test_parse_export_crlf_and_blank_lines() {
        let body = "bits,range_min,range_max,address,btc_value,hash160_compressed\r\n\
                    66,2,3,addr,6.6,hash\r\n\
                    \r\n";
        let puzzles = parse_export(body).unwrap();

        assert_eq!(puzzles.len(), 1);
        assert_eq!(puzzles[0].range_max, "3");
    }

    #[test]
    fn test_parse_export_quoted_fields() {
        let body = "\
bits,range_min,range_max,address,btc_value,hash160_compressed
\"66\",\"2\",\"3\",\"13zb1hQbWVsc2S7ZTZnP2G4undNNpdh5so\",\"6.6\",\"hash\"
";
        let puzzles = parse_export(body).unwrap();

        assert_eq!(puzzles.len(), 1);
        assert_eq!(puzzles[0].bits, "66");
        assert_eq!(puzzles[0].address, "13zb1hQbWVsc2S7ZTZnP2G4undNNpdh5so");
    }

    #[test]
    fn test_parse_export_rejects_missing_column() {
        let body = "bits,range_min,range_max,address,btc_value\n66,2,3,addr,6.6\n";
        let err = parse_export(body).unwrap_err();

        assert!(err.to_string().contains("hash160_compressed"));
    }

    #[test]
    fn test_parse_export_rejects_short_row() {
        let body = "bits,range_min,range_max,address,btc_value,hash160_compressed\n66,2,3\n";
        let err = parse_export(body).unwrap_err();

        assert!(err.to_string().contains("malformed puzzle row"));
    }

    #[test]
    fn test_parse_export_empty_body() {
        assert!(parse_export("").unwrap_err().to_string().contains("empty"));
        assert_eq!(
            parse_export("bits,range_min,range_max,address,btc_value,hash160_compressed\n")
                .unwrap(),
            Vec::<Puzzle>::new()
        );
    }
}
