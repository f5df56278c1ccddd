//! Text and JSON rendering of classification results for the CLI.

use crate::classify::{Analysis, Representations};
use crate::error::KeyError;

/// Representation rows in their fixed display order.
fn rows(analysis: &Analysis) -> Vec<(&'static str, &str)> {
    match &analysis.representations {
        Representations::Key(key) => vec![
            ("private_key_hex", key.private_key_hex.as_str()),
            ("public_key_compressed", key.public_key_compressed.as_str()),
            ("public_key_uncompressed", key.public_key_uncompressed.as_str()),
            ("wif_compressed", key.wif_compressed.as_str()),
            ("wif_uncompressed", key.wif_uncompressed.as_str()),
            ("address_p2pkh_compressed", key.address_p2pkh_compressed.as_str()),
            ("address_p2pkh_uncompressed", key.address_p2pkh_uncompressed.as_str()),
        ],
        Representations::Pubkey(pubkey) => vec![
            ("public_key", pubkey.public_key.as_str()),
            ("hash160", pubkey.hash160.as_str()),
            ("address_p2pkh", pubkey.address_p2pkh.as_str()),
        ],
    }
}

pub fn format_analysis(analysis: &Analysis) -> String {
    let mut output = String::new();

    output.push_str(&format!("Format: {}\n", analysis.format.tag()));
    output.push_str(&format!("Input:  {}\n", analysis.input));
    output.push_str("---\n");

    for (name, value) in rows(analysis) {
        output.push_str(&format!("  {}: {}\n", name, value));
    }

    output
}

pub fn format_analysis_json(analysis: &Analysis) -> String {
    let fields: Vec<String> = rows(analysis)
        .iter()
        .map(|(name, value)| format!("    \"{}\": \"{}\"", name, escape_json(value)))
        .collect();

    format!(
        r#"{{
  "format": "{}",
  "input": "{}",
  "representations": {{
{}
  }}
}}"#,
        analysis.format.tag(),
        escape_json(&analysis.input),
        fields.join(",\n")
    )
}

pub fn format_error(error: &KeyError) -> String {
    format!("Unrecognized: {}\n", error)
}

pub fn format_error_json(error: &KeyError) -> String {
    format!(
        r#"{{
  "format": "unrecognized",
  "errors": ["{}"]
}}"#,
        escape_json(&error.to_string())
    )
}

fn escape_json(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
