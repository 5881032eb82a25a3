// src/store/seed.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::fortune::Fortune;

pub const ENV_SEED_PATH: &str = "FORTUNE_SEED_PATH";

const DEFAULT_TOML: &str = "config/fortunes.toml";
const DEFAULT_JSON: &str = "config/fortunes.json";

/// Load fortunes from an explicit path. Supports TOML or JSON formats.
pub fn load_fortunes_from(path: &Path) -> Result<Vec<Fortune>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading fortunes from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_fortunes(&content, ext.as_str())
}

/// Load fortunes using env var + fallbacks:
/// 1) $FORTUNE_SEED_PATH
/// 2) config/fortunes.toml
/// 3) config/fortunes.json
///
/// With nothing found the table starts empty.
pub fn load_fortunes_default() -> Result<Vec<Fortune>> {
    if let Some(p) = crate::config::env_str(ENV_SEED_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_fortunes_from(&pb);
        }
        return Err(anyhow!("{ENV_SEED_PATH} points to non-existent path"));
    }
    for p in [DEFAULT_TOML, DEFAULT_JSON] {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_fortunes_from(&pb);
        }
    }
    tracing::info!(target: "store", "no fortune seed found, starting with an empty table");
    Ok(Vec::new())
}

fn parse_fortunes(s: &str, hint_ext: &str) -> Result<Vec<Fortune>> {
    let try_toml = hint_ext == "toml" || s.contains("[[fortunes]]");
    if try_toml {
        if let Ok(v) = parse_toml(s) {
            return Ok(v);
        }
    }
    if let Ok(v) = parse_json(s) {
        return Ok(v);
    }
    if !try_toml {
        if let Ok(v) = parse_toml(s) {
            return Ok(v);
        }
    }
    Err(anyhow!("unsupported fortune seed format"))
}

fn parse_toml(s: &str) -> Result<Vec<Fortune>> {
    #[derive(Deserialize)]
    struct TomlSeed {
        #[serde(default)]
        fortunes: Vec<Fortune>,
    }
    let v: TomlSeed = toml::from_str(s)?;
    Ok(clean(v.fortunes))
}

fn parse_json(s: &str) -> Result<Vec<Fortune>> {
    let v: Vec<Fortune> = serde_json::from_str(s)?;
    Ok(clean(v))
}

// trim names, drop blanks, last duplicate id wins, order by id
fn clean(items: Vec<Fortune>) -> Vec<Fortune> {
    let mut map = BTreeMap::new();
    for mut f in items {
        let name = f.name.trim();
        if name.is_empty() {
            continue;
        }
        f.name = name.to_string();
        map.insert(f.id, f);
    }
    map.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_and_json_are_cleaned() {
        let toml = r#"
[[fortunes]]
id = 1
name = "  Luck  "

[[fortunes]]
id = 0
name = ""

[[fortunes]]
id = 1
name = "More luck"
"#;
        let out = parse_fortunes(toml, "toml").unwrap();
        assert_eq!(out, vec![Fortune::new(1, "More luck")]);

        let json = r#"[{"id":3,"name":"c"},{"id":2,"name":" b "}]"#;
        let out = parse_fortunes(json, "json").unwrap();
        assert_eq!(out, vec![Fortune::new(2, "b"), Fortune::new(3, "c")]);
    }

    #[test]
    fn sniffs_format_without_extension() {
        let out = parse_fortunes("[[fortunes]]\nid = 4\nname = \"d\"\n", "").unwrap();
        assert_eq!(out, vec![Fortune::new(4, "d")]);
        assert!(parse_fortunes("not a seed", "").is_err());
    }
}
