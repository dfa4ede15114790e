// src/loader.rs
use crate::core::types::GlossaryMap;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Host name that selects the site-root-relative glossary path.
const LOCAL_HOST: &str = "localhost";
/// Sub-path every non-local deployment serves the site under.
const DEPLOY_PREFIX: &str = "/docs-understanding-map";
/// Site-root-relative location of the glossary mapping.
const GLOSSARY_PATH: &str = "/assets/glossary.json";

/// Resolves the glossary URL path for the executing page's host: local
/// development serves from the site root, every other host serves under
/// the deployment sub-path. Deployments must keep this rule in sync with
/// where the glossary is actually published.
pub fn glossary_path(host: &str) -> String {
    if host == LOCAL_HOST {
        GLOSSARY_PATH.to_string()
    } else {
        format!("{DEPLOY_PREFIX}{GLOSSARY_PATH}")
    }
}

/// Parses a glossary mapping out of a reader of JSON bytes. The transport
/// that produced the bytes is the embedder's concern.
pub fn load_from_reader<R: Read>(reader: R) -> Result<GlossaryMap, Box<dyn Error>> {
    let glossary = serde_json::from_reader(reader)?;
    Ok(glossary)
}

/// Loads the glossary mapping from a JSON file on disk.
pub fn load_from_file(path: &Path) -> Result<GlossaryMap, Box<dyn Error>> {
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_host_uses_the_site_root_path() {
        assert_eq!(glossary_path("localhost"), "/assets/glossary.json");
    }

    #[test]
    fn other_hosts_get_the_deployment_prefix() {
        assert_eq!(
            glossary_path("example.github.io"),
            "/docs-understanding-map/assets/glossary.json"
        );
    }

    #[test]
    fn valid_json_parses_into_the_flat_mapping() {
        let json = br#"{"foo-bar": "**Foo** is *great*", "baz": "plain"}"#;
        let map = load_from_reader(&json[..]).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["foo-bar"], "**Foo** is *great*");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(load_from_reader(&b"not json"[..]).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file(Path::new("does/not/exist.json")).is_err());
    }
}
