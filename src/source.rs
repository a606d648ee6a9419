use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::{network, parser, quake::Quake};

/// Bundled feed used when nothing else is requested.
const SAMPLE_FEED: &str = include_str!("../assets/sample.geojson");

/// Where the quake list comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedSource {
    Sample,
    File(PathBuf),
    Url(String),
}

impl FeedSource {
    /// Picks a source from the `--file`/`--url` options; they cannot be combined.
    pub fn from_options(file: Option<PathBuf>, url: Option<String>) -> Result<Self> {
        match (file, url) {
            (Some(_), Some(_)) => bail!("--file and --url cannot be used together"),
            (Some(path), None) => Ok(FeedSource::File(path)),
            (None, Some(url)) => Ok(FeedSource::Url(url)),
            (None, None) => Ok(FeedSource::Sample),
        }
    }

    pub fn load(&self) -> Result<Vec<Quake>> {
        let quakes = match self {
            FeedSource::Sample => parser::extract_quakes(SAMPLE_FEED)?,
            FeedSource::File(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("unable to read {}", path.display()))?;
                parser::extract_quakes(&content)
                    .with_context(|| format!("malformed feed in {}", path.display()))?
            }
            FeedSource::Url(url) => {
                let client = network::make_new_client()?;
                let content = network::fetch_feed(&client, url)?;
                parser::extract_quakes(&content)
                    .with_context(|| format!("malformed feed from {}", url))?
            }
        };
        log::info!("loaded {} quakes from {:?}", quakes.len(), self);

        Ok(quakes)
    }
}

#[test]
fn test_from_options() {
    assert_eq!(FeedSource::from_options(None, None).unwrap(), FeedSource::Sample);
    assert_eq!(
        FeedSource::from_options(Some("a.json".into()), None).unwrap(),
        FeedSource::File("a.json".into())
    );
    assert!(FeedSource::from_options(Some("a.json".into()), Some("http://x".into())).is_err());
}

#[test]
fn test_load_sample() {
    let quakes = FeedSource::Sample.load().unwrap();
    assert_eq!(quakes.len(), 10);
    assert_eq!(
        quakes[0],
        Quake::new(7.2, "88km N of Yelizovo, Russia", 1454124312220)
    );
}

#[test]
fn test_load_file() {
    use std::io::Write;

    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(br#"{"features":[{"properties":{"mag":3.9,"place":"Tokyo","time":0}}]}"#)
        .unwrap();
    let quakes = FeedSource::File(f.path().to_path_buf()).load().unwrap();
    assert_eq!(quakes, vec![Quake::new(3.9, "Tokyo", 0)]);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = FeedSource::File(dir.path().join("missing.geojson"));
    assert!(missing.load().is_err());
}

#[test]
fn test_load_url() {
    let url = crate::network::serve_once(
        "200 OK",
        r#"{"features":[{"properties":{"mag":6.1,"place":"Pacific-Antarctic Ridge","time":1453777820750}}]}"#,
    );
    let quakes = FeedSource::Url(url).load().unwrap();
    assert_eq!(
        quakes,
        vec![Quake::new(6.1, "Pacific-Antarctic Ridge", 1453777820750)]
    );
}

#[test]
fn test_load_url_http_error() {
    let url = crate::network::serve_once("500 Internal Server Error", "oops");
    assert!(FeedSource::Url(url).load().is_err());
}
