//! The stages of a run: read, extract, group, build, write.

use crate::error::{ErrorKind, Result, raise_with};
use exn::ResultExt;
use folio_config::Config;
use folio_extract::{Extraction, Extractor};
use folio_manifest::error::ErrorKind as ManifestErrorKind;
use folio_manifest::{Grouping, Manifest, Written, group_by_day, write_manifest};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Reads the whole snapshot into memory.
#[instrument]
pub fn read_input(input: &Path) -> Result<Vec<u8>> {
    if !input.exists() {
        exn::bail!(ErrorKind::InputNotFound(input.to_path_buf()));
    }
    fs::read(input).or_raise(|| ErrorKind::ReadInput(input.to_path_buf()))
}

#[derive(Debug)]
pub struct Pipeline {
    extractor: Extractor,
    user_id: String,
    base_url: String,
    output_dir: PathBuf,
}
impl Pipeline {
    pub fn new(config: &Config) -> Result<Self> {
        let extractor =
            Extractor::with_label_selector(&config.label_selector).map_err(|e| raise_with(e, ErrorKind::Config))?;
        Ok(Self {
            extractor,
            user_id: config.user_id.clone(),
            base_url: config.base_url.clone(),
            output_dir: config.output_dir.clone(),
        })
    }

    pub fn extract(&self, markup: &[u8]) -> Result<Extraction> {
        self.extractor.extract_bytes(markup).or_raise(|| ErrorKind::NoFilenames)
    }

    pub fn group(&self, extraction: &Extraction) -> Result<Grouping> {
        let grouping = group_by_day(&extraction.filenames);
        if grouping.is_empty() {
            exn::bail!(ErrorKind::NoDateInfo);
        }
        Ok(grouping)
    }

    pub fn build(&self, grouping: Grouping) -> Result<Manifest> {
        Manifest::build(grouping, &self.user_id, &self.base_url).map_err(|err| {
            match matches!(&*err, ManifestErrorKind::MissingYearMonth) {
                true => err.raise(ErrorKind::MissingYearMonth),
                false => raise_with(err, ErrorKind::Config),
            }
        })
    }

    pub fn write(&self, manifest: &Manifest) -> Result<Written> {
        write_manifest(manifest, &self.output_dir).map_err(|e| raise_with(e, ErrorKind::Write))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_extract::YearMonth;
    use folio_manifest::WriteOutcome;
    use std::fs;
    use tempfile::TempDir;

    fn tree(filenames: &[&str]) -> String {
        let items: String = filenames
            .iter()
            .map(|name| {
                format!(
                    r#"<li role="treeitem"><div><span class="PRIVATE_TreeView-item-content-text"><span>{name}</span></span></div></li>"#
                )
            })
            .collect();
        format!(r#"<li role="treeitem"><ul role="group">{items}</ul></li>"#)
    }

    fn setup() -> (TempDir, Pipeline) {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config {
            output_dir: temp_dir.path().join("data"),
            ..Config::default()
        };
        let pipeline = Pipeline::new(&config).unwrap();
        (temp_dir, pipeline)
    }

    fn run(pipeline: &Pipeline, markup: &str) -> Result<(Grouping, Manifest, Written)> {
        let extraction = pipeline.extract(markup.as_bytes())?;
        let grouping = pipeline.group(&extraction)?;
        let manifest = pipeline.build(grouping.clone())?;
        let written = pipeline.write(&manifest)?;
        Ok((grouping, manifest, written))
    }

    #[test]
    fn october_snapshot() {
        let (temp_dir, pipeline) = setup();
        let markup = tree(&["20251003 140200.jpg", "20251003 131748.jpg", "20251005 090000.png"]);

        let (grouping, manifest, written) = run(&pipeline, &markup).unwrap();
        assert_eq!(grouping.year_month, Some(YearMonth::new("2025", "10")));
        assert_eq!(manifest.photos.len(), 2);
        assert_eq!(manifest.photos["03"], vec!["20251003 131748.jpg", "20251003 140200.jpg"]);
        assert_eq!(manifest.photos["05"], vec!["20251005 090000.png"]);
        assert_eq!(written.path, temp_dir.path().join("data").join("202510.json"));
        assert_eq!(written.outcome, WriteOutcome::Created);

        let on_disk: serde_json::Value = serde_json::from_str(&fs::read_to_string(&written.path).unwrap()).unwrap();
        assert_eq!(on_disk["user_id"], "modem-56k");
        assert_eq!(on_disk["year"], "2025");
        assert_eq!(on_disk["month"], "10");
        assert_eq!(on_disk["photos"]["03"][0], "20251003 131748.jpg");
    }

    #[test]
    fn rerun_overwrites() {
        let (_temp_dir, pipeline) = setup();
        run(&pipeline, &tree(&["20251003 131748.jpg"])).unwrap();
        let (_, manifest, written) = run(&pipeline, &tree(&["20251003 131748.jpg", "20251004 101010.jpg"])).unwrap();
        assert_eq!(written.outcome, WriteOutcome::Overwritten);

        let on_disk: Manifest = serde_json::from_str(&fs::read_to_string(&written.path).unwrap()).unwrap();
        assert_eq!(on_disk, manifest);
    }

    #[test]
    fn cross_month_file_is_kept() {
        let (_temp_dir, pipeline) = setup();
        let markup = tree(&["20251003 131748.jpg", "20251103 090000.jpg"]);

        let (grouping, manifest, written) = run(&pipeline, &markup).unwrap();
        assert_eq!(grouping.warnings.len(), 1);
        assert_eq!(manifest.photos["03"], vec!["20251003 131748.jpg", "20251103 090000.jpg"]);
        assert!(written.path.ends_with("202510.json"));
    }

    #[test]
    fn falls_back_to_patterns() {
        let (_temp_dir, pipeline) = setup();
        let markup = "<table><tr><td><a>20251003 131748.jpg</a></td></tr></table>";
        let extraction = pipeline.extract(markup.as_bytes()).unwrap();
        assert_eq!(extraction.strategy, "pattern");
        assert_eq!(extraction.filenames, vec!["20251003 131748.jpg"]);
    }

    #[test]
    fn empty_input() {
        let (_temp_dir, pipeline) = setup();
        let err = pipeline.extract(b"").unwrap_err();
        assert_eq!(*err, ErrorKind::NoFilenames);
    }

    #[test]
    fn no_dates() {
        let (temp_dir, pipeline) = setup();
        let extraction = pipeline.extract(tree(&["cat.jpg", "dog.png"]).as_bytes()).unwrap();
        let err = pipeline.group(&extraction).unwrap_err();
        assert_eq!(*err, ErrorKind::NoDateInfo);
        assert!(!temp_dir.path().join("data").exists());
    }

    #[test]
    fn missing_year_month() {
        let (_temp_dir, pipeline) = setup();
        let err = pipeline.build(Grouping::default()).unwrap_err();
        assert_eq!(*err, ErrorKind::MissingYearMonth);
    }

    #[test]
    fn missing_input() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("outerhtml.txt");
        let err = read_input(&input).unwrap_err();
        assert_eq!(*err, ErrorKind::InputNotFound(input));
    }

    #[test]
    fn reads_input() {
        let (temp_dir, pipeline) = setup();
        let input = temp_dir.path().join("outerhtml.txt");
        fs::write(&input, tree(&["20251003 131748.jpg"])).unwrap();
        let markup = read_input(&input).unwrap();
        assert_eq!(pipeline.extract(&markup).unwrap().filenames, vec!["20251003 131748.jpg"]);
    }

    #[test]
    fn invalid_selector_is_a_config_error() {
        let config = Config {
            label_selector: "span[".to_string(),
            ..Config::default()
        };
        let err = Pipeline::new(&config).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Config(reason) if reason.contains("span[")));
    }

    #[test]
    fn invalid_template_is_a_config_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config {
            base_url: "https://example.com/{year".to_string(),
            output_dir: temp_dir.path().join("data"),
            ..Config::default()
        };
        let pipeline = Pipeline::new(&config).unwrap();
        let err = run(&pipeline, &tree(&["20251003 131748.jpg"])).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Config(_)));
        assert!(!temp_dir.path().join("data").exists());
    }

    #[test]
    fn unknown_placeholder_is_a_config_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config {
            base_url: "https://example.com/{album}/{day}/".to_string(),
            output_dir: temp_dir.path().join("data"),
            ..Config::default()
        };
        let pipeline = Pipeline::new(&config).unwrap();
        let err = run(&pipeline, &tree(&["20251003 131748.jpg"])).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Config(reason) if reason.contains("{album}")));
        assert_eq!(err.exit_code(), 8);
        assert!(!temp_dir.path().join("data").exists());
    }

    #[test]
    fn write_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("data");
        fs::write(&blocker, b"in the way").unwrap();
        let config = Config {
            output_dir: blocker,
            ..Config::default()
        };
        let pipeline = Pipeline::new(&config).unwrap();
        let err = run(&pipeline, &tree(&["20251003 131748.jpg"])).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Write(_)));
        assert_eq!(err.exit_code(), 7);
    }
}
