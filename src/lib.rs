//! Finds a button by id in an origin HTML page, re-identifies it in a modified
//! page by its `href`, `title` and `class`, and reports the tag path to it.

pub mod attributes;
pub mod config;
pub mod document;
pub mod error;
pub mod locator;
pub mod matcher;
pub mod output;
pub mod path;

use std::path::Path;

use tracing::{debug, error, info};

use crate::attributes::{AttributeDiff, AttributeMap};
use crate::config::FinderConfig;
use crate::error::{FinderError, Result};
use crate::locator::{Locator, Lookup};
use crate::matcher::Matcher;
use crate::output::{OutputWriter, Report};

#[derive(Debug)]
pub struct Outcome {
    pub report: Report,
    /// Origin attributes against the matched element's; `None` without a match.
    pub diff: Option<AttributeDiff>,
}

/// Runs one comparison and appends its report to `config.output_path`.
///
/// Fails only when the target id is missing from the origin document (or the
/// configured patterns do not compile). An unreadable modified document gives
/// an empty path; a failed append is logged and ignored.
pub fn run(config: &FinderConfig, origin: &Path, modified: &Path) -> Result<Outcome> {
    let locator = Locator::new(config);
    let matcher = Matcher::new(config)?;

    let origin_element = match locator.locate(origin) {
        Lookup::Found(element) => element,
        Lookup::NotFound => {
            return Err(FinderError::TargetNotFound {
                id: locator.target_id().to_string(),
                path: document::absolute(origin),
            })
        }
    };

    let (path, diff) = matcher.find_in_file(modified, |found| {
        let diff = found.map(|element| origin_element.attributes.diff(&AttributeMap::from_element(&element)));
        (path::build(found, &config.separator), diff)
    });

    if let Some(diff) = &diff {
        debug!("Attribute diff for <{}>: {diff}", origin_element.tag_name);
    }

    let report = Report {
        origin: origin.display().to_string(),
        modified: modified.display().to_string(),
        path,
    };
    info!("{report}");

    let writer = OutputWriter::new(&config.output_path);
    if let Err(err) = writer.append(&report) {
        error!("{err}");
    }

    Ok(Outcome { report, diff })
}
