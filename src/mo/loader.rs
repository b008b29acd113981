//! Locating and loading catalogs from a locale directory tree.
//!
//! Catalogs follow the usual gettext layout:
//!
//! ```text
//! <dir>/<locale>/LC_MESSAGES/<domain>.mo
//! ```

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use log::{debug, info, warn};
use super::catalog::Catalog;
use super::decoder::DecodeOptions;
use super::types::error::LoadError;

/// Name of the per-locale sub-directory holding message catalogs.
pub const MESSAGES_DIR: &str = "LC_MESSAGES";

/// File extension of compiled catalogs.
pub const CATALOG_EXTENSION: &str = "mo";

/// Builds `<dir>/<locale>/LC_MESSAGES/<domain>.mo`.
pub fn catalog_path(domain: &str, dir: impl AsRef<Path>, locale: &str) -> PathBuf {
    dir.as_ref()
        .join(locale)
        .join(MESSAGES_DIR)
        .join(format!("{}.{}", domain, CATALOG_EXTENSION))
}

/// Loads the catalog for one locale with default decode options.
pub fn load(domain: &str, dir: impl AsRef<Path>, locale: &str) -> Result<Catalog, LoadError> {
    load_with(&DecodeOptions::default(), domain, dir, locale)
}

/// Loads the catalog for one locale.
pub fn load_with(
    options: &DecodeOptions,
    domain: &str,
    dir: impl AsRef<Path>,
    locale: &str,
) -> Result<Catalog, LoadError> {
    let path = catalog_path(domain, dir, locale);
    decode_file(options, &path)
}

/// Opens and decodes a single catalog file.
pub fn decode_file(options: &DecodeOptions, path: &Path) -> Result<Catalog, LoadError> {
    info!("Opening catalog: {}", path.display());
    let file = File::open(path).map_err(|source| open_error(path, source))?;
    options
        .decode(BufReader::new(file))
        .map_err(|source| LoadError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Loads `domain` for every locale found directly under `dir`.
///
/// Locale directories that do not contain the domain's catalog are skipped.
/// A catalog that exists but fails to open or decode is kept in the result as
/// an error, so one bad locale does not hide the others.
///
/// # Errors
/// Fails only when `dir` itself cannot be listed.
pub fn load_all(
    domain: &str,
    dir: impl AsRef<Path>,
) -> Result<BTreeMap<String, Result<Catalog, LoadError>>, LoadError> {
    load_all_with(&DecodeOptions::default(), domain, dir)
}

/// Like [`load_all`], with explicit decode options.
pub fn load_all_with(
    options: &DecodeOptions,
    domain: &str,
    dir: impl AsRef<Path>,
) -> Result<BTreeMap<String, Result<Catalog, LoadError>>, LoadError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|source| open_error(dir, source))?;

    let mut catalogs = BTreeMap::new();
    for entry in entries {
        let entry = entry.map_err(|source| open_error(dir, source))?;
        if !entry.path().is_dir() {
            continue;
        }
        let Some(locale) = entry.file_name().to_str().map(str::to_owned) else {
            warn!("Skipping non UTF-8 locale directory: {}", entry.path().display());
            continue;
        };

        let path = catalog_path(domain, dir, &locale);
        if !path.is_file() {
            debug!("No {} catalog for locale {}", domain, locale);
            continue;
        }

        let result = decode_file(options, &path);
        if let Err(ref e) = result {
            warn!("Locale {}: {}", locale, e);
        }
        catalogs.insert(locale, result);
    }

    info!("Loaded {} locale(s) for domain {}", catalogs.len(), domain);
    Ok(catalogs)
}

fn open_error(path: &Path, source: io::Error) -> LoadError {
    if source.kind() == io::ErrorKind::NotFound {
        LoadError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
