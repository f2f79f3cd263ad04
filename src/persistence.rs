use crate::bayes::NaiveBayesClassifier;
use crate::config::MODEL_MAGIC;
use crate::error::StorageError;
use log::debug;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write the classifier to `path`, replacing any existing file.
///
/// Layout: the magic prefix, then the bincode encoding of the classifier.
/// The bytes go to a temporary file in the same directory which is then
/// renamed over `path`, so an interrupted save leaves the old model intact.
pub fn save_model(classifier: &NaiveBayesClassifier, path: &Path) -> Result<(), StorageError> {
    let payload = bincode::serialize(classifier).map_err(StorageError::Encode)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(MODEL_MAGIC)?;
    file.write_all(&payload)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| StorageError::Io(err.error))?;

    debug!(
        "wrote {} bytes to {}",
        MODEL_MAGIC.len() + payload.len(),
        path.display()
    );
    Ok(())
}

/// Read a classifier written by [`save_model`].
pub fn load_model(path: &Path) -> Result<NaiveBayesClassifier, StorageError> {
    let bytes = std::fs::read(path)?;
    let payload = bytes
        .strip_prefix(MODEL_MAGIC)
        .ok_or(StorageError::BadMagic)?;
    let classifier: NaiveBayesClassifier =
        bincode::deserialize(payload).map_err(StorageError::Decode)?;
    classifier.validate().map_err(StorageError::Invalid)?;

    debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(classifier)
}
