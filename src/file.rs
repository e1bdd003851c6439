//! Loading experiments from, and saving reports to, JSON files.

use std::fs::File;
use std::io::Error;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_reader, to_writer_pretty};

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, Error> {
    let file = File::open(path)?;
    Ok(from_reader(file)?)
}

/// JSON-encodes the `value` in pretty-printed form and writes it to a given `path`.
pub fn write_json(path: impl AsRef<Path>, value: &impl Serialize) -> Result<(), Error> {
    let file = File::create(path)?;
    Ok(to_writer_pretty(file, value)?)
}

pub trait ReadJsonFile<D> {
    fn read_json_file(path: impl AsRef<Path>) -> Result<D, Error>;
}

impl<D: DeserializeOwned> ReadJsonFile<D> for D {
    fn read_json_file(path: impl AsRef<Path>) -> Result<D, Error> {
        read_json(path)
    }
}

pub trait WriteJsonFile<S: Serialize> {
    fn write_json_file(&self, path: impl AsRef<Path>) -> Result<(), Error>;
}

impl<S: Serialize> WriteJsonFile<S> for S {
    fn write_json_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        write_json(path, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::Distribution;
    use crate::shape::ExamShape;
    use std::env;
    use std::process;

    fn temp_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(format!("cribsheet-{}-{name}.json", process::id()))
    }

    #[test]
    fn write_then_read() {
        let path = temp_path("shape");
        let shape = ExamShape {
            exam_length: 30,
            options_per_question: 5,
            pass_grade: 18,
        };
        shape.write_json_file(&path).unwrap();
        let read = ExamShape::read_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(shape, read);
    }

    #[test]
    fn read_malformed() {
        let path = temp_path("malformed");
        std::fs::write(&path, "[25, 25, ").unwrap();
        let result = Distribution::read_json_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn read_missing() {
        assert!(Distribution::read_json_file(temp_path("missing")).is_err());
    }
}
