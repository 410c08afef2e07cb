use serde::{Deserialize, Serialize};
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

/// identity of a raw dataset. also the key of the [`super::TableCache`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum TableSource {
    /// a directory of same-schema CSV partitions that are merged into one table
    Partitioned {
        directory: PathBuf,
        /// file extension of the partitions, other files are ignored
        #[serde(default = "default_extension")]
        extension: String,
    },
    /// a single CSV file
    Flat { file: PathBuf },
}

fn default_extension() -> String {
    String::from("csv")
}

impl TableSource {
    pub fn partitioned<P: AsRef<Path>>(directory: P) -> TableSource {
        TableSource::Partitioned {
            directory: directory.as_ref().to_path_buf(),
            extension: default_extension(),
        }
    }

    pub fn flat<P: AsRef<Path>>(file: P) -> TableSource {
        TableSource::Flat {
            file: file.as_ref().to_path_buf(),
        }
    }

    /// returns a copy of this source where a relative path is joined onto `base`.
    pub fn relative_to(&self, base: &Path) -> TableSource {
        let join = |p: &PathBuf| {
            if p.is_relative() {
                base.join(p)
            } else {
                p.clone()
            }
        };
        match self {
            TableSource::Partitioned {
                directory,
                extension,
            } => TableSource::Partitioned {
                directory: join(directory),
                extension: extension.clone(),
            },
            TableSource::Flat { file } => TableSource::Flat { file: join(file) },
        }
    }
}

impl Display for TableSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableSource::Partitioned {
                directory,
                extension,
            } => write!(f, "{}/*.{extension}", directory.display()),
            TableSource::Flat { file } => write!(f, "{}", file.display()),
        }
    }
}
