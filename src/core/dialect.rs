use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

use crate::error::JdepsError;

/// Which jdeps report grammar the input follows.
///
/// The dialect is always chosen by the caller; it is never sniffed from the
/// report contents.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Dialect {
    /// `jdeps` default output: package blocks with indented `->` lines
    #[default]
    Package,
    /// `jdeps -verbose:class`: one class pair per line
    Class,
    /// `jdeps -summary`: one jar pair per line
    Jar,
}

impl Dialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Package => "package",
            Dialect::Class => "class",
            Dialect::Jar => "jar",
        }
    }
}

impl FromStr for Dialect {
    type Err = JdepsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "package" => Ok(Dialect::Package),
            "class" => Ok(Dialect::Class),
            "jar" => Ok(Dialect::Jar),
            other => Err(JdepsError::InvalidDialect(other.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
