// src/engine/filter.rs
//
// What a caller can ask for: a random class (optionally narrowed to one navy or
// one hull type) or a class by exact name.

use std::fmt;

use crate::data::ClassRecord;
use crate::error::{Error, Result};
use crate::index::{Category, Group};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    Group(Group),
    Category(Category),
}

impl Filter {
    /// Index bucket this filter draws from.
    pub fn key(self) -> &'static str {
        match self {
            Filter::Group(g) => g.key(),
            Filter::Category(c) => c.key(),
        }
    }

    /// Same classification the index uses, so sampling and buckets agree.
    pub fn matches(self, rec: &ClassRecord) -> bool {
        match self {
            Filter::Group(g) => Group::classify(&rec.group) == g,
            Filter::Category(c) => Category::classify(&rec.category) == c,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    Random(Option<Filter>),
    Name(String),
}

impl Query {
    /// Parse command arguments:
    ///
    /// - empty → random class
    /// - `-n <navy>` (usn, rn, ijn, km, rm, fn, minor)
    /// - `-t <hull>` (cv, bb, bc, ca, cl, dd, ss, other)
    /// - anything else → exact name lookup
    ///
    /// Unknown codes, a missing code, or any other leading `-` token is an
    /// `InvalidSpecification`; callers report it and fall back to no filter.
    pub fn parse(args: &str) -> Result<Query> {
        let mut words = args.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(Query::Random(None));
        };

        match first {
            "-n" => {
                let code = words.next().unwrap_or("");
                Group::from_code(code)
                    .map(|g| Query::Random(Some(Filter::Group(g))))
                    .ok_or_else(|| Error::InvalidSpecification(format!("unknown navy {code:?}")))
            }
            "-t" => {
                let code = words.next().unwrap_or("");
                Category::from_code(code)
                    .map(|c| Query::Random(Some(Filter::Category(c))))
                    .ok_or_else(|| Error::InvalidSpecification(format!("unknown hull type {code:?}")))
            }
            flag if flag.starts_with('-') => {
                Err(Error::InvalidSpecification(format!("unknown option {flag:?}")))
            }
            _ => {
                let name = args.split_whitespace().collect::<Vec<_>>().join(" ");
                Ok(Query::Name(name))
            }
        }
    }
}
