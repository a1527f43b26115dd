//! Classification of `$ref` values.

/// How a `$ref` string is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaRef<'a> {
    /// `#/definitions/...` and friends. Not resolved.
    Internal(&'a str),
    /// `http://...`, `https://...`. Not resolved.
    Remote(&'a str),
    /// A path relative to the directory of the referring file,
    /// with an optional JSON pointer after `#`.
    File {
        path: &'a str,
        pointer: Option<&'a str>,
    },
}

impl<'a> SchemaRef<'a> {
    pub fn classify(reference: &'a str) -> Self {
        if reference.is_empty() || reference.starts_with('#') {
            return Self::Internal(reference);
        }
        if reference.starts_with("http") {
            return Self::Remote(reference);
        }

        match reference.split_once('#') {
            Some((path, pointer)) => Self::File {
                path,
                pointer: Some(pointer),
            },
            None => Self::File {
                path: reference,
                pointer: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal() {
        assert_eq!(
            SchemaRef::classify("#/definitions/Foo"),
            SchemaRef::Internal("#/definitions/Foo")
        );
        assert_eq!(SchemaRef::classify(""), SchemaRef::Internal(""));
    }

    #[test]
    fn test_remote() {
        assert!(matches!(
            SchemaRef::classify("http://example.com/s.json"),
            SchemaRef::Remote(_)
        ));
        assert!(matches!(
            SchemaRef::classify("https://example.com/s.json#/a"),
            SchemaRef::Remote(_)
        ));
    }

    #[test]
    fn test_file() {
        assert_eq!(
            SchemaRef::classify("sub/child.json"),
            SchemaRef::File {
                path: "sub/child.json",
                pointer: None
            }
        );
        assert_eq!(
            SchemaRef::classify("common.json#/definitions/Id"),
            SchemaRef::File {
                path: "common.json",
                pointer: Some("/definitions/Id")
            }
        );
        assert!(matches!(
            SchemaRef::classify("../x.json"),
            SchemaRef::File { path: "../x.json", pointer: None }
        ));
    }
}
