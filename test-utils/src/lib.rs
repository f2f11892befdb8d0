#[doc(hidden)]
pub use indoc::indoc;
#[doc(hidden)]
pub use serde_yaml;

/// Deserializes an indented YAML literal into the type the call site asks
/// for, such as a `Seed` or a plain `serde_yaml::Value`. Panics on malformed
/// input.
#[macro_export]
macro_rules! yaml {
    ($doc:literal) => {
        $crate::serde_yaml::from_str($crate::indoc!($doc)).unwrap()
    };
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Owner {
        id: i32,
        name: String,
    }

    #[test]
    fn parses_untyped_value() -> Result<()> {
        let value: serde_yaml::Value = yaml! {"
            ---
            users:
            - id: 1
              name: Ngimdock
        "};
        assert_eq!(value["users"][0]["name"].as_str(), Some("Ngimdock"));
        Ok(())
    }

    #[test]
    fn parses_into_requested_type() -> Result<()> {
        let owners: Vec<Owner> = yaml! {"
            ---
            - id: 2
              name: Dan
        "};
        assert_eq!(
            owners,
            vec![Owner {
                id: 2,
                name: "Dan".to_owned()
            }]
        );
        Ok(())
    }
}
