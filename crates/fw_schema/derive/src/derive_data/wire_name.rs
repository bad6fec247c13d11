/// Checks a wire name against the rules the runtime enforces when it builds
/// a `SchemaInfo`, so derived types fail at compile time instead.
pub(super) fn check_wire_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        Err("wire name must not be empty")
    } else if name.starts_with(char::is_whitespace) {
        Err("wire name must not start with whitespace")
    } else if name.contains(':') {
        Err("wire name must not contain `:`")
    } else if name.contains(',') {
        Err("wire name must not contain `,`")
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::check_wire_name;

    #[test]
    fn accepted_names() {
        assert!(check_wire_name("CustomFieldName").is_ok());
        assert!(check_wire_name("x y ").is_ok());
        assert!(check_wire_name("type").is_ok());
    }

    #[test]
    fn rejected_names() {
        assert_eq!(check_wire_name(""), Err("wire name must not be empty"));
        assert_eq!(
            check_wire_name(" Name"),
            Err("wire name must not start with whitespace")
        );
        assert_eq!(check_wire_name("a:b"), Err("wire name must not contain `:`"));
        assert_eq!(check_wire_name("a,b"), Err("wire name must not contain `,`"));
    }
}
