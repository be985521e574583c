//! JSON decoding without serde_json's nesting limit.
//!
//! Every instance level costs two nesting levels (the object and its
//! `children` array), so the default limit of 128 rejects trees about 64
//! levels deep. The stack grows on demand while decoding instead.

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Deserialize `source`, accepting any nesting depth
pub fn from_str_unbounded<T: DeserializeOwned>(source: &str) -> serde_json::Result<T> {
    let mut de = serde_json::Deserializer::from_str(source);
    de.disable_recursion_limit();

    let value = T::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ComponentInstance;

    #[test]
    fn test_decodes_past_default_depth() {
        let depth = 300;
        let mut json = String::new();
        for i in 0..depth {
            json.push_str(&format!(r#"{{"id":"n{}","component":"Box","children":["#, i));
        }
        json.push_str(r#"{"id":"leaf","component":"Text"}"#);
        for _ in 0..depth {
            json.push_str("]}");
        }

        assert!(serde_json::from_str::<ComponentInstance>(&json).is_err());

        let mut node: ComponentInstance = from_str_unbounded(&json).unwrap();
        let mut levels = 0;
        while let Some(child) = node.children.pop() {
            node = child;
            levels += 1;
        }

        assert_eq!(levels, depth);
        assert_eq!(node.id, "leaf");
    }

    #[test]
    fn test_rejects_trailing_data() {
        let result = from_str_unbounded::<ComponentInstance>(
            r#"{"id":"n1","component":"Box"} extra"#,
        );
        assert!(result.is_err());
    }
}
