// Unit tests for the property model

#[cfg(test)]
mod tests {
    use crate::domain::model::*;

    #[test]
    fn test_prop_value_display() {
        assert_eq!(PropValue::Int(-3).to_string(), "-3");
        assert_eq!(PropValue::Float(0.5).to_string(), "0.5");
        assert_eq!(PropValue::Str("foo".to_string()).to_string(), "foo");
        assert_eq!(PropValue::Bool(true).to_string(), "true");
        assert_eq!(PropValue::Data(b"I".to_vec()).to_string(), "I");
        assert_eq!(PropValue::Data(vec![0, 159, 146]).to_string(), "<3 bytes>");
    }

    #[test]
    fn test_prop_value_as_code() {
        assert_eq!(PropValue::Int(7).as_code(), Some(7));
        assert_eq!(PropValue::Bool(true).as_code(), Some(1));
        assert_eq!(PropValue::Bool(false).as_code(), Some(0));
        assert_eq!(PropValue::Float(1.0).as_code(), None);
        assert_eq!(PropValue::Str("1".to_string()).as_code(), None);
    }

    #[test]
    fn test_prop_value_as_text() {
        assert_eq!(
            PropValue::Str("abc".to_string()).as_text(),
            Some("abc")
        );
        assert_eq!(PropValue::Data(b"P".to_vec()).as_text(), Some("P"));
        assert_eq!(PropValue::Int(1).as_text(), None);
    }

    #[test]
    fn test_key_ordering_reserved_first() {
        let mut keys = vec!["_b", "a", "_a", "b"];
        keys.sort_by(|a, b| prop_key_cmp(a, b));
        assert_eq!(keys, vec!["_a", "_b", "a", "b"]);
    }

    #[test]
    fn test_key_ordering_uppercase_user_keys() {
        // Plain byte order would put "B" before "_a"; the grouped rule
        // must not.
        let mut keys = vec!["B", "_a"];
        keys.sort_by(|a, b| prop_key_cmp(a, b));
        assert_eq!(keys, vec!["_a", "B"]);
    }

    #[test]
    fn test_sorted_keys() {
        let mut props = FrameProps::new();
        props.insert("a".to_string(), PropValue::Int(1));
        props.insert("_z".to_string(), PropValue::Int(2));
        props.insert("_ColorRange".to_string(), PropValue::Int(0));
        assert_eq!(sorted_keys(&props), vec!["_ColorRange", "_z", "a"]);
    }

    #[test]
    fn test_category_display_order() {
        assert!(Category::Video < Category::Audio);
        assert!(Category::Audio < Category::Text);
        assert!(Category::Text < Category::Other);
        assert_eq!(Category::Video.to_string(), "Video");
    }
}
