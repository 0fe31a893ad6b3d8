//! Class naming.

/// Convert a snake_case table name to UpperCamelCase.
///
/// Every `_` followed by an ASCII letter becomes that letter uppercased; then
/// the first character is uppercased. Other characters keep their case, so
/// the conversion is deterministic but not reversible.
pub fn upper_camel_case(name: &str) -> String {
    let mut camel = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_alphabetic() {
                    camel.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        camel.push(c);
    }

    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => camel,
    }
}

/// Class name for a table, with an optional prefix.
pub fn class_name(table: &str, prefix: &str) -> String {
    format!("{}{}", prefix, upper_camel_case(table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_camel_case() {
        assert_eq!(upper_camel_case("user_profile"), "UserProfile");
        assert_eq!(upper_camel_case("player"), "Player");
        assert_eq!(upper_camel_case("guild_member_log"), "GuildMemberLog");
        assert_eq!(upper_camel_case("Player_item"), "PlayerItem");
    }

    #[test]
    fn test_other_characters_keep_their_case() {
        assert_eq!(upper_camel_case("USER_name"), "USERName");
        assert_eq!(upper_camel_case("item_2nd"), "Item_2nd");
        assert_eq!(upper_camel_case("a__b"), "A_B");
        assert_eq!(upper_camel_case("_hidden"), "Hidden");
        assert_eq!(upper_camel_case("trailing_"), "Trailing_");
        assert_eq!(upper_camel_case(""), "");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(upper_camel_case("mail_box"), upper_camel_case("mail_box"));
        // Different names may share a class name.
        assert_eq!(upper_camel_case("mail_box"), upper_camel_case("mailBox"));
    }

    #[test]
    fn test_class_name_prefix() {
        assert_eq!(class_name("user_profile", ""), "UserProfile");
        assert_eq!(class_name("user_profile", "UTable_"), "UTable_UserProfile");
    }
}
