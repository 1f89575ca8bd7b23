//! Client-Side Validation
//!
//! Checks that run before any request is sent; a failure here means no
//! network call happens at all.

/// Validate a new comment's author name and text (both trimmed non-empty).
pub fn validate_comment(name: &str, text: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Please enter your name.");
    }
    if text.trim().is_empty() {
        return Err("Comment cannot be empty.");
    }
    Ok(())
}

/// Validate a workspace name (trimmed non-empty).
pub fn validate_workspace_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Workspace name is required.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_comment_fields() {
        assert_eq!(validate_comment("", "text"), Err("Please enter your name."));
        assert_eq!(validate_comment("   ", "text"), Err("Please enter your name."));
        assert_eq!(validate_comment("Alice", ""), Err("Comment cannot be empty."));
        assert_eq!(validate_comment("Alice", " \n "), Err("Comment cannot be empty."));
        assert_eq!(validate_comment("Alice", "nice cut"), Ok(()));
    }

    #[test]
    fn rejects_blank_workspace_names() {
        assert!(validate_workspace_name("").is_err());
        assert!(validate_workspace_name("  \t ").is_err());
        assert!(validate_workspace_name("Team Edits").is_ok());
    }
}
