//! GitHub Actions workflow command output.

/// Formatter for `::error::` / `::notice::` workflow commands.
pub struct GithubOutput;

impl GithubOutput {
    pub fn error(message: &str) -> String {
        format!("::error::{}", Self::escape_data(message))
    }

    pub fn notice(message: &str) -> String {
        format!("::notice::{}", Self::escape_data(message))
    }

    /// Escape a command payload so the runner reads it as one line.
    pub fn escape_data(data: &str) -> String {
        data.replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_command() {
        assert_eq!(
            GithubOutput::error("Class Foo has been deleted"),
            "::error::Class Foo has been deleted"
        );
    }

    #[test]
    fn test_escape_data() {
        assert_eq!(GithubOutput::escape_data("100%\nnext"), "100%25%0Anext");
        assert_eq!(GithubOutput::notice("a\r\nb"), "::notice::a%0D%0Ab");
    }
}
