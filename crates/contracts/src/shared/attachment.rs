/// File extensions accepted for record attachments.
pub const ALLOWED_EXTENSIONS: [&str; 2] = ["pdf", "docx"];

/// Checks the extension rule for an attachment file name.
///
/// Matching is case-insensitive; a name without an extension is rejected.
pub fn is_allowed_attachment(file_name: &str) -> bool {
    let Some((_, extension)) = file_name.rsplit_once('.') else {
        return false;
    };
    let extension = extension.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|allowed| *allowed == extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_pdf_and_docx() {
        assert!(is_allowed_attachment("contract.pdf"));
        assert!(is_allowed_attachment("agreement.docx"));
        assert!(is_allowed_attachment("SCAN.PDF"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!is_allowed_attachment("photo.png"));
        assert!(!is_allowed_attachment("table.xlsx"));
        assert!(!is_allowed_attachment("noextension"));
        assert!(!is_allowed_attachment("trailingdot."));
    }
}
