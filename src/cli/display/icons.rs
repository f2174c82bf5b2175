//! Status icons for CLI output

pub struct StatusIcon;

impl StatusIcon {
    /// Template present
    pub const SUCCESS: &'static str = "✓";

    /// Template missing
    pub const ERROR: &'static str = "✗";

    pub fn get_template_icon(found: bool) -> &'static str {
        if found {
            Self::SUCCESS
        } else {
            Self::ERROR
        }
    }

    pub fn get_status_text(found: bool) -> &'static str {
        if found {
            "Found"
        } else {
            "Missing"
        }
    }
}
