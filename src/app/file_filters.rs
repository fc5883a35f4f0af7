/// Filter pattern for the open dialog. Advisory only: the picker does not
/// enforce content type, so any text file loads as-is.
///
/// FLTK filter formats:
/// - Simple wildcard: "*.html"
/// - Multiple wildcards: "*.{html,htm,txt}"
/// - Multiple filters: "Web Pages\t*.{html,htm}\nText Files\t*.txt"
/// FLTK automatically adds an "All Files (*)" option.
pub fn html_open_filter() -> String {
    "*.{html,htm,txt}".to_string()
}

/// Filter for the save dialog. Saving never restricts the name the user
/// types, so this stays wide open.
pub fn save_filter() -> String {
    "*".to_string()
}
