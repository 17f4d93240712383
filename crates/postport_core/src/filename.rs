/// Target directory for a post: `{date}-{slug}`.
///
/// Characters that would escape or break a single path component are
/// replaced with `_`; well-formed dates and slugs pass through untouched.
pub fn target_dir_name(date: &str, slug: &str) -> String {
    format!("{}-{}", sanitize_component(date), sanitize_component(slug))
}

fn sanitize_component(input: &str) -> String {
    input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect()
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_name_is_untouched() {
        assert_eq!(target_dir_name("2022-06-28", "welcome"), "2022-06-28-welcome");
    }

    #[test]
    fn separators_cannot_nest_directories() {
        assert_eq!(target_dir_name("2022/06/28", "a"), "2022_06_28-a");
        assert_eq!(target_dir_name("2022-06-28", "..\\up"), "2022-06-28-.._up");
    }

    #[test]
    fn empty_date_still_yields_a_name() {
        assert_eq!(target_dir_name("", "draft"), "-draft");
    }
}
