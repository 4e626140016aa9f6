//! Closing hint blocks.
//!
//! Exactly one of these follows the summary: next steps when every check
//! passed, common fixes otherwise.

/// Lines under "Next steps:" after a clean run.
pub fn next_steps() -> &'static [&'static str] {
    &[
        "1. Open Terminal 1: python manage.py runserver",
        "2. Open Terminal 2: python -m http.server 5500",
        "3. Open Browser: http://127.0.0.1:5500/BikeShowroom.html",
    ]
}

/// Lines under "Common fixes:" after a failed run.
pub fn common_fixes(database: &str) -> Vec<String> {
    vec![
        "- Install packages: pip install -r requirements.txt".to_string(),
        format!("- Create database: CREATE DATABASE {};", database),
        "- Run migrations: python manage.py migrate".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_steps_start_both_servers() {
        let steps = next_steps();
        assert_eq!(steps.len(), 3);
        assert!(steps[0].contains("manage.py runserver"));
        assert!(steps[1].contains("http.server 5500"));
        assert!(steps[2].contains("BikeShowroom.html"));
    }

    #[test]
    fn common_fixes_name_the_database() {
        let fixes = common_fixes("garage41");
        assert_eq!(fixes[1], "- Create database: CREATE DATABASE garage41;");
        assert!(fixes[0].contains("pip install -r requirements.txt"));
        assert!(fixes[2].contains("migrate"));
    }
}
