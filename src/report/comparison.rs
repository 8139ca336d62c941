use serde::Serialize;

use crate::models::RepositoryProfile;

use super::format::{group_thousands, truncate_chars};

const NAME_CHARS: usize = 29;
const LANGUAGE_CHARS: usize = 14;
const RULE_WIDTH: usize = 80;

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub name: String,
    pub stars: u64,
    pub forks: u64,
    pub size_kb: u64,
    pub language: String,
}

impl From<&RepositoryProfile> for ComparisonRow {
    fn from(profile: &RepositoryProfile) -> Self {
        Self {
            name: truncate_chars(&profile.full_name, NAME_CHARS),
            stars: profile.stargazers_count,
            forks: profile.forks_count,
            size_kb: profile.size,
            language: truncate_chars(
                profile.language.as_deref().unwrap_or("Unknown"),
                LANGUAGE_CHARS,
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonTable {
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Builds the table sorted strictly descending by star count.
    pub fn from_profiles(mut profiles: Vec<RepositoryProfile>) -> Self {
        profiles.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
        Self {
            rows: profiles.iter().map(ComparisonRow::from).collect(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Repository Comparison\n{}\n", "=".repeat(60)));
        out.push_str(&format!(
            "{:<30} {:<8} {:<8} {:<12} {:<15}\n",
            "Repository", "Stars", "Forks", "Size (KB)", "Language"
        ));
        out.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));

        for row in &self.rows {
            out.push_str(&format!(
                "{:<30} {:<8} {:<8} {:<12} {:<15}\n",
                row.name,
                group_thousands(row.stars),
                group_thousands(row.forks),
                group_thousands(row.size_kb),
                row.language
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn profile(full_name: &str, stars: u64, language: Option<&str>) -> RepositoryProfile {
        RepositoryProfile {
            full_name: full_name.to_string(),
            description: None,
            html_url: format!("https://github.com/{}", full_name),
            stargazers_count: stars,
            forks_count: stars / 10,
            watchers_count: stars,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            size: 1_000,
            license: None,
            language: language.map(str::to_string),
        }
    }

    #[test]
    fn test_rows_sorted_descending_by_stars() {
        let table = ComparisonTable::from_profiles(vec![
            profile("a/ten", 10, Some("Rust")),
            profile("b/fifty", 50, Some("Go")),
            profile("c/thirty", 30, Some("C")),
        ]);
        let stars: Vec<u64> = table.rows.iter().map(|r| r.stars).collect();
        assert_eq!(stars, vec![50, 30, 10]);
    }

    #[test]
    fn test_missing_language_defaults_to_unknown() {
        let table = ComparisonTable::from_profiles(vec![profile("a/b", 1, None)]);
        assert_eq!(table.rows[0].language, "Unknown");
    }

    #[test]
    fn test_long_name_fills_exactly_thirty_columns() {
        let long = "organization/some-extremely-long-repository-name";
        let table = ComparisonTable::from_profiles(vec![profile(long, 1, Some("Rust"))]);
        assert_eq!(table.rows[0].name.chars().count(), 29);

        let text = table.render_text();
        let row_line = text.lines().last().unwrap();
        // Name column is 30 chars wide including padding; a 29-char name
        // leaves exactly one pad space before the star count.
        let column: String = row_line.chars().take(30).collect();
        assert_eq!(column, format!("{} ", table.rows[0].name));
        assert_eq!(row_line.chars().nth(31), Some('1'));
    }

    #[test]
    fn test_language_truncated_to_fourteen_chars() {
        let table = ComparisonTable::from_profiles(vec![profile(
            "a/b",
            1,
            Some("Jupyter Notebook Extended"),
        )]);
        assert_eq!(table.rows[0].language.chars().count(), 14);
        assert_eq!(table.rows[0].language, "Jupyter Notebo");
    }

    #[test]
    fn test_header_layout() {
        let table = ComparisonTable::from_profiles(vec![profile("a/b", 1, Some("Rust"))]);
        let text = table.render_text();
        assert!(text.contains("Repository Comparison"));
        assert!(text.contains("Repository"));
        assert!(text.contains(&"-".repeat(80)));
    }
}
