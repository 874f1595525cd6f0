use crate::config::DisplayConfig;
use crate::modules::project::domain::entities::ProjectSummary;

/// How project listings are cut and ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPolicy {
    pub list_excerpt_length: usize,
    pub featured_excerpt_length: usize,
    pub featured_limit: usize,
}

impl Default for ListingPolicy {
    fn default() -> Self {
        Self::from(&DisplayConfig::default())
    }
}

impl From<&DisplayConfig> for ListingPolicy {
    fn from(display: &DisplayConfig) -> Self {
        Self {
            list_excerpt_length: display.list_excerpt_length,
            featured_excerpt_length: display.featured_excerpt_length,
            featured_limit: display.featured_limit,
        }
    }
}

impl ListingPolicy {
    /// Newest project date first. The sort is stable, so equal dates keep
    /// the store's order; undated projects go last.
    pub fn order_newest_first(&self, projects: &mut [ProjectSummary]) {
        projects.sort_by(|a, b| b.project_date.cmp(&a.project_date));
    }

    /// Featured projects only, newest first, at most `featured_limit`.
    pub fn select_featured(&self, projects: Vec<ProjectSummary>) -> Vec<ProjectSummary> {
        let mut featured: Vec<ProjectSummary> =
            projects.into_iter().filter(|p| p.featured).collect();
        self.order_newest_first(&mut featured);
        featured.truncate(self.featured_limit);
        featured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn project(id: &str, date: Option<(i32, u32)>, featured: bool) -> ProjectSummary {
        ProjectSummary {
            id: Some(id.to_string()),
            project_date: date.and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1)),
            featured,
            ..Default::default()
        }
    }

    fn ids(projects: &[ProjectSummary]) -> Vec<&str> {
        projects.iter().filter_map(|p| p.id.as_deref()).collect()
    }

    #[test]
    fn featured_scenario_orders_three_of_eight() {
        let store = vec![
            project("a", Some((2022, 3)), false),
            project("f-2024-01", Some((2024, 1)), true),
            project("b", Some((2025, 5)), false),
            project("f-2023-06", Some((2023, 6)), true),
            project("c", None, false),
            project("f-2025-02", Some((2025, 2)), true),
            project("d", Some((2021, 9)), false),
            project("e", Some((2020, 1)), false),
        ];

        let featured = ListingPolicy::default().select_featured(store);

        assert_eq!(ids(&featured), vec!["f-2025-02", "f-2024-01", "f-2023-06"]);
    }

    #[test]
    fn featured_never_exceeds_limit() {
        let store: Vec<ProjectSummary> = (0..10)
            .map(|i| project(&format!("p{}", i), Some((2015 + i, 1)), true))
            .collect();

        let featured = ListingPolicy::default().select_featured(store);

        assert_eq!(featured.len(), 6);
        assert_eq!(featured[0].id.as_deref(), Some("p9"));
        assert_eq!(featured[5].id.as_deref(), Some("p4"));
    }

    #[test]
    fn equal_dates_keep_store_order() {
        let mut store = vec![
            project("first", Some((2024, 1)), true),
            project("newer", Some((2024, 6)), true),
            project("second", Some((2024, 1)), true),
            project("third", Some((2024, 1)), true),
        ];

        ListingPolicy::default().order_newest_first(&mut store);

        assert_eq!(ids(&store), vec!["newer", "first", "second", "third"]);
    }

    #[test]
    fn undated_projects_sort_last() {
        let mut store = vec![
            project("undated", None, false),
            project("old", Some((2019, 1)), false),
        ];

        ListingPolicy::default().order_newest_first(&mut store);

        assert_eq!(ids(&store), vec!["old", "undated"]);
    }

    #[test]
    fn policy_follows_display_config() {
        let policy = ListingPolicy::from(&DisplayConfig {
            list_excerpt_length: 10,
            featured_excerpt_length: 5,
            featured_limit: 2,
        });
        let store: Vec<ProjectSummary> = (0..4)
            .map(|i| project(&format!("p{}", i), Some((2020 + i, 1)), true))
            .collect();

        assert_eq!(policy.select_featured(store).len(), 2);
    }
}
