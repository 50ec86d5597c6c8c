//! Activity feed service

use std::sync::Arc;

use serde::Deserialize;
use shared::fixtures::Dashboard;
use shared::{Activity, ActivityFilter};

use crate::error::AppResult;

#[derive(Debug, Default, Deserialize)]
pub struct ActivityQuery {
    pub filter: Option<String>,
}

pub struct ActivityService {
    dashboard: Arc<Dashboard>,
}

impl ActivityService {
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        Self { dashboard }
    }

    /// Feed entries for the selected tab, in feed order
    pub fn feed(&self, query: &ActivityQuery) -> AppResult<Vec<Activity>> {
        let filter = match query.filter.as_deref() {
            Some(name) => name.parse::<ActivityFilter>()?,
            None => ActivityFilter::default(),
        };

        Ok(filter
            .apply(&self.dashboard.activity_feed)
            .into_iter()
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use shared::fixtures::Fixtures;

    fn service() -> ActivityService {
        ActivityService::new(Arc::new(Fixtures::load().unwrap().dashboard))
    }

    fn feed(filter: Option<&str>) -> Result<Vec<Activity>, AppError> {
        service().feed(&ActivityQuery {
            filter: filter.map(String::from),
        })
    }

    #[test]
    fn test_feed_tabs() {
        assert_eq!(feed(None).unwrap().len(), 5);
        assert_eq!(feed(Some("following")).unwrap().len(), 5);

        let mine = feed(Some("you")).unwrap();
        assert_eq!(mine.len(), 3);
        assert!(mine
            .iter()
            .all(|a| a.description.to_lowercase().contains("you")));
    }

    #[test]
    fn test_unknown_filter() {
        let err = feed(Some("friends")).unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "filter"));
    }
}
