//! Filtering pipeline over an in-memory slice of postings.
//!
//! Steps run in a fixed order: text search, then city equality, then the
//! radius filter. Each step is a pure function and a blank criterion disables it.

use serde::{Deserialize, Serialize};

use crate::geo::{haversine_km, Coordinate};
use crate::models::job::JobPosting;

pub const DEFAULT_RADIUS_KM: f64 = 50.0;

/// City value that means "no city filter" in the search form.
const ALL_CITIES: &str = "all";

fn default_sort_by_distance() -> bool {
    true
}

/// Search form state. Missing fields disable their filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub city: Option<String>,
    /// The searcher's location. `None` (e.g. geolocation denied) disables the radius filter.
    #[serde(default)]
    pub reference: Option<Coordinate>,
    /// Defaults to the service-wide radius when absent.
    #[serde(default)]
    pub radius_km: Option<f64>,
    #[serde(default = "default_sort_by_distance")]
    pub sort_by_distance: bool,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            city: None,
            reference: None,
            radius_km: None,
            sort_by_distance: true,
        }
    }
}

/// A posting that survived the pipeline, with its resolved location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedPosting {
    #[serde(flatten)]
    pub posting: JobPosting,
    pub location: Coordinate,
    /// Present only when the search had a reference point.
    pub distance_km: Option<f64>,
}

/// Case-insensitive substring match against title, company and description.
pub fn matches_text(posting: &JobPosting, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [&posting.title, &posting.company, &posting.description]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// City equality, ignoring case and surrounding whitespace. Blank or "All" matches everything.
pub fn matches_city(posting: &JobPosting, city: Option<&str>) -> bool {
    let wanted = match city.map(str::trim) {
        Some(c) if !c.is_empty() && !c.eq_ignore_ascii_case(ALL_CITIES) => c.to_lowercase(),
        _ => return true,
    };
    posting.city.trim().to_lowercase() == wanted
}

/// Runs the full pipeline and returns the retained postings.
///
/// `default_radius_km` applies when the criteria carry no radius of their own.
pub fn run_search(
    postings: &[JobPosting],
    criteria: &SearchCriteria,
    default_radius_km: f64,
) -> Vec<MatchedPosting> {
    let radius_km = criteria.radius_km.unwrap_or(default_radius_km);

    let mut results: Vec<MatchedPosting> = postings
        .iter()
        .filter(|p| matches_text(p, &criteria.query))
        .filter(|p| matches_city(p, criteria.city.as_deref()))
        .filter_map(|p| {
            let location = p.resolved_coordinate();
            let distance_km = criteria.reference.map(|r| haversine_km(r, location));
            match distance_km {
                Some(d) if d > radius_km => None,
                _ => Some(MatchedPosting {
                    posting: p.clone(),
                    location,
                    distance_km,
                }),
            }
        })
        .collect();

    if criteria.reference.is_some() && criteria.sort_by_distance {
        // stable sort keeps input order for ties
        results.sort_by(|a, b| {
            let da = a.distance_km.unwrap_or(f64::INFINITY);
            let db = b.distance_km.unwrap_or(f64::INFINITY);
            da.total_cmp(&db)
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::cities::lookup_city;

    fn job(id: &str, title: &str, company: &str, city: &str, description: &str) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            city: city.to_string(),
            description: description.to_string(),
            coordinate: None,
            salary: None,
            job_type: None,
            posted_at: None,
        }
    }

    fn fixtures() -> Vec<JobPosting> {
        vec![
            job("1", "Rust Engineer", "Ferrous", "Mumbai", "Build storage engines"),
            job("2", "Data Analyst", "Numbers Inc", "Delhi", "SQL and dashboards"),
            job("3", "Backend Developer", "Acme", "Noida", "Rust microservices"),
            job("4", "Designer", "Pixel", "Remote", "Figma all day"),
        ]
    }

    fn ids(results: &[MatchedPosting]) -> Vec<&str> {
        results.iter().map(|m| m.posting.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_keeps_everything_in_order() {
        let results = run_search(&fixtures(), &SearchCriteria::default(), DEFAULT_RADIUS_KM);
        assert_eq!(ids(&results), vec!["1", "2", "3", "4"]);
        assert!(results.iter().all(|m| m.distance_km.is_none()));
    }

    #[test]
    fn test_text_search_matches_title_company_description() {
        let criteria = SearchCriteria {
            query: "RUST".to_string(),
            ..Default::default()
        };
        let results = run_search(&fixtures(), &criteria, DEFAULT_RADIUS_KM);
        assert_eq!(ids(&results), vec!["1", "3"]);

        let by_company = SearchCriteria {
            query: "numbers".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&run_search(&fixtures(), &by_company, 50.0)), vec!["2"]);
    }

    #[test]
    fn test_city_filter_ignores_case_and_all() {
        let criteria = SearchCriteria {
            city: Some(" delhi ".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&run_search(&fixtures(), &criteria, 50.0)), vec!["2"]);

        let all = SearchCriteria {
            city: Some("All".to_string()),
            ..Default::default()
        };
        assert_eq!(run_search(&fixtures(), &all, 50.0).len(), 4);
    }

    #[test]
    fn test_radius_filter_around_delhi() {
        let criteria = SearchCriteria {
            reference: lookup_city("Delhi"),
            ..Default::default()
        };
        let results = run_search(&fixtures(), &criteria, DEFAULT_RADIUS_KM);
        // Noida is ~25 km from Delhi, Mumbai ~1150 km away
        assert_eq!(ids(&results), vec!["2", "3"]);
        assert_eq!(results[0].distance_km, Some(0.0));
    }

    #[test]
    fn test_no_reference_keeps_all_regardless_of_radius() {
        let criteria = SearchCriteria {
            radius_km: Some(0.0),
            ..Default::default()
        };
        assert_eq!(run_search(&fixtures(), &criteria, 0.0).len(), 4);
    }

    #[test]
    fn test_zero_radius_keeps_only_coincident() {
        let criteria = SearchCriteria {
            reference: lookup_city("Mumbai"),
            radius_km: Some(0.0),
            ..Default::default()
        };
        assert_eq!(ids(&run_search(&fixtures(), &criteria, 50.0)), vec!["1"]);
    }

    #[test]
    fn test_results_sorted_by_distance() {
        let criteria = SearchCriteria {
            reference: lookup_city("Delhi"),
            radius_km: Some(5000.0),
            ..Default::default()
        };
        let results = run_search(&fixtures(), &criteria, DEFAULT_RADIUS_KM);
        let distances: Vec<f64> = results.iter().filter_map(|m| m.distance_km).collect();
        assert_eq!(distances.len(), 4);
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(results[0].posting.id, "2");
    }

    #[test]
    fn test_sort_can_be_disabled() {
        let criteria = SearchCriteria {
            reference: lookup_city("Mumbai"),
            radius_km: Some(5000.0),
            sort_by_distance: false,
            ..Default::default()
        };
        let results = run_search(&fixtures(), &criteria, DEFAULT_RADIUS_KM);
        assert_eq!(ids(&results), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_pipeline_combines_filters() {
        let criteria = SearchCriteria {
            query: "rust".to_string(),
            city: Some("Mumbai".to_string()),
            reference: lookup_city("Delhi"),
            ..Default::default()
        };
        // text keeps 1 and 3, city keeps 1, radius drops Mumbai
        assert!(run_search(&fixtures(), &criteria, DEFAULT_RADIUS_KM).is_empty());
    }

    #[test]
    fn test_criteria_json_defaults() {
        let c: SearchCriteria = serde_json::from_str("{}").unwrap();
        assert_eq!(c, SearchCriteria::default());
    }
}
