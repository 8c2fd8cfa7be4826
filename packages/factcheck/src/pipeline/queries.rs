//! Evidence search query planning.
//!
//! The plan encodes an explicit trust hierarchy: dedicated fact-checkers
//! first, wire services second, generic corroboration and analysis last.
//! Earlier queries are issued first, so when the evidence quota fills
//! early it fills from the most trusted shapes.

/// Dedicated fact-checking sites, queried first.
pub const FACT_CHECK_SITES: [&str; 3] = ["factcheck.org", "snopes.com", "politifact.com"];

/// Wire services and public broadcasters, queried second.
pub const WIRE_SERVICES: [&str; 3] = ["reuters.com", "ap.org", "bbc.com"];

/// Generate the ordered query plan for one claim.
///
/// Uses the first search term as the primary probe and the first two for
/// the corroboration/analysis shapes; when no search terms were supplied
/// the claim text itself stands in as the single term. With two or more
/// terms the plan is exactly 14 queries.
pub fn plan_queries(claim_text: &str, search_terms: &[String]) -> Vec<String> {
    let terms: Vec<&str> = if search_terms.is_empty() {
        vec![claim_text]
    } else {
        search_terms.iter().map(String::as_str).collect()
    };
    let primary = terms[0];

    let mut queries = Vec::with_capacity(14);

    // Fact-checking sites first (highest priority)
    for site in FACT_CHECK_SITES {
        queries.push(format!("site:{site} {primary}"));
    }

    // Credible news sources
    for site in WIRE_SERVICES {
        queries.push(format!("site:{site} {primary}"));
    }

    // General fact-checking queries
    queries.push(format!("\"{primary}\" fact check"));
    queries.push(format!("\"{primary}\" verified OR confirmed"));

    // Research and data queries
    for term in terms.iter().take(2) {
        queries.push(format!("{term} study OR research"));
        queries.push(format!("{term} report OR data"));
    }

    // Analysis and expert opinion queries
    for term in terms.iter().take(2) {
        queries.push(format!("{term} analysis"));
        queries.push(format!("{term} expert opinion"));
    }

    queries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_terms_yield_fourteen_queries() {
        let queries = plan_queries("claim", &terms(&["tariffs", "trade deficit"]));
        assert_eq!(queries.len(), 14);
    }

    #[test]
    fn test_priority_order() {
        let queries = plan_queries("claim", &terms(&["tariffs", "trade deficit"]));
        assert_eq!(queries[0], "site:factcheck.org tariffs");
        assert_eq!(queries[1], "site:snopes.com tariffs");
        assert_eq!(queries[2], "site:politifact.com tariffs");
        assert_eq!(queries[3], "site:reuters.com tariffs");
        assert_eq!(queries[5], "site:bbc.com tariffs");
        assert_eq!(queries[6], "\"tariffs\" fact check");
        assert_eq!(queries[7], "\"tariffs\" verified OR confirmed");
        assert_eq!(queries[8], "tariffs study OR research");
        assert_eq!(queries[9], "tariffs report OR data");
        assert_eq!(queries[10], "trade deficit study OR research");
        assert_eq!(queries[11], "trade deficit report OR data");
        assert_eq!(queries[12], "tariffs analysis");
        assert_eq!(queries[13], "trade deficit expert opinion");
    }

    #[test]
    fn test_single_term_shrinks_tail_steps() {
        let queries = plan_queries("claim", &terms(&["tariffs"]));
        // 3 fact-check + 3 wire + 2 general + 2 research + 2 analysis
        assert_eq!(queries.len(), 12);
        assert!(queries.iter().all(|q| !q.contains("trade deficit")));
    }

    #[test]
    fn test_extra_terms_beyond_two_are_ignored() {
        let queries = plan_queries("claim", &terms(&["a", "b", "c", "d"]));
        assert_eq!(queries.len(), 14);
        assert!(!queries.iter().any(|q| q.starts_with("c ") || q.starts_with("d ")));
    }

    #[test]
    fn test_empty_terms_fall_back_to_claim_text() {
        let queries = plan_queries("prices rose sharply", &[]);
        assert_eq!(queries.len(), 12);
        assert_eq!(queries[0], "site:factcheck.org prices rose sharply");
        assert_eq!(queries[8], "prices rose sharply study OR research");
    }
}
